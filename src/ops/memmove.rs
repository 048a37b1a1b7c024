//! memmove
//!
//! Única primitiva com requisito de correção não trivial: origem e destino
//! podem se sobrepor, e o resultado deve ser o mesmo de copiar a origem
//! inteira para um buffer temporário e depois para o destino. Nenhum buffer
//! é usado; a direção da cópia é escolhida pelos endereços.

use super::access::{load, store};
use crate::contract;

/// Copia `len` bytes de `src` para `dst`, com overlap permitido.
///
/// Retorna `dst`.
///
/// # Safety
/// - `src` válido para leitura e `dst` para escrita de `len` bytes
#[inline]
pub unsafe fn memmove(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    contract::verify_range("memmove", dst, len);
    contract::verify_range("memmove", src, len);

    // Invariante dos dois ramos: o byte src[i] é lido antes de qualquer
    // escrita que possa cair sobre ele.
    if (dst as usize) < (src as usize) {
        // Destino antes da origem: para frente, 0 -> len-1.
        // Cada escrita em dst[i] fica atrás do cursor de leitura src[i].
        let mut i = 0usize;
        while i < len {
            store(dst.add(i), load(src.add(i)));
            i += 1;
        }
    } else {
        // Destino em ou depois da origem: para trás, len-1 -> 0.
        // Cada escrita em dst[i] fica à frente de todo src[j], j < i, ainda não lido.
        let mut i = len;
        while i > 0 {
            i -= 1;
            store(dst.add(i), load(src.add(i)));
        }
    }
    dst
}
