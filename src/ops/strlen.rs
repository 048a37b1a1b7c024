//! strlen e views de strings C.

use super::access::load;
use crate::contract;

/// Calcula tamanho de string terminada em nulo (sem contar o terminador).
///
/// Nunca lê além do primeiro byte zero.
///
/// # Safety
/// - `s` deve apontar para uma sequência terminada em `0` dentro de memória
///   acessível; sem terminador, a leitura passa do fim (UB)
#[inline]
pub unsafe fn strlen(s: *const u8) -> usize {
    contract::verify_c_str("strlen", s);

    let mut len = 0usize;
    while load(s.add(len)) != 0 {
        len += 1;
    }
    len
}

/// Bytes de uma string C, sem o terminador.
///
/// # Safety
/// Mesmas condições de [`strlen`]; além disso a memória deve permanecer
/// válida e imutável durante `'a`.
pub unsafe fn c_str<'a>(s: *const u8) -> &'a [u8] {
    core::slice::from_raw_parts(s, strlen(s))
}

/// Bytes de uma string C, incluindo o terminador.
///
/// # Safety
/// Mesmas condições de [`c_str`].
pub unsafe fn c_str_with_nul<'a>(s: *const u8) -> &'a [u8] {
    core::slice::from_raw_parts(s, strlen(s) + 1)
}
