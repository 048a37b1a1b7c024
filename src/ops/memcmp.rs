//! memcmp

use core::ffi::c_int;

use super::access::load;
use crate::contract;

/// Compara `len` bytes de `a` e `b` como bytes sem sinal.
///
/// Retorna 0 se iguais, negativo se o primeiro byte diferente de `a` é
/// menor, positivo se maior. Só o sinal faz parte do contrato.
///
/// # Safety
/// - `a` e `b` devem ser válidos para leitura de `len` bytes
#[inline]
pub unsafe fn memcmp(a: *const u8, b: *const u8, len: usize) -> c_int {
    contract::verify_range("memcmp", a, len);
    contract::verify_range("memcmp", b, len);

    let mut i = 0usize;
    while i < len {
        let va = load(a.add(i));
        let vb = load(b.add(i));
        if va != vb {
            return va as c_int - vb as c_int;
        }
        i += 1;
    }
    0
}
