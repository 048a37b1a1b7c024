//! memset

use core::ffi::c_int;

use super::access::store;
use crate::contract;

/// Preenche `len` bytes a partir de `dst` com o byte baixo de `value`.
///
/// Retorna `dst` inalterado.
///
/// # Safety
/// - `dst` deve ser válido para escrita de `len` bytes (pode ser nulo se `len == 0`)
#[inline]
pub unsafe fn memset(dst: *mut u8, value: c_int, len: usize) -> *mut u8 {
    contract::verify_range("memset", dst, len);

    let byte = value as u8;
    let mut i = 0usize;
    while i < len {
        store(dst.add(i), byte);
        i += 1;
    }
    dst
}
