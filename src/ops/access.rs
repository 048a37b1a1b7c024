//! Acesso volátil byte-a-byte usado por todas as primitivas.
//!
//! Loops de load/store comuns seriam reconhecidos pelo compilador e
//! substituídos por chamadas a `memcpy`/`memset`, ou seja, pela própria
//! função sendo definida quando `c_symbols` está ativo.

use core::ptr::NonNull;
use volatile::VolatilePtr;

/// Leitura volatile de u8
///
/// # Safety
/// - `ptr` deve ser não-nulo e válido para leitura de 1 byte
#[inline(always)]
pub unsafe fn load(ptr: *const u8) -> u8 {
    VolatilePtr::new_read_only(NonNull::new_unchecked(ptr as *mut u8)).read()
}

/// Escrita volatile de u8
///
/// # Safety
/// - `ptr` deve ser não-nulo e válido para escrita de 1 byte
#[inline(always)]
pub unsafe fn store(ptr: *mut u8, val: u8) {
    VolatilePtr::new(NonNull::new_unchecked(ptr)).write(val);
}
