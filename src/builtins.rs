//! # Compiler Builtins
//!
//! Exporta as primitivas com os nomes C que o compilador chama
//! implicitamente (cópias de structs, zeragem de arrays, comparações).
//! Marcadas com #[no_mangle] para o linker.
//!
//! Só compilado com a feature `c_symbols` e nunca em `cfg(test)`: num
//! processo hospedado esses símbolos substituiriam os da libc.

use core::ffi::c_int;

use crate::ops;

#[no_mangle]
pub unsafe extern "C" fn memset(s: *mut u8, c: c_int, n: usize) -> *mut u8 {
    ops::memset(s, c, n)
}

#[no_mangle]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    ops::memcpy(dest, src, n)
}

#[no_mangle]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    ops::memmove(dest, src, n)
}

#[no_mangle]
pub unsafe extern "C" fn memcmp(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    ops::memcmp(s1, s2, n)
}

#[no_mangle]
pub unsafe extern "C" fn strlen(s: *const u8) -> usize {
    ops::strlen(s)
}
