//! memcpy

use super::access::{load, store};
use crate::contract;

/// Copia `len` bytes de `src` para `dst` (sem overlap).
///
/// Retorna `dst`. Não é seguro para regiões sobrepostas; use `memmove`.
///
/// # Safety
/// - `src` válido para leitura e `dst` para escrita de `len` bytes
/// - As regiões não podem se sobrepor
#[inline]
pub unsafe fn memcpy(dst: *mut u8, src: *const u8, len: usize) -> *mut u8 {
    contract::verify_range("memcpy", dst, len);
    contract::verify_range("memcpy", src, len);
    contract::verify_disjoint("memcpy", dst, src, len);

    let mut i = 0usize;
    while i < len {
        store(dst.add(i), load(src.add(i)));
        i += 1;
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_and_leaves_source_intact() {
        let src = *b"redstone";
        let mut dst = [0u8; 8];
        let ret = unsafe { memcpy(dst.as_mut_ptr(), src.as_ptr(), src.len()) };
        assert_eq!(ret, dst.as_mut_ptr());
        assert_eq!(&dst, b"redstone");
        assert_eq!(&src, b"redstone");
    }

    #[test]
    fn test_adjacent_ranges_in_same_buffer() {
        let mut buf = *b"abcd----";
        let p = buf.as_mut_ptr();
        unsafe { memcpy(p.add(4), p, 4) };
        assert_eq!(&buf, b"abcdabcd");
    }

    #[test]
    fn test_zero_length_touches_nothing() {
        let null = core::ptr::null_mut::<u8>();
        assert_eq!(unsafe { memcpy(null, null, 0) }, null);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "memcpy: sobreposição")]
    fn test_overlap_rejected_in_debug() {
        let mut buf = [0u8; 8];
        let p = buf.as_mut_ptr();
        unsafe { memcpy(p.add(1), p, 4) };
    }
}
