//! memmove contra o modelo de referência com buffer temporário

#![cfg(test)]

use crate::ops::{memcpy, memmove};

const BUF_LEN: usize = 24;

fn pattern() -> [u8; BUF_LEN] {
    let mut buf = [0u8; BUF_LEN];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = 0xA0 ^ i as u8;
    }
    buf
}

/// Copia a origem inteira para um temporário e depois para o destino.
fn reference_move(buf: &mut [u8], dst: usize, src: usize, len: usize) {
    let tmp: Vec<u8> = buf[src..src + len].to_vec();
    buf[dst..dst + len].copy_from_slice(&tmp);
}

fn run_move(buf: &mut [u8], dst: usize, src: usize, len: usize) {
    let p = buf.as_mut_ptr();
    let ret = unsafe { memmove(p.add(dst), p.add(src), len) };
    assert_eq!(ret, p.wrapping_add(dst));
}

fn assert_matches_reference(dst: usize, src: usize, len: usize) {
    let mut expected = pattern();
    reference_move(&mut expected, dst, src, len);

    let mut actual = pattern();
    run_move(&mut actual, dst, src, len);

    assert_eq!(actual, expected, "dst={} src={} len={}", dst, src, len);
}

#[test]
fn test_dst_before_src_with_overlap() {
    assert_matches_reference(0, 3, 10);
    assert_matches_reference(4, 5, 19);
}

#[test]
fn test_dst_after_src_with_overlap() {
    assert_matches_reference(3, 0, 10);
    assert_matches_reference(5, 4, 19);
}

#[test]
fn test_dst_equals_src() {
    assert_matches_reference(7, 7, 12);
}

#[test]
fn test_disjoint_matches_memcpy() {
    let (dst, src, len) = (14, 2, 10);

    let mut moved = pattern();
    run_move(&mut moved, dst, src, len);

    let mut copied = pattern();
    let p = copied.as_mut_ptr();
    unsafe { memcpy(p.add(dst), p.add(src), len) };

    assert_eq!(moved, copied);
}

#[test]
fn test_every_offset_and_length() {
    for len in 0..=BUF_LEN {
        for dst in 0..=BUF_LEN - len {
            for src in 0..=BUF_LEN - len {
                assert_matches_reference(dst, src, len);
            }
        }
    }
}

#[test]
fn test_bytes_outside_destination_untouched() {
    let mut buf = pattern();
    run_move(&mut buf, 6, 4, 8);

    let original = pattern();
    assert_eq!(buf[..6], original[..6]);
    assert_eq!(buf[14..], original[14..]);
}
