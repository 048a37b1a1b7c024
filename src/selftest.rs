//! Testes de Boot das Primitivas de Memória
//!
//! Valida as cinco primitivas no alvo real, com o código exato que o
//! runtime vai usar. Todos os resultados vão para o sink de log.
//!
//! # Uso
//! Chamar `run_memops_tests()` logo após instalar o sink, antes de qualquer
//! subsistema que dependa de memcpy/memmove.

use crate::ops::{memcmp, memcpy, memmove, memset, strlen};
use crate::test_framework::{run_test_suite, SuiteReport, TestCase, TestResult};

/// Executa todos os testes de memops no boot
pub fn run_memops_tests() -> SuiteReport {
    crate::kinfo!("╔════════════════════════════════════════╗");
    crate::kinfo!("║     🧪 TESTES DE MEMOPS                ║");
    crate::kinfo!("╚════════════════════════════════════════╝");

    let report = run_test_suite(
        "memops",
        &[
            TestCase { name: "memset", func: test_memset },
            TestCase { name: "memcpy", func: test_memcpy },
            TestCase { name: "memmove (overlap p/ frente)", func: test_memmove_forward },
            TestCase { name: "memmove (overlap p/ trás)", func: test_memmove_backward },
            TestCase { name: "memmove (mesmo endereço)", func: test_memmove_identity },
            TestCase { name: "memcmp", func: test_memcmp },
            TestCase { name: "strlen", func: test_strlen },
            TestCase { name: "len zero", func: test_zero_length },
        ],
    );

    if report.is_ok() {
        crate::kinfo!("╔════════════════════════════════════════╗");
        crate::kinfo!("║  ✅ MEMOPS VALIDADO!                   ║");
        crate::kinfo!("╚════════════════════════════════════════╝");
    } else {
        crate::kerror!("(memops) Self-test falhou: falhas=", report.failed);
    }
    report
}

#[inline(always)]
fn check(cond: bool) -> TestResult {
    if cond {
        TestResult::Passed
    } else {
        TestResult::Failed
    }
}

fn test_memset() -> TestResult {
    let mut buf = [0u8; 16];
    let p = buf.as_mut_ptr();
    let ret = unsafe { memset(p.add(4), 0x1AB, 8) };

    let mut ok = ret == p.wrapping_add(4);
    let mut i = 0usize;
    while i < buf.len() {
        let expected = if (4..12).contains(&i) { 0xAB } else { 0 };
        ok &= buf[i] == expected;
        i += 1;
    }
    check(ok)
}

fn test_memcpy() -> TestResult {
    let src = *b"Redstone";
    let mut dst = [0u8; 8];
    unsafe { memcpy(dst.as_mut_ptr(), src.as_ptr(), 8) };
    check(dst == src && &src == b"Redstone")
}

fn test_memmove_forward() -> TestResult {
    let mut buf = *b"ABCDEFGH";
    let p = buf.as_mut_ptr();
    unsafe { memmove(p.add(2), p, 5) };
    check(&buf == b"ABABCDEH")
}

fn test_memmove_backward() -> TestResult {
    let mut buf = *b"ABCDEFGH";
    let p = buf.as_mut_ptr();
    unsafe { memmove(p, p.add(2), 5) };
    check(&buf == b"CDEFGFGH")
}

fn test_memmove_identity() -> TestResult {
    let mut buf = *b"ABCDEFGH";
    let p = buf.as_mut_ptr();
    unsafe { memmove(p, p, 8) };
    check(&buf == b"ABCDEFGH")
}

fn test_memcmp() -> TestResult {
    let a = [0x01u8, 0x80];
    let b = [0x01u8, 0x7F];
    let (ab, ba, aa, empty) = unsafe {
        (
            memcmp(a.as_ptr(), b.as_ptr(), 2),
            memcmp(b.as_ptr(), a.as_ptr(), 2),
            memcmp(a.as_ptr(), a.as_ptr(), 2),
            memcmp(a.as_ptr(), b.as_ptr(), 0),
        )
    };
    check(ab > 0 && ba < 0 && aa == 0 && empty == 0)
}

fn test_strlen() -> TestResult {
    let (hello, empty) = unsafe { (strlen(b"hello\0".as_ptr()), strlen(b"\0".as_ptr())) };
    check(hello == 5 && empty == 0)
}

fn test_zero_length() -> TestResult {
    let null = core::ptr::null_mut::<u8>();
    let ok = unsafe {
        memset(null, 0xFF, 0) == null
            && memcpy(null, null, 0) == null
            && memmove(null, null, 0) == null
            && memcmp(null, null, 0) == 0
    };
    check(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_suite_passes() {
        let report = run_memops_tests();
        assert_eq!(report.failed, 0);
        assert_eq!(report.passed, 8);
    }
}
