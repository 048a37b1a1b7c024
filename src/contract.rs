//! # Verificação de Contrato
//!
//! Camada opcional de asserções sobre as pré-condições das primitivas.
//!
//! As funções `check_*` são puras: recebem o conjunto de verificações e
//! devolvem `MemResult`. As `verify_*` são o que as primitivas chamam; usam
//! `config::ENABLED_CHECKS` e, em caso de violação, logam e abortam como um
//! `debug_assert!`. Regiões de tamanho zero sempre passam.

use crate::config::{Checks, ENABLED_CHECKS};
use crate::error::{MemError, MemResult};

/// Valida uma região `[ptr, ptr + len)`.
pub fn check_range(ptr: *const u8, len: usize, checks: Checks) -> MemResult<()> {
    if len == 0 {
        return Ok(());
    }
    if checks.contains(Checks::NULL_POINTER) && ptr.is_null() {
        return Err(MemError::NullPointer);
    }
    // Último byte inclusivo: uma região pode terminar em usize::MAX
    if checks.contains(Checks::ADDRESS_WRAP) && (ptr as usize).checked_add(len - 1).is_none() {
        return Err(MemError::AddressOverflow);
    }
    Ok(())
}

/// Valida que `[dst, dst + len)` e `[src, src + len)` são disjuntas.
pub fn check_disjoint(dst: *const u8, src: *const u8, len: usize, checks: Checks) -> MemResult<()> {
    if len == 0 || !checks.contains(Checks::COPY_OVERLAP) {
        return Ok(());
    }
    let d = dst as usize;
    let s = src as usize;
    // Fins inclusivos; uma região que estoura já foi reportada por check_range
    let overlap = d <= s.saturating_add(len - 1) && s <= d.saturating_add(len - 1);
    if overlap {
        return Err(MemError::Overlap);
    }
    Ok(())
}

/// Valida o ponteiro de uma string terminada em nulo.
///
/// A terminação em si não é verificável sem ler a memória.
pub fn check_c_str(s: *const u8, checks: Checks) -> MemResult<()> {
    if checks.contains(Checks::NULL_POINTER) && s.is_null() {
        return Err(MemError::NullPointer);
    }
    Ok(())
}

// =============================================================================
// PONTOS DE CHAMADA DAS PRIMITIVAS
// =============================================================================

#[inline(always)]
pub(crate) fn verify_range(op: &'static str, ptr: *const u8, len: usize) {
    if ENABLED_CHECKS.intersects(Checks::RANGE) {
        if let Err(err) = check_range(ptr, len, ENABLED_CHECKS) {
            violation(op, err);
        }
    }
}

#[inline(always)]
pub(crate) fn verify_disjoint(op: &'static str, dst: *const u8, src: *const u8, len: usize) {
    if ENABLED_CHECKS.contains(Checks::COPY_OVERLAP) {
        if let Err(err) = check_disjoint(dst, src, len, ENABLED_CHECKS) {
            violation(op, err);
        }
    }
}

#[inline(always)]
pub(crate) fn verify_c_str(op: &'static str, s: *const u8) {
    if ENABLED_CHECKS.contains(Checks::NULL_POINTER) {
        if let Err(err) = check_c_str(s, ENABLED_CHECKS) {
            violation(op, err);
        }
    }
}

#[cold]
#[inline(never)]
fn violation(op: &'static str, err: MemError) -> ! {
    crate::kerror!("(memops) Violação de contrato detectada");
    crate::kerror!(op);
    crate::kerror!(err.as_str());
    panic!("{}: {}", op, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_always_passes() {
        let null = core::ptr::null::<u8>();
        assert_eq!(check_range(null, 0, Checks::all()), Ok(()));
        assert_eq!(check_disjoint(null, null, 0, Checks::all()), Ok(()));

        let top = usize::MAX as *const u8;
        assert_eq!(check_range(top, 0, Checks::all()), Ok(()));
    }

    #[test]
    fn test_null_pointer_detected() {
        let null = core::ptr::null::<u8>();
        assert_eq!(check_range(null, 1, Checks::all()), Err(MemError::NullPointer));
        assert_eq!(check_c_str(null, Checks::all()), Err(MemError::NullPointer));

        // Verificação desligada: nada é reportado
        assert_eq!(check_range(null, 1, Checks::ADDRESS_WRAP), Ok(()));
        assert_eq!(check_c_str(null, Checks::empty()), Ok(()));
    }

    #[test]
    fn test_address_wrap_detected() {
        let top = (usize::MAX - 3) as *const u8;
        assert_eq!(check_range(top, 4, Checks::all()), Ok(()));
        assert_eq!(check_range(top, 5, Checks::all()), Err(MemError::AddressOverflow));
        assert_eq!(check_range(top, 5, Checks::NULL_POINTER), Ok(()));
    }

    #[test]
    fn test_range_ending_at_last_byte() {
        // Última página de um kernel higher-half
        let last_page = 0xFFFF_FFFF_FFFF_F000u64 as usize as *const u8;
        let page = 0x1000usize;
        if cfg!(target_pointer_width = "64") {
            assert_eq!(check_range(last_page, page, Checks::all()), Ok(()));
            assert_eq!(check_range(last_page, page + 1, Checks::all()), Err(MemError::AddressOverflow));
        }

        let last = usize::MAX as *const u8;
        assert_eq!(check_range(last, 1, Checks::all()), Ok(()));
        assert_eq!(check_range(last, 2, Checks::all()), Err(MemError::AddressOverflow));
    }

    #[test]
    fn test_overlap_detection() {
        let buf = [0u8; 16];
        let base = buf.as_ptr();
        let at = |off: usize| base.wrapping_add(off);

        // Adjacentes não se sobrepõem
        assert_eq!(check_disjoint(at(0), at(8), 8, Checks::all()), Ok(()));
        assert_eq!(check_disjoint(at(8), at(0), 8, Checks::all()), Ok(()));

        assert_eq!(check_disjoint(at(0), at(7), 8, Checks::all()), Err(MemError::Overlap));
        assert_eq!(check_disjoint(at(7), at(0), 8, Checks::all()), Err(MemError::Overlap));
        assert_eq!(check_disjoint(at(3), at(3), 1, Checks::all()), Err(MemError::Overlap));

        assert_eq!(check_disjoint(at(0), at(7), 8, Checks::RANGE), Ok(()));
    }

    #[test]
    fn test_overlap_on_last_byte_of_address_space() {
        let d = (usize::MAX - 3) as *const u8;
        let s = usize::MAX as *const u8;
        assert_eq!(check_disjoint(d, s, 1, Checks::all()), Ok(()));
        assert_eq!(check_disjoint(d, s, 4, Checks::all()), Err(MemError::Overlap));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MemError::Overlap.as_str(), "sobreposição entre origem e destino");
        assert_eq!(MemError::NullPointer.to_string(), MemError::NullPointer.as_str());
    }
}
