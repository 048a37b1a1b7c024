//! # Configuração das Primitivas de Memória
//!
//! Define constantes e o conjunto de verificações de contrato ativas.

use bitflags::bitflags;

// =============================================================================
// VERIFICAÇÕES DE CONTRATO
// =============================================================================

bitflags! {
    /// Pré-condições que a camada `contract` sabe verificar
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Checks: u32 {
        /// Ponteiro nulo com `len > 0`
        const NULL_POINTER  = 1 << 0;
        /// `ptr + len` estoura o espaço de endereçamento
        const ADDRESS_WRAP  = 1 << 1;
        /// Origem e destino de memcpy se sobrepõem
        const COPY_OVERLAP  = 1 << 2;
    }
}

impl Checks {
    /// Verificações aplicáveis a uma região isolada
    pub const RANGE: Self = Self::NULL_POINTER.union(Self::ADDRESS_WRAP);
}

/// Verificações compiladas nas primitivas.
///
/// Todas em debug (ou com a feature `contract_checks`), nenhuma em release.
pub const ENABLED_CHECKS: Checks = if cfg!(any(debug_assertions, feature = "contract_checks")) {
    Checks::all()
} else {
    Checks::empty()
};

// =============================================================================
// DUMPS DE MEMÓRIA
// =============================================================================

/// Bytes por linha do hexdump
pub const HEXDUMP_BYTES_PER_LINE: usize = 16;

/// Espaço extra a cada N bytes no hexdump
pub const HEXDUMP_GROUP: usize = 8;

/// Bytes por linha do dump binário
pub const BINDUMP_BYTES_PER_LINE: usize = 4;

/// Dígitos hexadecimais do endereço no início de cada linha
pub const DUMP_ADDR_DIGITS: usize = core::mem::size_of::<usize>() * 2;
