//! Tipos de Erro das Primitivas de Memória
//!
//! As primitivas nunca retornam erro: violar o contrato é comportamento
//! indefinido. Estes tipos existem para a camada de verificação
//! (`contract`), que diagnostica a violação antes de abortar.

/// Violações de contrato detectáveis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemError {
    /// Ponteiro nulo com tamanho diferente de zero
    NullPointer,
    /// `ptr + len` ultrapassa o fim do espaço de endereçamento
    AddressOverflow,
    /// Regiões de origem e destino se sobrepõem (memcpy)
    Overlap,
}

impl MemError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NullPointer => "ponteiro nulo com tamanho não-zero",
            Self::AddressOverflow => "região ultrapassa o fim do espaço de endereçamento",
            Self::Overlap => "sobreposição entre origem e destino",
        }
    }
}

impl core::fmt::Display for MemError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tipo Result específico para verificações de memória
pub type MemResult<T> = Result<T, MemError>;
