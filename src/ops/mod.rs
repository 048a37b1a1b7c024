//! # Operações de Memória
//!
//! As cinco primitivas freestanding. Cada uma é independente das outras
//! (memcpy NÃO delega para memmove) e todas acessam a memória byte-a-byte
//! através de [`access`].
//!
//! | Função    | Overlap   | Retorno              |
//! |-----------|-----------|----------------------|
//! | `memset`  | n/a       | `dst`                |
//! | `memcpy`  | proibido  | `dst`                |
//! | `memmove` | permitido | `dst`                |
//! | `memcmp`  | n/a       | sinal da comparação  |
//! | `strlen`  | n/a       | bytes antes do `\0`  |
//!
//! Nenhuma reporta erro: pré-condições violadas são comportamento
//! indefinido, exceto quando a camada `contract` está ativa.

// =============================================================================
// MODULOS DE IMPLEMENTAÇÃO
// =============================================================================

pub mod access;

mod memcmp;
mod memcpy;
mod memmove;
mod memset;
mod strlen;

// =============================================================================
// INTERFACE PÚBLICA
// =============================================================================

pub use memcmp::memcmp;
pub use memcpy::memcpy;
pub use memmove::memmove;
pub use memset::memset;
pub use strlen::{c_str, c_str_with_nul, strlen};
