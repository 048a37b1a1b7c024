//! Forge Memops.
//!
//! Primitivas de memória freestanding do Redstone OS: `memset`, `memcpy`,
//! `memmove`, `memcmp` e `strlen`, usadas por todo o resto do kernel antes
//! de existir qualquer outra coisa.
//!
//! Todas operam sobre regiões cruas (ponteiro + tamanho) que pertencem ao
//! chamador, não alocam, não bloqueiam e aceitam tamanho zero com qualquer
//! ponteiro, inclusive nulo.

#![cfg_attr(not(test), no_std)]

// --- Saída de Diagnóstico ---
pub mod logging; // Macros kinfo!/kerror!/... (zero-overhead)
pub mod sink; // Destino dos logs, instalado pelo host

// --- Contrato ---
pub mod config; // Constantes e verificações ativas
pub mod contract; // Asserções de pré-condição (debug)
pub mod error; // MemError / MemResult

// --- Primitivas ---
pub mod ops;

#[cfg(all(feature = "c_symbols", not(test)))]
pub mod builtins; // Símbolos C (#[no_mangle])

// --- Diagnóstico ---
pub mod dump; // Hexdump / dump binário

#[cfg(feature = "self_test")]
pub mod selftest;
pub mod test_framework;

#[cfg(test)]
mod tests;

pub use crate::error::{MemError, MemResult};
pub use crate::ops::{c_str, c_str_with_nul, memcmp, memcpy, memmove, memset, strlen};
pub use crate::sink::LogSink;
