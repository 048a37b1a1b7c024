//! Utilitários e suites de teste compartilhados

#![cfg(test)]

mod overlap;

use spin::Mutex;

use crate::sink::LogSink;

/// Sink que acumula a saída em memória.
pub struct CaptureSink {
    buf: Mutex<String>,
}

impl CaptureSink {
    pub const fn new() -> Self {
        Self {
            buf: Mutex::new(String::new()),
        }
    }

    /// Retorna e limpa o conteúdo acumulado.
    pub fn take(&self) -> String {
        core::mem::take(&mut *self.buf.lock())
    }
}

impl LogSink for CaptureSink {
    fn write_str(&self, s: &str) {
        self.buf.lock().push_str(s);
    }
}

/// Gerador determinístico (xorshift64) para padrões de teste.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn fill(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.next_u64() as u8;
        }
    }
}
