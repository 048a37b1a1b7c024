//! # Dumps de Memória
//!
//! Hexdump e dump binário de regiões cruas, escritos num [`LogSink`].
//!
//! ```text
//! 00007f3a9c001000: 48 65 6c 6c 6f 2c 20 66   6f 72 67 65 21 00 01 02  |Hello, forge!...|
//! ```
//!
//! Sem core::fmt: cada campo é montado com os `write_*` de `sink`.

use crate::config::{BINDUMP_BYTES_PER_LINE, DUMP_ADDR_DIGITS, HEXDUMP_BYTES_PER_LINE, HEXDUMP_GROUP};
use crate::ops::access::load;
use crate::sink::{self, LogSink};

/// Hexdump de `len` bytes a partir de `ptr` no sink global.
///
/// # Safety
/// - `ptr` deve ser válido para leitura de `len` bytes
pub unsafe fn hexdump(ptr: *const u8, len: usize) {
    if let Some(out) = sink::current() {
        hexdump_to(out, ptr, len);
    }
}

/// Hexdump de `len` bytes a partir de `ptr` em `out`.
///
/// 16 bytes por linha, dois espaços extras após o 8º, coluna ASCII entre `|`.
/// A última linha, se incompleta, é preenchida para alinhar a coluna ASCII.
///
/// # Safety
/// - `ptr` deve ser válido para leitura de `len` bytes
pub unsafe fn hexdump_to(out: &dyn LogSink, ptr: *const u8, len: usize) {
    let mut line = 0usize;
    while line < len {
        let count = (len - line).min(HEXDUMP_BYTES_PER_LINE);
        let base = ptr.add(line);

        sink::write_hex_digits(out, base as u64, DUMP_ADDR_DIGITS);
        out.write_str(": ");

        let mut i = 0usize;
        while i < HEXDUMP_BYTES_PER_LINE {
            if i > 0 && i % HEXDUMP_GROUP == 0 {
                out.write_str("  ");
            }
            if i < count {
                sink::write_hex_digits(out, load(base.add(i)) as u64, 2);
                out.write_str(" ");
            } else {
                out.write_str("   ");
            }
            i += 1;
        }

        out.write_str(" |");
        let mut ascii = [0u8; HEXDUMP_BYTES_PER_LINE];
        let mut j = 0usize;
        while j < count {
            ascii[j] = printable(load(base.add(j)));
            j += 1;
        }
        out.write_str(core::str::from_utf8(&ascii[..count]).unwrap_or(""));
        out.write_str("|\r\n");

        line += count;
    }
}

/// Dump binário de `len` bytes a partir de `ptr` no sink global.
///
/// # Safety
/// - `ptr` deve ser válido para leitura de `len` bytes
pub unsafe fn bindump(ptr: *const u8, len: usize) {
    if let Some(out) = sink::current() {
        bindump_to(out, ptr, len);
    }
}

/// Dump binário: 4 bytes por linha, cada um com 8 dígitos.
///
/// # Safety
/// - `ptr` deve ser válido para leitura de `len` bytes
pub unsafe fn bindump_to(out: &dyn LogSink, ptr: *const u8, len: usize) {
    let mut i = 0usize;
    while i < len {
        if i % BINDUMP_BYTES_PER_LINE == 0 {
            sink::write_hex_digits(out, ptr.add(i) as u64, DUMP_ADDR_DIGITS);
            out.write_str(":    ");
        }
        out.write_str(" ");
        sink::write_bin_digits(out, load(ptr.add(i)) as u64, 8);
        i += 1;
        if i % BINDUMP_BYTES_PER_LINE == 0 || i == len {
            out.write_str("\r\n");
        }
    }
}

/// ASCII imprimível ou '.'
#[inline(always)]
const fn printable(b: u8) -> u8 {
    if b > 0x1f && b < 0x7f {
        b
    } else {
        b'.'
    }
}
