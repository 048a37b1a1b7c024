// =============================================================================
// LOG SINK - ZERO OVERHEAD
// =============================================================================
//
// Destino plugável para a saída dos macros de log e dos dumps de memória.
//
// ARQUITETURA:
// As primitivas desta crate rodam antes de qualquer driver existir, então
// ela não escolhe para onde os logs vão. O runtime hospedeiro instala UM
// sink (COM1 no kernel, buffer em testes) e todas as funções emit_* passam
// a escrever nele:
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação - Apenas strings literais e buffers de stack
// - SEM sink instalado - Toda emissão é descartada silenciosamente
//
// FUNÇÕES DISPONÍVEIS:
// - emit_str(s)      : Envia string
// - emit_hex(v)      : Envia u64 em hexadecimal (0x + 16 dígitos)
// - emit_dec(v)      : Envia usize em decimal
// - emit_nl()        : Envia newline (\r\n)
//
// Cada emit_* tem uma versão write_* que recebe o sink explicitamente,
// usada pelos dumps para escrever num destino que não é o global.
//
// =============================================================================

use spin::Once;

/// Destino de saída de texto.
///
/// Implementações não devem chamar de volta os macros de log.
pub trait LogSink: Sync {
    /// Escreve uma fatia de texto, sem adicionar newline.
    fn write_str(&self, s: &str);
}

static SINK: Once<&'static dyn LogSink> = Once::new();

/// Instala o sink global.
///
/// Só o primeiro chamador vence; retorna `false` se já havia um sink.
pub fn install(sink: &'static dyn LogSink) -> bool {
    let mut installed = false;
    SINK.call_once(|| {
        installed = true;
        sink
    });
    if installed {
        crate::kdebug!("(klog) Sink de log instalado");
    }
    installed
}

/// Sink atualmente instalado, se houver.
#[inline]
pub fn current() -> Option<&'static dyn LogSink> {
    SINK.get().copied()
}

// =============================================================================
// FUNÇÕES DE ESCRITA - SINK GLOBAL
// =============================================================================

/// Envia uma string para o sink global.
#[inline(never)]
pub fn emit_str(s: &str) {
    if let Some(sink) = current() {
        sink.write_str(s);
    }
}

/// Envia uma nova linha (CRLF) para o sink global.
#[inline(never)]
pub fn emit_nl() {
    emit_str("\r\n");
}

/// Envia um valor u64 em formato hexadecimal.
///
/// Formato de saída: 0x0123456789ABCDEF (sempre 18 caracteres)
#[inline(never)]
pub fn emit_hex(value: u64) {
    if let Some(sink) = current() {
        write_hex(sink, value);
    }
}

/// Envia um valor usize em formato decimal.
#[inline(never)]
pub fn emit_dec(value: usize) {
    if let Some(sink) = current() {
        write_dec(sink, value);
    }
}

// =============================================================================
// FUNÇÕES DE ESCRITA - SINK EXPLÍCITO
// =============================================================================

/// Escreve `value` como 0x + 16 dígitos hexadecimais maiúsculos.
pub fn write_hex(sink: &dyn LogSink, value: u64) {
    let mut buf = [0u8; 18];
    buf[0] = b'0';
    buf[1] = b'x';
    fill_digits(&mut buf[2..], value, 4, false);
    sink.write_str(as_ascii(&buf));
}

/// Escreve `value` em decimal, sem zeros à esquerda.
pub fn write_dec(sink: &dyn LogSink, mut value: usize) {
    // Buffer para dígitos (max 20 para u64)
    let mut buf = [0u8; 20];
    let mut pos = buf.len();

    if value == 0 {
        sink.write_str("0");
        return;
    }

    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }

    sink.write_str(as_ascii(&buf[pos..]));
}

/// Escreve os `digits` nibbles menos significativos de `value` em hex
/// minúsculo, sem prefixo. Usado pelos dumps (`41`, `00001000`).
pub fn write_hex_digits(sink: &dyn LogSink, value: u64, digits: usize) {
    let mut buf = [0u8; 16];
    let digits = digits.min(buf.len());
    fill_digits(&mut buf[..digits], value, 4, true);
    sink.write_str(as_ascii(&buf[..digits]));
}

/// Escreve os `digits` bits menos significativos de `value` em binário.
pub fn write_bin_digits(sink: &dyn LogSink, value: u64, digits: usize) {
    let mut buf = [0u8; 64];
    let digits = digits.min(buf.len());
    fill_digits(&mut buf[..digits], value, 1, true);
    sink.write_str(as_ascii(&buf[..digits]));
}

// =============================================================================
// FUNÇÕES AUXILIARES
// =============================================================================

/// Preenche `out` com os dígitos de `value` na base 2^`bits`,
/// o mais significativo primeiro.
fn fill_digits(out: &mut [u8], value: u64, bits: u32, lowercase: bool) {
    let mask = (1u64 << bits) - 1;
    let mut shift = 0u32;
    let mut i = out.len();
    while i > 0 {
        i -= 1;
        let digit = if shift < 64 { (value >> shift) & mask } else { 0 };
        out[i] = nibble_to_ascii(digit as u8, lowercase);
        shift += bits;
    }
}

/// Converte nibble (0-15) para caractere ASCII.
#[inline(always)]
const fn nibble_to_ascii(n: u8, lowercase: bool) -> u8 {
    if n < 10 {
        b'0' + n
    } else if lowercase {
        b'a' + (n - 10)
    } else {
        b'A' + (n - 10)
    }
}

/// Os buffers montados aqui contêm apenas ASCII.
#[inline(always)]
fn as_ascii(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or("?")
}
