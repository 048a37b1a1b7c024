// =============================================================================
// MEMOPS LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging das primitivas de memória com custo ZERO em release.
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - Evita geração de código SSE/AVX
// - SEM alocação - Apenas strings e valores imediatos
// - Escreve no sink instalado pelo host (ver `sink`)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Violação de contrato, falha de self-test
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos
//
// FEATURES:
// - no_logs:   Remove 100% dos logs
// - log_error: ERROR, WARN, [OK]/[FAIL]
// - log_info:  + INFO
// - log_debug: + DEBUG
// - log_trace: Todos os níveis (padrão)
//
// USO:
//   kinfo!("(memops) Inicializando...");       // Apenas string
//   kinfo!("(memops) Addr=", 0x1000);          // String + hex
//   klog!("Start=", start, " End=", end);      // Múltiplos valores
//
// As primitivas NÃO logam no caminho de sucesso: um sink pode muito bem
// usar memcpy internamente.
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";
pub const P_OK: &str = "\x1b[32m[OK]\x1b[0m ";
pub const P_FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m ";
pub const P_SKIP: &str = "\x1b[33m[SKIP]\x1b[0m ";

/// Emite uma linha com prefixo de nível. Base de todos os macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __klog_line {
    ($prefix:expr, $msg:expr) => {{
        $crate::sink::emit_str($prefix);
        $crate::sink::emit_str($msg);
        $crate::sink::emit_nl();
    }};
    ($prefix:expr, $msg:expr, $val:expr) => {{
        $crate::sink::emit_str($prefix);
        $crate::sink::emit_str($msg);
        $crate::sink::emit_hex($val as u64);
        $crate::sink::emit_nl();
    }};
}

// =============================================================================
// MACROS DE LOG - ERROR / WARN
// =============================================================================
//
// Sempre ativos (exceto com no_logs).
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_ERROR, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klog_line!($crate::logging::P_ERROR, $msg, $val)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_WARN, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klog_line!($crate::logging::P_WARN, $msg, $val)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - INFO
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_INFO, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klog_line!($crate::logging::P_INFO, $msg, $val)
    };
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - DEBUG
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_DEBUG, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klog_line!($crate::logging::P_DEBUG, $msg, $val)
    };
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - TRACE
// =============================================================================

#[cfg(all(not(feature = "no_logs"), feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_TRACE, $msg)
    };
    ($msg:expr, $val:expr) => {
        $crate::__klog_line!($crate::logging::P_TRACE, $msg, $val)
    };
}

#[cfg(not(all(not(feature = "no_logs"), feature = "log_trace")))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// klog! - Log genérico sem prefixo de nível e sem newline.
///
/// # Uso
/// ```ignore
/// klog!("Addr=", addr);                    // String + hex
/// klog!("Start=", start, " End=", end);    // Múltiplos
/// ```
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! klog {
    ($msg:expr) => {{
        $crate::sink::emit_str($msg);
    }};
    ($msg:expr, $val:expr) => {{
        $crate::sink::emit_str($msg);
        $crate::sink::emit_hex($val as u64);
    }};
    ($msg1:expr, $val:expr, $msg2:expr) => {{
        $crate::sink::emit_str($msg1);
        $crate::sink::emit_hex($val as u64);
        $crate::sink::emit_str($msg2);
    }};
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        $crate::sink::emit_str($msg1);
        $crate::sink::emit_hex($val1 as u64);
        $crate::sink::emit_str($msg2);
        $crate::sink::emit_hex($val2 as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! klog {
    ($($t:tt)*) => {{}};
}

/// knl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! knl {
    () => {{
        $crate::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! knl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL/SKIP)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_OK, $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_FAIL, $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}

/// kskip! - Teste pulado (prefixo amarelo [SKIP]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kskip {
    ($msg:expr) => {
        $crate::__klog_line!($crate::logging::P_SKIP, $msg)
    };
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kskip {
    ($($t:tt)*) => {{}};
}
