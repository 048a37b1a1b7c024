//! Framework de testes de boot

/// Resultado de teste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed,
    Skipped,
}

/// Um caso de teste
pub struct TestCase {
    pub name: &'static str,
    pub func: fn() -> TestResult,
}

/// Contagem de resultados de uma suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl SuiteReport {
    /// Nenhuma falha
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Executa suite de testes
pub fn run_test_suite(name: &str, tests: &[TestCase]) -> SuiteReport {
    crate::klog!("=== Executando suite: ");
    crate::klog!(name);
    crate::knl!();

    let mut report = SuiteReport::default();

    for test in tests {
        match (test.func)() {
            TestResult::Passed => {
                crate::kok!(test.name);
                report.passed += 1;
            }
            TestResult::Failed => {
                crate::kfail!(test.name);
                report.failed += 1;
            }
            TestResult::Skipped => {
                crate::kskip!(test.name);
                report.skipped += 1;
            }
        }
    }

    crate::kinfo!("Resultados: passed=", report.passed);
    if !report.is_ok() {
        crate::kerror!("Resultados: failed=", report.failed);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass() -> TestResult {
        TestResult::Passed
    }

    fn fail() -> TestResult {
        TestResult::Failed
    }

    fn skip() -> TestResult {
        TestResult::Skipped
    }

    #[test]
    fn test_suite_counts_results() {
        let cases = [
            TestCase { name: "a", func: pass },
            TestCase { name: "b", func: fail },
            TestCase { name: "c", func: skip },
            TestCase { name: "d", func: pass },
        ];
        let report = run_test_suite("contagem", &cases);
        assert_eq!(
            report,
            SuiteReport {
                passed: 2,
                failed: 1,
                skipped: 1
            }
        );
        assert!(!report.is_ok());
    }

    #[test]
    fn test_empty_suite_is_ok() {
        assert!(run_test_suite("vazia", &[]).is_ok());
    }
}
