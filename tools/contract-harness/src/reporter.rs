//! Test result reporter — formats PASS/FAIL/ERROR output and prints a summary.

use crate::runner::RunResult;
use crate::scenario::Scenario;

pub struct Reporter {
    passed: usize,
    failed: usize,
    errored: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            errored: 0,
        }
    }

    pub fn record(&mut self, scenario: &Scenario, result: &RunResult) {
        let line = Self::line(scenario, result);
        match &result.error {
            None => self.passed += 1,
            Some(e) if e.is_transport() => self.errored += 1,
            Some(_) => self.failed += 1,
        }
        println!("{line}");
    }

    /// `ERROR` marks an unreachable service, `FAIL` a broken contract.
    pub fn line(scenario: &Scenario, result: &RunResult) -> String {
        let label = match &result.error {
            None => "PASS ",
            Some(e) if e.is_transport() => "ERROR",
            Some(_) => "FAIL ",
        };
        let mut line = format!("{label} [{}] {}", scenario.id, scenario.description);
        if let Some(err) = &result.error {
            line.push_str(&format!("\n        {} → {err}", scenario.query));
        }
        line
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!(
            "Results: {} passed, {} failed, {} errored",
            self.passed, self.failed, self.errored
        );
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.passed, self.failed, self.errored)
    }
}
