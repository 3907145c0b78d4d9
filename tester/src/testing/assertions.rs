//! Scenario assertion collection
//!
//! Scenarios accumulate failures instead of panicking, so one run reports
//! everything that went wrong.

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub failures: Vec<String>,
}

impl ScenarioResult {
    pub fn from_failures(name: impl Into<String>, failures: Vec<String>) -> Self {
        Self {
            name: name.into(),
            passed: failures.is_empty(),
            failures,
        }
    }
}

/// Failure accumulator used inside a scenario
#[derive(Debug, Default)]
pub struct Checks {
    failures: Vec<String>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure unless the condition holds
    pub fn ensure(&mut self, condition: bool, message: impl Into<String>) {
        if !condition {
            self.failures.push(message.into());
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(message.into());
    }

    pub fn finish(self, name: impl Into<String>) -> ScenarioResult {
        ScenarioResult::from_failures(name, self.failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_checks_pass() {
        let checks = Checks::new();
        let result = checks.finish("noop");
        assert!(result.passed);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_failed_check_is_reported() {
        let mut checks = Checks::new();
        checks.ensure(1 + 1 == 2, "arithmetic works");
        checks.ensure(false, "this one fails");

        let result = checks.finish("mixed");
        assert!(!result.passed);
        assert_eq!(result.failures, vec!["this one fails".to_string()]);
    }
}
