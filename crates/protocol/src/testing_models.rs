//! Testing domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single test case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Name of the test, e.g. `"test_factorial_positive"`.
    pub name: String,

    /// What the test verifies.
    pub description: String,

    /// Input values keyed by parameter name.
    #[serde(default)]
    pub input_data: HashMap<String, String>,

    /// Expected outputs keyed by name.
    #[serde(default)]
    pub expected_output: HashMap<String, String>,

    /// Whether the test runs against mocked dependencies.
    #[serde(default)]
    pub is_mocked: bool,
}

/// The outcome of executing one test case.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestResult {
    /// The test case that was executed.
    pub test_case: TestCase,

    /// Whether the test passed.
    pub passed: bool,

    /// Observed outputs keyed by name.
    #[serde(default)]
    pub actual_output: HashMap<String, String>,

    /// Failure detail when `passed` is false.
    pub error_message: Option<String>,

    /// Wall-clock execution time in seconds. Never negative.
    #[serde(default)]
    pub execution_time: f64,
}

/// Coverage figures for one test run. Percentages in `[0, 100]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCoverage {
    pub line_coverage: f64,
    pub branch_coverage: f64,
    pub function_coverage: f64,

    /// Per-file line coverage keyed by path.
    #[serde(default)]
    pub file_coverage: HashMap<String, f64>,
}
