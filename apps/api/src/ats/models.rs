use serde::{Deserialize, Serialize};

/// How strongly a failed check hurts parseability. Serialized lowercase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One evaluated rule as shown in the editor checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub label: String,
    pub passed: bool,
    pub impact: Impact,
    pub message: String,
}

/// Scanner output. `checks` lists failing outcomes before passing ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub checks: Vec<CheckOutcome>,
}

impl AnalysisResult {
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}
