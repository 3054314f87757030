//! ATS scanner: heuristic, deterministic resume health check.
//!
//! The score starts at 100 and each failing rule subtracts a fixed penalty.
//! Rules live in a static, ordered table (`CHECKS`); evaluation order is the
//! table order, and it doubles as the tie-break order of the returned checklist.
//!
//! Only "Contact Email" reports a passing outcome. Every other rule is silent
//! when it passes, so a perfect resume yields a single-entry checklist.

use serde::Serialize;

use crate::ats::models::{AnalysisResult, CheckOutcome, Impact};
use crate::models::resume::ResumeSnapshot;

const BASE_SCORE: i32 = 100;
const MIN_SUMMARY_CHARS: usize = 50; // strictly greater than
const MIN_SKILLS: usize = 5;
const MIN_WORDS: usize = 200;

/// Largest deduction any snapshot can receive. "Work Experience" and
/// "Quantifiable Results" never fail together.
pub const WORST_CASE_PENALTY: u32 = 80;

// ────────────────────────────────────────────────────────────────────────────
// Analyzer trait
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can turn a resume snapshot into a scored checklist.
///
/// Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
pub trait ResumeAnalyzer: Send + Sync {
    fn analyze(&self, resume: &ResumeSnapshot) -> AnalysisResult;

    /// Short name reported in logs.
    fn backend(&self) -> &'static str;
}

/// Default analyzer backed by the rule table below.
pub struct AtsScanner;

impl ResumeAnalyzer for AtsScanner {
    fn analyze(&self, resume: &ResumeSnapshot) -> AnalysisResult {
        scan(resume)
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

enum Verdict {
    Pass,
    Fail(String),
    /// Rule does not apply to this snapshot; emits nothing.
    Skip,
}

struct Check {
    label: &'static str,
    impact: Impact,
    penalty: u32,
    /// Message for a passing outcome. `None` keeps the rule silent on success.
    pass_message: Option<&'static str>,
    evaluate: fn(&ResumeSnapshot) -> Verdict,
}

const CHECKS: &[Check] = &[
    Check {
        label: "Contact Email",
        impact: Impact::High,
        penalty: 15,
        pass_message: Some("Email address found. Recruiters can reach you."),
        evaluate: check_email,
    },
    Check {
        label: "Phone Number",
        impact: Impact::Medium,
        penalty: 10,
        pass_message: None,
        evaluate: check_phone,
    },
    Check {
        label: "Location",
        impact: Impact::Low,
        penalty: 5,
        pass_message: None,
        evaluate: check_location,
    },
    Check {
        label: "Professional Summary",
        impact: Impact::Medium,
        penalty: 10,
        pass_message: None,
        evaluate: check_summary,
    },
    Check {
        label: "Work Experience",
        impact: Impact::High,
        penalty: 20,
        pass_message: None,
        evaluate: check_experience,
    },
    Check {
        label: "Quantifiable Results",
        impact: Impact::Medium,
        penalty: 15,
        pass_message: None,
        evaluate: check_quantified,
    },
    Check {
        label: "Skill Density",
        impact: Impact::Medium,
        penalty: 10,
        pass_message: None,
        evaluate: check_skills,
    },
    Check {
        label: "Resume Length",
        impact: Impact::Medium,
        penalty: 10,
        pass_message: None,
        evaluate: check_length,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Scan
// ────────────────────────────────────────────────────────────────────────────

/// Scores a resume snapshot. Pure: same input, same output, no side effects.
pub fn scan(resume: &ResumeSnapshot) -> AnalysisResult {
    let mut score = BASE_SCORE;
    let mut checks = Vec::new();

    for check in CHECKS {
        match (check.evaluate)(resume) {
            Verdict::Pass => {
                if let Some(message) = check.pass_message {
                    checks.push(check.outcome(true, message.to_string()));
                }
            }
            Verdict::Fail(message) => {
                score -= check.penalty as i32;
                checks.push(check.outcome(false, message));
            }
            Verdict::Skip => {}
        }
    }

    // Stable: evaluation order is kept inside each group.
    checks.sort_by_key(|c| c.passed);

    AnalysisResult {
        score: score.clamp(0, 100) as u32,
        checks,
    }
}

impl Check {
    fn outcome(&self, passed: bool, message: String) -> CheckOutcome {
        CheckOutcome {
            label: self.label.to_string(),
            passed,
            impact: self.impact,
            message,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

fn check_email(resume: &ResumeSnapshot) -> Verdict {
    require(
        !is_blank(&resume.personal_info.email),
        "Add an email address. Most ATS reject applications without one.",
    )
}

fn check_phone(resume: &ResumeSnapshot) -> Verdict {
    require(
        !is_blank(&resume.personal_info.phone),
        "Add a phone number so recruiters can call you.",
    )
}

fn check_location(resume: &ResumeSnapshot) -> Verdict {
    require(
        !is_blank(&resume.personal_info.location),
        "Add your city and region. Many ATS searches filter by location.",
    )
}

fn check_summary(resume: &ResumeSnapshot) -> Verdict {
    let summary = &resume.summary;
    require(
        !is_blank(summary) && summary.chars().count() > MIN_SUMMARY_CHARS,
        "Write a professional summary of more than 50 characters highlighting your strengths.",
    )
}

fn check_experience(resume: &ResumeSnapshot) -> Verdict {
    require(
        !resume.experience.is_empty(),
        "No work experience listed. Add roles, internships or freelance work.",
    )
}

fn check_quantified(resume: &ResumeSnapshot) -> Verdict {
    if resume.experience.is_empty() {
        return Verdict::Skip;
    }

    let quantified = resume
        .experience
        .iter()
        .flat_map(|entry| entry.description.lines())
        .any(has_digit);

    require(
        quantified,
        "Add measurable results to your experience, e.g. \"Increased revenue by 30%\".",
    )
}

fn check_skills(resume: &ResumeSnapshot) -> Verdict {
    let count = resume.skills.len();
    if count >= MIN_SKILLS {
        return Verdict::Pass;
    }
    Verdict::Fail(format!(
        "Only {count} skill(s) listed. Aim for 8–12 relevant keywords."
    ))
}

fn check_length(resume: &ResumeSnapshot) -> Verdict {
    let words = word_count(resume);
    if words >= MIN_WORDS {
        return Verdict::Pass;
    }
    Verdict::Fail(format!(
        "Resume is short ({words} words). Aim for 300–500 words for depth."
    ))
}

fn require(condition: bool, failure: &str) -> Verdict {
    if condition {
        Verdict::Pass
    } else {
        Verdict::Fail(failure.to_string())
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn has_digit(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}

/// Whitespace-delimited tokens in the compact JSON form of the snapshot.
/// Line breaks inside strings are escaped by JSON and do not split tokens.
pub fn word_count(resume: &ResumeSnapshot) -> usize {
    serde_json::to_string(resume)
        .unwrap_or_default()
        .split_whitespace()
        .count()
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// Public description of one rule, in evaluation order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckSummary {
    pub label: &'static str,
    pub impact: Impact,
    pub penalty: u32,
}

pub fn catalog() -> Vec<CheckSummary> {
    CHECKS
        .iter()
        .map(|c| CheckSummary {
            label: c.label,
            impact: c.impact,
            penalty: c.penalty,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
