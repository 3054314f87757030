// ATS compatibility scanner.
// Pure, synchronous scoring over a resume snapshot: no I/O, no shared state.
// Handlers only marshal JSON in and out of `scanner::scan`.

pub mod handlers;
pub mod models;
pub mod scanner;

pub use scanner::{AtsScanner, ResumeAnalyzer};
