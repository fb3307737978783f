//! Loan vs. Invest Advisor
//!
//! A small decision-support tool that:
//! - Compares a loan interest rate with an expected investment return
//! - Explains the local recommendation for the user's risk tolerance
//! - Renders a prompt the user can take to an external AI chat
//!
//! The advisor never calls a model itself.
//!
//! FLOW:
//! SHELL → VALIDATE → DECISION ENGINE + PROMPT BUILDER → DISPLAY

pub mod config;
pub mod decision;
pub mod error;
pub mod models;
pub mod prompt;
pub mod report;
pub mod shell;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use decision::evaluate;
pub use prompt::build_prompt;
pub use report::analyze;
pub use shell::Shell;
