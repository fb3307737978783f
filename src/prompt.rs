//! Prompt Builder
//!
//! Renders the question a user can paste into an external AI chat for a
//! fuller, contextual answer. Nothing here talks to a model.

use crate::error::AdvisorError;
use crate::models::{Percent, RiskTolerance};
use crate::Result;
use tracing::debug;

/// Instructions appended to every prompt, numbered in order
pub const INSTRUCTIONS: [&str; 5] = [
    "A clear recommendation (Invest/Pay off debt)",
    "Detailed reasoning with pros and cons",
    "Consideration of risk tolerance impact",
    "Balanced perspective comparing both options",
    "Any caveats or assumptions in your analysis",
];

/// Build the AI prompt.
///
/// Both rates must be strictly positive. The risk tolerance is validated
/// case-insensitively but embedded exactly as supplied.
pub fn build_prompt(loan_rate: f64, investment_return: f64, risk_tolerance: &str) -> Result<String> {
    ensure_positive(loan_rate, "Loan rate")?;
    ensure_positive(investment_return, "Investment return")?;
    risk_tolerance.parse::<RiskTolerance>().map_err(|_| {
        AdvisorError::InvalidArgument(
            "Risk tolerance must be one of: low, medium, high".to_string(),
        )
    })?;

    let mut prompt = format!(
        "Compare a loan interest rate of {}% with an expected investment return of {}%. \
         Considering a {} risk tolerance, should I prioritize investing or paying off debt?\n\n\
         Provide:",
        Percent(loan_rate),
        Percent(investment_return),
        risk_tolerance,
    );

    for (i, instruction) in INSTRUCTIONS.iter().enumerate() {
        prompt.push_str(&format!("\n{}. {}", i + 1, instruction));
    }

    debug!(prompt_len = prompt.len(), "AI prompt built");

    Ok(prompt)
}

fn ensure_positive(value: f64, field: &str) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AdvisorError::InvalidArgument(format!(
            "{} must be a positive number",
            field
        )))
    }
}
