//! Analysis report
//!
//! Combines the local decision and the AI prompt for one request into a
//! single traceable record. Records live only for the request.

use crate::decision::evaluate;
use crate::models::AnalysisReport;
use crate::prompt::build_prompt;
use crate::Result;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

/// Run both the Decision Engine and the Prompt Builder for one set of inputs
pub fn analyze(
    loan_rate: f64,
    investment_return: f64,
    risk_tolerance: &str,
) -> Result<AnalysisReport> {
    let recommendation = evaluate(loan_rate, investment_return, risk_tolerance)?;
    let prompt = build_prompt(loan_rate, investment_return, risk_tolerance)?;
    let prompt_sha256 = compute_prompt_hash(&prompt);

    let report = AnalysisReport {
        analysis_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        loan_rate,
        investment_return,
        risk_tolerance: risk_tolerance.to_string(),
        recommendation,
        prompt,
        prompt_sha256,
    };

    info!(
        analysis_id = %report.analysis_id,
        decision = %report.recommendation.decision,
        prompt_sha256 = %report.prompt_sha256,
        "Analysis completed"
    );

    Ok(report)
}

/// Hex SHA256 of the prompt text, for matching a pasted prompt to its run
pub fn compute_prompt_hash(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    hex::encode(hasher.finalize())
}
