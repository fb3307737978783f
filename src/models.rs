//! Core data models for the advisor

use crate::error::AdvisorError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [
        RiskTolerance::Low,
        RiskTolerance::Medium,
        RiskTolerance::High,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Low => "low",
            RiskTolerance::Medium => "medium",
            RiskTolerance::High => "high",
        }
    }

    /// Column in the risk perspective table
    pub(crate) fn index(&self) -> usize {
        match self {
            RiskTolerance::Low => 0,
            RiskTolerance::Medium => 1,
            RiskTolerance::High => 2,
        }
    }
}

/// Case-insensitive; surrounding whitespace is not stripped.
impl FromStr for RiskTolerance {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        RiskTolerance::ALL
            .into_iter()
            .find(|tier| tier.as_str() == lowered)
            .ok_or_else(|| {
                AdvisorError::InvalidArgument(
                    "Risk tolerance must be 'high', 'medium', or 'low'".to_string(),
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Decision {
    Invest,
    #[serde(rename = "Pay off debt")]
    PayOffDebt,
}

impl Decision {
    /// Invest only when the return strictly beats the loan rate
    pub fn from_rates(loan_rate: f64, investment_return: f64) -> Self {
        if investment_return > loan_rate {
            Decision::Invest
        } else {
            Decision::PayOffDebt
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Decision::Invest => "Invest",
            Decision::PayOffDebt => "Pay off debt",
        }
    }

    /// Row in the risk perspective table
    pub(crate) fn index(&self) -> usize {
        match self {
            Decision::Invest => 0,
            Decision::PayOffDebt => 1,
        }
    }
}

//
// ================= Rates =================
//

/// Percentage value rendered the way users typed it back to them:
/// shortest round-trip digits, with `.0` kept on integral values.
/// Decimal exponents of 16 and up, or below -4, switch to `1e+16` / `1e-05` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() || value == 0.0 {
            return if value == 0.0 {
                write!(f, "{:.1}", value)
            } else {
                write!(f, "{}", value)
            };
        }

        // `{:e}` gives shortest digits, e.g. "1.5e-5"
        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if !(-4..16).contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
        } else if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

//
// ================= Recommendation =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub decision: Decision,
    pub reason: String,
}

//
// ================= Analysis Report =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub loan_rate: f64,
    pub investment_return: f64,
    /// As supplied by the caller, not canonicalized
    pub risk_tolerance: String,
    pub recommendation: Recommendation,
    pub prompt: String,
    pub prompt_sha256: String,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
