//! Decision Engine
//!
//! Deterministic local recommendation: compares the expected investment
//! return against the loan rate and explains the result for the user's
//! risk tolerance. No I/O, no LLM.

use crate::error::AdvisorError;
use crate::models::{Decision, Percent, Recommendation, RiskTolerance};
use crate::Result;
use tracing::debug;

/// Risk-adjusted sentence, indexed by `[decision][risk tolerance]`.
/// Rows follow `Decision::index`, columns `RiskTolerance::index`.
const RISK_PERSPECTIVES: [[&str; 3]; 2] = [
    // Invest
    [
        "Despite the potential returns, your low risk tolerance suggests \
         prioritizing debt reduction for guaranteed savings.",
        "With medium risk tolerance, consider diversifying investments \
         while maintaining some debt payments.",
        "Since you have high risk tolerance, investing makes sense \
         as you can withstand potential market volatility.",
    ],
    // Pay off debt
    [
        "Your low risk tolerance makes debt reduction the optimal choice \
         for guaranteed financial improvement.",
        "With medium risk tolerance, reducing debt provides \
         a balanced approach to financial security.",
        "Even with high risk tolerance, paying off high-interest debt \
         provides a guaranteed return equivalent to the loan rate.",
    ],
];

/// Pros/cons sentence, indexed by `Decision::index`
const PROS_CONS: [&str; 2] = [
    "Potential pros: Higher long-term returns. \
     Potential cons: Market risks could erode gains.",
    "Potential pros: Guaranteed savings, reduced financial stress. \
     Potential cons: Might miss out on exceptional market gains.",
];

/// Evaluate a loan rate against an investment return.
///
/// Rates are percentage points and must be non-negative. The risk tolerance
/// is matched case-insensitively against `low`, `medium` and `high`.
pub fn evaluate(
    loan_rate: f64,
    investment_return: f64,
    risk_tolerance: &str,
) -> Result<Recommendation> {
    ensure_non_negative(loan_rate, "Loan rate")?;
    ensure_non_negative(investment_return, "Investment return")?;
    let risk: RiskTolerance = risk_tolerance.parse()?;

    let recommendation = recommend(loan_rate, investment_return, risk);

    debug!(
        loan_rate,
        investment_return,
        risk_tolerance = %risk,
        decision = %recommendation.decision,
        "Local decision computed"
    );

    Ok(recommendation)
}

/// Build the recommendation from already validated inputs
pub fn recommend(loan_rate: f64, investment_return: f64, risk: RiskTolerance) -> Recommendation {
    let decision = Decision::from_rates(loan_rate, investment_return);

    let reason = format!(
        "{} {} {}",
        base_reason(decision, loan_rate, investment_return),
        risk_perspective(decision, risk),
        pros_cons(decision),
    );

    Recommendation { decision, reason }
}

pub fn risk_perspective(decision: Decision, risk: RiskTolerance) -> &'static str {
    RISK_PERSPECTIVES[decision.index()][risk.index()]
}

pub fn pros_cons(decision: Decision) -> &'static str {
    PROS_CONS[decision.index()]
}

fn base_reason(decision: Decision, loan_rate: f64, investment_return: f64) -> String {
    let loan = Percent(loan_rate);
    let investment = Percent(investment_return);

    match decision {
        Decision::Invest => format!(
            "Your expected investment return ({}%) is higher than your loan interest rate ({}%).",
            investment, loan
        ),
        Decision::PayOffDebt => format!(
            "Your loan interest rate ({}%) is higher than your expected investment return ({}%).",
            loan, investment
        ),
    }
}

fn ensure_non_negative(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(AdvisorError::InvalidArgument(format!(
            "{} must be a finite number",
            field
        )));
    }
    if value < 0.0 {
        return Err(AdvisorError::InvalidArgument(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(())
}

//
// ================= Tests =================
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invest_when_return_exceeds_rate() {
        let result = evaluate(4.5, 7.0, "high").unwrap();

        assert_eq!(result.decision, Decision::Invest);
        assert_eq!(
            result.reason,
            "Your expected investment return (7.0%) is higher than your loan interest rate (4.5%). \
             Since you have high risk tolerance, investing makes sense as you can withstand \
             potential market volatility. Potential pros: Higher long-term returns. \
             Potential cons: Market risks could erode gains."
        );
    }

    #[test]
    fn test_pay_off_debt_when_rate_exceeds_return() {
        let result = evaluate(10.0, 3.0, "low").unwrap();

        assert_eq!(result.decision, Decision::PayOffDebt);
        assert!(result.reason.starts_with(
            "Your loan interest rate (10.0%) is higher than your expected investment return (3.0%)."
        ));
        assert!(result.reason.contains("optimal choice for guaranteed financial improvement."));
        assert!(result.reason.ends_with("Might miss out on exceptional market gains."));
    }

    #[test]
    fn test_equal_rates_pay_off_debt() {
        let result = evaluate(5.0, 5.0, "medium").unwrap();

        assert_eq!(result.decision, Decision::PayOffDebt);
        assert!(result.reason.contains("reducing debt provides a balanced approach"));
    }

    #[test]
    fn test_zero_rates_are_accepted() {
        let result = evaluate(0.0, 0.0, "low").unwrap();
        assert_eq!(result.decision, Decision::PayOffDebt);

        let result = evaluate(0.0, 2.5, "medium").unwrap();
        assert_eq!(result.decision, Decision::Invest);
    }

    #[test]
    fn test_risk_tolerance_is_normalized() {
        let upper = evaluate(3.0, 6.0, "LOW").unwrap();
        let lower = evaluate(3.0, 6.0, "low").unwrap();

        assert_eq!(upper, lower);
        assert!(upper.reason.contains("your low risk tolerance suggests"));
    }

    #[test]
    fn test_extreme_rates_use_exponent_form() {
        let result = evaluate(0.00001, 1e16, "low").unwrap();

        assert_eq!(result.decision, Decision::Invest);
        assert!(result.reason.starts_with(
            "Your expected investment return (1e+16%) is higher than your loan interest rate (1e-05%)."
        ));
    }

    #[test]
    fn test_rejects_negative_rates() {
        assert!(matches!(
            evaluate(-0.5, 3.0, "low"),
            Err(AdvisorError::InvalidArgument(_))
        ));
        assert!(matches!(
            evaluate(3.0, -1.0, "HIGH"),
            Err(AdvisorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_rates() {
        assert!(matches!(
            evaluate(f64::NAN, 3.0, "low"),
            Err(AdvisorError::InvalidArgument(_))
        ));
        assert!(matches!(
            evaluate(3.0, f64::INFINITY, "low"),
            Err(AdvisorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_risk_tolerance() {
        for risk in ["extreme", "EXTREME", ""] {
            assert!(matches!(
                evaluate(4.0, 5.0, risk),
                Err(AdvisorError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_every_table_entry_is_distinct_and_reachable() {
        let mut seen = Vec::new();
        for decision in [Decision::Invest, Decision::PayOffDebt] {
            for risk in RiskTolerance::ALL {
                let sentence = risk_perspective(decision, risk);
                assert!(sentence.contains(risk.as_str()));
                assert!(!seen.contains(&sentence));
                seen.push(sentence);
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_reason_always_mentions_both_rates() {
        let grid = [(1.25, 0.75), (0.75, 1.25), (8.0, 8.0), (0.0, 12.5)];

        for (loan, investment) in grid {
            for risk in ["low", "Medium", "HIGH"] {
                let result = evaluate(loan, investment, risk).unwrap();
                assert_eq!(result.decision == Decision::Invest, investment > loan);
                assert!(result.reason.contains(&format!("({}%)", Percent(loan))));
                assert!(result.reason.contains(&format!("({}%)", Percent(investment))));
            }
        }
    }
}
