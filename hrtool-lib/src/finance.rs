//! DP to HRC conversion.

use std::fmt::{self, Display, Formatter};

pub const MISSING_INPUTS: &str = "Please enter both DP amount and HRC per DP.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FinanceResult {
    /// One of the inputs was zero, blank or not a finite number
    MissingInputs,
    Total { dp: f64, rate: f64, total: f64 },
}

impl FinanceResult {
    pub fn total(&self) -> Option<f64> {
        match self {
            FinanceResult::Total { total, .. } => Some(*total),
            FinanceResult::MissingInputs => None,
        }
    }
}

impl Display for FinanceResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FinanceResult::MissingInputs => f.write_str(MISSING_INPUTS),
            FinanceResult::Total { dp, rate, total } => {
                write!(f, "{dp} DP × {rate} HRC = {total} HRC total.")
            }
        }
    }
}

/// Convert a DP amount at the given HRC-per-DP rate.
pub fn calculate(dp_amount: &str, hrc_rate: &str) -> FinanceResult {
    let dp = parse_amount(dp_amount);
    let rate = parse_amount(hrc_rate);

    if dp == 0.0 || rate == 0.0 {
        return FinanceResult::MissingInputs;
    }

    FinanceResult::Total {
        dp,
        rate,
        total: dp * rate,
    }
}

/// Blank, unparseable, NaN and infinite input all count as zero.
fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
