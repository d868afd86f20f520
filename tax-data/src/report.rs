//! Plain-text rendering of results for the `tax-regime` tool.

use std::fmt::Write;

use rust_decimal::Decimal;
use tax_core::calculations::common::round_half_up;
use tax_core::{ComparisonResult, Recommendation, TaxResult};

const LABEL_WIDTH: usize = 26;
const AMOUNT_WIDTH: usize = 16;

fn amount_line(
    out: &mut String,
    label: &str,
    value: Decimal,
) {
    let _ = writeln!(
        out,
        "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$.2}",
        round_half_up(value)
    );
}

/// Renders one regime's breakdown, one amount per line.
pub fn format_result(result: &TaxResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} regime", result.regime.as_str());

    amount_line(&mut out, "Gross income", result.gross_income);
    amount_line(&mut out, "Standard deduction", result.standard_deduction);
    amount_line(&mut out, "Chapter VI-A deductions", result.chapter_via_deductions);
    amount_line(&mut out, "Taxable income", result.taxable_income);
    amount_line(&mut out, "Tax on income", result.tax_on_income);
    amount_line(&mut out, "Rebate", result.rebate);
    amount_line(&mut out, "Surcharge", result.surcharge);
    amount_line(&mut out, "Marginal relief", result.marginal_relief);
    amount_line(&mut out, "Tax before cess", result.tax_before_cess);
    amount_line(&mut out, "Cess", result.cess);
    amount_line(&mut out, "Total tax", result.total_tax);

    let rate = (result.effective_rate() * Decimal::ONE_HUNDRED).round_dp(2);
    let _ = writeln!(out, "  {:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$.2}%", "Effective rate", rate);
    out
}

/// One-line verdict for a comparison.
pub fn format_recommendation(comparison: &ComparisonResult) -> String {
    match comparison.recommendation {
        Recommendation::Equal => "Both regimes cost the same".to_string(),
        recommendation => format!(
            "Choose the {} regime, saving {:.2}",
            recommendation.as_str(),
            round_half_up(comparison.savings)
        ),
    }
}

/// Both breakdowns followed by the verdict, under an optional heading.
pub fn format_comparison(
    heading: Option<&str>,
    comparison: &ComparisonResult,
) -> String {
    let mut out = String::new();
    if let Some(heading) = heading {
        let _ = writeln!(out, "== {heading} ==");
    }
    out.push_str(&format_result(&comparison.new_regime));
    out.push('\n');
    out.push_str(&format_result(&comparison.old_regime));
    out.push('\n');
    let _ = writeln!(out, "{}", format_recommendation(comparison));
    out
}
