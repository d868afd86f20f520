//! CSV loader for taxpayer profiles.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Only `name`
//! and `age_bracket` are required; every amount column may be left out or
//! left empty, which reads as zero.
//!
//! | Column             | Required | Notes |
//! |--------------------|----------|-------|
//! | `name`             | yes      | Free text label |
//! | `age_bracket`      | yes      | One of `below60`, `60to80`, `above80` |
//! | `salary`           | no       | |
//! | `house_property`   | no       | |
//! | `business`         | no       | |
//! | `capital_gains`    | no       | |
//! | `other_sources`    | no       | |
//! | `section_80c`      | no       | |
//! | `section_80d`      | no       | |
//! | `section_80tta`    | no       | |
//! | `section_80ttb`    | no       | |
//! | `section_80ccd_1b` | no       | |
//! | `housing_interest` | no       | |
//! | `section_80e`      | no       | |
//! | `section_80g`      | no       | |
//! | `other`            | no       | Catch-all deduction |
//!
//! ```csv
//! name,age_bracket,salary,section_80c,section_80d
//! Asha,below60,1000000,150000,25000
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{AgeBracket, DeductionProfile, IncomeProfile};

/// One taxpayer read from a profile file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxpayerProfile {
    pub name: String,
    pub age_bracket: AgeBracket,
    pub income: IncomeProfile,
    pub deductions: DeductionProfile,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    age_bracket: String,
    #[serde(default)]
    salary: Option<Decimal>,
    #[serde(default)]
    house_property: Option<Decimal>,
    #[serde(default)]
    business: Option<Decimal>,
    #[serde(default)]
    capital_gains: Option<Decimal>,
    #[serde(default)]
    other_sources: Option<Decimal>,
    #[serde(default)]
    section_80c: Option<Decimal>,
    #[serde(default)]
    section_80d: Option<Decimal>,
    #[serde(default)]
    section_80tta: Option<Decimal>,
    #[serde(default)]
    section_80ttb: Option<Decimal>,
    #[serde(default)]
    section_80ccd_1b: Option<Decimal>,
    #[serde(default)]
    housing_interest: Option<Decimal>,
    #[serde(default)]
    section_80e: Option<Decimal>,
    #[serde(default)]
    section_80g: Option<Decimal>,
    #[serde(default)]
    other: Option<Decimal>,
}

/// Errors that can occur while loading profiles.
#[derive(Debug, thiserror::Error)]
pub enum ProfileLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised age bracket '{value}' on row {row}")]
    InvalidAgeBracket { value: String, row: usize },

    #[error("cannot read profile file: {0}")]
    Io(#[from] std::io::Error),
}

fn amount(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxpayerProfile, ProfileLoadError> {
    let age_bracket = AgeBracket::parse(&row.age_bracket).ok_or_else(|| {
        ProfileLoadError::InvalidAgeBracket {
            value: row.age_bracket.clone(),
            row: row_number,
        }
    })?;

    Ok(TaxpayerProfile {
        name: row.name,
        age_bracket,
        income: IncomeProfile {
            salary: amount(row.salary),
            house_property: amount(row.house_property),
            business: amount(row.business),
            capital_gains: amount(row.capital_gains),
            other_sources: amount(row.other_sources),
        },
        deductions: DeductionProfile {
            section_80c: amount(row.section_80c),
            section_80d: amount(row.section_80d),
            section_80tta: amount(row.section_80tta),
            section_80ttb: amount(row.section_80ttb),
            section_80ccd_1b: amount(row.section_80ccd_1b),
            housing_interest: amount(row.housing_interest),
            section_80e: amount(row.section_80e),
            section_80g: amount(row.section_80g),
            other: amount(row.other),
        },
    })
}

/// Parses profile CSV text. Rows are returned in file order.
///
/// # Errors
///
/// * [`ProfileLoadError::Parse`] if the CSV is malformed or an amount is not
///   a number.
/// * [`ProfileLoadError::InvalidAgeBracket`] if a row has an unknown bracket.
pub fn load_from_str(input: &str) -> Result<Vec<TaxpayerProfile>, ProfileLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a profile file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxpayerProfile>, ProfileLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
name,age_bracket
Ravi,below60
";

    const MULTI_ROW_CSV: &str = "\
name,age_bracket,salary,business,section_80c,section_80ttb
Asha,below60,1000000,,150000,
Mohan,60to80,,750000,,40000
";

    #[test]
    fn minimal_row_reads_all_amounts_as_zero() {
        let profiles = load_from_str(MINIMAL_CSV).expect("minimal CSV should load");

        assert_eq!(
            profiles,
            vec![TaxpayerProfile {
                name: "Ravi".to_string(),
                age_bracket: AgeBracket::Below60,
                income: IncomeProfile::default(),
                deductions: DeductionProfile::default(),
            }]
        );
    }

    #[test]
    fn empty_cells_read_as_zero() {
        let profiles = load_from_str(MULTI_ROW_CSV).expect("CSV should load");

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].income.salary, dec!(1000000));
        assert_eq!(profiles[0].income.business, dec!(0));
        assert_eq!(profiles[0].deductions.section_80c, dec!(150000));
        assert_eq!(profiles[1].age_bracket, AgeBracket::From60To80);
        assert_eq!(profiles[1].income.business, dec!(750000));
        assert_eq!(profiles[1].deductions.section_80ttb, dec!(40000));
    }

    #[test]
    fn whitespace_around_values_is_tolerated() {
        let csv = "name , age_bracket , salary\n Asha , above80 , 900000 \n";

        let profiles = load_from_str(csv).expect("padded CSV should load");

        assert_eq!(profiles[0].name, "Asha");
        assert_eq!(profiles[0].age_bracket, AgeBracket::Above80);
        assert_eq!(profiles[0].income.salary, dec!(900000));
    }

    #[test]
    fn unknown_age_bracket_reports_row() {
        let csv = "name,age_bracket\nRavi,below60\nMeera,senior\n";

        let err = load_from_str(csv).expect_err("unknown bracket should fail");

        match err {
            ProfileLoadError::InvalidAgeBracket { value, row } => {
                assert_eq!(value, "senior");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidAgeBracket, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_amount_is_a_parse_error() {
        let csv = "name,age_bracket,salary\nRavi,below60,lots\n";

        let err = load_from_str(csv).expect_err("bad amount should fail");

        assert!(matches!(err, ProfileLoadError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let csv = "name,salary\nRavi,100\n";

        let err = load_from_str(csv).expect_err("missing age bracket should fail");

        assert!(matches!(err, ProfileLoadError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn header_only_yields_no_profiles() {
        let profiles = load_from_str("name,age_bracket\n").expect("header-only CSV should load");

        assert!(profiles.is_empty());
    }
}
