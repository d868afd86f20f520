use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tax_core::{
    AgeBracket, DeductionProfile, IncomeProfile, Regime, RegimeCalculator, compare,
};
use tax_data::{RuleLoader, logging, profiles, report};
use tracing::{info, warn};

/// Compare the new and old income-tax regimes for one or more taxpayers.
///
/// Give either `--profiles` for a batch of taxpayers from CSV, or the
/// income and deduction flags for a single taxpayer. Without `--rules` the
/// built-in FY 2025-26 rules are used.
#[derive(Parser, Debug)]
#[command(name = "tax-regime")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML rule configuration file
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Warn if the rules are not in force on this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// CSV file of taxpayer profiles
    #[arg(short, long, conflicts_with_all = ["salary", "house_property", "business", "capital_gains", "other_sources"])]
    profiles: Option<PathBuf>,

    /// Print only this regime: new or old
    #[arg(long, value_parser = parse_regime)]
    regime: Option<Regime>,

    /// Age bracket: below60, 60to80 or above80
    #[arg(long, value_parser = parse_age, default_value = "below60")]
    age: AgeBracket,

    #[arg(long, default_value_t = Decimal::ZERO)]
    salary: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    house_property: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    business: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    capital_gains: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    other_sources: Decimal,

    #[arg(long = "80c", default_value_t = Decimal::ZERO)]
    section_80c: Decimal,

    #[arg(long = "80d", default_value_t = Decimal::ZERO)]
    section_80d: Decimal,

    #[arg(long = "80tta", default_value_t = Decimal::ZERO)]
    section_80tta: Decimal,

    #[arg(long = "80ttb", default_value_t = Decimal::ZERO)]
    section_80ttb: Decimal,

    #[arg(long = "80ccd-1b", default_value_t = Decimal::ZERO)]
    section_80ccd_1b: Decimal,

    /// Interest on a housing loan
    #[arg(long, default_value_t = Decimal::ZERO)]
    housing_interest: Decimal,

    #[arg(long = "80e", default_value_t = Decimal::ZERO)]
    section_80e: Decimal,

    #[arg(long = "80g", default_value_t = Decimal::ZERO)]
    section_80g: Decimal,

    /// Any other deduction not listed above
    #[arg(long, default_value_t = Decimal::ZERO)]
    other_deductions: Decimal,

    /// Log filter, e.g. "debug" or "tax_core=trace" (RUST_LOG wins)
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file as well as stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_regime(s: &str) -> Result<Regime, String> {
    Regime::parse(s).ok_or_else(|| format!("unknown regime '{s}', expected new or old"))
}

fn parse_age(s: &str) -> Result<AgeBracket, String> {
    AgeBracket::parse(s)
        .ok_or_else(|| format!("unknown age bracket '{s}', expected below60, 60to80 or above80"))
}

impl Args {
    fn income(&self) -> IncomeProfile {
        IncomeProfile {
            salary: self.salary,
            house_property: self.house_property,
            business: self.business,
            capital_gains: self.capital_gains,
            other_sources: self.other_sources,
        }
    }

    fn deductions(&self) -> DeductionProfile {
        DeductionProfile {
            section_80c: self.section_80c,
            section_80d: self.section_80d,
            section_80tta: self.section_80tta,
            section_80ttb: self.section_80ttb,
            section_80ccd_1b: self.section_80ccd_1b,
            housing_interest: self.housing_interest,
            section_80e: self.section_80e,
            section_80g: self.section_80g,
            other: self.other_deductions,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.log_level.as_deref(), args.log_file.as_deref())
        .context("Failed to initialise logging")?;

    let loaded = RuleLoader::load_or_fallback(args.rules.as_deref());
    let rules = &loaded.rules;

    if let Some(date) = args.as_of {
        if !rules.is_effective_on(date) {
            warn!(
                %date,
                version = %rules.version,
                valid_from = %rules.valid_from,
                valid_until = %rules.valid_until,
                "rules are not in force on the requested date"
            );
        }
    }

    let taxpayers = match &args.profiles {
        Some(path) => {
            let read = profiles::load_from_file(path)
                .with_context(|| format!("Failed to load profiles: {}", path.display()))?;
            if read.is_empty() {
                bail!("No profiles found in {}", path.display());
            }
            info!(count = read.len(), "loaded taxpayer profiles");
            read
                .into_iter()
                .map(|p| (Some(p.name), p.age_bracket, p.income, p.deductions))
                .collect()
        }
        None => vec![(None, args.age, args.income(), args.deductions())],
    };

    let calculator = RegimeCalculator::new(rules);
    for (name, age, income, deductions) in &taxpayers {
        match args.regime {
            Some(regime) => {
                if let Some(name) = name {
                    println!("== {name} ==");
                }
                let result = calculator.compute(regime, income, deductions, *age);
                println!("{}", report::format_result(&result));
            }
            None => {
                let comparison = compare(income, deductions, *age, rules);
                println!("{}", report::format_comparison(name.as_deref(), &comparison));
            }
        }
    }

    Ok(())
}
