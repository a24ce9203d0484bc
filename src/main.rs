//! Invest Calc CLI
//!
//! Command-line front end for the investment calculators
//!
//! # Commands
//!
//! - `invest-calc fd --principal 100000 --rate 7 --years 1 --compounding quarterly`
//! - `invest-calc rd --monthly-amount 2000 --rate 6.5 --months 24`
//! - `invest-calc sip --monthly-amount 5000 --years 10 --rate 12`
//! - `invest-calc lumpsum --amount 100000 --years 10 --rate 12`
//! - `invest-calc ppf --yearly-investment 150000 --years 15 --rate 7.1 --csv ppf.csv`
//! - `invest-calc nps --current-age 30 --retirement-age 60 --monthly-contribution 5000`
//!
//! Add `--json` to any command for machine-readable output.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use invest_calc::calculators::{
    Breakdown, Calculator, Compounding, ContributionFrequency, FdCalculator, FdInput, FdResult,
    LumpsumCalculator, LumpsumInput, LumpsumResult, NpsCalculator, NpsInput, NpsResult,
    PpfCalculator, PpfInput, PpfResult, RdCalculator, RdInput, RdResult, SipCalculator, SipInput,
    SipResult,
};
use invest_calc::format::{format_inr, summary_lines, Proportions};
use invest_calc::{FieldErrors, Settings};

/// Exit status when the inputs fail validation
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "invest-calc")]
#[command(author, version, long_about = None)]
#[command(about = "FD, RD, SIP, Lumpsum, PPF and NPS calculators")]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed deposit maturity
    Fd {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        /// Tenure in years (0.25 to 30)
        #[arg(long)]
        years: f64,
        /// annually, half-yearly, quarterly, monthly (or 1, 2, 4, 12)
        #[arg(long, default_value = "quarterly")]
        compounding: Compounding,
    },

    /// Recurring deposit maturity
    Rd {
        #[arg(long)]
        monthly_amount: f64,
        #[arg(long)]
        rate: f64,
        /// Number of monthly installments
        #[arg(long)]
        months: f64,
    },

    /// Systematic investment plan growth
    Sip {
        #[arg(long)]
        monthly_amount: f64,
        #[arg(long)]
        years: f64,
        /// Expected annual return in percent
        #[arg(long)]
        rate: f64,
    },

    /// One-time investment growth
    Lumpsum {
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        years: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value = "annually")]
        compounding: Compounding,
    },

    /// Public Provident Fund with yearly schedule
    Ppf {
        #[arg(long)]
        yearly_investment: f64,
        #[arg(long, default_value = "15")]
        years: f64,
        #[arg(long, default_value = "7.1")]
        rate: f64,
        /// yearly, half-yearly, quarterly, monthly (or 1, 2, 4, 12)
        #[arg(long, default_value = "yearly")]
        frequency: ContributionFrequency,
        /// Write the year-by-year schedule to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// National Pension System corpus and pension
    Nps {
        #[arg(long)]
        current_age: f64,
        #[arg(long, default_value = "60")]
        retirement_age: f64,
        #[arg(long)]
        monthly_contribution: f64,
        #[arg(long, default_value = "10")]
        expected_return: f64,
        /// Share of the corpus withdrawn as lump sum, percent (0 to 60)
        #[arg(long, default_value = "60")]
        withdrawal_pct: f64,
        #[arg(long, default_value = "6")]
        annuity_return: f64,
        /// Expected years in retirement
        #[arg(long, default_value = "20")]
        pension_years: f64,
    },
}

/// Result plus the calculator-specific figures shown under the headline split
struct Report<T> {
    result: T,
    extra: Vec<(&'static str, String)>,
}

fn run<C>(calculator: C, input: &C::Input) -> Result<C::Output, FieldErrors>
where
    C: Calculator,
{
    let result = calculator.calculate(input)?;
    info!("{} calculation complete", C::NAME);
    Ok(result)
}

fn print_report<T: Breakdown + Serialize>(
    report: &Report<T>,
    settings: &Settings,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&report.result).context("serializing result")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", settings.site.name);
    println!("{}", "=".repeat(settings.site.name.chars().count().max(20)));
    for line in summary_lines(&report.result) {
        println!("  {:<22} {:>16}", line.label, line.value);
    }
    for (label, value) in &report.extra {
        println!("  {:<22} {:>16}", label, value);
    }

    let p = Proportions::of(&report.result);
    println!();
    println!(
        "  Split: {:.1}% invested / {:.1}% returns",
        p.invested_pct, p.returns_pct
    );

    println!();
    println!("Questions? {}", settings.site.contact_email);
    if !settings.site.social_links.is_empty() {
        println!("Follow us: {}", settings.site.social_links.join(" | "));
    }
    Ok(())
}

fn write_ppf_schedule(path: &str, result: &PpfResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {}", path))?;
    for row in &result.schedule {
        writer.serialize(row)?;
    }
    writer.flush()?;
    info!("PPF schedule written to {}", path);
    Ok(())
}

fn print_ppf_schedule(result: &PpfResult) {
    println!();
    println!("{:>5} {:>14} {:>14} {:>16}", "Year", "Investment", "Interest", "Balance");
    println!("{}", "-".repeat(52));
    for row in &result.schedule {
        println!(
            "{:>5} {:>14} {:>14} {:>16}",
            row.year,
            format_inr(row.investment),
            format_inr(row.interest),
            format_inr(row.balance)
        );
    }
}

/// Print a successful result, or the field messages when validation failed
fn emit<T, F>(
    outcome: Result<T, FieldErrors>,
    settings: &Settings,
    json: bool,
    extra: F,
) -> anyhow::Result<ExitCode>
where
    T: Breakdown + Serialize,
    F: FnOnce(&T) -> Vec<(&'static str, String)>,
{
    match outcome {
        Ok(result) => {
            let extra = extra(&result);
            print_report(&Report { result, extra }, settings, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => Ok(report_invalid(&errors)),
    }
}

fn report_invalid(errors: &FieldErrors) -> ExitCode {
    eprintln!("Please correct the following:");
    for (field, message) in errors.iter() {
        eprintln!("  --{}: {}", field.replace('_', "-"), message);
    }
    ExitCode::from(EXIT_INVALID_INPUT)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command {
        Commands::Fd {
            principal,
            rate,
            years,
            compounding,
        } => {
            let input = FdInput {
                principal,
                rate,
                years,
                compounding,
            };
            emit(run(FdCalculator, &input), &settings, cli.json, |r: &FdResult| {
                vec![
                    ("Compounding", compounding.to_string()),
                    ("Effective yield", format!("{:.2}%", r.effective_rate)),
                ]
            })
        }
        Commands::Rd {
            monthly_amount,
            rate,
            months,
        } => {
            let input = RdInput {
                monthly_amount,
                rate,
                months,
            };
            emit(run(RdCalculator, &input), &settings, cli.json, |r: &RdResult| {
                vec![("Installments", r.installments.to_string())]
            })
        }
        Commands::Sip {
            monthly_amount,
            years,
            rate,
        } => {
            let input = SipInput {
                monthly_amount,
                years,
                rate,
            };
            emit(run(SipCalculator, &input), &settings, cli.json, |r: &SipResult| {
                vec![("Wealth gain", format!("{:.2}x", r.wealth_gain_multiple))]
            })
        }
        Commands::Lumpsum {
            amount,
            years,
            rate,
            compounding,
        } => {
            let input = LumpsumInput {
                amount,
                years,
                rate,
                compounding,
            };
            let outcome = run(LumpsumCalculator, &input);
            emit(outcome, &settings, cli.json, |r: &LumpsumResult| {
                vec![
                    ("Growth", format!("{:.2}x", r.growth_multiple)),
                    ("Annualised return", format!("{:.2}%", r.effective_rate)),
                ]
            })
        }
        Commands::Ppf {
            yearly_investment,
            years,
            rate,
            frequency,
            csv,
        } => {
            let input = PpfInput {
                yearly_investment,
                years,
                rate,
                frequency,
            };
            let result = match run(PpfCalculator, &input) {
                Ok(result) => result,
                Err(errors) => return Ok(report_invalid(&errors)),
            };
            let mut extra = vec![("Per installment", format_inr(result.installment_amount))];
            if let Some(path) = &csv {
                write_ppf_schedule(path, &result)?;
                extra.push(("Schedule written to", path.clone()));
            }

            let report = Report { result, extra };
            print_report(&report, &settings, cli.json)?;
            if !cli.json {
                print_ppf_schedule(&report.result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Nps {
            current_age,
            retirement_age,
            monthly_contribution,
            expected_return,
            withdrawal_pct,
            annuity_return,
            pension_years,
        } => {
            let input = NpsInput {
                current_age,
                retirement_age,
                monthly_contribution,
                expected_return,
                withdrawal_pct,
                annuity_return,
                pension_years,
            };
            emit(run(NpsCalculator, &input), &settings, cli.json, |r: &NpsResult| {
                vec![
                    ("Lump sum at retirement", format_inr(r.lump_sum_amount)),
                    ("Annuity purchase", format_inr(r.annuity_amount)),
                    ("Monthly pension", format_inr(r.monthly_pension)),
                    ("Total pension", format_inr(r.total_pension)),
                ]
            })
        }
    }
}
