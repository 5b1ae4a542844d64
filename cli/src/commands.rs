use crate::output;
use anyhow::{Context, Result};
use calorie_estimator_shared::try_estimate;
use clap::{ArgAction, Parser};
use std::io::Write;
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "estimate", version)]
#[command(about = "Estimate daily calorie expenditure from weight, sex and activity level.")]
pub struct CommandLine {
    /// Body weight in kilograms
    #[arg(long, allow_hyphen_values = true, required_unless_present = "list_levels")]
    pub weight: Option<String>,

    /// Male or Female (Mies/Nainen also accepted)
    #[arg(long, required_unless_present = "list_levels")]
    pub sex: Option<String>,

    /// Low, Normal, Moderate, High or VeryHigh
    #[arg(long, required_unless_present = "list_levels")]
    pub activity: Option<String>,

    /// Print the full breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// List activity levels and their coefficients
    #[arg(long, conflicts_with_all = ["weight", "sex", "activity"])]
    pub list_levels: bool,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    /// Parse process arguments; a usage error is reported like any other
    /// invalid input, so the caller decides the exit code
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

pub fn run(cli: &CommandLine, out: &mut impl Write) -> Result<()> {
    if cli.list_levels {
        return output::write_levels(out, cli.json);
    }

    let weight = cli.weight.as_deref().context("--weight is required")?;
    let sex = cli.sex.as_deref().context("--sex is required")?;
    let activity = cli.activity.as_deref().context("--activity is required")?;

    let breakdown = try_estimate(weight, sex, activity).map_err(|err| {
        warn!(field = %err.field(), "Rejected input");
        err
    })?;
    debug!(
        base_rate = breakdown.base_rate,
        factor = breakdown.factor,
        kcal = breakdown.estimate.kcal(),
        "Estimated"
    );

    output::write_estimate(out, &breakdown, cli.json)
}
