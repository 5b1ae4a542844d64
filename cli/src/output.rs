use anyhow::Result;
use calorie_estimator_shared::{activity_levels, EstimateBreakdown, EstimateResponse};
use std::io::Write;

/// Print an estimate: the bare kcal figure, or the breakdown as JSON
pub fn write_estimate(out: &mut impl Write, breakdown: &EstimateBreakdown, json: bool) -> Result<()> {
    if json {
        let response = EstimateResponse::from(*breakdown);
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    } else {
        writeln!(out, "{}", breakdown.estimate)?;
    }
    Ok(())
}

/// Print the activity level table
pub fn write_levels(out: &mut impl Write, json: bool) -> Result<()> {
    let levels = activity_levels();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&levels)?)?;
        return Ok(());
    }

    writeln!(out, "{:<10} {:<16} {}", "LEVEL", "FORM LABEL", "FACTOR")?;
    for level in &levels {
        writeln!(out, "{:<10} {:<16} {:.1}", level.name, level.form_label, level.factor)?;
    }
    Ok(())
}
