use crate::domain::model::LookupOutcome;
use crate::utils::error::Result;
use std::io::Write;

/// Print the most/least likely country block for one name.
pub fn write_report<W: Write>(out: &mut W, name: &str, outcome: &LookupOutcome) -> Result<()> {
    let (min_country, max_country) = outcome.country_codes();

    writeln!(out, "\nResults for {}:", name)?;
    writeln!(out, "Most likely country: {}", max_country)?;
    writeln!(out, "Least likely country: {}", min_country)?;

    if let LookupOutcome::FetchFailed(e) = outcome {
        writeln!(out, "Lookup failed: {}", e.user_friendly_message())?;
    }
    Ok(())
}
