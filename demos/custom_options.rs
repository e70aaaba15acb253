//! Array conventions, numeric forms and leniency with TemporalOptions.
//!
//! Run with: cargo run --example custom_options

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde_datetime::{from_str, to_string, TemporalOptions, TimestampUnit};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Strict defaults: only scalars and null
    let strict = TemporalOptions::default();
    match from_str::<NaiveDate>(r#"["2000-01-01"]"#, &strict) {
        Ok(value) => println!("Unexpected success: {:?}", value),
        Err(e) => println!("Strict ({:?}): {}\n", e.kind(), e),
    }

    // Single-value arrays, and [] as null
    let arrays = TemporalOptions::new()
        .with_unwrap_single_value_arrays(true)
        .with_accept_empty_array_as_null(true);
    println!("[\"2000-01-01\"] -> {:?}", from_str::<NaiveDate>(r#"["2000-01-01"]"#, &arrays)?);
    println!("[]             -> {:?}\n", from_str::<NaiveDate>("[]", &arrays)?);

    // Numeric forms in each unit
    let instant = DateTime::<Utc>::from_timestamp(946_684_800, 250_000_000).ok_or("out of range")?;
    for unit in [
        TimestampUnit::Seconds,
        TimestampUnit::Milliseconds,
        TimestampUnit::Nanoseconds,
    ] {
        let options = TemporalOptions::timestamps().with_timestamp_unit(unit);
        println!("instant in {}: {}", unit, to_string(&instant, &options)?);
    }
    let options = TemporalOptions::timestamps();
    println!("duration in milliseconds: {}", to_string(&TimeDelta::seconds(90), &options)?);
    println!("date as epoch day: {}\n", to_string(&instant.date_naive(), &options)?);

    // Leniency trims input and lets dates come from date-time text
    let lenient = TemporalOptions::new().with_lenient(true);
    let date = from_str::<NaiveDate>(r#"" 2000-01-01T10:15:30Z ""#, &lenient)?;
    println!("Lenient date: {:?}", date);

    Ok(())
}
