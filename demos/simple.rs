//! Reading and writing temporal fields with default options.
//!
//! Run with: cargo run --example simple

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Booking {
    guest: String,
    #[serde(with = "serde_datetime::iso")]
    arrival: NaiveDate,
    #[serde(with = "serde_datetime::iso")]
    created: DateTime<Utc>,
    #[serde(with = "serde_datetime::iso::option", default)]
    late_checkout: Option<TimeDelta>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let json = r#"{
        "guest": "Alice Johnson",
        "arrival": "2000-01-01",
        "created": "1999-12-24T18:30:00+01:00",
        "late_checkout": "PT2H"
    }"#;

    let booking: Booking = serde_json::from_str(json)?;
    println!("Parsed: {:?}\n", booking);

    // Instants are normalised to UTC on the way out
    let written = serde_json::to_string(&booking)?;
    println!("Written:\n{}\n", written);

    let booking_back: Booking = serde_json::from_str(&written)?;
    assert_eq!(booking, booking_back);
    println!("✓ Round-trip successful");

    Ok(())
}
