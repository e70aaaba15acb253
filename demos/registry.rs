//! Choosing a temporal kind at runtime through the registry.
//!
//! Run with: cargo run --example registry

use serde_datetime::{Registry, TemporalOptions, Token};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let registry = Registry::builtin();
    let options = TemporalOptions::new().with_unwrap_single_value_arrays(true);

    let inputs = [
        ("date", r#""2000-01-01""#),
        ("time", r#"["10:15:30.5"]"#),
        ("offset-date-time", r#""2000-01-01T10:15:30+01:00""#),
        ("zoned-date-time", r#""2000-01-01T10:15:30+01:00[Europe/Paris]""#),
        ("instant", "946684800000"),
        ("duration", r#""-PT-6H+3M""#),
        ("period", r#""P1Y2W""#),
    ];

    for (type_id, json) in inputs {
        let codec = registry
            .codec_for(type_id)
            .ok_or_else(|| format!("no codec for {}", type_id))?;
        let token: Token = serde_json::from_str(json)?;
        match codec.decode(&token, &options)? {
            Some(value) => {
                let written = codec.encode(&value, &options)?;
                println!("{:<18} {:<45} -> {}", type_id, json, written);
            }
            None => println!("{:<18} {:<45} -> null", type_id, json),
        }
    }

    // A narrower bundle for a host that only deals in calendar dates
    let dates = Registry::builder("dates")
        .register::<chrono::NaiveDate>()
        .register::<serde_datetime::Period>()
        .build();
    println!("\n{:?}", dates);
    assert!(dates.codec_for("instant").is_none());

    Ok(())
}
