use super::TemporalCodec;
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::patterns;
use crate::value::{TemporalKind, TemporalValue};
use chrono::NaiveDateTime;

impl TemporalCodec for NaiveDateTime {
    const KIND: TemporalKind = TemporalKind::DateTime;

    fn parse_text(text: &str, _options: &TemporalOptions) -> Result<Self, ParseError> {
        patterns::parse_with_fallback(
            text,
            patterns::DATE_TIME,
            patterns::DATE_TIME_NO_SECONDS,
            |s, f| NaiveDateTime::parse_from_str(s, f),
        )
    }

    fn format_text(&self) -> String {
        self.format(patterns::DATE_TIME).to_string()
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::DateTime(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::DateTime(date_time) => Some(date_time),
            _ => None,
        }
    }
}
