use super::TemporalCodec;
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::patterns;
use crate::value::{TemporalKind, TemporalValue};
use chrono::NaiveTime;

impl TemporalCodec for NaiveTime {
    const KIND: TemporalKind = TemporalKind::Time;

    fn parse_text(text: &str, _options: &TemporalOptions) -> Result<Self, ParseError> {
        patterns::parse_with_fallback(text, patterns::TIME, patterns::TIME_NO_SECONDS, |s, f| {
            NaiveTime::parse_from_str(s, f)
        })
    }

    fn format_text(&self) -> String {
        self.format(patterns::TIME).to_string()
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::Time(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::Time(time) => Some(time),
            _ => None,
        }
    }
}
