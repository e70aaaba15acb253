use super::TemporalCodec;
use crate::error::ParseError;
use crate::options::TemporalOptions;
use crate::patterns::DesignatorCursor;
use crate::value::{TemporalKind, TemporalValue};
use std::fmt;
use std::str::FromStr;

/// A calendar amount of years, months and days.
///
/// Components are kept separately and are never normalised: `P14M` stays
/// fourteen months. Weeks are folded into days when parsed.
///
/// # Examples
///
/// ```rust
/// use serde_datetime::Period;
///
/// let period: Period = "P1Y2M3W".parse().unwrap();
/// assert_eq!(period, Period::new(1, 2, 21));
/// assert_eq!(period.to_string(), "P1Y2M21D");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    pub const ZERO: Period = Period::new(0, 0, 0);

    #[must_use]
    pub const fn new(years: i32, months: i32, days: i32) -> Self {
        Period {
            years,
            months,
            days,
        }
    }

    #[must_use]
    pub const fn years(&self) -> i32 {
        self.years
    }

    #[must_use]
    pub const fn months(&self) -> i32 {
        self.months
    }

    #[must_use]
    pub const fn days(&self) -> i32 {
        self.days
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = ParseError;

    /// Parses `[-]PnYnMnWnD`. Each component may carry its own sign.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = DesignatorCursor::new(s);
        let negate = cursor.sign();
        cursor.expect_ignore_case('P')?;

        let mut parts = [0_i128; 4];
        let mut components = 0;
        for (part, designator) in parts.iter_mut().zip(['Y', 'M', 'W', 'D']) {
            if let Some(value) = cursor.try_component(designator)? {
                *part = if negate { -value } else { value };
                components += 1;
            }
        }
        if components == 0 || !cursor.at_end() {
            return Err(cursor.error());
        }

        let [years, months, weeks, days] = parts;
        let days = weeks
            .checked_mul(7)
            .and_then(|week_days| week_days.checked_add(days))
            .ok_or_else(|| ParseError::out_of_range(s))?;
        let narrow = |value: i128| i32::try_from(value).map_err(|_| ParseError::out_of_range(s));
        Ok(Period::new(narrow(years)?, narrow(months)?, narrow(days)?))
    }
}

impl TemporalCodec for Period {
    const KIND: TemporalKind = TemporalKind::Period;

    fn parse_text(text: &str, _options: &TemporalOptions) -> Result<Self, ParseError> {
        text.parse()
    }

    fn format_text(&self) -> String {
        self.to_string()
    }

    fn into_value(self) -> TemporalValue {
        TemporalValue::Period(self)
    }

    fn from_value_ref(value: &TemporalValue) -> Option<&Self> {
        match value {
            TemporalValue::Period(period) => Some(period),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Number;

    #[test]
    fn test_parse() {
        assert_eq!("P1Y2M3D".parse(), Ok(Period::new(1, 2, 3)));
        assert_eq!("P2W".parse(), Ok(Period::new(0, 0, 14)));
        assert_eq!("p1y".parse(), Ok(Period::new(1, 0, 0)));
        assert_eq!("P-1Y2M".parse(), Ok(Period::new(-1, 2, 0)));
        assert_eq!("-P1Y-2M".parse(), Ok(Period::new(-1, 2, 0)));
        assert_eq!("P0D".parse(), Ok(Period::ZERO));
    }

    #[test]
    fn test_parse_rejects() {
        for text in ["", "P", "1Y", "P1D1Y", "P1Y1Y", "PT1H", "P1.5Y", "P1YX"] {
            assert!(text.parse::<Period>().is_err(), "{text}");
        }
        assert!(matches!(
            "P3000000000Y".parse::<Period>(),
            Err(ParseError::OutOfRange(_))
        ));
        assert!(matches!(
            "P400000000W".parse::<Period>(),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_format() {
        assert_eq!(Period::ZERO.to_string(), "P0D");
        assert_eq!(Period::new(1, 2, 3).to_string(), "P1Y2M3D");
        assert_eq!(Period::new(-1, 2, 0).to_string(), "P-1Y2M");
        assert_eq!(Period::new(0, 14, 0).to_string(), "P14M");
    }

    #[test]
    fn test_has_no_numeric_form() {
        let options = TemporalOptions::timestamps();
        assert_eq!(
            Period::from_number(Number::Integer(3), &options),
            Err(ParseError::NoNumericForm)
        );
        assert_eq!(Period::new(0, 0, 3).to_number(&options), None);
    }
}
