//! Textual patterns
//!
//! This module documents the text forms written and accepted by each codec,
//! and holds the chrono format strings and designator scanner behind them.
//! The forms are fixed points of compatibility; none of them is configurable.
//!
//! # Calendar values
//!
//! | Kind | Written | Also accepted |
//! |------|---------|---------------|
//! | date | `2000-01-01` | with leniency: any date-time text, keeping its date |
//! | time | `10:15:30`, `10:15:30.500` | `10:15` |
//! | date-time | `2000-01-01T10:15:30` | `2000-01-01T10:15` |
//! | offset date-time | `2000-01-01T10:15:30+01:00`, `2000-01-01T09:15:30Z` | `2000-01-01T10:15+01:00` |
//! | zoned date-time | `2000-01-01T10:15:30+01:00[Europe/Paris]` | without the bracketed region |
//! | instant | `2000-01-01T09:15:30Z` | any offset; normalised to UTC |
//!
//! **Rules**:
//! - Fractional seconds are written with 3, 6 or 9 digits, and omitted when zero
//! - Years outside `0000..=9999` carry an explicit sign: `+10000-01-01`
//! - A zero offset is written as `Z`
//! - Region ids start with a letter and contain letters, digits and `/_-+.~`
//!
//! # Designator values
//!
//! Durations and periods use the `P` designator grammar. Designators are
//! case-insensitive on input and upper-case on output.
//!
//! | Kind | Written | Also accepted |
//! |------|---------|---------------|
//! | duration | `PT8H6M12.345S`, `-PT0.5S`, `PT0S` | `P2DT3H`, `PT-6H3M`, `PT1,5S` |
//! | period | `P1Y2M3D`, `P-1Y2M`, `P0D` | `P2W`, `-P1Y2M` |
//!
//! **Rules**:
//! - A leading `-` negates every component; components may also carry their own sign
//! - Durations write days as hours, and seconds fractions without trailing zeros
//! - Periods fold weeks into days on input
//! - At least one component is required; `P` and `PT` alone are rejected
//!
//! # Numbers
//!
//! Dates read and write days since 1970-01-01. Offset date-times, zoned
//! date-times and instants read and write an epoch timestamp, and durations a
//! length, counted in [`TimestampUnit`](crate::TimestampUnit)s. Floating
//! values carry a fraction of the unit.

use crate::error::ParseError;

pub(crate) const DATE: &str = "%Y-%m-%d";
pub(crate) const TIME: &str = "%H:%M:%S%.f";
pub(crate) const TIME_NO_SECONDS: &str = "%H:%M";
pub(crate) const DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub(crate) const DATE_TIME_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";
pub(crate) const OFFSET_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
pub(crate) const OFFSET_DATE_TIME_NO_SECONDS: &str = "%Y-%m-%dT%H:%M%:z";

/// Parses with `primary`, then `fallback`. Reports the primary pattern's error.
pub(crate) fn parse_with_fallback<T>(
    text: &str,
    primary: &str,
    fallback: &str,
    parse: impl Fn(&str, &str) -> chrono::ParseResult<T>,
) -> Result<T, ParseError> {
    match parse(text, primary) {
        Ok(value) => Ok(value),
        Err(err) => parse(text, fallback).map_err(|_| ParseError::from(err)),
    }
}

/// Scanner over `P` designator text.
pub(crate) struct DesignatorCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> DesignatorCursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        DesignatorCursor { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn error(&self) -> ParseError {
        ParseError::invalid(self.text, self.pos)
    }

    pub(crate) fn peek_is_ignore_case(&self, designator: char) -> bool {
        self.peek()
            .is_some_and(|b| char::from(b).eq_ignore_ascii_case(&designator))
    }

    pub(crate) fn expect_ignore_case(&mut self, designator: char) -> Result<(), ParseError> {
        if self.peek_is_ignore_case(designator) {
            self.bump();
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// Consumes an optional sign. Returns `true` for `-`.
    pub(crate) fn sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            _ => false,
        }
    }

    fn starts_number(&self) -> bool {
        matches!(self.peek(), Some(b) if b.is_ascii_digit() || b == b'+' || b == b'-')
    }

    fn digit_run(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        &self.text[start..self.pos]
    }

    fn digits(&mut self) -> Result<i128, ParseError> {
        let run = self.digit_run();
        if run.is_empty() {
            return Err(self.error());
        }
        run.parse()
            .map_err(|_| ParseError::out_of_range(self.text))
    }

    pub(crate) fn signed_integer(&mut self) -> Result<i128, ParseError> {
        let negative = self.sign();
        let value = self.digits()?;
        Ok(if negative { -value } else { value })
    }

    /// Reads `<signed integer><designator>`, or rewinds and returns `None`
    /// when the number is followed by another designator.
    pub(crate) fn try_component(&mut self, designator: char) -> Result<Option<i128>, ParseError> {
        let start = self.pos;
        if !self.starts_number() {
            return Ok(None);
        }
        let value = self.signed_integer()?;
        if self.peek_is_ignore_case(designator) {
            self.bump();
            Ok(Some(value))
        } else {
            self.pos = start;
            Ok(None)
        }
    }

    /// Reads `<signed decimal>S` as whole seconds and signed nanoseconds.
    pub(crate) fn try_seconds(&mut self) -> Result<Option<(i128, i128)>, ParseError> {
        let start = self.pos;
        if !self.starts_number() {
            return Ok(None);
        }
        let negative = self.sign();
        let whole = self.digits()?;
        let mut fraction: i128 = 0;
        if matches!(self.peek(), Some(b'.') | Some(b',')) {
            self.bump();
            let run = self.digit_run();
            if run.is_empty() || run.len() > 9 {
                return Err(self.error());
            }
            let digits: i128 = run.parse().map_err(|_| self.error())?;
            fraction = digits * 10_i128.pow(9 - run.len() as u32);
        }
        if !self.peek_is_ignore_case('S') {
            self.pos = start;
            return Ok(None);
        }
        self.bump();
        Ok(Some(if negative {
            (-whole, -fraction)
        } else {
            (whole, fraction)
        }))
    }
}
