//! UTCTime values.
//!
//! This module contains the [`UtcTimeValue`] type for the content of the
//! UTCTime universal type and the [`UtcTime`] type with the fields parsed
//! from it.

use std::fmt;
use crate::mode::Mode;


//------------ UtcTime -------------------------------------------------------

/// The calendar fields of a UTCTime value.
///
/// Despite its name, a UTCTime value in BER may carry an explicit offset
/// from UTC. The fields are kept as they appear in the encoding, i.e., they
/// describe local time at that offset.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct UtcTime {
    /// The full year number, such as 2014.
    pub year: u32,

    /// The month of the year, 1 to 12.
    pub month: u8,

    /// The day of the month, 1 to 31.
    pub day: u8,

    /// The hour, 0 to 23.
    pub hour: u8,

    /// The minute, 0 to 59.
    pub minute: u8,

    /// The second, 0 to 59. Zero if the value has no seconds.
    pub second: u8,

    /// Whether seconds were given. Always true in DER.
    pub has_seconds: bool,

    /// Whether the offset from UTC was given explicitly.
    ///
    /// This is true even if that offset is `+0000`. Always false in DER.
    pub is_nonutc: bool,

    /// The offset from UTC in minutes.
    pub tzoffset: i32,
}


//------------ UtcTimeValue --------------------------------------------------

/// The content of a UTCTime value.
///
/// The content is parsed right away when the value is created. Parsing
/// never fails, instead it records whether the content was valid. This can
/// later be checked through [`validate`][Self::validate].
///
/// Two forms are accepted: `YYMMDDhhmm[ss]Z` and `YYMMDDhhmm[ss]±hhmm`. In
/// DER, only the first form with the seconds present is allowed. Two-digit
/// years of 50 and up are in the 1900s, the others in the 2000s.
///
/// Only the range of each field is checked, not whether the date actually
/// exists. February 30 is therefore accepted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct UtcTimeValue {
    /// The fields parsed as far as possible.
    fields: UtcTime,

    /// Whether parsing succeeded.
    valid: bool,
}

impl UtcTimeValue {
    /// Parses the content octets of a UTCTime value.
    pub fn parse(content: &[u8], mode: Mode) -> Self {
        let mut fields = UtcTime::default();
        let valid = Self::parse_fields(
            &mut Digits(content), mode, &mut fields
        ).is_some();
        UtcTimeValue { fields, valid }
    }

    /// Returns whether the content was a valid UTCTime.
    pub fn validate(&self) -> bool {
        self.valid
    }

    /// Returns the parsed fields.
    ///
    /// If the value isn’t valid, the fields are only filled in up to the
    /// point where parsing failed.
    pub fn fields(&self) -> &UtcTime {
        &self.fields
    }

    fn parse_fields(
        content: &mut Digits, mode: Mode, res: &mut UtcTime
    ) -> Option<()> {
        let year = u32::from(content.take_in(0, 99)?);
        res.year = if year < 50 { 2000 + year } else { 1900 + year };
        res.month = content.take_in(1, 12)?;
        res.day = content.take_in(1, 31)?;
        res.hour = content.take_in(0, 23)?;
        res.minute = content.take_in(0, 59)?;

        if content.peek()?.is_ascii_digit() {
            res.second = content.take_in(0, 59)?;
            res.has_seconds = true;
        }
        else if mode.is_restricted() {
            return None
        }

        match content.take()? {
            b'Z' => { }
            sign @ (b'+' | b'-') if !mode.is_restricted() => {
                let hours = i32::from(content.take_in(0, 23)?);
                let minutes = i32::from(content.take_in(0, 59)?);
                let offset = hours * 60 + minutes;
                res.is_nonutc = true;
                res.tzoffset = if sign == b'-' { -offset } else { offset };
            }
            _ => return None
        }

        if content.0.is_empty() {
            Some(())
        }
        else {
            None
        }
    }
}


//--- Display

impl fmt::Display for UtcTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = &self.fields;
        write!(
            f, "{:04}-{:02}-{:02} {:02}:{:02}",
            fields.year, fields.month, fields.day, fields.hour, fields.minute
        )?;
        if fields.has_seconds {
            write!(f, ":{:02}", fields.second)?;
        }
        if fields.is_nonutc {
            let sign = if fields.tzoffset < 0 { '-' } else { '+' };
            let offset = fields.tzoffset.unsigned_abs();
            write!(f, " {}{:02}{:02}", sign, offset / 60, offset % 60)
        }
        else {
            f.write_str(" UTC")
        }
    }
}


//------------ Digits --------------------------------------------------------

/// The remaining content while parsing.
struct Digits<'a>(&'a [u8]);

impl<'a> Digits<'a> {
    fn peek(&self) -> Option<u8> {
        self.0.first().copied()
    }

    fn take(&mut self) -> Option<u8> {
        let (&first, tail) = self.0.split_first()?;
        self.0 = tail;
        Some(first)
    }

    /// Takes a two digit decimal number within the given range.
    fn take_in(&mut self, min: u8, max: u8) -> Option<u8> {
        let tens = self.take().filter(u8::is_ascii_digit)?;
        let ones = self.take().filter(u8::is_ascii_digit)?;
        let res = (tens - b'0') * 10 + (ones - b'0');
        if (min..=max).contains(&res) {
            Some(res)
        }
        else {
            None
        }
    }
}


//============ Tests =========================================================
