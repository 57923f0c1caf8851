//! ISO-8601 style duration expressions (`P[nY][nM][nW][nD][T[nH][nM][nS]]`).
//!
//! Calendar units use fixed approximations: a year is 365 days, a month is
//! 30 days and a week is 7 days. Durations coming from the voice platform are
//! short, and existing clients depend on these exact values.

use crate::utils::error::{Result, SkillError};
use std::iter::Peekable;
use std::str::FromStr;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
pub const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

const DURATION_DESIGNATOR: char = 'P';
const TIME_DESIGNATOR: char = 'T';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Number(u64),
    Designator(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Component {
    fn designator(self) -> char {
        match self {
            Component::Years => 'Y',
            Component::Months => 'M',
            Component::Weeks => 'W',
            Component::Days => 'D',
            Component::Hours => 'H',
            Component::Minutes => 'M',
            Component::Seconds => 'S',
        }
    }
}

// Order matters: groups must appear in this order within their section.
const DATE_COMPONENTS: [Component; 4] = [
    Component::Years,
    Component::Months,
    Component::Weeks,
    Component::Days,
];
const TIME_COMPONENTS: [Component; 3] = [Component::Hours, Component::Minutes, Component::Seconds];

/// A parsed duration expression. Absent groups are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoDuration {
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl IsoDuration {
    /// Total elapsed seconds, or `None` if the sum does not fit in a `u64`.
    pub fn checked_total_seconds(&self) -> Option<u64> {
        [
            (self.years, SECONDS_PER_YEAR),
            (self.months, SECONDS_PER_MONTH),
            (self.weeks, SECONDS_PER_WEEK),
            (self.days, SECONDS_PER_DAY),
            (self.hours, SECONDS_PER_HOUR),
            (self.minutes, SECONDS_PER_MINUTE),
            (self.seconds, 1),
        ]
        .iter()
        .try_fold(0u64, |total, &(count, unit)| {
            count.checked_mul(unit).and_then(|s| total.checked_add(s))
        })
    }

    fn set(&mut self, component: Component, value: u64) {
        let slot = match component {
            Component::Years => &mut self.years,
            Component::Months => &mut self.months,
            Component::Weeks => &mut self.weeks,
            Component::Days => &mut self.days,
            Component::Hours => &mut self.hours,
            Component::Minutes => &mut self.minutes,
            Component::Seconds => &mut self.seconds,
        };
        *slot = value;
    }

    fn read_section<I>(
        &mut self,
        input: &str,
        tokens: &mut Peekable<I>,
        section: &[Component],
    ) -> Result<()>
    where
        I: Iterator<Item = Token>,
    {
        let mut remaining = section;

        while let Some(Token::Number(value)) = tokens.peek().copied() {
            tokens.next();

            let designator = match tokens.next() {
                Some(Token::Designator(c)) => c,
                _ => {
                    return Err(SkillError::malformed_duration(
                        input,
                        format!("missing designator after {}", value),
                    ))
                }
            };

            let position = remaining
                .iter()
                .position(|component| component.designator() == designator)
                .ok_or_else(|| {
                    SkillError::malformed_duration(
                        input,
                        format!("unexpected designator '{}'", designator),
                    )
                })?;

            self.set(remaining[position], value);
            remaining = &remaining[position + 1..];
        }

        Ok(())
    }
}

impl FromStr for IsoDuration {
    type Err = SkillError;

    fn from_str(input: &str) -> Result<Self> {
        let mut tokens = tokenize(input)?.into_iter().peekable();

        if tokens.next() != Some(Token::Designator(DURATION_DESIGNATOR)) {
            return Err(SkillError::malformed_duration(
                input,
                format!("expected leading '{}'", DURATION_DESIGNATOR),
            ));
        }

        let mut duration = IsoDuration::default();
        duration.read_section(input, &mut tokens, &DATE_COMPONENTS)?;

        if tokens
            .next_if_eq(&Token::Designator(TIME_DESIGNATOR))
            .is_some()
        {
            duration.read_section(input, &mut tokens, &TIME_COMPONENTS)?;
        }

        match tokens.next() {
            None => Ok(duration),
            Some(Token::Number(n)) => Err(SkillError::malformed_duration(
                input,
                format!("unexpected trailing number {}", n),
            )),
            Some(Token::Designator(c)) => Err(SkillError::malformed_duration(
                input,
                format!("unexpected designator '{}'", c),
            )),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if let Some(digit) = c.to_digit(10) {
            let mut value = u64::from(digit);
            while let Some(next) = chars.peek().and_then(|&(_, c)| c.to_digit(10)) {
                chars.next();
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(next)))
                    .ok_or_else(|| {
                        SkillError::malformed_duration(input, "number is too large")
                    })?;
            }
            tokens.push(Token::Number(value));
        } else if c.is_ascii_uppercase() {
            tokens.push(Token::Designator(c));
        } else {
            return Err(SkillError::malformed_duration(
                input,
                format!("unexpected character '{}' at position {}", c, position),
            ));
        }
    }

    Ok(tokens)
}

/// Converts a duration expression into elapsed seconds.
pub fn parse_duration(input: &str) -> Result<u64> {
    let duration: IsoDuration = input.parse()?;
    duration
        .checked_total_seconds()
        .ok_or_else(|| SkillError::malformed_duration(input, "duration is too long"))
}
