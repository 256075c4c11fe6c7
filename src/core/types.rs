//! Strongly-typed value objects used by the entities.
//!
//! Every wrapper validates its input on construction, so once a value reaches a
//! tracker it can be treated as trusted. The serde representation goes through
//! the same constructors, which means a corrupt data file fails to load instead
//! of producing invalid records.
use chrono::{Datelike, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H%M";

/// Errors produced when attempting to construct a value object.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    InvalidName,
    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    InvalidPhone,
    #[error("Emails should be of the format local-part@domain")]
    InvalidEmail,
    #[error("Titles should not be blank or start with whitespace")]
    InvalidTitle,
    #[error("Descriptions should not be blank or start with whitespace")]
    InvalidDescription,
    #[error("Tags names should be a single alphanumeric word")]
    InvalidTag,
    #[error("Amounts should be non-negative numbers up to 1000000000000 with at most 2 decimal places")]
    InvalidAmount,
    #[error("Duration (in half hour intervals) must be at least 0.5 and at most 24.0")]
    InvalidDuration,
    #[error("Dates should be valid and in the format dd-MM-yyyy")]
    InvalidDate,
    #[error("Times should be valid and in the 24-hour format HHmm")]
    InvalidTime,
    #[error("Service codes should be SC followed by 3 digits")]
    InvalidServiceCode,
    #[error("Index is not a non-zero unsigned integer")]
    InvalidIndex,
}

fn is_valid_name(value: &str) -> bool {
    value.starts_with(|c: char| c.is_alphanumeric())
        && value.chars().all(|c| c.is_alphanumeric() || c == ' ')
}

fn is_valid_phone(value: &str) -> bool {
    value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let alnum = |c: char| c.is_ascii_alphanumeric();
    let local_ok = local.starts_with(alnum)
        && local.ends_with(alnum)
        && local
            .chars()
            .all(|c| alnum(c) || matches!(c, '+' | '_' | '.' | '-'));
    let labels_ok = domain.split('.').all(|label| {
        label.starts_with(alnum)
            && label.ends_with(alnum)
            && label.chars().all(|c| alnum(c) || c == '-')
    });
    let tld_ok = domain.rsplit('.').next().is_some_and(|tld| tld.len() >= 2);
    local_ok && labels_ok && tld_ok
}

fn is_valid_free_text(value: &str) -> bool {
    value.starts_with(|c: char| !c.is_whitespace())
}

fn is_valid_tag(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_alphanumeric())
}

fn is_valid_service_code(value: &str) -> bool {
    value
        .strip_prefix("SC")
        .is_some_and(|digits| digits.len() == 3 && digits.chars().all(|c| c.is_ascii_digit()))
}

/// Generates a validated newtype over `String`.
macro_rules! string_value {
    ($name:ident, $check:ident, $error:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new<S: Into<String>>(value: S) -> Result<Self, ValidationError> {
                let value = value.into();
                if $check(&value) {
                    Ok(Self(value))
                } else {
                    Err($error)
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

string_value!(Name, is_valid_name, ValidationError::InvalidName, "A client's full name.");
string_value!(Phone, is_valid_phone, ValidationError::InvalidPhone, "A client's phone number, the client identity key.");
string_value!(Email, is_valid_email, ValidationError::InvalidEmail, "A client's email address.");
string_value!(Title, is_valid_free_text, ValidationError::InvalidTitle, "The title of a service.");
string_value!(Description, is_valid_free_text, ValidationError::InvalidDescription, "Free-form description of an expense.");
string_value!(Tag, is_valid_tag, ValidationError::InvalidTag, "A single-word label attached to clients and expenses.");
string_value!(ServiceCode, is_valid_service_code, ValidationError::InvalidServiceCode, "Generated code identifying a service, e.g. `SC000`.");

impl ServiceCode {
    /// Largest number a service code can carry.
    pub const MAX_NUMBER: u16 = 999;

    /// Builds the code for `number`, returning `None` once the three digits run out.
    pub fn from_number(number: u16) -> Option<Self> {
        (number <= Self::MAX_NUMBER).then(|| Self(format!("SC{number:03}")))
    }
}

/// A non-negative monetary amount with at most two decimal places, capped at
/// [`Amount::MAX_UNITS`] so that totals over many entries cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

impl Amount {
    /// Largest accepted amount, in whole currency units.
    pub const MAX_UNITS: i64 = 1_000_000_000_000;

    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        let value = value.normalize();
        if value.is_sign_negative()
            || value.scale() > 2
            || value > Decimal::from(Self::MAX_UNITS)
        {
            return Err(ValidationError::InvalidAmount);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| ValidationError::InvalidAmount)?;
        Self::new(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.to_string()
    }
}

/// How long a service takes, stored as a count of half hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Duration(u8);

impl Duration {
    const MAX_HALF_HOURS: u8 = 48;

    pub fn from_hours(hours: f64) -> Result<Self, ValidationError> {
        let halves = hours * 2.0;
        if !halves.is_finite() || halves.fract() != 0.0 {
            return Err(ValidationError::InvalidDuration);
        }
        if halves < 1.0 || halves > f64::from(Self::MAX_HALF_HOURS) {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(Self(halves as u8))
    }

    pub fn hours(&self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.hours())
    }
}

impl FromStr for Duration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours: f64 = s.trim().parse().map_err(|_| ValidationError::InvalidDuration)?;
        Self::from_hours(hours)
    }
}

impl TryFrom<f64> for Duration {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_hours(value)
    }
}

impl From<Duration> for f64 {
    fn from(value: Duration) -> Self {
        value.hours()
    }
}

/// A calendar date written as `dd-MM-yyyy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate)
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

/// A time of day written as `HHmm`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Time(NaiveTime);

impl Time {
    pub fn value(&self) -> NaiveTime {
        self.0
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for Time {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 {
            return Err(ValidationError::InvalidTime);
        }
        NaiveTime::parse_from_str(s, TIME_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTime)
    }
}

impl TryFrom<String> for Time {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Time> for String {
    fn from(value: Time) -> Self {
        value.to_string()
    }
}

/// A position in a displayed list. Users see it 1-based, lookups use it 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> Result<Self, ValidationError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(ValidationError::InvalidIndex)
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Index {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| ValidationError::InvalidIndex)?;
        Self::from_one_based(value)
    }
}
