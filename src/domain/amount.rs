use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Slack allowed when checking that a float lands on a whole number of cents
const PRECISION_TOLERANCE: f64 = 1e-6;

/// Trait representing a monetary amount with fixed precision
pub trait AmountType:
    Copy
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Default
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
{
    /// Parse from decimal string (e.g., "12.50")
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Convert from a float, rejecting values finer than the supported precision
    fn from_f64(value: f64) -> Result<Self, DomainError>;

    /// Lossy conversion back to a float, for display and interop
    fn to_f64(&self) -> f64;

    /// Convert to decimal string with 2 decimal places
    fn to_decimal_string(&self) -> String;

    /// Checked addition, returns None on overflow
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on underflow
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;

    /// Strictly greater than zero
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

/// Exact monetary value stored as a whole number of cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Cents(i64);

impl Cents {
    const SCALE: i64 = 100;
    const FRACTION_DIGITS: usize = 2;

    /// Create from a raw number of cents
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get raw number of cents
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl AmountType for Cents {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            Some((_, "")) => return Err(DomainError::InvalidAmount),
            Some((integer, decimal)) => (integer, decimal),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if integer_part.is_empty() || !all_digits(integer_part) || !all_digits(decimal_part) {
            return Err(DomainError::InvalidAmount);
        }

        // Digits past the cent position are tolerated only when they are zero padding
        let (cents_part, excess) =
            decimal_part.split_at(decimal_part.len().min(Self::FRACTION_DIGITS));
        if excess.bytes().any(|b| b != b'0') {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::Overflow)?;

        let cents: i64 = format!("{:0<2}", cents_part)
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(cents))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount);
        }

        let scaled = value * Self::SCALE as f64;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > PRECISION_TOLERANCE {
            return Err(DomainError::InvalidAmount);
        }

        if rounded.abs() >= i64::MAX as f64 {
            return Err(DomainError::Overflow);
        }

        Ok(Self(rounded as i64))
    }

    fn to_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    fn to_decimal_string(&self) -> String {
        let abs_value = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, abs_value / scale, abs_value % scale)
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl Add for Cents {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Cents {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Whether `value` is acceptable as the amount of a deposit, withdrawal or transfer.
///
/// The value must be strictly positive and carry at most two fractional digits.
/// Precision is judged on the float itself, so `42.000000` and `42.0` are the
/// same value and both pass. Amounts are held as `i64` cents, so values of
/// roughly `9.2e16` (`i64::MAX / 100`) and above are out of range and invalid.
pub fn is_amount_valid(value: f64) -> bool {
    Cents::from_f64(value).is_ok_and(|amount| amount.is_positive())
}
