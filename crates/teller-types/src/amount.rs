//! Signed fixed-point amounts
//!
//! Balances may go negative (credit-line accounts), so `Amount` is signed.
//! Arithmetic is checked: there is no floating point and no silent wrap.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// A signed monetary quantity with decimal precision.
///
/// # Examples
///
/// ```
/// use teller_types::Amount;
///
/// let balance = Amount::new(5000);
/// let fee = Amount::from_decimal_str("0.25").unwrap();
/// let after = balance.checked_sub(fee).unwrap();
/// assert_eq!(after.to_string(), "4999.75");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Create from a whole number of units.
    #[inline]
    pub fn new(units: i64) -> Self {
        Amount(Decimal::from(units))
    }

    /// Create a zero amount
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Wrap an existing decimal.
    #[inline]
    pub fn from_decimal(value: Decimal) -> Self {
        Amount(value)
    }

    /// Parse a decimal string like `"50.25"`, `"-4000"` or `"100"`.
    pub fn from_decimal_str(s: &str) -> Result<Self, AmountError> {
        let s = s.trim();
        Decimal::from_str(s)
            .map(Amount)
            .map_err(|_| AmountError::Invalid(format!("'{}' is not a decimal number", s)))
    }

    /// The underlying decimal value.
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checked addition.
    #[inline]
    pub fn checked_add(&self, rhs: Self) -> Result<Self, AmountError> {
        self.0.checked_add(rhs.0).map(Amount).ok_or(AmountError::Overflow)
    }

    /// Checked subtraction. The result may be negative.
    #[inline]
    pub fn checked_sub(&self, rhs: Self) -> Result<Self, AmountError> {
        self.0.checked_sub(rhs.0).map(Amount).ok_or(AmountError::Overflow)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Amount(-self.0)
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self::new(units)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}
