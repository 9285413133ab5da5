//! Non-zero coefficients of matrix entries.
//! Only the field with two elements is provided; a `0` entry is the absence of a coefficient.

use std::ops::{Add, Mul};

/// Ensure that you are unable to construct an element that represents `0`.
/// Instead, `0` will be represented by the absence of a summand, i.e. `None`.
pub trait NonZeroCoefficient:
    Eq
    + Sized
    + Copy
    + Add<Option<Self>, Output = Option<Self>>
    + Add<Self, Output = Option<Self>>
    + Mul<Self, Output = Self>
{
    fn one() -> Self;

    /// Adds `rhs` into `lhs`, where either side may be `0`.
    fn add_into(lhs: &mut Option<Self>, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            *lhs = rhs + *lhs;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Z2;

impl Add<Z2> for Z2 {
    type Output = Option<Z2>;

    // 1 + 1 = 0
    fn add(self, _rhs: Z2) -> Self::Output {
        None
    }
}

impl Add<Option<Z2>> for Z2 {
    type Output = Option<Z2>;

    fn add(self, rhs: Option<Z2>) -> Self::Output {
        match rhs {
            None => Some(self),
            Some(rhs) => self + rhs,
        }
    }
}

impl Mul<Z2> for Z2 {
    type Output = Z2;

    // 1 * 1 = 1
    fn mul(self, _rhs: Z2) -> Self::Output {
        Z2
    }
}

impl NonZeroCoefficient for Z2 {
    fn one() -> Self {
        Self
    }
}

impl Z2 {
    /// Reads a 0/1 entry, any non-zero value counts as `1`.
    pub fn from_bit(bit: u8) -> Option<Z2> {
        (bit != 0).then_some(Z2)
    }

    pub fn to_bit(entry: Option<Z2>) -> u8 {
        u8::from(entry.is_some())
    }
}
