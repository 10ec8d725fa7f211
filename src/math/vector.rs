//! Two-component value type for sizes, pixel offsets and grid indices
//!
//! Arithmetic dispatches two ways: against another vector it is componentwise,
//! against a plain number the number is broadcast to both axes. Division and
//! remainder are fallible and report [`MosaicError::DivisionByZero`] instead of
//! faulting, and conversions between component types report
//! [`MosaicError::TypeMismatch`] when a value does not fit.
//!
//! Equality is componentwise. Ordering by length lives in [`ByNorm`] so the two
//! notions never share a trait implementation.

use crate::io::error::{MosaicError, Result, type_mismatch};
use num_traits::{Float, Num, NumCast, One, Signed, ToPrimitive};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Numeric component of a [`Vector2`]
///
/// Supplies floor division and floor remainder, whose definitions differ
/// between integer and floating point types.
pub trait Scalar: Num + NumCast + Copy + PartialOrd {
    /// Quotient rounded towards negative infinity
    fn floor_div(self, rhs: Self) -> Self;

    /// Remainder carrying the sign of the divisor
    fn floor_rem(self, rhs: Self) -> Self;
}

macro_rules! signed_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn floor_div(self, rhs: Self) -> Self {
                    let quotient = self / rhs;
                    if self % rhs != 0 && (self < 0) != (rhs < 0) {
                        quotient - 1
                    } else {
                        quotient
                    }
                }

                fn floor_rem(self, rhs: Self) -> Self {
                    self - rhs * self.floor_div(rhs)
                }
            }
        )*
    };
}

macro_rules! unsigned_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn floor_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                fn floor_rem(self, rhs: Self) -> Self {
                    self % rhs
                }
            }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn floor_div(self, rhs: Self) -> Self {
                    (self / rhs).floor()
                }

                fn floor_rem(self, rhs: Self) -> Self {
                    rhs.mul_add(-(self / rhs).floor(), self)
                }
            }
        )*
    };
}

signed_scalar!(i32, i64);
unsigned_scalar!(u32, u64, usize);
float_scalar!(f32, f64);

/// Ordered pair of numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    /// Horizontal component
    pub x: T,
    /// Vertical component
    pub y: T,
}

impl<T> Vector2<T> {
    /// Create a vector from both components
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vector2<T> {
    /// Create a vector with the same value on both axes
    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    /// Component by axis index, 0 for x and 1 for y
    pub const fn get(&self, axis: usize) -> Option<T> {
        match axis {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Components as a tuple
    pub fn to_tuple(self) -> (T, T) {
        (self.x, self.y)
    }

    /// Components as an array
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T: Copy + PartialEq> Vector2<T> {
    /// Whether either component equals `value`
    pub fn contains(&self, value: T) -> bool {
        self.x == value || self.y == value
    }
}

impl<T: Scalar> Vector2<T> {
    /// The null vector
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Whether both components are zero
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Multiply both components by a scalar
    #[must_use]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Dot product
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Componentwise division
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] if either component of `rhs` is zero
    pub fn divide(self, rhs: Self) -> Result<Self> {
        check_divisor(rhs, "vector division")?;
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y))
    }

    /// Division of both components by a scalar
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] if `divisor` is zero
    pub fn divide_scalar(self, divisor: T) -> Result<Self> {
        self.divide(Self::splat(divisor))
    }

    /// Componentwise floor division
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] if either component of `rhs` is zero
    pub fn floor_div(self, rhs: Self) -> Result<Self> {
        check_divisor(rhs, "floor division")?;
        Ok(Self::new(self.x.floor_div(rhs.x), self.y.floor_div(rhs.y)))
    }

    /// Floor division of both components by a scalar
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] if `divisor` is zero
    pub fn floor_div_scalar(self, divisor: T) -> Result<Self> {
        self.floor_div(Self::splat(divisor))
    }

    /// Componentwise floor remainder
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] if either component of `rhs` is zero
    pub fn rem(self, rhs: Self) -> Result<Self> {
        check_divisor(rhs, "remainder")?;
        Ok(Self::new(self.x.floor_rem(rhs.x), self.y.floor_rem(rhs.y)))
    }

    /// Floor remainder of both components by a scalar
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] if `divisor` is zero
    pub fn rem_scalar(self, divisor: T) -> Result<Self> {
        self.rem(Self::splat(divisor))
    }

    /// Raise both components to an integer power
    #[must_use]
    pub fn pow(self, exponent: usize) -> Self
    where
        T: One,
    {
        Self::new(
            num_traits::pow(self.x, exponent),
            num_traits::pow(self.y, exponent),
        )
    }

    /// Convert both components to another numeric type
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::TypeMismatch`] if a component is not
    /// representable in `U` (negative into unsigned, NaN or overflow)
    pub fn try_cast<U: Scalar>(self) -> Result<Vector2<U>> {
        match (<U as NumCast>::from(self.x), <U as NumCast>::from(self.y)) {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(type_mismatch(
                "vector conversion",
                &format!(
                    "({}, {}) does not fit in {}",
                    as_f64(self.x),
                    as_f64(self.y),
                    std::any::type_name::<U>()
                ),
            )),
        }
    }

    /// Both components widened to `f64`
    pub fn to_f64(self) -> Vector2<f64> {
        Vector2::new(as_f64(self.x), as_f64(self.y))
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        as_f64(self.x).hypot(as_f64(self.y))
    }

    /// Slope angle `atan(y / x)` in radians, within `[-pi/2, pi/2]`
    ///
    /// A vector and its opposite share one angle. Vertical vectors map to
    /// `±pi/2` by the sign of `y`, and the null vector to zero.
    pub fn angle(&self) -> f64 {
        let (x, y) = (as_f64(self.x), as_f64(self.y));
        if x == 0.0 {
            return match y.partial_cmp(&0.0) {
                Some(Ordering::Greater) => std::f64::consts::FRAC_PI_2,
                Some(Ordering::Less) => -std::f64::consts::FRAC_PI_2,
                _ => 0.0,
            };
        }
        (y / x).atan()
    }

    /// Half of this vector
    pub fn midpoint(&self) -> Vector2<f64> {
        self.to_f64().scale(0.5)
    }

    /// Unit vector pointing the same way
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::DivisionByZero`] for the null vector
    pub fn normalize(&self) -> Result<Vector2<f64>> {
        self.to_f64().divide_scalar(self.norm())
    }

    /// Compare by length only
    pub fn norm_cmp(&self, other: &Self) -> Option<Ordering> {
        self.norm().partial_cmp(&other.norm())
    }

    /// Componentwise absolute value
    #[must_use]
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        Self::new(self.x.abs(), self.y.abs())
    }
}

impl<T: Scalar + Float> Vector2<T> {
    /// Vector of length `norm` at `angle` radians from the x axis
    pub fn from_polar(norm: T, angle: T) -> Self {
        Self::new(angle.cos(), angle.sin()).scale(norm)
    }

    /// Round both components to `ndigits` decimal places, or to integers for `None`
    ///
    /// Halfway cases round to the even neighbour, so `2.5` becomes `2`.
    #[must_use]
    pub fn round(self, ndigits: Option<i32>) -> Self {
        match ndigits {
            None | Some(0) => Self::new(round_half_even(self.x), round_half_even(self.y)),
            Some(digits) => {
                let factor = <T as NumCast>::from(10.0_f64.powi(digits)).unwrap_or_else(T::one);
                Self::new(
                    round_half_even(self.x * factor) / factor,
                    round_half_even(self.y * factor) / factor,
                )
            }
        }
    }

    /// Raise both components to a floating point power
    #[must_use]
    pub fn powf(self, exponent: T) -> Self {
        Self::new(self.x.powf(exponent), self.y.powf(exponent))
    }

    /// Round to integers and convert to `U`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::TypeMismatch`] if a rounded component does not fit in `U`
    pub fn round_to<U: Scalar>(self) -> Result<Vector2<U>> {
        self.round(None).try_cast()
    }
}

fn round_half_even<T: Float>(value: T) -> T {
    value
        .to_f64()
        .and_then(|v| <T as NumCast>::from(v.round_ties_even()))
        .unwrap_or(value)
}

fn as_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn check_divisor<T: Scalar>(divisor: Vector2<T>, operation: &'static str) -> Result<()> {
    if divisor.x.is_zero() || divisor.y.is_zero() {
        return Err(MosaicError::DivisionByZero { operation });
    }
    Ok(())
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Scalar broadcast, both operand orders
macro_rules! scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Add<$t> for Vector2<$t> {
                type Output = Self;

                fn add(self, rhs: $t) -> Self {
                    self + Self::splat(rhs)
                }
            }

            impl Add<Vector2<$t>> for $t {
                type Output = Vector2<$t>;

                fn add(self, rhs: Vector2<$t>) -> Vector2<$t> {
                    rhs + self
                }
            }

            impl Sub<$t> for Vector2<$t> {
                type Output = Self;

                fn sub(self, rhs: $t) -> Self {
                    self - Self::splat(rhs)
                }
            }

            impl Sub<Vector2<$t>> for $t {
                type Output = Vector2<$t>;

                fn sub(self, rhs: Vector2<$t>) -> Vector2<$t> {
                    Vector2::splat(self) - rhs
                }
            }

            impl Mul<$t> for Vector2<$t> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self {
                    self.scale(rhs)
                }
            }

            impl Mul<Vector2<$t>> for $t {
                type Output = Vector2<$t>;

                fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

scalar_ops!(i32, i64, u32, u64, usize, f32, f64);

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(vector: Vector2<T>) -> Self {
        (vector.x, vector.y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    fn from(vector: Vector2<T>) -> Self {
        [vector.x, vector.y]
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

/// Orders and equates vectors by Euclidean length
///
/// `ByNorm(Vector2::new(3, 4)) == ByNorm(Vector2::new(5, 0))` even though the
/// vectors themselves differ.
#[derive(Debug, Clone, Copy)]
pub struct ByNorm<T>(pub Vector2<T>);

impl<T: Scalar> PartialEq for ByNorm<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.norm_cmp(&other.0) == Some(Ordering::Equal)
    }
}

impl<T: Scalar> PartialOrd for ByNorm<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.norm_cmp(&other.0)
    }
}
