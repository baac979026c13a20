//! Position type shared by the cube mesher and the sector indexer.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// World-space point. Also used for vertex positions handed to the renderer.
///
/// Axes: +X right, +Y up, +Z front.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// True when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from(v: (f32, f32, f32)) -> Self {
        Vec3::new(v.0, v.1, v.2)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f32]> for Vec3 {
    type Error = InvalidPositionError;

    fn try_from(s: &[f32]) -> Result<Self, Self::Error> {
        match *s {
            [x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => Err(InvalidPositionError::WrongArity(s.len())),
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Input that cannot be read as an `(x, y, z)` position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidPositionError {
    /// Got this many components instead of 3.
    WrongArity(usize),
    /// A packed `x,y,z` list of `len` scalars ends in a partial triple.
    PartialTriple { len: usize },
    /// A component was NaN or infinite.
    NonFinite(Vec3),
    /// A component does not fit the integer block lattice.
    OutOfRange(Vec3),
}

impl fmt::Display for InvalidPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPositionError::WrongArity(n) => {
                write!(f, "invalid position: expected 3 components, got {}", n)
            }
            InvalidPositionError::PartialTriple { len } => write!(
                f,
                "invalid position: {} packed scalars leave {} trailing after the last full triple",
                len,
                len % 3
            ),
            InvalidPositionError::NonFinite(p) => {
                write!(f, "invalid position: non-finite component in {:?}", p)
            }
            InvalidPositionError::OutOfRange(p) => {
                write!(f, "invalid position: {:?} is outside the block lattice", p)
            }
        }
    }
}

impl std::error::Error for InvalidPositionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn array_conversion_is_lossless(v: Vec3) {
            let back = Vec3::from(v.to_array());
            prop_assert_eq!(back.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));
        }
    }

    #[test]
    fn slice_conversion_requires_three_components() {
        let ok: &[f32] = &[1.0, 2.0, 3.0];
        assert_eq!(Vec3::try_from(ok), Ok(Vec3::new(1.0, 2.0, 3.0)));
        let short: &[f32] = &[1.0, 2.0];
        assert_eq!(Vec3::try_from(short), Err(InvalidPositionError::WrongArity(2)));
        let long: &[f32] = &[1.0, 2.0, 3.0, 4.0];
        assert_eq!(Vec3::try_from(long), Err(InvalidPositionError::WrongArity(4)));
    }
}
