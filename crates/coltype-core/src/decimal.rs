//! Fixed-precision decimal parameters.

use std::fmt;

use crate::error::{Error, Result};

/// Parameters of a `decimal(precision, scale)` column.
///
/// Scale may be negative (digits rounded to the left of the decimal point);
/// it can never exceed the precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalType {
    precision: u32,
    scale: i32,
}

impl DecimalType {
    pub const MAX_PRECISION: u32 = 38;
    pub const MAX_SCALE: i32 = 38;

    /// Widest decimal the engine produces on its own.
    pub const SYSTEM_DEFAULT: DecimalType = DecimalType {
        precision: 38,
        scale: 18,
    };

    /// What the bare name `decimal` resolves to.
    pub const USER_DEFAULT: DecimalType = DecimalType {
        precision: 10,
        scale: 0,
    };

    pub fn new(precision: u32, scale: i32) -> Result<Self> {
        if precision > Self::MAX_PRECISION {
            return Err(Error::InvalidDecimal {
                precision,
                scale,
                reason: "precision exceeds the maximum of 38",
            });
        }
        if scale > precision as i32 {
            return Err(Error::InvalidDecimal {
                precision,
                scale,
                reason: "scale cannot be greater than precision",
            });
        }
        Ok(Self { precision, scale })
    }

    pub const fn precision(&self) -> u32 {
        self.precision
    }

    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Values up to 18 digits fit a 64-bit unscaled long.
    pub const fn default_size(&self) -> usize {
        if self.precision <= 18 {
            8
        } else {
            16
        }
    }

    pub fn type_name(&self) -> String {
        format!("decimal({},{})", self.precision, self.scale)
    }
}

impl Default for DecimalType {
    fn default() -> Self {
        Self::SYSTEM_DEFAULT
    }
}

impl fmt::Display for DecimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decimal({},{})", self.precision, self.scale)
    }
}
