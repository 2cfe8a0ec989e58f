use core::fmt;

/// The value a numeral parsed to.
///
/// `Long` is produced only when the literal contained no decimal point,
/// no exponent marker, and the 64-bit accumulation never overflowed;
/// everything else is `Double`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// An exact 64-bit signed integer.
    Long(i64),
    /// A 64-bit floating-point value.
    Double(f64),
}

impl Number {
    /// Returns `true` for the exact-integer interpretation.
    #[must_use]
    pub const fn is_long(self) -> bool {
        matches!(self, Number::Long(_))
    }

    /// The value as an `f64`, converting exact integers as needed.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Long(l) => l as f64,
            Number::Double(d) => d,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Long(l) => write!(f, "{l}"),
            Number::Double(d) => write!(f, "{d}"),
        }
    }
}

/// A successful parse: the recognized value plus how far the cursor moved.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parsed {
    /// The recognized value.
    pub number: Number,
    /// One past the last code unit that was part of the numeral.
    ///
    /// When the input held no digits this is the number of consumed sign
    /// characters (0 or 1), and `number` is `Number::Long(0)`; callers
    /// must treat that as "no numeral present" rather than a parsed zero.
    pub len: usize,
    /// Whether at least one mantissa digit was consumed.
    ///
    /// A convenience over comparing [`Parsed::len`] against the sign
    /// width; the cursor contract above remains authoritative.
    pub saw_digits: bool,
}
