//! Integer width selectors for length prefixes and native integers.

use crate::CursorError;

/// One of the four supported integer widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    /// Resolves a bit count, returning `None` unless it is 8, 16, 32 or 64.
    pub const fn from_bits(bits: u32) -> Option<Width> {
        match bits {
            8 => Some(Width::W8),
            16 => Some(Width::W16),
            32 => Some(Width::W32),
            64 => Some(Width::W64),
            _ => None,
        }
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl TryFrom<u32> for Width {
    type Error = CursorError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Width::from_bits(bits).ok_or(CursorError::InvalidPrefixWidth { bits })
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> u32 {
        width.bits()
    }
}

/// Bit width of the host's machine word.
pub const HOST_BITS: u32 = usize::BITS;
