//! Channel-order pixel formats.
//!
//! Every supported format stores four 8-bit channels per pixel; they differ
//! only in the byte order of those channels:
//!
//! ```text
//! Rgba32: [r, g, b, a]
//! Argb32: [a, r, g, b]
//! Bgra32: [b, g, r, a]
//! ```
//!
//! The order is modelled as a permutation table ([`PixelFormat::positions`])
//! so conversions compose two lookups instead of nesting matches.
//!
//! # Usage
//!
//! ```rust
//! use raster_core::PixelFormat;
//!
//! let fmt: PixelFormat = "argb32".parse().unwrap();
//! assert_eq!(fmt, PixelFormat::Argb32);
//! assert_eq!(fmt.positions(), [1, 2, 3, 0]);
//! assert_eq!(PixelFormat::try_from(2u32).unwrap(), PixelFormat::Bgra32);
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Bytes occupied by one pixel in every supported format.
pub const BYTES_PER_PIXEL: usize = 4;

/// Channel index of red in decoded pixel order.
pub const CHANNEL_RED: usize = 0;
/// Channel index of green in decoded pixel order.
pub const CHANNEL_GREEN: usize = 1;
/// Channel index of blue in decoded pixel order.
pub const CHANNEL_BLUE: usize = 2;
/// Channel index of alpha in decoded pixel order.
pub const CHANNEL_ALPHA: usize = 3;

/// Byte order of the four channels inside a 32-bit pixel.
///
/// The numeric ids (`Rgba32 = 0`, `Argb32 = 1`, `Bgra32 = 2`) are the ones
/// used by the host framework; anything else is rejected by
/// [`TryFrom<u32>`](PixelFormat#impl-TryFrom<u32>-for-PixelFormat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PixelFormat {
    /// Bytes `[r, g, b, a]`.
    #[default]
    Rgba32 = 0,
    /// Bytes `[a, r, g, b]`.
    Argb32 = 1,
    /// Bytes `[b, g, r, a]`.
    Bgra32 = 2,
}

impl PixelFormat {
    /// All supported formats.
    pub const ALL: [PixelFormat; 3] = [Self::Rgba32, Self::Argb32, Self::Bgra32];

    /// Byte position of each channel, indexed by `[r, g, b, a]`.
    ///
    /// `positions()[CHANNEL_ALPHA]` is the byte offset of alpha within a pixel.
    #[inline]
    pub const fn positions(self) -> [usize; 4] {
        match self {
            Self::Rgba32 => [0, 1, 2, 3],
            Self::Argb32 => [1, 2, 3, 0],
            Self::Bgra32 => [2, 1, 0, 3],
        }
    }

    /// Byte offset of the alpha channel within a pixel.
    #[inline]
    pub const fn alpha_position(self) -> usize {
        self.positions()[CHANNEL_ALPHA]
    }

    /// Numeric id of this format.
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgba32 => "rgba32",
            Self::Argb32 => "argb32",
            Self::Bgra32 => "bgra32",
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Rgba32),
            1 => Ok(Self::Argb32),
            2 => Ok(Self::Bgra32),
            other => Err(Error::invalid_format(other.to_string())),
        }
    }
}

impl FromStr for PixelFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgba32" | "rgba" => Ok(Self::Rgba32),
            "argb32" | "argb" => Ok(Self::Argb32),
            "bgra32" | "bgra" => Ok(Self::Bgra32),
            _ => Err(Error::invalid_format(s)),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba32 => write!(f, "RGBA32"),
            Self::Argb32 => write!(f, "ARGB32"),
            Self::Bgra32 => write!(f, "BGRA32"),
        }
    }
}
