//! Packed 32-bit ARGB color.
//!
//! Channels are laid out as `0xAARRGGBB`. Alpha `0xFF` is opaque and
//! `0x00` fully transparent. [`Argb::TRANSPARENT`] doubles as the value
//! returned by a [`Matrix`](crate::Matrix) for window cells that fall
//! outside the image.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A packed `0xAARRGGBB` color value.
///
/// # Example
///
/// ```rust
/// use matfx_core::Argb;
///
/// let c = Argb::from_channels(0xFF, 0x10, 0x20, 0x30);
/// assert_eq!(c.to_u32(), 0xFF10_2030);
/// assert_eq!(c.g(), 0x20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Fully transparent black, `0x00000000`.
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    /// Opaque black, `0xFF000000`.
    pub const OPAQUE_BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white, `0xFFFFFFFF`.
    pub const OPAQUE_WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Packs four 8-bit channels.
    #[inline]
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Returns the packed value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Returns the channels as `[a, r, g, b]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Returns this color with its alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | (a as u32) << 24)
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
