//! GD 2.x (`.gd`) image format support.
//!
//! The uncompressed format written by libgd's `gdImageGd`. All integers are
//! big-endian:
//!
//! ```text
//! u16  signature        0xFFFE true color, 0xFFFF palette
//! u16  width
//! u16  height
//! u8   true color flag  1 / 0, must agree with the signature
//!
//! true color:
//!   i32  transparent color (-1 for none)
//!   u32  pixels[width * height]       0xAARRGGBB, 7-bit alpha
//!
//! palette:
//!   u16  colors total (<= 256)
//!   i32  transparent index (-1 for none)
//!   u8   palette[256][4]              r, g, b, a (7-bit alpha)
//!   u8   pixels[width * height]       palette indices
//! ```
//!
//! GD alpha runs from 0 (opaque) to 127 (transparent). Decoded pixels are
//! converted to 8-bit alpha [`Argb`] where `0xFF` is opaque. Only true color
//! files are written.

use crate::{IoError, IoResult};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use matfx_core::{Argb, Decoded, Image, Size};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Signature of a true color GD 2.x file.
pub const TRUECOLOR_SIGNATURE: u16 = 0xFFFE;
/// Signature of a palette GD 2.x file.
pub const PALETTE_SIGNATURE: u16 = 0xFFFF;

const MAX_COLORS: usize = 256;
const GD_ALPHA_MAX: u32 = 127;
const NO_TRANSPARENT: i32 = -1;

/// A decoded GD 2.x image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Whether the file stored true color pixels rather than palette indices.
    pub truecolor: bool,
    /// Color marked transparent in the header, if any.
    pub transparent: Option<Argb>,
    /// Row-major pixels with 8-bit alpha.
    pub pixels: Vec<Argb>,
}

impl Decoded for GdImage {
    fn dimensions(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }
}

/// Converts a GD pixel (7-bit alpha, 0 opaque) to 8-bit alpha ARGB.
#[inline]
pub fn gd_to_argb(value: u32) -> Argb {
    let alpha = (value >> 24) & 0x7F;
    let alpha = 255 - alpha * 255 / GD_ALPHA_MAX;
    Argb(alpha << 24 | (value & 0x00FF_FFFF))
}

/// Converts an 8-bit alpha ARGB color to a GD pixel.
#[inline]
pub fn argb_to_gd(color: Argb) -> u32 {
    let alpha = (255 - color.a() as u32) >> 1;
    alpha << 24 | (color.0 & 0x00FF_FFFF)
}

/// Reads a GD 2.x file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GdImage> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading GD image");
    let file = File::open(path)?;
    decode(&mut BufReader::new(file))
}

/// Reads a GD 2.x file straight into an [`Image`].
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    Ok(Image::from_decoded(read(path)?)?)
}

/// Decodes a GD 2.x image held in memory.
pub fn read_from_memory(data: &[u8]) -> IoResult<GdImage> {
    let mut cursor = data;
    decode(&mut cursor)
}

/// Decodes a GD 2.x image from a reader.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for GD 1.x files (no 2.x signature)
/// - [`IoError::InvalidFile`] for inconsistent headers
/// - [`IoError::DecodeError`] for truncated data or out-of-range palette indices
pub fn decode<R: Read>(reader: &mut R) -> IoResult<GdImage> {
    let signature = reader.read_u16::<BigEndian>().map_err(truncated)?;
    let truecolor = match signature {
        TRUECOLOR_SIGNATURE => true,
        PALETTE_SIGNATURE => false,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "GD 1.x or unknown signature 0x{other:04X}"
            )));
        }
    };

    let width = reader.read_u16::<BigEndian>().map_err(truncated)? as u32;
    let height = reader.read_u16::<BigEndian>().map_err(truncated)? as u32;
    let flag = reader.read_u8().map_err(truncated)?;
    if (flag != 0) != truecolor {
        return Err(IoError::InvalidFile(format!(
            "true color flag {flag} contradicts signature 0x{signature:04X}"
        )));
    }

    debug!(width, height, truecolor, "GD header");

    let count = width as usize * height as usize;
    let (transparent, pixels) = if truecolor {
        read_truecolor(reader, count)?
    } else {
        read_palette(reader, count)?
    };

    Ok(GdImage {
        width,
        height,
        truecolor,
        transparent,
        pixels,
    })
}

fn read_truecolor<R: Read>(reader: &mut R, count: usize) -> IoResult<(Option<Argb>, Vec<Argb>)> {
    let transparent = reader.read_i32::<BigEndian>().map_err(truncated)?;
    let transparent = (transparent != NO_TRANSPARENT).then(|| gd_to_argb(transparent as u32));

    let mut pixels = Vec::with_capacity(count.min(1 << 20));
    for _ in 0..count {
        pixels.push(gd_to_argb(reader.read_u32::<BigEndian>().map_err(truncated)?));
    }
    Ok((transparent, pixels))
}

fn read_palette<R: Read>(reader: &mut R, count: usize) -> IoResult<(Option<Argb>, Vec<Argb>)> {
    let colors_total = reader.read_u16::<BigEndian>().map_err(truncated)? as usize;
    if colors_total > MAX_COLORS {
        return Err(IoError::InvalidFile(format!(
            "palette declares {colors_total} colors, at most {MAX_COLORS} allowed"
        )));
    }
    let transparent = reader.read_i32::<BigEndian>().map_err(truncated)?;

    let mut entries = [0u8; MAX_COLORS * 4];
    reader.read_exact(&mut entries).map_err(truncated)?;
    let palette: Vec<Argb> = entries
        .chunks_exact(4)
        .map(|e| {
            let [r, g, b, a] = [e[0], e[1], e[2], e[3]];
            gd_to_argb(u32::from_be_bytes([a & 0x7F, r, g, b]))
        })
        .collect();
    trace!(colors_total, transparent, "GD palette");

    let transparent = usize::try_from(transparent)
        .ok()
        .filter(|&i| i < colors_total)
        .map(|i| palette[i]);

    let mut pixels = Vec::with_capacity(count.min(1 << 20));
    for _ in 0..count {
        let index = reader.read_u8().map_err(truncated)? as usize;
        if index >= colors_total {
            return Err(IoError::DecodeError(format!(
                "palette index {index} out of range ({colors_total} colors)"
            )));
        }
        pixels.push(palette[index]);
    }
    Ok((transparent, pixels))
}

/// Writes an image as a true color GD 2.x file.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), width = image.width(), height = image.height(), "writing GD image");
    let mut writer = BufWriter::new(File::create(path)?);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Encodes an image as a true color GD 2.x file in memory.
pub fn write_to_memory(image: &Image) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(11 + image.len() * 4);
    encode(&mut out, image)?;
    Ok(out)
}

/// Encodes an image as a true color GD 2.x stream.
///
/// # Errors
///
/// [`IoError::EncodeError`] if a dimension exceeds `u16::MAX`.
pub fn encode<W: Write>(writer: &mut W, image: &Image) -> IoResult<()> {
    let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(IoError::EncodeError(format!(
                "{} exceeds the GD limit of {}x{}",
                image.size(),
                u16::MAX,
                u16::MAX
            )));
        }
    };

    writer.write_u16::<BigEndian>(TRUECOLOR_SIGNATURE)?;
    writer.write_u16::<BigEndian>(width)?;
    writer.write_u16::<BigEndian>(height)?;
    writer.write_u8(1)?;
    writer.write_i32::<BigEndian>(NO_TRANSPARENT)?;
    for &pixel in image.pixels() {
        writer.write_u32::<BigEndian>(argb_to_gd(pixel))?;
    }
    Ok(())
}

fn truncated(e: io::Error) -> IoError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        IoError::DecodeError("unexpected end of GD data".into())
    } else {
        IoError::Io(e)
    }
}
