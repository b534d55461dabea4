//! Pixel source adapters — the external interface into the pipeline.
//!
//! A pixel source exposes width, height, and either a contiguous
//! (R,G,B,A)-interleaved byte buffer with known stride, or a per-pixel
//! accessor. The core pipeline only depends on [`PixelSource`]; decoding
//! JPEG/PNG/WebP from disk is handled by [`ImagePixelSource`], a thin
//! wrapper over the `image` crate (matching how `qbz-nix` and
//! `auto_theme::palette` use `image` for decoding), kept separate from
//! the decode-agnostic trait so callers who already hold raw pixels can
//! skip the decode step entirely.

use crate::color::RGBA;
use crate::error::ProfileError;

/// A source of RGBA pixels with known dimensions.
///
/// Implementors assume straight (non-premultiplied) alpha; an adapter
/// wrapping a premultiplied-alpha format is responsible for unpacking
/// before it reaches this trait.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fetch the pixel at `(x, y)`. Implementations may assume
    /// `x < width()` and `y < height()`.
    fn get_pixel(&self, x: u32, y: u32) -> RGBA;

    /// A fast path for sources that are already laid out as a
    /// contiguous (R,G,B,A) byte buffer: `(buffer, stride_in_bytes)`.
    /// The accumulator uses this when available instead of calling
    /// `get_pixel` once per pixel.
    fn as_rgba_buffer(&self) -> Option<(&[u8], usize)> {
        None
    }
}

/// A pixel source backed by a contiguous (R,G,B,A)-interleaved byte
/// buffer, e.g. straight out of a decoder or a memory-mapped bitmap.
pub struct RgbaBuffer<'a> {
    width: u32,
    height: u32,
    stride: usize,
    data: &'a [u8],
}

impl<'a> RgbaBuffer<'a> {
    /// `data` must contain at least `stride * height` bytes, and
    /// `stride` must be at least `width * 4`.
    pub fn new(width: u32, height: u32, stride: usize, data: &'a [u8]) -> Self {
        debug_assert!(stride >= width as usize * 4);
        debug_assert!(data.len() >= stride * height as usize);
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Convenience constructor for a buffer with no row padding
    /// (`stride == width * 4`).
    pub fn tightly_packed(width: u32, height: u32, data: &'a [u8]) -> Self {
        Self::new(width, height, width as usize * 4, data)
    }
}

impl PixelSource for RgbaBuffer<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> RGBA {
        let row_start = y as usize * self.stride;
        let offset = row_start + x as usize * 4;
        RGBA::new(
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        )
    }

    fn as_rgba_buffer(&self) -> Option<(&[u8], usize)> {
        if self.stride == self.width as usize * 4 {
            Some((self.data, self.stride))
        } else {
            None
        }
    }
}

/// A pixel source backed by a decoded `image::DynamicImage`.
pub struct ImagePixelSource {
    buffer: image::RgbaImage,
}

impl ImagePixelSource {
    /// Decode an image from bytes, rejecting anything larger than
    /// `max_width` x `max_height` with [`ProfileError::ImageTooLarge`].
    pub fn decode(bytes: &[u8], max_width: u32, max_height: u32) -> Result<Self, ProfileError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| ProfileError::UnsupportedFormat(e.to_string()))?;
        let (width, height) = (img.width(), img.height());
        if width > max_width || height > max_height {
            return Err(ProfileError::ImageTooLarge {
                width,
                height,
                max_width,
                max_height,
            });
        }
        Ok(Self {
            buffer: img.to_rgba8(),
        })
    }
}

impl PixelSource for ImagePixelSource {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> RGBA {
        let p = self.buffer.get_pixel(x, y);
        RGBA::new(p[0], p[1], p[2], p[3])
    }

    fn as_rgba_buffer(&self) -> Option<(&[u8], usize)> {
        Some((self.buffer.as_raw(), self.width() as usize * 4))
    }
}
