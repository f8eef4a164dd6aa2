//! Channel plane operations
//!
//! Splits an RGBA buffer into single-channel planes and merges planes back
//! into an RGBA buffer.

use crate::{AlphaRemapError, AlphaRemapResult};
use image::{GrayImage, Luma, RgbaImage};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub fn index(&self) -> usize {
        u8::from(*self) as usize
    }

    pub fn from_index(index: u8) -> AlphaRemapResult<Self> {
        Channel::try_from(index).map_err(|e| AlphaRemapError::InvalidChannel(e.number))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        }
    }
}

/// Copy one channel of `image` into a standalone grayscale plane.
pub fn extract(image: &RgbaImage, channel: Channel) -> GrayImage {
    let index = channel.index();
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y)[index]])
    })
}

/// Split `image` into its red, green, blue and alpha planes, in that order.
pub fn split(image: &RgbaImage) -> [GrayImage; 4] {
    Channel::ALL.map(|channel| extract(image, channel))
}

pub fn constant_plane(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Compose four equally sized planes into one RGBA buffer.
pub fn merge(
    red: &GrayImage,
    green: &GrayImage,
    blue: &GrayImage,
    alpha: &GrayImage,
) -> AlphaRemapResult<RgbaImage> {
    let expected = red.dimensions();
    for plane in [green, blue, alpha] {
        if plane.dimensions() != expected {
            return Err(AlphaRemapError::DimensionMismatch {
                expected,
                found: plane.dimensions(),
            });
        }
    }

    let (width, height) = expected;
    let mut raw = Vec::with_capacity(width as usize * height as usize * 4);
    for (((r, g), b), a) in red
        .as_raw()
        .iter()
        .zip(green.as_raw())
        .zip(blue.as_raw())
        .zip(alpha.as_raw())
    {
        raw.extend_from_slice(&[*r, *g, *b, *a]);
    }

    RgbaImage::from_raw(width, height, raw).ok_or_else(|| {
        AlphaRemapError::BufferSize(format!("{width}x{height} RGBA buffer could not be built"))
    })
}
