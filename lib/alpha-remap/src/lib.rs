pub mod channel;
pub mod io;
pub mod remap_effect;

pub use channel::Channel;
pub use remap_effect::AlphaRemapConfig;

use image::RgbaImage;

pub type AlphaRemapResult<T> = Result<T, AlphaRemapError>;

#[derive(thiserror::Error, Debug)]
pub enum AlphaRemapError {
    #[error("Plane size mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
    #[error("Invalid channel index: {0}")]
    InvalidChannel(u8),
    #[error("Buffer size error: {0}")]
    BufferSize(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &RgbaImage) -> AlphaRemapResult<RgbaImage>;
}
