use crate::{
    AlphaRemapResult, Effect,
    channel::{self, Channel},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Alpha remap effect configuration
///
/// The `source` channel of the input becomes the alpha of the output, and
/// the color channels are filled with `fill`. Defaults give a white image
/// masked by the input's red channel.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct AlphaRemapConfig {
    #[derivative(Default(value = "Channel::Red"))]
    source: Channel,

    #[derivative(Default(value = "255"))]
    fill: u8,
}

impl AlphaRemapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Channel {
        self.source
    }

    pub fn fill(&self) -> u8 {
        self.fill
    }
}

impl Effect for AlphaRemapConfig {
    fn apply(&self, image: &RgbaImage) -> AlphaRemapResult<RgbaImage> {
        let (width, height) = image.dimensions();
        log::debug!(
            "remap {} channel to alpha over fill {} ({width}x{height})",
            self.source.name(),
            self.fill
        );

        let mask = channel::extract(image, self.source);
        let color = channel::constant_plane(width, height, self.fill);

        channel::merge(&color, &color, &color, &mask)
    }
}
