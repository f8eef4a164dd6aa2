//! File loading and saving around the remap effect.

use crate::{AlphaRemapConfig, AlphaRemapResult, Effect};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Decode `path` and promote it to 8-bit RGBA.
///
/// Grayscale sources spread their luma over red, green and blue. Sources
/// without alpha get an opaque alpha channel.
pub fn load_rgba(path: impl AsRef<Path>) -> AlphaRemapResult<RgbaImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    log::debug!(
        "decoded {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    Ok(img.to_rgba8())
}

pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> AlphaRemapResult<()> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}

/// Load `input`, apply `config` and write the result to `output` as PNG.
///
/// `output` is not touched unless the input decodes and the effect succeeds.
pub fn remap_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &AlphaRemapConfig,
) -> AlphaRemapResult<(u32, u32)> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let img = load_rgba(input)?;
    let remapped = config.apply(&img)?;
    save_png(&remapped, output)?;

    log::info!(
        "{} -> {} ({}x{})",
        input.display(),
        output.display(),
        remapped.width(),
        remapped.height()
    );

    Ok(remapped.dimensions())
}
