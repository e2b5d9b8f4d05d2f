use std::path::Path;

use image::DynamicImage;
use image::ImageBuffer;
use image::ImageError;
use image::ImageFormat;
use image::Pixel;
use image::RgbaImage;

use crate::error::Error;
use crate::error::Result;
use crate::tileset::TileSet;
use crate::util::tiles_along;

/// Paint `tiles` onto a fresh image, left to right in rows at most `width` pixels wide.
///
/// The image is as wide as the whole tiles that fit in `width` (at least one) and as tall as
/// the row bands actually used. Laying out every tile of a sheet this way reproduces it.
pub fn compose<P>(tiles: &TileSet<P>, width: usize) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let size = tiles.tile_size();
    let per_row = tiles_along(width, size).max(1);
    let rows = tiles.len().div_ceil(per_row);

    let mut imgbuf = ImageBuffer::new((per_row * size) as u32, (rows * size) as u32);

    for (tile, (x0, y0)) in tiles.iter().zip(tiles.positions(width)) {
        for ((y, x), px) in tile.pixels().indexed_iter() {
            imgbuf.put_pixel((x0 + x) as u32, (y0 + y) as u32, *px);
        }
    }

    imgbuf
}

/// File formats a composed sheet can be written as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Gif,
    Jpeg,
}

impl OutputFormat {
    /// Pick the format from the extension of `filename`.
    ///
    /// Names shorter than four characters or without a `.` are rejected outright. Nothing
    /// touches the file system.
    pub fn from_filename(filename: &str) -> Result<Self> {
        if filename.len() < 4 || !filename.contains('.') {
            return Err(Error::InvalidFilename(filename.to_owned()));
        }

        // everything after the last `.` of the final path component, so `.png` is a png
        let ext = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
            .ok_or_else(|| Error::InvalidFilename(filename.to_owned()))?;

        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "gif" => Ok(OutputFormat::Gif),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            _ => Err(Error::UnrecognizedFormat(ext.to_owned())),
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// Encode `img` to `path`. JPEG has no alpha channel, so it is dropped first.
    pub fn write(self, img: RgbaImage, path: &Path) -> Result<()> {
        let written = match self {
            OutputFormat::Jpeg => DynamicImage::ImageRgba8(img)
                .into_rgb8()
                .save_with_format(path, self.image_format()),
            _ => img.save_with_format(path, self.image_format()),
        };

        written.map_err(|e| match e {
            ImageError::IoError(e) => Error::Io(e),
            e => Error::Encode(e),
        })
    }
}
