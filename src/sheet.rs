use std::path::Path;

use image::DynamicImage;
use image::ImageError;
use image::ImageReader;
use image::Rgba;
use image::RgbaImage;
use log::debug;
use log::info;

use crate::error::Error;
use crate::error::Result;
use crate::ext::image::ImageToArrayExt;
use crate::out::img::compose;
use crate::out::img::OutputFormat;
use crate::tileset::TileSet;
use crate::types::Equivalence;

#[derive(Clone, Copy, Debug)]
pub struct SheetParams {
    /// The side length of every sprite on the sheet
    pub tile_size: usize,

    /// What counts as a duplicate sprite
    pub equivalence: Equivalence,
}

impl SheetParams {
    pub fn new(tile_size: usize) -> Self {
        SheetParams {
            tile_size,
            equivalence: Equivalence::default(),
        }
    }

    pub fn with_equivalence(mut self, equivalence: Equivalence) -> Self {
        self.equivalence = equivalence;
        self
    }
}

/// A decoded spritesheet cut into its sprites.
pub struct Spritesheet {
    sprites: TileSet<Rgba<u8>>,
    width: usize,
    height: usize,
    params: SheetParams,
}

impl Spritesheet {
    /// Open and decode the image at `path`. Nothing is sliced if decoding fails.
    pub fn from_path<Q: AsRef<Path>>(path: Q, params: SheetParams) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening spritesheet {:?}", path);

        // the format comes from the file's contents, not its name
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| match e {
                ImageError::IoError(e) => Error::Io(e),
                e => Error::Decode(e),
            })?;

        Self::from_image(&image, params)
    }

    pub fn from_image(image: &DynamicImage, params: SheetParams) -> Result<Self> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba.to_array()?;

        let sprites = TileSet::from_grid(pixels.view(), params.tile_size)?;

        info!(
            "Loaded {width}x{height} spritesheet with {} sprites of size {}",
            sprites.len(),
            params.tile_size
        );

        Ok(Spritesheet {
            sprites,
            width: width as usize,
            height: height as usize,
            params,
        })
    }

    /// Drop every sprite equivalent to an earlier one.
    pub fn filter_unique(&mut self) {
        let before = self.sprites.len();
        self.sprites.dedup(self.params.equivalence);

        info!(
            "Kept {} of {before} sprites ({:?})",
            self.sprites.len(),
            self.params.equivalence
        );
    }

    pub fn sprites(&self) -> &TileSet<Rgba<u8>> {
        &self.sprites
    }

    /// Width and height of the source image.
    pub fn bounds(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Lay the current sprites out in rows as wide as the source image.
    pub fn to_image(&self) -> RgbaImage {
        compose(&self.sprites, self.width)
    }

    /// Write the sheet to `filename`, picking the format from its extension.
    ///
    /// The name is validated before any file is created.
    pub fn save(&self, filename: &str) -> Result<()> {
        let format = OutputFormat::from_filename(filename)?;
        let img = self.to_image();

        info!(
            "Saving {}x{} spritesheet to {filename} as {format:?}",
            img.width(),
            img.height()
        );

        format.write(img, Path::new(filename))
    }
}
