pub use crate::error::Error;
pub use crate::error::Result;

pub use crate::tile::Tile;
pub use crate::tileset::TileSet;

pub use crate::traits::Flips;
pub use crate::traits::Rotations;

pub use crate::types::Color;
pub use crate::types::Equivalence;
pub use crate::types::TileId;

#[cfg(feature = "image")]
pub use crate::out::img::compose;
#[cfg(feature = "image")]
pub use crate::out::img::OutputFormat;
#[cfg(feature = "image")]
pub use crate::sheet::SheetParams;
#[cfg(feature = "image")]
pub use crate::sheet::Spritesheet;

pub use ndarray;

#[cfg(feature = "image")]
pub use image;
