mod ext;
mod util;

pub mod error;
pub mod prelude;
pub mod tile;
pub mod tileset;
pub mod traits;
pub mod types;

#[cfg(feature = "image")]
pub mod out;
#[cfg(feature = "image")]
pub mod sheet;

#[cfg(all(test, feature = "image"))]
mod tests;

pub use error::Error;
pub use error::Result;
pub use tile::Tile;
pub use tileset::TileSet;
pub use traits::Flips;
pub use traits::Rotations;
pub use types::Equivalence;
pub use types::TileId;
