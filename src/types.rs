use std::fmt;
use std::hash::Hash;

use crate::tile::Tile;
use crate::traits::Flips;
use crate::traits::Rotations;

/// A pixel value that can be used as part of a tile's identity.
#[cfg(feature = "parallel")]
pub trait Color: Clone + Hash + Eq + Send + Sync {}

#[cfg(feature = "parallel")]
impl<T> Color for T where T: Clone + Hash + Eq + Send + Sync {}

/// A pixel value that can be used as part of a tile's identity.
#[cfg(not(feature = "parallel"))]
pub trait Color: Clone + Hash + Eq {}

#[cfg(not(feature = "parallel"))]
impl<T> Color for T where T: Clone + Hash + Eq {}

/// Canonical identity of a tile: its side length and every pixel in raster order.
///
/// Two tiles have the same `TileId` exactly when [`Tile::identical`] holds for them, since both
/// are derived from [`Tile::iter`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileId<P> {
    pub(crate) size: usize,
    pub(crate) pixels: Vec<P>,
}

impl<P> TileId<P> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }
}

impl<P> fmt::Display for TileId<P>
where
    P: fmt::Debug,
{
    /// Renders every pixel value joined by `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, px) in self.pixels.iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            write!(f, "{:?}", px)?;
        }

        Ok(())
    }
}

/// Which tiles count as "the same sprite" when deduplicating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// Pixel exact match only.
    #[default]
    Exact,

    /// Exact match after any of the four quarter turns.
    Rotation,

    /// Exact match, or a match after a horizontal or vertical mirror.
    Flip,
}

impl Equivalence {
    /// Whether `candidate` is equivalent to `kept` under this mode.
    ///
    /// Never mutates either tile.
    pub fn matches<P>(self, kept: &Tile<P>, candidate: &Tile<P>) -> bool
    where
        P: Clone + PartialEq,
    {
        match self {
            Equivalence::Exact => kept.identical(candidate),
            Equivalence::Rotation => kept.identical_if_rotated(candidate),
            Equivalence::Flip => {
                kept.identical(candidate)
                    || kept.identical_if_flipped_horizontally(candidate)
                    || kept.identical_if_flipped_vertically(candidate)
            }
        }
    }

    /// Identities of every arrangement of `tile` this mode compares against.
    ///
    /// The first entry is always the identity of `tile` itself. A kept tile `k` matches `tile`
    /// iff `k.id()` is one of these, which lets deduplication use set lookups.
    pub(crate) fn variant_ids<P>(self, tile: &Tile<P>) -> Vec<TileId<P>>
    where
        P: Clone,
    {
        match self {
            Equivalence::Exact => vec![tile.id()],
            Equivalence::Rotation => tile.rotations().iter().map(Tile::id).collect(),
            Equivalence::Flip => std::iter::once(tile.id())
                .chain(tile.flips().iter().map(Tile::id))
                .collect(),
        }
    }
}
