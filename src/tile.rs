use std::fmt::Debug;

use ndarray::s;
use ndarray::Array2;
use ndarray::ArrayView2;

use crate::error::Error;
use crate::error::Result;
use crate::ext::ndarray::SquareArrayExt;
use crate::traits::Flips;
use crate::traits::Rotations;
use crate::types::TileId;

/// A `Tile` is one square sprite cut out of a larger grid.
///
/// The tile owns its pixels, indexed `[y, x]`. Cloning (or [`Tile::copy`]) always allocates new
/// storage, so transforming a copy never affects the original.
///
/// Note: the side length is fixed at construction. The in place transforms permute pixels but
/// never change it.
#[derive(Clone)]
pub struct Tile<P> {
    data: Array2<P>,
}

impl<P> Tile<P> {
    /// Wrap an owned square array. Returns `None` if `data` is not square.
    pub fn from_array(data: Array2<P>) -> Option<Self> {
        let (h, w) = data.dim();
        (h == w).then_some(Tile { data })
    }

    /// Side length of the tile.
    pub fn size(&self) -> usize {
        self.data.nrows()
    }

    /// The pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.data.get([y, x])
    }

    pub fn pixels(&self) -> ArrayView2<'_, P> {
        self.data.view()
    }

    /// Every pixel in raster order: left to right, then top to bottom.
    ///
    /// This is the canonical order behind both [`Tile::identical`] and [`Tile::id`].
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.data.iter()
    }

    /// Rotate a quarter turn clockwise, in place.
    pub fn rotate(&mut self) {
        self.data.rotate_in_place();
    }

    /// Mirror left to right, in place.
    pub fn flip_horizontally(&mut self) {
        self.data.mirror_rows();
    }

    /// Mirror top to bottom, in place.
    pub fn flip_vertically(&mut self) {
        self.data.mirror_columns();
    }
}

impl<P> Tile<P>
where
    P: Clone,
{
    /// Cut a `size` x `size` tile out of `grid` with its top left corner at (`x`, `y`).
    ///
    /// The pixel at local (x', y') is the grid's pixel at (`x` + x', `y` + y').
    pub fn from_section(grid: ArrayView2<'_, P>, x: usize, y: usize, size: usize) -> Result<Self> {
        let (height, width) = grid.dim();

        let fits = |origin: usize, bound: usize| {
            origin
                .checked_add(size)
                .is_some_and(|end| end <= bound)
        };
        if !fits(x, width) || !fits(y, height) {
            return Err(Error::OutOfBounds {
                x,
                y,
                size,
                width,
                height,
            });
        }

        let data = grid.slice(s![y..y + size, x..x + size]).to_owned();

        Ok(Tile { data })
    }

    /// A deep copy. Shares no storage with `self`.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn id(&self) -> TileId<P> {
        TileId {
            size: self.size(),
            pixels: self.iter().cloned().collect(),
        }
    }
}

impl<P> Tile<P>
where
    P: Clone + PartialEq,
{
    /// Pixel exact equality. Tiles of different sizes are never identical.
    pub fn identical(&self, other: &Tile<P>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }

    /// Whether some quarter turn of `other` (0, 90, 180 or 270 degrees) is identical to `self`.
    ///
    /// Works on a copy; `other` is left untouched.
    pub fn identical_if_rotated(&self, other: &Tile<P>) -> bool {
        let mut copy = other.copy();

        for _ in 0..4 {
            if self.identical(&copy) {
                return true;
            }

            copy.rotate();
        }

        false
    }

    pub fn identical_if_flipped_horizontally(&self, other: &Tile<P>) -> bool {
        let mut copy = other.copy();
        copy.flip_horizontally();
        self.identical(&copy)
    }

    pub fn identical_if_flipped_vertically(&self, other: &Tile<P>) -> bool {
        let mut copy = other.copy();
        copy.flip_vertically();
        self.identical(&copy)
    }
}

impl<P> PartialEq for Tile<P>
where
    P: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.identical(other)
    }
}

impl<P> Rotations for Tile<P>
where
    P: Clone,
{
    fn rotations(&self) -> Vec<Tile<P>> {
        (0..4)
            .scan(self.copy(), |current, _| {
                let rotation = current.copy();
                current.rotate();
                Some(rotation)
            })
            .collect()
    }
}

impl<P> Flips for Tile<P>
where
    P: Clone,
{
    fn flips(&self) -> Vec<Tile<P>> {
        let mut horizontal = self.copy();
        horizontal.flip_horizontally();

        let mut vertical = self.copy();
        vertical.flip_vertically();

        vec![horizontal, vertical]
    }
}

impl<P> Debug for Tile<P>
where
    P: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.data)
    }
}
