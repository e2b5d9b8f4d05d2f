use std::collections::HashSet;
use std::ops::Index;

use log::debug;
use ndarray::ArrayView2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::error::Result;
use crate::tile::Tile;
use crate::types::Color;
use crate::types::Equivalence;
use crate::types::TileId;
use crate::util::layout_position;
use crate::util::tiles_along;

/// An ordered list of same sized tiles, in the raster order they were cut from their source.
///
/// Deduplication keeps the first tile of every equivalence class and preserves the relative
/// order of the survivors.
#[derive(Clone, Debug)]
pub struct TileSet<P> {
    tiles: Vec<Tile<P>>,
    tile_size: usize,
}

impl<P> TileSet<P> {
    /// Build a set from tiles that are already cut.
    ///
    /// Every tile must have side `tile_size`; layout and recomposition rely on it.
    pub fn from_tiles(tiles: Vec<Tile<P>>, tile_size: usize) -> Result<Self> {
        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.size() != tile_size)
        {
            return Err(Error::TileSizeMismatch {
                index,
                expected: tile_size,
                found: tile.size(),
            });
        }

        Ok(TileSet { tiles, tile_size })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile<P>> {
        self.tiles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile<P>> {
        self.tiles.iter()
    }

    pub fn tiles(&self) -> &[Tile<P>] {
        &self.tiles
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Where each tile lands when re-laid out in rows at most `width` pixels wide.
    pub fn positions(&self, width: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(move |i| layout_position(i, self.tile_size, width))
    }
}

impl<P> TileSet<P>
where
    P: Color,
{
    /// Slice `grid` into `size` x `size` tiles.
    ///
    /// Tiles are taken left to right within a row band, and row bands top to bottom. Pixels
    /// past the last whole tile on either axis are dropped.
    pub fn from_grid(grid: ArrayView2<'_, P>, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::ZeroTileSize);
        }

        let (height, width) = grid.dim();
        let bands = tiles_along(height, size);
        let columns = tiles_along(width, size);

        debug!("Slicing {width}x{height} grid into {columns}x{bands} tiles of size {size}");

        let band = |row: usize| -> Result<Vec<Tile<P>>> {
            (0..columns)
                .map(|column| Tile::from_section(grid, column * size, row * size, size))
                .collect()
        };

        // bands are collected in order, so concatenating them keeps raster order
        #[cfg(feature = "parallel")]
        let bands: Vec<Vec<Tile<P>>> = (0..bands)
            .into_par_iter()
            .map(band)
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let bands: Vec<Vec<Tile<P>>> = (0..bands).map(band).collect::<Result<_>>()?;

        let tiles = bands.into_iter().flatten().collect();

        Ok(TileSet {
            tiles,
            tile_size: size,
        })
    }

    /// Identities each tile is compared by under `equivalence`, in tile order.
    fn variant_ids(&self, equivalence: Equivalence) -> Vec<Vec<TileId<P>>> {
        #[cfg(feature = "parallel")]
        let ids = self
            .tiles
            .par_iter()
            .map(|tile| equivalence.variant_ids(tile))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let ids = self
            .tiles
            .iter()
            .map(|tile| equivalence.variant_ids(tile))
            .collect();

        ids
    }

    /// For every tile, whether it is the first of its equivalence class.
    ///
    /// A tile is dropped if any arrangement of it is identical to an already kept tile. The
    /// scan is sequential so "first" always means first in the current order.
    fn first_occurrences(&self, equivalence: Equivalence) -> Vec<bool> {
        let mut kept: HashSet<TileId<P>> = HashSet::new();

        self.variant_ids(equivalence)
            .into_iter()
            .map(|variants| {
                if variants.iter().any(|id| kept.contains(id)) {
                    return false;
                }

                // the first variant is always the tile itself
                kept.extend(variants.into_iter().take(1));
                true
            })
            .collect()
    }

    /// Remove every tile equivalent to an earlier kept tile, in place.
    pub fn dedup(&mut self, equivalence: Equivalence) {
        let before = self.len();

        let mut keep = self.first_occurrences(equivalence).into_iter();
        self.tiles.retain(|_| keep.next().unwrap_or(false));

        debug!(
            "Deduplicated {before} tiles down to {} ({equivalence:?})",
            self.len()
        );
    }

    /// A new set with every tile equivalent to an earlier kept tile removed.
    pub fn deduplicated(&self, equivalence: Equivalence) -> TileSet<P> {
        let mut set = self.clone();
        set.dedup(equivalence);
        set
    }
}

impl<P> Index<usize> for TileSet<P> {
    type Output = Tile<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

impl<'a, P> IntoIterator for &'a TileSet<P> {
    type Item = &'a Tile<P>;
    type IntoIter = std::slice::Iter<'a, Tile<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
