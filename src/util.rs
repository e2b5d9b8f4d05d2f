/// Number of whole tiles of side `tile_size` that fit along `length`.
///
/// A zero `tile_size` fits nothing.
pub fn tiles_along(length: usize, tile_size: usize) -> usize {
    length.checked_div(tile_size).unwrap_or(0)
}

/// Top left corner of the `index`th tile when tiles are laid out left to right in rows of
/// at most `width` pixels, wrapping to the next row band once a row is full.
///
/// At least one tile is placed per row, even if it is wider than `width`.
pub fn layout_position(index: usize, tile_size: usize, width: usize) -> (usize, usize) {
    let per_row = tiles_along(width, tile_size).max(1);

    let x = (index % per_row) * tile_size;
    let y = (index / per_row) * tile_size;

    (x, y)
}
