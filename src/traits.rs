/// Produces every quarter turn of a square object.
pub trait Rotations: Sized {
    /// Owned copies rotated by 0, 90, 180 and 270 degrees clockwise, in that order.
    fn rotations(&self) -> Vec<Self>;
}

/// Produces the mirror images of a square object.
pub trait Flips: Sized {
    /// Owned copies mirrored horizontally, then vertically.
    fn flips(&self) -> Vec<Self>;
}
