use image::GenericImageView;
use image::Pixel;
use ndarray::Array2;
use ndarray::ShapeError;

/// Convert from an image to an array
pub trait ImageToArrayExt<P>
where
    P: Pixel,
{
    fn to_array(&self) -> Result<Array2<P>, ShapeError>;
}

impl<P, I> ImageToArrayExt<P> for I
where
    P: Pixel,
    I: GenericImageView<Pixel = P>,
{
    /// Convert an image into an array indexed by `[y, x]`.
    fn to_array(&self) -> Result<Array2<P>, ShapeError> {
        let (w, h) = self.dimensions();

        // pixels are yielded row by row, so the row count goes first
        let pixels: Vec<P> = self.pixels().map(|(_, _, px)| px).collect();

        Array2::from_shape_vec((h as usize, w as usize), pixels)
    }
}
