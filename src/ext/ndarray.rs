use ndarray::ArrayBase;
use ndarray::DataMut;
use ndarray::Ix2;

/// In place transformations of a square 2D array.
///
/// All of these swap elements inside the array's own storage, so they are safe to call on
/// arrays in any memory layout. Calling them on non-square arrays is a logic error.
pub trait SquareArrayExt {
    /// Swap `[i, j]` with `[j, i]` for every pair above the diagonal.
    fn transpose_in_place(&mut self);

    /// Reverse the order of the elements inside every row.
    fn mirror_rows(&mut self);

    /// Reverse the order of the rows.
    fn mirror_columns(&mut self);

    /// Rotate a quarter turn clockwise: transpose, then mirror each row.
    fn rotate_in_place(&mut self) {
        self.transpose_in_place();
        self.mirror_rows();
    }
}

impl<S> SquareArrayExt for ArrayBase<S, Ix2>
where
    S: DataMut,
{
    fn transpose_in_place(&mut self) {
        let n = self.nrows();

        for i in 0..n {
            for j in (i + 1)..n {
                self.swap([i, j], [j, i]);
            }
        }
    }

    fn mirror_rows(&mut self) {
        for mut row in self.rows_mut() {
            let n = row.len();
            for i in 0..n / 2 {
                row.swap(i, n - 1 - i);
            }
        }
    }

    fn mirror_columns(&mut self) {
        let (n, width) = self.dim();

        for i in 0..n / 2 {
            for j in 0..width {
                self.swap([i, j], [n - 1 - i, j]);
            }
        }
    }
}
