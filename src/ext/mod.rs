#[cfg(feature = "image")]
pub mod image;
pub mod ndarray;
