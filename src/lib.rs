#![allow(clippy::module_inception)]

pub mod error;
pub mod matrix {
    pub mod matrix;
    pub mod product;
}
pub mod vector {
    pub mod scalar;
    pub mod vector;
}

pub mod utils;

pub use error::{LinalgError, Result};
pub use matrix::matrix::Matrix;
pub use vector::scalar::Scalar;
pub use vector::vector::Vector;
