use num_traits::Float;

pub trait Scalar:  // Avoid repeating all the traits
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
}

impl<T> Scalar for T where
    T: Float
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
        + Send
        + Sync
        + 'static
{
}
