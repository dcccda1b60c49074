use crate::error::{LinalgError, Result};
use crate::vector::scalar::Scalar;
use itertools::Itertools;
use std::fmt;
use std::ops;

/// Fixed-length ordered sequence of floating-point components.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T> {
    components: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    pub fn new(components: Vec<T>) -> Self {
        Vector { components }
    }

    pub fn from_slice(components: &[T]) -> Self {
        Vector {
            components: components.to_vec(),
        }
    }

    /// Number of components.
    #[inline(always)]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.components.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.components
    }

    pub fn same_space(&self, other: &Vector<T>) -> bool {
        self.dimension() == other.dimension()
    }

    /// Sum of the pairwise products of the components.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors do not have the same dimension. Callers must
    /// match dimensions first.
    pub fn dot_product(&self, other: &Vector<T>) -> T {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "Dot product of vectors with different dimensions"
        );
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(&a, &b)| a * b)
            .sum()
    }

    /// Euclidean length, always computed in `f64`.
    pub fn magnitude(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.to_f64().unwrap_or(f64::NAN))
            .map(|c| c * c)
            .sum::<f64>()
            .sqrt()
    }

    /// Angle in radians between the two vectors.
    ///
    /// NaN when either magnitude is zero.
    pub fn angle(&self, other: &Vector<T>) -> f64 {
        let dot = self.dot_product(other).to_f64().unwrap_or(f64::NAN);
        (dot / (self.magnitude() * other.magnitude())).acos()
    }

    /// Scales every component by `factor` in place.
    pub fn multiply(&mut self, factor: T) -> &mut Self {
        self.components.iter_mut().for_each(|c| *c = *c * factor);
        self
    }

    pub fn multiply_component(&mut self, index: usize, factor: T) -> Result<&mut Self> {
        let bound = self.dimension();
        let component = self
            .components
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, bound })?;
        *component = *component * factor;
        Ok(self)
    }

    /// `self - other`, treating `other` as zero-padded up to `self`'s
    /// dimension. Components of `other` beyond that dimension are ignored.
    pub fn difference(&self, other: &Vector<T>) -> Vector<T> {
        Vector {
            components: self
                .components
                .iter()
                .enumerate()
                .map(|(i, &c)| match other.components.get(i) {
                    Some(&o) => c - o,
                    None => c,
                })
                .collect(),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(components: Vec<T>) -> Self {
        Vector { components }
    }
}

impl<T> ops::Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T> ops::IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.components.iter().join(", "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_dot_product() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        let w = Vector::new(vec![4.0, 5.0, 6.0]);
        assert_eq!(v.dot_product(&w), 32.0);
        assert_eq!(w.dot_product(&v), 32.0);
    }

    #[test]
    #[should_panic]
    fn test_dot_product_different_dimensions() {
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        let w = Vector::new(vec![4.0, 5.0]);
        v.dot_product(&w);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new(vec![3.0, 4.0]).magnitude(), 5.0);
        assert_eq!(Vector::new(vec![3.0f32, 4.0]).magnitude(), 5.0);
        assert_eq!(Vector::<f64>::new(vec![0.0, 0.0]).magnitude(), 0.0);
    }

    #[test]
    fn test_angle() {
        let v = Vector::new(vec![1.0, 0.0]);
        let w = Vector::new(vec![0.0, 1.0]);
        assert_eq!(v.angle(&w), PI / 2.0);

        let zero = Vector::new(vec![0.0, 0.0]);
        assert!(v.angle(&zero).is_nan());
    }

    #[test]
    fn test_multiply() {
        let mut v = Vector::new(vec![1.0, -2.0, 3.5]);
        v.multiply(2.0).multiply(0.5).multiply(3.0);
        assert_eq!(v, Vector::new(vec![3.0, -6.0, 10.5]));
    }

    #[test]
    fn test_multiply_component() {
        let mut v = Vector::new(vec![1.0, 2.0, 3.0]);
        v.multiply_component(1, 4.0)
            .unwrap()
            .multiply_component(2, -1.0)
            .unwrap();
        assert_eq!(v, Vector::new(vec![1.0, 8.0, -3.0]));

        assert_eq!(
            v.multiply_component(3, 10.0).unwrap_err(),
            LinalgError::IndexOutOfRange { index: 3, bound: 3 }
        );
        assert_eq!(v, Vector::new(vec![1.0, 8.0, -3.0]));
    }

    #[test]
    fn test_difference() {
        let v = Vector::new(vec![12.0, 8.0, 3.0]);
        let w = Vector::new(vec![5.0, 3.0]);
        assert_eq!(v.difference(&w), Vector::new(vec![7.0, 5.0, 3.0]));
        assert_eq!(v, Vector::new(vec![12.0, 8.0, 3.0]));

        // longer operand is cut to our dimension
        assert_eq!(w.difference(&v), Vector::new(vec![-7.0, -5.0]));
    }

    #[test]
    fn test_construction() {
        let v = Vector::from_slice(&[1.0f32, 2.0, 3.0]);
        assert_eq!(v, Vector::from(vec![1.0, 2.0, 3.0]));
        assert_eq!(v.dimension(), 3);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(v.into_inner(), vec![1.0, 2.0, 3.0]);
        assert!(Vector::<f64>::new(vec![]).is_empty());
    }

    #[test]
    fn test_same_space() {
        let v = Vector::new(vec![1.0, 2.0]);
        assert!(v.same_space(&Vector::new(vec![0.0, 0.0])));
        assert!(!v.same_space(&Vector::new(vec![0.0])));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(vec![1.5, -2.0, 3.0]).to_string(), "[1.5, -2, 3]");
        assert_eq!(Vector::<f64>::new(vec![]).to_string(), "[]");
    }
}
