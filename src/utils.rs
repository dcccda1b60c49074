use crate::error::{LinalgError, Result};
use crate::vector::scalar::Scalar;
use crate::vector::vector::Vector;

/// Shared dimension of `vectors`.
///
/// Fails when the set is empty, when the vectors have no components, or when
/// any two lengths differ.
pub fn uniform_dimension<T: Scalar>(vectors: &[Vector<T>]) -> Result<usize> {
    let first = vectors
        .first()
        .ok_or_else(|| LinalgError::dimension_mismatch("at least one vector", "0 vectors"))?
        .dimension();

    if first == 0 {
        return Err(LinalgError::dimension_mismatch(
            "at least one component",
            "0 components",
        ));
    }

    match vectors.iter().position(|v| v.dimension() != first) {
        None => Ok(first),
        Some(i) => Err(LinalgError::dimension_mismatch(
            format!("{first} components"),
            format!("{} components at position {i}", vectors[i].dimension()),
        )),
    }
}

// `result[r][c] = vectors[c][r]`, `vectors` must share one dimension
pub fn transpose<T: Scalar>(vectors: &[Vector<T>]) -> Vec<Vector<T>> {
    let dimension = vectors.first().map_or(0, |v| v.dimension());
    (0..dimension)
        .map(|r| Vector::new(vectors.iter().map(|v| v[r]).collect()))
        .collect()
}

#[cfg(test)]
pub(crate) fn random_vectors(
    rng: &mut impl rand::Rng,
    count: usize,
    dimension: usize,
) -> Vec<Vector<f64>> {
    // integer-valued so sums and products stay exact
    (0..count)
        .map(|_| {
            Vector::new(
                (0..dimension)
                    .map(|_| rng.gen_range(-100i32..100) as f64)
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
