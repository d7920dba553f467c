use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    error::{GenError, GenResult},
    SAMPLE_HIGH, SAMPLE_LOW,
};

/// In-memory sequence of samples produced by one generation call
pub type Dataset = Array1<f64>;

/// Draws `size` i.i.d. samples uniformly from [SAMPLE_LOW, SAMPLE_HIGH).
///
/// The backing storage is reserved up front so that an oversized request
/// fails with [`GenError::OutOfMemory`] instead of aborting the process.
pub fn sample<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
) -> GenResult<Dataset> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(size)
        .map_err(|_| GenError::OutOfMemory { size })?;

    let uniform = Uniform::new(SAMPLE_LOW, SAMPLE_HIGH);
    values.extend(uniform.sample_iter(rng).take(size));

    Ok(Dataset::from_vec(values))
}
