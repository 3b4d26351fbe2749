use num_traits::{Float, NumAssignOps, NumCast};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt::Debug;

/// Element type of every node buffer.
///
/// Restricted to floating point types (`f32`, `f64`). Beyond `Float`, the
/// trait carries the sampling hooks used by the random leaf factories.
pub trait Scalar:
    Float
    + NumAssignOps
    + SampleUniform
    + Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Draws one sample from the standard normal distribution.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Converts an `f64`, yielding NaN if the value cannot be represented.
    fn from_f64_lossy(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Widens to `f64`, yielding NaN if the value cannot be represented.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let z: f32 = StandardNormal.sample(rng);
        z
    }
}

impl Scalar for f64 {
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let z: f64 = StandardNormal.sample(rng);
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn process_scalar<T: Scalar>(value: T) -> f64 {
        value.to_f64_lossy()
    }

    #[test]
    fn test_f32_impl_scalar() {
        assert_eq!(process_scalar(1.5f32), 1.5);
    }

    #[test]
    fn test_f64_impl_scalar() {
        assert_eq!(process_scalar(-2.25f64), -2.25);
    }

    #[test]
    fn test_from_f64_lossy() {
        assert_eq!(f32::from_f64_lossy(0.5), 0.5f32);
        assert_eq!(f64::from_f64_lossy(0.5), 0.5f64);
    }

    #[test]
    fn test_standard_normal_is_finite() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(f32::sample_standard_normal(&mut rng).is_finite());
        }
    }
}
