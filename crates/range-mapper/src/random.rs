//! Cheap bell-shaped randomness.
//!
//! The random source is injected through [`UniformSource`]. It is implemented
//! for [`fastrand::Rng`] (explicitly seeded, owned by the caller) and for
//! [`ThreadRng`], which draws from fastrand's thread-local generator.

use core::ops::Add;

/// A source of uniform draws over the half-open interval `[min, max)`.
///
/// An empty interval (`max <= min`) yields `min`.
pub trait UniformSource<T> {
    /// Draws a value from `[min, max)`.
    fn uniform(&mut self, min: T, max: T) -> T;
}

/// Draws from fastrand's thread-local generator.
///
/// Seed it with [`fastrand::seed`] on the calling thread if reproducible
/// draws are needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRng;

macro_rules! impl_uniform_float {
    ($($ty:ident),*) => {$(
        impl UniformSource<$ty> for fastrand::Rng {
            #[inline]
            fn uniform(&mut self, min: $ty, max: $ty) -> $ty {
                if max <= min {
                    return min;
                }
                min + (max - min) * self.$ty()
            }
        }

        impl UniformSource<$ty> for ThreadRng {
            #[inline]
            fn uniform(&mut self, min: $ty, max: $ty) -> $ty {
                if max <= min {
                    return min;
                }
                min + (max - min) * fastrand::$ty()
            }
        }
    )*};
}

macro_rules! impl_uniform_int {
    ($($ty:ident),*) => {$(
        impl UniformSource<$ty> for fastrand::Rng {
            #[inline]
            fn uniform(&mut self, min: $ty, max: $ty) -> $ty {
                if max <= min {
                    return min;
                }
                self.$ty(min..max)
            }
        }

        impl UniformSource<$ty> for ThreadRng {
            #[inline]
            fn uniform(&mut self, min: $ty, max: $ty) -> $ty {
                if max <= min {
                    return min;
                }
                fastrand::$ty(min..max)
            }
        }
    )*};
}

impl_uniform_float!(f32, f64);
impl_uniform_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Sums three independent uniform draws from `[min, max)`.
///
/// The result approximates a bell curve over `[3 * min, 3 * max)` centered
/// on `1.5 * (min + max)`. Integer sums can overflow for bounds near the
/// type's limits.
///
/// # Example
///
/// ```
/// use range_mapper::random_triangular_sum;
///
/// let mut rng = fastrand::Rng::with_seed(7);
/// let v = random_triangular_sum(&mut rng, 0.0, 10.0);
/// assert!((0.0..30.0).contains(&v));
/// ```
#[inline]
pub fn random_triangular_sum<T, R>(rng: &mut R, min: T, max: T) -> T
where
    T: Add<Output = T> + Copy,
    R: UniformSource<T> + ?Sized,
{
    rng.uniform(min, max) + rng.uniform(min, max) + rng.uniform(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TRIALS: u32 = 20_000;

    #[test]
    fn test_float_sum_stays_in_range_and_centers() {
        let mut rng = fastrand::Rng::with_seed(0x5EED);
        let mut total = 0.0_f64;
        for _ in 0..TRIALS {
            let v = random_triangular_sum(&mut rng, 0.0_f64, 10.0);
            assert!((0.0..30.0).contains(&v), "{v} out of range");
            total += v;
        }
        let mean = total / f64::from(TRIALS);
        assert!((mean - 15.0).abs() < 0.3, "mean {mean} too far from 15");
    }

    #[test]
    fn test_integer_sum_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut total = 0_i64;
        for _ in 0..TRIALS {
            let v = random_triangular_sum(&mut rng, 0_i64, 10);
            assert!((0..=27).contains(&v), "{v} out of range");
            total += v;
        }
        // Integer draws are 0..=9, so the mean is 13.5.
        let mean = total as f64 / f64::from(TRIALS);
        assert!((mean - 13.5).abs() < 0.3, "mean {mean} too far from 13.5");
    }

    #[test]
    fn test_sum_is_bell_shaped() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut center = 0_u32;
        let mut edges = 0_u32;
        for _ in 0..TRIALS {
            let v = random_triangular_sum(&mut rng, 0.0_f32, 1.0);
            if (1.0..2.0).contains(&v) {
                center += 1;
            } else {
                edges += 1;
            }
        }
        // The middle third holds 2/3 of the mass of a sum of three uniforms.
        assert!(center > edges * 3 / 2, "center {center}, edges {edges}");
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let mut a = fastrand::Rng::with_seed(99);
        let mut b = fastrand::Rng::with_seed(99);
        for _ in 0..16 {
            assert_eq!(
                random_triangular_sum(&mut a, -5_i32, 5),
                random_triangular_sum(&mut b, -5_i32, 5)
            );
        }
    }

    #[test]
    fn test_empty_interval_yields_min() {
        let mut rng = fastrand::Rng::with_seed(3);
        assert_eq!(random_triangular_sum(&mut rng, 4_u8, 4), 12);
        assert_eq!(random_triangular_sum(&mut rng, 9_i16, 2), 27);
        assert_relative_eq!(random_triangular_sum(&mut rng, 1.5_f64, 1.5), 4.5);
    }

    #[test]
    fn test_thread_rng_source() {
        fastrand::seed(11);
        let mut rng = ThreadRng;
        for _ in 0..100 {
            let v: f32 = random_triangular_sum(&mut rng, -1.0, 1.0);
            assert!((-3.0..3.0).contains(&v));
        }
    }
}
