//! Uniform random ranges consumed by the sampler.
//!
//! [`RandomRange`] is the only capability the generator needs from a random source. Every
//! [`rand::RngCore`] implements it, so a seeded `StdRng` gives reproducible layouts.
use rand::RngCore;

/// Uniform random ranges over floats and integers.
pub trait RandomRange {
    /// Uniform float in `[min, max)`. Returns `min` when the range is empty.
    fn range_f32(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in `[min, max]`. Returns `min` when `max < min`.
    fn range_i32(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RngCore + ?Sized> RandomRange for R {
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min.is_nan() || max.is_nan() || max <= min {
            return min;
        }
        let v = min + rand01(self) * (max - min);
        // Rounding can land exactly on `max` for wide ranges.
        if v >= max {
            min
        } else {
            v
        }
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        let offset = (self.next_u64() % span) as i64;
        (min as i64 + offset) as i32
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    // 24 mantissa bits keep the result strictly below 1.0.
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u32::MAX };
        let v = rand01(&mut rng);
        assert!(v < 1.0);
        assert!(v > 0.99);
    }

    #[test]
    fn range_f32_is_half_open() {
        let mut rng = FixedRng { value: u32::MAX };
        let v = rng.range_f32(10.0, 20.0);
        assert!((10.0..20.0).contains(&v));

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.range_f32(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_f32_empty_range_returns_min() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.range_f32(5.0, 5.0), 5.0);
        assert_eq!(rng.range_f32(5.0, 1.0), 5.0);
    }

    #[test]
    fn range_i32_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let v = rng.range_i32(40, 44);
            assert!((40..=44).contains(&v));
            seen_min |= v == 40;
            seen_max |= v == 44;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn range_i32_handles_degenerate_and_wide_ranges() {
        let mut rng = FixedRng { value: 17 };
        assert_eq!(rng.range_i32(3, 3), 3);
        assert_eq!(rng.range_i32(3, -3), 3);
        let v = rng.range_i32(i32::MIN, i32::MAX);
        assert_eq!(v, i32::MIN + 17);
    }
}
