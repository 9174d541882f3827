//! The schedule of sizes and repetitions that a timing run walks through

use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SweepModel {
    pub sizes: Vec<usize>,
    pub jitter: usize,
    pub iterations: usize,
    pub seed: u64,
    pub scratch_file: String,
    pub keep_files: bool,
}

impl SweepModel {
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Moves `base` by a uniformly random offset within `[-jitter, jitter]`.
    /// Offsets that would take the size below one are clamped to one
    pub fn jittered<R: Rng + ?Sized>(&self, base: usize, rng: &mut R) -> usize {
        if self.jitter == 0 {
            return base;
        }
        let jitter = self.jitter as i64;
        let offset = rng.gen_range(-jitter..=jitter);
        (base as i64 + offset).max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep(jitter: usize, seed: u64) -> SweepModel {
        SweepModel {
            sizes: vec![25, 50],
            jitter,
            iterations: 1,
            seed,
            scratch_file: "x.cpp".into(),
            keep_files: false,
        }
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let model = sweep(10, 7);
        let mut rng = model.rng();
        for _ in 0..1_000 {
            let size = model.jittered(25, &mut rng);
            assert!((15..=35).contains(&size));
        }
    }

    #[test]
    fn test_jitter_never_reaches_zero() {
        let model = sweep(10, 3);
        let mut rng = model.rng();
        for _ in 0..1_000 {
            assert!(model.jittered(2, &mut rng) >= 1);
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let model = sweep(10, 1234);
        let (mut a, mut b) = (model.rng(), model.rng());
        let first: Vec<usize> = (0..50).map(|_| model.jittered(100, &mut a)).collect();
        let second: Vec<usize> = (0..50).map(|_| model.jittered(100, &mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_jitter_is_identity() {
        let model = sweep(0, 0);
        let mut rng = model.rng();
        assert_eq!(model.jittered(400, &mut rng), 400);
    }
}
