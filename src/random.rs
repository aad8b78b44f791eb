//! Injectable randomness seam.
//!
//! The orchestrator's probabilistic short-circuit and the Met adapter's
//! random year/index picks go through this trait so tests can script both
//! branches deterministically.

use rand::Rng;

pub trait Randomness: Send + Sync {
    /// Uniform draw in [0, 1).
    fn roll(&self) -> f64;

    /// Uniform index in [0, len). `len` must be non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local rand generator.
pub struct ThreadRandomness;

impl Randomness for ThreadRandomness {
    fn roll(&self) -> f64 {
        rand::rng().random()
    }

    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Test support: deterministic randomness for unit and e2e tests.
pub mod testing {
    use super::Randomness;
    use std::sync::Mutex;

    /// Replays scripted rolls and picks, then repeats the last value.
    pub struct ScriptedRandomness {
        rolls: Mutex<Vec<f64>>,
        picks: Mutex<Vec<usize>>,
    }

    impl ScriptedRandomness {
        pub fn new(rolls: Vec<f64>, picks: Vec<usize>) -> Self {
            Self {
                rolls: Mutex::new(rolls),
                picks: Mutex::new(picks),
            }
        }
    }

    impl Randomness for ScriptedRandomness {
        fn roll(&self) -> f64 {
            let mut rolls = self.rolls.lock().unwrap();
            if rolls.len() > 1 {
                rolls.remove(0)
            } else {
                rolls.first().copied().unwrap_or(0.99)
            }
        }

        fn pick(&self, len: usize) -> usize {
            let mut picks = self.picks.lock().unwrap();
            let pick = if picks.len() > 1 {
                picks.remove(0)
            } else {
                picks.first().copied().unwrap_or(0)
            };
            pick.min(len.saturating_sub(1))
        }
    }
}
