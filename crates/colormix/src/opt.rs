//! Helper module with the options for searching blends.
//!
//! This module provides the options for an [`Optimizer`](crate::Optimizer) and
//! the corresponding builder. The defaults are the tried and true parameters
//! used by [`optimize`](crate::optimize): a population of 100, evolving over
//! 100 generations, with a mutation rate of 10% and tournaments of 5.
//!
//!
//! # Example
//!
//! ```
//! # use colormix::opt::{Options, Volume};
//! let options = Options::builder()
//!     .generations(250)
//!     .seed(42)
//!     .build();
//!
//! assert_eq!(options.generations(), 250);
//! assert_eq!(options.population_size(), 100);
//! assert_eq!(options.seed(), Some(42));
//! assert_eq!(options.volume(), Volume::Silent);
//! ```

use crate::Float;

/// The diagnostic logging volume.
///
/// With regular volume, the optimizer reports the start and end of a run as
/// well as every improvement of the best blend found so far. With detailed
/// volume, it also reports every generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    #[default]
    Silent,
    Regular,
    Detailed,
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    mutation_step: Float,
    tournament_size: usize,
    seed: Option<u64>,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            volume: Volume::Silent,
            population_size: 100,
            generations: 100,
            mutation_rate: 0.1,
            mutation_step: 5.0,
            tournament_size: 5,
            seed: None,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the number of individuals per generation, which is at least 1.
    pub fn population_size(&mut self, size: usize) -> &mut Self {
        self.0.population_size = size.max(1);
        self
    }

    /// Set the number of generations, which is at least 1.
    pub fn generations(&mut self, count: usize) -> &mut Self {
        self.0.generations = count.max(1);
        self
    }

    /// Set the probability of mutating an individual.
    ///
    /// The rate is clamped to `0..=1`. Not-a-number disables mutation.
    pub fn mutation_rate(&mut self, rate: f64) -> &mut Self {
        self.0.mutation_rate = if rate.is_nan() {
            0.0
        } else {
            rate.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the largest change to a percentage made by a mutation.
    ///
    /// The step is made non-negative and capped at 100, since no percentage
    /// can move further than that. Not-a-number is treated as zero.
    pub fn mutation_step(&mut self, step: Float) -> &mut Self {
        self.0.mutation_step = if step.is_nan() {
            0.0
        } else {
            step.abs().min(100.0)
        };
        self
    }

    /// Set the number of contestants per tournament, which is at least 1.
    pub fn tournament_size(&mut self, size: usize) -> &mut Self {
        self.0.tournament_size = size.max(1);
        self
    }

    /// Seed the pseudo-random number generator for a reproducible run.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.0.seed = Some(seed);
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with the given seed.
    pub fn with_seed(seed: u64) -> Options {
        Self::builder().seed(seed).build()
    }

    /// Instantiate the default options but with regular diagnostic output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed diagnostic output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Determine whether the volume is not silent.
    pub fn verbose(&self) -> bool {
        self.0.volume != Volume::Silent
    }

    /// Get the population size.
    pub fn population_size(&self) -> usize {
        self.0.population_size
    }

    /// Get the number of generations.
    pub fn generations(&self) -> usize {
        self.0.generations
    }

    /// Get the mutation rate.
    pub fn mutation_rate(&self) -> f64 {
        self.0.mutation_rate
    }

    /// Get the mutation step.
    pub fn mutation_step(&self) -> Float {
        self.0.mutation_step
    }

    /// Get the tournament size.
    pub fn tournament_size(&self) -> usize {
        self.0.tournament_size
    }

    /// Get the seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.0.seed
    }
}

#[cfg(test)]
mod test {
    use super::{Options, Volume};
    use crate::Float;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.population_size(), 100);
        assert_eq!(options.generations(), 100);
        assert_eq!(options.mutation_rate(), 0.1);
        assert_eq!(options.mutation_step(), 5.0);
        assert_eq!(options.tournament_size(), 5);
        assert_eq!(options.seed(), None);
        assert!(!options.verbose());

        assert_eq!(Options::with_log().volume(), Volume::Regular);
        assert_eq!(Options::with_detailed_log().volume(), Volume::Detailed);
        assert_eq!(Options::with_seed(7).seed(), Some(7));
    }

    #[test]
    fn test_clamping() {
        let options = Options::builder()
            .population_size(0)
            .generations(0)
            .tournament_size(0)
            .mutation_rate(1.5)
            .mutation_step(-3.0)
            .build();

        assert_eq!(options.population_size(), 1);
        assert_eq!(options.generations(), 1);
        assert_eq!(options.tournament_size(), 1);
        assert_eq!(options.mutation_rate(), 1.0);
        assert_eq!(options.mutation_step(), 3.0);

        let options = Options::builder().mutation_rate(f64::NAN).build();
        assert_eq!(options.mutation_rate(), 0.0);

        let options = Options::builder().mutation_step(Float::NAN).build();
        assert_eq!(options.mutation_step(), 0.0);
        let options = Options::builder().mutation_step(Float::INFINITY).build();
        assert_eq!(options.mutation_step(), 100.0);
        let options = Options::builder().mutation_step(Float::NEG_INFINITY).build();
        assert_eq!(options.mutation_step(), 100.0);
        let options = Options::builder().mutation_step(Float::MAX).build();
        assert_eq!(options.mutation_step(), 100.0);
    }
}
