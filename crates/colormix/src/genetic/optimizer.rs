use std::io::Write;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::operators::{crossover, fittest, mutate, tournament, Problem};
use super::vector::random_percentages;
use crate::error::Error;
use crate::opt::{Options, Volume};
use crate::{ColorModel, Float, Rgb};

/// An evaluated percentage vector.
///
/// A candidate combines a percentage vector with the color resulting from
/// mixing the available colors in those percentages and with that color's
/// distance to the target. The percentages are in the same order as the
/// available colors.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "colormix"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    percentages: Vec<Float>,
    color: Rgb,
    distance: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Candidate {
    /// Get the mixed color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Get the distance between the mixed color and the target.
    pub fn distance(&self) -> Float {
        self.distance
    }

    /// Get the mixed color in hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn hex(&self) -> String {
        self.color.to_string()
    }

    /// Get the percentages. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "percentages")]
    pub fn py_percentages(&self) -> Vec<Float> {
        self.percentages.clone()
    }

    /// Convert this candidate to a human-readable representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Candidate {
    pub(crate) fn new(percentages: Vec<Float>, color: Rgb, distance: Float) -> Self {
        Self {
            percentages,
            color,
            distance,
        }
    }

    /// Get the percentages.
    pub fn percentages(&self) -> &[Float] {
        &self.percentages
    }

    /// Consume this candidate and return the percentages.
    pub fn into_percentages(self) -> Vec<Float> {
        self.percentages
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);

        write!(f, "{} [", self.color)?;
        for (index, percentage) in self.percentages.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            write!(f, "{:.*}%", precision, percentage)?;
        }
        write!(f, "] at distance {:.*}", precision, self.distance)
    }
}

// ====================================================================================================================

/// A report on one evolved generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Generation {
    /// The generation's index, starting with 0 for the random population.
    pub index: usize,
    /// The smallest distance in this generation.
    pub minimum: Float,
    /// The smallest distance in this and all earlier generations.
    pub best: Float,
}

// ====================================================================================================================

/// A genetic optimizer searching for the blend of colors closest to a target.
///
/// The optimizer evolves a population of percentage vectors over a fixed
/// number of generations. Upon creation, it initializes the population with
/// random vectors and evaluates them. Each [`Optimizer::step`] then breeds the
/// next generation: It picks two parents by tournament, combines them by
/// single-point crossover, and occasionally mutates the child, until the new
/// population is complete. It finally evaluates the new population and
/// updates the best candidate, which is only ever replaced by a candidate with
/// strictly smaller distance.
///
/// Generations are the natural point for suspending, cancelling, or reporting
/// on a search. [`Optimizer::run`] steps through all remaining generations.
///
/// All randomness comes from the optimizer's pseudo-random number generator.
/// [`Optimizer::new`] seeds a [`StdRng`] from the options, falling back on
/// operating system entropy. [`Optimizer::with_rng`] accepts any generator.
///
/// ```
/// # use colormix::{ColorModel, Optimizer};
/// # use colormix::error::Error;
/// # use colormix::opt::Options;
/// # fn main() -> Result<(), Error> {
/// let mut optimizer = Optimizer::new(
///     &["#ff0000", "#0000ff"],
///     "#800080",
///     ColorModel::Rgb,
///     Options::with_seed(42),
/// )?;
///
/// let mut best = optimizer.best().distance();
/// while let Some(generation) = optimizer.step() {
///     assert!(generation.best <= best);
///     best = generation.best;
/// }
///
/// assert!(optimizer.run().distance() < 10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Optimizer<R = StdRng> {
    problem: Problem,
    options: Options,
    rng: R,
    generation: usize,
    population: Vec<Candidate>,
    best: Candidate,
}

impl Optimizer<StdRng> {
    /// Create a new optimizer for the colors and target in hashed hexadecimal
    /// notation.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::InvalidFormat`] if any of the color
    /// strings is malformed.
    pub fn new<S: AsRef<str>>(
        colors: &[S],
        target: &str,
        model: ColorModel,
        options: Options,
    ) -> Result<Self, Error> {
        let colors = colors
            .iter()
            .map(|c| c.as_ref().parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        let target = target.parse::<Rgb>()?;
        let rng = options
            .seed()
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self::with_rng(colors, target, model, options, rng))
    }
}

impl<R: Rng> Optimizer<R> {
    /// Create a new optimizer with the given pseudo-random number generator.
    ///
    /// This method ignores the seed in the options. It initializes and
    /// evaluates the first generation.
    pub fn with_rng(
        colors: Vec<Rgb>,
        target: Rgb,
        model: ColorModel,
        options: Options,
        mut rng: R,
    ) -> Self {
        let problem = Problem {
            colors,
            target,
            model,
        };

        let length = problem.colors.len();
        let population: Vec<Candidate> = (0..options.population_size())
            .map(|_| problem.evaluate(random_percentages(&mut rng, length)))
            .collect();
        let best = fittest(&population)
            .cloned()
            .unwrap_or_else(|| problem.evaluate(vec![0.0; length]));

        let this = Self {
            problem,
            options,
            rng,
            generation: 0,
            population,
            best,
        };

        this.log(format!(
            "optimizer::start colors={} target={} model={} population={} generations={}",
            this.problem.colors.len(),
            this.problem.target,
            this.problem.model,
            this.options.population_size(),
            this.options.generations(),
        ));
        this.log_generation(this.best.distance);
        this.log_improvement();
        this
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get the index of the most recently evaluated generation.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Determine whether this optimizer has evaluated all generations.
    pub fn is_done(&self) -> bool {
        self.options.generations() <= self.generation + 1
    }

    /// Get the best candidate found so far.
    pub fn best(&self) -> &Candidate {
        &self.best
    }

    /// Breed and evaluate the next generation.
    ///
    /// If this optimizer has already evaluated all generations, this method
    /// returns `None`. Otherwise, it returns a report on the new generation.
    pub fn step(&mut self) -> Option<Generation> {
        if self.is_done() {
            return None;
        }

        let rate = self.options.mutation_rate();
        let step = self.options.mutation_step();
        let size = self.options.tournament_size();

        let mut offspring = Vec::with_capacity(self.population.len());
        for _ in 0..self.population.len() {
            let parent1 = tournament(&mut self.rng, &self.population, size);
            let parent2 = tournament(&mut self.rng, &self.population, size);
            offspring.push(crossover(
                &mut self.rng,
                parent1.percentages(),
                parent2.percentages(),
            ));
        }

        for individual in offspring.iter_mut() {
            if self.rng.random_bool(rate) {
                mutate(&mut self.rng, individual, step);
            }
        }

        self.population = offspring
            .into_iter()
            .map(|p| self.problem.evaluate(p))
            .collect();
        self.generation += 1;

        let minimum = fittest(&self.population)?;
        let minimum_distance = minimum.distance;
        if minimum_distance < self.best.distance {
            self.best = minimum.clone();
            self.log_improvement();
        }
        self.log_generation(minimum_distance);

        Some(Generation {
            index: self.generation,
            minimum: minimum_distance,
            best: self.best.distance,
        })
    }

    /// Evolve all remaining generations and return the best candidate.
    pub fn run(mut self) -> Candidate {
        while self.step().is_some() {}

        self.log(format!(
            "optimizer::finish generation={} best={}",
            self.generation, self.best
        ));
        self.best
    }

    fn log(&self, message: impl AsRef<str>) {
        if self.options.verbose() {
            let _ = writeln!(std::io::stderr().lock(), "{}", message.as_ref());
        }
    }

    fn log_improvement(&self) {
        self.log(format!(
            "optimizer::improve generation={} best={}",
            self.generation, self.best
        ));
    }

    fn log_generation(&self, minimum: Float) {
        if self.options.volume() == Volume::Detailed {
            self.log(format!(
                "optimizer::generation index={} minimum={:.2} best={:.2}",
                self.generation, minimum, self.best.distance
            ));
        }
    }
}

// ====================================================================================================================
