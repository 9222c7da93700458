use rand::Rng;

use super::vector::normalize;
use super::Candidate;
use crate::{ColorModel, Float, Rgb};

/// The blend problem: which colors to mix, in which model, to match which
/// target.
///
/// The problem is immutable for the duration of a run and passed explicitly
/// to every operation that needs it.
#[derive(Clone, Debug)]
pub(crate) struct Problem {
    pub colors: Vec<Rgb>,
    pub target: Rgb,
    pub model: ColorModel,
}

impl Problem {
    /// Evaluate the percentage vector by mixing the colors and measuring the
    /// distance to the target.
    ///
    /// The percentage vector must have as many entries as there are colors.
    pub fn evaluate(&self, percentages: Vec<Float>) -> Candidate {
        debug_assert_eq!(self.colors.len(), percentages.len());

        let channels = self.colors.iter().map(|c| c.as_ref());
        let color = Rgb::from(crate::core::mix(self.model, channels, &percentages));
        let distance = self.model.distance(&color, &self.target);
        Candidate::new(percentages, color, distance)
    }
}

/// Find the candidate with the smallest distance.
///
/// Ties go to the earlier candidate. This function returns `None` if there are
/// no candidates.
pub(crate) fn fittest(population: &[Candidate]) -> Option<&Candidate> {
    population
        .iter()
        .reduce(|best, c| if c.distance() < best.distance() { c } else { best })
}

/// Select a candidate by tournament.
///
/// This function draws `size` contestants uniformly at random and with
/// replacement from the population and returns the one with the smallest
/// distance. The population must not be empty.
pub(crate) fn tournament<'p, R: Rng + ?Sized>(
    rng: &mut R,
    population: &'p [Candidate],
    size: usize,
) -> &'p Candidate {
    let mut winner = &population[rng.random_range(0..population.len())];
    for _ in 1..size {
        let contestant = &population[rng.random_range(0..population.len())];
        if contestant.distance() < winner.distance() {
            winner = contestant;
        }
    }
    winner
}

/// Combine the two parents with single-point crossover.
///
/// The child takes the first parent's percentages before a uniformly random
/// cut and the second parent's percentages from the cut onwards. It is
/// normalized before being returned.
pub(crate) fn crossover<R: Rng + ?Sized>(
    rng: &mut R,
    parent1: &[Float],
    parent2: &[Float],
) -> Vec<Float> {
    debug_assert_eq!(parent1.len(), parent2.len());
    if parent1.is_empty() {
        return Vec::new();
    }

    let cut = rng.random_range(0..parent1.len());
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    normalize(&mut child);
    child
}

/// Mutate the individual.
///
/// This function picks one percentage uniformly at random, adds a uniformly
/// random delta in `-step..=step`, and then normalizes the individual again.
pub(crate) fn mutate<R: Rng + ?Sized>(rng: &mut R, individual: &mut [Float], step: Float) {
    if individual.is_empty() {
        return;
    }

    let index = rng.random_range(0..individual.len());
    individual[index] += rng.random_range(-step..=step);
    normalize(individual);
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{crossover, fittest, mutate, tournament, Problem};
    use crate::error::Error;
    use crate::{assert_close_enough, ColorModel, Float, Rgb};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn purple_problem(model: ColorModel) -> Result<Problem, Error> {
        Ok(Problem {
            colors: vec!["#ff0000".parse()?, "#0000ff".parse()?],
            target: "#800080".parse()?,
            model,
        })
    }

    #[test]
    fn test_evaluate() -> Result<(), Error> {
        let problem = purple_problem(ColorModel::Rgb)?;

        let candidate = problem.evaluate(vec![50.0, 50.0]);
        assert_eq!(candidate.color(), Rgb::new(0x80, 0x00, 0x80));
        assert_eq!(candidate.distance(), 0.0);

        let candidate = problem.evaluate(vec![100.0, 0.0]);
        assert_eq!(candidate.color(), Rgb::new(0xff, 0x00, 0x00));
        assert_close_enough!(
            candidate.distance(),
            ((127.0 * 127.0 + 128.0 * 128.0) as Float).sqrt()
        );

        let problem = purple_problem(ColorModel::Cmyk)?;
        let candidate = problem.evaluate(vec![50.0, 50.0]);
        assert_eq!(candidate.distance(), 0.0);

        Ok(())
    }

    #[test]
    fn test_fittest_and_tournament() -> Result<(), Error> {
        let problem = purple_problem(ColorModel::Rgb)?;
        let population = vec![
            problem.evaluate(vec![100.0, 0.0]),
            problem.evaluate(vec![50.0, 50.0]),
            problem.evaluate(vec![0.0, 100.0]),
            problem.evaluate(vec![50.0, 50.0]),
        ];

        let best = fittest(&population).map(|c| c.percentages().to_vec());
        assert_eq!(best, Some(vec![50.0, 50.0]));
        assert!(fittest(&[]).is_none());

        // With many contestants, the fittest all but certainly wins.
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(tournament(&mut rng, &population, 64).distance(), 0.0);
        }

        // With a single contestant, any candidate may win.
        let winner = tournament(&mut rng, &population, 1);
        assert!(population.contains(winner));

        Ok(())
    }

    #[test]
    fn test_crossover() {
        let mut rng = StdRng::seed_from_u64(2);
        let parent1 = [10.0, 20.0, 30.0, 40.0];
        let parent2 = [40.0, 30.0, 20.0, 10.0];

        let possible_children: Vec<Vec<Float>> = (0..4)
            .map(|cut| {
                let mut child = [&parent1[..cut], &parent2[cut..]].concat();
                super::normalize(&mut child);
                child
            })
            .collect();

        for _ in 0..20 {
            let child = crossover(&mut rng, &parent1, &parent2);
            assert_eq!(child.len(), 4);
            assert!(possible_children.contains(&child), "{:?}", child);
        }

        assert!(crossover(&mut rng, &[], &[]).is_empty());
        assert_eq!(crossover(&mut rng, &[3.0], &[1.0]), vec![100.0]);
    }

    #[test]
    fn test_mutate() {
        let mut rng = StdRng::seed_from_u64(3);
        let all_equal = |s: &[Float]| s.iter().all(|p| (p - s[0]).abs() < 1e-3);

        for _ in 0..20 {
            let mut individual = [25.0, 25.0, 25.0, 25.0];
            mutate(&mut rng, &mut individual, 5.0);
            assert!(individual.iter().all(|p| (0.0..=100.0).contains(p)));
            assert_close_enough!(individual.iter().sum::<Float>(), 100.0);

            // Only one percentage changed, the others were merely rescaled.
            let mut sorted = individual;
            sorted.sort_by(|a, b| a.total_cmp(b));
            assert!(all_equal(&sorted[..3]) || all_equal(&sorted[1..]));
        }

        let mut empty: [Float; 0] = [];
        mutate(&mut rng, &mut empty, 5.0);

        let mut single = [100.0];
        mutate(&mut rng, &mut single, 5.0);
        assert_eq!(single, [100.0]);
    }
}
