//! Asexual reproduction with per-trait mutation.

use crate::config::PopulationConfig;
use crate::population::random_position;
use rand::Rng;
use stemulator_data::Organism;

/// Adds `uniform(-0.5, 0.5) * mutation_rate / 10` to `value`, clamped to the trait range.
pub fn mutate_trait<R: Rng>(value: f64, mutation_rate: u8, rng: &mut R) -> f64 {
    if mutation_rate == 0 {
        return value;
    }
    let drift = rng.gen_range(-0.5..0.5) * f64::from(mutation_rate) / 10.0;
    Organism::clamp_trait(value + drift)
}

/// Builds one offspring of `parent`. Role is inherited, position is re-randomized.
pub fn offspring<R: Rng>(
    parent: &Organism,
    id: u32,
    mutation_rate: u8,
    config: &PopulationConfig,
    rng: &mut R,
) -> Organism {
    let (x, y) = random_position(config, rng);
    Organism {
        id,
        x,
        y,
        speed: mutate_trait(parent.speed, mutation_rate, rng),
        camouflage: mutate_trait(parent.camouflage, mutation_rate, rng),
        size: mutate_trait(parent.size, mutation_rate, rng),
        alive: true,
        role: parent.role,
    }
}

/// Replaces the generation with exactly one offspring per alive organism.
///
/// Dead organisms are discarded; offspring ids form a fresh dense sequence.
pub fn reproduction_pass<R: Rng>(
    organisms: &[Organism],
    mutation_rate: u8,
    config: &PopulationConfig,
    rng: &mut R,
) -> Vec<Organism> {
    organisms
        .iter()
        .filter(|o| o.alive)
        .enumerate()
        .map(|(i, parent)| offspring(parent, i as u32, mutation_rate, config, rng))
        .collect()
}
