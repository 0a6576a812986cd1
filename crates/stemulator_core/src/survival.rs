//! Survival pass.
//!
//! Survival odds are an additive linear score over the organism's traits plus
//! per-environment bonuses, minus predation and food pressure, clamped to
//! `[0, 1]`. The coefficients are fixed so that students can reason about
//! how a trait change shifts the odds.

use rand::Rng;
use stemulator_data::{Environment, FoodAvailability, Organism, Predation, Settings};

const BASE_SURVIVAL: f64 = 0.5;
const SPEED_WEIGHT: f64 = 0.05;
const CAMOUFLAGE_WEIGHT: f64 = 0.05;
const SIZE_WEIGHT: f64 = 0.02;

/// Per-environment additive trait bonuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentBonus {
    pub speed: f64,
    pub camouflage: f64,
    pub size: f64,
}

pub fn predation_multiplier(predation: Predation) -> f64 {
    match predation {
        Predation::Low => 0.3,
        Predation::Medium => 0.5,
        Predation::High => 0.7,
    }
}

/// Scarce food raises the multiplier, which lowers survival.
pub fn food_multiplier(food: FoodAvailability) -> f64 {
    match food {
        FoodAvailability::Low => 0.7,
        FoodAvailability::Medium => 0.5,
        FoodAvailability::High => 0.3,
    }
}

pub fn environment_bonus(environment: Environment) -> EnvironmentBonus {
    match environment {
        Environment::Forest => EnvironmentBonus {
            speed: 0.0,
            camouflage: 2.0,
            size: 0.0,
        },
        Environment::Desert => EnvironmentBonus {
            speed: 1.0,
            camouflage: 0.0,
            size: -1.0,
        },
        Environment::Arctic => EnvironmentBonus {
            speed: 0.0,
            camouflage: 0.0,
            size: 1.0,
        },
    }
}

/// Probability that `organism` survives one generation under `settings`.
pub fn survival_probability(organism: &Organism, settings: &Settings) -> f64 {
    let bonus = environment_bonus(settings.environment);
    let p = BASE_SURVIVAL
        + SPEED_WEIGHT * (organism.speed + bonus.speed)
        + CAMOUFLAGE_WEIGHT * (organism.camouflage + bonus.camouflage)
        + SIZE_WEIGHT * (organism.size + bonus.size)
        - predation_multiplier(settings.predation)
        - food_multiplier(settings.food_availability);
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}

/// Runs one independent Bernoulli draw per alive organism, marking losers dead.
///
/// Returns `(entered, survived)` counts over the organisms that were alive
/// when the pass started.
pub fn survival_pass<R: Rng>(
    organisms: &mut [Organism],
    settings: &Settings,
    rng: &mut R,
) -> (usize, usize) {
    let mut entered = 0;
    let mut survived = 0;
    for organism in organisms.iter_mut().filter(|o| o.alive) {
        entered += 1;
        let p = survival_probability(organism, settings);
        organism.alive = rng.gen_bool(p);
        if organism.alive {
            survived += 1;
        }
    }
    (entered, survived)
}
