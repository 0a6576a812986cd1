//! Population construction.

use crate::config::PopulationConfig;
use rand::Rng;
use stemulator_data::{Environment, Organism, Role, TRAIT_MAX, TRAIT_MIN};

/// Camouflage floor applied to arctic prey when light coloration is favoured.
pub const LIGHT_COLORATION_FLOOR: f64 = 7.0;

/// Optional environment shaping of a freshly built prey population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationBias {
    pub environment: Option<Environment>,
    /// Only has an effect together with [`Environment::Arctic`].
    pub favor_light_coloration: bool,
}

impl PopulationBias {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment: Some(environment),
            favor_light_coloration: false,
        }
    }
}

fn sample_trait<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(TRAIT_MIN..TRAIT_MAX)
}

/// Random position inside the arena.
pub fn random_position<R: Rng>(config: &PopulationConfig, rng: &mut R) -> (f64, f64) {
    (
        rng.gen_range(0.0..config.arena_width),
        rng.gen_range(0.0..config.arena_height),
    )
}

fn spawn_prey<R: Rng>(
    id: u32,
    bias: PopulationBias,
    config: &PopulationConfig,
    rng: &mut R,
) -> Organism {
    let mut speed = sample_trait(rng);
    let mut camouflage = sample_trait(rng);
    let mut size = sample_trait(rng);

    match bias.environment {
        Some(Environment::Desert) => {
            speed = (speed + rng.gen_range(0.0..2.0)).min(TRAIT_MAX);
            size = (size - rng.gen_range(0.0..3.0)).max(TRAIT_MIN);
        }
        Some(Environment::Arctic) => {
            size = (size + rng.gen_range(0.0..3.0)).min(TRAIT_MAX);
            if bias.favor_light_coloration {
                camouflage = camouflage.max(LIGHT_COLORATION_FLOOR);
            }
        }
        Some(Environment::Forest) | None => {}
    }

    let (x, y) = random_position(config, rng);
    Organism {
        id,
        x,
        y,
        speed: Organism::clamp_trait(speed),
        camouflage: Organism::clamp_trait(camouflage),
        size: Organism::clamp_trait(size),
        alive: true,
        role: Role::Prey,
    }
}

fn spawn_predator<R: Rng>(id: u32, config: &PopulationConfig, rng: &mut R) -> Organism {
    let speed = sample_trait(rng);
    let camouflage = sample_trait(rng);
    let size = sample_trait(rng);
    let (x, y) = random_position(config, rng);
    Organism {
        id,
        x,
        y,
        speed,
        camouflage,
        size,
        alive: true,
        role: Role::Predator,
    }
}

/// Builds `count` organisms: prey first (biased by `bias`), then predators.
///
/// Ids form a dense 0-based sequence in that order.
pub fn spawn_population<R: Rng>(
    count: usize,
    bias: PopulationBias,
    config: &PopulationConfig,
    rng: &mut R,
) -> Vec<Organism> {
    let prey_count = config.prey_count(count).min(count);
    let mut organisms = Vec::with_capacity(count);
    for i in 0..prey_count {
        organisms.push(spawn_prey(i as u32, bias, config, rng));
    }
    for i in prey_count..count {
        organisms.push(spawn_predator(i as u32, config, rng));
    }
    organisms
}

/// Reassigns ids as a dense 0-based sequence in collection order.
pub fn renumber(organisms: &mut [Organism]) {
    for (i, organism) in organisms.iter_mut().enumerate() {
        organism.id = i as u32;
    }
}

/// Pulls traits and positions of caller-supplied organisms back inside bounds.
pub fn sanitize(organism: &mut Organism, config: &PopulationConfig) {
    organism.speed = Organism::clamp_trait(organism.speed);
    organism.camouflage = Organism::clamp_trait(organism.camouflage);
    organism.size = Organism::clamp_trait(organism.size);
    organism.x = clamp_coordinate(organism.x, config.arena_width);
    organism.y = clamp_coordinate(organism.y, config.arena_height);
}

fn clamp_coordinate(value: f64, extent: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_default_composition() {
        let config = PopulationConfig::default();
        let population = spawn_population(50, PopulationBias::none(), &config, &mut rng());
        assert_eq!(population.len(), 50);
        assert_eq!(population.iter().filter(|o| o.is_prey()).count(), 42);
        assert_eq!(
            population
                .iter()
                .filter(|o| o.role == Role::Predator)
                .count(),
            8
        );
    }

    #[test]
    fn test_ids_are_dense_prey_first() {
        let config = PopulationConfig::default();
        let population = spawn_population(20, PopulationBias::none(), &config, &mut rng());
        for (i, o) in population.iter().enumerate() {
            assert_eq!(o.id, i as u32);
        }
        let first_predator = population.iter().position(|o| !o.is_prey()).unwrap();
        assert!(population[first_predator..].iter().all(|o| !o.is_prey()));
    }

    #[test]
    fn test_bounds_hold_for_every_bias() {
        let config = PopulationConfig::default();
        let mut rng = rng();
        for environment in [Environment::Forest, Environment::Desert, Environment::Arctic] {
            let bias = PopulationBias {
                environment: Some(environment),
                favor_light_coloration: true,
            };
            for o in spawn_population(200, bias, &config, &mut rng) {
                assert!(o.traits_in_bounds());
                assert!((0.0..=800.0).contains(&o.x));
                assert!((0.0..=600.0).contains(&o.y));
                assert!(o.alive);
            }
        }
    }

    #[test]
    fn test_light_coloration_floors_arctic_prey_camouflage() {
        let config = PopulationConfig::default();
        let bias = PopulationBias {
            environment: Some(Environment::Arctic),
            favor_light_coloration: true,
        };
        let population = spawn_population(100, bias, &config, &mut rng());
        assert!(population
            .iter()
            .filter(|o| o.is_prey())
            .all(|o| o.camouflage >= LIGHT_COLORATION_FLOOR));
    }

    #[test]
    fn test_light_coloration_ignored_outside_arctic() {
        let config = PopulationConfig::default();
        let bias = PopulationBias {
            environment: Some(Environment::Desert),
            favor_light_coloration: true,
        };
        let population = spawn_population(200, bias, &config, &mut rng());
        assert!(population
            .iter()
            .filter(|o| o.is_prey())
            .any(|o| o.camouflage < LIGHT_COLORATION_FLOOR));
    }

    #[test]
    fn test_zero_population() {
        let config = PopulationConfig::default();
        assert!(spawn_population(0, PopulationBias::none(), &config, &mut rng()).is_empty());
    }

    #[test]
    fn test_sanitize_clamps() {
        let config = PopulationConfig::default();
        let mut o = Organism {
            id: 9,
            x: -3.0,
            y: 900.0,
            speed: 12.0,
            camouflage: -1.0,
            size: 3.0,
            alive: true,
            role: Role::Prey,
        };
        sanitize(&mut o, &config);
        assert_eq!((o.x, o.y), (0.0, 600.0));
        assert_eq!(o.traits(), [10.0, 0.0, 3.0]);
    }

    #[test]
    fn test_sanitize_replaces_nan() {
        let config = PopulationConfig::default();
        let mut o = Organism {
            id: 0,
            x: f64::NAN,
            y: f64::INFINITY,
            speed: f64::NAN,
            camouflage: 4.0,
            size: f64::NEG_INFINITY,
            alive: true,
            role: Role::Predator,
        };
        sanitize(&mut o, &config);
        assert_eq!((o.x, o.y), (0.0, 600.0));
        assert_eq!(o.traits(), [0.0, 4.0, 0.0]);
        assert!(o.traits_in_bounds());
    }
}
