mod common;

use common::EngineBuilder;
use proptest::prelude::*;
use stemulator_core::survival::survival_probability;
use stemulator_lib::data::{Environment, FoodAvailability, Organism, Predation, Role, Settings};

fn arb_environment() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::Forest),
        Just(Environment::Desert),
        Just(Environment::Arctic),
    ]
}

fn arb_predation() -> impl Strategy<Value = Predation> {
    prop_oneof![Just(Predation::Low), Just(Predation::Medium), Just(Predation::High)]
}

fn arb_food() -> impl Strategy<Value = FoodAvailability> {
    prop_oneof![
        Just(FoodAvailability::Low),
        Just(FoodAvailability::Medium),
        Just(FoodAvailability::High),
    ]
}

prop_compose! {
    fn arb_settings()(
        environment in arb_environment(),
        predation in arb_predation(),
        food_availability in arb_food(),
        mutation_rate in 0u8..=10
    ) -> Settings {
        Settings { environment, predation, food_availability, mutation_rate }
    }
}

prop_compose! {
    fn arb_organism()(
        speed in 0.0f64..=10.0,
        camouflage in 0.0f64..=10.0,
        size in 0.0f64..=10.0
    ) -> Organism {
        Organism {
            id: 0,
            x: 0.0,
            y: 0.0,
            speed,
            camouflage,
            size,
            alive: true,
            role: Role::Prey,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_generations_keep_traits_and_positions_in_bounds(
        seed in any::<u64>(),
        settings in arb_settings(),
        generations in 1usize..6
    ) {
        let mut engine = EngineBuilder::new()
            .with_seed(seed)
            .with_settings(settings)
            .build();

        let mut previous = engine.alive_count();
        for _ in 0..generations {
            let report = engine.run_generation();
            prop_assert_eq!(report.population_before, previous);
            prop_assert!(report.survivors <= report.population_before);
            prop_assert!((0.0..=1.0).contains(&report.survival_rate));
            previous = report.population_after;
        }

        let state = engine.state();
        let arena = &engine.config().population;
        for organism in &state.organisms {
            prop_assert!(organism.traits_in_bounds(), "traits out of range: {:?}", organism.traits());
            prop_assert!((0.0..=arena.arena_width).contains(&organism.x));
            prop_assert!((0.0..=arena.arena_height).contains(&organism.y));
            prop_assert!(organism.alive);
        }
        prop_assert_eq!(state.population_history.len(), generations);
    }

    #[test]
    fn test_survival_probability_is_a_probability(
        organism in arb_organism(),
        settings in arb_settings()
    ) {
        let p = survival_probability(&organism, &settings);
        prop_assert!((0.0..=1.0).contains(&p), "probability {} out of range", p);
    }

    #[test]
    fn test_faster_organisms_never_fare_worse(
        organism in arb_organism(),
        settings in arb_settings(),
        boost in 0.0f64..5.0
    ) {
        let mut faster = organism.clone();
        faster.speed = (organism.speed + boost).min(10.0);
        prop_assert!(
            survival_probability(&faster, &settings) >= survival_probability(&organism, &settings)
        );
    }
}
