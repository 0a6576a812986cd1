/// Asserts that every organism of the engine's population has traits in `[0, 10]`.
#[macro_export]
macro_rules! assert_traits_in_bounds {
    ($engine:expr) => {
        for organism in $engine.state().organisms.iter() {
            assert!(
                organism.traits_in_bounds(),
                "Organism {} has traits out of range: {:?}",
                organism.id,
                organism.traits()
            );
        }
    };
}

/// Asserts that every organism sits inside the configured arena.
#[macro_export]
macro_rules! assert_positions_in_arena {
    ($engine:expr) => {
        let arena = &$engine.config().population;
        for organism in $engine.state().organisms.iter() {
            assert!(
                (0.0..=arena.arena_width).contains(&organism.x)
                    && (0.0..=arena.arena_height).contains(&organism.y),
                "Organism {} outside the arena at ({}, {})",
                organism.id,
                organism.x,
                organism.y
            );
        }
    };
}

/// Asserts that the population size matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($engine:expr, $count:expr) => {
        assert_eq!(
            $engine.state().organisms.len(),
            $count,
            "Population count mismatch"
        );
    };
}
