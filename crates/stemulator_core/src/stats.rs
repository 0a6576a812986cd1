use stemulator_data::{SimulationState, TraitDistribution};

/// Survivors over entrants, 0 when nobody entered the survival pass.
pub fn survival_rate(entered: usize, survived: usize) -> f64 {
    if entered == 0 {
        0.0
    } else {
        survived as f64 / entered as f64
    }
}

/// Statistics pass: appends the alive count to the history, records the
/// survival rate and re-snapshots the trait distribution.
pub fn update_stats(state: &mut SimulationState, entered: usize, survived: usize) {
    let alive = state.alive_count();
    state.population_history.push(alive);
    state.survival_rate = survival_rate(entered, survived);
    state.trait_distribution = TraitDistribution::from_organisms(&state.organisms);
    state.extinct = state.organisms.is_empty();
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemulator_data::{Organism, Role, Settings};

    #[test]
    fn test_survival_rate_guards_empty() {
        assert_eq!(survival_rate(0, 0), 0.0);
        assert_eq!(survival_rate(4, 1), 0.25);
    }

    #[test]
    fn test_update_stats_mirrors_population() {
        let organisms = vec![
            Organism {
                id: 0,
                x: 0.0,
                y: 0.0,
                speed: 1.0,
                camouflage: 2.0,
                size: 3.0,
                alive: true,
                role: Role::Prey,
            };
            3
        ];
        let mut state = SimulationState::new(Settings::default(), organisms, 10);
        update_stats(&mut state, 6, 3);
        assert_eq!(state.population_history, vec![3]);
        assert_eq!(state.survival_rate, 0.5);
        assert_eq!(state.trait_distribution.speed, vec![1.0; 3]);
        assert_eq!(state.trait_distribution.size, vec![3.0; 3]);
        assert!(!state.extinct);
    }

    #[test]
    fn test_update_stats_marks_extinction() {
        let mut state = SimulationState::new(Settings::default(), Vec::new(), 10);
        update_stats(&mut state, 0, 0);
        assert_eq!(state.population_history, vec![0]);
        assert_eq!(state.survival_rate, 0.0);
        assert!(state.trait_distribution.is_empty());
        assert!(state.extinct);
    }
}
