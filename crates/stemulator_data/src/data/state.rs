use super::organism::Organism;
use super::settings::{Environment, FoodAvailability, Predation, Settings};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Parallel per-trait sequences mirroring the current population order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    pub speed: Vec<f64>,
    pub camouflage: Vec<f64>,
    pub size: Vec<f64>,
}

impl TraitDistribution {
    pub fn from_organisms(organisms: &[Organism]) -> Self {
        Self {
            speed: organisms.iter().map(|o| o.speed).collect(),
            camouflage: organisms.iter().map(|o| o.camouflage).collect(),
            size: organisms.iter().map(|o| o.size).collect(),
        }
    }

    /// Mean of each trait as `[speed, camouflage, size]`; 0 for an empty population.
    pub fn means(&self) -> [f64; 3] {
        fn mean(values: &[f64]) -> f64 {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        }
        [mean(&self.speed), mean(&self.camouflage), mean(&self.size)]
    }

    pub fn clear(&mut self) {
        self.speed.clear();
        self.camouflage.clear();
        self.size.clear();
    }

    pub fn len(&self) -> usize {
        self.speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }
}

/// Bounded audit trail of human-readable events. Oldest entries are evicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl ActionLog {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.into());
    }

    /// The newest `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

/// Complete mutable state of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationState {
    pub generation: u64,
    pub organisms: Vec<Organism>,
    pub settings: Settings,
    pub population_history: Vec<usize>,
    pub trait_distribution: TraitDistribution,
    pub survival_rate: f64,
    pub extinct: bool,
    pub actions: ActionLog,
}

impl SimulationState {
    /// Fresh run at generation 0. An empty population starts out extinct.
    pub fn new(settings: Settings, organisms: Vec<Organism>, log_capacity: usize) -> Self {
        Self {
            generation: 0,
            extinct: organisms.is_empty(),
            organisms,
            settings,
            population_history: Vec::new(),
            trait_distribution: TraitDistribution::default(),
            survival_rate: 0.0,
            actions: ActionLog::with_capacity(log_capacity),
        }
    }

    pub fn alive_count(&self) -> usize {
        self.organisms.iter().filter(|o| o.alive).count()
    }
}

/// Settings portion of a [`LabSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotParameters {
    pub predation: Predation,
    pub food_availability: FoodAvailability,
    pub mutation_rate: u8,
}

/// Read-only projection handed to the feedback consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSnapshot {
    pub environment: Environment,
    pub parameters: SnapshotParameters,
    pub current_population: usize,
    #[serde(rename = "last10Actions")]
    pub last_actions: Vec<String>,
}

/// Point-in-time copy of what the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub generation: u64,
    pub environment: Environment,
    pub organisms: Vec<Organism>,
}

/// Outcome of one generation advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub generation: u64,
    /// Alive organisms entering the survival pass.
    pub population_before: usize,
    /// Organisms still alive after the survival pass.
    pub survivors: usize,
    /// Population size after reproduction.
    pub population_after: usize,
    pub survival_rate: f64,
    pub extinct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::organism::Role;

    #[test]
    fn test_action_log_evicts_oldest() {
        let mut log = ActionLog::with_capacity(3);
        for i in 0..5 {
            log.push(format!("event {i}"));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.recent(10), vec!["event 2", "event 3", "event 4"]);
        assert_eq!(log.recent(2), vec!["event 3", "event 4"]);
        assert_eq!(log.last(), Some("event 4"));
    }

    #[test]
    fn test_action_log_zero_capacity_still_holds_one() {
        let mut log = ActionLog::with_capacity(0);
        log.push("a");
        log.push("b");
        assert_eq!(log.recent(5), vec!["b"]);
    }

    #[test]
    fn test_new_state_extinct_only_when_empty() {
        let empty = SimulationState::new(Settings::default(), Vec::new(), 10);
        assert!(empty.extinct);

        let organism = Organism {
            id: 0,
            x: 1.0,
            y: 1.0,
            speed: 5.0,
            camouflage: 5.0,
            size: 5.0,
            alive: true,
            role: Role::Prey,
        };
        let populated = SimulationState::new(Settings::default(), vec![organism], 10);
        assert!(!populated.extinct);
    }

    #[test]
    fn test_trait_means_empty_is_zero() {
        assert_eq!(TraitDistribution::default().means(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_trait_means() {
        let dist = TraitDistribution {
            speed: vec![2.0, 4.0],
            camouflage: vec![1.0, 1.0],
            size: vec![0.0, 10.0],
        };
        assert_eq!(dist.means(), [3.0, 1.0, 5.0]);
    }

    #[test]
    fn test_snapshot_wire_names() {
        let snapshot = LabSnapshot {
            environment: Environment::Arctic,
            parameters: SnapshotParameters {
                predation: Predation::High,
                food_availability: FoodAvailability::Low,
                mutation_rate: 8,
            },
            current_population: 12,
            last_actions: vec!["Generation 1 completed".into()],
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["environment"], "arctic");
        assert_eq!(value["parameters"]["foodAvailability"], "low");
        assert_eq!(value["currentPopulation"], 12);
        assert_eq!(value["last10Actions"][0], "Generation 1 completed");
    }
}
