//! The simulation engine: sole owner of one run's [`SimulationState`].
//!
//! All operations are synchronous and run to completion. Callers only ever
//! receive copies of the state, never a reference into the live aggregate.

use crate::config::EngineConfig;
use crate::interpreter::interpret_lab;
use crate::metrics::Metrics;
use crate::population::{renumber, sanitize, spawn_population, PopulationBias};
use crate::reproduction::reproduction_pass;
use crate::stats::update_stats;
use crate::survival::survival_pass;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use stemulator_data::{
    GenerationReport, LabSnapshot, Organism, RenderFrame, ScienceLab, Settings, SettingsUpdate,
    SimulationState, SnapshotParameters, TraitDistribution,
};

pub struct SimulationEngine {
    config: EngineConfig,
    state: SimulationState,
    rng: ChaCha8Rng,
    metrics: Metrics,
}

impl SimulationEngine {
    /// Validates `config`, seeds the RNG and builds the initial population.
    pub fn new(config: EngineConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let state = SimulationState::new(config.defaults, Vec::new(), config.log.capacity);
        let mut engine = Self {
            config,
            state,
            rng,
            metrics: Metrics::new(),
        };
        engine.initialize();
        Ok(engine)
    }

    /// Rebuilds the state from the configured defaults: generation 0, a fresh
    /// unbiased population, empty history and an empty audit log.
    pub fn initialize(&mut self) {
        let organisms = spawn_population(
            self.config.population.initial_population,
            PopulationBias::none(),
            &self.config.population,
            &mut self.rng,
        );
        self.state =
            SimulationState::new(self.config.defaults, organisms, self.config.log.capacity);
        tracing::debug!(
            population = self.state.organisms.len(),
            "Simulation initialized"
        );
    }

    /// Discards all history and starts over.
    pub fn reset(&mut self) {
        self.initialize();
        tracing::info!("Simulation reset");
    }

    /// Overwrites only the provided settings. The population is left alone.
    pub fn update_settings(&mut self, update: &SettingsUpdate) {
        let mut update = *update;
        if let Some(rate) = update.mutation_rate {
            if rate > Settings::MAX_MUTATION_RATE {
                tracing::warn!(
                    requested = rate,
                    max = Settings::MAX_MUTATION_RATE,
                    "Mutation rate clamped"
                );
                update.mutation_rate = Some(Settings::MAX_MUTATION_RATE);
            }
        }
        update.apply_to(&mut self.state.settings);

        let described = serde_json::to_string(&update).unwrap_or_else(|_| format!("{update:?}"));
        tracing::debug!(update = %described, "Settings updated");
        self.state
            .actions
            .push(format!("Settings updated: {described}"));
    }

    /// Derives settings from the lab's setup text, installs them and rebuilds
    /// the population for the derived environment. History is cleared.
    ///
    /// `part_id = None` combines the setup of every part.
    pub fn apply_lab(&mut self, lab: &ScienceLab, part_id: Option<u32>) {
        let directives = interpret_lab(lab, part_id);
        let resolved = directives.resolve(&self.state.settings);
        self.update_settings(&SettingsUpdate {
            environment: Some(resolved.environment),
            predation: Some(resolved.predation),
            food_availability: Some(resolved.food_availability),
            mutation_rate: Some(resolved.mutation_rate),
        });

        let bias = PopulationBias {
            favor_light_coloration: directives.favor_light_coloration,
            ..PopulationBias::for_environment(resolved.environment)
        };
        self.state.organisms = spawn_population(
            self.config.population.initial_population,
            bias,
            &self.config.population,
            &mut self.rng,
        );
        self.state.trait_distribution = TraitDistribution::from_organisms(&self.state.organisms);
        self.state.population_history.clear();
        self.state.extinct = self.state.organisms.is_empty();

        let part = part_id.map_or_else(|| "all".to_string(), |id| id.to_string());
        self.state
            .actions
            .push(format!("Applied lab {} part {}", lab.lab_id, part));
        self.metrics.record_lab_applied();

        tracing::info!(
            lab = %lab.lab_id,
            part = %part,
            environment = %resolved.environment,
            predation = %resolved.predation,
            food = %resolved.food_availability,
            mutation_rate = resolved.mutation_rate,
            light_coloration = directives.favor_light_coloration,
            "Lab applied"
        );
    }

    /// Advances one generation: survival, reproduction, then statistics.
    ///
    /// An empty population still advances the counter and records a zero in
    /// the history; the run stays in the extinct state.
    pub fn run_generation(&mut self) -> GenerationReport {
        let started = Instant::now();
        let was_extinct = self.state.extinct;
        self.state.generation += 1;

        let (entered, survived) = survival_pass(
            &mut self.state.organisms,
            &self.state.settings,
            &mut self.rng,
        );
        self.state.organisms = reproduction_pass(
            &self.state.organisms,
            self.state.settings.mutation_rate,
            &self.config.population,
            &mut self.rng,
        );
        update_stats(&mut self.state, entered, survived);

        let generation = self.state.generation;
        let extinct = self.state.extinct;
        if extinct {
            self.state
                .actions
                .push(format!("Generation {generation} completed (population extinct)"));
            if !was_extinct {
                tracing::info!(generation, "Population went extinct");
            }
        } else {
            self.state
                .actions
                .push(format!("Generation {generation} completed"));
        }

        let population_after = self.state.organisms.len();
        self.metrics
            .record_generation(started.elapsed(), population_after, extinct);
        tracing::debug!(
            generation,
            entered,
            survived,
            survival_rate = self.state.survival_rate,
            "Generation completed"
        );

        GenerationReport {
            generation,
            population_before: entered,
            survivors: survived,
            population_after,
            survival_rate: self.state.survival_rate,
            extinct,
        }
    }

    /// Installs a caller-built population, e.g. to stage a scenario.
    ///
    /// Traits and positions are clamped back into bounds and ids are
    /// renumbered; liveness flags are kept as given.
    pub fn replace_population(&mut self, mut organisms: Vec<Organism>) {
        for organism in organisms.iter_mut() {
            sanitize(organism, &self.config.population);
        }
        renumber(&mut organisms);
        self.state.extinct = organisms.is_empty();
        self.state.trait_distribution = TraitDistribution::from_organisms(&organisms);
        self.state
            .actions
            .push(format!("Population replaced ({} organisms)", organisms.len()));
        self.state.organisms = organisms;
    }

    /// Projection handed to the feedback consumer.
    pub fn snapshot(&self) -> LabSnapshot {
        let settings = &self.state.settings;
        LabSnapshot {
            environment: settings.environment,
            parameters: SnapshotParameters {
                predation: settings.predation,
                food_availability: settings.food_availability,
                mutation_rate: settings.mutation_rate,
            },
            current_population: self.state.alive_count(),
            last_actions: self.state.actions.recent(self.config.log.snapshot_actions),
        }
    }

    /// Copy of the full state.
    pub fn state(&self) -> SimulationState {
        self.state.clone()
    }

    /// Copy of what the renderer needs for one frame.
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            generation: self.state.generation,
            environment: self.state.settings.environment,
            organisms: self.state.organisms.clone(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    pub fn settings(&self) -> Settings {
        self.state.settings
    }

    pub fn alive_count(&self) -> usize {
        self.state.alive_count()
    }

    pub fn population_history(&self) -> &[usize] {
        &self.state.population_history
    }

    pub fn survival_rate(&self) -> f64 {
        self.state.survival_rate
    }

    pub fn is_extinct(&self) -> bool {
        self.state.extinct
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
