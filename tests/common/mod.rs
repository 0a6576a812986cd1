pub mod macros;

use stemulator_lib::data::{
    Environment, FoodAvailability, LabPart, Organism, Predation, Role, ScienceLab, Settings,
};
use stemulator_lib::{EngineConfig, SimulationEngine};

type EngineMod = Box<dyn FnOnce(&mut SimulationEngine)>;

#[allow(dead_code)]
pub struct EngineBuilder {
    config: EngineConfig,
    organisms: Option<Vec<Organism>>,
    mods: Vec<EngineMod>,
}

#[allow(dead_code)]
impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default().with_seed(42),
            organisms: None,
            mods: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut EngineConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.config.defaults = settings;
        self
    }

    pub fn with_population(mut self, organisms: Vec<Organism>) -> Self {
        self.organisms = Some(organisms);
        self
    }

    pub fn with_lab(mut self, lab: ScienceLab, part_id: Option<u32>) -> Self {
        self.mods
            .push(Box::new(move |engine| engine.apply_lab(&lab, part_id)));
        self
    }

    pub fn build(self) -> SimulationEngine {
        let mut engine =
            SimulationEngine::new(self.config).expect("Failed to create engine in test builder");
        for modifier in self.mods {
            modifier(&mut engine);
        }
        if let Some(organisms) = self.organisms {
            engine.replace_population(organisms);
        }
        engine
    }
}

#[allow(dead_code)]
pub struct OrganismBuilder {
    organism: Organism,
}

#[allow(dead_code)]
impl OrganismBuilder {
    pub fn new() -> Self {
        Self {
            organism: Organism {
                id: 0,
                x: 400.0,
                y: 300.0,
                speed: 5.0,
                camouflage: 5.0,
                size: 5.0,
                alive: true,
                role: Role::Prey,
            },
        }
    }

    pub fn traits(mut self, speed: f64, camouflage: f64, size: f64) -> Self {
        self.organism.speed = speed;
        self.organism.camouflage = camouflage;
        self.organism.size = size;
        self
    }

    pub fn predator(mut self) -> Self {
        self.organism.role = Role::Predator;
        self
    }

    pub fn dead(mut self) -> Self {
        self.organism.alive = false;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.organism.x = x;
        self.organism.y = y;
        self
    }

    pub fn build(self) -> Organism {
        self.organism
    }
}

/// Settings under which an organism with maxed traits always survives.
#[allow(dead_code)]
pub fn lenient_settings() -> Settings {
    Settings {
        environment: Environment::Desert,
        predation: Predation::Low,
        food_availability: FoodAvailability::High,
        mutation_rate: 5,
    }
}

/// Settings under which an organism with zero traits never survives.
#[allow(dead_code)]
pub fn harsh_settings() -> Settings {
    Settings {
        environment: Environment::Arctic,
        predation: Predation::High,
        food_availability: FoodAvailability::Low,
        mutation_rate: 5,
    }
}

/// Single-part lab whose setup is `lines`.
#[allow(dead_code)]
pub fn lab_with_setup(lab_id: &str, part_id: u32, lines: &[&str]) -> ScienceLab {
    ScienceLab {
        lab_id: lab_id.to_string(),
        lab_parts: vec![LabPart {
            part_id,
            title: format!("Part {part_id}"),
            setup: lines.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }],
        ..Default::default()
    }
}
