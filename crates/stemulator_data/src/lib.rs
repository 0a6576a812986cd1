pub mod data;

pub use data::lab::{LabPart, LearningGoals, ScienceLab};
pub use data::organism::{Organism, Role, TRAIT_MAX, TRAIT_MIN};
pub use data::settings::{Environment, FoodAvailability, Predation, Settings, SettingsUpdate};
pub use data::state::{
    ActionLog, GenerationReport, LabSnapshot, RenderFrame, SimulationState, SnapshotParameters,
    TraitDistribution,
};
