pub mod session;

pub use session::{LabSession, SessionError};
pub use stemulator_core::{EngineConfig, SimulationEngine};
pub use stemulator_data as data;
pub use stemulator_io::LabLibrary;
