//! Pipeline stage selection
//!
//! A primitive's pipeline is rebuilt from scratch in two steps:
//!
//! 1. [`PrimitiveFeatures::derive`] reads the model configuration, node,
//!    primitive and frame state into a flag set
//! 2. [`build_stages`] turns the flag set into the ordered stage list
//!
//! [`StageTable`] then dispatches each stage to the renderer's implementation.

mod configure;
mod executor;
mod flags;
mod stage;

pub use configure::build_stages;
pub use executor::{StageExecutor, StageTable, StageTableBuilder};
pub use flags::PrimitiveFeatures;
pub use stage::PipelineStage;
