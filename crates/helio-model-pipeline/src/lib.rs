//! Helio Model Pipeline - per-primitive render stage selection
//!
//! Every drawable primitive of a loaded model is rendered by running an
//! ordered list of pipeline stages (geometry assembly, skinning, material,
//! lighting, picking, ...) against a shared shading context. This crate
//! decides which stages apply to a primitive and in what order:
//!
//! - [`RuntimePrimitive`] holds the per-primitive runtime state and its stage list
//! - [`RuntimePrimitive::configure_pipeline`] rebuilds that list from scratch
//! - [`inspect_feature_ids`] resolves instance / primitive feature IDs
//! - [`StageTable`] maps each [`PipelineStage`] to its executor
//! - [`RuntimeModel`] owns the configuration snapshot and reconfigures its
//!   primitives when the configuration or scene mode changes
//!
//! The stages themselves are implemented by the embedding renderer.

pub mod bounds;
pub mod feature_ids;
pub mod frame_state;
pub mod model;
pub mod pipeline;
pub mod scene;

mod runtime_primitive;

pub use bounds::{Aabb, Sphere};
pub use feature_ids::{inspect_feature_ids, FeatureIdReport};
pub use frame_state::{BackendTier, FrameState, SceneMode};
pub use model::{
    BufferHandle, BufferTable, ClassificationType, CustomShader, CustomShaderMode, FeatureIdLabel,
    ModelConfig, ModelConfigBuilder, PointCloudShading, RuntimeModel, StyleHandle,
};
pub use pipeline::{PipelineStage, PrimitiveFeatures, StageExecutor, StageTable};
pub use runtime_primitive::{DrawCommandHandle, RuntimePrimitive};

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running or managing primitive pipelines
///
/// Configuring a pipeline never fails; these come from the dispatch table
/// and from the model-owned resources around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No executor registered for stage {0}")]
    MissingStage(PipelineStage),

    #[error("Stage {stage} failed: {message}")]
    Stage {
        stage: PipelineStage,
        message: String,
    },

    #[error("Invalid buffer handle: {0:?}")]
    InvalidBuffer(BufferHandle),

    #[error("Primitive index out of range: {0}")]
    PrimitiveIndex(usize),
}
