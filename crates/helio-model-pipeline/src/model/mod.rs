//! Model-level state shared by all primitives of a model

mod buffers;
mod config;
mod runtime_model;

pub use buffers::{BufferHandle, BufferTable};
pub use config::{
    ClassificationType, CustomShader, CustomShaderMode, FeatureIdLabel, ModelConfig,
    ModelConfigBuilder, PointCloudShading, StyleHandle,
};
pub use runtime_model::RuntimeModel;
