//! Immutable descriptions of loaded model content
//!
//! These are produced by the asset loader before any pipeline is configured
//! and are shared (`Arc`) between the runtime primitives that draw them.

mod feature_id_set;
mod node;
mod primitive;

pub use feature_id_set::{FeatureIdKind, FeatureIdSet};
pub use node::{Instances, NodeDescription, SkinHandle};
pub use primitive::{
    ComponentType, MorphTarget, PrimitiveDescription, PrimitiveTopology, Quantization,
    QuantizedEncoding, VertexAttribute, VertexSemantic,
};
