//! Runtime state of one drawable primitive

use crate::bounds::{Aabb, Sphere};
use crate::frame_state::FrameState;
use crate::model::{BufferHandle, ModelConfig};
use crate::pipeline::{build_stages, PipelineStage, PrimitiveFeatures};
use crate::scene::{NodeDescription, PrimitiveDescription, VertexSemantic};
use std::sync::Arc;

/// Opaque handle to a draw command built downstream from the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawCommandHandle(pub u64);

/// Runtime record for a primitive of a loaded model
///
/// Created once per primitive when the model is instantiated and owned by
/// the model for the rest of its life. The stage list is rebuilt from
/// scratch by every call to [`configure_pipeline`](Self::configure_pipeline).
#[derive(Debug, Clone)]
pub struct RuntimePrimitive {
    primitive: Arc<PrimitiveDescription>,
    node: Arc<NodeDescription>,
    pipeline_stages: Vec<PipelineStage>,
    features: PrimitiveFeatures,
    draw_command: Option<DrawCommandHandle>,
    bounding_sphere: Sphere,
    bounding_sphere_2d: Option<Sphere>,
    positions_2d: Option<BufferHandle>,
}

impl RuntimePrimitive {
    pub fn new(primitive: Arc<PrimitiveDescription>, node: Arc<NodeDescription>) -> Self {
        let bounding_sphere = primitive
            .attribute(&VertexSemantic::Position)
            .and_then(|position| Some(Aabb::new(position.min?, position.max?)))
            .map(|aabb| Sphere::from_aabb(&aabb))
            .unwrap_or_default();

        Self {
            primitive,
            node,
            pipeline_stages: Vec::new(),
            features: PrimitiveFeatures::empty(),
            draw_command: None,
            bounding_sphere,
            bounding_sphere_2d: None,
            positions_2d: None,
        }
    }

    /// Rebuild the stage list for the current configuration
    ///
    /// Replaces the previous list entirely; calling it again with the same
    /// inputs yields the same list.
    pub fn configure_pipeline(&mut self, config: &ModelConfig, frame_state: &FrameState) {
        let features = PrimitiveFeatures::derive(config, &self.node, &self.primitive, frame_state);
        build_stages(features, &mut self.pipeline_stages);

        log::debug!(
            "Configured {} pipeline stages for {:?} primitive (features {:?})",
            self.pipeline_stages.len(),
            self.primitive.topology,
            features,
        );
        self.features = features;
    }

    pub fn pipeline_stages(&self) -> &[PipelineStage] {
        &self.pipeline_stages
    }

    /// Flags the current stage list was built from
    pub fn features(&self) -> PrimitiveFeatures {
        self.features
    }

    pub fn primitive(&self) -> &PrimitiveDescription {
        &self.primitive
    }

    pub fn node(&self) -> &NodeDescription {
        &self.node
    }

    pub fn draw_command(&self) -> Option<DrawCommandHandle> {
        self.draw_command
    }

    pub fn set_draw_command(&mut self, command: DrawCommandHandle) {
        self.draw_command = Some(command);
    }

    pub fn take_draw_command(&mut self) -> Option<DrawCommandHandle> {
        self.draw_command.take()
    }

    /// Object space bounds
    pub fn bounding_sphere(&self) -> Sphere {
        self.bounding_sphere
    }

    /// Bounds of the projected 2D positions, once attached
    pub fn bounding_sphere_2d(&self) -> Option<Sphere> {
        self.bounding_sphere_2d
    }

    /// Handle into the owning model's 2D position buffers
    pub fn positions_2d(&self) -> Option<BufferHandle> {
        self.positions_2d
    }

    pub(crate) fn attach_positions_2d(&mut self, handle: BufferHandle, bounds: Option<Sphere>) {
        self.positions_2d = Some(handle);
        self.bounding_sphere_2d = bounds;
    }
}
