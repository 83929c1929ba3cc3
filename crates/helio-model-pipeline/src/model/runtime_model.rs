//! Runtime model: owner of primitives, configuration and 2D buffers

use super::{BufferHandle, BufferTable, ModelConfig};
use crate::bounds::Sphere;
use crate::frame_state::FrameState;
use crate::runtime_primitive::RuntimePrimitive;
use crate::scene::{NodeDescription, PrimitiveDescription};
use crate::{Error, Result};
use glam::Vec3;
use std::sync::Arc;

/// A loaded model's runtime primitives and the configuration they are built from
///
/// Pipelines are rebuilt lazily by [`update`](Self::update) whenever the
/// configuration was edited, primitives were added, or any frame state
/// input (scene mode, 3D-only flag, backend tier, vertical exaggeration)
/// changed since the previous update.
pub struct RuntimeModel {
    config: Arc<ModelConfig>,
    primitives: Vec<RuntimePrimitive>,
    positions_2d: BufferTable<Vec<Vec3>>,
    last_frame: Option<FrameState>,
    dirty: bool,
}

impl RuntimeModel {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config: Arc::new(config),
            primitives: Vec::new(),
            positions_2d: BufferTable::new(),
            last_frame: None,
            dirty: true,
        }
    }

    /// Current configuration snapshot
    pub fn config(&self) -> &Arc<ModelConfig> {
        &self.config
    }

    /// Edit the configuration copy-on-write
    ///
    /// Snapshots handed out earlier keep their values.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut ModelConfig)) {
        let mut config = (*self.config).clone();
        edit(&mut config);
        self.replace_config(config);
    }

    pub fn replace_config(&mut self, config: ModelConfig) {
        if *self.config != config {
            self.config = Arc::new(config);
            self.dirty = true;
        }
    }

    /// Add a primitive; returns its index
    pub fn add_primitive(
        &mut self,
        node: Arc<NodeDescription>,
        primitive: Arc<PrimitiveDescription>,
    ) -> usize {
        self.primitives.push(RuntimePrimitive::new(primitive, node));
        self.dirty = true;
        self.primitives.len() - 1
    }

    pub fn primitives(&self) -> &[RuntimePrimitive] {
        &self.primitives
    }

    pub fn primitive(&self, index: usize) -> Result<&RuntimePrimitive> {
        self.primitives.get(index).ok_or(Error::PrimitiveIndex(index))
    }

    pub fn primitive_mut(&mut self, index: usize) -> Result<&mut RuntimePrimitive> {
        self.primitives.get_mut(index).ok_or(Error::PrimitiveIndex(index))
    }

    /// Whether the next [`update`](Self::update) will rebuild pipelines
    pub fn needs_reconfigure(&self, frame_state: &FrameState) -> bool {
        self.dirty || self.last_frame.as_ref() != Some(frame_state)
    }

    /// Rebuild every primitive pipeline if needed; returns whether it did
    pub fn update(&mut self, frame_state: &FrameState) -> bool {
        if !self.needs_reconfigure(frame_state) {
            return false;
        }

        if let Some(previous) = self.last_frame.filter(|last| last != frame_state) {
            log::info!(
                "Frame state changed: {:?} -> {:?}, rebuilding {} primitive pipelines",
                previous,
                frame_state,
                self.primitives.len()
            );
        } else {
            log::info!("Rebuilding {} primitive pipelines", self.primitives.len());
        }

        let config = Arc::clone(&self.config);
        for primitive in &mut self.primitives {
            primitive.configure_pipeline(&config, frame_state);
        }

        self.last_frame = Some(*frame_state);
        self.dirty = false;
        true
    }

    /// Attach projected 2D positions to a primitive
    ///
    /// Any buffer previously attached to that primitive is released.
    pub fn set_positions_2d(&mut self, index: usize, positions: Vec<Vec3>) -> Result<BufferHandle> {
        let primitive = self.primitives.get_mut(index).ok_or(Error::PrimitiveIndex(index))?;

        if let Some(previous) = primitive.positions_2d() {
            self.positions_2d.remove(previous);
        }

        let bounds = Sphere::from_points(&positions);
        let handle = self.positions_2d.insert(positions);
        primitive.attach_positions_2d(handle, bounds);
        log::debug!("Attached 2D positions to primitive {} ({:?})", index, handle);
        Ok(handle)
    }

    pub fn positions_2d(&self, handle: BufferHandle) -> Result<&[Vec3]> {
        self.positions_2d
            .get(handle)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidBuffer(handle))
    }

    /// Number of live 2D position buffers
    pub fn positions_2d_count(&self) -> usize {
        self.positions_2d.len()
    }
}
