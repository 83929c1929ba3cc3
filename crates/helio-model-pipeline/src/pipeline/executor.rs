//! Dispatch table from pipeline stages to their implementations

use super::PipelineStage;
use crate::frame_state::FrameState;
use crate::runtime_primitive::RuntimePrimitive;
use crate::{Error, Result};
use std::collections::HashMap;

/// Implementation of one pipeline stage
///
/// `C` is the shading / geometry assembly context shared by all stages of
/// a primitive. Stages augment it in place.
pub trait StageExecutor<C>: Send + Sync {
    fn process(&self, ctx: &mut C, primitive: &RuntimePrimitive, frame_state: &FrameState) -> Result<()>;
}

impl<C, F> StageExecutor<C> for F
where
    F: Fn(&mut C, &RuntimePrimitive, &FrameState) -> Result<()> + Send + Sync,
{
    fn process(&self, ctx: &mut C, primitive: &RuntimePrimitive, frame_state: &FrameState) -> Result<()> {
        self(ctx, primitive, frame_state)
    }
}

/// Maps each [`PipelineStage`] to its executor
pub struct StageTable<C> {
    executors: HashMap<PipelineStage, Box<dyn StageExecutor<C>>>,
}

impl<C> StageTable<C> {
    pub fn new() -> Self {
        Self {
            executors: HashMap::new(),
        }
    }

    /// Create a builder for fluent API
    pub fn builder() -> StageTableBuilder<C> {
        StageTableBuilder::new()
    }

    /// Register an executor, replacing any previous one for `stage`
    pub fn register(&mut self, stage: PipelineStage, executor: impl StageExecutor<C> + 'static) {
        if self.executors.insert(stage, Box::new(executor)).is_some() {
            log::debug!("Replaced executor for stage {}", stage);
        }
    }

    pub fn contains(&self, stage: PipelineStage) -> bool {
        self.executors.contains_key(&stage)
    }

    /// Stages from `stages` that have no executor, in order
    pub fn missing_stages(&self, stages: &[PipelineStage]) -> Vec<PipelineStage> {
        stages
            .iter()
            .copied()
            .filter(|stage| !self.contains(*stage))
            .collect()
    }

    /// Run the primitive's pipeline against `ctx`
    ///
    /// Every stage is checked for an executor before the first one runs.
    pub fn run(&self, ctx: &mut C, primitive: &RuntimePrimitive, frame_state: &FrameState) -> Result<()> {
        let stages = primitive.pipeline_stages();
        if let Some(&stage) = self.missing_stages(stages).first() {
            return Err(Error::MissingStage(stage));
        }

        for &stage in stages {
            log::trace!("  Processing stage: {}", stage);
            let executor = self.executors.get(&stage).ok_or(Error::MissingStage(stage))?;
            executor.process(ctx, primitive, frame_state)?;
        }

        Ok(())
    }
}

impl<C> Default for StageTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`StageTable`]
pub struct StageTableBuilder<C> {
    table: StageTable<C>,
}

impl<C> StageTableBuilder<C> {
    pub fn new() -> Self {
        Self {
            table: StageTable::new(),
        }
    }

    pub fn with_stage(mut self, stage: PipelineStage, executor: impl StageExecutor<C> + 'static) -> Self {
        self.table.register(stage, executor);
        self
    }

    pub fn build(self) -> StageTable<C> {
        self.table
    }
}

impl<C> Default for StageTableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
