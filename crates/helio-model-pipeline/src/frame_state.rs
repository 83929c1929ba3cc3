//! Per-frame state read while configuring pipelines

/// How the scene is currently projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneMode {
    #[default]
    Scene3D,
    Scene2D,
    /// 2.5D flattened projection
    ColumbusView,
    /// Transitioning between modes
    Morphing,
}

/// Capability tier reported by the graphics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendTier {
    /// Reduced feature set (WebGL1-class); some GPU resources must be
    /// reserved when a model is created
    Downlevel,
    #[default]
    Full,
}

/// Frame state as seen by the pipeline configurator
///
/// Every field feeds a stage guard, so two equal frame states always select
/// the same stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub mode: SceneMode,
    /// The scene never leaves 3D, so 2D reprojection is never needed
    pub scene_3d_only: bool,
    pub backend: BackendTier,
    pub vertical_exaggeration: f32,
    pub vertical_exaggeration_relative_height: f32,
}

impl FrameState {
    pub fn new(mode: SceneMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_backend(mut self, backend: BackendTier) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_scene_3d_only(mut self, scene_3d_only: bool) -> Self {
        self.scene_3d_only = scene_3d_only;
        self
    }

    pub fn with_vertical_exaggeration(mut self, exaggeration: f32, relative_height: f32) -> Self {
        self.vertical_exaggeration = exaggeration;
        self.vertical_exaggeration_relative_height = relative_height;
        self
    }

    /// Whether primitives need the 2D / Columbus view reprojection this frame
    pub fn wants_2d_projection(&self) -> bool {
        self.mode != SceneMode::Scene3D && !self.scene_3d_only
    }

    pub fn exaggerates_terrain(&self) -> bool {
        self.vertical_exaggeration != 1.0 || self.vertical_exaggeration_relative_height != 0.0
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            mode: SceneMode::Scene3D,
            scene_3d_only: false,
            backend: BackendTier::Full,
            vertical_exaggeration: 1.0,
            vertical_exaggeration_relative_height: 0.0,
        }
    }
}
