//! Model-level configuration snapshot
//!
//! A `ModelConfig` is immutable while pipelines are being configured. The
//! owning [`RuntimeModel`](super::RuntimeModel) keeps it behind an `Arc` and
//! edits it copy-on-write, so every configuration pass reads one consistent
//! snapshot.

use std::fmt;

/// Whether a custom fragment shader augments or replaces the material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomShaderMode {
    #[default]
    ModifyMaterial,
    ReplaceMaterial,
}

/// User supplied shader snippets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomShader {
    pub mode: CustomShaderMode,
    pub vertex_shader_text: Option<String>,
    pub fragment_shader_text: Option<String>,
}

impl CustomShader {
    pub fn new(mode: CustomShaderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_vertex_shader(mut self, text: impl Into<String>) -> Self {
        self.vertex_shader_text = Some(text.into());
        self
    }

    pub fn with_fragment_shader(mut self, text: impl Into<String>) -> Self {
        self.fragment_shader_text = Some(text.into());
        self
    }

    pub fn has_fragment_shader(&self) -> bool {
        self.fragment_shader_text.is_some()
    }

    /// True when the fragment shader takes over material evaluation entirely
    pub fn replaces_material(&self) -> bool {
        self.has_fragment_shader() && self.mode == CustomShaderMode::ReplaceMaterial
    }
}

/// Opaque reference to a style assigned to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleHandle(pub u32);

/// Point cloud rendering options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCloudShading {
    /// Scale point size by geometric error
    pub attenuation: bool,
    pub back_face_culling: bool,
    pub geometric_error_scale: f32,
    /// Upper bound for attenuated point size, in pixels
    pub maximum_attenuation: Option<f32>,
    pub eye_dome_lighting: bool,
}

impl Default for PointCloudShading {
    fn default() -> Self {
        Self {
            attenuation: false,
            back_face_culling: false,
            geometric_error_scale: 1.0,
            maximum_attenuation: None,
            eye_dome_lighting: true,
        }
    }
}

/// What a classification model is draped over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationType {
    Terrain,
    Tileset,
    Both,
}

/// Label used to select one feature ID set
///
/// Numeric selectors expand to the positional label of the set
/// (`featureId_N` for primitives, `instanceFeatureId_N` for instances).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureIdLabel(String);

impl FeatureIdLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn primitive(index: u32) -> Self {
        Self(format!("featureId_{}", index))
    }

    pub fn instance(index: u32) -> Self {
        Self(format!("instanceFeatureId_{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureIdLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureIdLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for FeatureIdLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// Model configuration consumed by the pipeline configurator
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub custom_shader: Option<CustomShader>,
    pub style: Option<StyleHandle>,
    pub point_cloud_shading: Option<PointCloudShading>,
    pub allow_picking: bool,
    /// Draw triangle primitives as wireframe
    pub debug_wireframe: bool,
    /// Wireframe resources were reserved when the model was created.
    /// Required for `debug_wireframe` on downlevel backends.
    pub enable_debug_wireframe: bool,
    pub enable_show_outline: bool,
    /// Build 2D / Columbus view positions for this model
    pub project_to_2d: bool,
    pub instance_feature_id_label: FeatureIdLabel,
    pub feature_id_label: FeatureIdLabel,
    pub classification_type: Option<ClassificationType>,
}

impl ModelConfig {
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::new()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            custom_shader: None,
            style: None,
            point_cloud_shading: None,
            allow_picking: true,
            debug_wireframe: false,
            enable_debug_wireframe: false,
            enable_show_outline: true,
            project_to_2d: false,
            instance_feature_id_label: FeatureIdLabel::instance(0),
            feature_id_label: FeatureIdLabel::primitive(0),
            classification_type: None,
        }
    }
}

/// Builder for [`ModelConfig`]
#[derive(Debug, Clone, Default)]
pub struct ModelConfigBuilder {
    config: ModelConfig,
}

impl ModelConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_shader(mut self, shader: CustomShader) -> Self {
        self.config.custom_shader = Some(shader);
        self
    }

    pub fn style(mut self, style: StyleHandle) -> Self {
        self.config.style = Some(style);
        self
    }

    pub fn point_cloud_shading(mut self, shading: PointCloudShading) -> Self {
        self.config.point_cloud_shading = Some(shading);
        self
    }

    pub fn allow_picking(mut self, allow: bool) -> Self {
        self.config.allow_picking = allow;
        self
    }

    pub fn debug_wireframe(mut self, enabled: bool) -> Self {
        self.config.debug_wireframe = enabled;
        self
    }

    pub fn enable_debug_wireframe(mut self, enabled: bool) -> Self {
        self.config.enable_debug_wireframe = enabled;
        self
    }

    pub fn enable_show_outline(mut self, enabled: bool) -> Self {
        self.config.enable_show_outline = enabled;
        self
    }

    pub fn project_to_2d(mut self, enabled: bool) -> Self {
        self.config.project_to_2d = enabled;
        self
    }

    pub fn instance_feature_id_label(mut self, label: impl Into<FeatureIdLabel>) -> Self {
        self.config.instance_feature_id_label = label.into();
        self
    }

    pub fn feature_id_label(mut self, label: impl Into<FeatureIdLabel>) -> Self {
        self.config.feature_id_label = label.into();
        self
    }

    pub fn classification_type(mut self, classification: ClassificationType) -> Self {
        self.config.classification_type = Some(classification);
        self
    }

    pub fn build(self) -> ModelConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_are_positional() {
        let config = ModelConfig::default();
        assert_eq!(config.feature_id_label.as_str(), "featureId_0");
        assert_eq!(config.instance_feature_id_label.as_str(), "instanceFeatureId_0");
        assert!(config.allow_picking);
        assert!(config.enable_show_outline);
    }

    #[test]
    fn test_replace_material_requires_fragment_text() {
        let without_text = CustomShader::new(CustomShaderMode::ReplaceMaterial)
            .with_vertex_shader("void vertexMain() {}");
        assert!(!without_text.replaces_material());

        let with_text = without_text.with_fragment_shader("void fragmentMain() {}");
        assert!(with_text.replaces_material());

        let modifying = CustomShader::new(CustomShaderMode::ModifyMaterial)
            .with_fragment_shader("void fragmentMain() {}");
        assert!(!modifying.replaces_material());
    }

    #[test]
    fn test_builder_sets_labels() {
        let config = ModelConfig::builder()
            .feature_id_label(FeatureIdLabel::primitive(2))
            .instance_feature_id_label("perInstanceClass")
            .build();
        assert_eq!(config.feature_id_label.as_str(), "featureId_2");
        assert_eq!(config.instance_feature_id_label.as_str(), "perInstanceClass");
    }
}
