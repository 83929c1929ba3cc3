//! The closed set of primitive pipeline stages

use std::fmt;

/// One processing stage of a primitive pipeline
///
/// Declaration order matches the order in which stages are appended by the
/// configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStage {
    /// Reprojects positions for 2D / Columbus view
    SceneMode2D,
    /// Vertex attribute and index assembly
    Geometry,
    VerticalExaggeration,
    /// Generates line indices for debug wireframe
    Wireframe,
    /// Drapes the primitive over terrain or tileset geometry
    Classification,
    MorphTargets,
    Skinning,
    PointCloudStyling,
    Dequantization,
    Material,
    /// Declares the feature ID structs; always present
    FeatureId,
    /// Declares the metadata structs; always present
    Metadata,
    SelectedFeatureId,
    BatchTexture,
    CpuStyling,
    CustomShader,
    Lighting,
    Picking,
    PrimitiveOutline,
    Alpha,
    PrimitiveStatistics,
}

impl PipelineStage {
    /// Every stage, in pipeline order
    pub const ALL: [PipelineStage; 21] = [
        PipelineStage::SceneMode2D,
        PipelineStage::Geometry,
        PipelineStage::VerticalExaggeration,
        PipelineStage::Wireframe,
        PipelineStage::Classification,
        PipelineStage::MorphTargets,
        PipelineStage::Skinning,
        PipelineStage::PointCloudStyling,
        PipelineStage::Dequantization,
        PipelineStage::Material,
        PipelineStage::FeatureId,
        PipelineStage::Metadata,
        PipelineStage::SelectedFeatureId,
        PipelineStage::BatchTexture,
        PipelineStage::CpuStyling,
        PipelineStage::CustomShader,
        PipelineStage::Lighting,
        PipelineStage::Picking,
        PipelineStage::PrimitiveOutline,
        PipelineStage::Alpha,
        PipelineStage::PrimitiveStatistics,
    ];

    /// Stages present in every pipeline regardless of configuration
    pub const ALWAYS: [PipelineStage; 6] = [
        PipelineStage::Geometry,
        PipelineStage::FeatureId,
        PipelineStage::Metadata,
        PipelineStage::Lighting,
        PipelineStage::Alpha,
        PipelineStage::PrimitiveStatistics,
    ];

    /// Stable lowercase snake_case name
    pub fn name(self) -> &'static str {
        match self {
            PipelineStage::SceneMode2D => "scene_mode_2d",
            PipelineStage::Geometry => "geometry",
            PipelineStage::VerticalExaggeration => "vertical_exaggeration",
            PipelineStage::Wireframe => "wireframe",
            PipelineStage::Classification => "classification",
            PipelineStage::MorphTargets => "morph_targets",
            PipelineStage::Skinning => "skinning",
            PipelineStage::PointCloudStyling => "point_cloud_styling",
            PipelineStage::Dequantization => "dequantization",
            PipelineStage::Material => "material",
            PipelineStage::FeatureId => "feature_id",
            PipelineStage::Metadata => "metadata",
            PipelineStage::SelectedFeatureId => "selected_feature_id",
            PipelineStage::BatchTexture => "batch_texture",
            PipelineStage::CpuStyling => "cpu_styling",
            PipelineStage::CustomShader => "custom_shader",
            PipelineStage::Lighting => "lighting",
            PipelineStage::Picking => "picking",
            PipelineStage::PrimitiveOutline => "primitive_outline",
            PipelineStage::Alpha => "alpha",
            PipelineStage::PrimitiveStatistics => "primitive_statistics",
        }
    }

    pub fn is_always_present(self) -> bool {
        Self::ALWAYS.contains(&self)
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
