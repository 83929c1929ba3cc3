//! Stage ordering
//!
//! The order below is fixed. Dequantization precedes material evaluation,
//! the feature ID and metadata stages always run so later stages can rely
//! on their declarations, the property table stages come as a triple, and
//! lighting follows both material and custom shader.

use super::{PipelineStage, PrimitiveFeatures};

/// Clear `stages` and append the stages selected by `flags`, in order
pub fn build_stages(flags: PrimitiveFeatures, stages: &mut Vec<PipelineStage>) {
    stages.clear();

    let mut push_if = |condition: bool, stage: PipelineStage| {
        if condition {
            stages.push(stage);
        }
    };

    push_if(flags.contains(PrimitiveFeatures::USE_2D), PipelineStage::SceneMode2D);
    push_if(true, PipelineStage::Geometry);
    push_if(
        flags.contains(PrimitiveFeatures::EXAGGERATE_TERRAIN),
        PipelineStage::VerticalExaggeration,
    );
    push_if(
        flags.contains(PrimitiveFeatures::WIREFRAME_INDICES),
        PipelineStage::Wireframe,
    );
    push_if(
        flags.contains(PrimitiveFeatures::CLASSIFICATION),
        PipelineStage::Classification,
    );
    push_if(
        flags.contains(PrimitiveFeatures::MORPH_TARGETS),
        PipelineStage::MorphTargets,
    );
    push_if(flags.contains(PrimitiveFeatures::SKINNING), PipelineStage::Skinning);
    push_if(
        flags.contains(PrimitiveFeatures::POINT_CLOUD_STYLE),
        PipelineStage::PointCloudStyling,
    );
    push_if(
        flags.contains(PrimitiveFeatures::QUANTIZATION),
        PipelineStage::Dequantization,
    );
    push_if(flags.contains(PrimitiveFeatures::MATERIALS), PipelineStage::Material);

    push_if(true, PipelineStage::FeatureId);
    push_if(true, PipelineStage::Metadata);

    let has_property_table = flags.contains(PrimitiveFeatures::PROPERTY_TABLE);
    push_if(has_property_table, PipelineStage::SelectedFeatureId);
    push_if(has_property_table, PipelineStage::BatchTexture);
    push_if(has_property_table, PipelineStage::CpuStyling);

    push_if(
        flags.contains(PrimitiveFeatures::CUSTOM_SHADER),
        PipelineStage::CustomShader,
    );
    push_if(true, PipelineStage::Lighting);
    push_if(flags.contains(PrimitiveFeatures::PICKING), PipelineStage::Picking);
    push_if(
        flags.contains(PrimitiveFeatures::OUTLINES),
        PipelineStage::PrimitiveOutline,
    );
    push_if(true, PipelineStage::Alpha);
    push_if(true, PipelineStage::PrimitiveStatistics);
}
