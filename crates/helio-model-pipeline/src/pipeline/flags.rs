//! Feature flags derived for one primitive
//!
//! Derivation is a pure read of the model configuration, node, primitive
//! and frame state. The resulting flag set alone determines the stage list.

use crate::feature_ids::inspect_feature_ids;
use crate::frame_state::{BackendTier, FrameState};
use crate::model::ModelConfig;
use crate::scene::{NodeDescription, PrimitiveDescription, PrimitiveTopology};
use bitflags::bitflags;

bitflags! {
    /// Per-primitive feature flags selecting optional pipeline stages
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PrimitiveFeatures: u32 {
        const USE_2D = 1 << 0;
        const EXAGGERATE_TERRAIN = 1 << 1;
        const WIREFRAME_INDICES = 1 << 2;
        const MORPH_TARGETS = 1 << 3;
        const SKINNING = 1 << 4;
        const POINT_CLOUD_STYLE = 1 << 5;
        const QUANTIZATION = 1 << 6;
        const MATERIALS = 1 << 7;
        const FEATURE_IDS = 1 << 8;
        const PROPERTY_TABLE = 1 << 9;
        const CUSTOM_SHADER = 1 << 10;
        const PICKING = 1 << 11;
        const OUTLINES = 1 << 12;
        const CLASSIFICATION = 1 << 13;
    }
}

impl PrimitiveFeatures {
    pub fn derive(
        config: &ModelConfig,
        node: &NodeDescription,
        primitive: &PrimitiveDescription,
        frame_state: &FrameState,
    ) -> Self {
        let mut flags = PrimitiveFeatures::empty();

        let use_2d = frame_state.wants_2d_projection() && config.project_to_2d;
        flags.set(PrimitiveFeatures::USE_2D, use_2d);
        flags.set(
            PrimitiveFeatures::EXAGGERATE_TERRAIN,
            frame_state.exaggerates_terrain(),
        );

        // Downlevel backends can only draw wireframes if the index resources
        // were reserved at model creation.
        let generate_wireframe_indices = config.debug_wireframe
            && primitive.topology.is_triangles()
            && (frame_state.backend == BackendTier::Full || config.enable_debug_wireframe);
        flags.set(PrimitiveFeatures::WIREFRAME_INDICES, generate_wireframe_indices);

        flags.set(
            PrimitiveFeatures::MORPH_TARGETS,
            !primitive.morph_targets.is_empty(),
        );
        flags.set(PrimitiveFeatures::SKINNING, node.skin.is_some());

        let shading = config.point_cloud_shading.as_ref();
        let has_attenuation = shading.is_some_and(|s| s.attenuation);
        let has_back_face_culling = shading.is_some_and(|s| s.back_face_culling);
        let has_point_cloud_style = primitive.topology == PrimitiveTopology::Points
            && (config.style.is_some() || has_attenuation || has_back_face_culling);
        flags.set(PrimitiveFeatures::POINT_CLOUD_STYLE, has_point_cloud_style);

        flags.set(
            PrimitiveFeatures::QUANTIZATION,
            primitive.has_quantized_attributes(),
        );

        let replaces_material = config
            .custom_shader
            .as_ref()
            .is_some_and(|shader| shader.replaces_material());
        flags.set(PrimitiveFeatures::MATERIALS, !replaces_material);

        let report = inspect_feature_ids(config, node, primitive);
        flags.set(PrimitiveFeatures::FEATURE_IDS, report.has_feature_ids);
        flags.set(PrimitiveFeatures::PROPERTY_TABLE, report.has_property_table);

        flags.set(PrimitiveFeatures::CUSTOM_SHADER, config.custom_shader.is_some());
        flags.set(PrimitiveFeatures::PICKING, config.allow_picking);
        flags.set(
            PrimitiveFeatures::OUTLINES,
            config.enable_show_outline && primitive.outline_coordinates.is_some(),
        );
        flags.set(
            PrimitiveFeatures::CLASSIFICATION,
            config.classification_type.is_some(),
        );

        flags
    }
}
