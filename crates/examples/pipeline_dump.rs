//! Prints the pipeline selected for a few representative primitives
//!
//! Builds a small model (a quantized building mesh with a property table, an
//! instanced tree and a styled point cloud), then walks it through 3D,
//! Columbus view and a custom shader swap, running every pipeline through a
//! stage table that just records the stage names.
//!
//! Run with `RUST_LOG=debug` to see every reconfiguration.

use glam::Vec3;
use helio_model_pipeline::scene::{
    ComponentType, FeatureIdKind, FeatureIdSet, Instances, NodeDescription, PrimitiveDescription,
    PrimitiveTopology, Quantization, QuantizedEncoding, VertexAttribute, VertexSemantic,
};
use helio_model_pipeline::{
    CustomShader, CustomShaderMode, FrameState, ModelConfig, PipelineStage, Result, RuntimeModel,
    RuntimePrimitive, SceneMode, StageTable, StyleHandle,
};
use std::sync::Arc;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut model = RuntimeModel::new(
        ModelConfig::builder()
            .project_to_2d(true)
            .style(StyleHandle(0))
            .build(),
    );
    build_scene(&mut model);

    let table = recording_table();

    dump(&mut model, &table, "3D", &FrameState::default());
    dump(&mut model, &table, "Columbus view", &FrameState::new(SceneMode::ColumbusView));

    model.update_config(|config| {
        config.custom_shader = Some(
            CustomShader::new(CustomShaderMode::ReplaceMaterial)
                .with_fragment_shader("material.diffuse = vec3(1.0, 0.0, 0.0);"),
        );
    });
    dump(&mut model, &table, "3D + custom shader", &FrameState::default());
}

fn build_scene(model: &mut RuntimeModel) {
    let position = VertexAttribute::new(VertexSemantic::Position, 1024)
        .with_bounds(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 120.0, 50.0));
    let normal = VertexAttribute::new(VertexSemantic::Normal, 1024).quantized(Quantization {
        component_type: ComponentType::U8,
        encoding: QuantizedEncoding::OctahedralNormal,
    });

    let buildings = PrimitiveDescription::new(PrimitiveTopology::Triangles)
        .with_attribute(position.clone())
        .with_attribute(normal)
        .with_feature_ids(
            FeatureIdSet::new(FeatureIdKind::Attribute { set_index: 0 }, 64, "featureId_0")
                .with_label("buildings")
                .with_property_table(0),
        );
    model.add_primitive(Arc::new(NodeDescription::named("city")), Arc::new(buildings));

    let trees = NodeDescription::named("trees").with_instances(Instances {
        count: 500,
        feature_ids: vec![FeatureIdSet::new(
            FeatureIdKind::Implicit {
                offset: 0,
                repeat: None,
            },
            500,
            "instanceFeatureId_0",
        )],
    });
    model.add_primitive(
        Arc::new(trees),
        Arc::new(PrimitiveDescription::new(PrimitiveTopology::Triangles).with_attribute(position.clone())),
    );

    model.add_primitive(
        Arc::new(NodeDescription::named("scan")),
        Arc::new(PrimitiveDescription::new(PrimitiveTopology::Points).with_attribute(position)),
    );
}

fn recording_table() -> StageTable<Vec<&'static str>> {
    let mut table = StageTable::new();
    for stage in PipelineStage::ALL {
        table.register(
            stage,
            move |ctx: &mut Vec<&'static str>, _: &RuntimePrimitive, _: &FrameState| -> Result<()> {
                ctx.push(stage.name());
                Ok(())
            },
        );
    }
    table
}

fn dump(
    model: &mut RuntimeModel,
    table: &StageTable<Vec<&'static str>>,
    label: &str,
    frame_state: &FrameState,
) {
    model.update(frame_state);
    println!("=== {} ===", label);

    for (index, primitive) in model.primitives().iter().enumerate() {
        let mut stages = Vec::new();
        match table.run(&mut stages, primitive, frame_state) {
            Ok(()) => println!(
                "  [{}] {:<8} {}",
                index,
                primitive.node().name.as_deref().unwrap_or("<unnamed>"),
                stages.join(" -> ")
            ),
            Err(err) => log::error!("Primitive {} failed: {}", index, err),
        }
    }
    println!();
}
