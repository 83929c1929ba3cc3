//! Model-level reconfiguration and stage dispatch

use glam::Vec3;
use helio_model_pipeline::scene::{
    FeatureIdKind, FeatureIdSet, NodeDescription, PrimitiveDescription, PrimitiveTopology,
    VertexAttribute, VertexSemantic,
};
use helio_model_pipeline::{
    BackendTier, CustomShader, CustomShaderMode, Error, FrameState, ModelConfig, PipelineStage,
    Result, RuntimeModel, RuntimePrimitive, SceneMode, StageTable,
};
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Stand-in for the shading context the real stages augment
#[derive(Default)]
struct ShaderBuilder {
    defines: Vec<&'static str>,
}

fn define(ctx: &mut ShaderBuilder, stage: PipelineStage) {
    ctx.defines.push(stage.name());
}

fn full_table() -> StageTable<ShaderBuilder> {
    let mut table = StageTable::new();
    for stage in PipelineStage::ALL {
        table.register(
            stage,
            move |ctx: &mut ShaderBuilder, _: &RuntimePrimitive, _: &FrameState| -> Result<()> {
                define(ctx, stage);
                Ok(())
            },
        );
    }
    table
}

fn city_model() -> RuntimeModel {
    let mut model = RuntimeModel::new(ModelConfig::builder().project_to_2d(true).build());
    let node = Arc::new(NodeDescription::named("city"));

    model.add_primitive(
        node.clone(),
        Arc::new(
            PrimitiveDescription::new(PrimitiveTopology::Triangles)
                .with_attribute(VertexAttribute::new(VertexSemantic::Position, 3))
                .with_feature_ids(
                    FeatureIdSet::new(FeatureIdKind::Attribute { set_index: 0 }, 40, "featureId_0")
                        .with_property_table(0),
                ),
        ),
    );
    model.add_primitive(
        node,
        Arc::new(PrimitiveDescription::new(PrimitiveTopology::Points)),
    );
    model
}

#[test]
fn scene_mode_change_rebuilds_all_pipelines() {
    init_logging();
    let mut model = city_model();

    assert!(model.update(&FrameState::default()));
    assert!(model
        .primitives()
        .iter()
        .all(|p| p.pipeline_stages()[0] == PipelineStage::Geometry));

    assert!(model.update(&FrameState::new(SceneMode::ColumbusView)));
    assert!(model
        .primitives()
        .iter()
        .all(|p| p.pipeline_stages()[0] == PipelineStage::SceneMode2D));

    assert!(!model.update(&FrameState::new(SceneMode::ColumbusView)));
}

#[test]
fn custom_shader_toggle_swaps_material() {
    init_logging();
    let mut model = city_model();
    let frame = FrameState::default();
    model.update(&frame);

    model.update_config(|config| {
        config.custom_shader = Some(
            CustomShader::new(CustomShaderMode::ReplaceMaterial).with_fragment_shader("..."),
        );
    });
    assert!(model.update(&frame));
    for primitive in model.primitives() {
        assert!(!primitive.pipeline_stages().contains(&PipelineStage::Material));
        assert!(primitive.pipeline_stages().contains(&PipelineStage::CustomShader));
    }

    model.update_config(|config| config.custom_shader = None);
    assert!(model.update(&frame));
    for primitive in model.primitives() {
        assert!(primitive.pipeline_stages().contains(&PipelineStage::Material));
    }
}

#[test]
fn wireframe_on_downlevel_backend_needs_preallocation() {
    init_logging();
    let downlevel = FrameState::default().with_backend(BackendTier::Downlevel);

    let mut model = city_model();
    model.update_config(|config| config.debug_wireframe = true);
    model.update(&downlevel);
    assert!(!model.primitive(0).unwrap().pipeline_stages().contains(&PipelineStage::Wireframe));

    model.update_config(|config| config.enable_debug_wireframe = true);
    model.update(&downlevel);
    assert!(model.primitive(0).unwrap().pipeline_stages().contains(&PipelineStage::Wireframe));
    assert!(!model.primitive(1).unwrap().pipeline_stages().contains(&PipelineStage::Wireframe));
}

#[test]
fn frame_state_changes_without_mode_change_rebuild_pipelines() {
    init_logging();
    let mut model = city_model();
    model.update_config(|config| config.debug_wireframe = true);

    let frame = FrameState::default();
    assert!(model.update(&frame));
    let stages = model.primitive(0).unwrap().pipeline_stages().to_vec();
    assert_eq!(&stages[..2], &[PipelineStage::Geometry, PipelineStage::Wireframe]);
    assert!(!stages.contains(&PipelineStage::VerticalExaggeration));

    let exaggerated = frame.with_vertical_exaggeration(2.0, 0.0);
    assert!(model.update(&exaggerated));
    assert_eq!(
        &model.primitive(0).unwrap().pipeline_stages()[..3],
        &[
            PipelineStage::Geometry,
            PipelineStage::VerticalExaggeration,
            PipelineStage::Wireframe,
        ]
    );

    let downlevel = frame.with_backend(BackendTier::Downlevel);
    assert!(model.update(&downlevel));
    let stages = model.primitive(0).unwrap().pipeline_stages();
    assert!(!stages.contains(&PipelineStage::Wireframe));
    assert!(!stages.contains(&PipelineStage::VerticalExaggeration));

    assert!(!model.update(&downlevel));
}

#[test]
fn scene_3d_only_drops_projection_without_mode_change() {
    init_logging();
    let mut model = city_model();
    let columbus = FrameState::new(SceneMode::ColumbusView);

    model.update(&columbus);
    assert_eq!(model.primitive(0).unwrap().pipeline_stages()[0], PipelineStage::SceneMode2D);

    assert!(model.update(&columbus.with_scene_3d_only(true)));
    assert_eq!(model.primitive(0).unwrap().pipeline_stages()[0], PipelineStage::Geometry);
}

#[test]
fn stage_table_runs_configured_pipeline() {
    init_logging();
    let mut model = city_model();
    let frame = FrameState::default();
    model.update(&frame);

    let table = full_table();
    let primitive = model.primitive(0).unwrap();
    let mut builder = ShaderBuilder::default();
    table.run(&mut builder, primitive, &frame).unwrap();

    let expected: Vec<_> = primitive.pipeline_stages().iter().map(|s| s.name()).collect();
    assert_eq!(builder.defines, expected);
    assert!(builder.defines.contains(&"batch_texture"));
}

#[test]
fn stage_table_reports_missing_executor() {
    let mut model = city_model();
    let frame = FrameState::default();
    model.update(&frame);

    let table: StageTable<ShaderBuilder> = StageTable::new();
    let mut builder = ShaderBuilder::default();
    let err = table.run(&mut builder, model.primitive(0).unwrap(), &frame).unwrap_err();
    assert!(matches!(err, Error::MissingStage(PipelineStage::Geometry)));
    assert!(builder.defines.is_empty());
}

#[test]
fn projected_positions_are_model_owned() {
    let mut model = city_model();
    let handle = model
        .set_positions_2d(0, vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0)])
        .unwrap();

    let primitive = model.primitive(0).unwrap();
    assert_eq!(primitive.positions_2d(), Some(handle));
    let bounds = primitive.bounding_sphere_2d().unwrap();
    assert_eq!(bounds.center, Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(bounds.radius, 2.0);
    assert_eq!(model.positions_2d(handle).unwrap().len(), 2);
    assert!(model.primitive(1).unwrap().positions_2d().is_none());
}
