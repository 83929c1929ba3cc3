//! Scene graph node description

use super::FeatureIdSet;

/// Opaque reference to a skin owned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkinHandle(pub u32);

/// GPU instancing data attached to a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instances {
    pub count: u32,
    /// Per-instance feature IDs, labelled `instanceFeatureId_N`
    pub feature_ids: Vec<FeatureIdSet>,
}

/// A node that owns one or more primitives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDescription {
    pub name: Option<String>,
    pub skin: Option<SkinHandle>,
    pub instances: Option<Instances>,
}

impl NodeDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_skin(mut self, skin: SkinHandle) -> Self {
        self.skin = Some(skin);
        self
    }

    pub fn with_instances(mut self, instances: Instances) -> Self {
        self.instances = Some(instances);
        self
    }
}
