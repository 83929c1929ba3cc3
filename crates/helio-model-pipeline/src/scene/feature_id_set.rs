//! Feature ID declarations attached to primitives and node instances

/// Where the feature IDs of a set come from
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureIdKind {
    /// Per-vertex `_FEATURE_ID_n` attribute
    Attribute { set_index: u32 },
    /// Channels of a feature ID texture
    Texture { texture_index: u32, channels: Vec<u8> },
    /// IDs derived from the vertex / instance index
    Implicit { offset: u32, repeat: Option<u32> },
}

/// One set of feature IDs as declared by the asset
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureIdSet {
    pub kind: FeatureIdKind,
    pub feature_count: u32,
    pub null_feature_id: Option<u32>,
    /// Optional user-facing label from the asset
    pub label: Option<String>,
    /// `featureId_N` or `instanceFeatureId_N`, assigned in declaration order
    pub positional_label: String,
    /// Property table the IDs index into, if any
    pub property_table_id: Option<u32>,
}

impl FeatureIdSet {
    pub fn new(kind: FeatureIdKind, feature_count: u32, positional_label: impl Into<String>) -> Self {
        Self {
            kind,
            feature_count,
            null_feature_id: None,
            label: None,
            positional_label: positional_label.into(),
            property_table_id: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_property_table(mut self, property_table_id: u32) -> Self {
        self.property_table_id = Some(property_table_id);
        self
    }

    pub fn with_null_feature_id(mut self, null_feature_id: u32) -> Self {
        self.null_feature_id = Some(null_feature_id);
        self
    }

    /// Whether this set answers to `label`, either positionally or by its user label
    pub fn matches_label(&self, label: &str) -> bool {
        self.positional_label == label || self.label.as_deref() == Some(label)
    }
}
