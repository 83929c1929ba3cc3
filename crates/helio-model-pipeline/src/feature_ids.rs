//! Feature ID inspection
//!
//! Decides whether a primitive is drawn with feature IDs and whether those
//! IDs index a property table. Instance feature IDs are checked first since
//! they classify individual instances of an instanced primitive.

use crate::model::{FeatureIdLabel, ModelConfig};
use crate::scene::{FeatureIdSet, NodeDescription, PrimitiveDescription};

/// Outcome of [`inspect_feature_ids`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureIdReport {
    pub has_feature_ids: bool,
    pub has_property_table: bool,
}

impl FeatureIdReport {
    fn resolved(feature_ids: &FeatureIdSet) -> Self {
        Self {
            has_feature_ids: true,
            has_property_table: feature_ids.property_table_id.is_some(),
        }
    }
}

/// Find the first set answering to `label`
pub fn find_feature_ids<'a>(
    feature_ids: &'a [FeatureIdSet],
    label: &FeatureIdLabel,
) -> Option<&'a FeatureIdSet> {
    feature_ids.iter().find(|set| set.matches_label(label.as_str()))
}

/// Resolve the feature IDs used to draw `primitive` under `node`
pub fn inspect_feature_ids(
    config: &ModelConfig,
    node: &NodeDescription,
    primitive: &PrimitiveDescription,
) -> FeatureIdReport {
    if let Some(instances) = &node.instances {
        if let Some(set) = find_feature_ids(&instances.feature_ids, &config.instance_feature_id_label)
        {
            return FeatureIdReport::resolved(set);
        }
    }

    find_feature_ids(&primitive.feature_ids, &config.feature_id_label)
        .map(FeatureIdReport::resolved)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{FeatureIdKind, Instances, PrimitiveTopology};

    fn attribute_ids(set_index: u32, label: &str) -> FeatureIdSet {
        FeatureIdSet::new(FeatureIdKind::Attribute { set_index }, 8, label)
    }

    fn instanced_node(feature_ids: Vec<FeatureIdSet>) -> NodeDescription {
        NodeDescription::new().with_instances(Instances {
            count: 4,
            feature_ids,
        })
    }

    #[test]
    fn test_no_feature_ids() {
        let report = inspect_feature_ids(
            &ModelConfig::default(),
            &NodeDescription::new(),
            &PrimitiveDescription::new(PrimitiveTopology::Triangles),
        );
        assert_eq!(report, FeatureIdReport::default());
    }

    #[test]
    fn test_primitive_feature_ids_without_table() {
        let primitive = PrimitiveDescription::new(PrimitiveTopology::Triangles)
            .with_feature_ids(attribute_ids(0, "featureId_0"));
        let report = inspect_feature_ids(&ModelConfig::default(), &NodeDescription::new(), &primitive);
        assert!(report.has_feature_ids);
        assert!(!report.has_property_table);
    }

    #[test]
    fn test_instance_ids_take_precedence() {
        let config = ModelConfig::default();
        let node = instanced_node(vec![attribute_ids(0, "instanceFeatureId_0")]);
        let primitive = PrimitiveDescription::new(PrimitiveTopology::Triangles)
            .with_feature_ids(attribute_ids(0, "featureId_0").with_property_table(0));

        let report = inspect_feature_ids(&config, &node, &primitive);
        assert!(report.has_feature_ids);
        assert!(!report.has_property_table);
    }

    #[test]
    fn test_unmatched_instance_label_falls_back_to_primitive() {
        let config = ModelConfig::builder()
            .instance_feature_id_label(FeatureIdLabel::instance(3))
            .build();
        let node = instanced_node(vec![attribute_ids(0, "instanceFeatureId_0").with_property_table(1)]);
        let primitive = PrimitiveDescription::new(PrimitiveTopology::Triangles)
            .with_feature_ids(attribute_ids(0, "featureId_0").with_property_table(0));

        let report = inspect_feature_ids(&config, &node, &primitive);
        assert!(report.has_feature_ids);
        assert!(report.has_property_table);
    }

    #[test]
    fn test_user_label_matches() {
        let config = ModelConfig::builder().feature_id_label("buildings").build();
        let primitive = PrimitiveDescription::new(PrimitiveTopology::Triangles)
            .with_feature_ids(attribute_ids(0, "featureId_0"))
            .with_feature_ids(
                FeatureIdSet::new(
                    FeatureIdKind::Texture {
                        texture_index: 0,
                        channels: vec![0],
                    },
                    12,
                    "featureId_1",
                )
                .with_label("buildings")
                .with_property_table(2),
            );

        let report = inspect_feature_ids(&config, &NodeDescription::new(), &primitive);
        assert!(report.has_property_table);
    }

    #[test]
    fn test_first_declared_match_wins() {
        let sets = vec![
            attribute_ids(0, "featureId_0").with_label("dup"),
            attribute_ids(1, "featureId_1").with_label("dup").with_property_table(0),
        ];
        let found = find_feature_ids(&sets, &FeatureIdLabel::new("dup")).unwrap();
        assert_eq!(found.positional_label, "featureId_0");
    }
}
