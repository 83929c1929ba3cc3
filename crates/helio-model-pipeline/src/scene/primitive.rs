//! Primitive description: topology, vertex attributes and their encodings

use super::FeatureIdSet;
use glam::Vec3;

/// Primitive assembly topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveTopology {
    /// True for every triangle-based topology
    pub fn is_triangles(self) -> bool {
        matches!(
            self,
            PrimitiveTopology::Triangles
                | PrimitiveTopology::TriangleStrip
                | PrimitiveTopology::TriangleFan
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VertexSemantic {
    Position,
    Normal,
    Tangent,
    TexCoord(u32),
    Color(u32),
    Joints(u32),
    Weights(u32),
    FeatureId(u32),
    Custom(String),
}

/// Storage type of a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    I8,
    U8,
    I16,
    U16,
    U32,
    F32,
}

/// How a quantized attribute is packed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantizedEncoding {
    /// Normalized integers (`KHR_mesh_quantization`)
    Normalized,
    /// Oct-encoded unit vectors
    OctahedralNormal,
    /// Integers scaled by `step` and shifted by `offset` (Draco / WEB3D)
    Offset { offset: Vec3, step: Vec3 },
}

/// Decode information for a packed attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantization {
    pub component_type: ComponentType,
    pub encoding: QuantizedEncoding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VertexAttribute {
    pub semantic: VertexSemantic,
    pub count: u32,
    pub quantization: Option<Quantization>,
    pub min: Option<Vec3>,
    pub max: Option<Vec3>,
}

impl VertexAttribute {
    pub fn new(semantic: VertexSemantic, count: u32) -> Self {
        Self {
            semantic,
            count,
            quantization: None,
            min: None,
            max: None,
        }
    }

    pub fn with_bounds(mut self, min: Vec3, max: Vec3) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn quantized(mut self, quantization: Quantization) -> Self {
        self.quantization = Some(quantization);
        self
    }

    pub fn is_quantized(&self) -> bool {
        self.quantization.is_some()
    }
}

/// Displacements blended onto the base attributes by morph weights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MorphTarget {
    pub attributes: Vec<VertexAttribute>,
}

/// A drawable primitive as produced by the loader
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveDescription {
    pub topology: PrimitiveTopology,
    pub attributes: Vec<VertexAttribute>,
    pub morph_targets: Vec<MorphTarget>,
    /// Feature ID sets labelled `featureId_N`
    pub feature_ids: Vec<FeatureIdSet>,
    /// Per-vertex coordinates for `CESIUM_primitive_outline` style edges
    pub outline_coordinates: Option<VertexAttribute>,
}

impl PrimitiveDescription {
    pub fn new(topology: PrimitiveTopology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_morph_target(mut self, target: MorphTarget) -> Self {
        self.morph_targets.push(target);
        self
    }

    pub fn with_feature_ids(mut self, feature_ids: FeatureIdSet) -> Self {
        self.feature_ids.push(feature_ids);
        self
    }

    pub fn with_outline_coordinates(mut self, coordinates: VertexAttribute) -> Self {
        self.outline_coordinates = Some(coordinates);
        self
    }

    pub fn attribute(&self, semantic: &VertexSemantic) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| &a.semantic == semantic)
    }

    pub fn has_quantized_attributes(&self) -> bool {
        self.attributes.iter().any(VertexAttribute::is_quantized)
    }
}
