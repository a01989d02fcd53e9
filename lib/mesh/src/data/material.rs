/// A metallic-roughness material.
///
/// Factors which a document leaves unspecified are zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub name: String,
    /// Linear RGBA
    pub base_color_factor: [f64; 4],
    pub metallic_factor: f64,
    pub roughness_factor: f64,
}
