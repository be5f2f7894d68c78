use glam::Vec3;

/// Component-wise reciprocal of the mesh owner's world (lossy) scale.
///
/// Skinned evaluation happens in a space that includes the renderer's world
/// scale. Baking that scale into the texture would tie the asset to one
/// instance scale, so positions are divided by it once per bake. Normals
/// and tangents are deliberately left unscaled for compatibility with the
/// established texture contract; under non-uniform scale their directions
/// are therefore approximate (known limitation).
///
/// A zero scale component makes the reciprocal undefined. That is a caller
/// precondition (a zero-scaled renderer bakes no meaningful geometry
/// anyway), not something this type guards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseScale(Vec3);

impl InverseScale {
    /// Builds the inverse from a world-space scale vector.
    #[must_use]
    pub fn from_world_scale(scale: Vec3) -> Self {
        Self(scale.recip())
    }

    /// Removes the scale from a deformed position, axis by axis.
    #[inline]
    #[must_use]
    pub fn apply(&self, position: Vec3) -> Vec3 {
        position * self.0
    }
}
