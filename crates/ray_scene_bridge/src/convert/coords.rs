//! Fixed change of basis between editor space and tracer space
//!
//! The editor is Z-up, the tracer is Y-up. The mapping rotates around X so
//! the editor's Z (up) becomes the tracer's Y (up) while preserving a
//! right-handed basis: `(x, y, z) -> (x, z, -y)`. Simply swapping Y and Z
//! would flip handedness and with it every surface normal.
//!
//! This module is the single home of that constant; no other component
//! restates it.

use crate::foundation::math::{Mat4, Vec3};

/// Map an editor-space point into tracer space
pub fn to_renderer(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, -v.y)
}

/// Map a tracer-space point back into editor space
///
/// Exact inverse of [`to_renderer`]: `(x, y, z) -> (x, -z, y)`.
pub fn to_editor(v: Vec3) -> Vec3 {
    Vec3::new(v.x, -v.z, v.y)
}

/// Map an editor-space direction or normal into tracer space
///
/// The basis change has no translational component, so directions map the
/// same way points do; the separate name keeps call sites honest about
/// which kind of quantity they convert.
pub fn to_renderer_dir(v: Vec3) -> Vec3 {
    to_renderer(v)
}

/// Map a tracer-space direction or normal back into editor space
pub fn to_editor_dir(v: Vec3) -> Vec3 {
    to_editor(v)
}

/// Homogeneous form of the editor-to-tracer basis change
///
/// Applied as `M_tracer = C * M_editor`.
pub fn renderer_from_editor() -> Mat4 {
    Mat4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, -1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Homogeneous form of the tracer-to-editor basis change
///
/// The basis change is orthogonal, so this is just the transpose of
/// [`renderer_from_editor`].
pub fn editor_from_renderer() -> Mat4 {
    renderer_from_editor().transpose()
}

/// Pre-compose an editor-space affine transform with the basis change
pub fn map_transform(world: &Mat4) -> Mat4 {
    renderer_from_editor() * world
}

/// Undo [`map_transform`] on a tracer-space affine transform
pub fn unmap_transform(world: &Mat4) -> Mat4 {
    editor_from_renderer() * world
}
