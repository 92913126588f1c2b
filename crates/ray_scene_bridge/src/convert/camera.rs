//! Camera pose conversion
//!
//! The tracer describes its camera as "position + look-at point + up", not
//! as a stored rotation, so export flattens the editor camera into that
//! description and import re-derives an orientation quaternion from it.

use crate::convert::coords;
use crate::document::{array, vec3, CameraDoc};
use crate::foundation::math::{Mat3, Quat, Vec3};
use crate::foundation::math::utils::{deg_to_rad, rad_to_deg};
use crate::scene::{CameraSnapshot, ImportedCamera};

/// Cosine margin under which a direction counts as parallel to the up hint
const PARALLEL_EPSILON: f64 = 1e-5;

/// Flatten the editor camera into the tracer's look-at description
pub fn camera_to_renderer(camera: &CameraSnapshot, aperture: f64) -> CameraDoc {
    CameraDoc {
        pos: array(coords::to_renderer(camera.position)),
        look_at: array(coords::to_renderer(camera.position + camera.forward)),
        up: array(coords::to_renderer_dir(camera.up)),
        fov: rad_to_deg(camera.fov),
        aperture,
    }
}

/// Rebuild an editor-space camera pose from the tracer's description
pub fn camera_to_editor(doc: &CameraDoc) -> ImportedCamera {
    let position = coords::to_editor(vec3(doc.pos));
    let direction = coords::to_editor(vec3(doc.look_at)) - position;
    let up = coords::to_editor_dir(vec3(doc.up));

    ImportedCamera {
        position,
        rotation: look_at_quat(direction, up),
        fov: deg_to_rad(doc.fov),
        aperture: doc.aperture,
    }
}

/// Build an orientation from a viewing direction and an up hint
///
/// The quaternion maps local +X to "right", +Y to "true up" and +Z to the
/// viewing direction. When the direction is (nearly) parallel to the up
/// hint the cross product would collapse to a zero-length right axis, so a
/// fallback up is substituted: world X, or world Y when the direction
/// itself runs along world X.
pub fn look_at_quat(direction: Vec3, up: Vec3) -> Quat {
    if direction.norm_squared() < f64::EPSILON {
        // A zero direction carries no orientation at all
        return Quat::identity();
    }

    let forward = direction.normalize();
    let mut up = up.normalize();
    if forward.dot(&up).abs() > 1.0 - PARALLEL_EPSILON {
        up = if forward.dot(&Vec3::x()).abs() > 1.0 - PARALLEL_EPSILON {
            Vec3::y()
        } else {
            Vec3::x()
        };
    }

    let right = up.cross(&forward).normalize();
    let true_up = forward.cross(&right);

    Quat::from_matrix(&Mat3::from_columns(&[right, true_up, forward]))
}
