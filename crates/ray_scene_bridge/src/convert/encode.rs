//! Editor objects to tracer primitives
//!
//! Planes and lights are encoded from three local points (center and the
//! two edge midpoints) pushed through the object's *full* world affine
//! transform pre-composed with the basis change. Using the full transform
//! rather than just its rotation is what carries non-uniform scale and
//! shear into the edge vectors; a rotation-only encoding would silently
//! discard both.

use crate::convert::coords;
use crate::document::{array, LightDoc, ObjectDoc, PlaneDoc, SphereDoc};
use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::scene::{LightSnapshot, ObjectSnapshot, ShapeKind};

/// Encode one editor object as a tracer primitive
///
/// `mat` is the material table key the caller registered for this object.
pub fn encode_object(object: &ObjectSnapshot, mat: String) -> ObjectDoc {
    match object.kind {
        ShapeKind::Sphere => ObjectDoc::Sphere(SphereDoc {
            name: object.name.clone(),
            mat,
            center: array(coords::to_renderer(translation(&object.world))),
            // Only the X dimension is read; a sphere with non-uniform scale
            // is not representable by the tracer's sphere primitive and
            // comes out uniform. Known lossy case.
            radius: object.dimensions.x * 0.5,
            in_focus: false,
        }),
        ShapeKind::Plane => {
            let (point, u, v) = edge_vectors(
                &object.world,
                object.dimensions.x * 0.5,
                object.dimensions.y * 0.5,
            );
            ObjectDoc::Plane(PlaneDoc {
                name: object.name.clone(),
                mat,
                point: array(point),
                u: array(u),
                v: array(v),
                in_focus: false,
            })
        }
    }
}

/// Encode one editor area light
///
/// `u` is negated relative to the plane encoding; the tracer expects the
/// rectangle's first edge flipped so its derived normal faces outward.
pub fn encode_light(light: &LightSnapshot) -> LightDoc {
    let (pos, u, v) = edge_vectors(&light.world, light.size_x * 0.5, light.size_y * 0.5);

    LightDoc {
        pos: array(pos),
        u: array(-u),
        v: array(v),
        intensity: [light.power; 3],
    }
}

/// The synthetic light emitted when a scene has none
///
/// Every exported document must be renderable; a lightless tracer scene
/// would come out black.
pub fn fallback_light() -> LightDoc {
    LightDoc {
        pos: [0.0, 5.0, 0.0],
        u: [2.0, 0.0, 0.0],
        v: [0.0, 0.0, 2.0],
        intensity: [25.0, 25.0, 25.0],
    }
}

/// Center point and half-extent edge vectors of a rectangle in tracer space
///
/// Transforms the local center `(0,0,0)` and the edge midpoints `(hw,0,0)`,
/// `(0,hh,0)` by `C * world` and differences them.
fn edge_vectors(world: &Mat4, hw: f64, hh: f64) -> (Vec3, Vec3, Vec3) {
    let to_tracer = coords::map_transform(world);

    let center = transform_point(&to_tracer, Vec3::zeros());
    let u = transform_point(&to_tracer, Vec3::new(hw, 0.0, 0.0)) - center;
    let v = transform_point(&to_tracer, Vec3::new(0.0, hh, 0.0)) - center;

    (center, u, v)
}

fn transform_point(matrix: &Mat4, p: Vec3) -> Vec3 {
    matrix.transform_point(&Point3::from(p)).coords
}

fn translation(world: &Mat4) -> Vec3 {
    Vec3::new(world.m14, world.m24, world.m34)
}
