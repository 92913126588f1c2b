//! Tracer primitives back to editor transforms
//!
//! Plane reconstruction rebuilds a whole affine matrix from the stored
//! point and edge vectors and hands it back verbatim; that reproduces any
//! non-uniform scale or shear the encoder captured. Lights go through the
//! same matrix but come out decomposed, because the editor's light objects
//! only accept translation + rotation + per-axis scale.

use crate::codec::ImportError;
use crate::convert::coords;
use crate::document::{vec3, LightDoc, MaterialDoc, ObjectDoc};
use crate::foundation::math::{Mat4, Quat, Transform, Vec3};
use crate::scene::{ImportedLight, ImportedObject, ImportedShape, Material};
use std::collections::BTreeMap;

/// Reconstruct one editor object from a tracer primitive
///
/// A material reference missing from the table is non-fatal: the object is
/// imported without a material and a warning is logged.
pub fn decode_object(
    doc: &ObjectDoc,
    materials: &BTreeMap<String, MaterialDoc>,
) -> Result<ImportedObject, ImportError> {
    match doc {
        ObjectDoc::Sphere(sphere) => Ok(ImportedObject {
            name: sphere.name.clone(),
            shape: ImportedShape::Sphere {
                center: coords::to_editor(vec3(sphere.center)),
                radius: sphere.radius,
            },
            material: resolve_material(&sphere.mat, materials, &sphere.name),
        }),
        ObjectDoc::Plane(plane) => {
            let u = vec3(plane.u);
            let v = vec3(plane.v);
            let normal = u.cross(&v);
            if normal.norm_squared() < f64::EPSILON {
                return Err(ImportError::DegeneratePlane {
                    name: plane.name.clone(),
                });
            }

            let tracer_world = basis_matrix(vec3(plane.point), u, v, normal.normalize());
            Ok(ImportedObject {
                name: plane.name.clone(),
                shape: ImportedShape::Plane {
                    world: coords::unmap_transform(&tracer_world),
                },
                material: resolve_material(&plane.mat, materials, &plane.name),
            })
        }
    }
}

/// Reconstruct one editor area light
///
/// Undoes the encoder's `u` negation, maps the rebuilt matrix back to
/// editor space, and decomposes it. The half-extent convention means the
/// editor sizes are twice the decomposed scale.
pub fn decode_light(doc: &LightDoc) -> ImportedLight {
    let u = -vec3(doc.u);
    let v = vec3(doc.v);
    let normal = u.cross(&v);

    // A light with collapsed edges still imports; it keeps its position and
    // power but has no usable orientation or extent
    if normal.norm_squared() < f64::EPSILON {
        return ImportedLight {
            location: coords::to_editor(vec3(doc.pos)),
            rotation: Quat::identity(),
            size_x: u.norm() * 2.0,
            size_y: v.norm() * 2.0,
            power: doc.intensity[0],
        };
    }

    let tracer_world = basis_matrix(vec3(doc.pos), u, v, normal.normalize());
    let trs = Transform::from_matrix(coords::unmap_transform(&tracer_world));

    ImportedLight {
        location: trs.position,
        rotation: trs.rotation,
        size_x: trs.scale.x * 2.0,
        size_y: trs.scale.y * 2.0,
        power: doc.intensity[0],
    }
}

/// Affine matrix with columns `(u, v, normal, point)`
fn basis_matrix(point: Vec3, u: Vec3, v: Vec3, normal: Vec3) -> Mat4 {
    Mat4::new(
        u.x, v.x, normal.x, point.x, //
        u.y, v.y, normal.y, point.y, //
        u.z, v.z, normal.z, point.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

fn resolve_material(
    key: &str,
    materials: &BTreeMap<String, MaterialDoc>,
    object: &str,
) -> Option<Material> {
    match materials.get(key) {
        Some(doc) => Some(Material {
            name: key.to_string(),
            rgb: vec3(doc.rgb),
            metallic: doc.metallic,
            roughness: doc.roughness,
            ior: doc.ior,
            volume_density: doc.volume_density,
            volume_anisotropy: doc.volume_anisotropy,
        }),
        None => {
            log::warn!(
                "object '{}' references material '{}' missing from the table; importing without one",
                object,
                key
            );
            None
        }
    }
}
