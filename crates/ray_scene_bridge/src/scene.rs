//! Value structs exchanged with the host editor
//!
//! The editor integration is glue owned by the host application; everything
//! it feeds the bridge (snapshots) and everything it gets back (imported
//! values) is a plain, self-contained struct defined here. Nothing in this
//! module touches editor state.

use crate::document::RenderSettings;
use crate::foundation::math::{Mat4, Quat, Vec3};

/// Which tracer primitive an editor object maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Exported as center + radius
    Sphere,
    /// Exported as center point + two half-extent edge vectors
    Plane,
}

/// Surface and volume parameters of one material
///
/// Identity is the name: the document's material table is keyed by it and
/// objects reference materials by name only.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name, unique within one document
    pub name: String,

    /// Base color, each channel in `[0, 1]`
    pub rgb: Vec3,

    /// Metallic factor
    pub metallic: f64,

    /// Surface roughness
    pub roughness: f64,

    /// Index of refraction
    pub ior: f64,

    /// Participating-medium density, `>= 0`
    pub volume_density: f64,

    /// Scattering anisotropy in `[-1, 1]`
    pub volume_anisotropy: f64,
}

/// One editor object as handed over for export
#[derive(Debug, Clone)]
pub struct ObjectSnapshot {
    /// Object name, reused for the primitive and its material key
    pub name: String,

    /// Primitive kind this object exports as
    pub kind: ShapeKind,

    /// Full world affine transform (editor space, Z-up)
    pub world: Mat4,

    /// Bounding size of the base mesh along its local axes
    ///
    /// For the canonical editor primitives this is `(2, 2, 0)` for a plane
    /// and the diameter for a sphere; scale and shear live in `world`.
    pub dimensions: Vec3,

    /// Material assigned in the editor
    pub material: Material,
}

/// One editor area light as handed over for export
#[derive(Debug, Clone)]
pub struct LightSnapshot {
    /// Full world affine transform (editor space, Z-up)
    pub world: Mat4,

    /// Rectangle width
    pub size_x: f64,

    /// Rectangle height
    pub size_y: f64,

    /// Scalar emission power, broadcast to RGB on export
    pub power: f64,
}

/// Active camera as handed over for export
#[derive(Debug, Clone)]
pub struct CameraSnapshot {
    /// Camera position (editor space)
    pub position: Vec3,

    /// World-space viewing direction
    pub forward: Vec3,

    /// World-space up vector of the camera
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f64,
}

/// Complete scene snapshot consumed by one export call
#[derive(Debug, Clone, Default)]
pub struct SceneSnapshot {
    /// Active camera, if any; export fails without one
    pub camera: Option<CameraSnapshot>,

    /// Lens aperture for the exported camera
    pub aperture: f64,

    /// Render output settings
    pub render: RenderSettings,

    /// Objects to export
    pub objects: Vec<ObjectSnapshot>,

    /// Area lights to export
    pub lights: Vec<LightSnapshot>,
}

/// Reconstructed geometry of one imported object
///
/// Planes come back as a whole matrix on purpose: the matrix reproduces any
/// non-uniform scale or shear the exporter captured, which a decomposed
/// loc/rot/scale could not. Spheres only ever need a point and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImportedShape {
    /// Sphere at an editor-space center
    Sphere {
        /// Center in editor space
        center: Vec3,
        /// Radius, copied through unchanged
        radius: f64,
    },
    /// Rectangle with a full editor-space world transform
    Plane {
        /// World affine transform to assign verbatim
        world: Mat4,
    },
}

/// One object reconstructed on import
#[derive(Debug, Clone)]
pub struct ImportedObject {
    /// Object name from the document
    pub name: String,

    /// Reconstructed geometry
    pub shape: ImportedShape,

    /// Resolved material, or `None` when the document's reference was
    /// missing from the material table
    pub material: Option<Material>,
}

/// One area light reconstructed on import
///
/// Lights in the editor only take translation + rotation + per-axis scale,
/// so the reconstructed matrix arrives pre-decomposed here.
#[derive(Debug, Clone)]
pub struct ImportedLight {
    /// Light position in editor space
    pub location: Vec3,

    /// Light orientation
    pub rotation: Quat,

    /// Rectangle width
    pub size_x: f64,

    /// Rectangle height
    pub size_y: f64,

    /// Scalar emission power (first intensity channel)
    pub power: f64,
}

/// Camera reconstructed on import
#[derive(Debug, Clone)]
pub struct ImportedCamera {
    /// Camera position in editor space
    pub position: Vec3,

    /// Orientation rebuilt from the look-at description
    pub rotation: Quat,

    /// Vertical field of view in radians
    pub fov: f64,

    /// Lens aperture from the document
    pub aperture: f64,
}

/// Everything one import call hands back to the editor glue
#[derive(Debug, Clone)]
pub struct ImportedScene {
    /// Reconstructed camera
    pub camera: ImportedCamera,

    /// Render settings with defaults applied
    pub render: RenderSettings,

    /// Reconstructed objects
    pub objects: Vec<ImportedObject>,

    /// Reconstructed area lights
    pub lights: Vec<ImportedLight>,
}
