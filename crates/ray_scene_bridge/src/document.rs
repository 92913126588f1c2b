//! JSON schema of the tracer's scene description
//!
//! One document holds the whole flat scene: camera, render settings, a named
//! material table, the primitive list, and the area lights. Every optional
//! key carries the tracer's own default so a sparse document still parses;
//! the only hard failures are structurally invalid JSON and object entries
//! whose tag is neither `sphere` nor `plane`.

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default render width in pixels
pub const DEFAULT_WIDTH: u32 = 1280;
/// Default render height in pixels
pub const DEFAULT_HEIGHT: u32 = 720;
/// Default samples per pixel
pub const DEFAULT_SAMPLES: u32 = 128;
/// Default camera aperture
pub const DEFAULT_APERTURE: f64 = 0.01;
/// Default camera field of view in degrees
pub const DEFAULT_FOV_DEGREES: f64 = 60.0;

/// Root scene document
///
/// Top-level keys match the tracer's loader one for one. The material table
/// is a sorted map so repeated exports of the same scene are diffable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Camera pose and lens parameters
    #[serde(default)]
    pub camera: CameraDoc,

    /// Output resolution and sampling
    #[serde(default)]
    pub render: RenderSettings,

    /// Material table keyed by unique name
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDoc>,

    /// Renderable primitives
    #[serde(default)]
    pub objects: Vec<ObjectDoc>,

    /// Rectangular area lights
    #[serde(default)]
    pub lights: Vec<LightDoc>,
}

/// Camera description: position + look-at point + up vector
///
/// The tracer's camera contract is a look-at description, not a stored
/// rotation; orientation is re-derived on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraDoc {
    /// Camera position
    #[serde(default)]
    pub pos: [f64; 3],

    /// Point the camera looks at (`pos + forward`)
    #[serde(default = "default_look_at")]
    pub look_at: [f64; 3],

    /// Up vector (direction only, no translation)
    #[serde(default = "default_up")]
    pub up: [f64; 3],

    /// Field of view in degrees
    #[serde(default = "default_fov")]
    pub fov: f64,

    /// Lens aperture
    #[serde(default = "default_aperture")]
    pub aperture: f64,
}

impl Default for CameraDoc {
    fn default() -> Self {
        Self {
            pos: [0.0; 3],
            look_at: default_look_at(),
            up: default_up(),
            fov: default_fov(),
            aperture: default_aperture(),
        }
    }
}

/// Render output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Samples per pixel
    #[serde(default = "default_samples")]
    pub samples: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Material entry in the document's material table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDoc {
    /// Base color, each channel in `[0, 1]`
    #[serde(default = "default_rgb")]
    pub rgb: [f64; 3],

    /// Metallic factor
    #[serde(default)]
    pub metallic: f64,

    /// Surface roughness
    #[serde(default = "default_roughness")]
    pub roughness: f64,

    /// Index of refraction
    #[serde(default = "default_ior")]
    pub ior: f64,

    /// Participating-medium density, `>= 0`
    #[serde(default)]
    pub volume_density: f64,

    /// Scattering anisotropy in `[-1, 1]`
    #[serde(default)]
    pub volume_anisotropy: f64,
}

/// One renderable primitive
///
/// Encoded externally tagged, so each entry is `{"sphere": {...}}` or
/// `{"plane": {...}}` and an unknown tag is a parse error rather than a
/// silently skipped entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectDoc {
    /// Sphere primitive
    Sphere(SphereDoc),
    /// Finite rectangle primitive
    Plane(PlaneDoc),
}

/// Sphere: center point and radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereDoc {
    /// Object name
    #[serde(default)]
    pub name: String,

    /// Material table key
    #[serde(default)]
    pub mat: String,

    /// Center in tracer space
    pub center: [f64; 3],

    /// Radius
    pub radius: f64,

    /// Auto-focus hint understood by the tracer
    #[serde(default, skip_serializing_if = "omit_flag")]
    pub in_focus: bool,
}

/// Rectangle: center point plus two half-extent edge vectors
///
/// The normal is never stored; it is always derived as `u x v`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaneDoc {
    /// Object name
    #[serde(default)]
    pub name: String,

    /// Material table key
    #[serde(default)]
    pub mat: String,

    /// Rectangle center in tracer space
    pub point: [f64; 3],

    /// Half-extent edge vector along the first axis
    pub u: [f64; 3],

    /// Half-extent edge vector along the second axis
    pub v: [f64; 3],

    /// Auto-focus hint understood by the tracer
    #[serde(default, skip_serializing_if = "omit_flag")]
    pub in_focus: bool,
}

/// Rectangular area light
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDoc {
    /// Light center in tracer space
    pub pos: [f64; 3],

    /// Half-extent edge vector along the first axis
    pub u: [f64; 3],

    /// Half-extent edge vector along the second axis
    pub v: [f64; 3],

    /// RGB emission; always isotropic here (three equal channels)
    pub intensity: [f64; 3],
}

/// Convert a document array into a math vector
pub fn vec3(a: [f64; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

/// Convert a math vector into a document array
pub fn array(v: Vec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn omit_flag(flag: &bool) -> bool {
    !*flag
}

fn default_look_at() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

fn default_up() -> [f64; 3] {
    [0.0, 1.0, 0.0]
}

fn default_fov() -> f64 {
    DEFAULT_FOV_DEGREES
}

fn default_aperture() -> f64 {
    DEFAULT_APERTURE
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_samples() -> u32 {
    DEFAULT_SAMPLES
}

fn default_rgb() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_roughness() -> f64 {
    1.0
}

fn default_ior() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_parses_with_defaults() {
        let doc: SceneDocument = serde_json::from_str("{}").unwrap();

        assert_eq!(doc.render.width, DEFAULT_WIDTH);
        assert_eq!(doc.render.height, DEFAULT_HEIGHT);
        assert_eq!(doc.render.samples, DEFAULT_SAMPLES);
        assert_eq!(doc.camera.fov, DEFAULT_FOV_DEGREES);
        assert_eq!(doc.camera.aperture, DEFAULT_APERTURE);
        assert_eq!(doc.camera.look_at, [0.0, 0.0, 1.0]);
        assert!(doc.materials.is_empty());
        assert!(doc.objects.is_empty());
        assert!(doc.lights.is_empty());
    }

    #[test]
    fn test_object_tags_decode() {
        let json = r#"[
            {"sphere": {"name": "Ball", "mat": "M", "center": [0, 1, 0], "radius": 1}},
            {"plane": {"name": "Floor", "mat": "M", "point": [0, 0, 0], "u": [1, 0, 0], "v": [0, 0, 1]}}
        ]"#;
        let objects: Vec<ObjectDoc> = serde_json::from_str(json).unwrap();

        assert!(matches!(objects[0], ObjectDoc::Sphere(_)));
        assert!(matches!(objects[1], ObjectDoc::Plane(_)));
    }

    #[test]
    fn test_unknown_object_tag_is_an_error() {
        let json = r#"[{"torus": {"name": "T", "mat": "M"}}]"#;
        let result: Result<Vec<ObjectDoc>, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_material_volume_fields_default_to_zero() {
        let json = r#"{"rgb": [0.8, 0.8, 0.8], "metallic": 0.0, "roughness": 0.5, "ior": 1.5}"#;
        let mat: MaterialDoc = serde_json::from_str(json).unwrap();

        assert_eq!(mat.volume_density, 0.0);
        assert_eq!(mat.volume_anisotropy, 0.0);
    }

    #[test]
    fn test_in_focus_round_trips() {
        let json = r#"{"name": "Ball", "mat": "M", "center": [0, 0, 0], "radius": 2, "in_focus": true}"#;
        let sphere: SphereDoc = serde_json::from_str(json).unwrap();
        assert!(sphere.in_focus);

        let back = serde_json::to_string(&sphere).unwrap();
        assert!(back.contains("in_focus"));
    }

    #[test]
    fn test_in_focus_omitted_when_false() {
        let sphere = SphereDoc {
            name: "Ball".to_string(),
            mat: "M".to_string(),
            center: [0.0; 3],
            radius: 1.0,
            in_focus: false,
        };
        let json = serde_json::to_string(&sphere).unwrap();

        assert!(!json.contains("in_focus"));
    }
}
