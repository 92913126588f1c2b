//! Scene document assembly, parsing, and file I/O
//!
//! One export call turns a complete scene snapshot into a JSON document;
//! one import call parses a document and reconstructs editor-space values.
//! Both are pure, synchronous passes over exclusively owned data; the only
//! I/O is a single bounded read or write at the boundary.
//!
//! Export serializes the whole document in memory before touching the
//! filesystem, so a failed write never leaves a partially written scene.

use crate::convert::{camera, decode, encode};
use crate::document::{array, MaterialDoc, SceneDocument};
use crate::scene::{ImportedScene, Material, SceneSnapshot};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// The snapshot has no active camera; there is nothing to render from
    #[error("no active camera in scene")]
    NoActiveCamera,

    /// The document could not be serialized
    #[error("failed to serialize scene document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The serialized document could not be written
    #[error("failed to write '{path}': {source}")]
    Io {
        /// Path of the attempted write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that abort an import
#[derive(Error, Debug)]
pub enum ImportError {
    /// The scene file does not exist
    #[error("scene file not found: {0}")]
    FileNotFound(PathBuf),

    /// The scene file could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path of the attempted read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or uses an unknown primitive tag
    #[error("malformed scene document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// A plane's edge vectors span no area, so no transform can be rebuilt
    #[error("plane '{name}' has parallel or zero edge vectors")]
    DegeneratePlane {
        /// Name of the offending plane
        name: String,
    },
}

/// Assemble a scene document from an editor snapshot
///
/// Fails only when the snapshot carries no active camera. Material table
/// keys are derived from object names as `<name>_Mat`; objects sharing a
/// name collapse to one entry, last writer wins. A scene without area
/// lights gets the documented fallback light so the export stays
/// renderable.
pub fn build_document(scene: &SceneSnapshot) -> Result<SceneDocument, ExportError> {
    let active_camera = scene.camera.as_ref().ok_or(ExportError::NoActiveCamera)?;

    let mut materials = BTreeMap::new();
    let mut objects = Vec::with_capacity(scene.objects.len());
    for object in &scene.objects {
        let key = format!("{}_Mat", object.name);
        materials.insert(key.clone(), material_doc(&object.material));
        objects.push(encode::encode_object(object, key));
    }

    let mut lights: Vec<_> = scene.lights.iter().map(encode::encode_light).collect();
    if lights.is_empty() {
        log::debug!("scene has no area lights, emitting the default fill light");
        lights.push(encode::fallback_light());
    }

    Ok(SceneDocument {
        camera: camera::camera_to_renderer(active_camera, scene.aperture),
        render: scene.render.clone(),
        materials,
        objects,
        lights,
    })
}

/// Serialize a snapshot to a pretty-printed JSON string
pub fn export_to_string(scene: &SceneSnapshot) -> Result<String, ExportError> {
    let document = build_document(scene)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Export a snapshot to a scene file
pub fn export_to_file<P: AsRef<Path>>(scene: &SceneSnapshot, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = export_to_string(scene)?;

    fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "exported {} objects and {} lights to '{}'",
        scene.objects.len(),
        scene.lights.len().max(1),
        path.display()
    );
    Ok(())
}

/// Parse a scene document from JSON text
pub fn parse_document(json: &str) -> Result<SceneDocument, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// Reconstruct editor-space values from a parsed document
pub fn decode_document(document: &SceneDocument) -> Result<ImportedScene, ImportError> {
    let objects = document
        .objects
        .iter()
        .map(|object| decode::decode_object(object, &document.materials))
        .collect::<Result<Vec<_>, _>>()?;

    let lights = document.lights.iter().map(decode::decode_light).collect();

    Ok(ImportedScene {
        camera: camera::camera_to_editor(&document.camera),
        render: document.render.clone(),
        objects,
        lights,
    })
}

/// Import a scene file and reconstruct editor-space values
pub fn import_from_file<P: AsRef<Path>>(path: P) -> Result<ImportedScene, ImportError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ImportError::FileNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&text)?;
    let imported = decode_document(&document)?;

    log::info!(
        "imported {} objects and {} lights from '{}'",
        imported.objects.len(),
        imported.lights.len(),
        path.display()
    );
    Ok(imported)
}

fn material_doc(material: &Material) -> MaterialDoc {
    MaterialDoc {
        rgb: array(material.rgb),
        metallic: material.metallic,
        roughness: material.roughness,
        ior: material.ior,
        volume_density: material.volume_density,
        volume_anisotropy: material.volume_anisotropy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ObjectDoc, RenderSettings};
    use crate::foundation::math::{Mat4, Vec3};
    use crate::scene::{
        CameraSnapshot, ImportedShape, LightSnapshot, ObjectSnapshot, ShapeKind,
    };
    use approx::assert_relative_eq;

    fn test_camera() -> CameraSnapshot {
        CameraSnapshot {
            position: Vec3::new(0.0, -8.0, 3.0),
            forward: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::new(0.0, 0.0, 1.0),
            fov: 50.0_f64.to_radians(),
        }
    }

    fn test_material(name: &str) -> Material {
        Material {
            name: name.to_string(),
            rgb: Vec3::new(0.8, 0.8, 0.8),
            metallic: 0.0,
            roughness: 0.5,
            ior: 1.5,
            volume_density: 0.0,
            volume_anisotropy: 0.0,
        }
    }

    fn sphere_snapshot(name: &str, center: Vec3, diameter: f64) -> ObjectSnapshot {
        ObjectSnapshot {
            name: name.to_string(),
            kind: ShapeKind::Sphere,
            world: Mat4::new_translation(&center),
            dimensions: Vec3::new(diameter, diameter, diameter),
            material: test_material(name),
        }
    }

    #[test]
    fn test_export_without_camera_fails() {
        let scene = SceneSnapshot {
            camera: None,
            ..Default::default()
        };

        let result = build_document(&scene);
        assert!(matches!(result, Err(ExportError::NoActiveCamera)));
    }

    #[test]
    fn test_export_registers_materials_by_object_name() {
        let scene = SceneSnapshot {
            camera: Some(test_camera()),
            aperture: 0.01,
            render: RenderSettings::default(),
            objects: vec![sphere_snapshot("Ball", Vec3::new(0.0, 0.0, 1.0), 2.0)],
            lights: Vec::new(),
        };

        let document = build_document(&scene).unwrap();

        assert!(document.materials.contains_key("Ball_Mat"));
        let ObjectDoc::Sphere(ref sphere) = document.objects[0] else {
            panic!("expected a sphere");
        };
        assert_eq!(sphere.mat, "Ball_Mat");
    }

    #[test]
    fn test_lightless_scene_gets_exactly_one_fallback_light() {
        let scene = SceneSnapshot {
            camera: Some(test_camera()),
            aperture: 0.01,
            render: RenderSettings::default(),
            objects: Vec::new(),
            lights: Vec::new(),
        };

        let document = build_document(&scene).unwrap();

        assert_eq!(document.lights.len(), 1);
        let light = &document.lights[0];
        assert_eq!(light.pos, [0.0, 5.0, 0.0]);
        assert_eq!(light.u, [2.0, 0.0, 0.0]);
        assert_eq!(light.v, [0.0, 0.0, 2.0]);
        assert_eq!(light.intensity, [25.0, 25.0, 25.0]);
    }

    #[test]
    fn test_scene_with_lights_gets_no_fallback() {
        let scene = SceneSnapshot {
            camera: Some(test_camera()),
            aperture: 0.01,
            render: RenderSettings::default(),
            objects: Vec::new(),
            lights: vec![LightSnapshot {
                world: Mat4::new_translation(&Vec3::new(0.0, 0.0, 4.0)),
                size_x: 2.0,
                size_y: 2.0,
                power: 30.0,
            }],
        };

        let document = build_document(&scene).unwrap();

        assert_eq!(document.lights.len(), 1);
        assert_eq!(document.lights[0].intensity, [30.0, 30.0, 30.0]);
    }

    #[test]
    fn test_full_round_trip_through_json() {
        let scene = SceneSnapshot {
            camera: Some(test_camera()),
            aperture: 0.02,
            render: RenderSettings {
                width: 640,
                height: 480,
                samples: 32,
            },
            objects: vec![sphere_snapshot("Ball", Vec3::new(1.0, 2.0, 3.0), 2.0)],
            lights: vec![LightSnapshot {
                world: Mat4::new_translation(&Vec3::new(0.0, 0.0, 5.0)),
                size_x: 4.0,
                size_y: 2.0,
                power: 25.0,
            }],
        };

        let json = export_to_string(&scene).unwrap();
        let imported = decode_document(&parse_document(&json).unwrap()).unwrap();

        assert_eq!(imported.render.width, 640);
        assert_eq!(imported.render.samples, 32);
        assert_relative_eq!(imported.camera.aperture, 0.02, epsilon = 1e-12);
        assert_relative_eq!(
            imported.camera.position,
            Vec3::new(0.0, -8.0, 3.0),
            epsilon = 1e-6
        );

        assert_eq!(imported.objects.len(), 1);
        let ImportedShape::Sphere { center, radius } = imported.objects[0].shape else {
            panic!("expected a sphere");
        };
        assert_relative_eq!(center, Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-6);
        assert_relative_eq!(radius, 1.0, epsilon = 1e-6);
        assert_eq!(
            imported.objects[0].material.as_ref().unwrap().name,
            "Ball_Mat"
        );

        assert_eq!(imported.lights.len(), 1);
        assert_relative_eq!(
            imported.lights[0].location,
            Vec3::new(0.0, 0.0, 5.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(imported.lights[0].size_x, 4.0, epsilon = 1e-6);
        assert_relative_eq!(imported.lights[0].size_y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_import_tolerates_missing_material_reference() {
        let json = r#"{
            "camera": {"pos": [0, 0, 5], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 50, "aperture": 0.01},
            "render": {"width": 1280, "height": 720, "samples": 128},
            "materials": {},
            "objects": [{"plane": {"name": "Floor", "mat": "Gone", "point": [0, 0, 0], "u": [1, 0, 0], "v": [0, 0, -1]}}],
            "lights": []
        }"#;

        let imported = decode_document(&parse_document(json).unwrap()).unwrap();

        assert_eq!(imported.objects.len(), 1);
        assert!(imported.objects[0].material.is_none());
    }

    #[test]
    fn test_import_applies_defaults_for_missing_sections() {
        let json = r#"{"objects": [], "lights": []}"#;

        let imported = decode_document(&parse_document(json).unwrap()).unwrap();

        assert_eq!(imported.render, RenderSettings::default());
        assert_relative_eq!(imported.camera.aperture, 0.01, epsilon = 1e-12);
        assert_relative_eq!(imported.camera.fov, 60.0_f64.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            parse_document("{not json"),
            Err(ImportError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_import_missing_file() {
        let result = import_from_file("definitely/not/here/scene.json");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }
}
