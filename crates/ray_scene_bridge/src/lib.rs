//! # Ray Scene Bridge
//!
//! Bidirectional conversion between an interactive editor's scene model
//! (Z-up, per-object affine transforms) and the flat JSON scene description
//! consumed by an offline path tracer (Y-up, primitives described by explicit
//! basis vectors).
//!
//! The editor itself is an external collaborator: it hands this crate plain
//! value snapshots (world transforms, bounding dimensions, light and camera
//! parameters) and receives reconstructed transforms back on import. No UI
//! or editor state lives here.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ray_scene_bridge::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let snapshot = SceneSnapshot {
//!         camera: Some(CameraSnapshot {
//!             position: Vec3::new(0.0, -5.0, 2.0),
//!             forward: Vec3::new(0.0, 1.0, 0.0),
//!             up: Vec3::new(0.0, 0.0, 1.0),
//!             fov: 50.0_f64.to_radians(),
//!         }),
//!         aperture: 0.01,
//!         render: RenderSettings::default(),
//!         objects: Vec::new(),
//!         lights: Vec::new(),
//!     };
//!     codec::export_to_file(&snapshot, "scene.json")?;
//!
//!     let imported = codec::import_from_file("scene.json")?;
//!     println!("{} objects", imported.objects.len());
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod convert;
pub mod document;
pub mod foundation;
pub mod scene;

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        codec::{self, ExportError, ImportError},
        convert::{camera, coords, decode, encode},
        document::{RenderSettings, SceneDocument},
        foundation::math::{Mat4, Quat, Transform, Vec3},
        scene::{
            CameraSnapshot, ImportedObject, ImportedScene, ImportedShape, LightSnapshot,
            Material, ObjectSnapshot, SceneSnapshot, ShapeKind,
        },
    };
}
