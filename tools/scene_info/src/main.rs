//! Scene file inspector
//!
//! Loads a tracer scene JSON through the full import path and prints a
//! summary of what the editor side would receive. Handy for checking a
//! hand-edited scene before pointing the tracer at it.
//!
//! Usage: cargo run --bin scene_info scene.json

use ray_scene_bridge::codec;
use ray_scene_bridge::foundation::logging;
use ray_scene_bridge::scene::ImportedShape;
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} scene.json", args[0]);
        process::exit(1);
    }

    let scene = match codec::import_from_file(&args[1]) {
        Ok(scene) => scene,
        Err(err) => {
            logging::error!("failed to load '{}': {}", args[1], err);
            process::exit(1);
        }
    };

    let cam = &scene.camera;
    println!("camera:");
    println!(
        "  position ({:.3}, {:.3}, {:.3})  fov {:.1} deg  aperture {:.3}",
        cam.position.x,
        cam.position.y,
        cam.position.z,
        cam.fov.to_degrees(),
        cam.aperture
    );

    println!(
        "render: {}x{} @ {} spp",
        scene.render.width, scene.render.height, scene.render.samples
    );

    println!("objects ({}):", scene.objects.len());
    for object in &scene.objects {
        let material = object
            .material
            .as_ref()
            .map_or("<none>", |m| m.name.as_str());
        match &object.shape {
            ImportedShape::Sphere { center, radius } => {
                println!(
                    "  sphere '{}'  center ({:.3}, {:.3}, {:.3})  radius {:.3}  mat {}",
                    object.name, center.x, center.y, center.z, radius, material
                );
            }
            ImportedShape::Plane { world } => {
                println!(
                    "  plane  '{}'  origin ({:.3}, {:.3}, {:.3})  mat {}",
                    object.name, world.m14, world.m24, world.m34, material
                );
            }
        }
    }

    println!("lights ({}):", scene.lights.len());
    for light in &scene.lights {
        println!(
            "  area  ({:.3}, {:.3}, {:.3})  {:.2} x {:.2}  power {:.1}",
            light.location.x,
            light.location.y,
            light.location.z,
            light.size_x,
            light.size_y,
            light.power
        );
    }
}
