// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: Convert a floor plan JSON document into a 3D scene graph
//!
//! Usage:
//!   plan-to-scene <plan.json> [options]
//!   plan-to-scene --sample [options]

use planscape_core::{sample_plan, FloorPlan};
use planscape_scene::{generate_scene_with_origin, PlanOrigin, SceneNode};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut plan_path: Option<String> = None;
    let mut use_sample = false;
    let mut elapsed: f64 = 0.0;
    let mut origin = PlanOrigin::default();
    let mut output_path = String::from("scene.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sample" => {
                use_sample = true;
            }
            "--elapsed" => {
                i += 1;
                elapsed = args[i].parse().expect("Invalid elapsed value");
            }
            "--origin" => {
                let x: f64 = args[i + 1].parse().expect("Invalid origin x");
                let y: f64 = args[i + 2].parse().expect("Invalid origin y");
                origin = PlanOrigin::new(x, y);
                i += 2;
            }
            "--output" => {
                i += 1;
                output_path = args[i].clone();
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(1);
            }
            path => {
                plan_path = Some(path.to_string());
            }
        }
        i += 1;
    }

    let plan = if use_sample {
        sample_plan()
    } else {
        let path = plan_path.unwrap_or_else(|| {
            eprintln!("No plan file given (or pass --sample)");
            process::exit(1);
        });
        let json = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            process::exit(1);
        });
        FloorPlan::from_json(&json).unwrap_or_else(|e| {
            eprintln!("Failed to parse {}: {}", path, e);
            process::exit(1);
        })
    };

    if let Err(e) = plan.validate() {
        eprintln!("Invalid floor plan: {}", e);
        process::exit(1);
    }

    println!(
        "Plan '{}': {} walls, {} rooms (scale {})",
        plan.name,
        plan.walls.len(),
        plan.rooms.len(),
        plan.scale
    );

    let scene = generate_scene_with_origin(Some(&plan), origin, elapsed);
    print_summary(&scene);

    let json = serde_json::to_string_pretty(&scene).expect("Scene serialization failed");
    fs::write(&output_path, json).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", output_path, e);
        process::exit(1);
    });
    println!("Wrote scene graph to {}", output_path);
}

fn print_summary(scene: &SceneNode) {
    println!(
        "Scene: {} nodes ({} meshes, {} labels)",
        scene.node_count(),
        scene.mesh_count(),
        scene.label_count()
    );
}

fn print_usage() {
    println!("plan-to-scene - Convert a floor plan JSON document into a 3D scene graph");
    println!();
    println!("Usage:");
    println!("  plan-to-scene <plan.json> [options]");
    println!("  plan-to-scene --sample [options]");
    println!();
    println!("Options:");
    println!("  --sample             Use the built-in sample apartment plan");
    println!("  --elapsed <secs>     Elapsed time fed to the idle transform (default 0)");
    println!("  --origin <x> <y>     Plan-space canvas origin (default 400 300)");
    println!("  --output <path>      Output file (default scene.json)");
    println!("  --help, -h           Show this help");
}
