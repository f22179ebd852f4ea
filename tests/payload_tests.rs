// Host-side tests for the layout payload sent to the scene layer.
// The bridge crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod payload {
    include!("../src/payload.rs");
}

use canopy_core::{compute_placement, CanopyType, Configuration, SceneUpdate};
use payload::*;

fn free_standing() -> Configuration {
    Configuration::new(CanopyType::FreeStanding).with_dimensions(6.0, 4.0)
}

#[test]
fn payload_lists_units_with_rotation() {
    let config = free_standing();
    let placement = compute_placement(&config);
    let payload = LayoutPayload::new(&config, &placement, SceneUpdate::Rebuild);

    assert_eq!(payload.units.len(), 2);
    assert!((payload.units[0].position[0] - 3.6).abs() < 1e-4);
    assert_eq!(payload.units[0].rotation_y, 0.0);
    assert!((payload.units[1].rotation_y - std::f32::consts::PI).abs() < 1e-6);
    assert!((payload.units[1].position[2] + 32.5).abs() < 1e-4);
}

#[test]
fn payload_carries_lens_and_environment() {
    let config = free_standing().with_size("Extra Large");
    let placement = compute_placement(&config);
    let payload = LayoutPayload::new(&config, &placement, SceneUpdate::Reposition);

    assert_eq!(payload.camera.fov_degrees, 75.0);
    assert_eq!(payload.camera.target, [0.0, 0.0, 0.0]);
    assert!((payload.camera.near - 0.1).abs() < 1e-6);
    assert_eq!(payload.camera.far, 7000.0);
    assert!((payload.environment.ground_size - 260.0).abs() < 1e-3);

    let light = payload.environment.key_light;
    let len = (light[0] * light[0] + light[1] * light[1] + light[2] * light[2]).sqrt();
    assert!((len - payload.environment.light_distance).abs() < 1e-3);
}

#[test]
fn payload_serializes_with_camel_case_names() {
    let mut config = Configuration::new(CanopyType::WallMounted).with_size("Large");
    config.roof = Some("Louvered".to_string());
    config.color = Some("Anthracite".to_string());
    let placement = compute_placement(&config);
    let payload = LayoutPayload::new(&config, &placement, SceneUpdate::Rebuild);

    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["update"], "rebuild");
    assert_eq!(json["units"].as_array().unwrap().len(), 1);
    assert!(json["units"][0]["rotationY"].is_number());
    assert!(json["camera"]["fovDegrees"].is_number());
    assert!(json["environment"]["groundSize"].is_number());
    assert!(json["environment"]["keyLight"].is_array());
    assert_eq!(json["roof"], "Louvered");
    assert_eq!(json["color"], "Anthracite");
}

#[test]
fn instance_floats_pack_four_values_per_unit() {
    let placement = compute_placement(&free_standing());
    let floats = instance_floats(&placement);

    assert_eq!(floats.len(), 8);
    assert!((floats[0] - 3.6).abs() < 1e-4);
    assert_eq!(floats[1], 0.0);
    assert_eq!(floats[2], 20.0);
    assert_eq!(floats[3], 0.0);
    assert!((floats[4] + 3.6).abs() < 1e-4);
    assert!((floats[6] + 32.5).abs() < 1e-4);
    assert!((floats[7] - std::f32::consts::PI).abs() < 1e-6);
}
