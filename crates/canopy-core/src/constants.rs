use glam::Vec3;

// Layout policy constants shared by the web bridge and the native preview.

// Configuration defaults (meters)
pub const DEFAULT_LENGTH_M: f32 = 6.0;
pub const DEFAULT_WIDTH_M: f32 = 4.0;

// Size tiers applied to the length when spacing units
pub const SMALL_MULTIPLIER: f32 = 1.0;
pub const MEDIUM_MULTIPLIER: f32 = 1.2; // also used for absent/unrecognized labels
pub const LARGE_MULTIPLIER: f32 = 1.5;
pub const EXTRA_LARGE_MULTIPLIER: f32 = 1.8;

// Unit placement
pub const WALL_MOUNT_Z: f32 = 20.0; // fixed wall-mount plane offset
pub const BASE_DEPTH_OFFSET: f32 = 22.5; // base free-standing depth offset
pub const DEPTH_PER_WIDTH_M: f32 = 2.5;

// Camera framing relative to the largest footprint dimension
pub const CAMERA_DISTANCE_FACTOR: f32 = 2.5;
pub const CAMERA_HEIGHT_FACTOR: f32 = 0.8;
pub const CAMERA_DIAGONAL_FACTOR: f32 = 0.7; // share of distance on both x and z

// Perspective settings used by the configurator viewport
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 7000.0;

// Environment
pub const MIN_GROUND_SIZE: f32 = 200.0;
pub const GROUND_SIZE_FACTOR: f32 = 8.0;
pub const LIGHT_DISTANCE_FACTOR: f32 = 1.5;
pub const KEY_LIGHT_DIRECTION: [f32; 3] = [20.0, 30.0, 20.0]; // sun-like key light

#[inline]
pub fn key_light_direction() -> Vec3 {
    Vec3::from_array(KEY_LIGHT_DIRECTION).normalize()
}
