use canopy_core::{
    Camera, Configuration, PlacementResult, SceneUpdate, UnitInstance, CAMERA_FOV_DEGREES,
};
use serde::Serialize;

/// Shape of the object handed to the JavaScript scene layer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPayload {
    pub update: SceneUpdate,
    pub units: Vec<UnitPayload>,
    pub camera: CameraPayload,
    pub environment: EnvironmentPayload,
    pub roof: Option<String>,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPayload {
    pub position: [f32; 3],
    pub rotation_y: f32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPayload {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentPayload {
    pub ground_size: f32,
    pub light_distance: f32,
    pub key_light: [f32; 3],
}

impl LayoutPayload {
    pub fn new(config: &Configuration, placement: &PlacementResult, update: SceneUpdate) -> Self {
        // aspect is owned by the viewport; only the pose and lens are sent
        let camera: Camera = placement.camera_pose.to_camera(1.0);
        let env = &placement.environment_extents;
        Self {
            update,
            units: placement
                .unit_positions
                .iter()
                .map(|u| UnitPayload {
                    position: u.position.to_array(),
                    rotation_y: u.yaw,
                })
                .collect(),
            camera: CameraPayload {
                position: camera.eye.to_array(),
                target: camera.target.to_array(),
                fov_degrees: CAMERA_FOV_DEGREES,
                near: camera.znear,
                far: camera.zfar,
            },
            environment: EnvironmentPayload {
                ground_size: env.ground_size,
                light_distance: env.light_distance,
                key_light: env.key_light_position().to_array(),
            },
            roof: config.roof.clone(),
            color: config.color.clone(),
        }
    }
}

/// Unit transforms packed as `[x, y, z, yaw]` per unit.
pub fn instance_floats(placement: &PlacementResult) -> Vec<f32> {
    let instances = placement.instances();
    bytemuck::cast_slice::<UnitInstance, f32>(&instances).to_vec()
}
