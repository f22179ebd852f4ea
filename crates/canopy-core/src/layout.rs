//! Layout engine: derives unit placement, camera framing and environment
//! extents from a [`Configuration`].
//!
//! Every function here is pure. Missing or malformed input is normalized
//! (see [`Configuration::effective_length`]) so no operation can fail.

use glam::Vec3;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::PI;

use crate::config::{CanopyType, Configuration};
use crate::constants::*;

/// Size tiers recognized in free-text size labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeTier {
    /// Classify a size label, case-insensitively.
    ///
    /// "extra" together with "large" wins over "large" alone, and both win over
    /// "small". Absent or unrecognized labels are medium.
    /// A label naming both tiers, like "small to large", is therefore large.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return SizeTier::Medium;
        };
        let label = label.to_lowercase();
        if label.contains("extra") && label.contains("large") {
            SizeTier::ExtraLarge
        } else if label.contains("large") {
            SizeTier::Large
        } else if label.contains("small") {
            SizeTier::Small
        } else {
            SizeTier::Medium
        }
    }

    pub fn multiplier(self) -> f32 {
        match self {
            SizeTier::Small => SMALL_MULTIPLIER,
            SizeTier::Medium => MEDIUM_MULTIPLIER,
            SizeTier::Large => LARGE_MULTIPLIER,
            SizeTier::ExtraLarge => EXTRA_LARGE_MULTIPLIER,
        }
    }
}

#[inline]
pub fn size_multiplier(size: Option<&str>) -> f32 {
    SizeTier::from_label(size).multiplier()
}

/// Horizontal separation driver between paired units.
#[inline]
pub fn spacing(config: &Configuration) -> f32 {
    config.effective_length() * size_multiplier(config.size.as_deref())
}

/// Offset magnitude of the rear unit in a free-standing pair.
#[inline]
pub fn depth(config: &Configuration) -> f32 {
    BASE_DEPTH_OFFSET + config.effective_width() * DEPTH_PER_WIDTH_M
}

/// Scale drivers shared by every derived quantity of one layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footprint {
    pub spacing: f32,
    pub depth: f32,
    pub max_dimension: f32,
}

impl Footprint {
    pub fn of(config: &Configuration) -> Self {
        let spacing = spacing(config);
        let depth = depth(config);
        Self {
            spacing,
            depth,
            max_dimension: spacing.max(depth),
        }
    }
}

/// One structural unit: where it stands and its rotation about +Y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitPlacement {
    pub position: Vec3,
    /// Radians; the rear free-standing unit is turned to face the front one.
    pub yaw: f32,
}

pub type UnitPositions = SmallVec<[UnitPlacement; 2]>;

pub fn canopy_positioning(config: &Configuration) -> UnitPositions {
    positions_for(config.canopy_type, &Footprint::of(config))
}

fn positions_for(canopy_type: CanopyType, footprint: &Footprint) -> UnitPositions {
    let half = footprint.spacing / 2.0;
    let front = UnitPlacement {
        position: Vec3::new(half, 0.0, WALL_MOUNT_Z),
        yaw: 0.0,
    };
    match canopy_type {
        CanopyType::FreeStanding => {
            let rear = UnitPlacement {
                position: Vec3::new(-half, 0.0, -footprint.depth),
                yaw: PI,
            };
            smallvec![front, rear]
        }
        CanopyType::WallMounted => smallvec![front],
    }
}

/// Camera placement; the target is always the scene origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    fn framing(footprint: &Footprint) -> Self {
        let distance = footprint.max_dimension * CAMERA_DISTANCE_FACTOR;
        let height = footprint.max_dimension * CAMERA_HEIGHT_FACTOR;
        let diagonal = distance * CAMERA_DIAGONAL_FACTOR;
        Self {
            position: Vec3::new(diagonal, height, diagonal),
            target: Vec3::ZERO,
        }
    }
}

pub fn camera_pose(config: &Configuration) -> CameraPose {
    CameraPose::framing(&Footprint::of(config))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentExtents {
    /// Edge length of the square ground plane; never below [`MIN_GROUND_SIZE`].
    pub ground_size: f32,
    pub light_distance: f32,
}

impl EnvironmentExtents {
    fn scaled(footprint: &Footprint) -> Self {
        Self {
            ground_size: MIN_GROUND_SIZE.max(footprint.max_dimension * GROUND_SIZE_FACTOR),
            light_distance: footprint.max_dimension * LIGHT_DISTANCE_FACTOR,
        }
    }

    /// Position of the main directional light, `light_distance` from the origin.
    pub fn key_light_position(&self) -> Vec3 {
        key_light_direction() * self.light_distance
    }
}

pub fn environment_extents(config: &Configuration) -> EnvironmentExtents {
    EnvironmentExtents::scaled(&Footprint::of(config))
}

/// Complete placement geometry for one configuration snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    pub unit_positions: UnitPositions,
    pub camera_pose: CameraPose,
    pub environment_extents: EnvironmentExtents,
    pub footprint: Footprint,
}

impl PlacementResult {
    pub fn unit_count(&self) -> usize {
        self.unit_positions.len()
    }

    /// Unit transforms in a layout that can be handed to the scene layer as a
    /// flat float buffer.
    pub fn instances(&self) -> SmallVec<[UnitInstance; 2]> {
        self.unit_positions
            .iter()
            .map(|u| UnitInstance {
                position: u.position.to_array(),
                yaw: u.yaw,
            })
            .collect()
    }
}

/// Compute the full layout. Spacing, depth and the max dimension are derived
/// once so camera and ground plane always agree on scale.
pub fn compute_placement(config: &Configuration) -> PlacementResult {
    let footprint = Footprint::of(config);
    let result = PlacementResult {
        unit_positions: positions_for(config.canopy_type, &footprint),
        camera_pose: CameraPose::framing(&footprint),
        environment_extents: EnvironmentExtents::scaled(&footprint),
        footprint,
    };
    log::debug!(
        "[layout] {} units={} spacing={:.2} depth={:.2} max={:.2}",
        config.canopy_type,
        result.unit_count(),
        footprint.spacing,
        footprint.depth,
        footprint.max_dimension
    );
    result
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UnitInstance {
    pub position: [f32; 3],
    pub yaw: f32,
}

/// What the scene layer has to do with its existing unit objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneUpdate {
    /// Unit count changed (or nothing was placed yet): recreate the units.
    Rebuild,
    /// Same units, new transforms.
    Reposition,
}

pub fn plan_update(previous_unit_count: Option<usize>, next: &PlacementResult) -> SceneUpdate {
    match previous_unit_count {
        Some(count) if count == next.unit_count() => SceneUpdate::Reposition,
        _ => SceneUpdate::Rebuild,
    }
}
