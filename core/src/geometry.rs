//! Procedural table layout.
//!
//! Coordinates are right-handed with `+Y` up. The front (flipper) edge of the
//! table sits at `z = 0` and the back wall at `z = -height`; the player looks
//! toward `-Z`, so `-X` is the player's left. Everything here is closed-form:
//! the same [`TableConfig`] always yields the same [`TableLayout`].

use glam::{Quat, Vec3};

use crate::config::TableConfig;

pub const MAX_BUMPERS: usize = 8;
pub const BUMPER_ARC_DEG: (f32, f32) = (20.0, 160.0);
pub const TARGET_ARC_DEG: (f32, f32) = (-60.0, 60.0);

pub const BUMPER_RADIUS: f32 = 0.75;
/// Bumper centers sit in the center plane of a resting ball of default radius
pub const BUMPER_LIFT: f32 = 0.15;
/// Bumpers and targets are pulled this far in from the back wall
pub const BACK_INSET: f32 = 2.0;

pub const TARGET_RADIUS: f32 = 0.5;
pub const TARGET_HALF_DEPTH: f32 = 0.25;
pub const TARGET_LIFT: f32 = 0.6;

pub const SPINNER_RADIUS: f32 = 0.2;
pub const SPINNER_HALF_HEIGHT: f32 = 0.25;
pub const SPINNER_LIFT: f32 = 0.3;
pub const SPINNER_ROW_SPACING: f32 = 1.5;

pub const RIM_HEIGHT: f32 = 0.25;
pub const RIM_THICKNESS: f32 = 0.2;
pub const RIM_OVERHANG: f32 = 0.5;

pub const PLAYFIELD_THICKNESS: f32 = 0.1;
pub const CEILING_CLEARANCE: f32 = 2.0;
pub const CEILING_THICKNESS: f32 = 0.1;

pub const DRAIN_MARGIN: f32 = 1.5;
pub const DRAIN_DEPTH: f32 = 1.5;
pub const DRAIN_HEIGHT: f32 = 1.0;
pub const DRAIN_CENTER_Z: f32 = -0.6;

pub const FLIPPER_PIVOT_Z: f32 = -1.5;
pub const FLIPPER_LIFT: f32 = 0.25;
pub const FLIPPER_HALF_EXTENTS: Vec3 = Vec3::new(0.65, 0.1, 0.25);
/// Distance from pivot to paddle center
pub const FLIPPER_ARM: f32 = 0.6;
/// Paddle yaw at spawn, measured down-table from the `+X` axis
pub const FLIPPER_REST_YAW_DEG: f32 = 30.0;

pub const BALL_SPAWN_LIFT: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticKind {
    Playfield,
    Wall,
    FrontWall,
    Rim,
    Ramp,
    LaneDivider,
    Ceiling,
}

/// Immovable box. Created with the table, removed only at teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticObstacle {
    pub name: String,
    pub kind: StaticKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub half_extents: Vec3,
    pub visible: bool,
}

impl StaticObstacle {
    fn boxed(name: &str, kind: StaticKind, position: Vec3, size: Vec3) -> Self {
        Self {
            name: name.to_string(),
            kind,
            position,
            rotation: Quat::IDENTITY,
            half_extents: size * 0.5,
            visible: true,
        }
    }

    fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumperPlacement {
    pub position: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPlacement {
    pub position: Vec3,
    /// Coin stands upright facing the player
    pub rotation: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerPlacement {
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlipperSide {
    Left,
    Right,
}

impl FlipperSide {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            FlipperSide::Left => -1.0,
            FlipperSide::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipperPlacement {
    pub side: FlipperSide,
    pub pivot: Vec3,
    /// Positive rotation about this axis swings the tip up-table
    pub hinge_axis: Vec3,
    pub paddle_center: Vec3,
    pub paddle_rotation: Quat,
    pub paddle_half_extents: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrainZone {
    pub position: Vec3,
    pub half_extents: Vec3,
}

impl DrainZone {
    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.position).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub statics: Vec<StaticObstacle>,
    pub bumpers: Vec<BumperPlacement>,
    pub targets: Vec<TargetPlacement>,
    pub spinners: Vec<SpinnerPlacement>,
    pub flippers: [FlipperPlacement; 2],
    pub drain: DrainZone,
    pub ball_spawn: Vec3,
}

impl TableLayout {
    pub fn statics_of(&self, kind: StaticKind) -> impl Iterator<Item = &StaticObstacle> {
        self.statics.iter().filter(move |s| s.kind == kind)
    }
}

/// Build the whole table from its dimensions and counts.
pub fn generate(config: &TableConfig) -> TableLayout {
    let mut statics = Vec::new();
    statics.push(playfield(config));
    statics.extend(walls(config));
    statics.extend(rim(config));
    statics.extend(ramps_and_lanes(config));
    statics.push(ceiling(config));

    TableLayout {
        statics,
        bumpers: bumpers(config),
        targets: targets(config),
        spinners: spinners(config),
        flippers: flippers(config),
        drain: drain(config),
        ball_spawn: ball_spawn(config),
    }
}

/// Height of the tilted playfield surface at depth `z`.
pub fn surface_height(config: &TableConfig, z: f32) -> f32 {
    -(z + config.height * 0.5) * config.tilt_degrees.to_radians().tan()
}

pub fn bumper_count(config: &TableConfig) -> usize {
    config.bumper_count.clamp(1, MAX_BUMPERS as i32) as usize
}

pub fn target_count(config: &TableConfig) -> usize {
    config.target_count.max(1) as usize
}

pub fn spinner_count(config: &TableConfig) -> usize {
    config.spinner_count.max(1) as usize
}

/// Interpolation parameter for placement `i` of `count` along an arc.
/// A lone placement sits at the arc midpoint.
pub fn arc_t(i: usize, count: usize) -> f32 {
    if count <= 1 {
        0.5
    } else {
        i as f32 / (count - 1) as f32
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn playfield(config: &TableConfig) -> StaticObstacle {
    let rotation = Quat::from_rotation_x(config.tilt_degrees.to_radians());
    let top_center = Vec3::new(0.0, 0.0, -config.height * 0.5);
    let center = top_center + rotation * Vec3::new(0.0, -PLAYFIELD_THICKNESS * 0.5, 0.0);

    StaticObstacle::boxed(
        "Playfield",
        StaticKind::Playfield,
        center,
        Vec3::new(config.width, PLAYFIELD_THICKNESS, config.height),
    )
    .rotated(rotation)
}

/// Vertical center and height of an upright box covering `z0..z1`. Its
/// bottom reaches below the playfield slab and its top stands `height` above
/// the surface at both ends.
fn upright_span(config: &TableConfig, z0: f32, z1: f32, height: f32) -> (f32, f32) {
    let (a, b) = (surface_height(config, z0), surface_height(config, z1));
    let bottom = a.min(b) - PLAYFIELD_THICKNESS;
    let top = a.max(b) + height;
    ((bottom + top) * 0.5, top - bottom)
}

/// Left, right, back, and the two front segments either side of the flipper gap.
pub fn walls(config: &TableConfig) -> Vec<StaticObstacle> {
    let w = config.width;
    let h = config.height;
    let t = config.wall_thickness;
    let front_width = (w - config.flipper_gap) * 0.5;
    let front_x = config.flipper_gap * 0.5 + front_width * 0.5;

    let (side_y, side_h) = upright_span(config, -h, 0.0, config.wall_height);
    let (back_y, back_h) = upright_span(config, -h, -h + t, config.wall_height);
    let (front_y, front_h) = upright_span(config, -t, 0.0, config.wall_height);

    vec![
        StaticObstacle::boxed(
            "LeftWall",
            StaticKind::Wall,
            Vec3::new(-w * 0.5 + t * 0.5, side_y, -h * 0.5),
            Vec3::new(t, side_h, h),
        ),
        StaticObstacle::boxed(
            "RightWall",
            StaticKind::Wall,
            Vec3::new(w * 0.5 - t * 0.5, side_y, -h * 0.5),
            Vec3::new(t, side_h, h),
        ),
        StaticObstacle::boxed(
            "BackWall",
            StaticKind::Wall,
            Vec3::new(0.0, back_y, -h + t * 0.5),
            Vec3::new(w, back_h, t),
        ),
        StaticObstacle::boxed(
            "FrontWallLeft",
            StaticKind::FrontWall,
            Vec3::new(-front_x, front_y, -t * 0.5),
            Vec3::new(front_width, front_h, t),
        ),
        StaticObstacle::boxed(
            "FrontWallRight",
            StaticKind::FrontWall,
            Vec3::new(front_x, front_y, -t * 0.5),
            Vec3::new(front_width, front_h, t),
        ),
    ]
}

/// Low decorative frame just outside the walls.
pub fn rim(config: &TableConfig) -> Vec<StaticObstacle> {
    let w = config.width;
    let h = config.height;
    let front_width = (w - config.flipper_gap) * 0.5;
    let front_x = config.flipper_gap * 0.5 + front_width * 0.5;
    let side_len = h + RIM_OVERHANG;

    let (side_y, side_h) = upright_span(
        config,
        -h * 0.5 - side_len * 0.5,
        -h * 0.5 + side_len * 0.5,
        RIM_HEIGHT,
    );
    let (back_y, back_h) = upright_span(config, -h - RIM_THICKNESS, -h, RIM_HEIGHT);
    let (front_y, front_h) = upright_span(config, 0.0, RIM_THICKNESS, RIM_HEIGHT);

    vec![
        StaticObstacle::boxed(
            "Rim_Left",
            StaticKind::Rim,
            Vec3::new(-w * 0.5 - RIM_THICKNESS * 0.5, side_y, -h * 0.5),
            Vec3::new(RIM_THICKNESS, side_h, side_len),
        ),
        StaticObstacle::boxed(
            "Rim_Right",
            StaticKind::Rim,
            Vec3::new(w * 0.5 + RIM_THICKNESS * 0.5, side_y, -h * 0.5),
            Vec3::new(RIM_THICKNESS, side_h, side_len),
        ),
        StaticObstacle::boxed(
            "Rim_Back",
            StaticKind::Rim,
            Vec3::new(0.0, back_y, -h - RIM_THICKNESS * 0.5),
            Vec3::new(w + RIM_OVERHANG, back_h, RIM_THICKNESS),
        ),
        StaticObstacle::boxed(
            "Rim_FrontLeft",
            StaticKind::Rim,
            Vec3::new(-front_x, front_y, RIM_THICKNESS * 0.5),
            Vec3::new(front_width + RIM_OVERHANG * 0.5, front_h, RIM_THICKNESS),
        ),
        StaticObstacle::boxed(
            "Rim_FrontRight",
            StaticKind::Rim,
            Vec3::new(front_x, front_y, RIM_THICKNESS * 0.5),
            Vec3::new(front_width + RIM_OVERHANG * 0.5, front_h, RIM_THICKNESS),
        ),
    ]
}

/// Two pitched ramps and two lane dividers, scaled to the table.
pub fn ramps_and_lanes(config: &TableConfig) -> Vec<StaticObstacle> {
    let w = config.width;
    let h = config.height;
    let ramp_width = w * 0.2;

    let left_ramp_z = -h * (8.0 / 15.0);
    let right_ramp_z = -h * (10.0 / 15.0);
    let lane_z = -h * 0.4;
    let lane_x = config.flipper_gap * 0.5;

    vec![
        StaticObstacle::boxed(
            "LeftRamp",
            StaticKind::Ramp,
            Vec3::new(-w * 0.3, surface_height(config, left_ramp_z) + 0.2, left_ramp_z),
            Vec3::new(ramp_width, 0.1, h * (4.0 / 15.0)),
        )
        .rotated(Quat::from_rotation_x(25f32.to_radians())),
        StaticObstacle::boxed(
            "RightRamp",
            StaticKind::Ramp,
            Vec3::new(w * 0.3, surface_height(config, right_ramp_z) + 0.2, right_ramp_z),
            Vec3::new(ramp_width, 0.1, h * (3.0 / 15.0)),
        )
        .rotated(Quat::from_rotation_x(-25f32.to_radians())),
        StaticObstacle::boxed(
            "LeftLaneDivider",
            StaticKind::LaneDivider,
            Vec3::new(-lane_x, surface_height(config, lane_z) + 0.5, lane_z),
            Vec3::new(0.2, 1.0, h * (8.0 / 15.0)),
        ),
        StaticObstacle::boxed(
            "RightLaneDivider",
            StaticKind::LaneDivider,
            Vec3::new(lane_x, surface_height(config, lane_z) + 0.5, lane_z),
            Vec3::new(0.2, 1.0, h * (8.0 / 15.0)),
        ),
    ]
}

/// Collides, never rendered.
pub fn ceiling(config: &TableConfig) -> StaticObstacle {
    let mut ceiling = StaticObstacle::boxed(
        "InvisibleCeiling",
        StaticKind::Ceiling,
        Vec3::new(0.0, config.wall_height + CEILING_CLEARANCE, -config.height * 0.5),
        Vec3::new(config.width, CEILING_THICKNESS, config.height),
    );
    ceiling.visible = false;
    ceiling
}

pub fn bumpers(config: &TableConfig) -> Vec<BumperPlacement> {
    let count = bumper_count(config);
    let radius = config.width.min(config.height) * 0.2;

    (0..count)
        .map(|i| {
            let angle = lerp(BUMPER_ARC_DEG.0, BUMPER_ARC_DEG.1, arc_t(i, count)).to_radians();
            let x = angle.cos() * radius;
            let z = -(config.height - angle.sin() * (radius * 0.6) - BACK_INSET);
            BumperPlacement {
                position: Vec3::new(x, surface_height(config, z) + BUMPER_LIFT, z),
                radius: BUMPER_RADIUS,
            }
        })
        .collect()
}

pub fn targets(config: &TableConfig) -> Vec<TargetPlacement> {
    let count = target_count(config);
    let arc_radius = config.width * 0.35;
    let arc_center_depth = config.height - BACK_INSET;
    let upright = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);

    (0..count)
        .map(|i| {
            let angle = lerp(TARGET_ARC_DEG.0, TARGET_ARC_DEG.1, arc_t(i, count)).to_radians();
            let x = angle.sin() * arc_radius;
            let z = -(arc_center_depth - angle.cos() * 0.5);
            TargetPlacement {
                position: Vec3::new(x, surface_height(config, z) + TARGET_LIFT, z),
                rotation: upright,
            }
        })
        .collect()
}

/// Symmetric left/right pairs; an odd last spinner sits on the centerline.
pub fn spinners(config: &TableConfig) -> Vec<SpinnerPlacement> {
    let count = spinner_count(config);
    let offset_x = config.width * 0.25;

    (0..count)
        .map(|i| {
            let row = (i / 2) as f32;
            let x = if i + 1 == count && count % 2 == 1 {
                0.0
            } else if i % 2 == 0 {
                -offset_x
            } else {
                offset_x
            };
            let z = -(config.height * 0.45 + row * SPINNER_ROW_SPACING);
            SpinnerPlacement {
                position: Vec3::new(x, surface_height(config, z) + SPINNER_LIFT, z),
            }
        })
        .collect()
}

pub fn flippers(config: &TableConfig) -> [FlipperPlacement; 2] {
    [
        flipper(config, FlipperSide::Left),
        flipper(config, FlipperSide::Right),
    ]
}

fn flipper(config: &TableConfig, side: FlipperSide) -> FlipperPlacement {
    let z = FLIPPER_PIVOT_Z;
    let pivot = Vec3::new(
        side.sign() * config.flipper_gap * 0.75,
        surface_height(config, z) + FLIPPER_LIFT,
        z,
    );

    let rest = FLIPPER_REST_YAW_DEG.to_radians();
    // Paddle +X points from pivot toward the tip: inward and down-table.
    let (paddle_rotation, hinge_axis) = match side {
        FlipperSide::Left => (Quat::from_rotation_y(-rest), Vec3::Y),
        FlipperSide::Right => (
            Quat::from_rotation_y(std::f32::consts::PI + rest),
            Vec3::NEG_Y,
        ),
    };
    let paddle_center = pivot + paddle_rotation * Vec3::new(FLIPPER_ARM, 0.0, 0.0);

    FlipperPlacement {
        side,
        pivot,
        hinge_axis,
        paddle_center,
        paddle_rotation,
        paddle_half_extents: FLIPPER_HALF_EXTENTS,
    }
}

/// Spans the flipper gap plus margin at the front edge.
pub fn drain(config: &TableConfig) -> DrainZone {
    let z = DRAIN_CENTER_Z;
    DrainZone {
        position: Vec3::new(0.0, surface_height(config, z) - 0.1, z),
        half_extents: Vec3::new(
            (config.flipper_gap + DRAIN_MARGIN) * 0.5,
            DRAIN_HEIGHT * 0.5,
            DRAIN_DEPTH * 0.5,
        ),
    }
}

pub fn ball_spawn(config: &TableConfig) -> Vec3 {
    let z = -config.height * 0.8;
    Vec3::new(0.0, surface_height(config, z) + BALL_SPAWN_LIFT, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_counts(bumpers: i32, targets: i32, spinners: i32) -> TableConfig {
        TableConfig {
            bumper_count: bumpers,
            target_count: targets,
            spinner_count: spinners,
            ..Default::default()
        }
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "Expected {} to be close to {}",
            actual,
            expected
        );
    }

    mod counts {
        use super::*;

        #[test]
        fn bumpers_follow_config_up_to_cap() {
            for n in 1..=12 {
                let layout = generate(&config_with_counts(n, 8, 2));
                assert_eq!(layout.bumpers.len(), (n as usize).min(MAX_BUMPERS));
            }
        }

        #[test]
        fn degenerate_counts_clamp_to_one() {
            for n in [-5, 0, 1] {
                let layout = generate(&config_with_counts(n, n, n));
                assert_eq!(layout.bumpers.len(), 1);
                assert_eq!(layout.targets.len(), 1);
                assert_eq!(layout.spinners.len(), 1);
            }
        }

        #[test]
        fn targets_and_spinners_are_at_least_one() {
            for n in 0..=10 {
                let layout = generate(&config_with_counts(5, n, n));
                assert_eq!(layout.targets.len(), n.max(1) as usize);
                assert_eq!(layout.spinners.len(), n.max(1) as usize);
            }
        }

        #[test]
        fn single_placements_have_finite_positions() {
            let layout = generate(&config_with_counts(1, 1, 1));
            assert!(layout.bumpers[0].position.is_finite());
            assert!(layout.targets[0].position.is_finite());
            assert!(layout.spinners[0].position.is_finite());
        }
    }

    mod walls {
        use super::*;
        use crate::config::BallConfig;

        #[test]
        fn ball_cannot_pass_under_any_wall() {
            let diameter = BallConfig::default().radius * 2.0;
            for tilt_degrees in [0.0, 3.0, 6.5] {
                let config = TableConfig {
                    tilt_degrees,
                    ..Default::default()
                };
                for wall in walls(&config) {
                    let bottom = wall.position.y - wall.half_extents.y;
                    let top = wall.position.y + wall.half_extents.y;
                    for z in [
                        wall.position.z - wall.half_extents.z,
                        wall.position.z + wall.half_extents.z,
                    ] {
                        let surface = surface_height(&config, z);
                        let gap = bottom - surface;
                        assert!(gap < diameter, "{} gap {} at z={}", wall.name, gap, z);
                        assert!(gap <= 0.0, "{} floats above the playfield", wall.name);
                        assert!(top - surface >= config.wall_height - 1e-4);
                    }
                }
            }
        }

        #[test]
        fn front_segments_plus_gap_span_table_width() {
            for width in [3.0, 6.5, 10.0, 17.25, 40.0] {
                let config = TableConfig {
                    width,
                    ..Default::default()
                };
                let layout = generate(&config);
                let front: f32 = layout
                    .statics_of(StaticKind::FrontWall)
                    .map(|s| s.size().x)
                    .sum();
                assert_close(front + config.flipper_gap, width);
            }
        }

        #[test]
        fn front_segments_stay_inside_table_and_leave_gap_open() {
            let config = TableConfig::default();
            for wall in walls(&config)
                .iter()
                .filter(|w| w.kind == StaticKind::FrontWall)
            {
                let min_x = wall.position.x - wall.half_extents.x;
                let max_x = wall.position.x + wall.half_extents.x;
                assert!(min_x >= -config.width * 0.5 - 1e-4);
                assert!(max_x <= config.width * 0.5 + 1e-4);
                let gap = config.flipper_gap * 0.5;
                assert!(max_x <= -gap + 1e-4 || min_x >= gap - 1e-4);
            }
        }

        #[test]
        fn side_walls_run_full_length() {
            let config = TableConfig::default();
            let walls = walls(&config);
            for name in ["LeftWall", "RightWall"] {
                let wall = walls.iter().find(|w| w.name == name).unwrap();
                assert_close(wall.size().z, config.height);
            }
        }

        #[test]
        fn rim_sits_outside_walls() {
            let config = TableConfig::default();
            for rim in rim(&config) {
                let outside_x =
                    rim.position.x.abs() - rim.half_extents.x >= config.width * 0.5 - 1e-4;
                let outside_z = rim.position.z + rim.half_extents.z <= -config.height + 1e-4
                    || rim.position.z - rim.half_extents.z >= -1e-4;
                assert!(outside_x || outside_z, "{} overlaps the walls", rim.name);
                let top = rim.position.y + rim.half_extents.y;
                let front_z = rim.position.z + rim.half_extents.z;
                assert!(top - surface_height(&config, front_z) < config.wall_height);
            }
        }

        #[test]
        fn ceiling_is_invisible_and_above_walls() {
            let config = TableConfig::default();
            let layout = generate(&config);
            let ceilings: Vec<_> = layout.statics_of(StaticKind::Ceiling).collect();
            assert_eq!(ceilings.len(), 1);
            assert!(!ceilings[0].visible);
            assert!(ceilings[0].position.y > config.wall_height);
            assert!(layout.statics.iter().filter(|s| !s.visible).count() == 1);
        }
    }

    mod placement {
        use super::*;

        #[test]
        fn generation_is_deterministic() {
            let config = TableConfig::default();
            assert_eq!(generate(&config), generate(&config));
        }

        #[test]
        fn bumpers_are_mirror_symmetric() {
            let layout = generate(&TableConfig::default());
            let n = layout.bumpers.len();
            for i in 0..n {
                let a = layout.bumpers[i].position;
                let b = layout.bumpers[n - 1 - i].position;
                assert_close(a.x, -b.x);
                assert_close(a.z, b.z);
            }
        }

        #[test]
        fn ball_rolling_past_bumper_touches_it() {
            let config = TableConfig::default();
            let ball_radius = crate::config::BallConfig::default().radius;
            let reach = BUMPER_RADIUS + ball_radius;
            for bumper in bumpers(&config) {
                let p = bumper.position;
                let rest_y = surface_height(&config, p.z) + ball_radius;
                for offset in [Vec3::X, Vec3::NEG_X] {
                    let ball = Vec3::new(p.x, rest_y, p.z) + offset * reach;
                    assert!((ball - p).length() <= reach + 1e-4);
                }
                let grazing = Vec3::new(p.x + reach * 0.9, rest_y, p.z);
                assert!((grazing - p).length() < reach);
            }
        }

        #[test]
        fn bumpers_lie_on_arc_radius() {
            let config = TableConfig::default();
            let radius = config.width.min(config.height) * 0.2;
            let first = bumpers(&config)[0].position;
            assert_close(first.x, 20f32.to_radians().cos() * radius);
        }

        #[test]
        fn targets_span_symmetric_arc_near_back() {
            let config = TableConfig::default();
            let layout = generate(&config);
            let first = layout.targets.first().unwrap().position;
            let last = layout.targets.last().unwrap().position;
            assert_close(first.x, -last.x);
            assert_close(first.x, -(60f32.to_radians().sin() * config.width * 0.35));
            for t in &layout.targets {
                assert!(t.position.z < -config.height * 0.5);
            }
        }

        #[test]
        fn default_spinners_are_symmetric_pair() {
            let config = TableConfig::default();
            let layout = generate(&config);
            assert_eq!(layout.spinners.len(), 2);
            assert_close(layout.spinners[0].position.x, -config.width * 0.25);
            assert_close(layout.spinners[1].position.x, config.width * 0.25);
            assert_close(layout.spinners[0].position.z, layout.spinners[1].position.z);
        }

        #[test]
        fn odd_spinner_sits_on_centerline() {
            let layout = generate(&config_with_counts(5, 8, 3));
            assert_close(layout.spinners[2].position.x, 0.0);
        }

        #[test]
        fn flippers_are_mirrored() {
            let [left, right] = flippers(&TableConfig::default());
            assert_eq!(left.side, FlipperSide::Left);
            assert_eq!(right.side, FlipperSide::Right);
            assert_close(left.pivot.x, -right.pivot.x);
            assert_close(left.pivot.z, right.pivot.z);
            assert_close(left.paddle_center.x, -right.paddle_center.x);
            assert_close(left.paddle_center.z, right.paddle_center.z);
            assert_eq!(left.hinge_axis, -right.hinge_axis);
        }

        #[test]
        fn flipper_paddles_point_toward_center() {
            for f in flippers(&TableConfig::default()) {
                assert!(f.paddle_center.x.abs() < f.pivot.x.abs());
                assert!(f.paddle_center.z > f.pivot.z);
            }
        }

        #[test]
        fn positive_hinge_rotation_swings_tip_up_table() {
            for f in flippers(&TableConfig::default()) {
                let arm = f.paddle_center - f.pivot;
                let swung = Quat::from_axis_angle(f.hinge_axis, 10f32.to_radians()) * arm;
                assert!(swung.z < arm.z);
            }
        }

        #[test]
        fn drain_spans_flipper_gap_plus_margin() {
            let config = TableConfig::default();
            let drain = drain(&config);
            assert_close(drain.half_extents.x * 2.0, config.flipper_gap + DRAIN_MARGIN);
            assert_close(drain.position.x, 0.0);
        }

        #[test]
        fn ball_between_flipper_tips_is_inside_drain() {
            let config = TableConfig::default();
            let drain = drain(&config);
            let z = -0.9;
            let ball = Vec3::new(0.0, surface_height(&config, z) + 0.15, z);
            assert!(drain.contains(ball));
        }

        #[test]
        fn spawn_point_is_outside_drain() {
            let config = TableConfig::default();
            assert!(!drain(&config).contains(ball_spawn(&config)));
        }

        #[test]
        fn playfield_slopes_down_toward_flippers() {
            let config = TableConfig::default();
            assert!(surface_height(&config, 0.0) < surface_height(&config, -config.height));
            assert_close(surface_height(&config, -config.height * 0.5), 0.0);
        }
    }

    #[test]
    fn arc_t_guards_single_placement() {
        assert_eq!(arc_t(0, 1), 0.5);
        assert_eq!(arc_t(0, 0), 0.5);
        assert_eq!(arc_t(0, 3), 0.0);
        assert_eq!(arc_t(2, 3), 1.0);
    }
}
