use pinball_core::physics::Surface;

pub const WINDOW_WIDTH: u32 = 960;
pub const WINDOW_HEIGHT: u32 = 720;

pub const PHYSICS_DT: f32 = 1.0 / 120.0;
pub const PHYSICS_SUBSTEPS: usize = 2;
pub const GRAVITY_Y: f32 = -9.81;

/// Velocity gain for the flipper hinge motor
pub const MOTOR_DAMPING: f32 = 50.0;

pub const CAMERA_OFFSET: bevy::prelude::Vec3 = bevy::prelude::Vec3::new(0.0, 10.0, 6.0);
pub const CAMERA_SMOOTH_SPEED: f32 = 5.0;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "PINBALL_CONFIG";

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x050510;
    pub const PLAYFIELD: u32 = 0x1b2436;
    pub const WALL: u32 = 0x4da6a6;
    pub const RIM: u32 = 0x2f6f6f;
    pub const RAMP: u32 = 0x6a5acd;
    pub const BUMPER: u32 = 0xff5c8a;
    pub const TARGET: u32 = 0xffd24d;
    pub const SPINNER: u32 = 0x44ff88;
    pub const FLIPPER: u32 = 0x88ccff;
    pub const BALL: u32 = 0xe0e0e0;
    pub const HUD: u32 = 0x4da6a6;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

pub fn surface_color(surface: Surface) -> u32 {
    match surface {
        Surface::Playfield => Colors::PLAYFIELD,
        Surface::Wall | Surface::LaneDivider => Colors::WALL,
        Surface::Rim => Colors::RIM,
        Surface::Ramp => Colors::RAMP,
        Surface::Bumper => Colors::BUMPER,
        Surface::Target => Colors::TARGET,
        Surface::Spinner => Colors::SPINNER,
        Surface::Flipper | Surface::FlipperPivot => Colors::FLIPPER,
        Surface::Ball => Colors::BALL,
        Surface::Ceiling | Surface::Drain => Colors::BACKGROUND,
    }
}

pub fn restitution(surface: Surface) -> f32 {
    match surface {
        Surface::Bumper => 0.8,
        Surface::Flipper => 0.3,
        Surface::Ball => 0.5,
        Surface::Playfield => 0.1,
        _ => 0.4,
    }
}

pub fn friction(surface: Surface) -> f32 {
    match surface {
        Surface::Flipper => 0.6,
        Surface::Ball => 0.3,
        _ => 0.2,
    }
}
