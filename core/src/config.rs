use serde::{Deserialize, Serialize};

/// Table dimensions and obstacle counts. Fixed once a layout is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    pub width: f32,
    pub height: f32,
    pub wall_height: f32,
    pub wall_thickness: f32,
    pub bumper_count: i32,
    pub target_count: i32,
    pub spinner_count: i32,
    /// Opening in the front wall that the flippers guard
    pub flipper_gap: f32,
    /// Playfield slope toward the flipper end (degrees)
    pub tilt_degrees: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 15.0,
            wall_height: 2.0,
            wall_thickness: 0.5,
            bumper_count: 5,
            target_count: 8,
            spinner_count: 2,
            flipper_gap: 2.0,
            tilt_degrees: 3.0,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err("width must be finite and > 0".to_string());
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err("height must be finite and > 0".to_string());
        }
        if !self.wall_height.is_finite() || self.wall_height <= 0.0 {
            return Err("wall_height must be finite and > 0".to_string());
        }
        if !self.wall_thickness.is_finite() || self.wall_thickness <= 0.0 {
            return Err("wall_thickness must be finite and > 0".to_string());
        }
        if !self.flipper_gap.is_finite() || self.flipper_gap <= 0.0 {
            return Err("flipper_gap must be finite and > 0".to_string());
        }
        if self.flipper_gap >= self.width {
            return Err("flipper_gap must be smaller than width".to_string());
        }
        if !self.tilt_degrees.is_finite() || self.tilt_degrees.abs() >= 45.0 {
            return Err("tilt_degrees must be finite and within (-45, 45)".to_string());
        }
        Ok(())
    }
}

/// Ball body and steering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BallConfig {
    pub mass: f32,
    pub drag: f32,
    pub angular_drag: f32,
    pub radius: f32,
    pub move_force: f32,
    /// Steering is withheld entirely at or above this speed
    pub max_speed: f32,
    pub launch_force: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            mass: 0.5,
            drag: 0.0,
            angular_drag: 0.05,
            radius: 0.15,
            move_force: 15.0,
            max_speed: 10.0,
            launch_force: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BumperConfig {
    pub bounce_force: f32,
    pub score_value: u64,
}

impl Default for BumperConfig {
    fn default() -> Self {
        Self {
            bounce_force: 8.0,
            score_value: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpinnerConfig {
    pub spin_torque: f32,
    pub reaction_force: f32,
    pub score_per_hit: u64,
    pub mass: f32,
    /// Opposes the idle torque; top spin is `torque / (inertia * drag)`
    pub angular_drag: f32,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            spin_torque: 50.0,
            reaction_force: 5.0,
            score_per_hit: 10,
            mass: 2.0,
            angular_drag: 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetConfig {
    pub score_value: u64,
    /// Seconds a hit target stays disabled
    pub respawn_time: f32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            score_value: 50,
            respawn_time: 3.0,
        }
    }
}

/// Cosmetic coin behaviour layered on every target placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinConfig {
    pub enabled: bool,
    pub hit_scale: f32,
    pub hit_duration: f32,
    /// Degrees per second
    pub spin_speed: f32,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hit_scale: 1.3,
            hit_duration: 0.18,
            spin_speed: 120.0,
        }
    }
}

/// Hinge motor tuning. Speeds and limits are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlipperConfig {
    pub motor_strength: f32,
    pub active_speed: f32,
    pub rest_speed: f32,
    pub min_angle: f32,
    pub max_angle: f32,
    pub mass: f32,
    pub angular_drag: f32,
}

impl Default for FlipperConfig {
    fn default() -> Self {
        Self {
            motor_strength: 800.0,
            active_speed: 1000.0, // deg/s
            rest_speed: -200.0,   // deg/s
            min_angle: -20.0,
            max_angle: 60.0,
            mass: 2.0,
            angular_drag: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LauncherConfig {
    /// Seconds of holding needed for a full charge
    pub max_charge: f32,
    pub cooldown: f32,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            max_charge: 1.0,
            cooldown: 0.3,
        }
    }
}

/// Drain sequence timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Seconds between the drain trigger and the ball being destroyed
    pub destroy_delay: f32,
    /// Seconds between destruction and the replacement ball
    pub respawn_delay: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            destroy_delay: 0.5,
            respawn_delay: 1.0,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.destroy_delay.is_finite() || self.destroy_delay < 0.0 {
            return Err("destroy_delay must be finite and >= 0".to_string());
        }
        if !self.respawn_delay.is_finite() || self.respawn_delay < 0.0 {
            return Err("respawn_delay must be finite and >= 0".to_string());
        }
        Ok(())
    }
}

/// Everything a table needs at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub table: TableConfig,
    pub ball: BallConfig,
    pub bumper: BumperConfig,
    pub spinner: SpinnerConfig,
    pub target: TargetConfig,
    pub coin: CoinConfig,
    pub flipper: FlipperConfig,
    pub launcher: LauncherConfig,
    pub session: SessionConfig,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid config json: {}", e))
    }

    pub fn validate(&self) -> Result<(), String> {
        self.table.validate()?;
        self.session.validate()?;

        let ball = &self.ball;
        if !ball.mass.is_finite() || ball.mass <= 0.0 {
            return Err("ball.mass must be finite and > 0".to_string());
        }
        if !ball.radius.is_finite() || ball.radius <= 0.0 {
            return Err("ball.radius must be finite and > 0".to_string());
        }
        if !ball.max_speed.is_finite() || ball.max_speed < 0.0 {
            return Err("ball.max_speed must be finite and >= 0".to_string());
        }
        if !self.target.respawn_time.is_finite() || self.target.respawn_time < 0.0 {
            return Err("target.respawn_time must be finite and >= 0".to_string());
        }
        if !self.coin.hit_duration.is_finite() || self.coin.hit_duration <= 0.0 {
            return Err("coin.hit_duration must be finite and > 0".to_string());
        }
        if self.flipper.min_angle > self.flipper.max_angle {
            return Err("flipper.min_angle must be <= flipper.max_angle".to_string());
        }
        if !self.flipper.mass.is_finite() || self.flipper.mass <= 0.0 {
            return Err("flipper.mass must be finite and > 0".to_string());
        }
        if !self.spinner.mass.is_finite() || self.spinner.mass <= 0.0 {
            return Err("spinner.mass must be finite and > 0".to_string());
        }
        if !self.spinner.angular_drag.is_finite() || self.spinner.angular_drag <= 0.0 {
            return Err("spinner.angular_drag must be finite and > 0".to_string());
        }
        if !self.launcher.max_charge.is_finite() || self.launcher.max_charge <= 0.0 {
            return Err("launcher.max_charge must be finite and > 0".to_string());
        }
        Ok(())
    }
}
