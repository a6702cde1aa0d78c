//! Configuration for the simulation.
//!
//! Supports YAML configuration files with sensible defaults. Units are
//! pixels and milliseconds, with a tick delta of one display frame.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub arena: ArenaConfig,
    pub snakes: SnakeConfig,
    pub steering: SteeringConfig,
    pub apples: AppleConfig,
    pub logging: LoggingConfig,
}

/// Arena and tick scheduling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Arena width
    pub width: f64,
    /// Arena height
    pub height: f64,
    /// Delta time per tick (ms)
    pub dt: f64,
    /// Interval between wander-point refreshes (ms)
    pub wander_interval: f64,
    /// Spawn replacement snakes to keep the population topped up
    pub respawn_snakes: bool,
}

/// Per-snake tunables applied at spawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeConfig {
    /// Number of snakes at start
    pub count: usize,
    /// Movement speed (distance per ms)
    pub speed: f64,
    /// Body radius at the head
    pub size: f64,
    /// Maximum heading change (radians per ms)
    pub turn_rate: f64,
    /// Maximum trail length before trimming
    pub max_length: f64,
}

/// Steering policy weights and flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteeringConfig {
    /// Magnitude of the attraction toward the target
    pub goal_weight: f64,
    /// Numerator of the per-threat repulsion weight
    pub avoid_weight: f64,
    /// Exponent applied to the threat distance
    pub avoid_power: f64,
    /// Apples closer than this are ignored as goals
    pub min_apple_dist: f64,
    /// Include the four arena walls as synthetic repulsors
    pub include_walls: bool,
    /// Kill a snake whose head touches a trail segment
    pub lethal_collisions: bool,
    /// Record decomposed steering forces each tick for debug display
    pub debug_forces: bool,
}

/// Apple spawning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppleConfig {
    /// Apples kept on the field
    pub count: usize,
    /// Apple radius
    pub size: f64,
    /// Trail length gained per apple eaten
    pub grow_length: f64,
}

/// Logging and stats configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Ticks between stats snapshots
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            snakes: SnakeConfig::default(),
            steering: SteeringConfig::default(),
            apples: AppleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            dt: 16.7,
            wander_interval: 5000.0,
            respawn_snakes: false,
        }
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            count: 6,
            speed: 0.2,
            size: 10.0,
            turn_rate: 0.005,
            max_length: 100.0,
        }
    }
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            goal_weight: 1.0,
            avoid_weight: 100.0,
            avoid_power: 1.0,
            min_apple_dist: 20.0,
            include_walls: true,
            lethal_collisions: true,
            debug_forces: false,
        }
    }
}

impl Default for AppleConfig {
    fn default() -> Self {
        Self {
            count: 12,
            size: 10.0,
            grow_length: 20.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 60,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err("arena dimensions must be positive".to_string());
        }
        if self.arena.dt <= 0.0 {
            return Err("dt must be positive".to_string());
        }
        if self.snakes.count == 0 {
            return Err("snake count must be > 0".to_string());
        }
        if self.snakes.speed <= 0.0 || self.snakes.size <= 0.0 {
            return Err("snake speed and size must be positive".to_string());
        }
        if self.snakes.turn_rate <= 0.0 {
            return Err("turn_rate must be positive".to_string());
        }
        if self.snakes.max_length <= 0.0 {
            return Err("max_length must be positive".to_string());
        }
        if self.apples.size <= 0.0 {
            return Err("apple size must be positive".to_string());
        }
        Ok(())
    }
}
