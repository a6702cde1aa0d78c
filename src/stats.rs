//! Statistics tracking for the simulation.

use crate::snake::Snake;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a simulation tick
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Current simulation tick
    pub time: u64,
    /// Snakes currently alive
    pub alive: usize,
    /// Snakes in their death-shrink phase
    pub dying: usize,
    /// Apples currently on the field
    pub apples: usize,
    /// Apples eaten since the start of the run
    pub apples_eaten: u64,
    /// Mean body length across alive snakes
    pub length_mean: f64,
    /// Longest body on the field
    pub length_max: f64,
    /// Snakes spawned this tick
    pub spawns: usize,
    /// Snakes killed this tick
    pub kills: usize,
    /// Snakes removed (fully decayed) this tick
    pub removals: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from current simulation state
    pub fn update(&mut self, snakes: &[Snake], apples: usize) {
        self.apples = apples;
        self.alive = snakes.iter().filter(|s| s.is_alive()).count();
        self.dying = snakes.len() - self.alive;

        if self.alive == 0 {
            self.length_mean = 0.0;
            self.length_max = 0.0;
        } else {
            let lengths: Vec<f64> = snakes
                .iter()
                .filter(|s| s.is_alive())
                .map(|s| s.current_length())
                .collect();
            self.length_mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
            self.length_max = lengths.iter().cloned().fold(0.0, f64::max);
        }
    }

    /// Format stats as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "[t={:>7}] alive={:<3} dying={:<3} apples={:<3} eaten={:<5} len_mean={:>6.1} len_max={:>6.1}",
            self.time,
            self.alive,
            self.dying,
            self.apples,
            self.apples_eaten,
            self.length_mean,
            self.length_max,
        )
    }
}

/// Recorded stats snapshots over a run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatsHistory {
    /// All recorded stats snapshots
    pub snapshots: Vec<Stats>,
    /// Recording interval (ticks)
    pub interval: u64,
}

impl StatsHistory {
    /// Create new history with recording interval
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval,
        }
    }

    /// Record a stats snapshot
    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// Get stats at a specific tick (approximate)
    pub fn get_at(&self, time: u64) -> Option<&Stats> {
        let index = (time / self.interval) as usize;
        self.snapshots.get(index)
    }

    /// Alive population over time
    pub fn population_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.time, s.alive)).collect()
    }

    /// Mean body length over time
    pub fn length_series(&self) -> Vec<(u64, f64)> {
        self.snapshots
            .iter()
            .map(|s| (s.time, s.length_mean))
            .collect()
    }

    /// Cumulative apples eaten over time
    pub fn apples_eaten_series(&self) -> Vec<(u64, u64)> {
        self.snapshots
            .iter()
            .map(|s| (s.time, s.apples_eaten))
            .collect()
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)
    }

    /// Load history from a JSON file
    pub fn load(path: &str) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
