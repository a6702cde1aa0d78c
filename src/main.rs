//! SERPENTINE - CLI Entry Point
//!
//! Headless runner for the snake steering simulation.

use clap::{Parser, Subcommand};
use serpentine::{benchmark, Config, World};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "serpentine")]
#[command(version)]
#[command(about = "Autonomous snake steering simulation with trail-based avoidance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10000")]
        ticks: u64,

        /// Output directory for stats history
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of ticks
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Number of snakes
        #[arg(short, long, default_value = "50")]
        population: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            output,
            seed,
            quiet,
        } => run_simulation(config, ticks, output, seed, quiet),

        Commands::Benchmark { ticks, population } => run_benchmark(ticks, population),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    config_path: PathBuf,
    ticks: u64,
    output: PathBuf,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    // Create output directory
    std::fs::create_dir_all(&output)?;

    // Create world
    let mut world = if let Some(s) = seed {
        println!("Using seed: {}", s);
        World::new_with_seed(config.clone(), s)
    } else {
        World::new(config.clone())
    };

    println!("Starting simulation");
    println!("  Snakes: {}", world.population());
    println!("  Apples: {}", world.apples.len());
    println!(
        "  Arena: {}x{}",
        config.arena.width, config.arena.height
    );
    println!("  Ticks: {}", ticks);
    println!();

    let start = Instant::now();
    let stats_interval = config.logging.stats_interval;

    for i in 0..ticks {
        world.step();

        // Stats output
        if !quiet && i % stats_interval == 0 {
            println!("{}", world.stats.summary());
        }

        // Everything decayed away; nothing left to simulate
        if world.is_extinct() {
            println!("\nAll snakes gone at tick {}", world.time);
            break;
        }
    }

    let elapsed = start.elapsed();
    let ticks_per_sec = world.time as f64 / elapsed.as_secs_f64();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", world.time);
    println!("Speed: {:.1} ticks/s", ticks_per_sec);
    println!("Final population: {}", world.population());
    println!("Apples eaten: {}", world.stats.apples_eaten);

    // Save stats history
    let stats_path = output.join("stats_history.json");
    world
        .stats_history
        .save(stats_path.to_string_lossy().as_ref())?;
    println!("Stats history: {:?}", stats_path);

    Ok(())
}

fn run_benchmark(ticks: u64, population: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SERPENTINE Benchmark ===");
    println!("Ticks: {}", ticks);
    println!("Snakes: {}", population);
    println!();

    let result = benchmark(ticks, population);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
