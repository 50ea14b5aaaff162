use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};

use orbit_sim::io::{csv, json};
use orbit_sim::sim::{self, linspace};
use orbit_sim::vehicle::{presets, ShipParameters};
use orbit_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "orbit-sim", version, about = "Simulate where a ship's orbit actually settles")]
struct Cli {
    /// TOML file with integrator settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the iteration cap
    #[arg(long, global = true)]
    max_iterations: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a single commanded radius
    Run {
        #[command(flatten)]
        ship: ShipArgs,

        /// Commanded orbit radius (m)
        #[arg(short, long)]
        radius: f64,

        /// Write the per-step trajectory to this CSV file
        #[arg(long)]
        trajectory: Option<PathBuf>,

        /// Write the result as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Simulate evenly spaced commanded radii
    Sweep {
        #[command(flatten)]
        ship: ShipArgs,

        /// First commanded radius (m)
        #[arg(long)]
        start: f64,

        /// Last commanded radius (m)
        #[arg(long)]
        end: f64,

        /// Number of radii
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Write the sweep table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the sweep as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// List preset ships
    Presets,
}

#[derive(Args, Debug)]
struct ShipArgs {
    /// Start from a preset ship
    #[arg(long)]
    preset: Option<String>,

    /// Maximum speed (m/s)
    #[arg(long)]
    max_speed: Option<f64>,

    /// Mass (Mg)
    #[arg(long)]
    mass: Option<f64>,

    /// Agility multiplier
    #[arg(long)]
    agility: Option<f64>,

    /// Fraction of full thrust, (0, 1]
    #[arg(long, default_value_t = 1.0)]
    throttle: f64,
}

impl ShipArgs {
    /// Preset values first, explicit flags override them.
    fn resolve(&self, radius: f64) -> Result<ShipParameters> {
        let base = match &self.preset {
            Some(name) => Some(
                presets::by_name(name).ok_or_else(|| anyhow!("unknown preset {name:?}"))?,
            ),
            None => None,
        };
        let pick = |flag: Option<f64>, from_preset: Option<f64>, what: &str| {
            flag.or(from_preset)
                .ok_or_else(|| anyhow!("--{what} is required without --preset"))
        };

        let ship = ShipParameters::new(
            pick(self.max_speed, base.map(|b| b.max_speed), "max-speed")?,
            pick(self.mass, base.map(|b| b.mass), "mass")?,
            pick(self.agility, base.map(|b| b.agility), "agility")?,
            radius,
        )
        .with_throttle(self.throttle);
        ship.validate()?;
        Ok(ship)
    }
}

fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => orbit_sim::io::load_config(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(n) = cli.max_iterations {
        config.max_iterations = n;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("orbit_sim=info"))
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match &cli.command {
        Command::Run { ship, radius, trajectory, json: json_path } => {
            let ship = ship.resolve(*radius)?;
            config.record_history |= trajectory.is_some();
            let mut controller = orbit_sim::gnc::OrbitController::new();
            let run = sim::simulate_with(&ship, &config, &mut controller)?;
            print_run(&ship, &run.result);

            if let Some(path) = trajectory {
                csv::write_trajectory_file(path, &run.trajectory)
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("wrote {} states to {}", run.trajectory.len(), path.display());
            }
            if let Some(path) = json_path {
                let report = json::RunReport { ship: &ship, config: &config, result: &run.result };
                json::write_report_file(path, &report)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Command::Sweep { ship, start, end, count, csv: csv_path, json: json_path } => {
            let ship = ship.resolve(*start)?;
            let radii = linspace(*start, *end, *count);
            let rows = sim::sweep(&ship, &radii, &config)?;
            print_sweep(&ship, &rows);

            if let Some(path) = csv_path {
                csv::write_sweep_file(path, &rows)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            if let Some(path) = json_path {
                let report = json::SweepReport { ship: &ship, config: &config, rows: &rows };
                json::write_report_file(path, &report)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Command::Presets => {
            for name in presets::NAMES {
                if let Some(p) = presets::by_name(name) {
                    println!(
                        "  {:<12} max_speed={:>7.1} m/s  mass={:>7.3} Mg  agility={:.3}",
                        name, p.max_speed, p.mass, p.agility
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_ship(ship: &ShipParameters) {
    let d = ship.derived();
    println!("  Ship");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max speed:     {:>8.1} m/s   Mass:         {:>8.3} Mg",
        ship.max_speed, ship.mass
    );
    println!(
        "  Agility:       {:>8.3}       Throttle:     {:>8.2}",
        ship.agility, ship.throttle
    );
    println!(
        "  Max force:     {:>8.3}       Top speed:    {:>8.1} m/s",
        d.max_force, d.max_speed
    );
    println!();
}

fn print_run(ship: &ShipParameters, r: &orbit_sim::OrbitResult) {
    println!();
    println!("====================================================================");
    println!("  ORBIT SIMULATION — commanded radius {:.0} m", ship.commanded_radius);
    println!("====================================================================");
    println!();
    print_ship(ship);
    println!("  Stable Orbit");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Radius:        {:>10.2} m   ({:+.2} m from commanded)",
        r.stable_radius,
        r.stable_radius - ship.commanded_radius
    );
    println!("  Speed:         {:>10.2} m/s", r.stable_speed);
    println!("  Angular vel:   {:>10.6} rad/s", r.angular_velocity);
    println!("  Iterations:    {:>10}", r.iterations);
    println!();
}

fn print_sweep(ship: &ShipParameters, rows: &[sim::SweepRow]) {
    println!();
    println!("====================================================================");
    println!("  ORBIT SWEEP — {} radii", rows.len());
    println!("====================================================================");
    println!();
    print_ship(ship);
    println!(
        "  {:>10}  {:>10}  {:>9}  {:>9}  {:>10}",
        "cmd (m)", "actual (m)", "diff (m)", "v (m/s)", "w (rad/s)"
    );
    println!("  {}", "─".repeat(56));
    for r in rows {
        println!(
            "  {:>10.1}  {:>10.1}  {:>9.1}  {:>9.1}  {:>10.6}",
            r.prescribed_radius, r.actual_radius, r.difference, r.speed, r.angular_velocity
        );
    }
    println!();
}
