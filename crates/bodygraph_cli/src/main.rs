use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bodygraph_base::{
    Channel, SymbolicUnit, center_of_gate, channels_of_gate, gate_name, gate_start_longitude,
    map_longitude, opposite_gate,
};
use bodygraph_chart::{
    ChartBody, ChartConfig, ChartInput, ChartResult, GeoLocation, Origin, build_activations,
    compute_chart,
};
use bodygraph_ephem::{AnalyticEphemeris, EphemerisConfig, NodeMode};
use bodygraph_search::{DesignConfig, DesignInstant, solve_design_instant};
use bodygraph_time::UtcTime;

#[derive(Parser)]
#[command(name = "bodygraph", about = "Bodygraph chart calculator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum NodeArg {
    Mean,
    True,
}

impl From<NodeArg> for NodeMode {
    fn from(n: NodeArg) -> Self {
        match n {
            NodeArg::Mean => NodeMode::Mean,
            NodeArg::True => NodeMode::True,
        }
    }
}

#[derive(clap::Args, Clone, Copy)]
struct SolverArgs {
    /// Lunar node model
    #[arg(long, value_enum, default_value = "true")]
    node: NodeArg,
    /// Design search iteration cap
    #[arg(long, default_value_t = 50)]
    max_iterations: u32,
    /// Design search tolerance in degrees
    #[arg(long, default_value_t = 1e-7)]
    tolerance: f64,
}

impl SolverArgs {
    fn ephemeris(&self) -> Result<AnalyticEphemeris> {
        let config = EphemerisConfig {
            node_mode: self.node.into(),
            ..EphemerisConfig::default()
        };
        AnalyticEphemeris::new(config).context("invalid ephemeris configuration")
    }

    fn design_config(&self) -> DesignConfig {
        DesignConfig {
            max_iterations: self.max_iterations,
            tolerance_deg: self.tolerance,
            ..DesignConfig::standard()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Symbolic unit (gate.line.color.tone.base) of an ecliptic longitude
    Gate {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Longitudes and units of all 13 chart bodies at an instant
    Positions {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve the design instant for a birth instant
    Design {
        /// UTC birth datetime (YYYY-MM-DDThh:mm[:ss]Z)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Full chart for a birth date, time and place
    Chart {
        /// Local birth datetime (YYYY-MM-DDThh:mm[:ss]; a trailing Z needs offset +00:00)
        #[arg(long)]
        date: String,
        /// Offset of the local time from UTC (+hh:mm / -hh:mm)
        #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
        utc_offset: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[command(flatten)]
        solver: SolverArgs,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

/// Log to stderr so stdout stays clean for `--json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Local civil datetime plus a fixed offset → UTC instant.
fn parse_local(date: &str, offset: &str) -> Result<UtcTime> {
    let utc = UtcTime::parse_local(date, offset)
        .with_context(|| format!("invalid local datetime {date:?} at offset {offset:?}"))?;
    debug!(local = date, offset, utc = %utc, "birth time resolved");
    Ok(utc)
}

fn parse_utc(date: &str) -> Result<UtcTime> {
    date.parse::<UtcTime>()
        .with_context(|| format!("invalid UTC datetime {date:?}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct GateReport {
    longitude_deg: f64,
    unit: SymbolicUnit,
    gate_name: &'static str,
    center: &'static str,
    /// Where the gate's arc begins.
    gate_start_deg: Option<f64>,
    opposite_gate: Option<u8>,
    channels: Vec<&'static Channel>,
}

fn gate_report(lon: f64) -> GateReport {
    let unit = map_longitude(lon);
    GateReport {
        longitude_deg: lon,
        unit,
        gate_name: gate_name(unit.gate).unwrap_or("?"),
        center: center_of_gate(unit.gate).map_or("?", |c| c.name()),
        gate_start_deg: gate_start_longitude(unit.gate),
        opposite_gate: opposite_gate(unit.gate),
        channels: channels_of_gate(unit.gate).collect(),
    }
}

fn run_positions(date: &str, solver: SolverArgs, json: bool) -> Result<()> {
    let utc = parse_utc(date)?;
    let eph = solver.ephemeris()?;
    let acts = build_activations(&eph, utc.to_jd_ut(), Origin::Personality)
        .with_context(|| format!("positions at {utc}"))?;
    if json {
        return print_json(&acts);
    }
    println!("Positions at {utc} (JD {:.6})", utc.to_jd_ut());
    for a in &acts {
        println!("  {:<11} {:>10.5}°  {}", a.body.name(), a.longitude_deg, a.unit);
    }
    Ok(())
}

fn print_design(d: &DesignInstant, birth_jd: f64) {
    println!("Design instant: {} (JD {:.6})", d.utc, d.jd_ut);
    println!("  {:.4} days before birth", birth_jd - d.jd_ut);
    println!(
        "  Sun {:.7}° target {:.7}° residual {:.2e}° after {} iterations",
        d.sun_longitude_deg, d.target_longitude_deg, d.residual_deg, d.iterations
    );
}

fn run_design(date: &str, solver: SolverArgs, json: bool) -> Result<()> {
    let utc = parse_utc(date)?;
    let eph = solver.ephemeris()?;
    let birth_jd = utc.to_jd_ut();
    let design = solve_design_instant(&eph, birth_jd, &solver.design_config())
        .with_context(|| format!("design instant for {utc}"))?;
    if json {
        return print_json(&design);
    }
    print_design(&design, birth_jd);
    Ok(())
}

fn print_chart(chart: &ChartResult) {
    let c = &chart.classification;
    println!("Birth:   {} (JD {:.6})", chart.birth, chart.birth_jd_ut);
    println!(
        "Place:   {:.4}°, {:.4}°",
        chart.location.latitude_deg, chart.location.longitude_deg
    );
    print_design(&chart.design, chart.birth_jd_ut);
    println!();
    println!("Type:       {}", c.hd_type);
    println!("Strategy:   {}", c.strategy);
    println!("Authority:  {}", c.authority);
    println!("Profile:    {} ({})", c.profile, c.profile.name());
    println!("Definition: {}", c.definition);
    if let Some(cross) = &c.incarnation_cross {
        println!("Cross:      {cross}");
    }
    println!(
        "Variables:  digestion {:?}, environment {:?}, motivation {:?}, perspective {:?}",
        c.variables.digestion, c.variables.environment, c.variables.motivation, c.variables.perspective
    );

    println!();
    println!("{:<11} {:>14} {:>14}", "", "Personality", "Design");
    for &body in ChartBody::all() {
        let p = chart.activations.get(Origin::Personality, body);
        let d = chart.activations.get(Origin::Design, body);
        println!(
            "{:<11} {:>14} {:>14}",
            body.name(),
            p.unit.to_string(),
            d.unit.to_string()
        );
    }

    println!();
    println!("Centers:");
    for s in &chart.centers {
        let gates: Vec<String> = s.active_gates.iter().map(u8::to_string).collect();
        println!("  {:<13} {:<9} [{}]", s.center.name(), s.state.name(), gates.join(", "));
    }
    println!("Channels:");
    for c in chart.complete_channels() {
        println!("  {}", c.channel);
    }
    let hanging: Vec<String> = chart.hanging_gates.iter().map(u8::to_string).collect();
    println!("Hanging gates: {}", hanging.join(", "));
}

fn run_chart(
    date: &str,
    utc_offset: &str,
    lat: f64,
    lon: f64,
    solver: SolverArgs,
    json: bool,
) -> Result<()> {
    let birth = parse_local(date, utc_offset)?;
    let input = ChartInput::new(birth, GeoLocation::new(lat, lon));
    let config = ChartConfig {
        design: solver.design_config(),
    };
    let eph = solver.ephemeris()?;
    let chart = compute_chart(&eph, &input, &config).with_context(|| format!("chart for {birth}"))?;
    if json {
        return print_json(&chart);
    }
    print_chart(&chart);
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Gate { lon, json } => {
            if !lon.is_finite() {
                bail!("longitude must be finite");
            }
            let report = gate_report(lon);
            if json {
                return print_json(&report);
            }
            println!(
                "{} - Gate {} {} ({} center)",
                report.unit, report.unit.gate, report.gate_name, report.center
            );
            if let Some(start) = report.gate_start_deg {
                println!("  arc starts at {start:.3}°");
            }
            if let Some(opposite) = report.opposite_gate {
                println!("  opposite gate {opposite}");
            }
            for channel in &report.channels {
                println!("  channel {channel}");
            }
            Ok(())
        }
        Commands::Positions { date, solver, json } => run_positions(&date, solver, json),
        Commands::Design { date, solver, json } => run_design(&date, solver, json),
        Commands::Chart {
            date,
            utc_offset,
            lat,
            lon,
            solver,
            json,
        } => run_chart(&date, &utc_offset, lat, lon, solver, json),
    }
}
