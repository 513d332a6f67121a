use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;

use wirekit::{
    init_logging, CircuitRouter, Floorplan, ManhattanPlanner, Markup, Topology, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, DEFAULT_WIRE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlannerArg {
    /// Straight-line hops (reference policy)
    Direct,
    /// Orthogonal L-route hops
    Manhattan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TopologyArg {
    /// Each circuit starts at the previous target
    Chain,
    /// Every circuit starts at the panel
    Star,
}

/// Generate wiring circuits and an SVG preview from a floorplan document.
#[derive(Debug, Parser)]
#[command(name = "wirekit", version, about)]
struct Cli {
    /// Floorplan JSON document
    floorplan: PathBuf,

    /// Panel id to route from (defaults to the first panel)
    #[arg(long)]
    panel: Option<String>,

    /// Wire gauge label attached to every circuit
    #[arg(long, default_value = DEFAULT_WIRE)]
    wire: String,

    /// Hop planning policy
    #[arg(long, value_enum, default_value_t = PlannerArg::Direct)]
    planner: PlannerArg,

    /// Circuit run topology
    #[arg(long, value_enum, default_value_t = TopologyArg::Chain)]
    topology: TopologyArg,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Write the SVG preview here instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Also write the routed circuit list as JSON
    #[arg(long)]
    circuits_json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::debug!(
        version = wirekit::VERSION,
        build_date = wirekit::BUILD_DATE,
        "wirekit starting"
    );
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.floorplan)
        .with_context(|| format!("reading {}", cli.floorplan.display()))?;
    let plan = Floorplan::from_json(&json).context("parsing floorplan document")?;
    plan.validate().context("validating floorplan document")?;

    let panel = plan.routing_panel(cli.panel.as_deref())?;

    let mut router = CircuitRouter::new();
    if cli.planner == PlannerArg::Manhattan {
        router = router.with_planner(Box::new(ManhattanPlanner));
    }
    if cli.topology == TopologyArg::Star {
        router = router.with_topology(Topology::Star);
    }

    let targets = plan.symbol_ports();
    let circuits = router.route(panel.point, &targets, &cli.wire)?;
    let run_units: f64 = circuits.iter().map(|c| c.run_length()).sum();
    let run_mm = run_units * plan.scale * plan.units.to_millimeters();
    info!(
        panel = %panel.id,
        circuits = circuits.len(),
        wire_run_mm = run_mm,
        "routed floorplan"
    );

    if let Some(path) = &cli.circuits_json {
        let json = serde_json::to_string_pretty(&circuits)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }

    let markup = Markup::new(circuits, plan.symbols.clone());
    let svg = wirekit::render(&markup, cli.width, cli.height);
    match &cli.out {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            info!(out = %path.display(), "wrote SVG preview");
        }
        None => println!("{svg}"),
    }

    Ok(())
}
