use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use rosette::cli::Args;
use rosette::config::Config;
use rosette::diagram::RoseDiagram;
use rosette::display::{self, DisplayMode};
use rosette::input;
use rosette::renderer::{self, styles::DiagramStyle};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rosette=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut command = Args::command();
        clap_complete::generate(shell, &mut command, "rosette", &mut std::io::stdout());
        return Ok(());
    }

    if args.init_config {
        let path = Config::init_default_config()?;
        println!("Wrote config template to {}", path.display());
        return Ok(());
    }

    // Load config, CLI flags take priority
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args)?;

    let mut angles = input::parse_angles(&args.angles.join(" "));
    if let Some(path) = &args.file {
        angles.extend(input::read_angles(path)?);
    }
    if angles.is_empty() {
        bail!("No angles given. Pass them as arguments or with --file");
    }

    let options = config.diagram.options()?;
    debug!("Diagram options: {:?}", options);
    let diagram = RoseDiagram::build(&angles, &options)?;
    info!(
        "Binned {} of {} angles into {} sectors (mode {})",
        diagram.counted(),
        diagram.sample_count,
        diagram.sectors.len(),
        diagram.mode
    );

    match config.display.view {
        DisplayMode::Summary => {
            print!(
                "{}",
                display::summary::format_summary(&diagram, config.display.show_sectors)
            );
        }
        DisplayMode::Terminal => {
            let style = DiagramStyle::from_config(&config.style);
            let canvas = renderer::render_diagram(&diagram, style);
            display::terminal::run(&diagram, &canvas)?;
        }
    }

    Ok(())
}
