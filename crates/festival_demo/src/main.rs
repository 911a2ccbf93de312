//! Festival demo driver
//!
//! Runs the motion core headlessly: simulated scroll sweeps over the
//! detail screen's parallax header, drag-and-release sessions on the
//! swipe-to-dismiss sheet, and catalog dumps.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod simulate;

use config::DemoConfig;
use festival_motion::ParallaxHeader;

#[derive(Parser)]
#[command(name = "festival-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless driver for the festival motion core", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a festival-demo.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the detail screen's scroll offset and print header frames
    Scroll {
        /// Starting scroll offset (positive = pulled down)
        #[arg(long, default_value_t = 120.0, allow_hyphen_values = true)]
        from: f32,

        /// Final scroll offset
        #[arg(long, default_value_t = -600.0, allow_hyphen_values = true)]
        to: f32,

        /// Offset decrement per frame
        #[arg(long, default_value_t = 40.0)]
        step: f32,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Drag the sheet to a translation, release it, settle
    Sheet {
        /// Drag translation at release, in pixels
        #[arg(long, default_value_t = 300.0)]
        translation: f32,

        /// Velocity-projected end translation (defaults to the
        /// translation itself)
        #[arg(long, allow_hyphen_values = true)]
        predicted: Option<f32>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the mock festival catalog
    Catalog {
        /// Filter titles by a search query
        #[arg(long)]
        query: Option<String>,

        /// Emit JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    match cli.command {
        Commands::Scroll {
            from,
            to,
            step,
            json,
        } => cmd_scroll(&config, from, to, step, json),
        Commands::Sheet {
            translation,
            predicted,
            json,
        } => cmd_sheet(&config, translation, predicted, json),
        Commands::Catalog { query, json } => cmd_catalog(query.as_deref(), json),
    }
}

fn cmd_scroll(config: &DemoConfig, from: f32, to: f32, step: f32, json: bool) -> Result<()> {
    let header = ParallaxHeader::new(config.header_geometry())?;
    let report = simulate::scroll_sweep(
        &header,
        config.viewport.width,
        config.viewport.height,
        from,
        to,
        step,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!(anchor = report.content_anchor, "header overlay anchor");
    println!(
        "{:>10}  {:>10}  {:>10}  {:>8}  {:>12}",
        "scroll_y", "offset", "height", "blur", "title_offset"
    );
    for frame in &report.frames {
        let title = frame
            .header
            .title_offset
            .map(|offset| format!("{offset:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>10.1}  {:>10.1}  {:>10.1}  {:>8.2}  {:>12}",
            frame.scroll_y, frame.header.offset, frame.header.height, frame.header.blur, title
        );
    }
    Ok(())
}

fn cmd_sheet(config: &DemoConfig, translation: f32, predicted: Option<f32>, json: bool) -> Result<()> {
    let sheet_config = config.sheet_config()?;
    let report = simulate::sheet_session(sheet_config, translation, predicted);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:>10}  {:>12}  {:>12}",
        "state", "translation", "scrim"
    );
    for frame in &report.frames {
        println!(
            "{:>10}  {:>12.1}  {:>12.2}",
            format!("{:?}", frame.state),
            frame.translation,
            frame.scrim_opacity
        );
    }
    println!(
        "release decision: {:?} (threshold {:.1}px)",
        report.decision,
        sheet_config.dismiss_threshold()
    );
    Ok(())
}

fn cmd_catalog(query: Option<&str>, json: bool) -> Result<()> {
    let catalog = festival_model::mock::catalog();
    let festivals = festival_model::search(&catalog, query.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&festivals)?);
        return Ok(());
    }

    let chips: Vec<_> = festival_model::FestivalCategory::all()
        .iter()
        .map(|category| category.title())
        .collect();
    println!("categories: {}", chips.join(" | "));
    println!();

    for festival in festivals {
        let detail = &festival.details[0];
        println!(
            "{:<36}  {:>8.2}  ({:.4}, {:.4})",
            festival.title, detail.price, detail.lat, detail.long
        );
    }
    Ok(())
}
