//! The `shapekit` command line tool.
//!
//! Reads a JSON array of shape records and reports geometry for each shape.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use shapekit_core::{Bounds, Point};
use shapekit_settings::Config;
use shapekit_shapes::{Shape, ShapeRegistry};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::init_logging;

#[derive(Parser, Debug)]
#[command(name = "shapekit", version, about = "Inspect and hit-test shape documents")]
pub struct Args {
    /// Config file (.toml or .json); defaults to the platform config location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print bounds, rotated bounds, center and revision for every shape
    Inspect {
        /// JSON file holding an array of shape records
        file: PathBuf,
    },
    /// List the shapes hit by a point
    Hit {
        /// JSON file holding an array of shape records
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    init_logging(&config.logging.level)?;

    let registry = ShapeRegistry::default().with_binding_distance(config.geometry.binding_distance);
    let output = match &args.command {
        Command::Inspect { file } => {
            let shapes = load_shapes(&registry, file)?;
            render(&shapes.iter().collect::<Vec<_>>(), args.json)
        }
        Command::Hit { file, x, y } => {
            let shapes = load_shapes(&registry, file)?;
            let hits = shapes_hit(&shapes, &Point::new(*x, *y));
            info!(total = shapes.len(), hit = hits.len(), "hit test complete");
            render(&hits, args.json)
        }
    };
    println!("{}", output);
    Ok(())
}

/// Reads and rehydrates a document of shape records.
pub fn load_shapes(registry: &ShapeRegistry, path: &Path) -> Result<Vec<Shape>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    registry
        .load_document(&content)
        .with_context(|| format!("failed to load shapes from {}", path.display()))
}

/// Shapes whose outline contains `point`, in document order.
pub fn shapes_hit<'a>(shapes: &'a [Shape], point: &Point) -> Vec<&'a Shape> {
    shapes.iter().filter(|s| s.hit_test_point(point)).collect()
}

fn render(shapes: &[&Shape], as_json: bool) -> String {
    if as_json {
        let report: Vec<Value> = shapes.iter().map(|s| describe_json(s)).collect();
        Value::Array(report).to_string()
    } else {
        shapes
            .iter()
            .map(|s| describe(s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn fmt_bounds(b: &Bounds) -> String {
    format!(
        "({:.2}, {:.2})-({:.2}, {:.2})",
        b.min_x, b.min_y, b.max_x, b.max_y
    )
}

/// One line of text describing a shape's geometry.
pub fn describe(shape: &Shape) -> String {
    let center = shape.center();
    format!(
        "{} [{}] bounds={} rotated={} center=({:.2}, {:.2}) revision={}",
        shape.id(),
        shape.type_name(),
        fmt_bounds(&shape.bounds()),
        fmt_bounds(&shape.rotated_bounds()),
        center.x,
        center.y,
        shape.revision()
    )
}

pub fn describe_json(shape: &Shape) -> Value {
    json!({
        "id": shape.id(),
        "type": shape.type_name(),
        "bounds": shape.bounds(),
        "rotatedBounds": shape.rotated_bounds(),
        "center": shape.center(),
        "revision": shape.revision(),
    })
}
