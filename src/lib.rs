//! # Shapekit
//!
//! A polymorphic 2D shape geometry model for vector-graphics canvases:
//! - Axis-aligned and rotated bounds
//! - Rotation-aware hit testing against points, segments and brushes
//! - Connector binding anchors that survive moves and resizes
//! - Resize and handle-drag transforms with flip tracking
//! - A change-tracked snapshot cache for persistence
//!
//! ## Architecture
//!
//! Shapekit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Points, bounds, intersection routines, errors
//! 2. **shapekit-shapes** - The shape model, built-in kinds and registry
//! 3. **shapekit-settings** - Configuration files
//! 4. **shapekit** - Logging setup and the `shapekit` command line tool

pub mod cli;

pub use shapekit_core::{Bounds, BoundsSide, Error, Point, Result, ShapeError, BINDING_DISTANCE};
pub use shapekit_settings::{Config, ConfigError, SettingsError};
pub use shapekit_shapes::{
    BindingPoint, DisplayOptions, Handle, HandleChange, PropsPatch, ResetBoundsInfo, ResizeInfo,
    ResizeStartInfo, Shape, ShapeCapabilities, ShapeKind, ShapeProps, ShapeRegistry,
    ShapeSnapshot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support
/// - `default_level` when RUST_LOG is unset or invalid
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level: LevelFilter = default_level
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid log level: {}", default_level))?;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
