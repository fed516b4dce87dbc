//! Command-line argument parsing for the scenario replayer
//!
//! Supports:
//! - Replaying a YAML or JSON scenario script
//! - Printing the resulting snapshot as YAML or JSON
//! - Overriding the config file and the dock geometry

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::geometry::Rect;

/// Replay docking scenarios and print the resulting layout
#[derive(Parser, Debug)]
#[command(
    name = "sidedock",
    version,
    about = "Replay docking scenarios and print the resulting layout"
)]
pub struct CliArgs {
    /// Scenario script (`.yaml`, `.yml` or `.json`)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Snapshot output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Config file to use instead of the user config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dock size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl CliArgs {
    /// Whether the script should be parsed as JSON
    pub fn script_is_json(&self) -> bool {
        self.script
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    /// Parse `--size` into a dock rectangle at the origin
    pub fn geometry(&self) -> Result<Option<Rect>, String> {
        let Some(size) = &self.size else {
            return Ok(None);
        };
        let (w, h) = size
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Invalid size '{}', expected WIDTHxHEIGHT", size))?;
        let width: f32 = w
            .trim()
            .parse()
            .map_err(|_| format!("Invalid width '{}'", w))?;
        let height: f32 = h
            .trim()
            .parse()
            .map_err(|_| format!("Invalid height '{}'", h))?;
        if width <= 0.0 || height <= 0.0 {
            return Err(format!("Size must be positive, got {}x{}", width, height));
        }
        Ok(Some(Rect::new(0.0, 0.0, width, height)))
    }
}
