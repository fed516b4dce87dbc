use anyhow::Result;
use clap::Parser;

use sidedock::cli::{CliArgs, OutputFormat};
use sidedock::{DockConfig, DockWidget, Script};

fn main() -> Result<()> {
    sidedock::tracing::init();

    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => DockConfig::load_from(path),
        None => DockConfig::load(),
    };
    if let Some(geometry) = args.geometry().map_err(|e| anyhow::anyhow!(e))? {
        config.window = geometry;
    }

    let source = std::fs::read_to_string(&args.script)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.script.display(), e))?;
    let script = if args.script_is_json() {
        Script::from_json(&source)?
    } else {
        Script::from_yaml(&source)?
    };

    let mut dock = DockWidget::new(config);
    let cmds = script.run(&mut dock);
    tracing::info!(
        steps = script.steps.len(),
        cmds = cmds.len(),
        widgets = dock.len(),
        "script replayed"
    );

    let state = dock.snapshot();
    let output = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&state)
            .map_err(|e| anyhow::anyhow!("Failed to serialize snapshot: {}", e))?,
        OutputFormat::Json => serde_json::to_string_pretty(&state)
            .map_err(|e| anyhow::anyhow!("Failed to serialize snapshot: {}", e))?,
    };
    println!("{}", output);
    Ok(())
}
