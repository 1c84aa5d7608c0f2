use crate::app::cli::Cli;
use crate::app::error::AppError;
use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, Preset>,
}

/// A named option bundle from the user presets file. Unset fields fall
/// through to the CLI value or the default.
#[derive(Deserialize, Debug, Clone, Default)]
struct Preset {
    sprite: Option<bool>,
    icons: Option<bool>,
    id: Option<bool>,
    remove_size: Option<bool>,
    remove_style: Option<bool>,
    colors: Option<bool>,
    stroke: Option<String>,
    fill: Option<String>,
    stroke_width: Option<String>,
    force_stroke: Option<bool>,
    force_fill: Option<bool>,
    exclude: Option<Vec<String>>,
}

fn load_presets_file() -> Result<HashMap<String, Preset>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home
        .join(".config")
        .join("icon-sprite")
        .join("presets.toml");

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read presets at {:?}", config_path))?;

    parse_presets(&content)
}

fn parse_presets(content: &str) -> Result<HashMap<String, Preset>> {
    let parsed: PresetsFile = toml::from_str(content).context("Failed to parse presets.toml")?;
    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let preset = match cli.preset.as_deref() {
        Some(name) => {
            let presets = load_presets_file()?;
            presets
                .get(name)
                .cloned()
                .ok_or_else(|| AppError::UnknownPreset(name.to_string()))?
        }
        None => Preset::default(),
    };

    let merged = merge(cli, preset);
    let config = if merged.optimize {
        apply_optimize(merged.resolved)
    } else {
        merged.resolved
    };

    validate(&config)?;
    Ok(config)
}

/// Carries the --optimize flag alongside the merged options so the
/// bundle can be applied after the preset merge.
struct Merged {
    optimize: bool,
    resolved: RuntimeConfig,
}

/// CLI values win over preset values. Boolean flags only enable, so the
/// merge is a plain OR; optional strings prefer the CLI side.
fn merge(cli: Cli, preset: Preset) -> Merged {
    Merged {
        optimize: cli.optimize,
        resolved: RuntimeConfig {
            input: cli.input,
            output: cli.output,
            debug: cli.debug,
            sprite: cli.sprite || preset.sprite.unwrap_or(false),
            icons: cli.icons || preset.icons.unwrap_or(false),
            id: cli.id || preset.id.unwrap_or(false),
            remove_size: cli.remove_size || preset.remove_size.unwrap_or(false),
            remove_style: cli.remove_style || preset.remove_style.unwrap_or(false),
            colors: cli.colors || preset.colors.unwrap_or(false),
            stroke: cli.stroke.or(preset.stroke),
            fill: cli.fill.or(preset.fill),
            stroke_width: cli.stroke_width.or(preset.stroke_width),
            force_stroke: cli.force_stroke || preset.force_stroke.unwrap_or(false),
            force_fill: cli.force_fill || preset.force_fill.unwrap_or(false),
            exclude: merge_vecs(preset.exclude, cli.exclude),
        },
    }
}

/// The recommended bundle: themeable colors, no hardcoded sizes, ids for
/// fragment references. The caller keeps the final say on what gets
/// generated, so debug, sprite and icons pass through untouched.
fn apply_optimize(config: RuntimeConfig) -> RuntimeConfig {
    RuntimeConfig {
        stroke: Some("currentColor".to_string()),
        fill: Some("currentColor".to_string()),
        id: true,
        remove_size: true,
        colors: true,
        remove_style: true,
        stroke_width: None,
        force_stroke: false,
        force_fill: false,
        ..config
    }
}

fn validate(config: &RuntimeConfig) -> Result<(), AppError> {
    if !config.sprite && !config.icons {
        return Err(AppError::InvalidFlags(
            "please select at least one option: --sprite or --icons",
        ));
    }
    if config.stroke.is_some() && !config.colors {
        return Err(AppError::InvalidFlags(
            "please enable --colors to use --stroke",
        ));
    }
    if config.fill.is_some() && !config.colors {
        return Err(AppError::InvalidFlags(
            "please enable --colors to use --fill",
        ));
    }
    Ok(())
}
