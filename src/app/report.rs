use crate::app::models::{RenameRecord, RuntimeConfig};
use crate::app::output::OutputWriter;

/// Aligned two-column dump of the effective configuration, shown when
/// --debug is on.
pub fn config_table(config: &RuntimeConfig) -> String {
    let rows = vec![
        ("input", config.input.display().to_string()),
        ("output", config.output.display().to_string()),
        ("debug", config.debug.to_string()),
        ("sprite", config.sprite.to_string()),
        ("icons", config.icons.to_string()),
        ("id", config.id.to_string()),
        ("remove-size", config.remove_size.to_string()),
        ("remove-style", config.remove_style.to_string()),
        ("colors", config.colors.to_string()),
        ("stroke", display_opt(&config.stroke)),
        ("fill", display_opt(&config.fill)),
        ("stroke-width", display_opt(&config.stroke_width)),
        ("force-stroke", config.force_stroke.to_string()),
        ("force-fill", config.force_fill.to_string()),
        ("exclude", config.exclude.join(", ")),
    ];

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    let mut table = String::new();
    for (key, value) in rows {
        table.push_str(&format!("{key:<width$}  {value}\n"));
    }
    table
}

/// Aligned input -> output listing of collision-forced renames.
pub fn rename_table(renames: &[RenameRecord]) -> String {
    let width = renames
        .iter()
        .map(|record| record.input.display().to_string().len())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    for record in renames {
        let input = record.input.display().to_string();
        table.push_str(&format!("{input:<width$}  ->  {}\n", record.output));
    }
    table
}

pub fn print_summary(writer: &OutputWriter, config: &RuntimeConfig, renames: &[RenameRecord]) {
    println!();
    println!("Output: {}", writer.output_dir().display());

    if config.sprite {
        println!("Sprite: {}", writer.sprite_path().display());
        println!("Sprite use example: {}", writer.example_path().display());
    }

    if !renames.is_empty() {
        log::warn!("duplicate names found, the following icons were renamed to avoid conflicts");
        print!("{}", rename_table(renames));
    }
}

fn display_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
