use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::app::models::RuntimeConfig;

/// Accumulates per-icon symbol fragments inside the hidden-svg sprite
/// envelope, in processing order.
#[derive(Debug, Default)]
pub struct SpriteDocument {
    fragments: Vec<String>,
}

impl SpriteDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    pub fn finalize(&self) -> String {
        let mut doc = String::from("<svg width=\"0\" height=\"0\" style=\"display: none;\">\n");
        for fragment in &self.fragments {
            doc.push_str(fragment);
        }
        doc.push_str("\n</svg>");
        doc
    }
}

/// Owns the output directory lifecycle. Both the output root and the
/// icons subdirectory are wiped and recreated every run, so repeated
/// runs over unchanged input are byte-identical.
pub struct OutputWriter {
    output: PathBuf,
    icon_dir: PathBuf,
}

impl OutputWriter {
    pub fn prepare(config: &RuntimeConfig) -> Result<Self> {
        let output = config.output.clone();
        let icon_dir = output.join("icons");

        recreate_dir(&output)?;
        if config.icons {
            recreate_dir(&icon_dir)?;
        }

        Ok(Self { output, icon_dir })
    }

    pub fn write_icon(&self, name: &str, body: &str) -> Result<()> {
        let path = self.icon_dir.join(format!("{name}.svg"));
        fs::write(&path, body)
            .with_context(|| format!("failed to write icon {}", path.display()))
    }

    /// Writes the sprite document and the matching use-example snippet.
    pub fn write_sprite(&self, sprite: &str, example_name: &str) -> Result<()> {
        let sprite_path = self.sprite_path();
        fs::write(&sprite_path, sprite)
            .with_context(|| format!("failed to write {}", sprite_path.display()))?;

        let example = format!(
            "<svg class=\"w-6 h-auto aspect-square\">\n    <use xlink:href=\"sprite.svg#{example_name}\"></use>\n</svg>"
        );
        let example_path = self.example_path();
        fs::write(&example_path, example)
            .with_context(|| format!("failed to write {}", example_path.display()))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output
    }

    pub fn sprite_path(&self) -> PathBuf {
        self.output.join("sprite.svg")
    }

    pub fn example_path(&self) -> PathBuf {
        self.output.join("use-example.html")
    }
}

fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to clear {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}
