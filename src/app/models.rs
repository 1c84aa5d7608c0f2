use std::path::PathBuf;

/// Represents the final configuration after merging presets, CLI args
/// and the --optimize bundle. Read-only for the duration of the run.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub debug: bool,
    pub sprite: bool,
    pub icons: bool,
    pub id: bool,
    pub remove_size: bool,
    pub remove_style: bool,
    pub colors: bool,
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub stroke_width: Option<String>,
    pub force_stroke: bool,
    pub force_fill: bool,
    pub exclude: Vec<String>,
}

/// A single SVG source file discovered under the input root.
#[derive(Debug, Clone)]
pub struct IconFile {
    pub path: PathBuf,
    /// Path relative to the input root, used for exclude matching and reports.
    pub relative_path: PathBuf,
}

/// Records an icon that had to take a collision-resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub input: PathBuf,
    pub output: String,
}
