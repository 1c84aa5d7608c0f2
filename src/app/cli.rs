use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert a folder of SVG icons into a symbol sprite and cleaned icon files"
)]
pub struct Cli {
    /// Path to the input folder
    #[arg(long, default_value = "input")]
    pub input: PathBuf,

    /// Path to the output folder
    #[arg(long, default_value = "output")]
    pub output: PathBuf,

    /// Show all log messages and dump the effective configuration
    #[arg(long)]
    pub debug: bool,

    /// Load the recommended option bundle
    #[arg(long)]
    pub optimize: bool,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Generate a sprite.svg file with all icons
    #[arg(long)]
    pub sprite: bool,

    /// Generate individual icon files
    #[arg(long)]
    pub icons: bool,

    /// Add an id to each icon
    #[arg(long)]
    pub id: bool,

    /// Remove width and height attributes
    #[arg(long)]
    pub remove_size: bool,

    /// Remove the style attribute
    #[arg(long)]
    pub remove_style: bool,

    /// Change the fill and stroke colors
    #[arg(long)]
    pub colors: bool,

    /// Default stroke color
    #[arg(long)]
    pub stroke: Option<String>,

    /// Default fill color
    #[arg(long)]
    pub fill: Option<String>,

    /// Change the stroke width
    #[arg(long)]
    pub stroke_width: Option<String>,

    /// Set the stroke color if it's none
    #[arg(long)]
    pub force_stroke: bool,

    /// Set the fill color if it's none
    #[arg(long)]
    pub force_fill: bool,

    /// Glob patterns to exclude from discovery, relative to the input folder
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,
}
