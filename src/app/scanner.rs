use crate::app::error::AppError;
use crate::app::models::{IconFile, RuntimeConfig};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Scanner {
    root: PathBuf,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self {
            root: config.input.clone(),
            exclude_set: build_globset(&config.exclude)?,
        })
    }

    /// Walks the input tree and returns every `.svg` file. Discovery
    /// order: the files of a directory first, then each subdirectory,
    /// both sorted by name. Callers process the list back to front.
    pub fn scan(&self) -> Result<Vec<IconFile>> {
        let entries = read_sorted(&self.root)
            .with_context(|| format!("failed to read input folder {}", self.root.display()))?;

        if entries.is_empty() {
            return Err(AppError::EmptyInput(self.root.clone()).into());
        }

        self.scan_dir(entries)
    }

    fn scan_dir(&self, entries: Vec<PathBuf>) -> Result<Vec<IconFile>> {
        let mut files: Vec<IconFile> = entries
            .iter()
            .filter(|path| path.is_file() && is_svg(path))
            .filter_map(|path| self.accept(path))
            .collect();

        for dir in entries.iter().filter(|path| path.is_dir()) {
            if self.is_excluded(dir) {
                continue;
            }
            let nested = read_sorted(dir)
                .with_context(|| format!("failed to read directory {}", dir.display()))?;
            files.extend(self.scan_dir(nested)?);
        }

        Ok(files)
    }

    fn accept(&self, path: &Path) -> Option<IconFile> {
        let relative = diff_paths(path, &self.root)?;
        if self.exclude_set.is_match(&relative) {
            return None;
        }
        Some(IconFile {
            path: path.to_path_buf(),
            relative_path: relative,
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        diff_paths(path, &self.root)
            .map(|relative| self.exclude_set.is_match(relative))
            .unwrap_or(false)
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "svg")
}

fn read_sorted(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?.path());
    }
    entries.sort();
    Ok(entries)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner(root: &Path, exclude: &[&str]) -> Scanner {
        Scanner {
            root: root.to_path_buf(),
            exclude_set: build_globset(
                &exclude.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )
            .unwrap(),
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<svg></svg>").unwrap();
    }

    #[test]
    fn files_come_before_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("zebra.svg"));
        touch(&root.join("a/nested.svg"));
        touch(&root.join("apple.svg"));

        let files = scanner(root, &[]).scan().unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().into_owned())
            .collect();

        assert_eq!(relative, vec!["apple.svg", "zebra.svg", "a/nested.svg"]);
    }

    #[test]
    fn only_svg_files_are_discovered() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("icon.svg"));
        fs::write(root.join("notes.txt"), "not an icon").unwrap();

        let files = scanner(root, &[]).scan().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, Path::new("icon.svg"));
    }

    #[test]
    fn empty_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = scanner(tmp.path(), &[]).scan().unwrap_err();
        assert!(err.to_string().contains("no input files found"));
    }

    #[test]
    fn svg_less_root_is_not_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("readme.md"), "docs").unwrap();
        let files = scanner(tmp.path(), &[]).scan().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn exclude_globs_filter_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("keep.svg"));
        touch(&root.join("drafts/wip.svg"));
        touch(&root.join("old.svg"));

        let files = scanner(root, &["drafts", "old.svg"]).scan().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, Path::new("keep.svg"));
    }
}
