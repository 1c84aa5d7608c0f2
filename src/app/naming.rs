use std::collections::HashSet;
use std::path::Path;

use crate::app::models::{IconFile, RenameRecord};

/// The name an icon ends up with, plus the rename record when the
/// natural name collided with another icon in the batch.
#[derive(Debug)]
pub struct Resolution {
    pub name: String,
    pub rename: Option<RenameRecord>,
}

/// Assigns each icon in a batch a name usable as both its output file
/// name and its sprite fragment id.
pub struct NameResolver {
    colliding: HashSet<String>,
}

impl NameResolver {
    /// Precomputes the set of base names derived by more than one input.
    pub fn new(files: &[IconFile]) -> Self {
        let mut seen = HashSet::new();
        let mut colliding = HashSet::new();
        for file in files {
            let name = base_name(&file.path);
            if !seen.insert(name.clone()) {
                colliding.insert(name);
            }
        }
        Self { colliding }
    }

    /// Colliding names get the first character capitalized and the
    /// parent folder's base name appended; everything else keeps its
    /// base name. Leading numerals are substituted last either way.
    pub fn resolve(&self, file: &IconFile) -> Resolution {
        let mut name = base_name(&file.path);
        let mut rename = None;

        if self.colliding.contains(&name) {
            name = format!("{}{}", capitalize_first(&name), parent_base_name(&file.path));
            rename = Some(RenameRecord {
                input: file.relative_path.clone(),
                output: name.clone(),
            });
        }

        Resolution {
            name: replace_leading_numerals(&name),
            rename,
        }
    }
}

/// Derives an identifier from a path: last component up to the first
/// dot, camel-cased on `-`, stripped to ASCII letters and digits.
pub fn base_name(path: &Path) -> String {
    let component = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = component.split('.').next().unwrap_or_default();

    let camel: String = stem
        .split('-')
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_string()
            } else {
                capitalize_first(part)
            }
        })
        .collect();

    camel.chars().filter(char::is_ascii_alphanumeric).collect()
}

fn parent_base_name(path: &Path) -> String {
    path.parent().map(base_name).unwrap_or_default()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces a leading run of decimal digits with its lexical word so the
/// name stays usable as an identifier. Runs without a table entry are
/// kept as-is, and nothing past the leading run is touched.
pub fn replace_leading_numerals(name: &str) -> String {
    let digits: String = name.chars().take_while(char::is_ascii_digit).collect();
    let word = match digits.as_str() {
        "1" => "one",
        "2" => "two",
        "3" => "three",
        "4" => "four",
        "5" => "five",
        "6" => "six",
        "7" => "seven",
        "8" => "eight",
        "9" => "nine",
        "10" => "one-k",
        "11" => "eleven",
        "12" => "twelve",
        "13" => "thirteen",
        "14" => "fourteen",
        "15" => "fifteen",
        "16" => "sixteen",
        "17" => "seventeen",
        "18" => "eighteen",
        "19" => "nineteen",
        "20" => "twenty",
        "21" => "twenty-one",
        "22" => "twenty-two",
        "23" => "twenty-three",
        "24" => "twenty-four",
        "30" => "thirty",
        "60" => "sixty",
        "90" => "ninety",
        "100" => "one-hundred",
        "200" => "two-hundred",
        "300" => "three-hundred",
        "360" => "three-sixty",
        _ => return name.to_string(),
    };
    format!("{word}{}", &name[digits.len()..])
}
