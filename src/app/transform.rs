use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::app::models::RuntimeConfig;

static SVG_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg").unwrap());
static SYMBOL_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg ").unwrap());
static SYMBOL_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</svg>").unwrap());
static HEIGHT_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"height="\d+"\s"#).unwrap());
// the ([^-]) guard keeps stroke-width out of plain width removal
static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^-])width="\d+"\s"#).unwrap());
static STROKE_WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"stroke-width="([\d.]+)""#).unwrap());
static STROKE_HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r##"stroke="#\w+""##).unwrap());
static FILL_HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r##"fill="#\w+""##).unwrap());
static STROKE_NONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"stroke="none""#).unwrap());
static FILL_NONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"fill="none""#).unwrap());
static STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="[\w\s.#;:()_-]+"\s"#).unwrap());

/// Ordered textual rewrites applied to one icon body. The markup is
/// never parsed; every step is a pattern substitution over the raw text.
pub struct Pipeline<'a> {
    config: &'a RuntimeConfig,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a RuntimeConfig) -> Self {
        Self { config }
    }

    /// Produces the cleaned standalone document: id injection, size
    /// removal, color rewrite, style removal, in that order, each gated
    /// by its flag.
    pub fn clean(&self, raw: &str, name: &str) -> String {
        let mut body = raw.to_string();

        if self.config.id {
            body = add_id(&body, name);
        }
        if self.config.remove_size {
            body = self.remove_size(&body);
        }
        if self.config.colors {
            body = self.rewrite_colors(&body);
        }
        if self.config.remove_style {
            body = remove_styles(&body);
        }

        body
    }

    /// Derives the sprite fragment from a cleaned standalone document:
    /// the stroke width becomes a themeable custom property and the root
    /// tag turns into a symbol.
    pub fn spritize(&self, body: &str) -> String {
        let body = match &self.config.stroke_width {
            Some(width) => STROKE_WIDTH_ATTR
                .replace(
                    body,
                    NoExpand(&format!(r#"stroke-width="var(--stroke-width, {width})""#)),
                )
                .into_owned(),
            None => STROKE_WIDTH_ATTR
                .replace(body, r#"stroke-width="var(--stroke-width, ${1})""#)
                .into_owned(),
        };
        let body = SYMBOL_OPEN.replace(&body, "<symbol ");
        SYMBOL_CLOSE.replace(&body, "</symbol>").into_owned()
    }

    fn remove_size(&self, body: &str) -> String {
        let body = HEIGHT_ATTR.replace_all(body, "");
        let body = WIDTH_ATTR.replace_all(&body, "${1}");
        match &self.config.stroke_width {
            // first match only, everything after the root stays put
            Some(width) => STROKE_WIDTH_ATTR
                .replace(&body, NoExpand(&format!(r#"stroke-width="{width}""#)))
                .into_owned(),
            None => body.into_owned(),
        }
    }

    fn rewrite_colors(&self, body: &str) -> String {
        let mut body = body.to_string();

        // hex fills follow the stroke color; --fill only applies to fill="none"
        if let Some(stroke) = &self.config.stroke {
            body = STROKE_HEX
                .replace_all(&body, NoExpand(&format!(r#"stroke="{stroke}""#)))
                .into_owned();
            body = FILL_HEX
                .replace_all(&body, NoExpand(&format!(r#"fill="{stroke}""#)))
                .into_owned();
        }

        if self.config.force_stroke {
            if let Some(stroke) = &self.config.stroke {
                body = STROKE_NONE
                    .replace_all(&body, NoExpand(&format!(r#"stroke="{stroke}""#)))
                    .into_owned();
            }
        }
        if self.config.force_fill {
            if let Some(fill) = &self.config.fill {
                body = FILL_NONE
                    .replace_all(&body, NoExpand(&format!(r#"fill="{fill}""#)))
                    .into_owned();
            }
        }

        body
    }
}

fn add_id(body: &str, name: &str) -> String {
    SVG_OPEN
        .replace(body, NoExpand(&format!(r#"<svg id="{name}""#)))
        .into_owned()
}

fn remove_styles(body: &str) -> String {
    STYLE_ATTR.replace_all(body, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            input: PathBuf::from("input"),
            output: PathBuf::from("output"),
            debug: false,
            sprite: true,
            icons: true,
            id: false,
            remove_size: false,
            remove_style: false,
            colors: false,
            stroke: None,
            fill: None,
            stroke_width: None,
            force_stroke: false,
            force_fill: false,
            exclude: Vec::new(),
        }
    }

    #[test]
    fn id_lands_as_the_first_attribute() {
        let config = RuntimeConfig {
            id: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(r#"<svg width="24"><path d="M0 0"/></svg>"#, "plus");
        assert!(out.starts_with(r#"<svg id="plus" width="24">"#));
    }

    #[test]
    fn size_removal_drops_width_and_height() {
        let config = RuntimeConfig {
            remove_size: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(
            r#"<svg width="24" height="24" viewBox="0 0 24 24"></svg>"#,
            "plus",
        );
        assert_eq!(out, r#"<svg viewBox="0 0 24 24"></svg>"#);
    }

    #[test]
    fn size_removal_keeps_stroke_width_without_override() {
        let config = RuntimeConfig {
            remove_size: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(r#"<svg stroke-width="2"></svg>"#, "plus");
        assert_eq!(out, r#"<svg stroke-width="2"></svg>"#);
    }

    #[test]
    fn size_removal_spares_stroke_width() {
        let config = RuntimeConfig {
            remove_size: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(
            r#"<svg width="24" stroke-width="2" stroke-linecap="round"></svg>"#,
            "plus",
        );
        assert_eq!(out, r#"<svg stroke-width="2" stroke-linecap="round"></svg>"#);
    }

    #[test]
    fn size_removal_overrides_only_the_first_stroke_width() {
        let config = RuntimeConfig {
            remove_size: true,
            stroke_width: Some("1.5".to_string()),
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(
            r#"<svg stroke-width="2"><path stroke-width="3"/></svg>"#,
            "plus",
        );
        assert_eq!(
            out,
            r#"<svg stroke-width="1.5"><path stroke-width="3"/></svg>"#
        );
    }

    // Hex fills take the stroke color, not the fill color. Downstream
    // sprite consumers depend on this, so a deliberate change has to
    // touch this test.
    #[test]
    fn hex_fill_takes_stroke_color() {
        let config = RuntimeConfig {
            colors: true,
            stroke: Some("currentColor".to_string()),
            fill: Some("tomato".to_string()),
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(
            r##"<svg stroke="#000000" fill="#000000"></svg>"##,
            "plus",
        );
        assert_eq!(
            out,
            r#"<svg stroke="currentColor" fill="currentColor"></svg>"#
        );
    }

    #[test]
    fn colors_without_stroke_value_leave_hex_untouched() {
        let config = RuntimeConfig {
            colors: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let body = r##"<svg stroke="#123abc"></svg>"##;
        assert_eq!(pipeline.clean(body, "plus"), body);
    }

    #[test]
    fn force_stroke_rewrites_none() {
        let config = RuntimeConfig {
            colors: true,
            stroke: Some("currentColor".to_string()),
            force_stroke: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(r#"<svg stroke="none"></svg>"#, "plus");
        assert_eq!(out, r#"<svg stroke="currentColor"></svg>"#);
    }

    #[test]
    fn force_fill_uses_the_fill_color() {
        let config = RuntimeConfig {
            colors: true,
            fill: Some("tomato".to_string()),
            force_fill: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(r#"<svg fill="none"></svg>"#, "plus");
        assert_eq!(out, r#"<svg fill="tomato"></svg>"#);
    }

    #[test]
    fn without_force_none_values_survive() {
        let config = RuntimeConfig {
            colors: true,
            stroke: Some("currentColor".to_string()),
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(r#"<svg stroke="none" fill="none"></svg>"#, "plus");
        assert_eq!(out, r#"<svg stroke="none" fill="none"></svg>"#);
    }

    #[test]
    fn style_removal_strips_inline_styles() {
        let config = RuntimeConfig {
            remove_style: true,
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let out = pipeline.clean(
            r#"<svg style="fill: none; stroke-width: 2" viewBox="0 0 24 24"></svg>"#,
            "plus",
        );
        assert_eq!(out, r#"<svg viewBox="0 0 24 24"></svg>"#);
    }

    #[test]
    fn spritize_renames_the_root_tag() {
        let pipeline_config = config();
        let pipeline = Pipeline::new(&pipeline_config);

        let out = pipeline.spritize(r#"<svg viewBox="0 0 24 24"><path/></svg>"#);
        assert_eq!(out, r#"<symbol viewBox="0 0 24 24"><path/></symbol>"#);
    }

    #[test]
    fn spritize_makes_stroke_width_themeable() {
        let pipeline_config = config();
        let pipeline = Pipeline::new(&pipeline_config);

        let out = pipeline.spritize(r#"<svg stroke-width="2"></svg>"#);
        assert_eq!(
            out,
            r#"<symbol stroke-width="var(--stroke-width, 2)"></symbol>"#
        );
    }

    #[test]
    fn spritize_prefers_the_configured_stroke_width() {
        let pipeline_config = RuntimeConfig {
            stroke_width: Some("1.5".to_string()),
            ..config()
        };
        let pipeline = Pipeline::new(&pipeline_config);

        let out = pipeline.spritize(r#"<svg stroke-width="2"></svg>"#);
        assert_eq!(
            out,
            r#"<symbol stroke-width="var(--stroke-width, 1.5)"></symbol>"#
        );
    }

    #[test]
    fn steps_compose_in_order() {
        let config = RuntimeConfig {
            id: true,
            remove_size: true,
            remove_style: true,
            colors: true,
            stroke: Some("currentColor".to_string()),
            ..config()
        };
        let pipeline = Pipeline::new(&config);

        let raw = r##"<svg width="24" height="24" style="fill: none" stroke="#0f0f0f" viewBox="0 0 24 24"><path d="M12 5v14"/></svg>"##;
        let cleaned = pipeline.clean(raw, "plus");
        assert_eq!(
            cleaned,
            r#"<svg id="plus" stroke="currentColor" viewBox="0 0 24 24"><path d="M12 5v14"/></svg>"#
        );

        let fragment = pipeline.spritize(&cleaned);
        assert!(fragment.starts_with(r#"<symbol id="plus""#));
        assert!(fragment.ends_with("</symbol>"));
    }
}
