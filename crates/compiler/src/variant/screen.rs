//! 断点变体
//!
//! 对每个字符串断点派生：
//! - `sm`  → `(min-width: 640px)`
//! - `-sm` → `(max-width: 640px)`
//! - `+sm` → `(min-width: 640px) and (max-width: <下一个断点>)`
//! - `<sm` → `(max-width: 639.9px)`
//! - `@sm` → `(min-width: 640px) and (max-width: <下一个断点 - 0.1px>)`

use super::{at_rule, VariantFn};
use crate::config::Config;
use crate::handler::format_number;
use crosswind_core::media::parse_length_px;
use indexmap::IndexMap;
use serde_json::Value;

/// 主题中的一个断点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenSize {
    Width(String),
    Range {
        min: Option<String>,
        max: Option<String>,
    },
    Raw(String),
}

impl ScreenSize {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(ScreenSize::Width(s.clone())),
            Value::Object(o) => {
                if let Some(raw) = o.get("raw").and_then(Value::as_str) {
                    return Some(ScreenSize::Raw(raw.to_string()));
                }
                let min = o.get("min").and_then(Value::as_str).map(String::from);
                let max = o.get("max").and_then(Value::as_str).map(String::from);
                (min.is_some() || max.is_some()).then_some(ScreenSize::Range { min, max })
            }
            _ => None,
        }
    }

    /// 字符串断点的宽度
    pub fn min_width(&self) -> Option<&str> {
        match self {
            ScreenSize::Width(width) => Some(width),
            _ => None,
        }
    }

    fn sort_px(&self) -> f64 {
        match self {
            ScreenSize::Width(width) => parse_length_px(width).unwrap_or(f64::INFINITY),
            _ => f64::NEG_INFINITY,
        }
    }

    fn media(&self) -> String {
        match self {
            ScreenSize::Width(width) => format!("@media (min-width: {})", width),
            ScreenSize::Range { min, max } => {
                let conditions: Vec<String> = [("min-width", min), ("max-width", max)]
                    .into_iter()
                    .filter_map(|(feature, value)| {
                        value.as_ref().map(|v| format!("({}: {})", feature, v))
                    })
                    .collect();
                format!("@media {}", conditions.join(" and "))
            }
            ScreenSize::Raw(raw) => format!("@media {}", raw),
        }
    }
}

/// 按像素升序排列断点，非字符串断点排在最前
pub fn sorted_screens(config: &Config) -> Vec<(String, ScreenSize)> {
    let mut screens: Vec<(String, ScreenSize)> = match config.theme("screens") {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(name, value)| Some((name.clone(), ScreenSize::from_value(value)?)))
            .collect(),
        _ => Vec::new(),
    };
    screens.sort_by(|(_, a), (_, b)| a.sort_px().total_cmp(&b.sort_px()));
    screens
}

fn below(width: &str) -> Option<String> {
    parse_length_px(width).map(|px| format!("{}px", format_number(px - 0.1)))
}

pub fn screen_variants(config: &Config) -> IndexMap<String, VariantFn> {
    let screens = sorted_screens(config);
    let widths: Vec<(&str, &str)> = screens
        .iter()
        .filter_map(|(name, size)| Some((name.as_str(), size.min_width()?)))
        .collect();

    let mut variants: IndexMap<String, VariantFn> = IndexMap::new();

    for (name, size) in &screens {
        variants.insert(name.clone(), at_rule(size.media()));
    }

    for (i, (name, width)) in widths.iter().enumerate() {
        let next = widths.get(i + 1).map(|(_, w)| *w);

        variants.insert(
            format!("-{}", name),
            at_rule(format!("@media (max-width: {})", width)),
        );

        let range = match next {
            Some(next) => format!("@media (min-width: {}) and (max-width: {})", width, next),
            None => format!("@media (min-width: {})", width),
        };
        variants.insert(format!("+{}", name), at_rule(range));

        if let Some(max) = below(width) {
            variants.insert(
                format!("<{}", name),
                at_rule(format!("@media (max-width: {})", max)),
            );
        }

        let exclusive = match next.and_then(below) {
            Some(max) => format!("@media (min-width: {}) and (max-width: {})", width, max),
            None => format!("@media (min-width: {})", width),
        };
        variants.insert(format!("@{}", name), at_rule(exclusive));
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn media_of(variants: &IndexMap<String, VariantFn>, name: &str) -> String {
        let style = variants.get(name).map(|f| f()).unwrap_or_default();
        style.at_rules.join(" | ")
    }

    fn config(screens: &str) -> Config {
        Config::from_json(&format!(r#"{{"theme": {{"screens": {}}}}}"#, screens)).unwrap()
    }

    #[test]
    fn test_breakpoint_derivation() {
        let variants = screen_variants(&config(r#"{"lg": "1024px", "sm": "640px"}"#));

        assert_eq!(media_of(&variants, "sm"), "@media (min-width: 640px)");
        assert_eq!(
            media_of(&variants, "+sm"),
            "@media (min-width: 640px) and (max-width: 1024px)"
        );
        assert_eq!(media_of(&variants, "-lg"), "@media (max-width: 1024px)");
        assert_eq!(media_of(&variants, "+lg"), "@media (min-width: 1024px)");
        assert_eq!(media_of(&variants, "<sm"), "@media (max-width: 639.9px)");
        assert_eq!(
            media_of(&variants, "@sm"),
            "@media (min-width: 640px) and (max-width: 1023.9px)"
        );
        assert_eq!(media_of(&variants, "@lg"), "@media (min-width: 1024px)");
    }

    #[test]
    fn test_sorted_by_pixels() {
        let screens = sorted_screens(&config(
            r#"{"xl": "80rem", "md": "768px", "print": {"raw": "print"}, "sm": "640px"}"#,
        ));
        let names: Vec<&str> = screens.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["print", "sm", "md", "xl"]);
    }

    #[test]
    fn test_object_screens() {
        let variants = screen_variants(&config(
            r#"{"tablet": {"min": "640px", "max": "1023px"}, "print": {"raw": "print"}}"#,
        ));
        assert_eq!(
            media_of(&variants, "tablet"),
            "@media (min-width: 640px) and (max-width: 1023px)"
        );
        assert_eq!(media_of(&variants, "print"), "@media print");
        assert!(!variants.contains_key("-tablet"));
    }
}
