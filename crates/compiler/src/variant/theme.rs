use super::{at_rule, parent, VariantFn};
use crate::config::{Config, DarkMode};
use crosswind_core::Style;
use indexmap::IndexMap;
use std::sync::Arc;

const DARK_MEDIA: &str = "@media (prefers-color-scheme: dark)";
const LIGHT_MEDIA: &str = "@media (prefers-color-scheme: light)";

/// 暗色 / 亮色主题变体
pub fn theme_variants(config: &Config) -> IndexMap<String, VariantFn> {
    let mut variants: IndexMap<String, VariantFn> = IndexMap::new();

    match config.dark_mode() {
        DarkMode::Disabled => return variants,
        DarkMode::Class => {
            variants.insert("dark".into(), parent(".dark"));
            variants.insert("light".into(), parent(".light"));
        }
        DarkMode::Media => {
            variants.insert("dark".into(), at_rule(DARK_MEDIA));
            variants.insert("light".into(), at_rule(LIGHT_MEDIA));
        }
    }

    // 显式写法与模式无关
    variants.insert(".dark".into(), parent(".dark"));
    variants.insert(".light".into(), parent(".light"));
    variants.insert("@dark".into(), at_rule(DARK_MEDIA));
    variants.insert("@light".into(), at_rule(LIGHT_MEDIA));
    // 空钩子，保留给外部处理
    variants.insert("~dark".into(), Arc::new(Style::default));

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(variants: &IndexMap<String, VariantFn>, name: &str) -> Style {
        variants[name]()
    }

    #[test]
    fn test_class_mode() {
        let variants = theme_variants(&Config::default());
        assert_eq!(wrap(&variants, "dark").parent_selectors, vec![".dark"]);
        assert_eq!(wrap(&variants, "@dark").at_rules, vec![DARK_MEDIA]);
        assert!(wrap(&variants, "~dark").parent_selectors.is_empty());
        assert!(wrap(&variants, "~dark").at_rules.is_empty());
    }

    #[test]
    fn test_media_mode() {
        let config = Config::default().with_dark_mode(DarkMode::Media);
        let variants = theme_variants(&config);
        assert_eq!(wrap(&variants, "dark").at_rules, vec![DARK_MEDIA]);
        assert_eq!(wrap(&variants, "light").at_rules, vec![LIGHT_MEDIA]);
        assert_eq!(wrap(&variants, ".dark").parent_selectors, vec![".dark"]);
    }

    #[test]
    fn test_disabled() {
        let config = Config::default().with_dark_mode(DarkMode::Disabled);
        assert!(theme_variants(&config).is_empty());
    }
}
