//! 变体注册表
//!
//! 每个变体是一个无参工厂，产出一条空样式（只带选择器修饰或 at-rule），
//! 编译时按变体链从外到内依次 `extend`，最后再 `extend` 工具类样式。

pub mod screen;
pub mod state;
pub mod theme;

use crate::config::Config;
use crosswind_core::Style;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub type VariantFn = Arc<dyn Fn() -> Style + Send + Sync>;

/// 按组划分的变体
#[derive(Clone, Default)]
pub struct ResolvedVariants {
    pub screen: IndexMap<String, VariantFn>,
    pub theme: IndexMap<String, VariantFn>,
    pub state: IndexMap<String, VariantFn>,
}

impl ResolvedVariants {
    /// 默认优先级：screen → theme → state
    fn into_ordered(self) -> IndexMap<String, VariantFn> {
        let mut all = self.screen;
        all.extend(self.theme);
        all.extend(self.state);
        all
    }
}

pub fn resolve_variants(config: &Config) -> ResolvedVariants {
    ResolvedVariants {
        screen: screen::screen_variants(config),
        theme: theme::theme_variants(config),
        state: state::state_variants(),
    }
}

pub(crate) fn at_rule(rule: impl Into<String>) -> VariantFn {
    let rule = rule.into();
    Arc::new(move || Style::default().with_at_rule(rule.as_str()))
}

pub(crate) fn parent(selector: impl Into<String>) -> VariantFn {
    let selector = selector.into();
    Arc::new(move || Style::default().with_parent(selector.as_str()))
}

pub(crate) fn pseudo_class(pseudo: impl Into<String>) -> VariantFn {
    let pseudo = pseudo.into();
    Arc::new(move || Style::default().with_pseudo_class(pseudo.as_str()))
}

pub(crate) fn pseudo_element(pseudo: impl Into<String>) -> VariantFn {
    let pseudo = pseudo.into();
    Arc::new(move || Style::default().with_pseudo_element(pseudo.as_str()))
}

pub(crate) fn child(selector: impl Into<String>) -> VariantFn {
    let selector = selector.into();
    Arc::new(move || Style::default().with_child(selector.as_str()))
}

/// 按优先级过滤排序后的变体表；不在 `variant_order` 中的变体不可用
#[derive(Clone, Default)]
pub struct VariantRegistry {
    entries: IndexMap<String, VariantFn>,
}

impl VariantRegistry {
    pub fn new(config: &Config) -> Self {
        let all = resolve_variants(config).into_ordered();

        let entries = match config.variant_order() {
            Some(order) => order
                .iter()
                .filter_map(|name| all.get(name).map(|f| (name.clone(), f.clone())))
                .collect(),
            None => all,
        };

        log::trace!("resolved {} variants", entries.len());
        Self { entries }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 第一个变体在最外层；有未知变体时返回 `None`
    pub fn wrap(&self, variants: &[String], style: Style) -> Option<Style> {
        let mut wrapped = Style::default();
        for name in variants {
            let factory = self.entries.get(name)?;
            wrapped.extend(factory());
        }
        wrapped.extend(style);
        Some(wrapped)
    }
}

impl fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswind_core::Property;

    fn rule_of(registry: &VariantRegistry, variants: &[&str]) -> Option<(String, Vec<String>)> {
        let variants: Vec<String> = variants.iter().map(|s| s.to_string()).collect();
        let style = Style::new(".x", vec![Property::new("color", "red")]);
        registry
            .wrap(&variants, style)
            .map(|s| (s.rule(), s.at_rules.clone()))
    }

    #[test]
    fn test_default_order() {
        let registry = VariantRegistry::new(&Config::default());
        let names: Vec<&str> = registry.names().collect();
        let sm = names.iter().position(|n| *n == "sm").unwrap();
        let dark = names.iter().position(|n| *n == "dark").unwrap();
        let hover = names.iter().position(|n| *n == "hover").unwrap();
        assert!(sm < dark && dark < hover);
    }

    #[test]
    fn test_wrap_composes_left_to_right() {
        let registry = VariantRegistry::new(&Config::default());
        let (rule, at_rules) = rule_of(&registry, &["sm", "dark", "hover"]).unwrap();
        assert_eq!(rule, ".dark .x:hover");
        assert_eq!(at_rules, vec!["@media (min-width: 640px)"]);
    }

    #[test]
    fn test_unknown_variant() {
        let registry = VariantRegistry::new(&Config::default());
        assert!(rule_of(&registry, &["nope"]).is_none());
    }

    #[test]
    fn test_variant_order_filters() {
        let config = Config::default().with_variant_order(["hover", "sm"]);
        let registry = VariantRegistry::new(&config);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["hover", "sm"]);
        assert!(!registry.contains("focus"));
        assert!(rule_of(&registry, &["focus"]).is_none());
    }
}
