//! 工具类提取
//!
//! 查找顺序：内置静态表 → 插件静态 / 组件 / core 表 → 快捷方式
//! → 插件动态解析函数 → 内置动态解析函数。
//! 某一步命中了键但返回 `None` 时整个工具类视为 ignored，不会回退到后面的步骤。

pub mod dynamic;
pub mod static_table;

use crate::config::Config;
use crate::plugin::PluginTable;
use crate::plugin_order::{plugin_order, PLUGIN_ORDER_USER};
use crate::utility::Utility;
use crate::variant::VariantRegistry;
use crosswind_core::{escape_class, Property, Style, StyleLayer, StyleMeta};
use crosswind_parse::{leaves, Parser, TokenKind};
use static_table::STATIC_UTILITIES;

/// 单个工具类到样式列表的提取器，借用配置、插件表与变体表
pub struct Extractor<'a> {
    config: &'a Config,
    plugins: &'a PluginTable,
    variants: &'a VariantRegistry,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a Config, plugins: &'a PluginTable, variants: &'a VariantRegistry) -> Self {
        Self {
            config,
            plugins,
            variants,
        }
    }

    /// 提取一个工具类（不含变体与 `!`）；自身规则的选择器为 `.` + 转义后的 `content`
    pub fn extract(&self, content: &str) -> Option<Vec<Style>> {
        let name = self.strip_prefix(content)?;
        let selector = format!(".{}", escape_class(content));
        self.resolve(&name, &selector, &mut Vec::new())
    }

    /// 展开别名 `*name`，选择器为 `.\*name`
    pub fn alias(&self, name: &str) -> Option<Vec<Style>> {
        let classes = self.config.alias(name)?;
        let selector = format!(".{}", escape_class(&format!("*{}", name)));
        self.expand_guarded(&format!("*{}", name), &selector, classes, &mut Vec::new())
    }

    /// 解析去掉前缀后的工具类，自身规则改写到 `selector`
    fn resolve(&self, name: &str, selector: &str, visited: &mut Vec<String>) -> Option<Vec<Style>> {
        let utility = Utility::new(name);

        let styles = if let Some(styles) = self.static_utility(&utility) {
            styles
        } else if let Some(styles) = self.plugin_utility(&utility) {
            styles
        } else if let Some(classes) = self.plugins.shortcuts.get(name) {
            return self.expand_guarded(name, selector, classes, visited);
        } else if let Some(resolver) = self.plugins.match_dynamic(name) {
            let meta = StyleMeta::new(utility.identifier(), PLUGIN_ORDER_USER);
            tag(resolver(&utility, self.config)?, meta)
        } else {
            let (group, styles) = dynamic::resolve(&utility, self.config)?;
            if !self.config.core_plugins(group) {
                return None;
            }
            let meta = StyleMeta::new(group, plugin_order(group))
                .with_offset(dynamic::offset(&utility))
                .with_core_plugin(true);
            tag(styles, meta)
        };

        Some(retarget(styles, &utility.class(), selector))
    }

    fn expand_guarded(
        &self,
        name: &str,
        selector: &str,
        classes: &str,
        visited: &mut Vec<String>,
    ) -> Option<Vec<Style>> {
        if visited.iter().any(|v| v == name) {
            log::debug!("`{}` refers to itself, stop expanding", name);
            return None;
        }
        visited.push(name.to_string());
        let expanded = self.expand(selector, classes, visited);
        visited.pop();
        expanded
    }

    /// 设置了前缀时必须带前缀；负号可以写在前缀之前，如 `-tw-m-2`
    fn strip_prefix(&self, content: &str) -> Option<String> {
        let prefix = match self.config.prefix() {
            Some(prefix) if !prefix.is_empty() => prefix,
            _ => return Some(content.to_string()),
        };
        if let Some(rest) = content.strip_prefix(prefix) {
            return Some(rest.to_string());
        }
        let rest = content.strip_prefix('-')?.strip_prefix(prefix)?;
        Some(format!("-{}", rest))
    }

    fn static_utility(&self, utility: &Utility) -> Option<Vec<Style>> {
        let entry = STATIC_UTILITIES.get(utility.raw())?;
        if !self.config.core_plugins(entry.group) {
            return None;
        }
        let properties = entry
            .properties
            .iter()
            .map(|(name, value)| Property::new(*name, *value))
            .collect();
        let meta = StyleMeta::new(entry.group, plugin_order(entry.group))
            .with_offset(entry.offset)
            .with_core_plugin(true);
        Some(vec![Style::new(utility.class(), properties).with_meta(meta)])
    }

    fn plugin_utility(&self, utility: &Utility) -> Option<Vec<Style>> {
        let name = utility.raw();
        let tables = [
            (&self.plugins.core, "core", StyleLayer::Utilities),
            (&self.plugins.utilities, "utilities", StyleLayer::Utilities),
            (&self.plugins.components, "components", StyleLayer::Components),
        ];

        tables.into_iter().find_map(|(table, group, layer)| {
            let (offset, _, properties) = table.get_full(name)?;
            let meta = StyleMeta::new(group, PLUGIN_ORDER_USER)
                .with_offset(offset as u32)
                .with_core_plugin(group == "core")
                .with_layer(layer);
            Some(vec![Style::new(utility.class(), properties.clone()).with_meta(meta)])
        })
    }

    /// 把类字符串展开到 `selector` 下：每个叶子按自身变体包裹，自身规则都改写为同一个选择器
    fn expand(&self, selector: &str, classes: &str, visited: &mut Vec<String>) -> Option<Vec<Style>> {
        let tokens = Parser::new(classes)
            .with_separator(self.config.separator())
            .with_variants(self.variants.names())
            .parse(true);

        let mut styles = Vec::new();
        for leaf in leaves(&tokens) {
            let Some(content) = leaf.token.text() else {
                continue;
            };
            let resolved = match leaf.token.kind {
                TokenKind::Utility => self.resolve(content, selector, visited),
                TokenKind::Alias => self.config.alias(content).and_then(|classes| {
                    self.expand_guarded(&format!("*{}", content), selector, classes, visited)
                }),
                _ => None,
            };
            let Some(resolved) = resolved else {
                log::debug!("`{}` in `{}` ignored", leaf.token.raw, selector);
                continue;
            };

            for style in resolved {
                let Some(mut style) = self.variants.wrap(&leaf.variants, style) else {
                    continue;
                };
                style.important |= leaf.important;
                style.meta.layer = StyleLayer::Components;
                styles.push(style);
            }
        }

        (!styles.is_empty()).then_some(styles)
    }
}

/// 没有元信息的样式补上组信息
fn tag(styles: Vec<Style>, meta: StyleMeta) -> Vec<Style> {
    styles
        .into_iter()
        .map(|mut style| {
            if style.meta == StyleMeta::default() {
                style.meta = meta.clone();
            }
            style
        })
        .collect()
}

/// 把选择器为 `from` 的样式改写为 `to`
pub(crate) fn retarget(styles: Vec<Style>, from: &str, to: &str) -> Vec<Style> {
    if from == to {
        return styles;
    }
    styles
        .into_iter()
        .map(|mut style| {
            if style.selector.as_deref() == Some(from) {
                style.selector = Some(to.to_string());
            }
            style
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn css(config: &Config, plugins: &PluginTable, content: &str) -> Option<Vec<String>> {
        let registry = VariantRegistry::new(config);
        let styles = Extractor::new(config, plugins, &registry).extract(content)?;
        Some(styles.iter().map(|s| s.build(true, false)).collect())
    }

    #[test]
    fn test_static_lookup_is_tagged() {
        let config = Config::default();
        let plugins = PluginTable::new();
        let registry = VariantRegistry::new(&config);
        let styles = Extractor::new(&config, &plugins, &registry)
            .extract("flex")
            .unwrap();
        assert_eq!(styles[0].build(true, false), ".flex{display:flex}");
        assert_eq!(styles[0].meta.group, "display");
        assert_eq!(styles[0].meta.order, plugin_order("display"));
        assert!(styles[0].meta.core_plugin);
    }

    #[test]
    fn test_prefix_is_required() {
        let config = Config::default().with_prefix("tw-");
        let plugins = PluginTable::new();
        assert_eq!(css(&config, &plugins, "tw-flex").unwrap(), vec![".tw-flex{display:flex}"]);
        assert_eq!(css(&config, &plugins, "-tw-m-2").unwrap(), vec![".-tw-m-2{margin:-0.5rem}"]);
        assert!(css(&config, &plugins, "flex").is_none());
    }

    #[test]
    fn test_core_plugins_switch() {
        let config = Config::from_json(r#"{"corePlugins": {"padding": false}}"#).unwrap();
        let plugins = PluginTable::new();
        assert!(css(&config, &plugins, "p-4").is_none());
        assert!(css(&config, &plugins, "m-4").is_some());
    }

    #[test]
    fn test_plugin_tables() {
        let config = Config::default();
        let plugins = PluginTable::new()
            .utility("text-shadow", vec![Property::new("text-shadow", "0 1px 2px black")])
            .component("btn", vec![Property::new("padding", "0.5rem 1rem")]);
        let registry = VariantRegistry::new(&config);
        let extractor = Extractor::new(&config, &plugins, &registry);

        let shadow = extractor.extract("text-shadow").unwrap();
        assert_eq!(shadow[0].meta.order, PLUGIN_ORDER_USER);
        assert_eq!(shadow[0].meta.layer, StyleLayer::Utilities);

        let btn = extractor.extract("btn").unwrap();
        assert_eq!(btn[0].build(true, false), ".btn{padding:0.5rem 1rem}");
        assert_eq!(btn[0].meta.layer, StyleLayer::Components);
    }

    #[test]
    fn test_plugin_dynamic_has_no_fallback() {
        let config = Config::default();
        let plugins = PluginTable::new().dynamic("p-.*", |_, _| None).unwrap();
        assert!(css(&config, &plugins, "p-4").is_none());
        assert!(css(&config, &plugins, "m-4").is_some());
    }

    #[test]
    fn test_shortcut_expands_under_own_selector() {
        let config = Config::default();
        let plugins = PluginTable::new().shortcut("card", "p-4 hover:m-2");
        let registry = VariantRegistry::new(&config);
        let styles = Extractor::new(&config, &plugins, &registry)
            .extract("card")
            .unwrap();

        let rules: Vec<String> = styles.iter().map(Style::rule).collect();
        assert_eq!(rules, vec![".card", ".card:hover"]);
        assert!(styles.iter().all(|s| s.meta.layer == StyleLayer::Components));
        assert_eq!(styles[1].meta.group, "margin");
    }

    #[test]
    fn test_shortcut_recursion_is_cut() {
        let config = Config::default();
        let plugins = PluginTable::new()
            .shortcut("a", "b p-4")
            .shortcut("b", "a m-2");
        assert_eq!(
            css(&config, &plugins, "a").unwrap(),
            vec![".a{margin:0.5rem}", ".a{padding:1rem}"]
        );
    }

    #[test]
    fn test_alias() {
        let config = Config::default().with_alias("box", "flex p-4");
        let plugins = PluginTable::new();
        let registry = VariantRegistry::new(&config);
        let extractor = Extractor::new(&config, &plugins, &registry);

        let styles = extractor.alias("box").unwrap();
        assert_eq!(styles[0].build(true, false), ".\\*box{display:flex}");
        assert_eq!(styles[1].build(true, false), ".\\*box{padding:1rem}");
        assert!(extractor.alias("missing").is_none());
    }
}
