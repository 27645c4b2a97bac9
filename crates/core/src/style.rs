use crate::property::Property;
use crate::types::{Declaration, StyleMeta};
use crate::writer::CssWriter;
use std::fmt;
use std::sync::Arc;

/// 选择器变换函数（wrapSelector / wrapRule）
pub type SelectorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// 样式子类型
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum StyleKind {
    #[default]
    Plain,
    /// `.container` 一类：同一选择器下的断点成员按兄弟块输出，不做选择器合并
    Container,
    /// 关键帧：选择器是帧位置（from / 50% / to），只嵌套在自己的 `@keyframes <name>` 下
    Keyframes(String),
}

/// 一条样式规则：选择器修饰 + 属性列表 + at-rule 栈
///
/// 最终选择器（`rule()`）由各部分按固定顺序派生：
/// wrap → parent → pseudo-class → pseudo-element → brother → child → wrapRule
#[derive(Clone, Default)]
pub struct Style {
    pub selector: Option<String>,
    pub properties: Vec<Property>,
    pub pseudo_classes: Vec<String>,
    pub pseudo_elements: Vec<String>,
    pub parent_selectors: Vec<String>,
    pub child_selectors: Vec<String>,
    pub brother_selectors: Vec<String>,
    pub wrap_selectors: Vec<SelectorFn>,
    pub wrap_rules: Vec<SelectorFn>,
    /// 由外到内
    pub at_rules: Vec<String>,
    pub important: bool,
    pub kind: StyleKind,
    pub meta: StyleMeta,
}

impl Style {
    pub fn new(selector: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            selector: Some(selector.into()),
            properties,
            ..Self::default()
        }
    }

    /// 仅带 at-rule、没有选择器的样式（如 `@font-face`）
    pub fn at_rule_block(at_rule: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            properties,
            at_rules: vec![at_rule.into()],
            ..Self::default()
        }
    }

    /// 关键帧中的一帧
    pub fn keyframe(name: &str, stop: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            selector: Some(stop.into()),
            properties,
            at_rules: vec![format!("@keyframes {}", name)],
            kind: StyleKind::Keyframes(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_pseudo_class(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudo_classes.push(pseudo.into());
        self
    }

    pub fn with_pseudo_element(mut self, pseudo: impl Into<String>) -> Self {
        self.pseudo_elements.push(pseudo.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_selectors.push(parent.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.child_selectors.push(child.into());
        self
    }

    pub fn with_brother(mut self, brother: impl Into<String>) -> Self {
        self.brother_selectors.push(brother.into());
        self
    }

    pub fn with_wrap_selector(mut self, wrap: SelectorFn) -> Self {
        self.wrap_selectors.push(wrap);
        self
    }

    pub fn with_wrap_rule(mut self, wrap: SelectorFn) -> Self {
        self.wrap_rules.push(wrap);
        self
    }

    pub fn with_at_rule(mut self, at_rule: impl Into<String>) -> Self {
        self.at_rules.push(at_rule.into());
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn with_kind(mut self, kind: StyleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_meta(mut self, meta: StyleMeta) -> Self {
        self.meta = meta;
        self
    }

    /// 所有属性都没有值时，该样式不产出任何文本
    pub fn is_inert(&self) -> bool {
        self.properties.iter().all(Property::is_inert)
    }

    /// 合并另一个样式：属性与各类选择器修饰、at-rule 依次追加
    ///
    /// 变体组合时先 extend 的样式在外层。
    pub fn extend(&mut self, other: Style) {
        if other.selector.is_some() {
            self.selector = other.selector;
        }
        self.properties.extend(other.properties);
        self.pseudo_classes.extend(other.pseudo_classes);
        self.pseudo_elements.extend(other.pseudo_elements);
        self.parent_selectors.extend(other.parent_selectors);
        self.child_selectors.extend(other.child_selectors);
        self.brother_selectors.extend(other.brother_selectors);
        self.wrap_selectors.extend(other.wrap_selectors);
        self.wrap_rules.extend(other.wrap_rules);
        self.at_rules.extend(other.at_rules);
        self.important |= other.important;
        if other.kind != StyleKind::Plain {
            self.kind = other.kind;
        }
        if other.meta != StyleMeta::default() {
            self.meta = other.meta;
        }
    }

    /// 只合并属性
    pub fn extend_properties(&mut self, other: Style) {
        self.properties.extend(other.properties);
    }

    /// 派生最终选择器文本；没有选择器时返回空字符串
    pub fn rule(&self) -> String {
        let base = self.selector.as_deref().unwrap_or("").trim();
        if base.is_empty() {
            return String::new();
        }

        split_selector_list(base)
            .into_iter()
            .map(|part| self.compose(part))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn compose(&self, part: &str) -> String {
        let mut selector = part.to_string();

        for wrap in &self.wrap_selectors {
            selector = wrap(&selector);
        }
        if !self.parent_selectors.is_empty() {
            selector = format!("{} {}", self.parent_selectors.join(" "), selector);
        }
        if !self.pseudo_classes.is_empty() {
            selector = format!("{}:{}", selector, self.pseudo_classes.join(":"));
        }
        if !self.pseudo_elements.is_empty() {
            selector = format!("{}::{}", selector, self.pseudo_elements.join("::"));
        }
        for brother in &self.brother_selectors {
            selector = format!("{} + {}", selector, brother);
        }
        if !self.child_selectors.is_empty() {
            selector = format!("{} {}", selector, self.child_selectors.join(" "));
        }
        for wrap in &self.wrap_rules {
            selector = wrap(&selector);
        }

        selector
    }

    /// 展开全部声明，样式级 important 会传递到每条声明
    pub fn declarations(&self, prefixer: bool) -> Vec<Declaration> {
        self.properties
            .iter()
            .flat_map(|p| p.declarations(prefixer))
            .map(|mut d| {
                d.important |= self.important;
                d
            })
            .collect()
    }

    /// 单独构建这条样式（含 at-rule 包裹）
    pub fn build(&self, minify: bool, prefixer: bool) -> String {
        let decls = self.declarations(prefixer);
        if decls.is_empty() {
            return String::new();
        }

        let mut writer = CssWriter::new(minify);
        for at_rule in &self.at_rules {
            writer.open(at_rule);
        }
        let rule = self.rule();
        if rule.is_empty() {
            writer.declarations(&decls);
        } else {
            writer.rule(&rule, &decls);
        }
        for _ in &self.at_rules {
            writer.close();
        }
        writer.finish()
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("rule", &self.rule())
            .field("properties", &self.properties)
            .field("at_rules", &self.at_rules)
            .field("important", &self.important)
            .field("kind", &self.kind)
            .field("meta", &self.meta)
            .finish()
    }
}

/// 按顶层逗号拆分选择器列表，括号内的逗号（如 `:is(a, b)`）不拆
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in selector.char_indices() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_composition_order() {
        let style = Style::new(".x", vec![Property::new("color", "red")])
            .with_parent(".dark")
            .with_pseudo_class("hover")
            .with_pseudo_element("before")
            .with_child("> * + *");
        assert_eq!(style.rule(), ".dark .x:hover::before > * + *");
    }

    #[test]
    fn test_wrap_selector_runs_before_parent() {
        let style = Style::new(".x", vec![])
            .with_parent(".group:hover")
            .with_wrap_selector(Arc::new(|s| format!("{}:not(.y)", s)));
        assert_eq!(style.rule(), ".group:hover .x:not(.y)");
    }

    #[test]
    fn test_wrap_rule_runs_last() {
        let style = Style::new(".x", vec![])
            .with_pseudo_class("focus")
            .with_wrap_rule(Arc::new(|s| format!(":where({})", s)));
        assert_eq!(style.rule(), ":where(.x:focus)");
    }

    #[test]
    fn test_rule_applies_to_each_selector() {
        let style = Style::new(".a, .b:is(.c, .d)", vec![]).with_pseudo_class("hover");
        assert_eq!(style.rule(), ".a:hover, .b:is(.c, .d):hover");
    }

    #[test]
    fn test_extend_keeps_variant_outermost() {
        let mut wrapped = Style::default().with_at_rule("@media (min-width: 640px)");
        wrapped.extend(Style::default().with_pseudo_class("hover"));
        wrapped.extend(
            Style::new(".p-4", vec![Property::new("padding", "1rem")])
                .with_at_rule("@supports (display: grid)"),
        );

        assert_eq!(wrapped.rule(), ".p-4:hover");
        assert_eq!(
            wrapped.at_rules,
            vec!["@media (min-width: 640px)", "@supports (display: grid)"]
        );
        assert_eq!(wrapped.properties.len(), 1);
    }

    #[test]
    fn test_build_single_style() {
        let style = Style::new(".p-4", vec![Property::new("padding", "1rem")])
            .with_at_rule("@media (min-width: 640px)");
        assert_eq!(
            style.build(false, false),
            "@media (min-width: 640px) {\n  .p-4 {\n    padding: 1rem;\n  }\n}"
        );
        assert_eq!(
            style.build(true, false),
            "@media (min-width: 640px){.p-4{padding:1rem}}"
        );
    }

    #[test]
    fn test_inert_style_builds_empty() {
        let style = Style::new(".x", vec![Property::inert("color")]);
        assert!(style.is_inert());
        assert_eq!(style.build(false, false), "");
    }

    #[test]
    fn test_important_propagates() {
        let style = Style::new(".x", vec![Property::new("color", "red")]).with_important(true);
        assert_eq!(style.build(true, false), ".x{color:red!important}");
    }
}
