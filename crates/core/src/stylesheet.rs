use crate::media::SortKey;
use crate::style::{Style, StyleKind};
use crate::tree::AtRuleTree;
use crate::types::{Declaration, StyleLayer};
use crate::writer::CssWriter;
use indexmap::IndexMap;

/// 样式表：有序的 Style 列表
///
/// 典型用法：`sheet.combine().sort().build(false)`
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    pub children: Vec<Style>,
    /// 是否为需要的属性补充浏览器前缀
    pub prefixer: bool,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefixer(mut self, prefixer: bool) -> Self {
        self.prefixer = prefixer;
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn add(&mut self, style: Style) -> &mut Self {
        self.children.push(style);
        self
    }

    pub fn add_all(&mut self, styles: impl IntoIterator<Item = Style>) -> &mut Self {
        self.children.extend(styles);
        self
    }

    /// 合并另一个样式表
    pub fn extend(&mut self, other: StyleSheet) -> &mut Self {
        self.children.extend(other.children);
        self.prefixer |= other.prefixer;
        self
    }

    /// 只保留指定层的样式
    pub fn layer(&self, layer: StyleLayer) -> StyleSheet {
        StyleSheet {
            children: self
                .children
                .iter()
                .filter(|s| s.meta.layer == layer)
                .cloned()
                .collect(),
            prefixer: self.prefixer,
        }
    }

    /// 合并签名相同（at-rule 栈 + 层 + 最终选择器）的样式，属性按顺序拼接
    ///
    /// `@font-face`、关键帧、container 成员永不合并。
    pub fn combine(&mut self) -> &mut Self {
        let mut groups: IndexMap<String, Style> = IndexMap::new();

        for (index, style) in std::mem::take(&mut self.children).into_iter().enumerate() {
            let mut key = signature(&style);
            if !is_mergeable(&style) {
                key = format!("{}\u{0}#{}", key, index);
            }

            match groups.get_mut(&key) {
                Some(existing) => existing.extend_properties(style),
                None => {
                    groups.insert(key, style);
                }
            }
        }

        log::trace!("combined style sheet into {} rules", groups.len());
        self.children = groups.into_values().collect();
        self
    }

    /// 稳定排序：媒体查询 → 插件顺序 → 组内偏移 → 内置插件优先
    pub fn sort(&mut self) -> &mut Self {
        self.children.sort_by_cached_key(SortKey::of);
        self
    }

    /// 序列化为 CSS 文本
    ///
    /// 依次输出：无 at-rule 的普通规则、container 规则、关键帧、
    /// 其余按 at-rule 路径嵌套的规则。
    pub fn build(&self, minify: bool) -> String {
        let mut flat: IndexMap<String, Vec<Declaration>> = IndexMap::new();
        let mut containers: IndexMap<String, Vec<(&Style, Vec<Declaration>)>> = IndexMap::new();
        let mut keyframes: IndexMap<String, Vec<(String, Vec<Declaration>)>> = IndexMap::new();
        let mut tree = AtRuleTree::new();

        for style in &self.children {
            let decls = style.declarations(self.prefixer);
            if decls.is_empty() {
                continue;
            }

            match &style.kind {
                StyleKind::Keyframes(name) => keyframes
                    .entry(name.clone())
                    .or_default()
                    .push((style.rule(), decls)),
                StyleKind::Container => containers
                    .entry(style.rule())
                    .or_default()
                    .push((style, decls)),
                StyleKind::Plain if style.at_rules.is_empty() => {
                    let rule = style.rule();
                    if !rule.is_empty() {
                        flat.entry(rule).or_default().extend(decls);
                    }
                }
                StyleKind::Plain => tree.insert(&style.at_rules, style.rule(), decls),
            }
        }

        let mut writer = CssWriter::new(minify);

        for (rule, decls) in &flat {
            writer.rule(rule, decls);
        }

        for (rule, members) in &containers {
            // 变体带来的外层 at-rule 与断点共享路径，同一条查询不重复嵌套
            let mut members: Vec<(Vec<String>, &Style, &Vec<Declaration>)> = members
                .iter()
                .map(|(style, decls)| (dedupe_path(&style.at_rules), *style, decls))
                .collect();
            members.sort_by_cached_key(|(path, style, _)| (path.len(), SortKey::of(style)));

            let mut group = AtRuleTree::new();
            for (path, _, decls) in members {
                group.insert(&path, rule.clone(), decls.clone());
            }
            group.render(&mut writer);
        }

        for (name, frames) in &keyframes {
            writer.open(&format!("@keyframes {}", name));
            for (stop, decls) in frames {
                writer.rule(stop, decls);
            }
            writer.close();
        }

        tree.render(&mut writer);
        writer.finish()
    }
}

fn dedupe_path(at_rules: &[String]) -> Vec<String> {
    let mut path: Vec<String> = Vec::with_capacity(at_rules.len());
    for at_rule in at_rules {
        if !path.contains(at_rule) {
            path.push(at_rule.clone());
        }
    }
    path
}

fn signature(style: &Style) -> String {
    format!(
        "{}\u{0}{:?}\u{0}{}\u{0}{}",
        style.at_rules.join("\u{1}"),
        style.meta.layer,
        style.important,
        style.rule()
    )
}

fn is_mergeable(style: &Style) -> bool {
    style.kind == StyleKind::Plain
        && !style.rule().is_empty()
        && !style.at_rules.iter().any(|a| a.starts_with("@font-face"))
}
