use crate::types::Declaration;
use crate::writer::CssWriter;
use indexmap::IndexMap;

/// 节点内的条目，保持插入顺序
enum Entry {
    /// (选择器, 声明)
    Rule(String, Vec<Declaration>),
    /// 没有选择器的块级 at-rule（如 `@font-face`），每条独立输出
    Block(String, Vec<Declaration>),
    Child(String),
}

/// 以 at-rule 路径为键的 n 叉树
///
/// 共享同一条外→内路径的规则只嵌套一次。
#[derive(Default)]
pub(crate) struct AtRuleTree {
    entries: Vec<Entry>,
    children: IndexMap<String, AtRuleTree>,
}

impl AtRuleTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// 将规则插入到 `path` 对应的节点
    pub(crate) fn insert(&mut self, path: &[String], selector: String, decls: Vec<Declaration>) {
        let Some((head, rest)) = path.split_first() else {
            self.push_rule(selector, decls);
            return;
        };

        if rest.is_empty() && selector.is_empty() {
            self.entries.push(Entry::Block(head.clone(), decls));
            return;
        }

        if !self.children.contains_key(head) {
            self.entries.push(Entry::Child(head.clone()));
        }
        self.children
            .entry(head.clone())
            .or_default()
            .insert(rest, selector, decls);
    }

    /// 同一节点内相同选择器的声明合并到首次出现的位置
    fn push_rule(&mut self, selector: String, decls: Vec<Declaration>) {
        if !selector.is_empty() {
            for entry in self.entries.iter_mut() {
                if let Entry::Rule(existing, existing_decls) = entry {
                    if *existing == selector {
                        existing_decls.extend(decls);
                        return;
                    }
                }
            }
        }
        self.entries.push(Entry::Rule(selector, decls));
    }

    /// 深度优先输出
    pub(crate) fn render(&self, writer: &mut CssWriter) {
        for entry in &self.entries {
            match entry {
                Entry::Rule(selector, decls) if selector.is_empty() => writer.declarations(decls),
                Entry::Rule(selector, decls) => writer.rule(selector, decls),
                Entry::Block(at_rule, decls) => {
                    writer.open(at_rule);
                    writer.declarations(decls);
                    writer.close();
                }
                Entry::Child(at_rule) => {
                    if let Some(child) = self.children.get(at_rule) {
                        writer.open(at_rule);
                        child.render(writer);
                        writer.close();
                    }
                }
            }
        }
    }
}
