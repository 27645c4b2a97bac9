use crate::prefixer;
use crate::types::Declaration;
use serde::{Deserialize, Serialize};

/// 属性名：单个，或多个共享同一个值（如 `px-4` → padding-left + padding-right）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyName {
    Single(String),
    Multiple(Vec<String>),
}

impl PropertyName {
    pub fn names(&self) -> &[String] {
        match self {
            PropertyName::Single(name) => std::slice::from_ref(name),
            PropertyName::Multiple(names) => names,
        }
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        PropertyName::Single(name.to_string())
    }
}

impl From<String> for PropertyName {
    fn from(name: String) -> Self {
        PropertyName::Single(name)
    }
}

impl From<Vec<String>> for PropertyName {
    fn from(names: Vec<String>) -> Self {
        PropertyName::Multiple(names)
    }
}

impl From<&[&str]> for PropertyName {
    fn from(names: &[&str]) -> Self {
        PropertyName::Multiple(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyName {
    fn from(names: [&str; N]) -> Self {
        PropertyName::Multiple(names.iter().map(|s| s.to_string()).collect())
    }
}

/// 一条（或一组同值的）CSS 声明
///
/// 没有值的 Property 是惰性的：构建结果为空字符串，
/// 整条流水线用它表示"未解析"。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: PropertyName,
    pub value: Option<String>,
    pub comment: Option<String>,
    pub important: bool,
}

impl Property {
    pub fn new(name: impl Into<PropertyName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            comment: None,
            important: false,
        }
    }

    /// 创建没有值的惰性属性
    pub fn inert(name: impl Into<PropertyName>) -> Self {
        Self {
            name: name.into(),
            value: None,
            comment: None,
            important: false,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub fn is_inert(&self) -> bool {
        self.value.is_none()
    }

    /// 展开为具体声明；`prefixer` 打开时为需要的属性补充 `-webkit-` 版本
    pub fn declarations(&self, prefixer: bool) -> Vec<Declaration> {
        let Some(value) = &self.value else {
            return Vec::new();
        };

        let mut decls = Vec::new();
        for name in self.name.names() {
            if prefixer {
                if let Some(prefixed) = prefixer::prefixed_name(name) {
                    decls.push(self.declaration(prefixed, value));
                }
            }
            decls.push(self.declaration(name.clone(), value));
        }

        // 注释只挂在第一条声明上
        if let Some(first) = decls.first_mut() {
            first.comment = self.comment.clone();
        }
        decls
    }

    fn declaration(&self, property: String, value: &str) -> Declaration {
        Declaration {
            property,
            value: value.to_string(),
            important: self.important,
            comment: None,
        }
    }

    /// 单独构建属性文本（不含选择器），惰性属性返回空字符串
    pub fn build(&self, minify: bool) -> String {
        let decls = self.declarations(false);
        if minify {
            return decls
                .iter()
                .map(|d| d.to_css(true))
                .collect::<Vec<_>>()
                .join(";");
        }

        let mut lines = Vec::new();
        for decl in &decls {
            if let Some(comment) = &decl.comment {
                lines.push(format!("/* {} */", comment));
            }
            lines.push(format!("{};", decl.to_css(false)));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_property_builds_empty() {
        let prop = Property::inert("padding");
        assert!(prop.is_inert());
        assert_eq!(prop.build(false), "");
        assert_eq!(prop.build(true), "");
    }

    #[test]
    fn test_multiple_names_share_value() {
        let prop = Property::new(["padding-left", "padding-right"], "1rem");
        assert_eq!(prop.build(false), "padding-left: 1rem;\npadding-right: 1rem;");
        assert_eq!(prop.build(true), "padding-left:1rem;padding-right:1rem");
    }

    #[test]
    fn test_comment_only_when_pretty() {
        let prop = Property::new("font-size", "1rem").with_comment("16px");
        assert_eq!(prop.build(false), "/* 16px */\nfont-size: 1rem;");
        assert_eq!(prop.build(true), "font-size:1rem");
    }

    #[test]
    fn test_prefixed_declarations() {
        let prop = Property::new("user-select", "none");
        let decls = prop.declarations(true);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].property, "-webkit-user-select");
        assert_eq!(decls[1].property, "user-select");

        assert_eq!(prop.declarations(false).len(), 1);
    }
}
