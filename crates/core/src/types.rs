use serde::{Deserialize, Serialize};

/// 单条 CSS 声明（构建阶段由 Property 展开得到）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
    /// 是否追加 !important
    pub important: bool,
    /// 可选注释，仅在非压缩模式输出
    pub comment: Option<String>,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
            comment: None,
        }
    }

    /// 输出 `property: value`，不含结尾分号
    pub fn to_css(&self, minify: bool) -> String {
        let (colon, bang) = if minify { (":", "!important") } else { (": ", " !important") };
        let mut css = format!("{}{}{}", self.property, colon, self.value);
        if self.important && !self.value.ends_with("!important") {
            css.push_str(bang);
        }
        css
    }
}

/// 样式所属层（决定合并签名，不参与排序）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLayer {
    Base,
    Components,
    #[default]
    Utilities,
}

/// 样式元信息，用于构建阶段排序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMeta {
    pub layer: StyleLayer,
    /// 是否来自内置插件（同序时内置插件在前）
    pub core_plugin: bool,
    /// 插件分组名（如 "padding"）
    pub group: String,
    /// 插件声明顺序
    pub order: u32,
    /// 组内插入偏移
    pub offset: u32,
    /// 生成该样式时使用的变体链
    pub variants: Vec<String>,
}

impl StyleMeta {
    pub fn new(group: impl Into<String>, order: u32) -> Self {
        Self {
            group: group.into(),
            order,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_core_plugin(mut self, core_plugin: bool) -> Self {
        self.core_plugin = core_plugin;
        self
    }

    pub fn with_layer(mut self, layer: StyleLayer) -> Self {
        self.layer = layer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_to_css() {
        let decl = Declaration::new("padding", "1rem");
        assert_eq!(decl.to_css(false), "padding: 1rem");
        assert_eq!(decl.to_css(true), "padding:1rem");
    }

    #[test]
    fn test_declaration_important() {
        let mut decl = Declaration::new("color", "red");
        decl.important = true;
        assert_eq!(decl.to_css(false), "color: red !important");
        assert_eq!(decl.to_css(true), "color:red!important");
    }

    #[test]
    fn test_meta_builder() {
        let meta = StyleMeta::new("padding", 120).with_offset(3).with_core_plugin(true);
        assert_eq!(meta.group, "padding");
        assert_eq!(meta.order, 120);
        assert_eq!(meta.offset, 3);
        assert!(meta.core_plugin);
        assert_eq!(meta.layer, StyleLayer::Utilities);
    }
}
