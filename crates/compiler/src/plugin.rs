use crate::config::Config;
use crate::utility::Utility;
use crosswind_core::{Property, Style};
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// 动态工具类解析函数，返回 `None` 表示不适用
pub type DynamicResolver = Arc<dyn Fn(&Utility, &Config) -> Option<Vec<Style>> + Send + Sync>;

/// 已解析好的插件表（插件注册与配置合并在外部完成）
#[derive(Clone, Default)]
pub struct PluginTable {
    /// 用户静态工具类
    pub utilities: IndexMap<String, Vec<Property>>,
    /// 组件类，输出到 components 层
    pub components: IndexMap<String, Vec<Property>>,
    /// 快捷方式：名称 → 类字符串
    pub shortcuts: IndexMap<String, String>,
    /// 有序的 (锚定正则, 解析函数)，第一个匹配生效
    pub dynamic: Vec<(Regex, DynamicResolver)>,
    /// 额外的内置静态工具类
    pub core: IndexMap<String, Vec<Property>>,
}

impl PluginTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utility(mut self, name: impl Into<String>, properties: Vec<Property>) -> Self {
        self.utilities.insert(name.into(), properties);
        self
    }

    pub fn component(mut self, name: impl Into<String>, properties: Vec<Property>) -> Self {
        self.components.insert(name.into(), properties);
        self
    }

    pub fn shortcut(mut self, name: impl Into<String>, classes: impl Into<String>) -> Self {
        self.shortcuts.insert(name.into(), classes.into());
        self
    }

    pub fn core_utility(mut self, name: impl Into<String>, properties: Vec<Property>) -> Self {
        self.core.insert(name.into(), properties);
        self
    }

    /// 注册动态工具类；`pattern` 会被锚定为整串匹配
    pub fn dynamic<F>(mut self, pattern: &str, resolver: F) -> Result<Self, regex::Error>
    where
        F: Fn(&Utility, &Config) -> Option<Vec<Style>> + Send + Sync + 'static,
    {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        self.dynamic.push((regex, Arc::new(resolver)));
        Ok(self)
    }

    /// 第一个匹配的动态解析函数
    pub fn match_dynamic(&self, name: &str) -> Option<&DynamicResolver> {
        self.dynamic
            .iter()
            .find(|(regex, _)| regex.is_match(name))
            .map(|(_, resolver)| resolver)
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
            && self.components.is_empty()
            && self.shortcuts.is_empty()
            && self.dynamic.is_empty()
            && self.core.is_empty()
    }
}

impl fmt::Debug for PluginTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginTable")
            .field("utilities", &self.utilities.keys().collect::<Vec<_>>())
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .field("shortcuts", &self.shortcuts)
            .field(
                "dynamic",
                &self.dynamic.iter().map(|(r, _)| r.as_str()).collect::<Vec<_>>(),
            )
            .field("core", &self.core.keys().collect::<Vec<_>>())
            .finish()
    }
}
