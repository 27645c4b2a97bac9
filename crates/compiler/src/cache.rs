use crosswind_core::Style;
use std::collections::HashMap;

/// 提取结果缓存，键为 `(配置版本, 工具类文本)`
///
/// 失败结果也会缓存，重复出现的无效类不再重新解析。
#[derive(Debug, Default)]
pub struct ExtractCache {
    entries: HashMap<(u64, String), Option<Vec<Style>>>,
}

impl ExtractCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, version: u64, content: &str) -> Option<&Option<Vec<Style>>> {
        let hit = self.entries.get(&(version, content.to_string()));
        log::trace!(
            "extract cache {} for `{}`",
            if hit.is_some() { "hit" } else { "miss" },
            content
        );
        hit
    }

    pub fn insert(&mut self, version: u64, content: impl Into<String>, styles: Option<Vec<Style>>) {
        self.entries.insert((version, content.into()), styles);
    }

    /// 查找，未命中时用 `extract` 计算并写入
    pub fn get_or_insert_with<F>(&mut self, version: u64, content: &str, extract: F) -> Option<Vec<Style>>
    where
        F: FnOnce() -> Option<Vec<Style>>,
    {
        if let Some(cached) = self.get(version, content) {
            return cached.clone();
        }
        let styles = extract();
        self.insert(version, content, styles.clone());
        styles
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
