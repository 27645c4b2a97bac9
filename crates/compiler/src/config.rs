use crate::error::ConfigError;
use crate::handler::color::{flatten_colors, ColorValue};
use crate::theme::default_theme;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// 暗色模式策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DarkMode {
    /// `.dark` 父选择器
    #[default]
    Class,
    /// `prefers-color-scheme` 媒体查询
    Media,
    /// 不生成主题变体
    Disabled,
}

/// `important` 配置：布尔值或作为父选择器的字符串
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Important {
    Flag(bool),
    Selector(String),
}

impl Default for Important {
    fn default() -> Self {
        Important::Flag(false)
    }
}

/// `corePlugins`：对象形式为开关表，数组形式为白名单
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CorePlugins {
    Switches(HashMap<String, bool>),
    Allowed(Vec<String>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    theme: Option<Value>,
    #[serde(default)]
    variants: Option<Value>,
    #[serde(default)]
    core_plugins: Option<CorePlugins>,
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    important: Option<Important>,
    #[serde(default)]
    dark_mode: Option<Value>,
    #[serde(default)]
    separator: Option<String>,
    #[serde(default)]
    variant_order: Option<Vec<String>>,
    #[serde(default)]
    alias: HashMap<String, String>,
}

/// 已解析的配置
///
/// 每个实例都有进程内唯一的版本号，提取缓存以此区分配置。
/// `with_*` 构建方法会换发新版本。
#[derive(Debug, Clone)]
pub struct Config {
    theme: Value,
    variants: Value,
    core_plugins: Option<CorePlugins>,
    prefix: Option<String>,
    important: Important,
    dark_mode: DarkMode,
    separator: String,
    variant_order: Option<Vec<String>>,
    alias: HashMap<String, String>,
    colors: IndexMap<String, ColorValue>,
    version: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_theme(default_theme())
    }
}

impl Config {
    fn from_theme(theme: Value) -> Self {
        let colors = flatten_colors(theme.get("colors"));
        Self {
            theme,
            variants: Value::Null,
            core_plugins: None,
            prefix: None,
            important: Important::default(),
            dark_mode: DarkMode::default(),
            separator: crosswind_parse::DEFAULT_SEPARATOR.to_string(),
            variant_order: None,
            alias: HashMap::new(),
            colors,
            version: next_version(),
        }
    }

    /// 从 JSON 文本加载配置，缺失的主题键回退到默认主题
    pub fn from_json(json: &str) -> Result<Config, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let mut theme = default_theme();
        if let (Some(Value::Object(user)), Value::Object(base)) = (raw.theme, &mut theme) {
            for (key, value) in user {
                base.insert(key, value);
            }
        }

        let mut config = Config::from_theme(theme);
        config.variants = raw.variants.unwrap_or(Value::Null);
        config.core_plugins = raw.core_plugins;
        config.prefix = raw.prefix.filter(|p| !p.is_empty());
        config.important = raw.important.unwrap_or_default();
        config.variant_order = raw.variant_order;
        config.alias = raw.alias;

        if let Some(mode) = raw.dark_mode {
            config.dark_mode = parse_dark_mode(&mode)?;
        }
        if let Some(separator) = raw.separator {
            config.separator = validate_separator(separator)?;
        }

        Ok(config)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self.renew()
    }

    pub fn with_important(mut self, important: Important) -> Self {
        self.important = important;
        self.renew()
    }

    pub fn with_dark_mode(mut self, dark_mode: DarkMode) -> Self {
        self.dark_mode = dark_mode;
        self.renew()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Result<Self, ConfigError> {
        self.separator = validate_separator(separator.into())?;
        Ok(self.renew())
    }

    pub fn with_variant_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variant_order = Some(order.into_iter().map(Into::into).collect());
        self.renew()
    }

    pub fn with_alias(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.alias.insert(name.into(), value.into());
        self.renew()
    }

    /// 注册颜色（可以是按透明度变量生成值的回调）
    pub fn with_color(mut self, name: impl Into<String>, color: ColorValue) -> Self {
        self.colors.insert(name.into(), color);
        self.renew()
    }

    fn renew(mut self) -> Self {
        self.version = next_version();
        self
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// 按点分路径读取主题值，如 `theme("fontSize.lg")`
    ///
    /// 键本身可以含点（如 `spacing.0.5`），优先匹配更长的键。
    pub fn theme(&self, path: &str) -> Option<&Value> {
        lookup(&self.theme, path)
    }

    /// 读取主题值，缺失时返回 `default`
    pub fn theme_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.theme(path).unwrap_or(default)
    }

    /// 主题中的字符串值
    pub fn theme_str(&self, path: &str) -> Option<&str> {
        self.theme(path).and_then(Value::as_str)
    }

    /// 按工具组读取允许的变体列表
    pub fn variants(&self, path: &str) -> Option<Vec<String>> {
        let list = lookup(&self.variants, path)?.as_array()?;
        Some(
            list.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
        )
    }

    /// 内置插件组是否启用，默认启用
    pub fn core_plugins(&self, name: &str) -> bool {
        match &self.core_plugins {
            None => true,
            Some(CorePlugins::Switches(map)) => map.get(name).copied().unwrap_or(true),
            Some(CorePlugins::Allowed(list)) => list.iter().any(|p| p == name),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn important(&self) -> &Important {
        &self.important
    }

    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn variant_order(&self) -> Option<&[String]> {
        self.variant_order.as_deref()
    }

    pub fn alias(&self, name: &str) -> Option<&str> {
        self.alias.get(name).map(String::as_str)
    }

    /// 展平后的颜色表（`DEFAULT` 键折叠为裸名）
    pub fn colors(&self) -> &IndexMap<String, ColorValue> {
        &self.colors
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    let object = root.as_object()?;
    if let Some(value) = object.get(path) {
        return Some(value);
    }

    // 从最长前缀开始尝试
    let mut split = path.len();
    while let Some(idx) = path[..split].rfind('.') {
        if let Some(value) = object.get(&path[..idx]) {
            if let Some(found) = lookup(value, &path[idx + 1..]) {
                return Some(found);
            }
        }
        split = idx;
    }
    None
}

fn parse_dark_mode(value: &Value) -> Result<DarkMode, ConfigError> {
    match value {
        Value::Bool(false) | Value::Null => Ok(DarkMode::Disabled),
        Value::String(s) if s == "class" => Ok(DarkMode::Class),
        Value::String(s) if s == "media" => Ok(DarkMode::Media),
        other => Err(ConfigError::InvalidDarkMode(other.to_string())),
    }
}

fn validate_separator(separator: String) -> Result<String, ConfigError> {
    if separator.is_empty() || separator.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidSeparator(separator));
    }
    Ok(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.separator(), ":");
        assert_eq!(config.dark_mode(), DarkMode::Class);
        assert_eq!(config.important(), &Important::Flag(false));
        assert_eq!(config.theme_str("screens.sm"), Some("640px"));
        assert!(config.core_plugins("padding"));
    }

    #[test]
    fn test_theme_path_with_dotted_key() {
        let config = Config::from_json(r#"{"theme": {"spacing": {"0.5": "0.125rem"}}}"#).unwrap();
        assert_eq!(config.theme_str("spacing.0.5"), Some("0.125rem"));
        assert_eq!(config.theme("spacing.7"), None);

        let fallback = json!("none");
        assert_eq!(config.theme_or("spacing.7", &fallback), &fallback);
    }

    #[test]
    fn test_user_theme_replaces_top_level_key() {
        let config = Config::from_json(r#"{"theme": {"screens": {"tablet": "900px"}}}"#).unwrap();
        assert_eq!(config.theme_str("screens.tablet"), Some("900px"));
        assert_eq!(config.theme("screens.sm"), None);
        // 其他键仍来自默认主题
        assert_eq!(config.theme_str("fontWeight.bold"), Some("700"));
    }

    #[test]
    fn test_from_json_fields() {
        let config = Config::from_json(
            r##"{
                "prefix": "tw-",
                "important": "#app",
                "darkMode": "media",
                "separator": "_",
                "variantOrder": ["sm", "hover"],
                "corePlugins": {"padding": false},
                "variants": {"padding": ["hover"]},
                "alias": {"hstack": "flex items-center"}
            }"##,
        )
        .unwrap();

        assert_eq!(config.prefix(), Some("tw-"));
        assert_eq!(config.important(), &Important::Selector("#app".to_string()));
        assert_eq!(config.dark_mode(), DarkMode::Media);
        assert_eq!(config.separator(), "_");
        assert_eq!(config.variant_order().map(|v| v.len()), Some(2));
        assert!(!config.core_plugins("padding"));
        assert!(config.core_plugins("margin"));
        assert_eq!(config.variants("padding"), Some(vec!["hover".to_string()]));
        assert_eq!(config.alias("hstack"), Some("flex items-center"));
    }

    #[test]
    fn test_core_plugins_allow_list() {
        let config = Config::from_json(r#"{"corePlugins": ["margin"]}"#).unwrap();
        assert!(config.core_plugins("margin"));
        assert!(!config.core_plugins("padding"));
    }

    #[test]
    fn test_dark_mode_false() {
        let config = Config::from_json(r#"{"darkMode": false}"#).unwrap();
        assert_eq!(config.dark_mode(), DarkMode::Disabled);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_json(r#"{"darkMode": "auto"}"#),
            Err(ConfigError::InvalidDarkMode(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"separator": " "}"#),
            Err(ConfigError::InvalidSeparator(_))
        ));
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_versions_are_unique() {
        let a = Config::default();
        let b = Config::default();
        assert_ne!(a.version(), b.version());

        let version = b.version();
        let b = b.with_prefix("x-");
        assert_ne!(b.version(), version);
    }

    #[test]
    fn test_flattened_colors() {
        let config = Config::default();
        assert!(config.colors().contains_key("green-300"));
        assert!(config.colors().contains_key("black"));
        assert!(!config.colors().contains_key("green"));
    }
}
