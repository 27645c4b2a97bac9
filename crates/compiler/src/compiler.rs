//! 编译入口
//!
//! `interpret`：每个工具类一条规则，选择器为转义后的完整类名。
//! `compile`：所有规则合并到一个由 hash 生成的类名下。

use crate::cache::ExtractCache;
use crate::config::{Config, Important};
use crate::extract::{retarget, Extractor};
use crate::naming::{HashNaming, NamingStrategy, DEFAULT_PREFIX};
use crate::plugin::PluginTable;
use crate::variant::VariantRegistry;
use crosswind_core::{escape_class, Style, StyleKind, StyleSheet};
use crosswind_parse::{leaves, Leaf, Parser, Token, TokenKind};
use std::collections::HashSet;

/// interpret 的结果
#[derive(Debug, Clone, Default)]
pub struct InterpretResult {
    /// 成功解析的完整类名
    pub success: Vec<String>,
    /// 无法解析的类名
    pub ignored: Vec<String>,
    pub style_sheet: StyleSheet,
}

/// compile 的结果
#[derive(Debug, Clone, Default)]
pub struct CompileResult {
    pub success: Vec<String>,
    pub ignored: Vec<String>,
    /// 合成类名；没有任何工具类命中时为 `None`
    pub class_name: Option<String>,
    pub style_sheet: StyleSheet,
}

/// 单次遍历的中间结果
#[derive(Default)]
struct Processed {
    success: Vec<String>,
    ignored: Vec<String>,
    styles: Vec<Style>,
    /// 每个成功类名对应的自身选择器
    selectors: HashSet<String>,
}

/// 编译器：持有配置、插件表、变体表与提取缓存
///
/// ```
/// use crosswind_compiler::{Compiler, Config};
///
/// let mut compiler = Compiler::new(Config::default());
/// let result = compiler.interpret("p-4 hover:m-2 unknown");
/// assert_eq!(result.success, vec!["p-4", "hover:m-2"]);
/// assert_eq!(result.ignored, vec!["unknown"]);
/// assert_eq!(
///     result.style_sheet.build(true),
///     ".hover\\:m-2:hover{margin:0.5rem}.p-4{padding:1rem}"
/// );
/// ```
#[derive(Debug)]
pub struct Compiler {
    config: Config,
    plugins: PluginTable,
    variants: VariantRegistry,
    cache: ExtractCache,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        let variants = VariantRegistry::new(&config);
        Self {
            config,
            plugins: PluginTable::default(),
            variants,
            cache: ExtractCache::new(),
        }
    }

    pub fn with_plugins(mut self, plugins: PluginTable) -> Self {
        self.plugins = plugins;
        self.cache.clear();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn plugins(&self) -> &PluginTable {
        &self.plugins
    }

    pub fn variants(&self) -> &VariantRegistry {
        &self.variants
    }

    pub fn cache(&self) -> &ExtractCache {
        &self.cache
    }

    /// 替换配置：重建变体表并清空缓存
    pub fn set_config(&mut self, config: Config) {
        self.variants = VariantRegistry::new(&config);
        self.config = config;
        self.cache.clear();
    }

    /// 按当前分隔符与变体表解析类字符串
    pub fn parse(&self, text: &str) -> Vec<Token> {
        Parser::new(text)
            .with_separator(self.config.separator())
            .with_variants(self.variants.names())
            .parse(true)
    }

    pub fn interpret(&mut self, text: &str) -> InterpretResult {
        let processed = self.process(text);
        InterpretResult {
            success: processed.success,
            ignored: processed.ignored,
            style_sheet: finish(processed.styles),
        }
    }

    /// 所有命中的工具类合并到 `prefix + hash` 类名下，`prefix` 缺省为 `crosswind-`
    pub fn compile(&mut self, text: &str, prefix: Option<&str>) -> CompileResult {
        let processed = self.process(text);
        if processed.success.is_empty() {
            return CompileResult {
                ignored: processed.ignored,
                ..CompileResult::default()
            };
        }

        let naming = HashNaming {
            prefix: prefix.unwrap_or(DEFAULT_PREFIX),
        };
        let class_name = naming.generate_name(&processed.success);
        let target = format!(".{}", escape_class(&class_name));

        let styles = processed
            .styles
            .into_iter()
            .map(|mut style| {
                if style
                    .selector
                    .as_ref()
                    .is_some_and(|s| processed.selectors.contains(s))
                {
                    style.selector = Some(target.clone());
                }
                style
            })
            .collect();

        CompileResult {
            success: processed.success,
            ignored: processed.ignored,
            class_name: Some(class_name),
            style_sheet: finish(styles),
        }
    }

    fn process(&mut self, text: &str) -> Processed {
        let tokens = self.parse(text);
        let separator = self.config.separator().to_string();

        let mut processed = Processed::default();
        let mut seen = HashSet::new();
        let mut keyframes = HashSet::new();

        for leaf in leaves(&tokens) {
            let full = leaf.class_name(&separator);
            if !seen.insert(full.clone()) {
                continue;
            }

            let styles = self
                .extract_leaf(&leaf)
                .and_then(|(own, styles)| self.apply(&leaf, &own, &full, styles, &mut keyframes));

            match styles {
                Some(styles) => {
                    processed.selectors.insert(format!(".{}", escape_class(&full)));
                    processed.styles.extend(styles);
                    processed.success.push(full);
                }
                None => {
                    log::debug!("ignored `{}`", full);
                    processed.ignored.push(full);
                }
            }
        }

        processed
    }

    /// 返回 (自身选择器, 样式)；函数节点暂不支持
    fn extract_leaf(&mut self, leaf: &Leaf<'_>) -> Option<(String, Vec<Style>)> {
        let content = leaf.token.text()?;
        let Self {
            config,
            plugins,
            variants,
            cache,
        } = self;
        let extractor = Extractor::new(config, plugins, variants);

        match leaf.token.kind {
            TokenKind::Utility => {
                let styles =
                    cache.get_or_insert_with(config.version(), content, || extractor.extract(content))?;
                Some((format!(".{}", escape_class(content)), styles))
            }
            TokenKind::Alias => {
                let name = format!("*{}", content);
                let styles =
                    cache.get_or_insert_with(config.version(), &name, || extractor.alias(content))?;
                Some((format!(".{}", escape_class(&name)), styles))
            }
            TokenKind::Function | TokenKind::Group => None,
        }
    }

    /// 变体包裹、重要性与选择器改写
    fn apply(
        &self,
        leaf: &Leaf<'_>,
        own: &str,
        full: &str,
        styles: Vec<Style>,
        keyframes: &mut HashSet<String>,
    ) -> Option<Vec<Style>> {
        if !self.variants_allowed(leaf, &styles) {
            return None;
        }

        let selector = format!(".{}", escape_class(full));
        let force = matches!(self.config.important(), Important::Flag(true));

        let mut out = Vec::with_capacity(styles.len());
        let mut emitted = HashSet::new();
        for style in retarget(styles, own, &selector) {
            if let StyleKind::Keyframes(name) = &style.kind {
                // 关键帧不受变体影响，同名只输出一次
                if emitted.contains(name) || keyframes.insert(name.clone()) {
                    emitted.insert(name.clone());
                    out.push(style);
                }
                continue;
            }

            let mut style = self.variants.wrap(&leaf.variants, style)?;
            style.important |= leaf.important || force;
            if let Important::Selector(parent) = self.config.important() {
                style.parent_selectors.insert(0, parent.clone());
            }
            style.meta.variants = leaf.variants.clone();
            out.push(style);
        }

        Some(out)
    }

    /// `config.variants(group)` 限定了某组可用的变体
    fn variants_allowed(&self, leaf: &Leaf<'_>, styles: &[Style]) -> bool {
        if leaf.variants.is_empty() {
            return true;
        }
        styles.iter().all(|style| match self.config.variants(&style.meta.group) {
            Some(allowed) => leaf.variants.iter().all(|v| allowed.contains(v)),
            None => true,
        })
    }
}

fn finish(styles: Vec<Style>) -> StyleSheet {
    let mut sheet = StyleSheet::new();
    sheet.add_all(styles).combine().sort();
    sheet
}
