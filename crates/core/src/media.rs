//! 媒体查询排序
//!
//! 保证"更宽泛、移动优先"的查询先输出：
//! 无 at-rule < 尺寸查询 < 无法解析的查询 < print。
//! 尺寸查询之间 max-only 在 min/range 之前，其余按解析出的长度升序。

use crate::style::Style;
use std::cmp::Ordering;

/// 媒体查询排序键
#[derive(Debug, Clone)]
pub enum MediaKey {
    Unconditional,
    Size { max_only: bool, px: f64 },
    Unparsable(String),
    Print,
}

impl MediaKey {
    /// 从样式的 at-rule 栈中提取排序键
    ///
    /// 取第一个带宽度条件的 `@media`；没有时看是否为 print，
    /// 否则按第一个 `@media` 的文本排序。
    pub fn of(style: &Style) -> Self {
        let medias: Vec<&str> = style
            .at_rules
            .iter()
            .map(|s| s.as_str())
            .filter(|s| s.starts_with("@media"))
            .collect();

        if medias.is_empty() {
            return MediaKey::Unconditional;
        }

        for media in &medias {
            let min = feature_length(media, "min-width");
            let max = feature_length(media, "max-width");
            match (min, max) {
                (Some(px), _) => return MediaKey::Size { max_only: false, px },
                (None, Some(px)) => return MediaKey::Size { max_only: true, px },
                _ => {}
            }
        }

        if medias.iter().any(|m| m.contains("print")) {
            return MediaKey::Print;
        }

        MediaKey::Unparsable(medias[0].to_string())
    }

    fn rank(&self) -> u8 {
        match self {
            MediaKey::Unconditional => 0,
            MediaKey::Size { .. } => 1,
            MediaKey::Unparsable(_) => 2,
            MediaKey::Print => 3,
        }
    }
}

impl Ord for MediaKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                MediaKey::Size { max_only: a_max, px: a_px },
                MediaKey::Size { max_only: b_max, px: b_px },
            ) => b_max.cmp(a_max).then_with(|| a_px.total_cmp(b_px)),
            (MediaKey::Unparsable(a), MediaKey::Unparsable(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for MediaKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MediaKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MediaKey {}

/// 样式表排序键：媒体查询 → 插件顺序 → 组内偏移 → 内置插件优先 → 选择器
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    media: MediaKey,
    order: u32,
    offset: u32,
    user_plugin: bool,
    rule: String,
}

impl SortKey {
    pub fn of(style: &Style) -> Self {
        Self {
            media: MediaKey::of(style),
            order: style.meta.order,
            offset: style.meta.offset,
            user_plugin: !style.meta.core_plugin,
            rule: style.rule(),
        }
    }
}

/// 比较两个样式的媒体查询
pub fn compare_media(a: &Style, b: &Style) -> Ordering {
    MediaKey::of(a).cmp(&MediaKey::of(b))
}

/// 取出 `(feature: <length>)` 中的长度并换算成 px
fn feature_length(media: &str, feature: &str) -> Option<f64> {
    let start = media.find(feature)? + feature.len();
    let rest = media[start..].trim_start().strip_prefix(':')?;
    let end = rest.find(')').unwrap_or(rest.len());
    parse_length_px(rest[..end].trim())
}

/// 解析长度为 px 数值；rem/em 按 16px 换算，无单位视为 px
pub fn parse_length_px(raw: &str) -> Option<f64> {
    let value = raw.trim();
    let split_idx = value
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit() && *ch != '.' && *ch != '-')
        .map(|(idx, _)| idx)
        .unwrap_or(value.len());
    let number = value[..split_idx].parse::<f64>().ok()?;
    match value[split_idx..].trim() {
        "" | "px" => Some(number),
        "rem" | "em" => Some(number * 16.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(at_rule: &str) -> Style {
        Style::default().with_at_rule(at_rule)
    }

    #[test]
    fn test_parse_length_px() {
        assert_eq!(parse_length_px("640px"), Some(640.0));
        assert_eq!(parse_length_px("40rem"), Some(640.0));
        assert_eq!(parse_length_px("768"), Some(768.0));
        assert_eq!(parse_length_px("calc(1px)"), None);
        assert_eq!(parse_length_px("10vw"), None);
    }

    #[test]
    fn test_unconditional_first() {
        let plain = Style::default();
        let sm = media("@media (min-width: 640px)");
        assert_eq!(compare_media(&plain, &sm), Ordering::Less);
    }

    #[test]
    fn test_min_width_ascending() {
        let sm = media("@media (min-width: 640px)");
        let lg = media("@media (min-width: 1024px)");
        assert_eq!(compare_media(&sm, &lg), Ordering::Less);
        assert_eq!(compare_media(&lg, &sm), Ordering::Greater);
    }

    #[test]
    fn test_max_only_before_min() {
        let max = media("@media (max-width: 1024px)");
        let min = media("@media (min-width: 640px)");
        assert_eq!(compare_media(&max, &min), Ordering::Less);
    }

    #[test]
    fn test_print_after_sizes() {
        let print = media("@media print");
        let xl = media("@media (min-width: 1280px)");
        let dark = media("@media (prefers-color-scheme: dark)");
        assert_eq!(compare_media(&print, &xl), Ordering::Greater);
        assert_eq!(compare_media(&print, &dark), Ordering::Greater);
        assert_eq!(compare_media(&dark, &xl), Ordering::Greater);
    }

    #[test]
    fn test_nested_size_query_wins() {
        let style = Style::default()
            .with_at_rule("@media (prefers-color-scheme: dark)")
            .with_at_rule("@media (min-width: 640px)");
        match MediaKey::of(&style) {
            MediaKey::Size { max_only, px } => {
                assert!(!max_only);
                assert_eq!(px, 640.0);
            }
            other => panic!("expected size key, got {:?}", other),
        }
    }

    #[test]
    fn test_sort_key_tiebreakers() {
        use crate::types::StyleMeta;

        let core = Style::default().with_meta(StyleMeta::new("padding", 10).with_core_plugin(true));
        let user = Style::default().with_meta(StyleMeta::new("padding", 10));
        let later = Style::default().with_meta(StyleMeta::new("margin", 20).with_core_plugin(true));

        assert!(SortKey::of(&core) < SortKey::of(&user));
        assert!(SortKey::of(&user) < SortKey::of(&later));

        let a = Style::new(".a", vec![]).with_meta(StyleMeta::new("padding", 10));
        let b = Style::new(".b", vec![]).with_meta(StyleMeta::new("padding", 10));
        assert!(SortKey::of(&a) < SortKey::of(&b));
    }
}
