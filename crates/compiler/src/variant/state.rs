use super::{at_rule, child, parent, pseudo_class, pseudo_element, VariantFn};
use indexmap::IndexMap;

/// 伪类，按输出优先级排列
const PSEUDO_CLASSES: [&str; 28] = [
    "first",
    "last",
    "odd",
    "even",
    "only",
    "first-of-type",
    "last-of-type",
    "visited",
    "checked",
    "indeterminate",
    "empty",
    "target",
    "default",
    "required",
    "optional",
    "valid",
    "invalid",
    "read-only",
    "placeholder-shown",
    "focus-within",
    "hover",
    "focus",
    "focus-visible",
    "active",
    "enabled",
    "disabled",
    "open",
    "inert",
];

const PSEUDO_ELEMENTS: [&str; 8] = [
    "before",
    "after",
    "placeholder",
    "selection",
    "marker",
    "first-line",
    "first-letter",
    "file",
];

/// 可用于 group-* / peer-* 的状态
const RELATIONAL_STATES: [&str; 8] = [
    "hover",
    "focus",
    "focus-within",
    "focus-visible",
    "active",
    "checked",
    "disabled",
    "visited",
];

/// 变体名 → CSS 伪类（不含前导冒号）
///
/// - `first` → `first-child`
/// - `odd` → `nth-child(odd)`
pub fn pseudo_class_selector(name: &str) -> String {
    match name {
        "first" => "first-child".to_string(),
        "last" => "last-child".to_string(),
        "only" => "only-child".to_string(),
        "odd" => "nth-child(odd)".to_string(),
        "even" => "nth-child(even)".to_string(),
        "open" => "is([open], :popover-open)".to_string(),
        "inert" => "is([inert], [inert] *)".to_string(),
        _ => name.to_string(),
    }
}

/// 变体名 → CSS 伪元素（不含前导 `::`）
pub fn pseudo_element_selector(name: &str) -> String {
    match name {
        "file" => "file-selector-button".to_string(),
        _ => name.to_string(),
    }
}

/// 状态变体：伪类、伪元素、group / peer、运动偏好、书写方向、子元素
pub fn state_variants() -> IndexMap<String, VariantFn> {
    let mut variants: IndexMap<String, VariantFn> = IndexMap::new();

    variants.insert(
        "motion-safe".into(),
        at_rule("@media (prefers-reduced-motion: no-preference)"),
    );
    variants.insert(
        "motion-reduce".into(),
        at_rule("@media (prefers-reduced-motion: reduce)"),
    );
    variants.insert("rtl".into(), parent("[dir='rtl']"));
    variants.insert("ltr".into(), parent("[dir='ltr']"));

    for state in RELATIONAL_STATES {
        let pseudo = pseudo_class_selector(state);
        variants.insert(format!("group-{}", state), parent(format!(".group:{}", pseudo)));
        variants.insert(format!("peer-{}", state), parent(format!(".peer:{} ~", pseudo)));
    }

    for name in PSEUDO_CLASSES {
        variants.insert(name.into(), pseudo_class(pseudo_class_selector(name)));
    }

    for name in PSEUDO_ELEMENTS {
        variants.insert(name.into(), pseudo_element(pseudo_element_selector(name)));
    }

    variants.insert("children".into(), child("> *"));
    variants.insert("all".into(), child("*"));
    variants.insert("svg".into(), child("svg"));

    variants
}
