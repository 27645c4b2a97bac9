use phf::phf_set;

/// 需要补充 `-webkit-` 前缀的属性
///
/// 使用 phf 在编译期生成完美哈希集合
static WEBKIT_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "appearance",
    "backdrop-filter",
    "background-clip",
    "box-decoration-break",
    "hyphens",
    "mask-image",
    "text-size-adjust",
    "user-select",
};

/// 返回带前缀的属性名；不需要前缀时返回 None
pub fn prefixed_name(property: &str) -> Option<String> {
    if WEBKIT_PROPERTIES.contains(property) {
        Some(format!("-webkit-{}", property))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_name() {
        assert_eq!(prefixed_name("appearance").as_deref(), Some("-webkit-appearance"));
        assert_eq!(prefixed_name("padding"), None);
    }
}
