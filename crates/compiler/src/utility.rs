use crosswind_core::escape_class;

/// 工具类主体的只读视图（已去掉变体、`!` 与前缀）
///
/// ```text
/// -mx-[2px]
/// │└┬┘ └─┬─┘
/// │ key  amount
/// └ is_negative
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    raw: String,
}

impl Utility {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_negative(&self) -> bool {
        self.raw.starts_with('-')
    }

    /// 去掉负号后的文本
    pub fn absolute(&self) -> &str {
        self.raw.strip_prefix('-').unwrap_or(&self.raw)
    }

    /// 第一个 `-` 之前的片段，如 `bg-red-500` → `bg`
    pub fn identifier(&self) -> &str {
        let absolute = self.absolute();
        let head = absolute.split('[').next().unwrap_or(absolute);
        match head.find('-') {
            Some(idx) => &absolute[..idx],
            None => head,
        }
    }

    /// 标识符之后的部分，如 `bg-red-500` → `red-500`
    pub fn body(&self) -> &str {
        let absolute = self.absolute();
        let identifier = self.identifier();
        absolute[identifier.len()..].strip_prefix('-').unwrap_or("")
    }

    /// 末尾的方括号片段或最后一个 `-` 之后的片段
    pub fn amount(&self) -> &str {
        let absolute = self.absolute();
        if absolute.ends_with(']') {
            if let Some(idx) = absolute.find('[') {
                return &absolute[idx..];
            }
        }
        match absolute.rfind('-') {
            Some(idx) => &absolute[idx + 1..],
            None => "",
        }
    }

    /// `amount` 之前的部分，如 `border-t-2` → `border-t`
    pub fn key(&self) -> &str {
        let absolute = self.absolute();
        let amount = self.amount();
        if amount.is_empty() {
            return absolute;
        }
        absolute[..absolute.len() - amount.len()].trim_end_matches('-')
    }

    /// 默认选择器 `.` + 转义后的原始文本
    pub fn class(&self) -> String {
        format!(".{}", escape_class(&self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let u = Utility::new("bg-red-500");
        assert!(!u.is_negative());
        assert_eq!(u.identifier(), "bg");
        assert_eq!(u.body(), "red-500");
        assert_eq!(u.amount(), "500");
        assert_eq!(u.key(), "bg-red");
    }

    #[test]
    fn test_negative() {
        let u = Utility::new("-m-2");
        assert!(u.is_negative());
        assert_eq!(u.absolute(), "m-2");
        assert_eq!(u.identifier(), "m");
        assert_eq!(u.amount(), "2");
        assert_eq!(u.class(), ".-m-2");
    }

    #[test]
    fn test_brackets() {
        let u = Utility::new("m-[-11rem]");
        assert!(!u.is_negative());
        assert_eq!(u.amount(), "[-11rem]");
        assert_eq!(u.key(), "m");

        let u = Utility::new("w-[calc(100%-1rem)]");
        assert_eq!(u.identifier(), "w");
        assert_eq!(u.amount(), "[calc(100%-1rem)]");
    }

    #[test]
    fn test_no_dash() {
        let u = Utility::new("flex");
        assert_eq!(u.identifier(), "flex");
        assert_eq!(u.body(), "");
        assert_eq!(u.amount(), "");
        assert_eq!(u.key(), "flex");
    }

    #[test]
    fn test_class_escapes() {
        assert_eq!(Utility::new("w-1/2").class(), ".w-1\\/2");
    }
}
