/// 将类名转义为合法的 CSS 类选择器片段（不含前导 `.`）
///
/// - `sm:p-4` → `sm\:p-4`
/// - `w-[51vw]` → `w-\[51vw\]`
/// - `2xl:p-4` → `\32 xl\:p-4`
pub fn escape_class(raw: &str) -> String {
    if raw == "-" {
        return "\\-".to_string();
    }

    let mut escaped = String::with_capacity(raw.len() + 8);
    let first_is_dash = raw.starts_with('-');

    for (i, ch) in raw.chars().enumerate() {
        let leading_digit =
            ch.is_ascii_digit() && (i == 0 || (i == 1 && first_is_dash));

        if leading_digit {
            // 数字开头需要写成 unicode 转义
            escaped.push_str(&format!("\\3{} ", ch));
        } else if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
            escaped.push(ch);
        } else if ch == ' ' {
            escaped.push_str("\\ ");
        } else {
            escaped.push('\\');
            escaped.push(ch);
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_class("p-4"), "p-4");
        assert_eq!(escape_class("font-bold"), "font-bold");
    }

    #[test]
    fn test_escape_variants_and_brackets() {
        assert_eq!(escape_class("sm:hover:text-lg"), "sm\\:hover\\:text-lg");
        assert_eq!(escape_class("w-[51vw]"), "w-\\[51vw\\]");
        assert_eq!(escape_class("bg-[#232]"), "bg-\\[\\#232\\]");
        assert_eq!(escape_class("w-1/2"), "w-1\\/2");
        assert_eq!(escape_class("!p-4"), "\\!p-4");
        assert_eq!(escape_class("p-0.5"), "p-0\\.5");
    }

    #[test]
    fn test_escape_leading_digit() {
        assert_eq!(escape_class("2xl:p-4"), "\\32 xl\\:p-4");
        assert_eq!(escape_class("-2"), "-\\32 ");
    }
}
