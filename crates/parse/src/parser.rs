use crate::types::{Token, TokenContent, TokenKind};
use std::collections::HashSet;

/// 默认变体分隔符
pub const DEFAULT_SEPARATOR: &str = ":";

/// 按默认分隔符解析类字符串，重复的节点在每一层内去重
///
/// # 示例
///
/// ```
/// use crosswind_parse::{parse, TokenKind};
///
/// let tokens = parse("sm:(p-4 hover:m-2) !font-bold", ["sm", "hover"]);
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Group);
/// assert_eq!(tokens[0].children().len(), 2);
/// assert!(tokens[1].important);
/// ```
pub fn parse<I, S>(input: &str, variants: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new(input).with_variants(variants).parse(true)
}

/// 类表达式解析器
///
/// 解析永不失败：无法识别的文本都会落到普通工具类节点中，
/// 由后续的编译阶段决定是否忽略。
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    separator: String,
    variants: HashSet<String>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            separator: DEFAULT_SEPARATOR.to_string(),
            variants: HashSet::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        if !separator.is_empty() {
            self.separator = separator;
        }
        self
    }

    /// 设置已知变体名；只有已知变体才会被当作前缀剥离
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// 解析整个输入
    pub fn parse(&mut self, remove_duplicated: bool) -> Vec<Token> {
        self.pos = 0;
        self.parse_group(false, remove_duplicated)
    }

    /// 解析一层节点；`nested` 时遇到 `)` 结束并消费它
    fn parse_group(&mut self, nested: bool, remove_duplicated: bool) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        loop {
            self.skip_whitespace();
            if self.is_eof() {
                break;
            }

            if nested && self.consume_if(')') {
                break;
            }

            let token = self.parse_token(nested, remove_duplicated);
            if remove_duplicated && !seen.insert(token.raw.clone()) {
                continue;
            }
            tokens.push(token);
        }

        tokens
    }

    fn parse_token(&mut self, nested: bool, remove_duplicated: bool) -> Token {
        let start = self.pos;

        // 1. 前置重要性标记
        let mut important = self.consume_if('!');

        // 2. 变体链
        let mut variants = Vec::new();
        while let Some((variant, next)) = self.match_variant() {
            variants.push(variant);
            self.pos = next;
        }

        // 3. 变体之后的重要性标记（`sm:!p-4`）
        if self.consume_if('!') {
            important = true;
        }

        // 4. 分组
        if self.consume_if('(') {
            let children = self.parse_group(true, remove_duplicated);
            return Token {
                raw: self.input[start..self.pos].to_string(),
                start,
                end: self.pos,
                kind: TokenKind::Group,
                variants,
                important,
                content: TokenContent::Tokens(children),
                func: None,
            };
        }

        // 5. 别名
        let alias = self.consume_if('*');

        // 6. 主体
        let body_start = self.pos;
        let mut func: Option<(String, usize, usize)> = None;

        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() || (nested && ch == ')') {
                break;
            }

            match ch {
                '[' => self.skip_brackets(),
                '(' => {
                    let prev = self.input[body_start..self.pos].chars().last();
                    let open = self.pos;
                    self.skip_parens();
                    if func.is_none() && !alias && matches!(prev, Some(p) if p != '-') {
                        let name = self.input[body_start..open].to_string();
                        let close = if self.input[..self.pos].ends_with(')') {
                            self.pos - 1
                        } else {
                            self.pos
                        };
                        func = Some((name, open + 1, close));
                    }
                }
                _ => self.pos += ch.len_utf8(),
            }
        }

        let raw = self.input[start..self.pos].to_string();
        let body = &self.input[body_start..self.pos];

        let (kind, content, func) = match func {
            Some((name, args_start, args_end)) => (
                TokenKind::Function,
                self.input[args_start..args_end].to_string(),
                Some(name),
            ),
            None if alias => (TokenKind::Alias, body.to_string(), None),
            None => (TokenKind::Utility, body.to_string(), None),
        };

        Token {
            raw,
            start,
            end: self.pos,
            kind,
            variants,
            important,
            content: TokenContent::Text(content),
            func,
        }
    }

    /// 尝试在当前位置匹配 `variant<separator>`
    ///
    /// 返回变体名和分隔符之后的位置；分隔符后没有内容时不算变体。
    fn match_variant(&self) -> Option<(String, usize)> {
        let rest = &self.input[self.pos..];

        let mut end = None;
        for (idx, ch) in rest.char_indices() {
            if rest[idx..].starts_with(self.separator.as_str()) {
                end = Some(idx);
                break;
            }
            if ch.is_whitespace() || matches!(ch, '(' | ')' | '[' | '!') {
                return None;
            }
        }

        let end = end?;
        let name = &rest[..end];
        if name.is_empty() || !self.variants.contains(name) {
            return None;
        }

        let next = self.pos + end + self.separator.len();
        match self.input[next..].chars().next() {
            Some(ch) if !ch.is_whitespace() && ch != ')' => Some((name.to_string(), next)),
            _ => None,
        }
    }

    /// 跳过 `[...]`，方括号内的内容不做任何解释；未闭合时停在空白处
    fn skip_brackets(&mut self) {
        self.pos += 1;
        while let Some(ch) = self.current_char() {
            if ch == ']' {
                self.pos += 1;
                return;
            }
            if ch.is_whitespace() {
                return;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// 跳过配平的 `(...)`；未闭合时吃到输入结尾
    fn skip_parens(&mut self) {
        let mut depth = 0usize;
        while let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn consume_if(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }
}
