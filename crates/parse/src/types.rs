use serde::{Deserialize, Serialize};

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// 普通工具类（如 `p-4`）
    Utility,
    /// 括号分组（如 `sm:(p-4 m-2)`）
    Group,
    /// 函数调用形式（如 `rgb(1,2,3)`），暂不支持，编译时记为 ignored
    Function,
    /// 别名（如 `*hstack`）
    Alias,
}

/// 节点内容：文本或子节点
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenContent {
    Text(String),
    Tokens(Vec<Token>),
}

/// 解析后的类表达式节点
///
/// `start..end` 为原始字符串中的字节区间，`raw == &input[start..end]`。
/// `variants` 只记录本节点自己的变体链，父分组的变体在编译遍历时再前置。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub raw: String,
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
    pub variants: Vec<String>,
    pub important: bool,
    pub content: TokenContent,
    /// 函数节点的函数名
    pub func: Option<String>,
}

impl Token {
    /// 工具类 / 别名 / 函数参数文本
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            TokenContent::Text(text) => Some(text),
            TokenContent::Tokens(_) => None,
        }
    }

    /// 分组的子节点
    pub fn children(&self) -> &[Token] {
        match &self.content {
            TokenContent::Tokens(tokens) => tokens,
            TokenContent::Text(_) => &[],
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == TokenKind::Group
    }
}

/// 展开后的叶子节点：携带从根到叶累积的变体与重要性
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<'t> {
    pub variants: Vec<String>,
    pub important: bool,
    pub token: &'t Token,
}

impl Leaf<'_> {
    /// 还原完整类名，如 `sm:hover:!p-4`
    pub fn class_name(&self, separator: &str) -> String {
        let mut name = String::new();
        for variant in &self.variants {
            name.push_str(variant);
            name.push_str(separator);
        }
        if self.important {
            name.push('!');
        }
        if self.token.kind == TokenKind::Alias {
            name.push('*');
        }
        match self.token.kind {
            TokenKind::Function => name.push_str(&self.token.raw_body()),
            _ => name.push_str(self.token.text().unwrap_or_default()),
        }
        name
    }
}

impl Token {
    /// 去掉变体与 `!`/`*` 前缀后的主体文本
    fn raw_body(&self) -> String {
        match (&self.func, self.text()) {
            (Some(func), Some(args)) => format!("{}({})", func, args),
            (_, Some(text)) => text.to_string(),
            _ => String::new(),
        }
    }
}

/// 深度优先展开节点树，父分组的变体前置到子节点
pub fn leaves(tokens: &[Token]) -> Vec<Leaf<'_>> {
    let mut out = Vec::new();
    collect_leaves(tokens, &[], false, &mut out);
    out
}

fn collect_leaves<'t>(
    tokens: &'t [Token],
    parent_variants: &[String],
    parent_important: bool,
    out: &mut Vec<Leaf<'t>>,
) {
    for token in tokens {
        let mut variants = parent_variants.to_vec();
        variants.extend(token.variants.iter().cloned());
        let important = parent_important || token.important;

        if token.is_group() {
            collect_leaves(token.children(), &variants, important, out);
        } else {
            out.push(Leaf {
                variants,
                important,
                token,
            });
        }
    }
}
