/// compile 模式的默认类名前缀
pub const DEFAULT_PREFIX: &str = "crosswind-";

/// 命名策略：由一组类名生成一个合成类名
pub trait NamingStrategy {
    fn generate_name(&self, classes: &[String]) -> String;
}

/// Hash 命名策略：前缀 + blake3 前 8 位十六进制
///
/// 输入按源码顺序拼接，不排序，所以不同顺序得到不同类名。
pub struct HashNaming<'a> {
    pub prefix: &'a str,
}

impl Default for HashNaming<'_> {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX,
        }
    }
}

impl NamingStrategy for HashNaming<'_> {
    fn generate_name(&self, classes: &[String]) -> String {
        let input = classes.join(" ");
        let hash = blake3::hash(input.as_bytes());
        let hex = hash.to_hex();
        format!("{}{}", self.prefix, &hex[..8])
    }
}
