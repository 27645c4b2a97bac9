//! 值解析管道
//!
//! 每一步都是 `(Slot, amount) -> Slot` 的纯函数，已解析后后续步骤不再生效。
//! 典型用法：
//!
//! ```
//! use crosswind_compiler::handler::Handler;
//! use crosswind_compiler::Utility;
//!
//! let utility = Utility::new("-m-2");
//! let value = Handler::new(&utility)
//!     .handle_static(None)
//!     .handle_spacing()
//!     .handle_negative()
//!     .value();
//! assert_eq!(value.as_deref(), Some("-0.5rem"));
//! ```

pub mod color;

use crate::utility::Utility;
use crosswind_core::{Property, PropertyName, Style};
use serde_json::Value;

/// 值的来源，用于负值处理判断
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Static,
    Number,
    Fraction,
    Spacing,
    Size,
    Bracket,
    Variable,
    Time,
}

/// 管道中的值槽
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Unresolved,
    Resolved { value: String, source: Source },
}

impl Slot {
    fn resolved(value: impl Into<String>, source: Source) -> Self {
        Slot::Resolved {
            value: value.into(),
            source,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Slot::Resolved { .. })
    }
}

const SIZE_UNITS: [&str; 15] = [
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex", "pt", "pc", "in", "cm", "mm",
];

/// 格式化数值：最多保留 6 位小数并去掉末尾的 0
pub(crate) fn format_number(value: f64) -> String {
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn parse_number(amount: &str) -> Option<f64> {
    if amount.is_empty()
        || !amount
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return None;
    }
    amount.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// 关键字表 / 主题对象中的值；数组取第一个元素
pub fn static_value(slot: Slot, amount: &str, map: Option<&Value>) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    let key = if amount.is_empty() { "DEFAULT" } else { amount };
    match map.and_then(|m| m.get(key)) {
        Some(Value::String(s)) => Slot::resolved(s.as_str(), Source::Static),
        Some(Value::Number(n)) => Slot::resolved(n.to_string(), Source::Static),
        Some(Value::Array(items)) => match items.first() {
            Some(Value::String(s)) => Slot::resolved(s.as_str(), Source::Static),
            _ => slot,
        },
        _ => slot,
    }
}

/// 固定关键字表
pub fn keywords(slot: Slot, amount: &str, table: &[(&str, &str)]) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    match table.iter().find(|(key, _)| *key == amount) {
        Some((_, value)) => Slot::resolved(*value, Source::Static),
        None => slot,
    }
}

/// `[start, end]` 区间内的数字，可附加单位
pub fn number(slot: Slot, amount: &str, start: f64, end: f64, unit: Option<&str>) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    match parse_number(amount) {
        Some(n) if n >= start && n <= end => Slot::resolved(
            format!("{}{}", format_number(n), unit.unwrap_or("")),
            Source::Number,
        ),
        _ => slot,
    }
}

/// `a/b` → 百分比
pub fn fraction(slot: Slot, amount: &str) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    let Some((a, b)) = amount.split_once('/') else {
        return slot;
    };
    match (parse_number(a), parse_number(b)) {
        (Some(a), Some(b)) if b != 0.0 => {
            Slot::resolved(format!("{}%", format_number(a / b * 100.0)), Source::Fraction)
        }
        _ => slot,
    }
}

/// n × 0.25rem，0 输出为 `0px`
pub fn spacing(slot: Slot, amount: &str) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    match parse_number(amount) {
        Some(n) if n == 0.0 => Slot::resolved("0px", Source::Spacing),
        Some(n) if n > 0.0 => {
            Slot::resolved(format!("{}rem", format_number(n * 0.25)), Source::Spacing)
        }
        _ => slot,
    }
}

/// `<number><unit>`
pub fn size(slot: Slot, amount: &str) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    if split_unit(amount).is_some_and(|(_, unit)| !unit.is_empty()) {
        Slot::resolved(amount, Source::Size)
    } else {
        slot
    }
}

/// 拆出 `<number><unit>`，单位为空或在已知单位表内
fn split_unit(value: &str) -> Option<(f64, &str)> {
    let split = value
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);
    let number = parse_number(digits)?;
    (unit.is_empty() || SIZE_UNITS.contains(&unit)).then_some((number, unit))
}

/// `[...]` 任意值：`_` → 空格，`\_` → `_`，规整 calc 运算符空格
pub fn square_brackets(slot: Slot, amount: &str) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    match bracket_value(amount) {
        Some(value) => Slot::resolved(value, Source::Bracket),
        None => slot,
    }
}

pub(crate) fn bracket_value(amount: &str) -> Option<String> {
    let inner = amount.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }

    const PLACEHOLDER: char = '\u{0}';
    let value = inner
        .replace("\\_", &PLACEHOLDER.to_string())
        .replace('_', " ")
        .replace(PLACEHOLDER, "_");

    if value.contains("calc(") {
        Some(normalize_calc(&value))
    } else {
        Some(value)
    }
}

/// 在 calc 表达式的二元运算符两侧补空格
fn normalize_calc(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 8);

    for (i, &ch) in chars.iter().enumerate() {
        let prev = out.trim_end().chars().last();
        let next = chars.get(i + 1).copied();

        let binary = match ch {
            '+' | '*' | '/' => prev.is_some(),
            '-' => {
                matches!(prev, Some(p) if p.is_ascii_alphanumeric() || p == '%' || p == ')')
                    && matches!(next, Some(n) if n != ')')
                    && !ends_with_identifier(&out)
            }
            _ => false,
        };

        if binary {
            let trimmed = out.trim_end().len();
            out.truncate(trimmed);
            out.push(' ');
            out.push(ch);
            out.push(' ');
        } else if ch == ' ' && out.ends_with(' ') {
            continue;
        } else {
            out.push(ch);
        }
    }

    out
}

/// 末尾是否是标识符（如 `var(--a` 里的 `--a`），此时 `-` 属于标识符本身
fn ends_with_identifier(out: &str) -> bool {
    let run: Vec<char> = out
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '.')
        .collect();
    match run.last() {
        Some(first) => first.is_ascii_alphabetic() || *first == '-',
        None => false,
    }
}

/// `$name` → `var(--name)`
pub fn variable(slot: Slot, amount: &str) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    match amount.strip_prefix('$') {
        Some(name) if !name.is_empty() => {
            Slot::resolved(format!("var(--{})", name), Source::Variable)
        }
        _ => slot,
    }
}

/// 整数毫秒
pub fn time(slot: Slot, amount: &str) -> Slot {
    if slot.is_resolved() {
        return slot;
    }
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return slot;
    }
    match amount.parse::<u32>() {
        Ok(ms) => Slot::resolved(format!("{}ms", ms), Source::Time),
        Err(_) => slot,
    }
}

/// 对已解析的数值取负；`0` 保持不变
///
/// 主题里的长度（`px` → `1px`）照常取负，`auto` 这类关键字不能取负。
pub fn negative(slot: Slot) -> Slot {
    match slot {
        Slot::Resolved {
            value,
            source: Source::Static,
        } if !is_zero(&value) && split_unit(&value).is_none() => Slot::Unresolved,
        Slot::Resolved { value, source } => {
            if is_zero(&value) {
                Slot::Resolved { value, source }
            } else if let Some(positive) = value.strip_prefix('-') {
                Slot::resolved(positive, source)
            } else if value.starts_with("calc(") || value.starts_with("var(") {
                Slot::resolved(format!("calc({} * -1)", value), source)
            } else {
                Slot::resolved(format!("-{}", value), source)
            }
        }
        Slot::Unresolved => Slot::Unresolved,
    }
}

fn is_zero(value: &str) -> bool {
    let digits = value.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    matches!(digits.parse::<f64>(), Ok(n) if n == 0.0)
}

/// 针对一个工具类的解析管道
#[derive(Debug, Clone)]
pub struct Handler<'a> {
    amount: &'a str,
    negative: bool,
    slot: Slot,
}

impl<'a> Handler<'a> {
    /// 以工具类的 `amount` 为输入
    pub fn new(utility: &'a Utility) -> Self {
        Self::with_amount(utility.amount(), utility.is_negative())
    }

    /// 以任意文本为输入（如 `bg-red-500` 中的 `red-500`）
    pub fn with_amount(amount: &'a str, negative: bool) -> Self {
        Self {
            amount,
            negative,
            slot: Slot::Unresolved,
        }
    }

    fn pipe(mut self, step: impl FnOnce(Slot, &str) -> Slot) -> Self {
        if !self.slot.is_resolved() {
            self.slot = step(std::mem::replace(&mut self.slot, Slot::Unresolved), self.amount);
        }
        self
    }

    pub fn handle_static(self, map: Option<&Value>) -> Self {
        self.pipe(|slot, amount| static_value(slot, amount, map))
    }

    pub fn handle_keywords(self, table: &[(&str, &str)]) -> Self {
        self.pipe(|slot, amount| keywords(slot, amount, table))
    }

    pub fn handle_number(self, start: f64, end: f64, unit: Option<&str>) -> Self {
        self.pipe(|slot, amount| number(slot, amount, start, end, unit))
    }

    pub fn handle_fraction(self) -> Self {
        self.pipe(fraction)
    }

    pub fn handle_spacing(self) -> Self {
        self.pipe(spacing)
    }

    pub fn handle_size(self) -> Self {
        self.pipe(size)
    }

    pub fn handle_square_brackets(self) -> Self {
        self.pipe(square_brackets)
    }

    pub fn handle_variable(self) -> Self {
        self.pipe(variable)
    }

    pub fn handle_time(self) -> Self {
        self.pipe(time)
    }

    /// 仅在工具类带负号时生效；放在管道末尾
    pub fn handle_negative(mut self) -> Self {
        if self.negative {
            self.slot = negative(std::mem::replace(&mut self.slot, Slot::Unresolved));
            self.negative = false;
        }
        self
    }

    /// 带负号但未经过 `handle_negative` 的结果视为不适用
    pub fn value(&self) -> Option<String> {
        match &self.slot {
            Slot::Resolved { value, .. } if !self.negative => Some(value.clone()),
            _ => None,
        }
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn create_property(&self, names: impl Into<PropertyName>) -> Option<Property> {
        self.value().map(|value| Property::new(names, value))
    }

    pub fn create_style(&self, selector: &str, names: impl Into<PropertyName>) -> Option<Style> {
        self.create_property(names)
            .map(|property| Style::new(selector, vec![property]))
    }
}
