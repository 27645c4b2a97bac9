//! 颜色解析

use super::{bracket_value, format_number};
use crate::config::Config;
use crosswind_core::{Property, Style};
use indexmap::IndexMap;
use palette::Srgb;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// 颜色回调的输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorContext<'a> {
    /// 如 `--tw-bg-opacity`
    pub opacity_variable: Option<&'a str>,
    /// `/50` 之类显式给出的透明度
    pub opacity_value: Option<&'a str>,
}

pub type ColorFn = Arc<dyn Fn(ColorContext<'_>) -> String + Send + Sync>;

/// 颜色值：字面量或按透明度生成的回调
#[derive(Clone)]
pub enum ColorValue {
    Literal(String),
    Callback(ColorFn),
}

impl ColorValue {
    pub fn literal(value: impl Into<String>) -> Self {
        ColorValue::Literal(value.into())
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(ColorContext<'_>) -> String + Send + Sync + 'static,
    {
        ColorValue::Callback(Arc::new(f))
    }
}

impl fmt::Debug for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            ColorValue::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// 展平嵌套颜色表：`{red: {500: ..}}` → `red-500`，`DEFAULT` 折叠为裸名
pub fn flatten_colors(colors: Option<&Value>) -> IndexMap<String, ColorValue> {
    let mut out = IndexMap::new();
    if let Some(Value::Object(map)) = colors {
        for (name, value) in map {
            flatten_into(name, value, &mut out);
        }
    }
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut IndexMap<String, ColorValue>) {
    match value {
        Value::String(color) => {
            out.insert(prefix.to_string(), ColorValue::literal(color.as_str()));
        }
        Value::Object(shades) => {
            for (shade, value) in shades {
                let name = if shade == "DEFAULT" {
                    prefix.to_string()
                } else {
                    format!("{}-{}", prefix, shade)
                };
                flatten_into(&name, value, out);
            }
        }
        _ => {}
    }
}

/// 看起来像颜色的任意值
pub fn looks_like_color(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb")
        || value.starts_with("hsl")
        || value.starts_with("oklch")
        || value.starts_with("oklab")
        || value.starts_with("color(")
}

/// 已解析的颜色：值 + 可选的显式透明度
#[derive(Debug, Clone)]
pub struct ResolvedColor {
    pub color: ColorValue,
    pub opacity: Option<String>,
}

/// 解析 `red-500/50`、`[#232]`、`$brand` 这类颜色文本
pub fn resolve_color(config: &Config, body: &str) -> Option<ResolvedColor> {
    let (color, opacity) = split_opacity(body);
    let opacity = match opacity {
        Some(raw) => Some(resolve_opacity(raw)?),
        None => None,
    };

    let color = if color.starts_with('[') {
        let value = bracket_value(color)?;
        if !looks_like_color(&value) {
            return None;
        }
        ColorValue::Literal(value)
    } else if let Some(name) = color.strip_prefix('$') {
        ColorValue::Literal(format!("var(--{})", name))
    } else {
        config.colors().get(color)?.clone()
    };

    Some(ResolvedColor { color, opacity })
}

/// 在方括号之外的最后一个 `/` 处切分
fn split_opacity(body: &str) -> (&str, Option<&str>) {
    let mut depth = 0i32;
    let mut split = None;
    for (idx, ch) in body.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth -= 1,
            '/' if depth == 0 => split = Some(idx),
            _ => {}
        }
    }
    match split {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    }
}

fn resolve_opacity(raw: &str) -> Option<String> {
    if raw.starts_with('[') {
        return bracket_value(raw);
    }
    if let Some(name) = raw.strip_prefix('$') {
        return Some(format!("var(--{})", name));
    }
    let n = raw.parse::<f64>().ok()?;
    (0.0..=100.0)
        .contains(&n)
        .then(|| format_number(n / 100.0))
}

fn hex_channels(value: &str) -> Option<(u8, u8, u8)> {
    if !value.starts_with('#') {
        return None;
    }
    let rgb = Srgb::<u8>::from_str(value).ok()?;
    Some((rgb.red, rgb.green, rgb.blue))
}

impl ResolvedColor {
    /// 生成颜色声明
    ///
    /// 十六进制颜色配合透明度变量时输出
    /// `--tw-x-opacity: 1; prop: rgba(r, g, b, var(--tw-x-opacity))`。
    pub fn properties(&self, property: &str, opacity_variable: Option<&str>) -> Vec<Property> {
        match &self.color {
            ColorValue::Callback(f) => {
                let value = f(ColorContext {
                    opacity_variable,
                    opacity_value: self.opacity.as_deref(),
                });
                let mut props = Vec::new();
                if let Some(var) = opacity_variable {
                    props.push(Property::new(var, self.opacity.as_deref().unwrap_or("1")));
                }
                props.push(Property::new(property, value));
                props
            }
            ColorValue::Literal(value) => match (hex_channels(value), opacity_variable) {
                (Some((r, g, b)), Some(var)) => vec![
                    Property::new(var, self.opacity.as_deref().unwrap_or("1")),
                    Property::new(
                        property,
                        format!("rgba({}, {}, {}, var({}))", r, g, b, var),
                    ),
                ],
                (Some((r, g, b)), None) => match &self.opacity {
                    Some(opacity) => vec![Property::new(
                        property,
                        format!("rgba({}, {}, {}, {})", r, g, b, opacity),
                    )],
                    None => vec![Property::new(property, value.as_str())],
                },
                (None, _) => vec![Property::new(property, value.as_str())],
            },
        }
    }
}

/// 解析颜色并生成样式；不是颜色时返回 `None`
pub fn create_color_style(
    config: &Config,
    body: &str,
    selector: &str,
    property: &str,
    opacity_variable: Option<&str>,
) -> Option<Style> {
    let color = resolve_color(config, body)?;
    Some(Style::new(selector, color.properties(property, opacity_variable)))
}
