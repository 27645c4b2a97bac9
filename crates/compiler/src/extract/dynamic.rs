//! 内置动态工具类，按第一个 `-` 片段分派
//!
//! 每个解析函数返回 `(组名, 样式)`；返回 `None` 即不适用，不会再尝试别的解析函数。

use crate::config::Config;
use crate::handler::color::{create_color_style, looks_like_color};
use crate::handler::{bracket_value, Handler};
use crate::utility::Utility;
use crate::variant::screen::sorted_screens;
use crosswind_core::media::parse_length_px;
use crosswind_core::{Property, PropertyName, Style, StyleKind};
use serde_json::Value;

pub(crate) type Resolved = Option<(&'static str, Vec<Style>)>;

const SIZING_KEYWORDS: [(&str, &str); 5] = [
    ("auto", "auto"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
    ("fit", "fit-content"),
];

const MAX_WIDTH_KEYWORDS: [(&str, &str); 16] = [
    ("none", "none"),
    ("0", "0rem"),
    ("xs", "20rem"),
    ("sm", "24rem"),
    ("md", "28rem"),
    ("lg", "32rem"),
    ("xl", "36rem"),
    ("2xl", "42rem"),
    ("3xl", "48rem"),
    ("4xl", "56rem"),
    ("5xl", "64rem"),
    ("6xl", "72rem"),
    ("7xl", "80rem"),
    ("full", "100%"),
    ("min", "min-content"),
    ("max", "max-content"),
];

const BORDER_RADIUS: &[&str] = &["border-radius"];

const SPACE_CHILD: &str = "> :not([hidden]) ~ :not([hidden])";

/// 按标识符分派；以 `-` 结尾的残缺写法（`border-`）不适用
pub(crate) fn resolve(utility: &Utility, config: &Config) -> Resolved {
    if utility.absolute().ends_with('-') {
        return None;
    }
    match utility.identifier() {
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" => padding(utility, config),
        "m" | "mx" | "my" | "mt" | "mr" | "mb" | "ml" => margin(utility, config),
        "w" => sizing(utility, config, "width", "width", "100vw"),
        "h" => sizing(utility, config, "height", "height", "100vh"),
        "min" | "max" => min_max(utility, config),
        "inset" | "top" | "right" | "bottom" | "left" => inset(utility, config),
        "text" => text(utility, config),
        "bg" => background(utility, config),
        "border" => border(utility, config),
        "opacity" => opacity(utility, config),
        "z" => z_index(utility, config),
        "font" => font(utility, config),
        "leading" => leading(utility, config),
        "tracking" => tracking(utility, config),
        "rounded" => rounded(utility, config),
        "gap" => gap(utility, config),
        "grid" => grid(utility),
        "col" => col(utility),
        "order" => order(utility),
        "space" => space(utility, config),
        "duration" => duration(utility),
        "container" => container(utility, config),
        "animate" => animate(utility, config),
        _ => None,
    }
}

/// 组内偏移：数值越大越靠后，非数值取值为 0
pub(crate) fn offset(utility: &Utility) -> u32 {
    let amount = utility.amount();
    let value = match amount.split_once('/') {
        Some((a, b)) => match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(a), Ok(b)) if b > 0.0 => a / b * 100.0,
            _ => return 0,
        },
        None => match parse_length_px(amount) {
            Some(value) => value,
            None => return 0,
        },
    };
    if !value.is_finite() || value < 0.0 {
        return 0;
    }
    (value * 100.0).round().min(f64::from(u32::MAX - 1)) as u32 + 1
}

fn style(utility: &Utility, names: impl Into<PropertyName>, value: String) -> Style {
    Style::new(utility.class(), vec![Property::new(names, value)])
}

fn single(
    utility: &Utility,
    group: &'static str,
    names: impl Into<PropertyName>,
    value: Option<String>,
) -> Resolved {
    Some((group, vec![style(utility, names, value?)]))
}

/// 间距类取值：主题 spacing → 方括号 → n×0.25rem → 尺寸 → 变量
fn spacing_value(
    utility: &Utility,
    config: &Config,
    keywords: &[(&str, &str)],
    allow_negative: bool,
) -> Option<String> {
    if utility.is_negative() && !allow_negative {
        return None;
    }
    Handler::new(utility)
        .handle_keywords(keywords)
        .handle_static(config.theme("spacing"))
        .handle_square_brackets()
        .handle_spacing()
        .handle_size()
        .handle_variable()
        .handle_negative()
        .value()
}

/// 尺寸类取值：在间距基础上支持分数
fn sizing_value(
    amount: &str,
    negative: bool,
    config: &Config,
    keywords: &[(&str, &str)],
) -> Option<String> {
    Handler::with_amount(amount, negative)
        .handle_keywords(keywords)
        .handle_static(config.theme("spacing"))
        .handle_square_brackets()
        .handle_spacing()
        .handle_fraction()
        .handle_size()
        .handle_variable()
        .handle_negative()
        .value()
}

fn axis_properties(prefix: &str, identifier: &str, axis: &str) -> Option<Vec<String>> {
    let sides: &[&str] = match axis {
        "" => return Some(vec![prefix.to_string()]),
        "x" => &["left", "right"],
        "y" => &["top", "bottom"],
        "t" => &["top"],
        "r" => &["right"],
        "b" => &["bottom"],
        "l" => &["left"],
        _ => {
            log::trace!("unknown axis {:?} for {}", axis, identifier);
            return None;
        }
    };
    Some(sides.iter().map(|s| format!("{}-{}", prefix, s)).collect())
}

fn padding(utility: &Utility, config: &Config) -> Resolved {
    if utility.body() != utility.amount() {
        return None;
    }
    let identifier = utility.identifier();
    let names = axis_properties("padding", identifier, &identifier[1..])?;
    single(utility, "padding", names, spacing_value(utility, config, &[], false))
}

fn margin(utility: &Utility, config: &Config) -> Resolved {
    if utility.body() != utility.amount() {
        return None;
    }
    let identifier = utility.identifier();
    let names = axis_properties("margin", identifier, &identifier[1..])?;
    let value = spacing_value(utility, config, &[("auto", "auto")], true);
    single(utility, "margin", names, value)
}

fn sizing(
    utility: &Utility,
    config: &Config,
    group: &'static str,
    property: &str,
    screen: &'static str,
) -> Resolved {
    if utility.is_negative() || utility.body() != utility.amount() {
        return None;
    }
    let mut keywords = SIZING_KEYWORDS.to_vec();
    keywords.push(("screen", screen));
    let value = sizing_value(utility.amount(), false, config, &keywords);
    single(utility, group, property, value)
}

fn min_max(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() {
        return None;
    }
    let (axis, amount) = utility.body().split_once('-')?;
    match (utility.identifier(), axis) {
        ("min", "w") => {
            let value = sizing_value(amount, false, config, &SIZING_KEYWORDS[1..]);
            single(utility, "minWidth", "min-width", value)
        }
        ("min", "h") => {
            let keywords = [("full", "100%"), ("screen", "100vh")];
            let value = sizing_value(amount, false, config, &keywords);
            single(utility, "minHeight", "min-height", value)
        }
        ("max", "w") => {
            let value = Handler::with_amount(amount, false)
                .handle_keywords(&MAX_WIDTH_KEYWORDS)
                .handle_square_brackets()
                .handle_size()
                .handle_variable()
                .value();
            single(utility, "maxWidth", "max-width", value)
        }
        ("max", "h") => {
            let keywords = [("full", "100%"), ("screen", "100vh")];
            let value = sizing_value(amount, false, config, &keywords);
            single(utility, "maxHeight", "max-height", value)
        }
        _ => None,
    }
}

fn inset(utility: &Utility, config: &Config) -> Resolved {
    let identifier = utility.identifier();
    let body = utility.body();
    let (names, amount): (Vec<&str>, &str) = match identifier {
        "inset" => match body.split_once('-') {
            Some(("x", amount)) => (vec!["left", "right"], amount),
            Some(("y", amount)) => (vec!["top", "bottom"], amount),
            _ => (vec!["top", "right", "bottom", "left"], body),
        },
        side => (vec![side], body),
    };
    if amount.is_empty() {
        return None;
    }
    let keywords = [("auto", "auto"), ("full", "100%")];
    let value = sizing_value(amount, utility.is_negative(), config, &keywords);
    let names: Vec<String> = names.into_iter().map(String::from).collect();
    single(utility, "inset", names, value)
}

fn text(utility: &Utility, config: &Config) -> Resolved {
    let body = utility.body();
    if utility.is_negative() || body.is_empty() {
        return None;
    }

    if let Some(rest) = body.strip_prefix("opacity-") {
        let value = opacity_value(rest, config)?;
        return single(utility, "textOpacity", "--tw-text-opacity", Some(value));
    }

    if body.starts_with('[') && !body.contains('/') {
        let value = bracket_value(body)?;
        return if looks_like_color(&value) {
            single(utility, "textColor", "color", Some(value))
        } else {
            single(utility, "fontSize", "font-size", Some(value))
        };
    }

    if let Some(size) = config.theme(&format!("fontSize.{}", body)) {
        let (font_size, line_height) = match size {
            Value::String(s) => (s.clone(), None),
            Value::Array(items) => (
                items.first()?.as_str()?.to_string(),
                items.get(1).and_then(|extra| match extra {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(o) => o.get("lineHeight")?.as_str().map(String::from),
                    _ => None,
                }),
            ),
            _ => return None,
        };
        let mut properties = vec![Property::new("font-size", font_size)];
        if let Some(line_height) = line_height {
            properties.push(Property::new("line-height", line_height));
        }
        return Some(("fontSize", vec![Style::new(utility.class(), properties)]));
    }

    let color = create_color_style(
        config,
        body,
        &utility.class(),
        "color",
        Some("--tw-text-opacity"),
    )?;
    Some(("textColor", vec![color]))
}

fn opacity_value(amount: &str, config: &Config) -> Option<String> {
    Handler::with_amount(amount, false)
        .handle_static(config.theme("opacity"))
        .handle_square_brackets()
        .handle_variable()
        .value()
}

fn background(utility: &Utility, config: &Config) -> Resolved {
    let body = utility.body();
    if utility.is_negative() || body.is_empty() {
        return None;
    }
    if let Some(rest) = body.strip_prefix("opacity-") {
        let value = opacity_value(rest, config)?;
        return single(utility, "backgroundOpacity", "--tw-bg-opacity", Some(value));
    }
    let color = create_color_style(
        config,
        body,
        &utility.class(),
        "background-color",
        Some("--tw-bg-opacity"),
    )?;
    Some(("backgroundColor", vec![color]))
}

fn border(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() {
        return None;
    }
    let body = utility.body();

    // border-opacity-* 先于宽度和颜色判断
    if let Some(rest) = body.strip_prefix("opacity-") {
        let value = opacity_value(rest, config)?;
        return single(utility, "borderOpacity", "--tw-border-opacity", Some(value));
    }

    let (side, amount) = match body.split_once('-') {
        Some((side @ ("t" | "r" | "b" | "l" | "x" | "y"), amount)) => (side, amount),
        _ if matches!(body, "t" | "r" | "b" | "l" | "x" | "y") => (body, ""),
        _ => ("", body),
    };

    let width = Handler::with_amount(amount, false)
        .handle_static(config.theme("borderWidth"))
        .handle_square_brackets()
        .handle_number(0.0, 100.0, Some("px"))
        .handle_size()
        .value()
        .filter(|value| !looks_like_color(value));

    if let Some(width) = width {
        let names: Vec<String> = axis_properties("border", "border", side)?
            .into_iter()
            .map(|name| format!("{}-width", name))
            .collect();
        return single(utility, "borderWidth", names, Some(width));
    }

    if !side.is_empty() {
        return None;
    }
    let color = create_color_style(
        config,
        body,
        &utility.class(),
        "border-color",
        Some("--tw-border-opacity"),
    )?;
    Some(("borderColor", vec![color]))
}

fn opacity(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() || utility.body() != utility.amount() {
        return None;
    }
    single(utility, "opacity", "opacity", opacity_value(utility.amount(), config))
}

fn z_index(utility: &Utility, config: &Config) -> Resolved {
    if utility.body() != utility.amount() {
        return None;
    }
    let value = Handler::new(utility)
        .handle_static(config.theme("zIndex"))
        .handle_square_brackets()
        .handle_number(0.0, 99999.0, None)
        .handle_negative()
        .value();
    single(utility, "zIndex", "z-index", value)
}

fn font(utility: &Utility, config: &Config) -> Resolved {
    let body = utility.body();
    if utility.is_negative() || body.is_empty() {
        return None;
    }

    if let Some(weight) = config.theme_str(&format!("fontWeight.{}", body)) {
        return single(utility, "fontWeight", "font-weight", Some(weight.to_string()));
    }

    if let Some(family) = config.theme(&format!("fontFamily.{}", body)) {
        let value = match family {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => return None,
        };
        return single(utility, "fontFamily", "font-family", Some(value));
    }

    let value = bracket_value(body)?;
    if value.chars().all(|c| c.is_ascii_digit()) {
        single(utility, "fontWeight", "font-weight", Some(value))
    } else {
        single(utility, "fontFamily", "font-family", Some(value))
    }
}

fn leading(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() || utility.body() != utility.amount() {
        return None;
    }
    let value = Handler::new(utility)
        .handle_static(config.theme("lineHeight"))
        .handle_square_brackets()
        .handle_spacing()
        .handle_size()
        .value();
    single(utility, "lineHeight", "line-height", value)
}

fn tracking(utility: &Utility, config: &Config) -> Resolved {
    if utility.body() != utility.amount() {
        return None;
    }
    let value = Handler::new(utility)
        .handle_static(config.theme("letterSpacing"))
        .handle_square_brackets()
        .handle_size()
        .handle_negative()
        .value();
    single(utility, "letterSpacing", "letter-spacing", value)
}

fn rounded(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() {
        return None;
    }
    let body = utility.body();
    let (corners, amount): (&[&str], &str) = {
        let (head, rest) = body.split_once('-').unwrap_or((body, ""));
        match corner_names(head) {
            Some(corners) => (corners, rest),
            None => (BORDER_RADIUS, body),
        }
    };

    let value = Handler::with_amount(amount, false)
        .handle_static(config.theme("borderRadius"))
        .handle_square_brackets()
        .handle_size()
        .value();
    let names: Vec<String> = corners.iter().map(|c| c.to_string()).collect();
    single(utility, "borderRadius", names, value)
}

fn corner_names(side: &str) -> Option<&'static [&'static str]> {
    let corners: &'static [&'static str] = match side {
        "t" => &["border-top-left-radius", "border-top-right-radius"],
        "r" => &["border-top-right-radius", "border-bottom-right-radius"],
        "b" => &["border-bottom-right-radius", "border-bottom-left-radius"],
        "l" => &["border-top-left-radius", "border-bottom-left-radius"],
        "tl" => &["border-top-left-radius"],
        "tr" => &["border-top-right-radius"],
        "br" => &["border-bottom-right-radius"],
        "bl" => &["border-bottom-left-radius"],
        _ => return None,
    };
    Some(corners)
}

fn gap(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() {
        return None;
    }
    let property = match utility.body().split_once('-') {
        Some(("x", _)) => "column-gap",
        Some(("y", _)) => "row-gap",
        None => "gap",
        _ => return None,
    };
    single(utility, "gap", property, spacing_value(utility, config, &[], false))
}

fn grid(utility: &Utility) -> Resolved {
    let amount = utility.body().strip_prefix("cols-")?;
    if utility.is_negative() {
        return None;
    }
    let value = match amount {
        "none" => Some("none".to_string()),
        _ if amount.starts_with('[') => bracket_value(amount),
        _ => amount
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .map(|n| format!("repeat({}, minmax(0, 1fr))", n)),
    };
    single(utility, "gridTemplateColumns", "grid-template-columns", value)
}

fn col(utility: &Utility) -> Resolved {
    if utility.is_negative() {
        return None;
    }
    let value = match utility.body() {
        "auto" => Some("auto".to_string()),
        "span-full" => Some("1 / -1".to_string()),
        body => body
            .strip_prefix("span-")
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .map(|n| format!("span {} / span {}", n, n)),
    };
    single(utility, "gridColumn", "grid-column", value)
}

fn order(utility: &Utility) -> Resolved {
    let value = Handler::new(utility)
        .handle_keywords(&[("first", "-9999"), ("last", "9999"), ("none", "0")])
        .handle_number(0.0, 9999.0, None)
        .handle_negative()
        .value();
    single(utility, "order", "order", value)
}

fn space(utility: &Utility, config: &Config) -> Resolved {
    let (axis, amount) = utility.body().split_once('-')?;
    let (start, end) = match axis {
        "x" => ("margin-left", "margin-right"),
        "y" => ("margin-top", "margin-bottom"),
        _ => return None,
    };
    let reverse = format!("--tw-space-{}-reverse", axis);

    let properties = if amount == "reverse" {
        if utility.is_negative() {
            return None;
        }
        vec![Property::new(reverse.as_str(), "1")]
    } else {
        let value = Handler::with_amount(amount, utility.is_negative())
            .handle_static(config.theme("spacing"))
            .handle_square_brackets()
            .handle_spacing()
            .handle_size()
            .handle_negative()
            .value()?;
        vec![
            Property::new(reverse.as_str(), "0"),
            Property::new(end, format!("calc({} * var({}))", value, reverse)),
            Property::new(start, format!("calc({} * calc(1 - var({})))", value, reverse)),
        ]
    };

    Some((
        "space",
        vec![Style::new(utility.class(), properties).with_child(SPACE_CHILD)],
    ))
}

fn duration(utility: &Utility) -> Resolved {
    if utility.is_negative() || utility.body() != utility.amount() {
        return None;
    }
    let value = Handler::new(utility)
        .handle_square_brackets()
        .handle_time()
        .value();
    single(utility, "transitionDuration", "transition-duration", value)
}

fn container(utility: &Utility, config: &Config) -> Resolved {
    if utility.is_negative() || !utility.body().is_empty() {
        return None;
    }
    let class = utility.class();

    let mut base = vec![Property::new("width", "100%")];
    if config
        .theme_or("container.center", &Value::Bool(false))
        .as_bool()
        .unwrap_or(false)
    {
        base.push(Property::new("margin-right", "auto"));
        base.push(Property::new("margin-left", "auto"));
    }
    if let Some(padding) = config.theme_str("container.padding") {
        base.push(Property::new("padding-right", padding));
        base.push(Property::new("padding-left", padding));
    }

    let mut styles = vec![Style::new(class.as_str(), base).with_kind(StyleKind::Container)];
    for (_, size) in sorted_screens(config) {
        if let Some(width) = size.min_width() {
            styles.push(
                Style::new(class.as_str(), vec![Property::new("max-width", width)])
                    .with_at_rule(format!("@media (min-width: {})", width))
                    .with_kind(StyleKind::Container),
            );
        }
    }
    Some(("container", styles))
}

fn animate(utility: &Utility, config: &Config) -> Resolved {
    let name = utility.body();
    if utility.is_negative() || name.is_empty() {
        return None;
    }
    let value = config.theme_str(&format!("animation.{}", name))?;

    let mut styles = vec![style(utility, "animation", value.to_string())];
    if let Some(Value::Object(frames)) = config.theme(&format!("keyframes.{}", name)) {
        for (stop, declarations) in frames {
            let properties: Vec<Property> = declarations
                .as_object()
                .into_iter()
                .flatten()
                .filter_map(|(prop, value)| Some(Property::new(prop.as_str(), value.as_str()?)))
                .collect();
            styles.push(Style::keyframe(name, stop.as_str(), properties));
        }
    }
    Some(("animation", styles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn css(raw: &str) -> Option<String> {
        let config = Config::default();
        let (_, styles) = resolve(&Utility::new(raw), &config)?;
        Some(
            styles
                .iter()
                .map(|s| s.build(true, false))
                .collect::<Vec<_>>()
                .join(""),
        )
    }

    fn group(raw: &str) -> Option<&'static str> {
        resolve(&Utility::new(raw), &Config::default()).map(|(group, _)| group)
    }

    #[test]
    fn test_padding_margin() {
        assert_eq!(css("p-4").as_deref(), Some(".p-4{padding:1rem}"));
        assert_eq!(
            css("px-2").as_deref(),
            Some(".px-2{padding-left:0.5rem;padding-right:0.5rem}")
        );
        assert_eq!(css("-p-4"), None);
        assert_eq!(css("-m-2").as_deref(), Some(".-m-2{margin:-0.5rem}"));
        assert_eq!(css("mx-auto").as_deref(), Some(".mx-auto{margin-left:auto;margin-right:auto}"));
        assert_eq!(css("-m-auto"), None);
        assert_eq!(css("m-[-11rem]").as_deref(), Some(".m-\\[-11rem\\]{margin:-11rem}"));
        assert_eq!(css("p-px").as_deref(), Some(".p-px{padding:1px}"));
        assert_eq!(css("p-x-4"), None);
    }

    #[test]
    fn test_sizing() {
        assert_eq!(css("w-[51vw]").as_deref(), Some(".w-\\[51vw\\]{width:51vw}"));
        assert_eq!(css("w-1/2").as_deref(), Some(".w-1\\/2{width:50%}"));
        assert_eq!(css("h-screen").as_deref(), Some(".h-screen{height:100vh}"));
        assert_eq!(css("w-full").as_deref(), Some(".w-full{width:100%}"));
        assert_eq!(css("min-w-0").as_deref(), Some(".min-w-0{min-width:0px}"));
        assert_eq!(css("max-w-lg").as_deref(), Some(".max-w-lg{max-width:32rem}"));
        assert_eq!(css("-w-4"), None);
    }

    #[test]
    fn test_inset() {
        assert_eq!(css("top-0").as_deref(), Some(".top-0{top:0px}"));
        assert_eq!(css("-top-1").as_deref(), Some(".-top-1{top:-0.25rem}"));
        assert_eq!(css("inset-x-0").as_deref(), Some(".inset-x-0{left:0px;right:0px}"));
    }

    #[test]
    fn test_text() {
        assert_eq!(
            css("text-lg").as_deref(),
            Some(".text-lg{font-size:1.125rem;line-height:1.75rem}")
        );
        assert_eq!(
            css("text-green-300").as_deref(),
            Some(".text-green-300{--tw-text-opacity:1;color:rgba(110, 231, 183, var(--tw-text-opacity))}")
        );
        assert_eq!(css("text-[#fff]").as_deref(), Some(".text-\\[\\#fff\\]{color:#fff}"));
        assert_eq!(css("text-[14px]").as_deref(), Some(".text-\\[14px\\]{font-size:14px}"));
        assert_eq!(group("text-opacity-50"), Some("textOpacity"));
        assert_eq!(css("text-nope"), None);
    }

    #[test]
    fn test_background() {
        assert_eq!(
            css("bg-[#232]").as_deref(),
            Some(".bg-\\[\\#232\\]{--tw-bg-opacity:1;background-color:rgba(34, 51, 34, var(--tw-bg-opacity))}")
        );
        assert_eq!(css("bg-opacity-50").as_deref(), Some(".bg-opacity-50{--tw-bg-opacity:0.5}"));
        assert_eq!(css("bg-[51vw]"), None);
    }

    #[test]
    fn test_border() {
        assert_eq!(css("border").as_deref(), Some(".border{border-width:1px}"));
        assert_eq!(css("border-2").as_deref(), Some(".border-2{border-width:2px}"));
        assert_eq!(
            css("border-t-4").as_deref(),
            Some(".border-t-4{border-top-width:4px}")
        );
        assert_eq!(group("border-opacity-50"), Some("borderOpacity"));
        assert_eq!(group("border-red-500"), Some("borderColor"));
        assert_eq!(group("border-[3px]"), Some("borderWidth"));
        assert_eq!(group("border-[#333]"), Some("borderColor"));
    }

    #[test]
    fn test_trailing_dash_is_rejected() {
        assert_eq!(css("border-"), None);
        assert_eq!(css("border-t-"), None);
        assert_eq!(css("rounded-"), None);
        assert_eq!(css("rounded-t-"), None);
        assert_eq!(css("-m-"), None);
        assert_eq!(css("rounded").as_deref(), Some(".rounded{border-radius:0.25rem}"));
    }

    #[test]
    fn test_offset_follows_amount() {
        let rank = |raw: &str| offset(&Utility::new(raw));
        assert!(rank("p-2") < rank("p-4"));
        assert!(rank("p-4") < rank("p-10"));
        assert!(rank("p-0") < rank("p-0.5"));
        assert!(rank("w-1/3") < rank("w-1/2"));
        assert_eq!(rank("p-[3px]"), 0);
        assert_eq!(rank("m-auto"), 0);
    }

    #[test]
    fn test_font() {
        assert_eq!(css("font-bold").as_deref(), Some(".font-bold{font-weight:700}"));
        assert_eq!(
            css("font-mono").as_deref(),
            Some(".font-mono{font-family:ui-monospace, SFMono-Regular, monospace}")
        );
        assert_eq!(group("font-[600]"), Some("fontWeight"));
    }

    #[test]
    fn test_misc() {
        assert_eq!(css("opacity-50").as_deref(), Some(".opacity-50{opacity:0.5}"));
        assert_eq!(css("z-10").as_deref(), Some(".z-10{z-index:10}"));
        assert_eq!(css("-z-10").as_deref(), Some(".-z-10{z-index:-10}"));
        assert_eq!(css("leading-tight").as_deref(), Some(".leading-tight{line-height:1.25}"));
        assert_eq!(css("-tracking-wide"), None);
        assert_eq!(css("rounded").as_deref(), Some(".rounded{border-radius:0.25rem}"));
        assert_eq!(
            css("rounded-t-lg").as_deref(),
            Some(".rounded-t-lg{border-top-left-radius:0.5rem;border-top-right-radius:0.5rem}")
        );
        assert_eq!(css("gap-x-2").as_deref(), Some(".gap-x-2{column-gap:0.5rem}"));
        assert_eq!(
            css("grid-cols-3").as_deref(),
            Some(".grid-cols-3{grid-template-columns:repeat(3, minmax(0, 1fr))}")
        );
        assert_eq!(css("col-span-2").as_deref(), Some(".col-span-2{grid-column:span 2 / span 2}"));
        assert_eq!(css("order-first").as_deref(), Some(".order-first{order:-9999}"));
        assert_eq!(css("-order-first"), None);
        assert_eq!(css("duration-300").as_deref(), Some(".duration-300{transition-duration:300ms}"));
    }

    #[test]
    fn test_space_uses_child_selector() {
        assert_eq!(
            css("space-x-4").as_deref(),
            Some(concat!(
                ".space-x-4 > :not([hidden]) ~ :not([hidden]){",
                "--tw-space-x-reverse:0;",
                "margin-right:calc(1rem * var(--tw-space-x-reverse));",
                "margin-left:calc(1rem * calc(1 - var(--tw-space-x-reverse)))}"
            ))
        );
    }

    #[test]
    fn test_container() {
        let (group, styles) = resolve(&Utility::new("container"), &Config::default()).unwrap();
        assert_eq!(group, "container");
        assert_eq!(styles.len(), 6);
        assert!(styles.iter().all(|s| s.kind == StyleKind::Container));
        assert_eq!(styles[1].at_rules, vec!["@media (min-width: 640px)"]);
        assert_eq!(styles[5].at_rules, vec!["@media (min-width: 1536px)"]);
    }

    #[test]
    fn test_container_center() {
        let config = Config::from_json(r#"{"theme": {"container": {"center": true}}}"#).unwrap();
        let (_, styles) = resolve(&Utility::new("container"), &config).unwrap();
        assert_eq!(
            styles[0].build(true, false),
            ".container{width:100%;margin-right:auto;margin-left:auto}"
        );
    }

    #[test]
    fn test_animate() {
        let (_, styles) = resolve(&Utility::new("animate-spin"), &Config::default()).unwrap();
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[1].kind, StyleKind::Keyframes("spin".to_string()));
        assert_eq!(css("animate-none").as_deref(), Some(".animate-none{animation:none}"));
        assert_eq!(css("animate-wobble"), None);
    }
}
