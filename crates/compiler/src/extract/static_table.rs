use phf::phf_map;

/// 内置静态工具类：所属组 + 固定声明
pub struct StaticUtility {
    pub group: &'static str,
    /// 组内偏移，决定同组工具类的输出顺序
    pub offset: u32,
    pub properties: &'static [(&'static str, &'static str)],
}

macro_rules! entry {
    ($group:literal, $offset:literal, [$(($name:literal, $value:literal)),+ $(,)?]) => {
        StaticUtility {
            group: $group,
            offset: $offset,
            properties: &[$(($name, $value)),+],
        }
    };
}

/// 名称完全匹配的工具类
pub static STATIC_UTILITIES: phf::Map<&'static str, StaticUtility> = phf_map! {
    // Accessibility
    "sr-only" => entry!("accessibility", 0, [
        ("position", "absolute"),
        ("width", "1px"),
        ("height", "1px"),
        ("padding", "0"),
        ("margin", "-1px"),
        ("overflow", "hidden"),
        ("clip", "rect(0, 0, 0, 0)"),
        ("white-space", "nowrap"),
        ("border-width", "0"),
    ]),
    "not-sr-only" => entry!("accessibility", 1, [
        ("position", "static"),
        ("width", "auto"),
        ("height", "auto"),
        ("padding", "0"),
        ("margin", "0"),
        ("overflow", "visible"),
        ("clip", "auto"),
        ("white-space", "normal"),
    ]),

    "appearance-none" => entry!("appearance", 0, [("appearance", "none")]),

    // Box sizing
    "box-border" => entry!("boxSizing", 0, [("box-sizing", "border-box")]),
    "box-content" => entry!("boxSizing", 1, [("box-sizing", "content-box")]),

    // Cursor
    "cursor-auto" => entry!("cursor", 0, [("cursor", "auto")]),
    "cursor-default" => entry!("cursor", 1, [("cursor", "default")]),
    "cursor-pointer" => entry!("cursor", 2, [("cursor", "pointer")]),
    "cursor-wait" => entry!("cursor", 3, [("cursor", "wait")]),
    "cursor-text" => entry!("cursor", 4, [("cursor", "text")]),
    "cursor-move" => entry!("cursor", 5, [("cursor", "move")]),
    "cursor-not-allowed" => entry!("cursor", 6, [("cursor", "not-allowed")]),

    // Display
    "block" => entry!("display", 0, [("display", "block")]),
    "inline-block" => entry!("display", 1, [("display", "inline-block")]),
    "inline" => entry!("display", 2, [("display", "inline")]),
    "flex" => entry!("display", 3, [("display", "flex")]),
    "inline-flex" => entry!("display", 4, [("display", "inline-flex")]),
    "grid" => entry!("display", 5, [("display", "grid")]),
    "inline-grid" => entry!("display", 6, [("display", "inline-grid")]),
    "table" => entry!("display", 7, [("display", "table")]),
    "contents" => entry!("display", 8, [("display", "contents")]),
    "hidden" => entry!("display", 9, [("display", "none")]),

    // Flex
    "flex-row" => entry!("flexDirection", 0, [("flex-direction", "row")]),
    "flex-row-reverse" => entry!("flexDirection", 1, [("flex-direction", "row-reverse")]),
    "flex-col" => entry!("flexDirection", 2, [("flex-direction", "column")]),
    "flex-col-reverse" => entry!("flexDirection", 3, [("flex-direction", "column-reverse")]),
    "flex-wrap" => entry!("flexWrap", 0, [("flex-wrap", "wrap")]),
    "flex-wrap-reverse" => entry!("flexWrap", 1, [("flex-wrap", "wrap-reverse")]),
    "flex-nowrap" => entry!("flexWrap", 2, [("flex-wrap", "nowrap")]),
    "items-start" => entry!("alignItems", 0, [("align-items", "flex-start")]),
    "items-end" => entry!("alignItems", 1, [("align-items", "flex-end")]),
    "items-center" => entry!("alignItems", 2, [("align-items", "center")]),
    "items-baseline" => entry!("alignItems", 3, [("align-items", "baseline")]),
    "items-stretch" => entry!("alignItems", 4, [("align-items", "stretch")]),
    "self-auto" => entry!("alignSelf", 0, [("align-self", "auto")]),
    "self-start" => entry!("alignSelf", 1, [("align-self", "flex-start")]),
    "self-end" => entry!("alignSelf", 2, [("align-self", "flex-end")]),
    "self-center" => entry!("alignSelf", 3, [("align-self", "center")]),
    "self-stretch" => entry!("alignSelf", 4, [("align-self", "stretch")]),
    "justify-start" => entry!("justifyContent", 0, [("justify-content", "flex-start")]),
    "justify-end" => entry!("justifyContent", 1, [("justify-content", "flex-end")]),
    "justify-center" => entry!("justifyContent", 2, [("justify-content", "center")]),
    "justify-between" => entry!("justifyContent", 3, [("justify-content", "space-between")]),
    "justify-around" => entry!("justifyContent", 4, [("justify-content", "space-around")]),
    "justify-evenly" => entry!("justifyContent", 5, [("justify-content", "space-evenly")]),

    // Float / clear
    "float-left" => entry!("float", 0, [("float", "left")]),
    "float-right" => entry!("float", 1, [("float", "right")]),
    "float-none" => entry!("float", 2, [("float", "none")]),
    "clear-left" => entry!("clear", 0, [("clear", "left")]),
    "clear-right" => entry!("clear", 1, [("clear", "right")]),
    "clear-both" => entry!("clear", 2, [("clear", "both")]),
    "clear-none" => entry!("clear", 3, [("clear", "none")]),

    // Object fit
    "object-contain" => entry!("objectFit", 0, [("object-fit", "contain")]),
    "object-cover" => entry!("objectFit", 1, [("object-fit", "cover")]),
    "object-fill" => entry!("objectFit", 2, [("object-fit", "fill")]),
    "object-none" => entry!("objectFit", 3, [("object-fit", "none")]),

    // Overflow
    "overflow-auto" => entry!("overflow", 0, [("overflow", "auto")]),
    "overflow-hidden" => entry!("overflow", 1, [("overflow", "hidden")]),
    "overflow-visible" => entry!("overflow", 2, [("overflow", "visible")]),
    "overflow-scroll" => entry!("overflow", 3, [("overflow", "scroll")]),
    "overflow-x-auto" => entry!("overflow", 4, [("overflow-x", "auto")]),
    "overflow-y-auto" => entry!("overflow", 5, [("overflow-y", "auto")]),
    "overflow-x-hidden" => entry!("overflow", 6, [("overflow-x", "hidden")]),
    "overflow-y-hidden" => entry!("overflow", 7, [("overflow-y", "hidden")]),

    // Pointer events
    "pointer-events-none" => entry!("pointerEvents", 0, [("pointer-events", "none")]),
    "pointer-events-auto" => entry!("pointerEvents", 1, [("pointer-events", "auto")]),

    // Position
    "static" => entry!("position", 0, [("position", "static")]),
    "fixed" => entry!("position", 1, [("position", "fixed")]),
    "absolute" => entry!("position", 2, [("position", "absolute")]),
    "relative" => entry!("position", 3, [("position", "relative")]),
    "sticky" => entry!("position", 4, [("position", "sticky")]),

    // Text
    "text-left" => entry!("textAlign", 0, [("text-align", "left")]),
    "text-center" => entry!("textAlign", 1, [("text-align", "center")]),
    "text-right" => entry!("textAlign", 2, [("text-align", "right")]),
    "text-justify" => entry!("textAlign", 3, [("text-align", "justify")]),
    "truncate" => entry!("textOverflow", 0, [
        ("overflow", "hidden"),
        ("text-overflow", "ellipsis"),
        ("white-space", "nowrap"),
    ]),
    "overflow-ellipsis" => entry!("textOverflow", 1, [("text-overflow", "ellipsis")]),
    "overflow-clip" => entry!("textOverflow", 2, [("text-overflow", "clip")]),
    "italic" => entry!("fontStyle", 0, [("font-style", "italic")]),
    "not-italic" => entry!("fontStyle", 1, [("font-style", "normal")]),
    "uppercase" => entry!("textTransform", 0, [("text-transform", "uppercase")]),
    "lowercase" => entry!("textTransform", 1, [("text-transform", "lowercase")]),
    "capitalize" => entry!("textTransform", 2, [("text-transform", "capitalize")]),
    "normal-case" => entry!("textTransform", 3, [("text-transform", "none")]),
    "underline" => entry!("textDecoration", 0, [("text-decoration", "underline")]),
    "line-through" => entry!("textDecoration", 1, [("text-decoration", "line-through")]),
    "no-underline" => entry!("textDecoration", 2, [("text-decoration", "none")]),
    "antialiased" => entry!("fontSmoothing", 0, [
        ("-webkit-font-smoothing", "antialiased"),
        ("-moz-osx-font-smoothing", "grayscale"),
    ]),
    "subpixel-antialiased" => entry!("fontSmoothing", 1, [
        ("-webkit-font-smoothing", "auto"),
        ("-moz-osx-font-smoothing", "auto"),
    ]),

    // User select
    "select-none" => entry!("userSelect", 0, [("user-select", "none")]),
    "select-text" => entry!("userSelect", 1, [("user-select", "text")]),
    "select-all" => entry!("userSelect", 2, [("user-select", "all")]),
    "select-auto" => entry!("userSelect", 3, [("user-select", "auto")]),

    // Visibility
    "visible" => entry!("visibility", 0, [("visibility", "visible")]),
    "invisible" => entry!("visibility", 1, [("visibility", "hidden")]),

    // Whitespace
    "whitespace-normal" => entry!("whitespace", 0, [("white-space", "normal")]),
    "whitespace-nowrap" => entry!("whitespace", 1, [("white-space", "nowrap")]),
    "whitespace-pre" => entry!("whitespace", 2, [("white-space", "pre")]),
    "whitespace-pre-line" => entry!("whitespace", 3, [("white-space", "pre-line")]),
    "whitespace-pre-wrap" => entry!("whitespace", 4, [("white-space", "pre-wrap")]),
};
