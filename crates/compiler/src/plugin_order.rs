use phf::phf_map;

/// 插件组的输出顺序；同一媒体查询内按此排序
static PLUGIN_ORDER: phf::Map<&'static str, u32> = phf_map! {
    "container" => 10,
    "space" => 20,
    "accessibility" => 30,
    "appearance" => 40,
    "backgroundColor" => 50,
    "backgroundOpacity" => 60,
    "borderColor" => 70,
    "borderOpacity" => 80,
    "borderRadius" => 90,
    "borderWidth" => 100,
    "boxSizing" => 110,
    "cursor" => 120,
    "display" => 130,
    "flexDirection" => 140,
    "flexWrap" => 150,
    "alignItems" => 160,
    "alignSelf" => 170,
    "justifyContent" => 180,
    "float" => 190,
    "clear" => 200,
    "fontFamily" => 210,
    "fontWeight" => 220,
    "height" => 230,
    "fontSize" => 240,
    "lineHeight" => 250,
    "margin" => 260,
    "maxHeight" => 270,
    "maxWidth" => 280,
    "minHeight" => 290,
    "minWidth" => 300,
    "objectFit" => 310,
    "opacity" => 320,
    "overflow" => 330,
    "padding" => 340,
    "pointerEvents" => 350,
    "position" => 360,
    "inset" => 370,
    "textAlign" => 380,
    "textColor" => 390,
    "textOpacity" => 400,
    "textOverflow" => 410,
    "fontStyle" => 420,
    "textTransform" => 430,
    "textDecoration" => 440,
    "fontSmoothing" => 450,
    "letterSpacing" => 460,
    "userSelect" => 470,
    "visibility" => 480,
    "whitespace" => 490,
    "width" => 500,
    "zIndex" => 510,
    "gap" => 520,
    "gridTemplateColumns" => 530,
    "gridColumn" => 540,
    "order" => 550,
    "transitionDuration" => 560,
    "animation" => 570,
};

/// 用户插件排在所有内置组之后
pub const PLUGIN_ORDER_USER: u32 = 10_000;

/// 组顺序；未知组视为用户插件
pub fn plugin_order(group: &str) -> u32 {
    PLUGIN_ORDER.get(group).copied().unwrap_or(PLUGIN_ORDER_USER)
}
