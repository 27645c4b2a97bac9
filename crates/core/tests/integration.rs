use crosswind_core::{Property, Style, StyleKind, StyleLayer, StyleMeta, StyleSheet};
use pretty_assertions::assert_eq;

fn rule(selector: &str, name: &str, value: &str, order: u32) -> Style {
    Style::new(selector, vec![Property::new(name, value)]).with_meta(StyleMeta::new("test", order))
}

/// 变体包裹后的样式：先 extend 的在外层
fn wrapped(variants: Vec<Style>, style: Style) -> Style {
    let mut out = Style::default();
    for variant in variants {
        out.extend(variant);
    }
    out.extend(style);
    out
}

#[test]
fn test_end_to_end_ordering() {
    let mut sheet = StyleSheet::new();
    sheet
        .add(rule(".print\\:hidden", "display", "none", 130).with_at_rule("@media print"))
        .add(wrapped(
            vec![
                Style::default().with_at_rule("@media (min-width: 1024px)"),
                Style::default().with_pseudo_class("hover"),
            ],
            rule(".lg\\:hover\\:p-4", "padding", "1rem", 340),
        ))
        .add(rule(".\\-lg\\:m-2", "margin", "0.5rem", 260).with_at_rule("@media (max-width: 1024px)"))
        .add(rule(".p-4", "padding", "1rem", 340))
        .add(rule(".m-2", "margin", "0.5rem", 260))
        .add(rule(".sm\\:p-4", "padding", "1rem", 340).with_at_rule("@media (min-width: 640px)"));

    let css = sheet.combine().sort().build(true);
    assert_eq!(
        css,
        concat!(
            ".m-2{margin:0.5rem}",
            ".p-4{padding:1rem}",
            "@media (max-width: 1024px){.\\-lg\\:m-2{margin:0.5rem}}",
            "@media (min-width: 640px){.sm\\:p-4{padding:1rem}}",
            "@media (min-width: 1024px){.lg\\:hover\\:p-4:hover{padding:1rem}}",
            "@media print{.print\\:hidden{display:none}}"
        )
    );
}

#[test]
fn test_shared_at_rule_path_nests_once() {
    let mut sheet = StyleSheet::new();
    sheet
        .add(rule(".a", "color", "red", 0).with_at_rule("@media (min-width: 640px)"))
        .add(
            rule(".b", "display", "grid", 0)
                .with_at_rule("@media (min-width: 640px)")
                .with_at_rule("@supports (display: grid)"),
        )
        .add(rule(".c", "color", "blue", 0).with_at_rule("@media (min-width: 640px)"));

    assert_eq!(
        sheet.combine().sort().build(false),
        concat!(
            "@media (min-width: 640px) {\n",
            "  .a {\n    color: red;\n  }\n",
            "  @supports (display: grid) {\n    .b {\n      display: grid;\n    }\n  }\n",
            "  .c {\n    color: blue;\n  }\n",
            "}"
        )
    );
}

#[test]
fn test_merge_safety() {
    let mut sheet = StyleSheet::new();
    sheet
        .add(rule(".x", "color", "red", 0))
        .add(rule(".x", "margin", "0", 0))
        .add(Style::at_rule_block("@font-face", vec![Property::new("font-family", "A")]))
        .add(Style::at_rule_block("@font-face", vec![Property::new("font-family", "B")]));
    sheet.combine();

    assert_eq!(sheet.len(), 3);
    assert_eq!(
        sheet.build(true),
        ".x{color:red;margin:0}@font-face{font-family:A}@font-face{font-family:B}"
    );
}

#[test]
fn test_layers_do_not_merge() {
    let mut sheet = StyleSheet::new();
    sheet
        .add(rule(".btn", "padding", "1rem", 0))
        .add(
            rule(".btn", "color", "red", 0)
                .with_meta(StyleMeta::new("test", 0).with_layer(StyleLayer::Components)),
        );
    sheet.combine();

    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.layer(StyleLayer::Components).len(), 1);
}

#[test]
fn test_mixed_kinds() {
    let mut sheet = StyleSheet::new();
    sheet
        .add(Style::keyframe("spin", "to", vec![Property::new("transform", "rotate(360deg)")]))
        .add(rule(".animate-spin", "animation", "spin 1s linear infinite", 570))
        .add(rule(".container", "width", "100%", 10).with_kind(StyleKind::Container))
        .add(
            rule(".container", "max-width", "640px", 10)
                .with_kind(StyleKind::Container)
                .with_at_rule("@media (min-width: 640px)"),
        );

    assert_eq!(
        sheet.combine().sort().build(true),
        concat!(
            ".animate-spin{animation:spin 1s linear infinite}",
            ".container{width:100%}",
            "@media (min-width: 640px){.container{max-width:640px}}",
            "@keyframes spin{to{transform:rotate(360deg)}}"
        )
    );
}

#[test]
fn test_prefixed_multi_property() {
    let mut sheet = StyleSheet::new().with_prefixer(true);
    sheet.add(Style::new(
        ".select-none",
        vec![
            Property::new("user-select", "none"),
            Property::new(["padding-left", "padding-right"], "1rem"),
        ],
    ));

    assert_eq!(
        sheet.build(true),
        ".select-none{-webkit-user-select:none;user-select:none;padding-left:1rem;padding-right:1rem}"
    );
}
