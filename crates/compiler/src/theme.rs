//! 内置默认主题
//!
//! 用户配置中缺失的顶层主题键回退到这里。

use serde_json::{json, Value};

pub fn default_theme() -> Value {
    json!({
        "screens": {
            "sm": "640px",
            "md": "768px",
            "lg": "1024px",
            "xl": "1280px",
            "2xl": "1536px"
        },
        "colors": {
            "transparent": "transparent",
            "current": "currentColor",
            "black": "#000",
            "white": "#fff",
            "gray": {
                "50": "#f9fafb", "100": "#f3f4f6", "200": "#e5e7eb", "300": "#d1d5db", "400": "#9ca3af",
                "500": "#6b7280", "600": "#4b5563", "700": "#374151", "800": "#1f2937", "900": "#111827"
            },
            "red": {
                "50": "#fef2f2", "100": "#fee2e2", "200": "#fecaca", "300": "#fca5a5", "400": "#f87171",
                "500": "#ef4444", "600": "#dc2626", "700": "#b91c1c", "800": "#991b1b", "900": "#7f1d1d"
            },
            "yellow": {
                "50": "#fffbeb", "100": "#fef3c7", "200": "#fde68a", "300": "#fcd34d", "400": "#fbbf24",
                "500": "#f59e0b", "600": "#d97706", "700": "#b45309", "800": "#92400e", "900": "#78350f"
            },
            "green": {
                "50": "#ecfdf5", "100": "#d1fae5", "200": "#a7f3d0", "300": "#6ee7b7", "400": "#34d399",
                "500": "#10b981", "600": "#059669", "700": "#047857", "800": "#065f46", "900": "#064e3b"
            },
            "blue": {
                "50": "#eff6ff", "100": "#dbeafe", "200": "#bfdbfe", "300": "#93c5fd", "400": "#60a5fa",
                "500": "#3b82f6", "600": "#2563eb", "700": "#1d4ed8", "800": "#1e40af", "900": "#1e3a8a"
            },
            "indigo": {
                "50": "#eef2ff", "100": "#e0e7ff", "200": "#c7d2fe", "300": "#a5b4fc", "400": "#818cf8",
                "500": "#6366f1", "600": "#4f46e5", "700": "#4338ca", "800": "#3730a3", "900": "#312e81"
            },
            "purple": {
                "50": "#f5f3ff", "100": "#ede9fe", "200": "#ddd6fe", "300": "#c4b5fd", "400": "#a78bfa",
                "500": "#8b5cf6", "600": "#7c3aed", "700": "#6d28d9", "800": "#5b21b6", "900": "#4c1d95"
            },
            "pink": {
                "50": "#fdf2f8", "100": "#fce7f3", "200": "#fbcfe8", "300": "#f9a8d4", "400": "#f472b6",
                "500": "#ec4899", "600": "#db2777", "700": "#be185d", "800": "#9d174d", "900": "#831843"
            }
        },
        "spacing": {
            "px": "1px",
            "0": "0px"
        },
        "fontSize": {
            "xs": ["0.75rem", { "lineHeight": "1rem" }],
            "sm": ["0.875rem", { "lineHeight": "1.25rem" }],
            "base": ["1rem", { "lineHeight": "1.5rem" }],
            "lg": ["1.125rem", { "lineHeight": "1.75rem" }],
            "xl": ["1.25rem", { "lineHeight": "1.75rem" }],
            "2xl": ["1.5rem", { "lineHeight": "2rem" }],
            "3xl": ["1.875rem", { "lineHeight": "2.25rem" }],
            "4xl": ["2.25rem", { "lineHeight": "2.5rem" }],
            "5xl": ["3rem", { "lineHeight": "1" }],
            "6xl": ["3.75rem", { "lineHeight": "1" }]
        },
        "fontWeight": {
            "thin": "100",
            "extralight": "200",
            "light": "300",
            "normal": "400",
            "medium": "500",
            "semibold": "600",
            "bold": "700",
            "extrabold": "800",
            "black": "900"
        },
        "fontFamily": {
            "sans": ["ui-sans-serif", "system-ui", "-apple-system", "sans-serif"],
            "serif": ["ui-serif", "Georgia", "serif"],
            "mono": ["ui-monospace", "SFMono-Regular", "monospace"]
        },
        "lineHeight": {
            "none": "1",
            "tight": "1.25",
            "snug": "1.375",
            "normal": "1.5",
            "relaxed": "1.625",
            "loose": "2"
        },
        "letterSpacing": {
            "tighter": "-0.05em",
            "tight": "-0.025em",
            "normal": "0em",
            "wide": "0.025em",
            "wider": "0.05em",
            "widest": "0.1em"
        },
        "opacity": {
            "0": "0", "5": "0.05", "10": "0.1", "20": "0.2", "25": "0.25", "30": "0.3",
            "40": "0.4", "50": "0.5", "60": "0.6", "70": "0.7", "75": "0.75", "80": "0.8",
            "90": "0.9", "95": "0.95", "100": "1"
        },
        "borderRadius": {
            "none": "0px",
            "sm": "0.125rem",
            "DEFAULT": "0.25rem",
            "md": "0.375rem",
            "lg": "0.5rem",
            "xl": "0.75rem",
            "2xl": "1rem",
            "3xl": "1.5rem",
            "full": "9999px"
        },
        "borderWidth": {
            "DEFAULT": "1px",
            "0": "0px",
            "2": "2px",
            "4": "4px",
            "8": "8px"
        },
        "zIndex": {
            "auto": "auto"
        },
        "animation": {
            "none": "none",
            "spin": "spin 1s linear infinite",
            "ping": "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
            "pulse": "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
            "bounce": "bounce 1s infinite"
        },
        "keyframes": {
            "spin": {
                "to": { "transform": "rotate(360deg)" }
            },
            "ping": {
                "75%, 100%": { "transform": "scale(2)", "opacity": "0" }
            },
            "pulse": {
                "50%": { "opacity": ".5" }
            },
            "bounce": {
                "0%, 100%": {
                    "transform": "translateY(-25%)",
                    "animation-timing-function": "cubic-bezier(0.8, 0, 1, 1)"
                },
                "50%": {
                    "transform": "none",
                    "animation-timing-function": "cubic-bezier(0, 0, 0.2, 1)"
                }
            }
        },
        "container": {}
    })
}
