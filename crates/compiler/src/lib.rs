pub mod cache;
pub mod compiler;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod naming;
pub mod plugin;
pub mod plugin_order;
pub mod theme;
pub mod utility;
pub mod variant;

// Re-export commonly used types
pub use cache::ExtractCache;
pub use compiler::{CompileResult, Compiler, InterpretResult};
pub use config::{Config, DarkMode, Important};
pub use error::ConfigError;
pub use extract::Extractor;
pub use handler::color::{ColorContext, ColorValue};
pub use handler::Handler;
pub use naming::{HashNaming, NamingStrategy, DEFAULT_PREFIX};
pub use plugin::{DynamicResolver, PluginTable};
pub use utility::Utility;
pub use variant::VariantRegistry;

pub use crosswind_core::{Property, Style, StyleSheet};
