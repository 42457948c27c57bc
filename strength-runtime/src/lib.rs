mod commands;
pub use commands::*;
mod settings;
pub use settings::*;
