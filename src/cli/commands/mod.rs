mod render;
mod serve;
mod config;

pub use render::handle_render_command;
pub use serve::handle_serve_command;
pub use config::handle_config_command;
