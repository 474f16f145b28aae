pub mod banner;
pub mod tui;

use crate::domain::Theme;
use inquire::ui::{Color, RenderConfig, Styled};

/// Prints the welcome banner. Call once at startup (e.g. in main after
/// tracing init).
pub fn init_ui() {
    banner::print_welcome();
}

/// Applies the persisted theme to all subsequent inquire prompts.
pub fn apply_theme(theme: Theme) {
    let accent = match theme {
        Theme::Light => Color::LightRed,
        Theme::Dark => Color::LightCyan,
    };
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(accent))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(accent));
    inquire::set_global_render_config(config);
}
