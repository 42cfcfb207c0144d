/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // UI Rendering Constants
    pub const MIN_RENDER_INTERVAL_MS: u64 = 33; // ~30 FPS
    pub const EVENT_POLL_TIMEOUT_MS: u64 = 20;
    pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;
    pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

    // Draw
    pub const DEFAULT_TABLE_MAX: u32 = 30;
    pub const DEFAULT_SEAT_MAX: u32 = 10;
    pub const MIN_BOUND: u32 = 1;
    pub const FLASH_INTERVAL_MS: u64 = 100;
    pub const FLASH_COUNT: u32 = 50;

    // Celebration
    pub const CONFETTI_PARTICLES: usize = 120;
    pub const CONFETTI_LIFETIME_FRAMES: [u32; 2] = [25, 55];
    pub const CONFETTI_GRAVITY: f32 = 0.045;

    // Notifications
    pub const NOTIFICATION_DURATION_SECS: u64 = 4;

    // Logging
    pub const DEFAULT_LOG_FILTER: &str = "lucky_draw=info";
}

/// UI Theme configuration
pub struct ThemeConfig;

impl ThemeConfig {
    const CONFETTI_COLORS: [crossterm::style::Color; 6] = [
        crossterm::style::Color::Red,
        crossterm::style::Color::Yellow,
        crossterm::style::Color::Green,
        crossterm::style::Color::Cyan,
        crossterm::style::Color::Magenta,
        crossterm::style::Color::Blue,
    ];

    /// Color of a result card. While rolling the card alternates between two
    /// colors on every tick so the reveal visibly flashes.
    pub fn result_color(rolling: bool, flash_phase: u32) -> crossterm::style::Color {
        use crossterm::style::Color;

        if !rolling {
            Color::Yellow
        } else if flash_phase % 2 == 0 {
            Color::Red
        } else {
            Color::White
        }
    }

    pub fn button_color(enabled: bool) -> crossterm::style::Color {
        use crossterm::style::Color;

        if enabled {
            Color::Green
        } else {
            Color::DarkGrey
        }
    }

    pub fn confetti_color(index: usize) -> crossterm::style::Color {
        Self::CONFETTI_COLORS[index % Self::CONFETTI_COLORS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn test_result_color_flashes_only_while_rolling() {
        assert_eq!(ThemeConfig::result_color(false, 0), Color::Yellow);
        assert_eq!(ThemeConfig::result_color(false, 1), Color::Yellow);
        assert_ne!(
            ThemeConfig::result_color(true, 0),
            ThemeConfig::result_color(true, 1)
        );
    }

    #[test]
    fn test_confetti_color_wraps() {
        assert_eq!(
            ThemeConfig::confetti_color(0),
            ThemeConfig::confetti_color(ThemeConfig::CONFETTI_COLORS.len())
        );
    }
}
