//! Style definitions for the UI, parameterized by the session theme.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::theme::Theme;

fn base_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::White,
        Theme::Light => Color::Black,
    }
}

fn dim_fg(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}

/// Style for the header title line.
pub fn header_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for the body of the session's own messages.
pub fn own_message_style(_theme: Theme) -> Style {
    Style::default().fg(Color::Green)
}

/// Style for the body of other participants' messages.
pub fn other_message_style(theme: Theme) -> Style {
    Style::default().fg(base_fg(theme))
}

/// Style for the `author • time` info line and own-message timestamps.
pub fn message_info_style(theme: Theme) -> Style {
    Style::default().fg(dim_fg(theme))
}

/// Style for the empty-feed placeholder.
pub fn placeholder_style(theme: Theme) -> Style {
    Style::default()
        .fg(dim_fg(theme))
        .add_modifier(Modifier::ITALIC)
}

pub fn notice_error_style(_theme: Theme) -> Style {
    Style::default().fg(Color::Red)
}

pub fn input_prompt_style(_theme: Theme) -> Style {
    Style::default().fg(Color::Green)
}

pub fn input_text_style(theme: Theme) -> Style {
    Style::default().fg(base_fg(theme))
}

pub fn panel_border_style(theme: Theme) -> Style {
    Style::default().fg(dim_fg(theme))
}

pub fn panel_title_style(theme: Theme) -> Style {
    Style::default()
        .fg(base_fg(theme))
        .add_modifier(Modifier::BOLD)
}

pub fn status_line_style(theme: Theme) -> Style {
    Style::default().fg(dim_fg(theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_messages_are_green_in_both_themes() {
        assert_eq!(own_message_style(Theme::Dark).fg, Some(Color::Green));
        assert_eq!(own_message_style(Theme::Light).fg, Some(Color::Green));
    }

    #[test]
    fn other_messages_follow_the_base_foreground() {
        assert_eq!(other_message_style(Theme::Dark).fg, Some(Color::White));
        assert_eq!(other_message_style(Theme::Light).fg, Some(Color::Black));
    }

    #[test]
    fn error_notices_are_red() {
        assert_eq!(notice_error_style(Theme::Dark).fg, Some(Color::Red));
    }

    #[test]
    fn info_lines_are_dimmed() {
        assert_eq!(message_info_style(Theme::Dark).fg, Some(Color::DarkGray));
        assert_eq!(message_info_style(Theme::Light).fg, Some(Color::Gray));
    }

    #[test]
    fn header_is_bold() {
        assert!(header_style(Theme::Dark)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
