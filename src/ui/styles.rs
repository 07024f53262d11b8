//! Style definitions for the list screens.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Chrome
// =============================================================================

/// Navigation title above the list.
pub fn navigation_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Tab label of the screen currently shown.
pub fn active_tab_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_tab_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn notice_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn selection_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

// =============================================================================
// Grouped list (settings)
// =============================================================================

/// Section headers like "-- 개인 설정 --".
pub fn section_header_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Setting names: bold light gray on the dark background.
pub fn setting_name_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD)
}

pub fn separator_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Subtitle list (chat rooms)
// =============================================================================

pub fn room_name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn avatar_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn last_message_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Short date after the last message.
pub fn message_date_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_name_style_is_bold_gray() {
        let style = setting_name_style();
        assert_eq!(style.fg, Some(Color::Gray));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn message_date_style_is_dimmed() {
        assert_eq!(message_date_style().fg, Some(Color::DarkGray));
    }

    #[test]
    fn placeholder_style_is_italic() {
        assert!(placeholder_style().add_modifier.contains(Modifier::ITALIC));
    }
}
