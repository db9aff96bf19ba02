//! Color and style tables shared by the render code.

use byline_core::BadgeVariant;
use ratatui::style::{Color, Modifier, Style};

/// Terminal color for a status pill.
pub fn badge_color(variant: BadgeVariant) -> Color {
    match variant {
        BadgeVariant::Success => Color::Green,
        BadgeVariant::Warning => Color::Yellow,
        BadgeVariant::Primary => Color::Blue,
        BadgeVariant::Danger => Color::Red,
    }
}

pub fn badge(variant: BadgeVariant) -> Style {
    Style::default()
        .fg(badge_color(variant))
        .add_modifier(Modifier::BOLD)
}

pub fn active_item() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn inactive_item() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn pane_border() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn current_page() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn control() -> Style {
    Style::default().fg(Color::White)
}

/// Non-interactive controls: ellipses and boundary buttons.
pub fn disabled() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn muted() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn heading() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
