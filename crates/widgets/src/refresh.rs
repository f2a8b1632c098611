use lux_core::event::Message;
use lux_theme::{Color, Theme};
use iced::{
    widget::{button, text},
    Background, Border, Element,
};

/// "Refresh" button requesting an immediate fetch.
#[derive(Debug, Default)]
pub struct RefreshWidget;

impl RefreshWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        button(text("⟳ Refresh").size(theme.font_size))
            .padding([8.0, 24.0])
            .style(button_style(theme.accent, theme.background))
            .on_press(Message::RefreshRequested)
            .into()
    }
}

/// Accent-filled button; dimmed while hovered or pressed.
fn button_style(fill: Color, label: Color) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let fill = match status {
            button::Status::Hovered | button::Status::Pressed => fill.with_alpha(0.8),
            _ => fill,
        };
        button::Style {
            background: Some(Background::Color(fill.to_iced())),
            text_color: label.to_iced(),
            border: Border::default().rounded(12.0),
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_is_filled_with_accent() {
        let theme = Theme::default();
        let style = button_style(theme.accent, theme.background)(&iced::Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(Color::MAUVE.to_iced())));
        assert_eq!(style.text_color, Color::BASE.to_iced());
    }

    #[test]
    fn hover_dims_accent() {
        let style = button_style(Color::MAUVE, Color::BASE)(&iced::Theme::Dark, button::Status::Hovered);
        assert_eq!(
            style.background,
            Some(Background::Color(Color::MAUVE.with_alpha(0.8).to_iced()))
        );
    }
}
