use lux_core::{event::Message, state::AppState};
use lux_theme::Theme;
use iced::{
    widget::{column, progress_bar, text},
    Alignment, Element,
};

/// Current lux value: fill bar, numeric value and category caption.
///
/// The bar spans `0..=1000` lux and is colored by the value's category.
#[derive(Debug, Default)]
pub struct GaugeWidget;

impl GaugeWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let category = state.category();
        let color    = theme.category_color(category);

        let bar = progress_bar(0.0..=1.0, state.fraction() as f32)
            .style(crate::bar_style(color, theme.accent));

        let value = text(format!("{:.1}", state.current))
            .size(theme.font_size * 3.0)
            .color(color.to_iced());

        let unit = text("lux")
            .size(theme.font_size * 1.25)
            .color(theme.foreground.with_alpha(0.7).to_iced());

        let caption = text(category.description())
            .size(theme.font_size * 0.85)
            .color(theme.foreground.with_alpha(0.7).to_iced());

        column![value, unit, caption, bar]
            .spacing(theme.gap as f32 / 2.0)
            .align_x(Alignment::Center)
            .into()
    }
}
