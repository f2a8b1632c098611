use lux_core::{classify, event::Message, gauge_fraction, window::WindowStore};
use lux_theme::Theme;
use iced::{
    widget::{container, progress_bar, row, text, Column},
    Alignment, Element, Length,
};

/// Recent readings, oldest first: timestamp, a bar scaled to `0..=1000` lux
/// colored by category, and the value truncated to whole lux.
#[derive(Debug, Default)]
pub struct ChartWidget;

impl ChartWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, window: &'a WindowStore, theme: &'a Theme) -> Element<'a, Message> {
        let size = theme.font_size * 0.8;

        if window.is_empty() {
            return text("Waiting for readings…")
                .size(size)
                .color(theme.foreground.with_alpha(0.6).to_iced())
                .into();
        }

        let rows = window.all().map(|reading| {
            let color = theme.category_color(classify(reading.value()));

            let time = container(text(reading.timestamp().format("%H:%M:%S").to_string()).size(size))
                .width(Length::Fixed(72.0));

            let bar = progress_bar(0.0..=1.0, gauge_fraction(reading.value()) as f32)
                .style(crate::bar_style(color, theme.accent));

            let value = container(text(value_label(reading.value())).size(size))
                .width(Length::Fixed(56.0))
                .align_right(Length::Fixed(56.0));

            let line: Element<'a, Message> = row![time, bar, value]
                .spacing(8.0)
                .align_y(Alignment::Center)
                .into();
            line
        });

        Column::with_children(rows).spacing(4.0).into()
    }
}

/// Whole-lux label; the fractional part is dropped, not rounded.
fn value_label(value: f64) -> String {
    format!("{}", value.trunc())
}
