use lux_core::{event::Message, Category};
use lux_theme::Theme;
use iced::{
    widget::{row, text, Row},
    Alignment, Element,
};

/// Four static indicators, one per lux band.
#[derive(Debug, Default)]
pub struct LegendWidget;

impl LegendWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let size = theme.font_size * 0.8;

        let items = Category::ALL.into_iter().map(|category| {
            let dot   = text("●").size(size).color(theme.category_color(category).to_iced());
            let label = text(category.label()).size(size);
            let item: Element<'a, Message> = row![dot, label]
                .spacing(4.0)
                .align_y(Alignment::Center)
                .into();
            item
        });

        Row::with_children(items)
            .spacing(theme.gap as f32)
            .align_y(Alignment::Center)
            .into()
    }
}
