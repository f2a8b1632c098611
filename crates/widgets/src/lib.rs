pub mod chart;
pub mod gauge;
pub mod legend;
pub mod refresh;

pub use chart::ChartWidget;
pub use gauge::GaugeWidget;
pub use legend::LegendWidget;
pub use refresh::RefreshWidget;

use lux_theme::Color;
use iced::{widget::progress_bar, Background, Border};

/// Progress-bar style with a translucent track and a solid fill.
pub(crate) fn bar_style(fill: Color, track: Color) -> impl Fn(&iced::Theme) -> progress_bar::Style {
    move |_theme| progress_bar::Style {
        background: Background::Color(track.with_alpha(0.25).to_iced()),
        bar:        Background::Color(fill.to_iced()),
        border:     Border::default().rounded(6.0),
    }
}
