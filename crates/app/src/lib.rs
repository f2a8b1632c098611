//! Light-meter window.
//!
//! Owns the Iced application loop and wires together:
//! - the poll-interval timer (one fetch per tick)
//! - sampler completions (folded into [`AppState`] inside `update`)
//! - the config file watcher (live reload on change)

pub mod headless;
pub mod session;

pub use headless::run_headless;

use lux_config::{default_path, load as load_config, load_or_default, spawn_watcher, LuxConfig};
use lux_core::{event::Message, state::AppState, LuxError, Result};
use lux_sampler::Sampler;
use lux_theme::Theme;
use lux_widgets::{ChartWidget, GaugeWidget, LegendWidget, RefreshWidget};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, scrollable, text},
    Alignment, Element, Length, Subscription, Task,
};
use std::time::Duration;
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the meter window.  Returns when the window is closed.
pub fn run() -> Result<()> {
    iced::application(Meter::new, Meter::update, Meter::view)
        .title(Meter::title)
        .subscription(Meter::subscription)
        .style(Meter::style)
        .window_size((420.0, 640.0))
        .run()
        .map_err(|e| LuxError::Ui(e.to_string()))
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Meter {
    state:   AppState,
    config:  LuxConfig,
    theme:   Theme,
    sampler: Sampler,
    gauge:   GaugeWidget,
    legend:  LegendWidget,
    chart:   ChartWidget,
    refresh: RefreshWidget,
}

impl Meter {
    fn new() -> (Self, Task<Message>) {
        let config = load_or_default(default_path());
        let meter = Self::with_config(config, Sampler::new());

        // Fetch once right away so the gauge isn't blank for a full interval.
        let first = Task::perform(meter.sampler.sample(), Message::SampleReceived);
        (meter, first)
    }

    fn with_config(config: LuxConfig, sampler: Sampler) -> Self {
        info!("Sampling {}", sampler.url());
        Self {
            state:   AppState::new(config.window.capacity, config.sampler.ordering),
            theme:   Theme::from_config(&config.theme),
            config,
            sampler,
            gauge:   GaugeWidget::new(),
            legend:  LegendWidget::new(),
            chart:   ChartWidget::new(),
            refresh: RefreshWidget::new(),
        }
    }

    fn title(&self) -> String {
        format!("Light Meter ({:.1} lux)", self.state.current)
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick | Message::RefreshRequested => {
                Task::perform(self.sampler.sample(), Message::SampleReceived)
            }
            Message::SampleReceived(sample) => {
                session::record(&mut self.state, sample);
                Task::none()
            }
            Message::ConfigReloaded => {
                match load_config(default_path()) {
                    Ok(cfg) => {
                        info!("Config reloaded");
                        self.apply_config(cfg);
                    }
                    Err(e) => warn!("Config reload failed: {e}"),
                }
                Task::none()
            }
        }
    }

    fn apply_config(&mut self, config: LuxConfig) {
        self.theme = Theme::from_config(&config.theme);
        self.state.window.set_capacity(config.window.capacity);
        self.state.set_policy(config.sampler.ordering);
        self.config = config;
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let heading = text("Light Intensity")
            .size(self.theme.font_size * 1.75)
            .color(self.theme.foreground.to_iced());

        let gauge   = self.gauge.view(&self.state, &self.theme);
        let legend  = self.legend.view(&self.theme);
        let chart   = scrollable(self.chart.view(&self.state.window, &self.theme))
            .height(Length::Fill);
        let refresh = self.refresh.view(&self.theme);

        let content = column![heading, gauge, legend, chart, refresh]
            .spacing(self.theme.gap as f32)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        container(content)
            .padding(self.theme.padding as f32)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(self.config.sampler.interval()).map(|_| Message::Tick);

        Subscription::batch([tick, Subscription::run(config_stream)])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/luxmeter/luxmeter.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let mut rx = spawn_watcher(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up; stall rather than end the subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{FetchError, OrderingPolicy, Reading, Sample};

    fn meter() -> Meter {
        let sampler = Sampler::with_url("http://127.0.0.1:9/light").unwrap();
        Meter::with_config(LuxConfig::default(), sampler)
    }

    fn reading(seq: u64, value: f64) -> Message {
        Message::SampleReceived(Sample { seq, result: Ok(Reading::now(value)) })
    }

    #[test]
    fn tick_and_refresh_issue_fetches() {
        let mut meter = meter();
        let _ = meter.update(Message::Tick);
        let _ = meter.update(Message::RefreshRequested);
        assert_eq!(meter.sampler.issued(), 2);
    }

    #[test]
    fn samples_flow_into_window() {
        let mut meter = meter();
        for (seq, value) in [10.0, 60.0, 250.0, 600.0].into_iter().enumerate() {
            let _ = meter.update(reading(seq as u64, value));
        }
        assert_eq!(meter.state.window.len(), 4);
        assert_eq!(meter.state.current, 600.0);
        assert_eq!(meter.title(), "Light Meter (600.0 lux)");
    }

    #[test]
    fn failed_sample_changes_nothing() {
        let mut meter = meter();
        let _ = meter.update(reading(0, 75.0));
        let _ = meter.update(Message::SampleReceived(Sample {
            seq: 1,
            result: Err(FetchError::Decode("missing field `lux`".into())),
        }));
        assert_eq!(meter.state.window.len(), 1);
        assert_eq!(meter.state.current, 75.0);
    }

    #[test]
    fn reload_applies_capacity_and_policy() {
        let mut meter = meter();
        for seq in 0..10 {
            let _ = meter.update(reading(seq, seq as f64));
        }

        let mut cfg = LuxConfig::default();
        cfg.window.capacity = 3;
        cfg.sampler.ordering = OrderingPolicy::LatestWins;
        cfg.theme.dark = "#000000".into();
        meter.apply_config(cfg);

        let kept: Vec<f64> = meter.state.window.all().map(Reading::value).collect();
        assert_eq!(kept, [7.0, 8.0, 9.0]);
        assert_eq!(meter.state.policy(), OrderingPolicy::LatestWins);
        assert_eq!(meter.theme.dark, lux_theme::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 });
    }
}
