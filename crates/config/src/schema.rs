use lux_core::{OrderingPolicy, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default poll period of the sampler.
pub const DEFAULT_INTERVAL_MS: u64 = 1_000;

/// Root configuration structure parsed from `luxmeter.toml`.
///
/// The sensor endpoint is compiled in and deliberately absent here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LuxConfig {
    pub sampler: SamplerConfig,
    pub window:  WindowConfig,
    pub theme:   ThemeConfig,
}

impl LuxConfig {
    /// Replace zero periods/capacities with usable values.
    pub fn normalized(mut self) -> Self {
        if self.sampler.interval_ms == 0 {
            tracing::warn!("sampler.interval_ms = 0; using {DEFAULT_INTERVAL_MS} ms");
            self.sampler.interval_ms = DEFAULT_INTERVAL_MS;
        }
        self.window.capacity = self.window.capacity.max(1);
        self
    }
}

/// Polling behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// Milliseconds between periodic fetches.
    pub interval_ms: u64,
    /// Treatment of completions that arrive out of issuance order.
    pub ordering: OrderingPolicy,
}

impl SamplerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            ordering:    OrderingPolicy::default(),
        }
    }
}

/// Recent-readings window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of readings kept for the chart.
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent color (refresh button, bar tracks).
    pub accent: String,
    /// Category colors, darkest band first.
    pub dark:        String,
    pub normal:      String,
    pub bright:      String,
    pub very_bright: String,
    /// Base font size in points.
    pub font_size: f32,
    /// Outer padding (pixels).
    pub padding: u16,
    /// Gap between sections (pixels).
    pub gap: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:  "#1e1e2e".to_string(), // Catppuccin Mocha base
            foreground:  "#cdd6f4".to_string(), // Catppuccin Mocha text
            accent:      "#cba6f7".to_string(), // Catppuccin Mocha mauve
            dark:        "#89b4fa".to_string(), // blue
            normal:      "#a6e3a1".to_string(), // green
            bright:      "#f9e2af".to_string(), // yellow
            very_bright: "#f38ba8".to_string(), // red
            font_size:   16.0,
            padding:     16,
            gap:         12,
        }
    }
}
