use serde::{Deserialize, Serialize};

use crate::core::Theme;
use crate::error::{ChartError, ChartResult};
use crate::render::LoadingOverlay;

/// Viewport width below which ring legends switch to a horizontal bottom strip.
pub const DEFAULT_RESPONSIVE_BREAKPOINT_PX: u32 = 768;

/// Renderer bootstrap configuration.
///
/// Serializable so dashboards can ship theme/overlay tweaks as a JSON
/// document instead of code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_responsive_breakpoint_px")]
    pub responsive_breakpoint_px: u32,
    #[serde(default)]
    pub loading_overlay: LoadingOverlay,
}

impl RendererConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_responsive_breakpoint_px(mut self, breakpoint_px: u32) -> Self {
        self.responsive_breakpoint_px = breakpoint_px;
        self
    }

    #[must_use]
    pub fn with_loading_overlay(mut self, overlay: LoadingOverlay) -> Self {
        self.loading_overlay = overlay;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.responsive_breakpoint_px == 0 {
            return Err(ChartError::InvalidConfig(
                "responsive breakpoint must be > 0".to_owned(),
            ));
        }
        if self.loading_overlay.text.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "loading overlay text must not be empty".to_owned(),
            ));
        }
        for (role, color) in [
            ("text", &self.theme.text),
            ("muted_text", &self.theme.muted_text),
            ("axis_line", &self.theme.axis_line),
            ("split_line", &self.theme.split_line),
            ("tooltip_background", &self.theme.tooltip_background),
            ("tooltip_border", &self.theme.tooltip_border),
            ("accent", &self.theme.accent),
            ("segment_border", &self.theme.segment_border),
        ] {
            if color.trim().is_empty() {
                return Err(ChartError::InvalidConfig(format!(
                    "theme color `{role}` must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a config document. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse renderer config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            responsive_breakpoint_px: default_responsive_breakpoint_px(),
            loading_overlay: LoadingOverlay::default(),
        }
    }
}

fn default_responsive_breakpoint_px() -> u32 {
    DEFAULT_RESPONSIVE_BREAKPOINT_PX
}
