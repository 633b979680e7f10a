//! CSS generation for card contents
//!
//! Produces the per-theme stylesheet used by card bodies: typography, icon
//! visibility, the rank ring and its progress animation. The card frame
//! itself only needs the [`card_animations`] keyframes.

use crate::assets::embedded_font_base64;
use crate::progress::{progress_keyframes, PROGRESS_ANIMATION_NAME};
use crate::theme::Theme;

/// Rule forcing every animation to finish instantly
pub const ANIMATION_OVERRIDE: &str =
    "* { animation-duration: 0s !important; animation-delay: 0s !important; }";

/// Inputs to [`generate_styles`]
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub title_color: String,
    pub text_color: String,
    pub icon_color: String,
    pub ring_color: String,
    /// Show `.icon` elements (`display: block`) or hide them
    pub show_icons: bool,
    /// Ring fill percentage, clamped to `[0, 100]`
    pub progress: f64,
    /// Leave out keyframes whose output depends on time, for snapshot comparisons
    pub suppress_time_based_animations: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl StyleConfig {
    /// Take the colours from a theme, with icons hidden and no progress
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title_color: theme.title_color.clone(),
            text_color: theme.text_color.clone(),
            icon_color: theme.icon_color.clone(),
            ring_color: theme.ring_color.clone(),
            show_icons: false,
            progress: 0.0,
            suppress_time_based_animations: false,
        }
    }

    /// Set whether icons are displayed
    pub fn with_show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    /// Set the ring fill percentage
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    /// Set the ring colour
    pub fn with_ring_color(mut self, color: impl Into<String>) -> Self {
        self.ring_color = color.into();
        self
    }

    /// Enable or disable time-based keyframes
    pub fn with_suppressed_time_based_animations(mut self, suppress: bool) -> Self {
        self.suppress_time_based_animations = suppress;
        self
    }
}

/// Generate the stylesheet for a card body
pub fn generate_styles(config: &StyleConfig) -> String {
    let icon_display = if config.show_icons { "block" } else { "none" };
    let mut css = format!(
        r#"@font-face {{
  font-family: 'SUITE';
  font-weight: 400;
  src: local('SUITE Regular'), url('data:font/woff2;charset=utf-8;base64,{font}') format('woff2');
}}

.stat {{
  font: 600 14px 'SUITE', 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif; fill: {text};
}}
@supports(-moz-appearance: auto) {{
  /* Selector detects Firefox */
  .stat {{ font-size:12px; }}
}}
.stagger {{
  opacity: 0;
  animation: fadeInAnimation 0.5s ease-out forwards;
}}
.rank-text {{
  font: 800 24px 'SUITE', 'Segoe UI', Ubuntu, Sans-Serif; fill: {text};
  animation: scaleInAnimation 0.5s ease-out forwards;
}}
.rank-percentile-header {{
  font-size: 14px;
}}
.rank-percentile-text {{
  font-size: 16px;
}}

.not_bold {{ font-weight: 400 }}
.bold {{ font-weight: 700 }}
.icon {{
  fill: {icon};
  display: {icon_display};
}}

.rank-circle-rim {{
  stroke: {ring};
  fill: none;
  stroke-width: 8;
  opacity: 0.2;
}}
.rank-circle {{
  stroke: {ring};
  stroke-dasharray: 250;
  fill: none;
  stroke-width: 8;
  stroke-linecap: round;
  opacity: 0.8;
  transform-origin: -10px 8px;
  transform: rotate(-90deg);
  animation: {animation} 1.5s forwards ease-out;
}}
"#,
        font = embedded_font_base64(),
        text = config.text_color,
        icon = config.icon_color,
        icon_display = icon_display,
        ring = config.ring_color,
        animation = PROGRESS_ANIMATION_NAME,
    );

    if !config.suppress_time_based_animations {
        css.push_str(&progress_keyframes(config.progress));
        css.push('\n');
    }

    css
}

/// Entrance keyframes shared by the card header and body
pub fn card_animations() -> &'static str {
    r#"/* Animations */
@keyframes scaleInAnimation {
  from {
    transform: translate(-5px, 5px) scale(0);
  }
  to {
    transform: translate(-5px, 5px) scale(1);
  }
}
@keyframes fadeInAnimation {
  from {
    opacity: 0;
    transform: translateX(0px);
  }
  to {
    opacity: 1;
  }
}"#
}
