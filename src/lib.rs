//! Stat Card - themed SVG cards around caller-supplied content
//!
//! This library frames body markup in a styled SVG card (background image or
//! colour, border, title row, accessibility labels) and generates the CSS used
//! by stat-style card bodies, including the animated progress ring.
//!
//! # Example
//!
//! ```rust
//! use stat_card::{Card, CardOptions, StyleConfig, Theme};
//!
//! let theme = Theme::builtin("dark").unwrap();
//! let styles = StyleConfig::from_theme(&theme).with_progress(72.0);
//! let card = Card::new(CardOptions::new().with_size(300.0, 200.0).with_theme(theme))
//!     .with_styles(&styles);
//!
//! let svg = card.render(r#"<text class="stat">42</text>"#);
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("@keyframes rankAnimation"));
//! ```

pub mod assets;
pub mod card;
pub mod error;
pub mod layout;
pub mod progress;
pub mod renderer;
pub mod stylesheet;
pub mod theme;

pub use assets::{AssetError, ImageAsset};
pub use card::{AccessibilityLabel, Card, CardOptions};
pub use error::Error;
pub use layout::{FlexDirection, FlexLayout};
pub use progress::circle_progress_offset;
pub use renderer::SvgConfig;
pub use stylesheet::{generate_styles, StyleConfig};
pub use theme::{Background, Theme, ThemeError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_card() {
        let svg = Card::new(CardOptions::default()).render("");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="100""#));
        assert!(svg.contains(r#"rx="4.5""#));
    }

    #[test]
    fn test_render_compact() {
        let svg = Card::new(CardOptions::default())
            .with_svg_config(SvgConfig::new().with_pretty_print(false))
            .render("<rect/>");
        assert!(!svg.contains("\n  <"));
        assert!(svg.contains("<rect/></g></svg>"));
    }

    #[test]
    fn test_render_standalone() {
        let svg = Card::new(CardOptions::default())
            .with_svg_config(SvgConfig::new().with_standalone(true))
            .render("");
        assert!(svg.starts_with("<?xml"));
    }
}
