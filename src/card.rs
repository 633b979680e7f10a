//! Card composition
//!
//! A [`Card`] wraps caller-supplied body markup in the card frame: background,
//! border, accessibility labels, title row and the shared stylesheet.
//!
//! # Example
//!
//! ```rust
//! use stat_card::{Card, CardOptions};
//!
//! let card = Card::new(CardOptions::new().with_size(300.0, 200.0).with_default_title("Stats"))
//!     .with_hide_border(true);
//! let svg = card.render("<rect/>");
//! assert!(svg.contains(r#"stroke-opacity="0""#));
//! ```

use crate::assets::ImageAsset;
use crate::layout::FlexLayout;
use crate::renderer::svg::{escape_text, render_document};
use crate::renderer::{Element, Node, SvgConfig};
use crate::stylesheet::{card_animations, generate_styles, StyleConfig, ANIMATION_OVERRIDE};
use crate::theme::{Background, Theme};

/// Horizontal offset of the title row
pub const PADDING_X: f64 = 25.0;
/// Vertical offset of the title row
pub const PADDING_Y: f64 = 35.0;
/// Height removed from the card when the title row is hidden
pub const HIDDEN_TITLE_HEIGHT: f64 = 30.0;
/// Space between the title prefix icon and the title text
const TITLE_GAP: f64 = 25.0;
/// Extra height given to the background image so it covers the card when sliced
const BACKGROUND_BLEED: f64 = 90.0;

/// Text for the SVG `<title>` and `<desc>` elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessibilityLabel {
    pub title: String,
    pub description: String,
}

impl AccessibilityLabel {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Construction parameters for a [`Card`]
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    pub width: f64,
    pub height: f64,
    pub border_radius: f64,
    pub theme: Theme,
    /// Title used instead of `default_title` when present
    pub custom_title: Option<String>,
    pub default_title: String,
    /// Markup drawn in a 16×16 icon box before the title
    pub title_prefix_icon: Option<String>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            border_radius: 4.5,
            theme: Theme::default(),
            custom_title: None,
            default_title: String::new(),
            title_prefix_icon: None,
        }
    }
}

impl CardOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card width and height
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the corner radius of the card border
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    /// Set the colour theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set a title overriding the default one
    pub fn with_custom_title(mut self, title: impl Into<String>) -> Self {
        self.custom_title = Some(title.into());
        self
    }

    /// Set the title used when no custom title is given
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the icon markup drawn before the title
    pub fn with_title_prefix_icon(mut self, icon: impl Into<String>) -> Self {
        self.title_prefix_icon = Some(icon.into());
        self
    }
}

/// A renderable SVG card
///
/// Cards are configured through consuming `with_*` methods and rendered with
/// [`Card::render`], which leaves the card untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    width: f64,
    height: f64,
    border_radius: f64,
    colors: Theme,
    /// Markup-safe title text
    title: String,
    title_prefix_icon: Option<String>,
    hide_border: bool,
    hide_title: bool,
    animations_enabled: bool,
    suppress_time_based_animations: bool,
    extra_css: String,
    accessibility_label: AccessibilityLabel,
    background_image: Option<ImageAsset>,
    svg_config: SvgConfig,
}

impl Card {
    /// Create a card, escaping whichever title applies
    pub fn new(options: CardOptions) -> Self {
        let title = options
            .custom_title
            .as_deref()
            .unwrap_or(&options.default_title);

        Self {
            width: options.width,
            height: options.height,
            border_radius: options.border_radius,
            title: escape_text(title),
            colors: options.theme,
            title_prefix_icon: options.title_prefix_icon,
            hide_border: false,
            hide_title: false,
            animations_enabled: true,
            suppress_time_based_animations: false,
            extra_css: String::new(),
            accessibility_label: AccessibilityLabel::default(),
            background_image: Some(ImageAsset::embedded_background()),
            svg_config: SvgConfig::default(),
        }
    }

    /// Force every animation to complete instantly
    pub fn disable_animations(mut self) -> Self {
        self.animations_enabled = false;
        self
    }

    /// Set the `<title>` / `<desc>` text
    pub fn with_accessibility_label(mut self, label: AccessibilityLabel) -> Self {
        self.accessibility_label = label;
        self
    }

    /// Set CSS appended to the card stylesheet verbatim, replacing earlier extra CSS
    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = css.into();
        self
    }

    /// Append the body stylesheet generated from `styles` to the extra CSS
    pub fn with_styles(mut self, styles: &StyleConfig) -> Self {
        if !self.extra_css.is_empty() && !self.extra_css.ends_with('\n') {
            self.extra_css.push('\n');
        }
        self.extra_css.push_str(&generate_styles(styles));
        self
    }

    /// Hide or show the card border
    pub fn with_hide_border(mut self, hide: bool) -> Self {
        self.hide_border = hide;
        self
    }

    /// Hide or show the title row.
    ///
    /// A hidden title shrinks the rendered card by [`HIDDEN_TITLE_HEIGHT`].
    /// The reduction is derived from the flag, so repeating the call does not
    /// shrink the card further.
    pub fn with_hide_title(mut self, hide: bool) -> Self {
        self.hide_title = hide;
        self
    }

    /// Replace the title with markup-safe text; the text is not escaped again
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the background image, or drop it to paint the theme background instead
    pub fn with_background_image(mut self, image: Option<ImageAsset>) -> Self {
        self.background_image = image;
        self
    }

    /// Leave out time-based keyframes so output can be compared verbatim
    pub fn with_suppressed_time_based_animations(mut self, suppress: bool) -> Self {
        self.suppress_time_based_animations = suppress;
        self
    }

    /// Set SVG serialization options
    pub fn with_svg_config(mut self, config: SvgConfig) -> Self {
        self.svg_config = config;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Rendered height, after any reduction for a hidden title
    pub fn height(&self) -> f64 {
        if self.hide_title {
            self.height - HIDDEN_TITLE_HEIGHT
        } else {
            self.height
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn colors(&self) -> &Theme {
        &self.colors
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    /// Render the card around `body` as a complete SVG document
    pub fn render(&self, body: &str) -> String {
        tracing::debug!(
            width = self.width,
            height = self.height(),
            hide_title = self.hide_title,
            hide_border = self.hide_border,
            animations = self.animations_enabled,
            "rendering card"
        );
        render_document(&self.to_element(body), &self.svg_config)
    }

    /// Build the card's root `<svg>` element around `body`
    pub fn to_element(&self, body: &str) -> Element {
        let width = self.width;
        let height = self.height();

        let mut svg = Element::new("svg")
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {} {}", width, height))
            .attr("fill", "none")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("role", "img")
            .attr("aria-labelledby", "descId");

        if let Some(image) = &self.background_image {
            svg = svg.child(self.background_pattern(image));
        }

        svg = svg
            .child(
                Element::new("title")
                    .attr("id", "titleId")
                    .text(self.accessibility_label.title.as_str()),
            )
            .child(
                Element::new("desc")
                    .attr("id", "descId")
                    .text(self.accessibility_label.description.as_str()),
            )
            .child(Element::new("style").raw(self.stylesheet()));

        if let Some(gradient) = self.gradient() {
            svg = svg.child(gradient);
        }

        svg = svg.child(self.background_rect());

        if !self.hide_title {
            svg = svg.child(self.title_group());
        }

        let body_offset = if self.hide_title {
            PADDING_X
        } else {
            PADDING_Y + 20.0
        };
        svg.child(
            Element::new("g")
                .attr("data-testid", "main-card-body")
                .attr("transform", format!("translate(0, {})", body_offset))
                .raw(body),
        )
    }

    fn background_pattern(&self, image: &ImageAsset) -> Element {
        let height = self.height();
        Element::new("defs").child(
            Element::new("pattern")
                .attr("id", "background")
                .attr("patternUnits", "userSpaceOnUse")
                .attr("width", self.width)
                .attr("height", height)
                .child(
                    Element::new("image")
                        .attr("href", image.data_uri())
                        .attr("preserveAspectRatio", "xMidYMid slice")
                        .attr("x", 0)
                        .attr("y", 0)
                        .attr("width", self.width)
                        .attr("height", height + BACKGROUND_BLEED),
                ),
        )
    }

    fn stylesheet(&self) -> String {
        let mut css = format!(
            r#".header {{
  font: 600 18px 'Segoe UI', Ubuntu, Sans-Serif;
  fill: {};
  animation: fadeInAnimation 0.5s ease-in-out forwards;
}}
@supports(-moz-appearance: auto) {{
  /* Selector detects Firefox */
  .header {{ font-size: 15.5px; }}
}}
"#,
            self.colors.title_color
        );

        css.push_str(&self.extra_css);
        css.push('\n');

        if !self.suppress_time_based_animations {
            css.push_str(card_animations());
            css.push('\n');
        }
        if !self.animations_enabled {
            css.push_str(ANIMATION_OVERRIDE);
            css.push('\n');
        }
        css
    }

    fn gradient(&self) -> Option<Element> {
        let angle = match &self.colors.bg_color {
            Background::Gradient { angle, .. } => *angle,
            Background::Solid(_) => return None,
        };

        let stops = self
            .colors
            .bg_color
            .gradient_stops()
            .into_iter()
            .map(|(offset, color)| {
                Element::new("stop")
                    .attr("offset", format!("{}%", offset))
                    .attr("stop-color", format!("#{}", color))
            });

        Some(
            Element::new("defs").child(
                Element::new("linearGradient")
                    .attr("id", "gradient")
                    .attr("gradientTransform", format!("rotate({})", angle))
                    .attr("gradientUnits", "userSpaceOnUse")
                    .children(stops),
            ),
        )
    }

    fn background_fill(&self) -> String {
        if self.background_image.is_some() {
            return "url(#background)".to_string();
        }
        match &self.colors.bg_color {
            Background::Gradient { .. } => "url(#gradient)".to_string(),
            Background::Solid(color) => color.clone(),
        }
    }

    fn background_rect(&self) -> Element {
        Element::new("rect")
            .attr("data-testid", "card-bg")
            .attr("x", 0.5)
            .attr("y", 0.5)
            .attr("rx", self.border_radius)
            .attr("height", "99%")
            .attr("stroke", &self.colors.border_color)
            .attr("width", self.width - 1.0)
            .attr("fill", self.background_fill())
            .attr("stroke-opacity", if self.hide_border { 0 } else { 1 })
    }

    fn title_group(&self) -> Element {
        let prefix_icon = self.title_prefix_icon.as_ref().map(|icon| {
            Element::new("svg")
                .attr("class", "icon")
                .attr("x", 0)
                .attr("y", -13)
                .attr("viewBox", "0 0 16 16")
                .attr("version", "1.1")
                .attr("width", 16)
                .attr("height", 16)
                .raw(icon.as_str())
        });
        let title_text = Element::new("text")
            .attr("x", 0)
            .attr("y", 0)
            .attr("class", "header")
            .attr("data-testid", "header")
            .child(Node::Raw(self.title.clone()));

        Element::new("g")
            .attr("data-testid", "card-title")
            .attr("transform", format!("translate({}, {})", PADDING_X, PADDING_Y))
            .children(FlexLayout::row(TITLE_GAP).arrange([prefix_icon, Some(title_text)]))
    }
}
