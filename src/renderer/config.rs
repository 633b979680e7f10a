//! Configuration for SVG serialization

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Whether to emit an XML declaration before the root element
    pub standalone: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Spaces per indentation level when pretty printing
    pub indent_width: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            indent_width: 2,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert!(!config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_standalone(true)
            .with_pretty_print(false)
            .with_indent_width(4);

        assert!(config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.indent_width, 4);
    }
}
