//! Stat Card CLI
//!
//! Usage:
//!   stat-card [OPTIONS] [BODY]
//!
//! Reads the card body markup from BODY (or stdin), frames it in a themed
//! card and prints the SVG document to stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use stat_card::{
    AccessibilityLabel, Background, Card, CardOptions, Error, ImageAsset, StyleConfig, SvgConfig,
    Theme,
};

#[derive(Parser)]
#[command(name = "stat-card")]
#[command(about = "Render themed SVG cards around body markup")]
struct Cli {
    /// Body markup file (reads from stdin if not provided)
    body: Option<PathBuf>,

    /// Built-in theme name
    #[arg(short, long, default_value = "default")]
    theme: String,

    /// Theme file (TOML format), takes precedence over --theme
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Card width in pixels
    #[arg(long, default_value_t = 495.0)]
    width: f64,

    /// Card height in pixels
    #[arg(long, default_value_t = 195.0)]
    height: f64,

    /// Corner radius of the card border
    #[arg(long, default_value_t = 4.5)]
    border_radius: f64,

    /// Custom title (overrides --default-title)
    #[arg(long)]
    title: Option<String>,

    /// Title used when no custom title is given
    #[arg(long, default_value = "")]
    default_title: String,

    /// Background colour, or `angle,stop,stop...` for a gradient
    #[arg(long)]
    bg_color: Option<String>,

    /// Title colour override
    #[arg(long)]
    title_color: Option<String>,

    /// Text colour override
    #[arg(long)]
    text_color: Option<String>,

    /// Icon colour override
    #[arg(long)]
    icon_color: Option<String>,

    /// Border colour override
    #[arg(long)]
    border_color: Option<String>,

    /// Progress ring colour override
    #[arg(long)]
    ring_color: Option<String>,

    /// Background image file (png, jpg, gif, webp or svg)
    #[arg(long, conflicts_with = "no_background_image")]
    background_image: Option<PathBuf>,

    /// Paint the theme background instead of the bundled image
    #[arg(long)]
    no_background_image: bool,

    /// Hide the card border
    #[arg(long)]
    hide_border: bool,

    /// Hide the title row
    #[arg(long)]
    hide_title: bool,

    /// Make every animation finish instantly
    #[arg(long)]
    disable_animations: bool,

    /// Leave out time-based keyframes for reproducible output
    #[arg(long)]
    deterministic: bool,

    /// Include the body stylesheet with the ring filled to this percentage
    #[arg(long)]
    progress: Option<f64>,

    /// Show `.icon` elements in the body
    #[arg(long)]
    show_icons: bool,

    /// Accessible title (`<title>`)
    #[arg(long, default_value = "")]
    a11y_title: String,

    /// Accessible description (`<desc>`)
    #[arg(long, default_value = "")]
    a11y_desc: String,

    /// Emit the SVG on a single line
    #[arg(long)]
    compact: bool,

    /// List built-in themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_themes {
        for name in Theme::builtin_names() {
            println!("{}", name);
        }
        return;
    }

    // Without a body file and with an interactive stdin there is nothing to frame
    if cli.body.is_none() && io::stdin().is_terminal() {
        eprintln!("Error: no card body given (pass a file or pipe markup on stdin)");
        std::process::exit(2);
    }

    match run(&cli) {
        Ok(svg) => println!("{}", svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String, Error> {
    let theme = load_theme(cli)?;
    let body = read_body(cli)?;

    let mut options = CardOptions::new()
        .with_size(cli.width, cli.height)
        .with_border_radius(cli.border_radius)
        .with_default_title(cli.default_title.as_str());
    if let Some(title) = &cli.title {
        options = options.with_custom_title(title.as_str());
    }

    let background_image = if cli.no_background_image {
        None
    } else if let Some(path) = &cli.background_image {
        Some(ImageAsset::from_file(path)?)
    } else {
        Some(ImageAsset::embedded_background())
    };

    let mut card = Card::new(options.with_theme(theme.clone()))
        .with_accessibility_label(AccessibilityLabel::new(
            cli.a11y_title.as_str(),
            cli.a11y_desc.as_str(),
        ))
        .with_hide_border(cli.hide_border)
        .with_hide_title(cli.hide_title)
        .with_background_image(background_image)
        .with_suppressed_time_based_animations(cli.deterministic)
        .with_svg_config(SvgConfig::new().with_pretty_print(!cli.compact));

    if cli.disable_animations {
        card = card.disable_animations();
    }

    if let Some(styles) = body_styles(cli, &theme) {
        card = card.with_styles(&styles);
    }

    Ok(card.render(&body))
}

/// Body stylesheet settings, present when `--progress` or `--show-icons` asks for it
fn body_styles(cli: &Cli, theme: &Theme) -> Option<StyleConfig> {
    if cli.progress.is_none() && !cli.show_icons {
        return None;
    }
    Some(
        StyleConfig::from_theme(theme)
            .with_show_icons(cli.show_icons)
            .with_progress(cli.progress.unwrap_or(0.0))
            .with_suppressed_time_based_animations(cli.deterministic),
    )
}

fn load_theme(cli: &Cli) -> Result<Theme, Error> {
    let mut theme = match &cli.theme_file {
        Some(path) => Theme::from_file(path)?,
        None => Theme::builtin(&cli.theme)?,
    };

    let overrides = [
        (&cli.title_color, &mut theme.title_color),
        (&cli.text_color, &mut theme.text_color),
        (&cli.icon_color, &mut theme.icon_color),
        (&cli.border_color, &mut theme.border_color),
        (&cli.ring_color, &mut theme.ring_color),
    ];
    for (value, slot) in overrides {
        if let Some(color) = value {
            *slot = stat_card::theme::normalize_color(color);
        }
    }
    if let Some(bg) = &cli.bg_color {
        theme.bg_color = Background::parse(bg)?;
    }

    tracing::debug!(theme = ?theme.name, "resolved theme");
    Ok(theme)
}

fn read_body(cli: &Cli) -> Result<String, Error> {
    let body = match &cli.body {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(body)
}
