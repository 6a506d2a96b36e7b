use anyhow::{Context, Result};
use clap::Parser;
use herogen::{
    export_filename, render_hero, save_png_with_quality, BrandKey, FontStore, LogoAsset,
    RenderConfig, TextColorMode, Theme,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "herogen")]
#[command(about = "Generate abstract hero-image banners as PNG", long_about = None)]
struct Args {
    /// Brand to render for
    #[arg(long, value_enum, default_value_t = BrandKey::Maxim)]
    brand: BrandKey,

    /// Color scheme index within the brand (out of range falls back to 0)
    #[arg(long, default_value_t = 0)]
    scheme: usize,

    /// Background pattern theme
    #[arg(long, value_enum, default_value_t = Theme::Strata)]
    theme: Theme,

    /// Title text; newlines start new paragraphs
    #[arg(long, default_value = "This is a Sample Title: Add your own text here.")]
    title: String,

    /// Short uppercase label above the title (empty to omit)
    #[arg(long, default_value = "BLOG")]
    kicker: String,

    /// Pattern seed; defaults to the current time
    #[arg(long)]
    seed: Option<u32>,

    /// Skip the brand logo
    #[arg(long)]
    no_logo: bool,

    /// Invert the logo colors (honored for brands that support it)
    #[arg(long)]
    invert_logo: bool,

    /// Foreground text color selection
    #[arg(long, value_enum, default_value_t = TextColorMode::Auto)]
    text_color: TextColorMode,

    /// Output resolution multiplier, conventionally 1-3 (engine clamps to 1-4)
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Logo file to use instead of the brand's default asset
    #[arg(long, value_name = "FILE")]
    logo: Option<PathBuf>,

    /// Load the whole render configuration from a JSON file instead of flags
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file path (defaults to a name derived from title, brand, theme)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// PNG compression quality 0-100
    #[arg(long, default_value_t = 90)]
    quality: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;
            serde_json::from_str::<RenderConfig>(&json)
                .context("Failed to parse render config JSON")?
        }
        None => RenderConfig {
            brand: args.brand,
            scheme_index: args.scheme,
            theme: args.theme,
            title: args.title.clone(),
            kicker: args.kicker.clone(),
            seed: args.seed.unwrap_or_else(herogen::models::time_seed),
            show_logo: !args.no_logo,
            invert_logo: args.invert_logo,
            text_color: args.text_color,
            scale: args.scale,
        },
    };

    let fonts = FontStore::load_system();
    if !fonts.has_face() {
        eprintln!("Warning: no usable system font found; rendering without text");
    }

    let logo = if config.show_logo {
        let logo_path = args
            .logo
            .clone()
            .unwrap_or_else(|| PathBuf::from(config.brand.brand().logo_path));
        match LogoAsset::load(&logo_path) {
            Ok(asset) => Some(asset),
            Err(err) => {
                eprintln!(
                    "Warning: could not load logo {}: {err}; rendering without it",
                    logo_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let pixmap = render_hero(&config, logo.as_ref(), &fonts)?;

    let output_path = args.output.unwrap_or_else(|| {
        PathBuf::from(export_filename(&config.title, config.brand, config.theme))
    });
    save_png_with_quality(&pixmap, &output_path, args.quality)
        .with_context(|| format!("Failed to write PNG: {output_path:?}"))?;

    println!(
        "Wrote {} ({}x{})",
        output_path.display(),
        pixmap.width(),
        pixmap.height()
    );

    Ok(())
}
