use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A background/accent pairing offered under a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
}

/// Static brand description: display label, logo asset, logo bounding box
/// (max width, max height) and the color schemes it offers.
#[derive(Debug, Clone, Copy)]
pub struct Brand {
    pub label: &'static str,
    pub logo_path: &'static str,
    pub logo_box: (f32, f32),
    pub supports_invert: bool,
    pub schemes: &'static [ColorScheme],
}

const MAXIM_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "Deep Aqua",
        background: "#0C3B43",
        accent: "#99E5D3",
    },
    ColorScheme {
        name: "Midnight Mint",
        background: "#082a31",
        accent: "#7fe4d2",
    },
];

const BIFROST_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "Mint on White",
        background: "#ffffff",
        accent: "#33C19E",
    },
    ColorScheme {
        name: "Evergreen Mint",
        background: "#0f2d27",
        accent: "#33C19E",
    },
];

const MAXIM: Brand = Brand {
    label: "Maxim AI",
    logo_path: "logos/maxim-logo.svg",
    logo_box: (220.0, 80.0),
    supports_invert: false,
    schemes: MAXIM_SCHEMES,
};

const BIFROST: Brand = Brand {
    label: "Bifrost",
    logo_path: "logos/bifrost-logo.png",
    logo_box: (190.0, 80.0),
    supports_invert: true,
    schemes: BIFROST_SCHEMES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BrandKey {
    Maxim,
    Bifrost,
}

impl BrandKey {
    pub fn brand(self) -> &'static Brand {
        match self {
            BrandKey::Maxim => &MAXIM,
            BrandKey::Bifrost => &BIFROST,
        }
    }

    /// Stable identifier used in export filenames.
    pub fn id(self) -> &'static str {
        match self {
            BrandKey::Maxim => "maxim",
            BrandKey::Bifrost => "bifrost",
        }
    }
}

/// A named abstract pattern-drawing algorithm. Adding a theme means adding a
/// variant here plus its arm in `patterns::draw_pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Strata,
    Weave,
    Circuit,
    MinimalGrid,
    SoftDiagonal,
    PaperWaves,
    HighContrastStripes,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Strata,
        Theme::Weave,
        Theme::Circuit,
        Theme::MinimalGrid,
        Theme::SoftDiagonal,
        Theme::PaperWaves,
        Theme::HighContrastStripes,
    ];

    /// Stable identifier used for persistence and export filenames.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Strata => "strata",
            Theme::Weave => "weave",
            Theme::Circuit => "circuit",
            Theme::MinimalGrid => "minimal-grid",
            Theme::SoftDiagonal => "soft-diagonal",
            Theme::PaperWaves => "paper-waves",
            Theme::HighContrastStripes => "high-contrast-stripes",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Strata => "Strata",
            Theme::Weave => "Weave",
            Theme::Circuit => "Circuit",
            Theme::MinimalGrid => "Minimal Grid",
            Theme::SoftDiagonal => "Soft Diagonal",
            Theme::PaperWaves => "Paper Waves",
            Theme::HighContrastStripes => "High Contrast Stripes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TextColorMode {
    Auto,
    Light,
    Dark,
}

/// The whole session state for one render. Output is a pure function of this
/// struct plus the (optionally loaded) logo asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub brand: BrandKey,
    pub scheme_index: usize,
    pub theme: Theme,
    pub title: String,
    pub kicker: String,
    pub seed: u32,
    pub show_logo: bool,
    pub invert_logo: bool,
    pub text_color: TextColorMode,
    pub scale: u32,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            brand: BrandKey::Maxim,
            scheme_index: 0,
            theme: Theme::Strata,
            title: "This is a Sample Title: Add your own text here.".to_string(),
            kicker: "BLOG".to_string(),
            seed: time_seed(),
            show_logo: true,
            invert_logo: false,
            text_color: TextColorMode::Auto,
            scale: 2,
        }
    }

    /// The active color scheme; an out-of-range index falls back to the
    /// brand's first scheme.
    pub fn scheme(&self) -> &'static ColorScheme {
        let schemes = self.brand.brand().schemes;
        schemes.get(self.scheme_index).unwrap_or(&schemes[0])
    }

    /// Output-scale factor honored by the engine, clamped to [1, 4]. The UI
    /// convention of offering 1-3 is a caller-side restriction.
    pub fn clamped_scale(&self) -> u32 {
        self.scale.clamp(1, 4)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Time-derived default seed, truncated to the PRNG's 32-bit seed space.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0)
}
