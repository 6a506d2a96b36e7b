#[cfg(test)]
mod rng_tests {
    use crate::rng::Mulberry32;

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);
        for _ in 0..500 {
            assert_eq!(a.next().to_bits(), b.next().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        let first: Vec<u64> = (0..8).map(|_| a.next().to_bits()).collect();
        let second: Vec<u64> = (0..8).map(|_| b.next().to_bits()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_output_range_and_spread() {
        let mut rng = Mulberry32::new(7);
        let mut sum = 0.0;
        for _ in 0..1000 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v), "value out of range: {v}");
            sum += v;
        }
        let mean = sum / 1000.0;
        assert!((0.4..0.6).contains(&mean), "poorly spread mean: {mean}");
    }
}

#[cfg(test)]
mod color_tests {
    use crate::color_utils::{hex_to_rgb, is_dark, luminance, with_alpha};

    #[test]
    fn test_hex_to_rgb_six_digits() {
        assert_eq!(hex_to_rgb("#0C3B43"), (0x0C, 0x3B, 0x43));
        assert_eq!(hex_to_rgb("33C19E"), (0x33, 0xC1, 0x9E));
    }

    #[test]
    fn test_hex_to_rgb_three_digit_expansion() {
        assert_eq!(hex_to_rgb("abc"), (170, 187, 204));
        assert_eq!(hex_to_rgb("#fff"), (255, 255, 255));
    }

    #[test]
    fn test_hex_to_rgb_malformed_degrades_to_zero() {
        assert_eq!(hex_to_rgb("#zzzzzz"), (0, 0, 0));
        assert_eq!(hex_to_rgb(""), (0, 0, 0));
        // only the unparseable channels degrade
        assert_eq!(hex_to_rgb("#zz3b43"), (0, 0x3B, 0x43));
        assert_eq!(hex_to_rgb("#12345"), (0x12, 0x34, 0));
    }

    #[test]
    fn test_with_alpha_composition() {
        let c = with_alpha("#99E5D3", 0.5).to_color_u8();
        assert_eq!((c.red(), c.green(), c.blue()), (0x99, 0xE5, 0xD3));
        assert_eq!(c.alpha(), 128);

        let clamped = with_alpha("#000000", 2.0).to_color_u8();
        assert_eq!(clamped.alpha(), 255);
    }

    #[test]
    fn test_is_dark_boundary() {
        // #808080 sits just above the 0.5 threshold
        assert!(luminance("#808080") > 0.5);
        assert!(!is_dark("#808080"));
        assert!(is_dark("#000000"));
        assert!(!is_dark("#ffffff"));
        assert!(is_dark("#0C3B43"));
        assert!(!is_dark("#99E5D3"));
    }
}

#[cfg(test)]
mod text_tests {
    use crate::text_utils::wrap_text;

    fn char_width(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_greedy_wrap() {
        let lines = wrap_text(char_width, "aaaa bbbb cccc", 0.0, 0.0, 100.0, 10.0);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["aaaa bbbb", "cccc"]);
        assert_eq!(lines[0].y, 0.0);
        assert_eq!(lines[1].y, 10.0);
    }

    #[test]
    fn test_overlong_word_kept_on_own_line() {
        let lines = wrap_text(char_width, "tiny incomprehensibilities end", 0.0, 0.0, 100.0, 10.0);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["tiny", "incomprehensibilities", "end"]);
    }

    #[test]
    fn test_paragraph_gap() {
        let lines = wrap_text(char_width, "a\nb", 0.0, 0.0, 100.0, 10.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].y, 0.0);
        // one line height plus the 0.3 paragraph gap
        assert!((lines[1].y - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_blank_paragraph_advances_line() {
        let lines = wrap_text(char_width, "a\n\nb", 0.0, 0.0, 100.0, 10.0);
        assert_eq!(lines.len(), 2);
        // line + gap + blank line + gap
        assert!((lines[1].y - 26.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_idempotence() {
        let text = "The quick brown fox jumps over the lazy dog while pattern engines render";
        let first = wrap_text(char_width, text, 0.0, 0.0, 200.0, 10.0);
        let rejoined = first
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let second = wrap_text(char_width, &rejoined, 0.0, 0.0, 200.0, 10.0);
        let a: Vec<&str> = first.iter().map(|l| l.text.as_str()).collect();
        let b: Vec<&str> = second.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_title_renders_no_lines() {
        assert!(wrap_text(char_width, "", 0.0, 0.0, 100.0, 10.0).is_empty());
        assert!(wrap_text(char_width, "   ", 0.0, 0.0, 100.0, 10.0).is_empty());
    }
}

#[cfg(test)]
mod export_tests {
    use crate::models::{BrandKey, Theme};
    use crate::utils::{export_filename, slugify};

    #[test]
    fn test_slugify_sample_title() {
        assert_eq!(
            slugify("This is a Sample Title: Add your own text here."),
            "this-is-a-sample-title-add-your-own-text-here"
        );
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("  --Hello,   World!--  "), "hello-world");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_slugify_truncates_to_60() {
        let long = "a".repeat(80);
        assert_eq!(slugify(&long).len(), 60);
    }

    #[test]
    fn test_export_filename_fallback() {
        assert_eq!(
            export_filename("!!!", BrandKey::Maxim, Theme::Strata),
            "hero-image-maxim-strata.png"
        );
        assert_eq!(
            export_filename("Launch Day", BrandKey::Bifrost, Theme::HighContrastStripes),
            "launch-day-bifrost-high-contrast-stripes.png"
        );
    }

    #[test]
    fn test_theme_ids_are_stable_and_unique() {
        let ids: Vec<&str> = Theme::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), 7);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id), "duplicate theme id {id}");
        }
    }
}

#[cfg(test)]
mod model_tests {
    use crate::models::{BrandKey, RenderConfig, TextColorMode, Theme};

    fn config(theme: Theme, seed: u32) -> RenderConfig {
        RenderConfig {
            brand: BrandKey::Maxim,
            scheme_index: 0,
            theme,
            title: "Determinism check".to_string(),
            kicker: String::new(),
            seed,
            show_logo: false,
            invert_logo: false,
            text_color: TextColorMode::Auto,
            scale: 1,
        }
    }

    #[test]
    fn test_scheme_index_fallback() {
        let mut cfg = config(Theme::Strata, 1);
        cfg.scheme_index = 99;
        assert_eq!(cfg.scheme().name, "Deep Aqua");
        cfg.scheme_index = 1;
        assert_eq!(cfg.scheme().name, "Midnight Mint");
    }

    #[test]
    fn test_scale_clamp() {
        let mut cfg = config(Theme::Strata, 1);
        cfg.scale = 0;
        assert_eq!(cfg.clamped_scale(), 1);
        cfg.scale = 10;
        assert_eq!(cfg.clamped_scale(), 4);
        cfg.scale = 3;
        assert_eq!(cfg.clamped_scale(), 3);
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg = config(Theme::PaperWaves, 1234);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}

#[cfg(test)]
mod render_tests {
    use crate::fonts::FontStore;
    use crate::models::{BrandKey, RenderConfig, TextColorMode, Theme};
    use crate::renderer::{render_hero, resolve_text_color, CANVAS_HEIGHT, CANVAS_WIDTH};

    fn config(theme: Theme, seed: u32) -> RenderConfig {
        RenderConfig {
            brand: BrandKey::Maxim,
            scheme_index: 0,
            theme,
            title: "Determinism check".to_string(),
            kicker: String::new(),
            seed,
            show_logo: false,
            invert_logo: false,
            text_color: TextColorMode::Auto,
            scale: 1,
        }
    }

    #[test]
    fn test_render_is_deterministic_for_every_theme() {
        let fonts = FontStore::empty();
        for theme in Theme::ALL {
            let cfg = config(theme, 99);
            let first = render_hero(&cfg, None, &fonts).unwrap();
            let second = render_hero(&cfg, None, &fonts).unwrap();
            assert_eq!(
                first.data(),
                second.data(),
                "theme {} not deterministic",
                theme.id()
            );
        }
    }

    #[test]
    fn test_seed_changes_randomized_themes() {
        let fonts = FontStore::empty();
        let randomized = [
            Theme::Strata,
            Theme::Weave,
            Theme::SoftDiagonal,
            Theme::PaperWaves,
            Theme::HighContrastStripes,
        ];
        for theme in randomized {
            let a = render_hero(&config(theme, 1), None, &fonts).unwrap();
            let b = render_hero(&config(theme, 2), None, &fonts).unwrap();
            assert_ne!(a.data(), b.data(), "theme {} ignored the seed", theme.id());
        }
    }

    #[test]
    fn test_grid_themes_are_seed_invariant() {
        let fonts = FontStore::empty();
        for theme in [Theme::Circuit, Theme::MinimalGrid] {
            let a = render_hero(&config(theme, 1), None, &fonts).unwrap();
            let b = render_hero(&config(theme, 2), None, &fonts).unwrap();
            assert_eq!(a.data(), b.data(), "theme {} consumed RNG", theme.id());
        }
    }

    #[test]
    fn test_physical_size_follows_clamped_scale() {
        let fonts = FontStore::empty();

        let mut cfg = config(Theme::Circuit, 1);
        cfg.scale = 0;
        let pixmap = render_hero(&cfg, None, &fonts).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));

        cfg.scale = 10;
        let pixmap = render_hero(&cfg, None, &fonts).unwrap();
        assert_eq!(
            (pixmap.width(), pixmap.height()),
            (CANVAS_WIDTH * 4, CANVAS_HEIGHT * 4)
        );
    }

    #[test]
    fn test_background_is_opaque() {
        let fonts = FontStore::empty();
        for theme in Theme::ALL {
            let pixmap = render_hero(&config(theme, 5), None, &fonts).unwrap();
            for &(x, y) in &[(0, 0), (1199, 0), (0, 629), (600, 315)] {
                let pixel = pixmap.pixel(x, y).unwrap();
                assert_eq!(pixel.alpha(), 255, "theme {} not opaque", theme.id());
            }
        }
    }

    #[test]
    fn test_resolve_text_color() {
        assert_eq!(resolve_text_color(TextColorMode::Light, "#000000"), "#ffffff");
        assert_eq!(resolve_text_color(TextColorMode::Dark, "#000000"), "#0b1d1f");
        assert_eq!(resolve_text_color(TextColorMode::Auto, "#0C3B43"), "#ffffff");
        assert_eq!(resolve_text_color(TextColorMode::Auto, "#ffffff"), "#0b1d1f");
    }
}

#[cfg(test)]
mod logo_tests {
    use crate::logo::{fit_scale, LogoAsset};
    use tiny_skia::{Color, Pixmap};

    #[test]
    fn test_fit_scale_downscales_preserving_aspect() {
        // twice the box in both dimensions
        assert_eq!(fit_scale(440.0, 160.0, 220.0, 80.0), 0.5);
        // constrained by height only
        let s = fit_scale(100.0, 160.0, 220.0, 80.0);
        assert_eq!(s, 0.5);
    }

    #[test]
    fn test_fit_scale_never_upscales() {
        assert_eq!(fit_scale(100.0, 40.0, 220.0, 80.0), 1.0);
        assert_eq!(fit_scale(220.0, 80.0, 220.0, 80.0), 1.0);
    }

    #[test]
    fn test_fit_scale_degenerate_size() {
        assert_eq!(fit_scale(0.0, 40.0, 220.0, 80.0), 0.0);
    }

    #[test]
    fn test_inversion_flips_channels() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 0, 0, 255));
        let inverted = LogoAsset::from_pixmap(pixmap).inverted();
        let pixel = inverted.pixmap().pixel(0, 0).unwrap().demultiply();
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
            (0, 255, 255, 255)
        );
    }
}
