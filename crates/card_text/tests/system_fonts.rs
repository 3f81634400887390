//! Tests against whatever fonts the machine has installed. Each test returns
//! early on hosts without fonts.

use card_text::{FontMeasurer, FontRegistry, GlyphRasterizer, TextMeasurer};

#[test]
fn sans_face_rasterizes_visible_glyphs() {
    let mut registry = FontRegistry::new();
    let Ok(face) = registry.load_sans(400) else {
        eprintln!("no system fonts, skipping");
        return;
    };

    let mut rasterizer = GlyphRasterizer::new();
    let glyph = rasterizer.rasterize(&face, face.glyph_id('A'), 32.0).unwrap();
    assert!(glyph.width > 0 && glyph.height > 0);
    assert!(glyph.bitmap.iter().any(|&c| c > 0));
    assert!(glyph.advance > 0.0);

    let space = rasterizer.rasterize(&face, face.glyph_id(' '), 32.0).unwrap();
    assert!(space.advance > 0.0);

    // Cached on repeat
    rasterizer.rasterize(&face, face.glyph_id('A'), 32.0).unwrap();
    assert_eq!(rasterizer.cached_glyphs(), 2);
}

#[test]
fn font_measurer_grows_with_text() {
    let mut registry = FontRegistry::new();
    let Ok(measurer) = FontMeasurer::new(&mut registry) else {
        eprintln!("no system fonts, skipping");
        return;
    };

    let short = measurer.text_width("Aria", 16.0, 400);
    let long = measurer.text_width("Aria Montgomery", 16.0, 400);
    assert!(short > 0.0);
    assert!(long > short);
    assert!(measurer.line_height(16.0) >= 16.0);
}
