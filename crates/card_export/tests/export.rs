use std::sync::Arc;

use card_cn::{card_scene, CardScene, CardView, SliderAnimations, Spinner};
use card_export::{
    CardExporter, DirectorySink, ExportError, ExportOutcome, MemorySink, RasterOptions, Rasterizer,
    SoftwareRasterizer,
};
use card_state::{ProfileData, ProfileUpdate};
use card_text::EstimatedMeasurer;
use card_theme::ThemeName;

fn seed_card(profile: &ProfileData) -> CardScene {
    let sliders = SliderAnimations::new(profile.strengths());
    let view = CardView {
        profile,
        avatar: None,
        drag_active: false,
        sliders: &sliders,
        downloading: false,
        spinner: Spinner::default(),
    };
    card_scene(&view, &EstimatedMeasurer)
}

struct Broken;

impl Rasterizer for Broken {
    fn render(&self, _: &CardScene, _: &RasterOptions) -> card_export::Result<Vec<u8>> {
        Err(ExportError::Render("canvas unavailable".to_string()))
    }
}

#[tokio::test]
async fn exported_png_is_the_card_at_double_density() {
    let temp = tempfile::tempdir().unwrap();
    let profile = ProfileData::seed();
    let scene = seed_card(&profile);
    let exporter = CardExporter::new(
        Arc::new(SoftwareRasterizer::without_text()),
        Arc::new(DirectorySink::new(temp.path())),
    );

    let outcome = exporter.export(scene.clone(), &profile.name).await;
    assert!(outcome.is_delivered(), "{outcome:?}");

    let path = temp.path().join("aria-montgomery-character-sheet.png");
    let png = image::open(&path).unwrap().to_rgba8();
    assert_eq!(png.width(), (scene.width * 2.0).ceil() as u32);
    assert_eq!(png.height(), (scene.height * 2.0).ceil() as u32);

    // Rounded card corner stays transparent, the middle is opaque card color
    assert_eq!(png.get_pixel(0, 0)[3], 0);
    assert_eq!(png.get_pixel(png.width() / 2, png.height() - 8)[3], 255);
}

#[test]
fn dark_theme_export_uses_dark_card_surface() {
    let profile = ProfileData::seed().merged(ProfileUpdate::default().theme(ThemeName::DarkMode));
    let scene = seed_card(&profile);
    let rasterizer = SoftwareRasterizer::without_text();
    let fb = rasterizer
        .rasterize(&scene, &RasterOptions::default().with_scale(1.0))
        .unwrap();

    let card = card_theme::lookup(ThemeName::DarkMode).card.to_rgba8();
    let bottom_middle = fb.get_pixel(fb.width() / 2, fb.height() - 6).unwrap();
    assert_eq!(bottom_middle, card);
}

#[tokio::test]
async fn failing_rasterizer_clears_flag_and_delivers_nothing() {
    let sink = Arc::new(MemorySink::new());
    let exporter = CardExporter::new(Arc::new(Broken), sink.clone());
    let flag = exporter.flag();

    let outcome = exporter.export(seed_card(&ProfileData::seed()), "Alex Rivera").await;

    assert_eq!(
        outcome,
        ExportOutcome::Failed {
            filename: "alex-rivera-character-sheet.png".to_string(),
            reason: "rasterizer failed: canvas unavailable".to_string(),
        }
    );
    assert!(!flag.is_set());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn failing_sink_reports_failure() {
    let temp = tempfile::tempdir().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let exporter = CardExporter::new(
        Arc::new(SoftwareRasterizer::without_text()),
        Arc::new(DirectorySink::new(&blocker)),
    )
    .with_options(RasterOptions::default().with_scale(0.5));

    let outcome = exporter.export(seed_card(&ProfileData::seed()), "Aria").await;
    assert!(!outcome.is_delivered());
    assert!(!exporter.is_exporting());
}
