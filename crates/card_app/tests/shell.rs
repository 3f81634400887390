use std::io::Cursor;
use std::sync::{mpsc, Arc, Mutex};

use card_app::{
    CardConfig, Dispatched, FilePicker, IntakeError, IntakeOutcome, PageSignal, ProfileCardApp,
};
use card_cn::{CardEvent, CardScene, ElementKind};
use card_core::{DropPayload, FileHandle};
use card_export::{ExportError, MemorySink, RasterOptions, Rasterizer, SoftwareRasterizer};
use card_theme::ThemeName;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

fn app_with(sink: Arc<MemorySink>, signal: PageSignal) -> ProfileCardApp {
    ProfileCardApp::new(
        &CardConfig::default(),
        Arc::new(SoftwareRasterizer::without_text()),
        sink,
        signal,
    )
    .unwrap()
}

fn app() -> ProfileCardApp {
    app_with(Arc::new(MemorySink::new()), PageSignal::new())
}

#[tokio::test]
async fn text_plain_upload_leaves_image_unchanged() {
    let mut app = app();
    let before = app.profile().clone();

    let handle = FileHandle::from_bytes("notes.txt", "text/plain", b"hello".to_vec());
    let result = app.dispatch(CardEvent::FilePicked(handle)).await.unwrap();

    assert_eq!(result, Dispatched::Intake(IntakeOutcome::Ignored));
    assert_eq!(app.profile(), &before);
}

#[tokio::test]
async fn picked_image_becomes_avatar() {
    let mut app = app();
    let handle = FileHandle::from_bytes("me.png", "image/png", png_bytes());

    let result = app.dispatch(CardEvent::FilePicked(handle)).await.unwrap();

    assert_eq!(result, Dispatched::Intake(IntakeOutcome::Applied));
    assert!(app.profile().image.starts_with("data:image/png;base64,"));
    let scene = app.card_scene();
    assert_eq!(scene.element("avatar").unwrap().kind, ElementKind::Image);
}

#[tokio::test]
async fn drop_uses_first_image_and_clears_highlight() {
    let mut app = app();
    app.dispatch(CardEvent::Drag(card_core::DragPhase::Over))
        .await
        .unwrap();

    let payload = DropPayload::new(vec![
        FileHandle::from_bytes("a.txt", "text/plain", b"x".to_vec()),
        FileHandle::from_bytes("b.png", "image/png", png_bytes()),
    ]);
    let result = app.dispatch(CardEvent::FilesDropped(payload)).await.unwrap();

    assert_eq!(result, Dispatched::Intake(IntakeOutcome::Applied));
    assert!(!app.is_drag_active());
    assert!(app.profile().has_image());
}

#[tokio::test]
async fn unreadable_image_surfaces_error_and_keeps_state() {
    let temp = tempfile::tempdir().unwrap();
    let mut app = app();
    let before = app.profile().clone();

    let handle = FileHandle::from_path(temp.path().join("missing.png"), "image/png");
    let err = app.dispatch(CardEvent::FilePicked(handle)).await.unwrap_err();

    assert!(matches!(err, IntakeError::Read(_)));
    assert_eq!(app.profile(), &before);
}

#[tokio::test]
async fn dark_theme_reaches_page_signal() {
    let signal = PageSignal::new();
    let mut app = app_with(Arc::new(MemorySink::new()), signal.clone());
    assert!(!signal.is_dark());

    app.dispatch(CardEvent::SelectTheme(ThemeName::DarkMode))
        .await
        .unwrap();
    assert!(signal.is_dark());
    assert_eq!(
        app.profile().strengths()[0].color,
        card_theme::palette_for(ThemeName::DarkMode)[0]
    );

    app.dispatch(CardEvent::SelectTheme(ThemeName::Verizon))
        .await
        .unwrap();
    assert!(!signal.is_dark());
    assert!(app.snapshot().elements["theme-verizon"].active);
}

#[tokio::test]
async fn download_delivers_png_named_after_profile() {
    let sink = Arc::new(MemorySink::new());
    let mut app = app_with(sink.clone(), PageSignal::new());
    app.dispatch(CardEvent::SetName("Alex Rivera".to_string()))
        .await
        .unwrap();

    let result = app.dispatch(CardEvent::Download).await.unwrap();
    assert_eq!(
        result,
        Dispatched::Exporting {
            filename: "alex-rivera-character-sheet.png".to_string()
        }
    );

    let outcomes = app.finish_exports().await;
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_delivered());
    assert_eq!(sink.len(), 1);
    assert!(sink.downloads()[0].bytes.starts_with(b"\x89PNG"));
    assert!(!app.is_exporting());
    assert_eq!(app.exports(), ["alex-rivera-character-sheet.png".to_string()]);

    let download = app.snapshot().elements["download-button"].clone();
    assert_eq!(download.text.as_deref(), Some("Download PNG"));
    assert!(!download.disabled);
}

#[test]
fn seeded_randomize_is_reproducible() {
    let mut first = app();
    let mut second = app();
    first.randomize_with(&mut StdRng::seed_from_u64(42));
    second.randomize_with(&mut StdRng::seed_from_u64(42));

    assert_eq!(first.profile(), second.profile());
    for strength in first.profile().strengths() {
        assert!((1..=5).contains(&strength.value));
    }
}

#[tokio::test]
async fn click_on_theme_button_selects_theme() {
    let mut app = app();
    let scene = app.page_scene();
    let center = scene.element("theme-dark-mode").unwrap().rect.center();

    let event = CardEvent::from_click(&scene, center).unwrap();
    app.dispatch(event).await.unwrap();

    assert_eq!(app.profile().theme, ThemeName::DarkMode);
    assert!(app.page_signal().is_dark());
}

/// Renders only after the test lets it
struct GatedRasterizer {
    gate: Mutex<mpsc::Receiver<()>>,
    inner: SoftwareRasterizer,
}

impl Rasterizer for GatedRasterizer {
    fn render(&self, scene: &CardScene, options: &RasterOptions) -> card_export::Result<Vec<u8>> {
        let gate = self
            .gate
            .lock()
            .map_err(|e| ExportError::Render(e.to_string()))?;
        gate.recv().map_err(|e| ExportError::Render(e.to_string()))?;
        self.inner.render(scene, options)
    }
}

#[tokio::test]
async fn download_shows_generating_until_export_finishes() {
    let (release, gate) = mpsc::channel();
    let rasterizer = GatedRasterizer {
        gate: Mutex::new(gate),
        inner: SoftwareRasterizer::without_text(),
    };
    let sink = Arc::new(MemorySink::new());
    let mut app = ProfileCardApp::new(
        &CardConfig::default(),
        Arc::new(rasterizer),
        sink.clone(),
        PageSignal::new(),
    )
    .unwrap();

    app.dispatch(CardEvent::Download).await.unwrap();
    assert!(app.is_exporting());

    let snapshot = app.snapshot();
    let download = &snapshot.elements["download-button"];
    assert_eq!(download.text.as_deref(), Some("Generating..."));
    assert!(download.disabled);

    app.tick(0.25);
    let angle = app.snapshot().elements["download-button-spinner"].value;
    assert!(angle.is_some_and(|a| a > 0.0), "{angle:?}");
    assert!(app.exports().is_empty());

    release.send(()).unwrap();
    let outcomes = app.finish_exports().await;
    assert!(outcomes[0].is_delivered());
    app.tick(0.016);

    assert!(!app.is_exporting());
    let snapshot = app.snapshot();
    assert_eq!(
        snapshot.elements["download-button"].text.as_deref(),
        Some("Download PNG")
    );
    assert!(!snapshot.elements.contains_key("download-button-spinner"));
    assert_eq!(app.exports(), ["aria-montgomery-character-sheet.png".to_string()]);
    assert_eq!(sink.len(), 1);
}

struct QueuedPicker(Mutex<Vec<FileHandle>>);

impl FilePicker for QueuedPicker {
    fn pick(&self) -> Option<FileHandle> {
        self.0.lock().ok()?.pop()
    }
}

#[tokio::test]
async fn upload_button_opens_picker_and_applies_choice() {
    let picker = QueuedPicker(Mutex::new(vec![FileHandle::from_bytes(
        "me.png",
        "image/png",
        png_bytes(),
    )]));
    let mut app = app().with_file_picker(Arc::new(picker));

    let scene = app.page_scene();
    let center = scene.element("upload-button").unwrap().rect.center();
    let event = CardEvent::from_click(&scene, center).unwrap();
    let result = app.dispatch(event).await.unwrap();

    assert_eq!(result, Dispatched::Intake(IntakeOutcome::Applied));
    assert!(app.profile().has_image());

    // Dismissed dialog
    let result = app.dispatch(CardEvent::OpenFilePicker).await.unwrap();
    assert_eq!(result, Dispatched::Intake(IntakeOutcome::Ignored));
}

#[tokio::test]
async fn upload_without_picker_is_ignored() {
    let mut app = app();
    let before = app.profile().clone();
    let result = app.dispatch(CardEvent::OpenFilePicker).await.unwrap();
    assert_eq!(result, Dispatched::Intake(IntakeOutcome::Ignored));
    assert_eq!(app.profile(), &before);
}
