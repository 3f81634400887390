//! Root shell
//!
//! Owns the profile controller, the view-side animation state and the
//! exporter, and routes [`CardEvent`]s into them. Scenes are rebuilt from
//! scratch on request.
//!
//! Downloads run in the background: [`CardEvent::Download`] starts one and
//! returns, [`ProfileCardApp::tick`] collects finished exports, and
//! [`ProfileCardApp::finish_exports`] waits for the rest.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use card_cn::{card_scene, page_scene, CardEvent, CardScene, CardView, SliderAnimations, Spinner};
use card_core::{DragPhase, FileHandle};
use card_export::{CardExporter, DownloadSink, ExportOutcome, Rasterizer};
use card_image::{AvatarCache, FileHandleExt, ImageError};
use card_paint::Bitmap;
use card_state::{ProfileController, ProfileData, ProfileUpdate};
use card_text::{EstimatedMeasurer, TextMeasurer};
use rand::Rng;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::CardConfig;
use crate::headless_assert::DiagnosticsSnapshot;

/// Dark-mode state of the host page, written by the theme listener
#[derive(Clone, Debug, Default)]
pub struct PageSignal(Arc<AtomicBool>);

impl PageSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, dark: bool) {
        self.0.store(dark, Ordering::SeqCst);
    }
}

/// Host file dialog behind the avatar's upload button
pub trait FilePicker: Send + Sync {
    /// The chosen file, or `None` when the dialog was dismissed
    fn pick(&self) -> Option<FileHandle>;
}

/// Result of offering a file to the avatar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeOutcome {
    Applied,
    /// Not an image; the profile is unchanged
    Ignored,
}

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("could not load avatar: {0}")]
    Read(#[from] ImageError),
}

/// What a dispatched event did
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatched {
    Updated,
    Intake(IntakeOutcome),
    /// An export was started; its outcome arrives through `tick` or
    /// `finish_exports`
    Exporting { filename: String },
}

pub struct ProfileCardApp {
    controller: ProfileController,
    sliders: SliderAnimations,
    avatar_cache: AvatarCache,
    avatar: Option<Bitmap>,
    drag_active: bool,
    spinner: Spinner,
    exporter: Arc<CardExporter>,
    export_tx: UnboundedSender<ExportOutcome>,
    export_rx: UnboundedReceiver<ExportOutcome>,
    exports_in_flight: usize,
    file_picker: Option<Arc<dyn FilePicker>>,
    measurer: Arc<dyn TextMeasurer>,
    page_signal: PageSignal,
    exports: Vec<String>,
}

impl ProfileCardApp {
    /// Build the shell from configuration. The configured theme and name
    /// are applied on top of the seed profile, so a dark theme reaches
    /// `page_signal` right away.
    pub fn new(
        config: &CardConfig,
        rasterizer: Arc<dyn Rasterizer>,
        sink: Arc<dyn DownloadSink>,
        page_signal: PageSignal,
    ) -> Result<Self> {
        let listener_signal = page_signal.clone();
        let mut controller = ProfileController::new(Some(Box::new(move |dark: bool| {
            listener_signal.set(dark);
        })));
        page_signal.set(controller.profile().theme.is_dark());

        let mut initial = ProfileUpdate::default().theme(config.profile.theme);
        if let Some(name) = &config.profile.name {
            initial = initial.name(name.clone());
        }
        controller.update(initial);

        let exporter =
            CardExporter::new(rasterizer, sink).with_options(config.export.raster_options()?);
        let sliders = SliderAnimations::new(controller.profile().strengths());
        let (export_tx, export_rx) = mpsc::unbounded_channel();

        Ok(Self {
            controller,
            sliders,
            avatar_cache: AvatarCache::new(),
            avatar: None,
            drag_active: false,
            spinner: Spinner::default(),
            exporter: Arc::new(exporter),
            export_tx,
            export_rx,
            exports_in_flight: 0,
            file_picker: None,
            measurer: Arc::new(EstimatedMeasurer),
            page_signal,
            exports: Vec::new(),
        })
    }

    /// Lay text out with `measurer` instead of the font-free estimate
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Answer upload button clicks with `picker`
    pub fn with_file_picker(mut self, picker: Arc<dyn FilePicker>) -> Self {
        self.file_picker = Some(picker);
        self
    }

    pub fn profile(&self) -> &ProfileData {
        self.controller.profile()
    }

    pub fn page_signal(&self) -> &PageSignal {
        &self.page_signal
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn is_exporting(&self) -> bool {
        self.exporter.is_exporting()
    }

    /// Filenames of delivered downloads, oldest first
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Apply one event. Only a failed avatar read is an error; the profile
    /// stays as it was in that case.
    pub async fn dispatch(&mut self, event: CardEvent) -> Result<Dispatched, IntakeError> {
        let result = self.route(event).await;
        self.sync_view();
        result
    }

    async fn route(&mut self, event: CardEvent) -> Result<Dispatched, IntakeError> {
        let update = match event {
            CardEvent::SetName(name) => ProfileUpdate::default().name(name),
            CardEvent::SetTitle(title) => ProfileUpdate::default().title(title),
            CardEvent::SetDescription(text) => ProfileUpdate::default().description(text),
            CardEvent::SetNotes(notes) => ProfileUpdate::default().notes(notes),
            CardEvent::SelectTheme(theme) => ProfileUpdate::default().theme(theme),
            CardEvent::SetStrength { id, value } => {
                self.controller.set_strength_value(&id, value);
                return Ok(Dispatched::Updated);
            }
            CardEvent::Drag(phase) => {
                self.drag_active = phase == DragPhase::Over;
                return Ok(Dispatched::Updated);
            }
            CardEvent::FilesDropped(payload) => {
                self.drag_active = false;
                let outcome = match payload.first_image() {
                    Some(handle) => self.ingest(handle).await?,
                    None => IntakeOutcome::Ignored,
                };
                return Ok(Dispatched::Intake(outcome));
            }
            CardEvent::OpenFilePicker => {
                let Some(picker) = self.file_picker.clone() else {
                    tracing::debug!("upload clicked without a file picker attached");
                    return Ok(Dispatched::Intake(IntakeOutcome::Ignored));
                };
                let outcome = match picker.pick() {
                    Some(handle) => self.ingest(&handle).await?,
                    None => IntakeOutcome::Ignored,
                };
                return Ok(Dispatched::Intake(outcome));
            }
            CardEvent::FilePicked(handle) => {
                return Ok(Dispatched::Intake(self.ingest(&handle).await?));
            }
            CardEvent::Randomize => {
                self.controller.randomize();
                return Ok(Dispatched::Updated);
            }
            CardEvent::Download => return Ok(self.download()),
        };
        self.controller.update(update);
        Ok(Dispatched::Updated)
    }

    /// Read `handle` into the avatar. Non-image media types are skipped.
    pub async fn ingest(&mut self, handle: &FileHandle) -> Result<IntakeOutcome, IntakeError> {
        if !handle.is_image() {
            tracing::trace!(
                name = handle.name(),
                media_type = handle.media_type(),
                "ignoring non-image file"
            );
            return Ok(IntakeOutcome::Ignored);
        }

        let uri = match handle.read_data_uri().await {
            Ok(uri) => uri,
            Err(err) => {
                tracing::error!(name = handle.name(), error = %err, "avatar read failed");
                return Err(err.into());
            }
        };
        self.controller.update(ProfileUpdate::default().image(uri.encode()));
        Ok(IntakeOutcome::Applied)
    }

    /// Randomize with a caller-provided generator
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.controller.randomize_with(rng);
        self.sync_view();
    }

    fn download(&mut self) -> Dispatched {
        let scene = self.card_scene();
        let name = &self.controller.profile().name;
        let filename = card_export::export_filename(name);
        self.exporter.spawn(scene, name, self.export_tx.clone());
        self.exports_in_flight += 1;
        Dispatched::Exporting { filename }
    }

    fn record_export(&mut self, outcome: &ExportOutcome) {
        self.exports_in_flight = self.exports_in_flight.saturating_sub(1);
        if outcome.is_delivered() {
            self.exports.push(outcome.filename().to_string());
        }
    }

    /// Exports that finished since the last call, without waiting
    pub fn poll_exports(&mut self) -> Vec<ExportOutcome> {
        let mut finished = Vec::new();
        while let Ok(outcome) = self.export_rx.try_recv() {
            self.record_export(&outcome);
            finished.push(outcome);
        }
        finished
    }

    /// Wait for every running export and return all uncollected outcomes
    pub async fn finish_exports(&mut self) -> Vec<ExportOutcome> {
        let mut finished = self.poll_exports();
        while self.exports_in_flight > 0 {
            let Some(outcome) = self.export_rx.recv().await else {
                break;
            };
            self.record_export(&outcome);
            finished.push(outcome);
        }
        finished
    }

    /// Advance animations by `dt` seconds and collect finished exports
    pub fn tick(&mut self, dt: f32) {
        self.poll_exports();
        self.sliders.tick(dt);
        if self.exporter.is_exporting() {
            self.spinner.advance(dt);
        } else {
            self.spinner.reset();
        }
    }

    /// Jump every animation to its target
    pub fn settle(&mut self) {
        self.sliders.settle();
    }

    fn sync_view(&mut self) {
        let profile = self.controller.profile();
        self.sliders.sync(profile.strengths());
        self.avatar = self.avatar_cache.get(&profile.image);
    }

    fn view(&self) -> CardView<'_> {
        CardView {
            profile: self.controller.profile(),
            avatar: self.avatar.clone(),
            drag_active: self.drag_active,
            sliders: &self.sliders,
            downloading: self.exporter.is_exporting(),
            spinner: self.spinner,
        }
    }

    /// The card alone; this is what gets exported
    pub fn card_scene(&self) -> CardScene {
        card_scene(&self.view(), self.measurer.as_ref())
    }

    /// Theme switcher, card and actions
    pub fn page_scene(&self) -> CardScene {
        page_scene(&self.view(), self.measurer.as_ref())
    }

    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            page_dark: self.page_signal.is_dark(),
            exports: self.exports.clone(),
            ..DiagnosticsSnapshot::from_scene(&self.page_scene())
        }
    }
}

impl std::fmt::Debug for ProfileCardApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileCardApp")
            .field("profile", self.controller.profile())
            .field("drag_active", &self.drag_active)
            .field("exporter", &self.exporter)
            .field("exports_in_flight", &self.exports_in_flight)
            .field("page_dark", &self.page_signal.is_dark())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_export::{MemorySink, SoftwareRasterizer};
    use card_theme::ThemeName;

    fn app(config: &CardConfig) -> ProfileCardApp {
        ProfileCardApp::new(
            config,
            Arc::new(SoftwareRasterizer::without_text()),
            Arc::new(MemorySink::new()),
            PageSignal::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_config_theme_and_name_apply_at_start() {
        let mut config = CardConfig::default();
        config.profile.theme = ThemeName::DarkMode;
        config.profile.name = Some("Taylor Kim".to_string());

        let app = app(&config);
        assert!(app.page_signal().is_dark());
        assert_eq!(app.profile().name, "Taylor Kim");
        assert_eq!(app.card_scene().text_of("name-input"), Some("Taylor Kim"));
    }

    #[tokio::test]
    async fn test_drag_phases_toggle_highlight() {
        let mut app = app(&CardConfig::default());
        app.dispatch(CardEvent::Drag(DragPhase::Over)).await.unwrap();
        assert!(app.is_drag_active());
        app.dispatch(CardEvent::Drag(DragPhase::Leave)).await.unwrap();
        assert!(!app.is_drag_active());
    }

    #[tokio::test]
    async fn test_strength_change_animates_towards_target() {
        let mut app = app(&CardConfig::default());
        app.settle();
        app.dispatch(CardEvent::SetStrength {
            id: "strategic-thinking".to_string(),
            value: 5,
        })
        .await
        .unwrap();

        app.tick(0.016);
        let mid = app.snapshot().elements["strength-strategic-thinking-slider"].value;
        app.settle();
        let done = app.snapshot().elements["strength-strategic-thinking-slider"].value;
        assert!(mid < done, "{mid:?} vs {done:?}");
        assert_eq!(done, Some(1.0));
    }
}
