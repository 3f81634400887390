//! Export driver
//!
//! Sets the shared download flag, rasterizes on a blocking task, hands the
//! PNG to the sink, and clears the flag again on every path. Failures are
//! logged and reported as [`ExportOutcome::Failed`]; they never propagate.
//!
//! [`CardExporter::export`] awaits the whole export. [`CardExporter::spawn`]
//! raises the flag and returns at once, so a view can show the in-progress
//! state while the export runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use card_cn::CardScene;
use tokio::sync::mpsc::UnboundedSender;

use crate::filename::export_filename;
use crate::raster::{RasterOptions, Rasterizer};
use crate::sink::{Download, DownloadSink};
use crate::Result;

/// "An export is in progress", shared between the exporter and the view
#[derive(Clone, Debug, Default)]
pub struct DownloadFlag(Arc<AtomicBool>);

impl DownloadFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }

    /// Set the flag until the guard drops
    fn raise(&self) -> FlagGuard {
        self.set(true);
        FlagGuard(self.clone())
    }
}

struct FlagGuard(DownloadFlag);

impl Drop for FlagGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// How an export ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered {
        filename: String,
        location: String,
        bytes: usize,
    },
    Failed {
        filename: String,
        reason: String,
    },
}

impl ExportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ExportOutcome::Delivered { .. })
    }

    pub fn filename(&self) -> &str {
        match self {
            ExportOutcome::Delivered { filename, .. } | ExportOutcome::Failed { filename, .. } => {
                filename
            }
        }
    }
}

/// Renders card scenes to PNG downloads
pub struct CardExporter {
    rasterizer: Arc<dyn Rasterizer>,
    sink: Arc<dyn DownloadSink>,
    options: RasterOptions,
    flag: DownloadFlag,
}

impl CardExporter {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            rasterizer,
            sink,
            options: RasterOptions::default(),
            flag: DownloadFlag::new(),
        }
    }

    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    /// Handle to the in-progress flag
    pub fn flag(&self) -> DownloadFlag {
        self.flag.clone()
    }

    pub fn is_exporting(&self) -> bool {
        self.flag.is_set()
    }

    /// Render `scene` and deliver it as `<name>-character-sheet.png`
    pub async fn export(&self, scene: CardScene, name: &str) -> ExportOutcome {
        let filename = export_filename(name);
        let _guard = self.flag.raise();
        tracing::debug!(%filename, "export started");

        match self.run(scene, filename.clone()).await {
            Ok((location, bytes)) => {
                tracing::info!(%filename, %location, bytes, "exported card");
                ExportOutcome::Delivered {
                    filename,
                    location,
                    bytes,
                }
            }
            Err(err) => {
                tracing::error!(%filename, error = %err, "error generating image");
                ExportOutcome::Failed {
                    filename,
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Start exporting `scene` on the runtime. The flag is raised before this
    /// returns and cleared before the outcome is sent on `done`.
    pub fn spawn(
        self: &Arc<Self>,
        scene: CardScene,
        name: &str,
        done: UnboundedSender<ExportOutcome>,
    ) -> tokio::task::JoinHandle<()> {
        let guard = self.flag.raise();
        let exporter = Arc::clone(self);
        let name = name.to_string();
        tokio::spawn(async move {
            let outcome = exporter.export(scene, &name).await;
            drop(guard);
            if done.send(outcome).is_err() {
                tracing::debug!("export finished after its receiver closed");
            }
        })
    }

    async fn run(&self, scene: CardScene, filename: String) -> Result<(String, usize)> {
        let rasterizer = Arc::clone(&self.rasterizer);
        let sink = Arc::clone(&self.sink);
        let options = self.options;
        tokio::task::spawn_blocking(move || {
            let bytes = rasterizer.render(&scene, &options)?;
            let download = Download { filename, bytes };
            let location = sink.deliver(&download)?;
            Ok((location, download.bytes.len()))
        })
        .await?
    }
}

impl std::fmt::Debug for CardExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardExporter")
            .field("options", &self.options)
            .field("exporting", &self.flag.is_set())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::ExportError;

    struct Canned;

    impl Rasterizer for Canned {
        fn render(&self, _: &CardScene, _: &RasterOptions) -> Result<Vec<u8>> {
            Ok(vec![0x89, b'P', b'N', b'G'])
        }
    }

    fn scene() -> CardScene {
        CardScene {
            width: 10.0,
            height: 10.0,
            background: None,
            commands: Vec::new(),
            elements: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_export_delivers_named_download() {
        let sink = Arc::new(MemorySink::new());
        let exporter = CardExporter::new(Arc::new(Canned), sink.clone());

        let outcome = exporter.export(scene(), "Alex Rivera").await;
        assert!(outcome.is_delivered());
        assert_eq!(outcome.filename(), "alex-rivera-character-sheet.png");
        assert_eq!(sink.downloads()[0].bytes, vec![0x89, b'P', b'N', b'G']);
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_flag_is_set_while_rendering() {
        struct Observing(DownloadFlag);
        impl Rasterizer for Observing {
            fn render(&self, _: &CardScene, _: &RasterOptions) -> Result<Vec<u8>> {
                if self.0.is_set() {
                    Ok(Vec::new())
                } else {
                    Err(ExportError::Render("flag not raised".to_string()))
                }
            }
        }

        let shared_flag = DownloadFlag::new();
        let sink = Arc::new(MemorySink::new());
        let mut exporter = CardExporter::new(Arc::new(Observing(shared_flag.clone())), sink);
        exporter.flag = shared_flag;

        assert!(exporter.export(scene(), "x").await.is_delivered());
        assert!(!exporter.is_exporting());
    }

    #[tokio::test]
    async fn test_spawned_export_holds_flag_until_done() {
        struct Gated(std::sync::Mutex<std::sync::mpsc::Receiver<()>>);
        impl Rasterizer for Gated {
            fn render(&self, _: &CardScene, _: &RasterOptions) -> Result<Vec<u8>> {
                let gate = self.0.lock().map_err(|e| ExportError::Render(e.to_string()))?;
                gate.recv().map_err(|e| ExportError::Render(e.to_string()))?;
                Ok(vec![1, 2, 3])
            }
        }

        let (release, gate) = std::sync::mpsc::channel();
        let sink = Arc::new(MemorySink::new());
        let exporter = Arc::new(CardExporter::new(
            Arc::new(Gated(std::sync::Mutex::new(gate))),
            sink.clone(),
        ));
        let (done, mut outcomes) = tokio::sync::mpsc::unbounded_channel();

        let task = exporter.spawn(scene(), "Sam Lee", done);
        assert!(exporter.is_exporting());
        assert!(sink.is_empty());

        release.send(()).unwrap();
        let outcome = outcomes.recv().await.unwrap();
        assert_eq!(outcome.filename(), "sam-lee-character-sheet.png");
        assert!(outcome.is_delivered());
        assert!(!exporter.is_exporting());
        task.await.unwrap();
    }
}
