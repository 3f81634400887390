//! Profile Card Export
//!
//! Turns the card scene into a downloadable PNG:
//!
//! - **filename**: `<name>-character-sheet.png` naming
//! - **raster**: the [`Rasterizer`] seam and the CPU [`SoftwareRasterizer`]
//! - **sink**: where finished downloads go ([`DirectorySink`], [`MemorySink`])
//! - **exporter**: [`CardExporter`], which drives one export and owns the
//!   shared [`DownloadFlag`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use card_export::{CardExporter, DirectorySink, SoftwareRasterizer};
//!
//! # async fn run(scene: card_cn::CardScene) {
//! let exporter = CardExporter::new(
//!     Arc::new(SoftwareRasterizer::new()),
//!     Arc::new(DirectorySink::new("exports")),
//! );
//! let outcome = exporter.export(scene, "Aria Montgomery").await;
//! println!("{}", outcome.filename());
//! # }
//! ```

mod error;
pub mod exporter;
pub mod filename;
pub mod framebuffer;
pub mod raster;
pub mod sink;

pub use error::{ExportError, Result};
pub use exporter::{CardExporter, DownloadFlag, ExportOutcome};
pub use filename::export_filename;
pub use framebuffer::Framebuffer;
pub use raster::{encode_png, RasterOptions, Rasterizer, SoftwareRasterizer};
pub use sink::{DirectorySink, Download, DownloadSink, MemorySink};
