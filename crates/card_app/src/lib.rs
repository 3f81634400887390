//! Profile Card Application
//!
//! The root shell that ties the card together: profile state, avatar
//! intake, slider animation and PNG export behind one event entry point.
//! Also hosts the headless scenario runner used by the `profile-card`
//! binary and the integration tests.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use card_app::{CardConfig, PageSignal, ProfileCardApp};
//! use card_cn::CardEvent;
//! use card_export::{DirectorySink, SoftwareRasterizer};
//!
//! let mut app = ProfileCardApp::new(
//!     &CardConfig::default(),
//!     Arc::new(SoftwareRasterizer::new()),
//!     Arc::new(DirectorySink::new("exports")),
//!     PageSignal::new(),
//! )?;
//! app.dispatch(CardEvent::SetName("Jordan Chen".into())).await?;
//! app.dispatch(CardEvent::Download).await?;
//! ```

pub mod config;
pub mod headless_assert;
pub mod headless_report;
pub mod headless_runner;
pub mod headless_runtime;
pub mod headless_scenario;
pub mod shell;

pub use config::CardConfig;
pub use headless_report::{HeadlessReport, ReportStatus};
pub use headless_runner::{run_scenario, RunOutcome};
pub use headless_runtime::HeadlessRunConfig;
pub use headless_scenario::HeadlessScenario;
pub use shell::{
    Dispatched, FilePicker, IntakeError, IntakeOutcome, PageSignal, ProfileCardApp,
};
