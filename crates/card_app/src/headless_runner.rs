//! Scenario runner that drives a [`ProfileCardApp`] without a window.

use anyhow::Result;
use card_cn::CardEvent;
use card_core::{DragPhase, DropPayload};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::headless_assert::{
    evaluate_assert_active, evaluate_assert_exists, evaluate_assert_exported,
    evaluate_assert_page_dark, evaluate_assert_text_contains, evaluate_assert_value,
    AssertionResult, DiagnosticsSnapshot,
};
use crate::headless_report::{HeadlessReport, ReportFailure};
use crate::headless_runtime::{HeadlessFrame, HeadlessRunConfig, HeadlessRuntime};
use crate::headless_scenario::{HeadlessScenario, ScenarioStep};
use crate::shell::ProfileCardApp;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: HeadlessReport },
    Failed { report: HeadlessReport },
}

impl RunOutcome {
    pub fn report(&self) -> &HeadlessReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Clock and the most recent probe of a run
struct RunState {
    elapsed_frames: u64,
    elapsed_ms: u64,
    latest: Option<DiagnosticsSnapshot>,
}

impl RunState {
    fn fail(&self, app: &ProfileCardApp, failure: ReportFailure) -> RunOutcome {
        RunOutcome::Failed {
            report: HeadlessReport::failed(
                failure,
                self.elapsed_frames,
                self.elapsed_ms,
                app.exports().to_vec(),
            ),
        }
    }

    fn snapshot(&mut self, app: &ProfileCardApp) -> &DiagnosticsSnapshot {
        self.latest.get_or_insert_with(|| app.snapshot())
    }

    /// Advance the app by one frame, probing when the runtime asks for it
    fn advance(&mut self, app: &mut ProfileCardApp, frame: HeadlessFrame) {
        app.tick(frame.dt());
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        self.elapsed_ms = self.elapsed_ms.saturating_add(frame.dt_ms);
        if frame.sample {
            self.latest = Some(app.snapshot());
        }
    }

    fn wait(&mut self, runtime: &HeadlessRuntime, app: &mut ProfileCardApp, ms: u64) {
        if runtime.run_for(ms, |frame| self.advance(app, frame)) == 0 {
            self.latest = Some(app.snapshot());
        }
    }

    fn tick(&mut self, runtime: &HeadlessRuntime, app: &mut ProfileCardApp, frames: u32) {
        if frames == 0 {
            self.latest = Some(app.snapshot());
        }
        runtime.run_frames(frames, |frame| self.advance(app, frame));
    }
}

/// Execute a loaded scenario against `app`.
///
/// Event steps go through [`ProfileCardApp::dispatch`] the same way host
/// input would. A failed assertion, an unknown element, or a failed avatar
/// read ends the run with a failed report; a failed download does not,
/// since the app itself recovers from it.
///
/// Downloads run in the background. Ticks pick up exports that are already
/// done; a `wait` step lets every running export finish before it returns,
/// and so does the end of the run.
pub async fn run_scenario(
    app: &mut ProfileCardApp,
    scenario: &HeadlessScenario,
    cfg: HeadlessRunConfig,
) -> Result<RunOutcome> {
    let runtime = HeadlessRuntime::new(cfg)?;
    let mut state = RunState {
        elapsed_frames: 0,
        elapsed_ms: 0,
        latest: None,
    };

    for (step_index, step) in scenario.steps.iter().enumerate() {
        let failure = |code: &str, message: String| ReportFailure {
            step_index,
            step: step.name().to_string(),
            code: code.to_string(),
            message,
        };

        if step.is_assertion() {
            let snapshot = state.snapshot(app);
            if let AssertionResult::Failed { code, message } = evaluate(step, snapshot) {
                return Ok(state.fail(app, failure(&code, message)));
            }
            continue;
        }

        let event = match step {
            ScenarioStep::Wait { ms } => {
                state.wait(&runtime, app, *ms);
                if !app.finish_exports().await.is_empty() {
                    state.latest = None;
                }
                continue;
            }
            ScenarioStep::Tick { frames } => {
                state.tick(&runtime, app, *frames);
                continue;
            }
            ScenarioStep::Settle => {
                app.settle();
                state.latest = None;
                continue;
            }
            ScenarioStep::Randomize { seed: Some(seed) } => {
                app.randomize_with(&mut StdRng::seed_from_u64(*seed));
                state.latest = None;
                continue;
            }
            ScenarioStep::Edit { id, text } => match CardEvent::edit(id, text.clone()) {
                Some(event) => event,
                None => {
                    let message = format!("{id}: not an editable field");
                    return Ok(state.fail(app, failure("not_editable", message)));
                }
            },
            ScenarioStep::Click { id } => {
                let scene = app.page_scene();
                let Some(element) = scene.element(id) else {
                    let message = format!("{id}: element not found");
                    return Ok(state.fail(app, failure("missing_element", message)));
                };
                match CardEvent::from_click(&scene, element.rect.center()) {
                    Some(event) => event,
                    None => {
                        tracing::debug!(id = %id, "click produced no event");
                        state.latest = None;
                        continue;
                    }
                }
            }
            ScenarioStep::SelectTheme { theme } => CardEvent::SelectTheme(*theme),
            ScenarioStep::SetStrength { id, value } => CardEvent::SetStrength {
                id: id.clone(),
                value: *value,
            },
            ScenarioStep::DragOver => CardEvent::Drag(DragPhase::Over),
            ScenarioStep::DragLeave => CardEvent::Drag(DragPhase::Leave),
            ScenarioStep::DropFiles { files } => {
                let handles = files.iter().map(|f| f.handle()).collect();
                CardEvent::FilesDropped(DropPayload::new(handles))
            }
            ScenarioStep::PickFile { file } => CardEvent::FilePicked(file.handle()),
            ScenarioStep::Randomize { seed: None } => CardEvent::Randomize,
            ScenarioStep::Download => CardEvent::Download,
            _ => continue,
        };

        state.latest = None;
        if let Err(err) = app.dispatch(event).await {
            return Ok(state.fail(app, failure("dispatch_error", err.to_string())));
        }
    }

    for outcome in app.finish_exports().await {
        if !outcome.is_delivered() {
            tracing::warn!(?outcome, "scenario download failed");
        }
    }

    Ok(RunOutcome::Passed {
        report: HeadlessReport::passed(
            state.elapsed_frames,
            state.elapsed_ms,
            app.exports().to_vec(),
        ),
    })
}

fn evaluate(step: &ScenarioStep, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    match step {
        ScenarioStep::AssertExists { id } => evaluate_assert_exists(id, snapshot),
        ScenarioStep::AssertTextContains { id, value } => {
            evaluate_assert_text_contains(id, value, snapshot)
        }
        ScenarioStep::AssertActive { id, active } => evaluate_assert_active(id, *active, snapshot),
        ScenarioStep::AssertValue {
            id,
            value,
            tolerance,
        } => evaluate_assert_value(id, *value, *tolerance, snapshot),
        ScenarioStep::AssertPageDark { dark } => evaluate_assert_page_dark(*dark, snapshot),
        ScenarioStep::AssertExported { filename } => evaluate_assert_exported(filename, snapshot),
        _ => AssertionResult::Passed,
    }
}
