use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mofcapture::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Terminal rendering for the rank command's two display phases.
///
/// The workflow first announces named stages (loading the table, simulating
/// the top candidate) and then a sized row-scoring batch. Each phase owns a
/// fresh [`ProgressBar`]: stages render as a spinner, the batch as a counted
/// bar. Finishing a phase clears its bar from the terminal; a batch that
/// ends short of its length is left visible as abandoned.
#[derive(Clone)]
pub struct CliProgressHandler {
    active: Arc<Mutex<Option<ProgressBar>>>,
    hidden: bool,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self {
            active: Arc::new(Mutex::new(None)),
            hidden: false,
        }
    }

    /// Handler that draws nowhere. Used by tests to drive the state machine
    /// without touching the terminal.
    #[cfg(test)]
    fn hidden() -> Self {
        Self {
            active: Arc::new(Mutex::new(None)),
            hidden: true,
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let handler = self.clone();

        Box::new(move |progress: Progress| {
            let Ok(mut active) = handler.active.lock() else {
                warn!("Progress state mutex was poisoned; dropping progress event.");
                return;
            };

            match progress {
                Progress::StageStart { name } => {
                    Self::clear(active.take());
                    let spinner = ProgressBar::with_draw_target(None, handler.draw_target())
                        .with_style(Self::stage_style())
                        .with_message(name.to_string());
                    spinner.enable_steady_tick(SPINNER_TICK);
                    *active = Some(spinner);
                }
                Progress::StageFinish => {
                    Self::clear(active.take());
                }
                Progress::RowsStart { total } => {
                    Self::clear(active.take());
                    let bar = ProgressBar::with_draw_target(Some(total), handler.draw_target())
                        .with_style(Self::batch_style());
                    *active = Some(bar);
                }
                Progress::RowScored => {
                    if let Some(bar) = active.as_ref() {
                        bar.inc(1);
                    }
                }
                Progress::RowsFinish => {
                    if let Some(bar) = active.take() {
                        if bar.position() < bar.length().unwrap_or(0) {
                            bar.abandon_with_message("scoring stopped early");
                        } else {
                            bar.finish_and_clear();
                        }
                    }
                }
                Progress::Message(msg) => match active.as_ref() {
                    Some(bar) => bar.println(msg),
                    None => info!("{msg}"),
                },
            }
        })
    }

    fn draw_target(&self) -> ProgressDrawTarget {
        if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        }
    }

    fn clear(bar: Option<ProgressBar>) {
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create stage style template")
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::with_template("Scoring [{bar:40.cyan/blue}] {pos}/{len} materials {msg}")
            .expect("Failed to create batch style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
