//! Debounced speech-type auto-detection.
//!
//! Every qualifying text edit restarts a quiet-period timer; only the
//! probe belonging to the newest edit is allowed to act, so at most one
//! classification call fires per burst of typing, with the final text.

use crate::catalog;
use crate::client::SpeechService;
use crate::selection::Selection;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Quiet period after the last qualifying edit before classification runs.
pub const DEBOUNCE: Duration = Duration::from_millis(1500);

/// Trimmed text must be longer than this to arm the detector at all.
pub const MIN_TEXT_LEN: usize = 20;

pub struct TypeDetector {
    service: Arc<dyn SpeechService>,
    selection: Arc<Mutex<Selection>>,
    /// Counter of edits; a probe only acts while it still matches.
    epoch: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TypeDetector {
    pub fn new(service: Arc<dyn SpeechService>, selection: Arc<Mutex<Selection>>) -> Self {
        Self {
            service,
            selection,
            epoch: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    /// (Re)arm the quiet-period timer for the selection's current text.
    ///
    /// Cancels any pending probe first. Must run inside a tokio runtime.
    pub fn text_changed(&self) {
        let token = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let mut pending = self.pending.lock();
        if let Some(task) = pending.take() {
            task.abort();
        }

        let text = self.selection.lock().text().to_owned();
        if text.trim().len() <= MIN_TEXT_LEN {
            return;
        }

        let service = Arc::clone(&self.service);
        let selection = Arc::clone(&self.selection);
        let epoch = Arc::clone(&self.epoch);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE).await;
            if epoch.load(Ordering::SeqCst) != token {
                return;
            }

            let detected = match service.classify(&text).await {
                Ok(id) => id,
                // Classification failures never surface; the current
                // selection simply stays.
                Err(e) => {
                    debug!(error = %e, "speech-type classification failed");
                    return;
                }
            };
            if epoch.load(Ordering::SeqCst) != token {
                return;
            }

            let Some(speech_type) = catalog::speech_type(detected.trim()) else {
                debug!(detected = %detected, "ignoring unknown speech type");
                return;
            };
            debug!(speech_type = speech_type.id.as_str(), "auto-detected speech type");
            selection.lock().set_speech_type(speech_type.id);
        }));
    }

    /// Cancel any pending probe.
    pub fn shutdown(&self) {
        if let Some(task) = self.pending.lock().take() {
            task.abort();
        }
    }
}

impl Drop for TypeDetector {
    fn drop(&mut self) {
        self.shutdown();
    }
}
