//! Request-lifecycle coordination for the two playback channels.
//!
//! Every start operation stops whatever is active first, so two rapid
//! user actions can never produce two audible sources. Each in-flight
//! request, audio handle, and completion watcher carries the generation
//! token of the state that spawned it; a resolution whose token no longer
//! matches is discarded without touching state.

use crate::client::SpeechService;
use crate::endpoints::synthesize::AudioPayload;
use crate::playback::{AudioOutput, Playback, PlaybackHandle};
use crate::state::{ActiveSlot, ChannelPhase, ChannelStatus};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, warn};
use voice_studio_domain::{StudioError, Voice, VoiceId};

/// User-visible failure messages. The latest one wins; it is cleared at
/// the start of the next attempt.
pub const PREVIEW_FAILED: &str = "Failed to generate voice preview. Please try again.";
pub const GENERATION_FAILED: &str =
    "Failed to generate speech. Please check your connection and try again.";

struct Inner {
    slot: ActiveSlot,
    /// Bumped whenever the slot is vacated or taken over; outstanding work
    /// tagged with an older value is obsolete.
    generation: u64,
    error: Option<&'static str>,
    handle: Option<PlaybackHandle>,
}

/// Owns the playback slot and drives both channels' request lifecycles.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct Coordinator {
    service: Arc<dyn SpeechService>,
    output: Arc<dyn AudioOutput>,
    inner: Arc<Mutex<Inner>>,
}

impl Coordinator {
    pub fn new(service: Arc<dyn SpeechService>, output: Arc<dyn AudioOutput>) -> Self {
        Self {
            service,
            output,
            inner: Arc::new(Mutex::new(Inner {
                slot: ActiveSlot::Idle,
                generation: 0,
                error: None,
                handle: None,
            })),
        }
    }

    /// Preview a voice with its sample text.
    ///
    /// Previewing the voice that is already audibly previewing toggles
    /// playback off instead of re-requesting. Any other active playback or
    /// request is preempted. The future resolves when playback has started
    /// (or failed); the preempt-and-request transition happens on its
    /// first poll, so callers may fire-and-forget via `tokio::spawn`.
    pub async fn start_preview(&self, voice: &'static Voice) {
        let token = {
            let mut inner = self.inner.lock();
            if inner.slot.preview_toggles_off(voice.id) {
                debug!(voice = voice.id.as_str(), "preview toggled off");
                Self::vacate(&mut inner);
                return;
            }
            Self::vacate(&mut inner);
            inner.slot = ActiveSlot::Preview {
                voice: voice.id,
                phase: ChannelPhase::Requesting,
            };
            inner.error = None;
            inner.generation
        };

        debug!(voice = voice.id.as_str(), "requesting preview");
        let result = self.service.synthesize(voice.preview_text, voice.id).await;
        self.settle(
            token,
            result,
            ActiveSlot::Preview {
                voice: voice.id,
                phase: ChannelPhase::Playing,
            },
            PREVIEW_FAILED,
        );
    }

    /// Synthesize and play the full text with the selected voice.
    ///
    /// A no-op when the text is empty or whitespace-only, or when no voice
    /// is selected.
    pub async fn start_main(&self, text: &str, voice: Option<VoiceId>) {
        let Some(voice) = voice else { return };
        if text.trim().is_empty() {
            return;
        }

        let token = {
            let mut inner = self.inner.lock();
            Self::vacate(&mut inner);
            inner.slot = ActiveSlot::Main {
                phase: ChannelPhase::Requesting,
            };
            inner.error = None;
            inner.generation
        };

        debug!(voice = voice.as_str(), chars = text.len(), "requesting synthesis");
        let result = self.service.synthesize(text, voice).await;
        self.settle(
            token,
            result,
            ActiveSlot::Main {
                phase: ChannelPhase::Playing,
            },
            GENERATION_FAILED,
        );
    }

    /// Stop both channels regardless of status. Idempotent.
    pub fn stop_all(&self) {
        Self::vacate(&mut self.inner.lock());
    }

    pub fn preview_status(&self, voice: VoiceId) -> ChannelStatus {
        self.inner.lock().slot.preview_status(voice)
    }

    pub fn preview_voice(&self) -> Option<VoiceId> {
        self.inner.lock().slot.preview_voice()
    }

    pub fn main_status(&self) -> ChannelStatus {
        self.inner.lock().slot.main_status()
    }

    pub fn is_idle(&self) -> bool {
        self.inner.lock().slot.is_idle()
    }

    /// The current user-visible error message, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.inner.lock().error
    }

    /// Free the slot: invalidate outstanding work, stop and detach the
    /// handle if one is active.
    fn vacate(inner: &mut Inner) {
        inner.generation = inner.generation.wrapping_add(1);
        if let Some(handle) = inner.handle.take() {
            handle.stop();
        }
        inner.slot = ActiveSlot::Idle;
    }

    /// Apply the outcome of a synthesis attempt, unless the slot has moved
    /// on since the request was issued. The token is checked before the
    /// payload is decoded, so a superseded response can never become
    /// audible; the decode runs under the lock, keeping it atomic with the
    /// transition to `Playing`.
    fn settle(
        &self,
        token: u64,
        result: Result<AudioPayload, StudioError>,
        playing: ActiveSlot,
        failure: &'static str,
    ) {
        let mut inner = self.inner.lock();
        if inner.generation != token {
            debug!("superseded synthesis response discarded");
            return;
        }
        match result.and_then(|payload| self.output.decode_and_play(payload)) {
            Ok(Playback { handle, finished }) => {
                inner.slot = playing;
                inner.handle = Some(handle);
                drop(inner);
                self.watch_completion(token, finished);
            }
            Err(e) => {
                warn!(error = %e, "synthesis attempt failed");
                inner.generation = inner.generation.wrapping_add(1);
                inner.slot = ActiveSlot::Idle;
                inner.handle = None;
                inner.error = Some(failure);
            }
        }
    }

    /// Return the slot to idle when the source drains naturally. A stopped
    /// handle closes the channel unsent, and a stale token means another
    /// request took the slot over; both cases are no-ops.
    fn watch_completion(&self, token: u64, finished: oneshot::Receiver<()>) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            if finished.await.is_err() {
                return;
            }
            let mut inner = inner.lock();
            if inner.generation != token {
                debug!("stale completion discarded");
                return;
            }
            debug!("playback finished");
            inner.generation = inner.generation.wrapping_add(1);
            inner.handle = None;
            inner.slot = ActiveSlot::Idle;
        });
    }
}
