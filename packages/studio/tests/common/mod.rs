//! Scripted speech-service and audio-output doubles for the lifecycle
//! tests.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::oneshot;
use voice_studio::{
    AudioOutput, AudioPayload, Playback, PlaybackHandle, SpeechService, StudioError, VoiceId,
};

pub fn payload() -> AudioPayload {
    AudioPayload {
        data: Bytes::from_static(&[0u8; 64]),
        mime_type: "audio/L16;rate=24000".into(),
    }
}

pub type SynthReply = Result<AudioPayload, StudioError>;

enum Scripted {
    Ready(SynthReply),
    Gated(oneshot::Receiver<SynthReply>),
}

/// Speech service with a scripted queue of synthesis outcomes. A gated
/// entry parks the call until the test releases it, which is how the
/// preemption scenarios hold a request in flight.
#[derive(Default)]
pub struct MockService {
    script: Mutex<VecDeque<Scripted>>,
    synth_calls: AtomicUsize,
    classify_reply: Mutex<Option<Result<String, StudioError>>>,
    classify_calls: AtomicUsize,
    classified_texts: Mutex<Vec<String>>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ready(&self, reply: SynthReply) {
        self.script.lock().push_back(Scripted::Ready(reply));
    }

    /// Queue a synthesis call that blocks until the returned sender fires.
    pub fn push_gated(&self) -> oneshot::Sender<SynthReply> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn set_classification(&self, reply: Result<String, StudioError>) {
        *self.classify_reply.lock() = Some(reply);
    }

    pub fn synth_count(&self) -> usize {
        self.synth_calls.load(Ordering::SeqCst)
    }

    pub fn classify_count(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }

    pub fn classified_texts(&self) -> Vec<String> {
        self.classified_texts.lock().clone()
    }
}

#[async_trait]
impl SpeechService for MockService {
    async fn synthesize(&self, _text: &str, _voice: VoiceId) -> SynthReply {
        self.synth_calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .pop_front()
            .expect("unexpected synthesize call");
        match next {
            Scripted::Ready(reply) => reply,
            Scripted::Gated(gate) => gate.await.expect("gate dropped unreleased"),
        }
    }

    async fn classify(&self, text: &str) -> Result<String, StudioError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        self.classified_texts.lock().push(text.to_owned());
        self.classify_reply
            .lock()
            .clone()
            .unwrap_or_else(|| Err(StudioError::Classification("unscripted".into())))
    }
}

/// One playback started through [`MockOutput`].
pub struct PlaySession {
    stopped: Arc<AtomicBool>,
    finish: Mutex<Option<oneshot::Sender<()>>>,
}

impl PlaySession {
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Whether the session is currently audible: started, not stopped,
    /// not yet drained.
    pub fn is_audible(&self) -> bool {
        !self.is_stopped() && self.finish.lock().is_some()
    }

    /// Let the source drain naturally. Like the real engine, the
    /// completion notification is suppressed if the handle was stopped
    /// first.
    pub fn finish(&self) {
        if self.is_stopped() {
            self.finish.lock().take();
            return;
        }
        if let Some(tx) = self.finish.lock().take() {
            let _ = tx.send(());
        }
    }
}

/// Audio output that records sessions instead of touching a device.
#[derive(Default)]
pub struct MockOutput {
    sessions: Mutex<Vec<Arc<PlaySession>>>,
    fail_next: AtomicBool,
}

impl MockOutput {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make the next decode attempt fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn play_count(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn session(&self, index: usize) -> Arc<PlaySession> {
        Arc::clone(&self.sessions.lock()[index])
    }

    pub fn audible_count(&self) -> usize {
        self.sessions.lock().iter().filter(|s| s.is_audible()).count()
    }
}

impl AudioOutput for MockOutput {
    fn decode_and_play(&self, _payload: AudioPayload) -> Result<Playback, StudioError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StudioError::Decode("scripted decode failure".into()));
        }
        let stopped = Arc::new(AtomicBool::new(false));
        let (tx, rx) = oneshot::channel();
        let session = Arc::new(PlaySession {
            stopped: Arc::clone(&stopped),
            finish: Mutex::new(Some(tx)),
        });
        self.sessions.lock().push(session);
        Ok(Playback {
            handle: PlaybackHandle::new(stopped, || {}),
            finished: rx,
        })
    }
}

/// Give spawned tasks a chance to run to their next suspension point.
pub async fn drain() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
