//! Audio decode and playback on top of rodio.
//!
//! The coordinator only sees the [`AudioOutput`] seam: decode a payload,
//! get back a stoppable handle plus a one-shot completion notification.
//! [`RodioOutput`] is the production implementation.

use crate::endpoints::synthesize::AudioPayload;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use tokio::sync::oneshot;
use tracing::debug;
use voice_studio_domain::StudioError;

/// Decodes an encoded audio payload into an audible source.
pub trait AudioOutput: Send + Sync {
    fn decode_and_play(&self, payload: AudioPayload) -> Result<Playback, StudioError>;
}

/// An active audio source: the handle that owns it plus its completion
/// notification.
pub struct Playback {
    pub handle: PlaybackHandle,
    /// Resolves once when the source drains naturally. Stopping the handle
    /// first drops the sender unsent, so the receiver sees a closed
    /// channel instead of a stale completion.
    pub finished: oneshot::Receiver<()>,
}

/// Opaque handle to an active audio source, owned exclusively by the
/// channel that created it.
pub struct PlaybackHandle {
    stopped: Arc<AtomicBool>,
    stop: Box<dyn Fn() + Send + Sync>,
}

impl PlaybackHandle {
    /// Wrap a stop action. The flag handed to `stop` observers is managed
    /// here: the action runs at most once.
    pub fn new(stopped: Arc<AtomicBool>, stop: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            stopped,
            stop: Box::new(stop),
        }
    }

    /// Stop the source and release its resources. Idempotent.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            (self.stop)();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for PlaybackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackHandle")
            .field("stopped", &self.is_stopped())
            .finish()
    }
}

enum AudioCommand {
    Play {
        payload: AudioPayload,
        reply: mpsc::Sender<Result<Playback, StudioError>>,
    },
}

/// Playback through the system's default output device.
///
/// The device stream cannot move between threads, so a dedicated audio
/// thread owns it and services decode-and-play commands over a channel;
/// sinks and handles are free to travel.
pub struct RodioOutput {
    commands: mpsc::Sender<AudioCommand>,
}

impl RodioOutput {
    pub fn open_default() -> Result<Self, StudioError> {
        let (commands, rx) = mpsc::channel::<AudioCommand>();
        let (ready_tx, ready_rx) = mpsc::channel();

        thread::Builder::new()
            .name("studio-audio".into())
            .spawn(move || {
                let stream = match rodio::OutputStreamBuilder::open_default_stream() {
                    Ok(stream) => {
                        let _ = ready_tx.send(Ok(()));
                        stream
                    }
                    Err(e) => {
                        let _ = ready_tx
                            .send(Err(StudioError::Playback(format!("no output device: {e}"))));
                        return;
                    }
                };
                while let Ok(AudioCommand::Play { payload, reply }) = rx.recv() {
                    let _ = reply.send(start_playback(&stream, payload));
                }
                // Channel closed: drop the stream and let the thread end.
                drop(stream);
            })
            .map_err(|e| StudioError::Playback(format!("failed to spawn audio thread: {e}")))?;

        ready_rx
            .recv()
            .map_err(|_| StudioError::Playback("audio thread exited during startup".into()))??;
        Ok(Self { commands })
    }
}

impl AudioOutput for RodioOutput {
    fn decode_and_play(&self, payload: AudioPayload) -> Result<Playback, StudioError> {
        let (reply, reply_rx) = mpsc::channel();
        self.commands
            .send(AudioCommand::Play { payload, reply })
            .map_err(|_| StudioError::Playback("audio thread is gone".into()))?;
        reply_rx
            .recv()
            .map_err(|_| StudioError::Playback("audio thread is gone".into()))?
    }
}

fn start_playback(
    stream: &rodio::OutputStream,
    payload: AudioPayload,
) -> Result<Playback, StudioError> {
    let sink = Arc::new(rodio::Sink::connect_new(stream.mixer()));
    append_decoded(&sink, payload)?;

    let stopped = Arc::new(AtomicBool::new(false));
    let (done_tx, done_rx) = oneshot::channel();
    {
        let sink = Arc::clone(&sink);
        let stopped = Arc::clone(&stopped);
        thread::spawn(move || {
            sink.sleep_until_end();
            if !stopped.load(Ordering::SeqCst) {
                let _ = done_tx.send(());
            }
        });
    }

    let handle = PlaybackHandle::new(stopped, move || sink.stop());
    Ok(Playback {
        handle,
        finished: done_rx,
    })
}

fn append_decoded(sink: &rodio::Sink, payload: AudioPayload) -> Result<(), StudioError> {
    let AudioPayload { data, mime_type } = payload;
    if data.is_empty() {
        return Err(StudioError::Decode("empty audio payload".into()));
    }

    if looks_like_container(&data) {
        let source = rodio::Decoder::new(Cursor::new(data))
            .map_err(|e| StudioError::Decode(format!("undecodable audio: {e}")))?;
        sink.append(source);
        return Ok(());
    }

    // The Gemini TTS endpoint returns raw signed 16-bit little-endian PCM
    // (audio/L16), mono.
    let sample_rate = pcm_sample_rate(&mime_type);
    debug!(sample_rate, bytes = data.len(), "playing raw PCM payload");
    let samples: Vec<f32> = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect();
    if samples.is_empty() {
        return Err(StudioError::Decode("truncated PCM payload".into()));
    }
    sink.append(rodio::buffer::SamplesBuffer::new(1, sample_rate, samples));
    Ok(())
}

const CONTAINER_MAGICS: [&[u8]; 4] = [b"RIFF", b"ID3", b"OggS", b"fLaC"];

fn looks_like_container(data: &[u8]) -> bool {
    CONTAINER_MAGICS.iter().any(|magic| data.starts_with(magic))
}

/// Sample rate declared in an `audio/L16;...;rate=NNNNN` MIME type,
/// falling back to the endpoint's 24 kHz default.
fn pcm_sample_rate(mime_type: &str) -> u32 {
    mime_type
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("rate="))
        .find_map(|rate| rate.parse().ok())
        .unwrap_or(24_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rate_parsed_from_mime_type() {
        assert_eq!(pcm_sample_rate("audio/L16;codec=pcm;rate=24000"), 24_000);
        assert_eq!(pcm_sample_rate("audio/L16; rate=16000"), 16_000);
        assert_eq!(pcm_sample_rate("audio/L16"), 24_000);
        assert_eq!(pcm_sample_rate("audio/L16;rate=abc"), 24_000);
    }

    #[test]
    fn container_sniffing_matches_known_magics() {
        assert!(looks_like_container(b"RIFF\x24\x08\x00\x00WAVE"));
        assert!(looks_like_container(b"ID3\x03\x00rest"));
        assert!(looks_like_container(b"OggS..."));
        assert!(!looks_like_container(&[0x00, 0x01, 0x02, 0x03]));
    }

    #[test]
    fn handle_stop_is_idempotent() {
        use std::sync::atomic::AtomicUsize;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handle = PlaybackHandle::new(Arc::new(AtomicBool::new(false)), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!handle.is_stopped());
        handle.stop();
        handle.stop();
        assert!(handle.is_stopped());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
