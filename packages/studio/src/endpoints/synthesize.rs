//! Text-to-speech synthesis endpoint.

use super::{GeminiEndpoint, GenerateContentResponse, RequestBody, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use reqwest::Method;
use serde_json::json;
use voice_studio_domain::{StudioError, VoiceId};

/// Model used for speech synthesis.
pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Decoded audio returned by the synthesis endpoint, ready for playback.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub data: Bytes,
    /// Declared MIME type, e.g. `audio/L16;codec=pcm;rate=24000`.
    pub mime_type: String,
}

/// `generateContent` request asking for the AUDIO response modality with a
/// prebuilt voice.
#[derive(Debug)]
pub struct SynthesizeSpeech {
    pub text: String,
    pub voice: VoiceId,
}

impl GeminiEndpoint for SynthesizeSpeech {
    const PATH: &'static str = "/v1beta/models/:model:generateContent";
    const METHOD: Method = Method::POST;
    type ResponseBody = AudioPayload;

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![(":model", TTS_MODEL)]
    }

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(json!({
            "contents": [{ "parts": [{ "text": self.text }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": self.voice.as_str() }
                    }
                }
            }
        })))
    }

    async fn response_body(self, resp: reqwest::Response) -> Result<AudioPayload> {
        let body: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| StudioError::Synthesis(format!("malformed response: {e}")))?;
        let inline = body
            .into_inline_data()
            .ok_or_else(|| StudioError::Synthesis("no audio data returned".into()))?;
        let data = BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| StudioError::Synthesis(format!("invalid base64 audio: {e}")))?;
        if data.is_empty() {
            return Err(StudioError::Synthesis("empty audio payload".into()));
        }
        Ok(AudioPayload {
            data: Bytes::from(data),
            mime_type: inline.mime_type,
        })
    }
}
