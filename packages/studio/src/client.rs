//! HTTP client for the Gemini generative language API.

use crate::catalog;
use crate::endpoints::classify::ClassifySpeechType;
use crate::endpoints::synthesize::{AudioPayload, SynthesizeSpeech};
use crate::endpoints::{GeminiEndpoint, RequestBody};
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;
use voice_studio_domain::{StudioError, VoiceId};

const GOOG_API_KEY_HEADER: &str = "x-goog-api-key";
const APPLICATION_JSON: &str = "application/json";

/// Gemini client configuration.
///
/// There are no automatic retries: a request gets one attempt bounded by
/// `request_timeout`, and a failed attempt resets the affected channel so
/// the user can re-trigger it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hard deadline for a whole request, connect included.
    pub request_timeout: Duration,
    /// TCP/TLS connect deadline.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Remote speech service seam used by the coordinator and the detector.
///
/// Production uses [`GeminiClient`]; tests substitute scripted
/// implementations.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Synthesize `text` with the given voice, returning the encoded audio
    /// payload.
    async fn synthesize(&self, text: &str, voice: VoiceId) -> Result<AudioPayload, StudioError>;

    /// Best-guess speech-style classification of `text`, returning a raw
    /// speech-type identifier.
    async fn classify(&self, text: &str) -> Result<String, StudioError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    inner: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn from_env() -> Result<Self, StudioError> {
        Self::from_env_with_config(ClientConfig::default())
    }

    /// Build a client from the environment, trying the usual API key
    /// variables in order.
    pub fn from_env_with_config(config: ClientConfig) -> Result<Self, StudioError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                StudioError::Configuration(
                    "no Gemini API key found; set GEMINI_API_KEY, GOOGLE_API_KEY, or API_KEY"
                        .into(),
                )
            })?;
        Self::new_with_config(api_key, config)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self, StudioError> {
        Self::new_with_config(api_key, ClientConfig::default())
    }

    pub fn new_with_config(
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self, StudioError> {
        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| StudioError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            inner,
            api_key: api_key.into(),
        })
    }

    pub(crate) async fn hit<T: GeminiEndpoint>(
        &self,
        endpoint: T,
    ) -> Result<T::ResponseBody, StudioError> {
        let mut builder = self
            .inner
            .request(T::METHOD, endpoint.url()?)
            .header(GOOG_API_KEY_HEADER, &self.api_key);

        if matches!(T::METHOD, Method::POST | Method::PATCH) {
            builder = match endpoint.request_body()? {
                RequestBody::Json(json) => {
                    builder.header(CONTENT_TYPE, APPLICATION_JSON).json(&json)
                }
                RequestBody::Empty => {
                    return Err(StudioError::Synthesis("request must have a body".into()));
                }
            };
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| StudioError::Synthesis(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(StudioError::Synthesis(format!("http {status}: {detail}")));
        }

        endpoint.response_body(resp).await
    }
}

#[async_trait]
impl SpeechService for GeminiClient {
    async fn synthesize(&self, text: &str, voice: VoiceId) -> Result<AudioPayload, StudioError> {
        debug!(voice = voice.as_str(), chars = text.len(), "synthesizing");
        self.hit(SynthesizeSpeech {
            text: text.to_owned(),
            voice,
        })
        .await
    }

    async fn classify(&self, text: &str) -> Result<String, StudioError> {
        debug!(chars = text.len(), "classifying speech type");
        let options = catalog::speech_type_ids().map(|id| id.as_str()).collect();
        self.hit(ClassifySpeechType::new(text, options))
            .await
            // Transport failures reach the classify caller under the kind
            // it recovers from silently.
            .map_err(|e| match e {
                StudioError::Classification(msg) => StudioError::Classification(msg),
                other => StudioError::Classification(other.to_string()),
            })
    }
}
