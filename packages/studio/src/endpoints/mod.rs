//! Gemini `generateContent` endpoints.
//!
//! Each endpoint knows its path, method, request body, and how to turn the
//! raw HTTP response into its typed result; `GeminiClient::hit` drives any
//! of them.

use reqwest::{Method, Url};
use serde::Deserialize;
use serde_json::Value;
use voice_studio_domain::StudioError;

pub mod classify;
pub mod synthesize;

pub(crate) type Result<T> = std::result::Result<T, StudioError>;

#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Empty,
}

#[allow(async_fn_in_trait)]
pub trait GeminiEndpoint {
    const BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    const PATH: &'static str;

    const METHOD: Method;

    type ResponseBody;

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![]
    }

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }

    async fn response_body(self, resp: reqwest::Response) -> Result<Self::ResponseBody>;

    fn url(&self) -> Result<Url> {
        let mut url = Self::BASE_URL
            .parse::<Url>()
            .map_err(|e| StudioError::Configuration(format!("invalid base URL: {e}")))?;

        let mut path = Self::PATH.to_string();
        for (placeholder, value) in self.path_params() {
            path = path.replace(placeholder, value);
        }
        url.set_path(&path);

        Ok(url)
    }
}

/// Wire shape of a `generateContent` response; only the pieces the studio
/// reads are modeled.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

impl GenerateContentResponse {
    fn into_parts(self) -> impl Iterator<Item = Part> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
    }

    /// First inline (binary) part of the first candidate, if any.
    pub(crate) fn into_inline_data(self) -> Option<InlineData> {
        self.into_parts().find_map(|p| p.inline_data)
    }

    /// First text part of the first candidate, if any.
    pub(crate) fn into_text(self) -> Option<String> {
        self.into_parts().find_map(|p| p.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    struct Probe;

    impl GeminiEndpoint for Probe {
        const PATH: &'static str = "/v1beta/models/:model:generateContent";
        const METHOD: Method = Method::POST;
        type ResponseBody = ();

        fn path_params(&self) -> Vec<(&'static str, &str)> {
            vec![(":model", "gemini-2.5-flash")]
        }

        async fn response_body(self, _resp: reqwest::Response) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn url_substitutes_path_params() {
        let url = Probe.url().expect("url");
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn response_parsing_finds_inline_data() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "audio/L16;rate=24000", "data": "AAAA" } }] }
            }]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).expect("parse");
        let inline = resp.into_inline_data().expect("inline data");
        assert_eq!(inline.mime_type, "audio/L16;rate=24000");
        assert_eq!(inline.data, "AAAA");
    }

    #[test]
    fn response_parsing_finds_text() {
        let raw = r#"{ "candidates": [{ "content": { "parts": [{ "text": "narration" }] } }] }"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).expect("parse");
        assert_eq!(resp.into_text().as_deref(), Some("narration"));
    }

    #[test]
    fn empty_response_yields_nothing() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert!(resp.into_text().is_none());
    }
}
