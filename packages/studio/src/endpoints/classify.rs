//! Speech-style classification endpoint.

use super::{GeminiEndpoint, GenerateContentResponse, RequestBody, Result};
use reqwest::Method;
use serde_json::json;
use voice_studio_domain::StudioError;

/// Model used for speech-style classification.
pub const CLASSIFY_MODEL: &str = "gemini-2.5-flash";

/// `generateContent` request asking the model to pick one speech-style
/// identifier out of the catalog's options.
#[derive(Debug)]
pub struct ClassifySpeechType {
    pub text: String,
    pub options: Vec<&'static str>,
}

impl ClassifySpeechType {
    pub fn new(text: impl Into<String>, options: Vec<&'static str>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    fn prompt(&self) -> String {
        let options = self.options.join(", ");
        format!(
            "Analyze the following text and classify its most likely speech type. \
             Choose only from these options: {options}. Return only the single ID \
             for the chosen type, for example: 'narration'.\n\nText: \"{}\"",
            self.text
        )
    }
}

impl GeminiEndpoint for ClassifySpeechType {
    const PATH: &'static str = "/v1beta/models/:model:generateContent";
    const METHOD: Method = Method::POST;
    type ResponseBody = String;

    fn path_params(&self) -> Vec<(&'static str, &str)> {
        vec![(":model", CLASSIFY_MODEL)]
    }

    fn request_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(json!({
            "contents": [{ "parts": [{ "text": self.prompt() }] }]
        })))
    }

    async fn response_body(self, resp: reqwest::Response) -> Result<String> {
        let body: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| StudioError::Classification(format!("malformed response: {e}")))?;
        let text = body
            .into_text()
            .ok_or_else(|| StudioError::Classification("no text returned".into()))?;
        Ok(text.trim().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_options_and_text() {
        let endpoint =
            ClassifySpeechType::new("Breaking news tonight.", vec!["narration", "news"]);
        let prompt = endpoint.prompt();
        assert!(prompt.contains("narration, news"));
        assert!(prompt.contains("Breaking news tonight."));
    }
}
