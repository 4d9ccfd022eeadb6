use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::RequestType;
use crate::config::Config;
use crate::error::NarrativeError;
use crate::output::OutputHandler;

// Request body for generateContent. The service accepts snake_case field
// names except for the two sampling knobs, which it only knows in camelCase.
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
}

// Response body. A safety-blocked candidate arrives without content, which
// deserializes to zero parts and ends up on the empty-text path.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, NarrativeError> {
        if config.ai.api_key.is_empty() {
            return Err(NarrativeError::MissingCredential);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.ai.timeout_secs))
            .user_agent("mag-narrative/0.1")
            .build()?;

        Ok(Self {
            client,
            api_url: config.ai.api_url.clone(),
            api_key: config.ai.api_key.clone(),
            model: config.ai.model.clone(),
        })
    }

    /// One generation attempt: look up the prompt spec, post it, return the
    /// concatenated candidate text trimmed of surrounding whitespace. An
    /// empty result is legal here; emptiness is the validator's call.
    pub async fn generate(&self, request_type: RequestType) -> Result<String, NarrativeError> {
        let spec = request_type.prompt_spec();

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: spec.template,
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: spec.max_output_tokens,
                temperature: spec.temperature,
                top_p: 1.0,
                top_k: 1,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        log::debug!(
            "requesting {} text from {} (max {} tokens)",
            request_type,
            self.model,
            spec.max_output_tokens
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NarrativeError::Service(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| NarrativeError::Service("no candidates returned".to_string()))?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text.trim().to_string())
    }
}

/// Single-attempt dispatch. Resolves the credential, makes the one service
/// call, and on failure writes the diagnostic itself instead of leaving it
/// to the caller; the returned error only steers the fallback decision.
pub async fn dispatch(
    config: &Config,
    request_type: RequestType,
    output: &mut OutputHandler,
) -> Result<String, NarrativeError> {
    match try_generate(config, request_type).await {
        Ok(text) => {
            log::debug!("{} generated {} bytes", request_type, text.len());
            Ok(text)
        }
        Err(err) => {
            if !err.is_silent() {
                let _ = output.print_error(&err.to_string());
            }
            log::error!("{} dispatch failed: {}", request_type, err);
            Err(err)
        }
    }
}

async fn try_generate(
    config: &Config,
    request_type: RequestType,
) -> Result<String, NarrativeError> {
    let client = ApiClient::new(config)?;
    client.generate(request_type).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_body_matches_the_service_shape() {
        let spec = RequestType::Damage.prompt_spec();
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: spec.template,
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: spec.max_output_tokens,
                temperature: spec.temperature,
                top_p: 1.0,
                top_k: 1,
            },
        };

        // Damage uses 0.5, which survives the f32-to-f64 hop exactly.
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": spec.template }],
                }],
                "generation_config": {
                    "max_output_tokens": 10,
                    "temperature": 0.5,
                    "topP": 1.0,
                    "topK": 1,
                },
            })
        );
    }

    #[test]
    fn test_response_parts_concatenate() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "GRONKARR: " }, { "text": "WARP!" }] }
            }]
        }))
        .unwrap();

        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        assert_eq!(text, "GRONKARR: WARP!");
    }

    #[test]
    fn test_blocked_responses_deserialize_to_nothing() {
        let no_candidates: GenerateContentResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert!(no_candidates.candidates.is_empty());

        let bare_candidate: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert!(bare_candidate.candidates[0].content.parts.is_empty());
    }

    #[test]
    fn test_missing_key_is_rejected_before_any_network_use() {
        let mut config = Config::default();
        config.ai.api_key = String::new();
        assert_matches!(
            ApiClient::new(&config),
            Err(NarrativeError::MissingCredential)
        );
    }
}
