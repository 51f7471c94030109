use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{CompletionConfig, entities::app_errors::CoreError},
    suggestion::{
        entities::{AudioClip, CompletionRequest},
        ports::CompletionClient,
    },
};

const TRANSCRIPTION_LANGUAGE: &str = "pt";

#[derive(Debug, Clone)]
pub struct OpenAiCompletionClient {
    api_key: String,
    base_url: String,
    model: String,
    transcription_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiCompletionClient {
    pub fn new(config: &CompletionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build completion HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            transcription_model: config.transcription_model.clone(),
            client,
        })
    }

    fn chat_request(&self, request: CompletionRequest) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);

        if let Some(system) = request.system_instruction {
            messages.push(Message {
                role: "system",
                content: MessageContent::Text(system),
            });
        }

        let content = match request.image {
            Some(image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: request.prompt,
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.to_url(),
                    },
                },
            ]),
            None => MessageContent::Text(request.prompt),
        };
        messages.push(Message {
            role: "user",
            content,
        });

        ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CoreError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!("Completion API error: {} - {}", status, error_text);
        Err(CoreError::UpstreamError(format!(
            "completion API returned {}",
            status
        )))
    }
}

impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.chat_request(request);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Completion API request failed: {}", e);
                CoreError::UpstreamError(format!("completion request failed: {}", e))
            })?;

        let response = Self::check_status(response).await?;

        let chat: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse completion response: {}", e);
            CoreError::UpstreamError(format!("undecodable completion response: {}", e))
        })?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                tracing::error!("Completion response carried no message content");
                CoreError::UpstreamError("empty completion".to_string())
            })
    }

    async fn transcribe(&self, clip: AudioClip) -> Result<String, CoreError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file = Part::bytes(clip.data)
            .file_name(clip.file_name)
            .mime_str(&clip.mime_type)
            .map_err(|e| CoreError::InvalidRequest(format!("invalid audio type: {}", e)))?;
        let form = Form::new()
            .text("model", self.transcription_model.clone())
            .text("language", TRANSCRIPTION_LANGUAGE)
            .part("file", file);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Transcription request failed: {}", e);
                CoreError::UpstreamError(format!("transcription request failed: {}", e))
            })?;

        let response = Self::check_status(response).await?;

        let transcription: TranscriptionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse transcription response: {}", e);
            CoreError::UpstreamError(format!("undecodable transcription response: {}", e))
        })?;

        Ok(transcription.text)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::suggestion::entities::ImageReference;

    fn client() -> OpenAiCompletionClient {
        OpenAiCompletionClient::new(&CompletionConfig {
            api_key: "sk-test".into(),
            base_url: "https://api.openai.com/v1/".into(),
            model: "gpt-4o".into(),
            transcription_model: "whisper-1".into(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn text_request_has_system_then_user() {
        let body = client().chat_request(CompletionRequest {
            system_instruction: Some("chef".into()),
            prompt: "ovos".into(),
            image: None,
            temperature: Some(0.8),
            max_tokens: 2000,
        });

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "ovos");
        assert_eq!(json["max_tokens"], 2000);
    }

    #[test]
    fn image_request_uses_content_parts() {
        let body = client().chat_request(CompletionRequest {
            system_instruction: None,
            prompt: "identifique".into(),
            image: Some(ImageReference::Inline {
                mime_type: "image/jpeg".into(),
                data: vec![0xff, 0xd8],
            }),
            temperature: None,
            max_tokens: 2000,
        });

        let json = serde_json::to_value(&body).unwrap();
        let parts = &json["messages"][0]["content"];
        assert_eq!(json["messages"].as_array().unwrap().len(), 1);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/jpeg;base64,/9g=");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        assert_eq!(client().base_url, "https://api.openai.com/v1");
    }
}
