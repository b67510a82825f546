use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

/// A chat-style language model.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn generate(&self, prompt: String, system: Option<String>) -> Result<String>;

    fn model(&self) -> &str;
}

/// Any service exposing an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAICompatibleProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenAICompatibleProvider {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LLMProvider for OpenAICompatibleProvider {
    async fn generate(&self, prompt: String, system: Option<String>) -> Result<String> {
        let mut messages = Vec::new();
        if let Some(sys) = system {
            messages.push(json!({ "role": "system", "content": sys }));
        }
        messages.push(json!({ "role": "user", "content": prompt }));

        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.7,
        });

        let mut request = self.client.post(self.endpoint()).json(&body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let res = request.send().await?.error_for_status()?;
        let json: serde_json::Value = res.json().await?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .context("Failed to parse content from chat completion response")?;

        Ok(content.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Stand-in used when no API key is configured. Always fails, so callers
/// fall back to their static text without a network round trip.
pub struct DisabledProvider;

#[async_trait]
impl LLMProvider for DisabledProvider {
    async fn generate(&self, _prompt: String, _system: Option<String>) -> Result<String> {
        anyhow::bail!("no language model configured")
    }

    fn model(&self) -> &str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let p = OpenAICompatibleProvider::new(
            "http://localhost:11434/v1/".into(),
            None,
            "m".into(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(p.endpoint(), "http://localhost:11434/v1/chat/completions");
        assert_eq!(p.model(), "m");
    }

    #[tokio::test]
    async fn test_disabled_provider_errors() {
        assert!(DisabledProvider.generate("hi".into(), None).await.is_err());
    }
}
