//! Natural-language explanations
//!
//! Wraps an [`LLMProvider`] so that prediction endpoints always get text
//! back: provider failures are logged and replaced by a localized fallback.

pub mod prompts;
pub mod provider;

use std::sync::Arc;
use tracing::{debug, error};

use crate::language::Language;
pub use provider::{DisabledProvider, LLMProvider, OpenAICompatibleProvider};

#[derive(Clone)]
pub struct Explainer {
    provider: Arc<dyn LLMProvider>,
}

impl Explainer {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub async fn explain(&self, prompt: String, lang: Language) -> String {
        debug!(model = self.provider.model(), ?lang, "requesting explanation");
        match self
            .provider
            .generate(prompt, Some(prompts::system_message(lang)))
            .await
        {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                error!("AI explanation error: empty completion");
                prompts::fallback_explanation(lang).to_string()
            }
            Err(e) => {
                error!("AI explanation error: {e:#}");
                prompts::fallback_explanation(lang).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl LLMProvider for Echo {
        async fn generate(&self, prompt: String, system: Option<String>) -> Result<String> {
            Ok(format!("{}|{}", system.unwrap_or_default(), prompt))
        }

        fn model(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_explain_passes_system_message() {
        let explainer = Explainer::new(Arc::new(Echo));
        let text = explainer.explain("why?".into(), Language::En).await;
        assert!(text.contains("Respond in English.|why?"));
    }

    #[tokio::test]
    async fn test_explain_falls_back_on_error() {
        let explainer = Explainer::new(Arc::new(DisabledProvider));
        assert_eq!(explainer.explain("x".into(), Language::Ar).await, "تفسير غير متوفر حالياً");
        assert_eq!(explainer.explain("x".into(), Language::En).await, "Explanation not available");
    }
}
