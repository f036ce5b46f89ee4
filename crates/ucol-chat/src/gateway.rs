use super::Preamble;
use super::wire::Content;
use super::wire::GenerateRequest;
use super::wire::GenerateResponse;

/// Text shown to the user whenever the upstream service fails, whatever
/// the failure.
pub const FALLBACK: &str =
    "Lo siento, hubo un error al procesar tu solicitud. Verifica la conexión o la clave API.";

/// Failures of the external generative-text service. These never leave
/// the gateway: [`Gateway::complete`] masks them behind [`FALLBACK`].
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("chat request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("chat service answered {0}")]
    Status(reqwest::StatusCode),
    #[error("chat response contained no text")]
    Empty,
}

/// Client for the external completion service. The system instruction is
/// assembled once from the [`Preamble`] and sent with every prompt.
pub struct Gateway {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    key: String,
    instruction: String,
}

impl Gateway {
    pub fn new(endpoint: String, model: String, key: String, preamble: &Preamble) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            model,
            key,
            instruction: preamble.instruction(),
        }
    }

    /// Forward a user prompt and return the completion text.
    ///
    /// Never fails visibly: transport errors, bad statuses, and empty
    /// responses all come back as the fixed [`FALLBACK`] string, with the
    /// real cause logged operator-side.
    pub async fn complete(&self, prompt: &str) -> String {
        match self.request(prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("chat upstream failure: {}", e);
                FALLBACK.to_string()
            }
        }
    }

    async fn request(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.key
        );
        let body = GenerateRequest {
            system_instruction: Content::text(&self.instruction),
            contents: vec![Content::text(prompt)],
        };
        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }
        let reply: GenerateResponse = response.json().await?;
        reply.text().ok_or(UpstreamError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preamble() -> Preamble {
        Preamble {
            version: 1,
            role: "Asistente Virtual.".to_string(),
            tone: "Amable.".to_string(),
            facts: vec!["La matrícula cuesta $2,500,000.".to_string()],
            refusal: "Solo temas de la universidad.".to_string(),
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_yields_the_fallback_string() {
        // port 9 (discard) is not listening; the request fails fast
        let gateway = Gateway::new(
            "http://127.0.0.1:9".to_string(),
            "gemini-2.5-flash".to_string(),
            "test-key".to_string(),
            &preamble(),
        );
        let reply = gateway.complete("¿Cuál es el precio de la matrícula?").await;
        assert!(reply == FALLBACK);
    }
}
