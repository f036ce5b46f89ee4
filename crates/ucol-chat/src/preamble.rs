use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Versioned system-instruction configuration for the chat gateway.
///
/// The role, tone, institutional facts, and out-of-domain refusal script
/// live in a config file rather than in code, so they can change without
/// a rebuild. Loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preamble {
    pub version: u32,
    pub role: String,
    pub tone: String,
    pub facts: Vec<String>,
    pub refusal: String,
}

impl Preamble {
    /// Load the preamble from a JSON file. Missing or malformed config is
    /// a startup-time failure.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading prompt config {}", path.display()))?;
        let preamble: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing prompt config {}", path.display()))?;
        log::info!("loaded prompt config v{} from {}", preamble.version, path.display());
        Ok(preamble)
    }

    /// Assemble the full system instruction sent with every completion.
    pub fn instruction(&self) -> String {
        let facts = self
            .facts
            .iter()
            .map(|fact| format!("   - {}", fact))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "ROL: {} TONO: {} \
             REGLA 1 (Información): Utiliza la siguiente información como VERDAD ABSOLUTA: {} \
             REGLA 2 (Alcance): Si la pregunta NO está directamente relacionada con la universidad, \
             debes responder: '{}'",
            self.role, self.tone, facts, self.refusal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_versioned_config() {
        let raw = r#"{
            "version": 1,
            "role": "Asistente Virtual.",
            "tone": "Amable.",
            "facts": ["La matrícula cuesta $2,500,000.", "Modalidad presencial."],
            "refusal": "Solo temas de la universidad."
        }"#;
        let preamble: Preamble = serde_json::from_str(raw).unwrap();
        assert!(preamble.version == 1);
        assert!(preamble.facts.len() == 2);
    }

    #[test]
    fn instruction_carries_role_facts_and_refusal() {
        let preamble = Preamble {
            version: 1,
            role: "Asistente Virtual.".to_string(),
            tone: "Amable.".to_string(),
            facts: vec!["La matrícula cuesta $2,500,000.".to_string()],
            refusal: "Solo temas de la universidad.".to_string(),
        };
        let instruction = preamble.instruction();
        assert!(instruction.contains("Asistente Virtual."));
        assert!(instruction.contains("$2,500,000"));
        assert!(instruction.contains("Solo temas de la universidad."));
    }
}
