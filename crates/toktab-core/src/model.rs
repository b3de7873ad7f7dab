use serde::{Deserialize, Serialize};

/// Pricing and capability record for a single catalog model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub name: String,
    pub provider: Option<String>,
    pub input_cost_per_token: Option<f64>,
    pub output_cost_per_token: Option<f64>,
    pub cache_read_cost_per_token: Option<f64>,
    pub cache_write_cost_per_token: Option<f64>,
    pub max_input_tokens: Option<u64>,
    pub max_output_tokens: Option<u64>,
    pub max_total_tokens: Option<u64>,
    pub capabilities: Vec<Capability>,
}

impl ModelRecord {
    pub fn has(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }
}

/// One row of a search response, plus the fields the list view shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub slug: String,
    pub provider: Option<String>,
    pub input_cost_per_token: Option<f64>,
    pub output_cost_per_token: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub count: u64,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    Vision,
    FunctionCalling,
    ToolChoice,
    PromptCaching,
    ResponseSchema,
    SystemMessages,
    AudioInput,
    AudioOutput,
    PdfInput,
}

impl Capability {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vision => "Vision",
            Self::FunctionCalling => "Functions",
            Self::ToolChoice => "Tool choice",
            Self::PromptCaching => "Caching",
            Self::ResponseSchema => "Schema",
            Self::SystemMessages => "System msgs",
            Self::AudioInput => "Audio in",
            Self::AudioOutput => "Audio out",
            Self::PdfInput => "PDF",
        }
    }
}

/// Catalog flag fields and the capability each one maps to, in display order.
pub const CAPABILITY_FLAGS: &[(&str, Capability)] = &[
    ("supports_vision",           Capability::Vision),
    ("supports_function_calling", Capability::FunctionCalling),
    ("supports_tool_choice",      Capability::ToolChoice),
    ("supports_prompt_caching",   Capability::PromptCaching),
    ("supports_response_schema",  Capability::ResponseSchema),
    ("supports_system_messages",  Capability::SystemMessages),
    ("supports_audio_input",      Capability::AudioInput),
    ("supports_audio_output",     Capability::AudioOutput),
    ("supports_pdf_input",        Capability::PdfInput),
];
