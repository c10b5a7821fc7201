use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Invalid {field} value '{value}'{}", hint(.suggestion))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        suggestion: Option<&'static str>,
    },

    #[error("Degenerate target: {metric} target is 0 but total is {total}")]
    DegenerateTarget { metric: &'static str, total: f64 },

    #[error("No body profile set; run `profile` first")]
    MissingProfile,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, MacroError>;
