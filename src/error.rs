use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuncListError {
    #[error("Invalid pattern spec `{spec}`: {reason}")]
    InvalidPatternSpec { spec: String, reason: String },

    #[error("Invalid regex in pattern spec `{spec}`: {source}")]
    InvalidRegex {
        spec: String,
        #[source]
        source: regex::Error,
    },

    #[error("Display filter `{filter}` does not match native match `{native}`")]
    DisplayPatternMismatch { filter: String, native: String },

    #[error("No filter configured for file extension of {0}")]
    NoFilterForExtension(String),

    #[error("Source editor is no longer visible: {0}")]
    SourceEditorUnavailable(String),

    #[error("No function list registered for {0}")]
    UnknownListDocument(String),

    #[error("Invalid function list uri `{uri}`: {reason}")]
    InvalidListUri { uri: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FuncListError {
    /// Misconfigured filters. These block producing a list and must reach the user.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidPatternSpec { .. }
                | Self::InvalidRegex { .. }
                | Self::DisplayPatternMismatch { .. }
                | Self::Config(_)
        )
    }

    /// Conditions that resolve themselves on a later event (closed or hidden editors).
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::SourceEditorUnavailable(_) | Self::UnknownListDocument(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FuncListError>;
