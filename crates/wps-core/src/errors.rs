use thiserror::Error;

/// Result type alias using the canonical ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,
    UnknownPosition,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnknownPosition => "ERR_UNKNOWN_POSITION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Storage backends and domain operations both surface this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (snippet name, rule id, option key, ...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for snippet and rule operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WpsError {
    /// No snippet is stored under the (normalized) name
    #[error("Snippet not found: {name}")]
    SnippetNotFound { name: String },

    /// No rule with this id exists in the Rule Set
    #[error("Rule not found: {rule_id}")]
    RuleNotFound { rule_id: String },

    /// Position key is not part of the position table
    #[error("Unknown position: {position_key}")]
    UnknownPosition { position_key: String },

    /// A persisted option could not be decoded
    #[error("Option {key} could not be decoded: {reason}")]
    OptionDecode { key: String, reason: String },
}

impl WpsError {
    /// Error kind this domain error is classified under
    pub fn kind(&self) -> ExErrorKind {
        match self {
            WpsError::SnippetNotFound { .. } | WpsError::RuleNotFound { .. } => {
                ExErrorKind::NotFound
            }
            WpsError::UnknownPosition { .. } => ExErrorKind::UnknownPosition,
            WpsError::OptionDecode { .. } => ExErrorKind::Serialization,
        }
    }

    fn entity(&self) -> &str {
        match self {
            WpsError::SnippetNotFound { name } => name,
            WpsError::RuleNotFound { rule_id } => rule_id,
            WpsError::UnknownPosition { position_key } => position_key,
            WpsError::OptionDecode { key, .. } => key,
        }
    }
}

impl From<WpsError> for ExError {
    fn from(err: WpsError) -> Self {
        ExError::new(err.kind())
            .with_entity_id(err.entity())
            .with_message(err.to_string())
    }
}
