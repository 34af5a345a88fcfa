use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting. The comparison engine
/// itself is total; only configuration, loading and export can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidConfig,
    NotFound,
    AmbiguousSelection,

    // Diff output
    DeterminismViolation,

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
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AmbiguousSelection => "ERR_AMBIGUOUS_SELECTION",
            ExErrorKind::DeterminismViolation => "ERR_DETERMINISM_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and rich context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    key: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
    candidates: Option<Vec<String>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            key: None,
            message: String::new(),
            source: None,
            candidates: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Add candidate names (used for AmbiguousSelection to list the options found)
    pub fn with_candidates(mut self, names: Vec<String>) -> Self {
        self.candidates = Some(names);
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

    /// Get the record key context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }

    /// Get candidate names, if any (populated on AmbiguousSelection)
    pub fn candidates(&self) -> Option<&[String]> {
        self.candidates.as_deref()
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
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        if let Some(candidates) = &self.candidates {
            write!(f, " (candidates: {})", candidates.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for LocDiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocDiffError {
    /// The segment delimiter must contain at least one character
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    /// A snapshot database has no user table to read from
    #[error("No table found in snapshot: {path}")]
    SnapshotTableMissing { path: String },

    /// A snapshot database has more than one user table
    #[error("Snapshot {path} must contain exactly one table, found: {}", tables.join(", "))]
    SnapshotTableAmbiguous { path: String, tables: Vec<String> },

    /// A snapshot file is not a flat key -> text object
    #[error("Invalid snapshot {path}: {reason}")]
    InvalidSnapshot { path: String, reason: String },

    /// Requested record key is absent from a snapshot
    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<LocDiffError> for ExError {
    fn from(err: LocDiffError) -> Self {
        match err {
            LocDiffError::EmptyDelimiter => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("compare_config")
                .with_message("delimiter must not be empty"),

            LocDiffError::SnapshotTableMissing { path } => ExError::new(ExErrorKind::NotFound)
                .with_op("load_snapshot")
                .with_message(format!("no table found in snapshot {}", path)),

            LocDiffError::SnapshotTableAmbiguous { path, tables } => {
                ExError::new(ExErrorKind::AmbiguousSelection)
                    .with_op("load_snapshot")
                    .with_message(format!(
                        "snapshot {} must contain exactly one table",
                        path
                    ))
                    .with_candidates(tables)
            }

            LocDiffError::InvalidSnapshot { path, reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("load_snapshot")
                    .with_message(format!("invalid snapshot {}: {}", path, reason))
            }

            LocDiffError::KeyNotFound { key } => ExError::new(ExErrorKind::NotFound)
                .with_key(key)
                .with_message("key not present in snapshot"),

            LocDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to LocDiffError
impl From<serde_json::Error> for LocDiffError {
    fn from(err: serde_json::Error) -> Self {
        LocDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
