use iota_remote_types::RequestId;
use thiserror::Error;

/// Result type alias using RemoteApiError
pub type Result<T> = std::result::Result<T, RemoteApiError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every `RemoteApiError` maps onto one of these kinds. Each kind has a stable
/// code that callers, tests and log consumers can match on without parsing
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidTrytes,
    InvalidTransaction,
    InvalidPersistedForm,
    UnknownCommand,

    // Transport
    Transport,
    Timeout,

    // Protocol
    NodeError,
    MalformedResponse,

    // Result lifecycle
    NotFinished,
    AlreadyInitialized,

    // Integration/IO
    Io,
    Serialization,
    Configuration,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidTrytes => "ERR_INVALID_TRYTES",
            ExErrorKind::InvalidTransaction => "ERR_INVALID_TRANSACTION",
            ExErrorKind::InvalidPersistedForm => "ERR_INVALID_PERSISTED_FORM",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::Transport => "ERR_TRANSPORT",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::NodeError => "ERR_NODE_ERROR",
            ExErrorKind::MalformedResponse => "ERR_MALFORMED_RESPONSE",
            ExErrorKind::NotFinished => "ERR_NOT_FINISHED",
            ExErrorKind::AlreadyInitialized => "ERR_ALREADY_INITIALIZED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the node
/// context (command, status code, request id) needed to trace a failure back
/// to the dispatch that caused it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command: Option<String>,
    status_code: Option<u16>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            status_code: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node command context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Add HTTP status code context
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
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

    /// Get the node command context, if any
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Get the HTTP status code, if any
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        if let Some(status_code) = self.status_code {
            write!(f, " (status: {})", status_code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Coarse classification of a `RemoteApiError`
///
/// Callers branch on this to decide whether a failure came from their own
/// input, from the network, or from the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rejected locally before anything was sent
    Validation,
    /// The dispatch client could not complete the call
    Transport,
    /// The node answered, and the answer signals failure
    Protocol,
    /// Misuse of the result lifecycle, configuration or IO problems
    Internal,
}

/// Error taxonomy for node command operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteApiError {
    // ===== Validation Errors =====
    /// Value is not a valid tryte string
    #[error("Invalid trytes: {reason}")]
    InvalidTrytes { reason: String },

    /// Value is not a well-formed transaction
    #[error("Invalid transaction: {reason}")]
    InvalidTransaction { reason: String },

    /// A persisted action or result could not be reconstructed
    #[error("Invalid persisted form: {reason}")]
    InvalidPersistedForm { reason: String },

    /// Command name is not one this client supports
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    // ===== Transport Errors =====
    /// The dispatch client failed to reach the node
    #[error("Transport error while sending {command}: {message}")]
    Transport { command: String, message: String },

    /// The dispatch client gave up waiting for the node
    #[error("Timed out while sending {command}: {message}")]
    Timeout { command: String, message: String },

    // ===== Protocol Errors =====
    /// The node reported a failure
    #[error("Node returned error for {command} (status {status_code}): {message}")]
    NodeError {
        command: String,
        status_code: u16,
        message: String,
    },

    /// The node's response could not be interpreted
    #[error("Malformed response for {command} (status {status_code}): {reason}")]
    MalformedResponse {
        command: String,
        status_code: u16,
        reason: String,
    },

    // ===== Result Lifecycle Errors =====
    /// A success/error judgment was requested before `finish()`
    #[error("Result for {command} has not been finished")]
    NotFinished { command: String },

    /// `initialize()` was called a second time on the same result
    #[error("Result for {command} was already initialized")]
    AlreadyInitialized { command: String },

    // ===== Generic Errors =====
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File system error
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RemoteApiError {
    /// Classify the error into validation, transport, protocol or internal
    pub fn class(&self) -> ErrorClass {
        match self {
            RemoteApiError::InvalidTrytes { .. }
            | RemoteApiError::InvalidTransaction { .. }
            | RemoteApiError::InvalidPersistedForm { .. }
            | RemoteApiError::UnknownCommand { .. } => ErrorClass::Validation,
            RemoteApiError::Transport { .. } | RemoteApiError::Timeout { .. } => {
                ErrorClass::Transport
            }
            RemoteApiError::NodeError { .. } | RemoteApiError::MalformedResponse { .. } => {
                ErrorClass::Protocol
            }
            RemoteApiError::NotFinished { .. }
            | RemoteApiError::AlreadyInitialized { .. }
            | RemoteApiError::Configuration { .. }
            | RemoteApiError::Io { .. }
            | RemoteApiError::Serialization { .. } => ErrorClass::Internal,
        }
    }

    /// Status code reported by the node, for protocol errors
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RemoteApiError::NodeError { status_code, .. }
            | RemoteApiError::MalformedResponse { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<&RemoteApiError> for ExError {
    fn from(err: &RemoteApiError) -> Self {
        match err {
            RemoteApiError::InvalidTrytes { reason } => ExError::new(ExErrorKind::InvalidTrytes)
                .with_op("parse_trytes")
                .with_message(reason.clone()),

            RemoteApiError::InvalidTransaction { reason } => {
                ExError::new(ExErrorKind::InvalidTransaction)
                    .with_op("parse_transaction")
                    .with_message(reason.clone())
            }

            RemoteApiError::InvalidPersistedForm { reason } => {
                ExError::new(ExErrorKind::InvalidPersistedForm)
                    .with_op("deserialize")
                    .with_message(reason.clone())
            }

            RemoteApiError::UnknownCommand { command } => {
                ExError::new(ExErrorKind::UnknownCommand)
                    .with_command(command.clone())
                    .with_message("Command is not supported by this client")
            }

            RemoteApiError::Transport { command, message } => {
                ExError::new(ExErrorKind::Transport)
                    .with_op("send")
                    .with_command(command.clone())
                    .with_message(message.clone())
            }

            RemoteApiError::Timeout { command, message } => ExError::new(ExErrorKind::Timeout)
                .with_op("send")
                .with_command(command.clone())
                .with_message(message.clone()),

            RemoteApiError::NodeError {
                command,
                status_code,
                message,
            } => ExError::new(ExErrorKind::NodeError)
                .with_op("throw_on_error")
                .with_command(command.clone())
                .with_status_code(*status_code)
                .with_message(message.clone()),

            RemoteApiError::MalformedResponse {
                command,
                status_code,
                reason,
            } => ExError::new(ExErrorKind::MalformedResponse)
                .with_op("finish")
                .with_command(command.clone())
                .with_status_code(*status_code)
                .with_message(reason.clone()),

            RemoteApiError::NotFinished { command } => ExError::new(ExErrorKind::NotFinished)
                .with_op("throw_on_error")
                .with_command(command.clone())
                .with_message("finish() must be called before the outcome is judged"),

            RemoteApiError::AlreadyInitialized { command } => {
                ExError::new(ExErrorKind::AlreadyInitialized)
                    .with_op("initialize")
                    .with_command(command.clone())
                    .with_message("initialize() may only be called once")
            }

            RemoteApiError::Configuration { message } => {
                ExError::new(ExErrorKind::Configuration).with_message(message.clone())
            }

            RemoteApiError::Io { message } => {
                ExError::new(ExErrorKind::Io).with_message(message.clone())
            }

            RemoteApiError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message.clone())
            }
        }
    }
}

impl From<RemoteApiError> for ExError {
    fn from(err: RemoteApiError) -> Self {
        ExError::from(&err)
    }
}

impl From<serde_json::Error> for RemoteApiError {
    fn from(err: serde_json::Error) -> Self {
        RemoteApiError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RemoteApiError {
    fn from(err: std::io::Error) -> Self {
        RemoteApiError::Io {
            message: err.to_string(),
        }
    }
}
