use thiserror::Error;

/// Every way a compilation can fail. Translation is all or nothing so any of these means
/// no artifact has been written.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Source text does not conform to the grammar. Holds the rendered pest diagnostic.
    #[error("Syntax Error: {0}")]
    Syntax(String),

    /// The parse tree has a shape the AST builder does not expect.
    #[error("Internal Error: {0}")]
    Internal(String),

    /// Configuration file or build command template is invalid.
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        CompileError::Internal(message.into())
    }

    /// Standard system exit code describing this failure.
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            CompileError::Syntax(_) => exitcode::DATAERR,
            CompileError::Internal(_) => exitcode::SOFTWARE,
            CompileError::Config(_) => exitcode::CONFIG,
            CompileError::Io(_) => exitcode::IOERR,
        }
    }
}
