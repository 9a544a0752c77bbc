#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{program} not found — install it locally (node_modules/.bin) or on PATH")]
    NotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} failed: {args:?}\n{stderr}")]
    CommandFailed {
        program: String,
        args: Vec<String>,
        stderr: String,
    },

    #[error("{program} output was not valid UTF-8")]
    InvalidUtf8 {
        program: String,
        source: std::string::FromUtf8Error,
    },
}
