// Error types and user-friendly startup messages
//
// `ChatError` covers the request path of the HTTP shell. The analysis and
// response engine itself cannot fail, so every variant is a transport concern.
// The formatting helpers turn startup failures into actionable messages.

use thiserror::Error;

/// Reply text used when a request fails unexpectedly
pub const TROUBLE_PROCESSING_MESSAGE: &str = "I apologize, but I'm having trouble processing your message right now. Please try again in a moment.";

/// Supportive follow-up sent alongside [`TROUBLE_PROCESSING_MESSAGE`]
pub const TRY_AGAIN_MESSAGE: &str =
    "I'm here to listen and support you. Please try sharing your thoughts again.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Endpoint not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Format a bind failure with helpful suggestions
pub fn bind_failed_error(address: &str) -> String {
    format!(
        "Could not bind server to {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Another process is already using the port\n\
        • The address is not available on this machine\n\
        • Ports below 1024 need elevated privileges\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Pick another address:\n\
           \x1b[36mmindful-chat serve --bind 127.0.0.1:5001\x1b[0m\n\n\
        2. Find the process holding the port:\n\
           \x1b[36mlsof -i :{}\x1b[0m",
        address,
        address.rsplit(':').next().unwrap_or(address)
    )
}

/// Format a keyword file error with helpful suggestions
pub fn keywords_file_error(path: &str, error: &str) -> String {
    format!(
        "Failed to load crisis keywords from {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check the file is valid JSON with at least one phrase\n\
           (a missing list counts as empty):\n\
           \x1b[36m{{\"critical\": [...], \"high\": [...], \"medium\": [...]}}\x1b[0m\n\n\
        2. Remove keywords_path from the config to use the built-in table:\n\
           \x1b[36m~/.mindful-chat/config.toml\x1b[0m",
        path, error
    )
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to load configuration\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.mindful-chat/config.toml\x1b[0m\n\n\
        2. Check environment overrides:\n\
           \x1b[36menv | grep MINDFUL_CHAT\x1b[0m\n\n\
        3. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Unclosed brackets []\n\
           • [server] keys placed above the section header",
        error
    )
}
