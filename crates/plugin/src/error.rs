/// Errors from plugin-side operations.
///
/// Nothing here is fatal to the monitor: a failed settings write is
/// logged and the in-memory state stays authoritative.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}
