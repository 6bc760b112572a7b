use alloc::string::String;

/// Errors from building image buffers and dispatching plugins.
///
/// The transforms themselves are infallible; errors only arise at the
/// boundaries where untyped input (row tables, plugin names, arguments)
/// enters the crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PictoolError {
    #[error("image has no pixels")]
    EmptyImage,

    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    #[error("plugin {plugin} has no parameter {parameter:?}")]
    UnknownParameter { plugin: &'static str, parameter: String },

    #[error("parameter {parameter} expects a bool, got {value:?}")]
    InvalidArgument { parameter: &'static str, value: String },
}
