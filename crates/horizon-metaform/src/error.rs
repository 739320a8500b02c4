//! Error types for the widget-building pipeline.

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A re-entrant `build_widgets_from(None)` call was made from inside an
    /// active build pass. Re-inspecting from within the build that triggered
    /// the inspection would never terminate.
    #[error(
        "Calling build_widgets_from(None) may cause infinite loop. \
         Check your argument, or call build_widgets() instead"
    )]
    InfiniteBuildLoop,

    /// A capability was configured with invalid input.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Core data-model error.
    #[error(transparent)]
    Core(#[from] horizon_metaform_core::CoreError),
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
