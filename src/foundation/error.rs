/// Convenience result type used across multislicer.
pub type SlicerResult<T> = Result<T, SlicerError>;

/// Top-level error taxonomy used by render APIs.
///
/// Parameter problems never show up here: they are clamped in place by
/// [`crate::SliceParams::resolve`]. Only descriptor mistakes and resource exhaustion reach the
/// caller.
#[derive(thiserror::Error, Debug)]
pub enum SlicerError {
    /// Malformed buffer descriptor (stride, length, dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// An allocation needed by the render call could not be satisfied.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// The worker pool could not be started.
    #[error("scheduler error: {0}")]
    Scheduler(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlicerError {
    /// Build a [`SlicerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlicerError::OutOfMemory`] value.
    pub fn out_of_memory(msg: impl Into<String>) -> Self {
        Self::OutOfMemory(msg.into())
    }

    /// Build a [`SlicerError::Scheduler`] value.
    pub fn scheduler(msg: impl Into<String>) -> Self {
        Self::Scheduler(msg.into())
    }
}

/// Allocate an empty vector able to hold `len` items, reporting failure instead of aborting.
pub(crate) fn try_vec_with_capacity<T>(len: usize, what: &str) -> SlicerResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|e| SlicerError::out_of_memory(format!("{what} ({len} items): {e}")))?;
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
