use thiserror::Error;

/// Errors raised while building or driving a presentation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A registry needs at least one slide, wraparound is undefined otherwise.
    #[error("a presentation needs at least one slide")]
    EmptyRegistry,

    /// A direct jump or checked lookup named a slide that does not exist.
    #[error("slide index {index} is out of range (presentation has {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_display() {
        assert_eq!(
            Error::EmptyRegistry.to_string(),
            "a presentation needs at least one slide"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let msg = Error::out_of_range(7, 5).to_string();
        assert!(msg.contains("7"));
        assert!(msg.contains("5 slides"));
    }

    #[test]
    fn test_into_anyhow_keeps_message() {
        let err: anyhow::Error = Error::EmptyRegistry.into();
        assert!(err.to_string().contains("at least one slide"));
    }
}
