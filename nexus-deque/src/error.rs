//! Error types for iterator requests.

use core::fmt;

/// Reason an iterator could not be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterError {
    /// The queue holds no buffers.
    Empty,
    /// Another iterator is still outstanding on the queue.
    Busy,
}

impl fmt::Display for IterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "queue is empty"),
            Self::Busy => write!(f, "an iterator is already outstanding on this queue"),
        }
    }
}

impl std::error::Error for IterError {}

/// Direction code that maps to no [`Direction`](crate::Direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDirection {
    /// The code that wasn't recognized.
    pub value: u8,
}

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown iteration direction: {}", self.value)
    }
}

impl std::error::Error for UnknownDirection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(IterError::Empty.to_string(), "queue is empty");
        assert_eq!(
            IterError::Busy.to_string(),
            "an iterator is already outstanding on this queue"
        );
        assert_eq!(
            UnknownDirection { value: 9 }.to_string(),
            "unknown iteration direction: 9"
        );
    }
}
