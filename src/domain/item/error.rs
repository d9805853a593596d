use std::fmt;
use thiserror::Error;

/// Every constraint violated by one payload, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// One line per message, each terminated by `\n`.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Item ID is not valid")]
    InvalidId,

    #[error("No fields provided for update")]
    EmptyUpdate,

    #[error("Item {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// HTTP-style error code: 400 client input, 404 missing row, 500 store failure.
    pub fn code(&self) -> u16 {
        match self {
            ItemError::Validation(_) | ItemError::InvalidId | ItemError::EmptyUpdate => 400,
            ItemError::NotFound(_) => 404,
            ItemError::Store(_) => 500,
        }
    }
}
