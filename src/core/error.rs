use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number >= 0, got {value}")]
    Invalid { field: &'static str, value: f64 },
    #[error("{field} overflows a finite number for these inputs")]
    Overflow { field: &'static str },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::Invalid { field, .. } | InputError::Overflow { field } => field,
        }
    }
}
