/// Domain-level failures shared by the store and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The lookup, update or delete target does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input was rejected before reaching the store.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Build a [`CoreError::NotFound`] from any displayable identifier.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
