//! # Store Errors
//!
//! Failures raised by the store plumbing itself. Entity-level failures travel inside
//! [`StoreError::Entity`] and are unwrapped again by the typed clients.

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the entity's own error type, if that is what this error carries.
    pub fn into_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::Entity(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(StoreError::Entity(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("quantity must be at least one")]
    struct QuantityError;

    #[test]
    fn into_entity_recovers_the_boxed_error() {
        let err = StoreError::Entity(Box::new(QuantityError));
        assert_eq!(err.into_entity::<QuantityError>().unwrap(), QuantityError);
    }

    #[test]
    fn into_entity_leaves_plumbing_errors_alone() {
        let err = StoreError::NotFound("order_9".into());
        assert!(matches!(
            err.into_entity::<QuantityError>(),
            Err(StoreError::NotFound(id)) if id == "order_9"
        ));
    }
}
