//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! an unknown seed entity, invalid scheduling parameters and duplicate entity ids.
//! Unreachable entities are never reported as errors.
use thiserror::Error;

use crate::entity::EntityId;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("seed entity '{id}' is not part of the entity set")]
    InvalidSeed { id: EntityId },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("duplicate entity id '{id}'")]
    DuplicateEntity { id: EntityId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_seed() {
        let err = Error::InvalidSeed {
            id: "Tree_1".into(),
        };
        assert_eq!(
            err.to_string(),
            "seed entity 'Tree_1' is not part of the entity set"
        );
    }

    #[test]
    fn invalid_parameter_carries_message() {
        let err = Error::InvalidParameter("speed must be > 0".into());
        assert_eq!(err.to_string(), "invalid parameter: speed must be > 0");
    }

    #[test]
    fn duplicate_entity_names_the_id() {
        let err = Error::DuplicateEntity {
            id: "Tree_7".into(),
        };
        assert_eq!(err.to_string(), "duplicate entity id 'Tree_7'");
    }
}
