//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions out of [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod forms {
    use crate::forms::categories::{CreateCategoryFormError, UpdateCategoryFormError};
    use crate::services::ServiceError;

    impl From<CreateCategoryFormError> for ServiceError {
        fn from(val: CreateCategoryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<UpdateCategoryFormError> for ServiceError {
        fn from(val: UpdateCategoryFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
