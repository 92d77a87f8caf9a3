pub mod compensation;
pub mod context;
pub mod decorators;
pub mod error;
pub mod metrics;
pub mod service;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use compensation::{CompensationError, Compensator};
pub use context::{Interrupted, RequestContext};
pub use decorators::{InstrumentedUserService, LoggingUserService, UserServiceExt};
pub use error::{ErrorKind, UserServiceError};
pub use service::{UserService, UserServiceImpl};
pub use use_cases::{
    create_user::{CreateUserUseCase, CredentialPolicy},
    delete_user::DeleteUserUseCase,
    find_user::FindUserUseCase,
};
