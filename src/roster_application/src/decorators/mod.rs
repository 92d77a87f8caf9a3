//! Cross-cutting wrappers around a [`UserService`].
//!
//! Each decorator holds the next service in the chain and implements the same
//! trait, so they stack in any order:
//!
//! ```ignore
//! let service = UserServiceImpl::new(store)
//!     .with_event_publisher(publisher)
//!     .with_logging()
//!     .with_metrics();
//! ```

mod instrumented;
mod logging;

pub use instrumented::InstrumentedUserService;
pub use logging::LoggingUserService;

use crate::service::UserService;

pub trait UserServiceExt: UserService + Sized {
    fn with_logging(self) -> LoggingUserService<Self> {
        LoggingUserService::new(self)
    }

    fn with_metrics(self) -> InstrumentedUserService<Self> {
        InstrumentedUserService::new(self)
    }
}

impl<S> UserServiceExt for S where S: UserService + Sized {}
