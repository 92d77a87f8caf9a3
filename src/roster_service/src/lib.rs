pub mod helpers;
pub mod roster_service;
pub mod shutdown;
pub mod telemetry;

pub use helpers::{BootstrapError, configure_postgresql, configure_redis, user_service};
pub use roster_service::RosterService;
pub use shutdown::shutdown_signal;
