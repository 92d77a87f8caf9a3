pub mod events;
pub mod requested_user;
pub mod role;
pub mod user;
pub mod user_id;
pub mod validation;
