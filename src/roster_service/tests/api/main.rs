mod create_user;
mod delete_user;
mod find_user;
mod helpers;
mod publish_failure;
