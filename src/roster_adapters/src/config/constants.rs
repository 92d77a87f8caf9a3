pub mod env {
    pub const ENV_PREFIX: &str = "ROSTER";
    pub const CONFIG_DIR_ENV_VAR: &str = "ROSTER_CONFIG_DIR";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
}

pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const EVENT_STREAM_MAX_LEN: usize = 100_000;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
    pub const METRICS_ADDRESS: &str = "0.0.0.0:9090";
    pub const REQUEST_TIMEOUT_MILLIS: u64 = 10_000;
}

pub mod test {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);
}
