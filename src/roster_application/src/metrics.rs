//! Service metrics recorded through the `metrics` facade.
//!
//! Nothing is exported unless the binary installs a recorder.
//! Counters carry a `status` label of `success` or `failed`.

use metrics::{counter, histogram};

use crate::error::UserServiceError;

const USERS_CREATED_TOTAL: &str = "roster_users_created_total";
const USERS_FETCHED_TOTAL: &str = "roster_users_fetched_total";
const USERS_DELETED_TOTAL: &str = "roster_users_deleted_total";
const REQUEST_LATENCY: &str = "roster_request_latency_seconds";
const COMPENSATIONS_TOTAL: &str = "roster_compensations_total";
const COMPENSATION_FAILURES_TOTAL: &str = "roster_compensation_failures_total";

fn status<T>(result: &Result<T, UserServiceError>) -> &'static str {
    if result.is_ok() { "success" } else { "failed" }
}

fn kind<T>(result: &Result<T, UserServiceError>) -> &'static str {
    match result {
        Ok(_) => "none",
        Err(e) => e.kind().as_str(),
    }
}

#[inline]
pub fn record_create<T>(result: &Result<T, UserServiceError>, latency_secs: f64) {
    counter!(USERS_CREATED_TOTAL, "status" => status(result), "error" => kind(result))
        .increment(1);
    histogram!(REQUEST_LATENCY, "method" => "create").record(latency_secs);
}

#[inline]
pub fn record_fetch<T>(result: &Result<T, UserServiceError>, latency_secs: f64) {
    counter!(USERS_FETCHED_TOTAL, "status" => status(result), "error" => kind(result))
        .increment(1);
    histogram!(REQUEST_LATENCY, "method" => "find_by_id").record(latency_secs);
}

#[inline]
pub fn record_delete<T>(result: &Result<T, UserServiceError>, latency_secs: f64) {
    counter!(USERS_DELETED_TOTAL, "status" => status(result), "error" => kind(result))
        .increment(1);
    histogram!(REQUEST_LATENCY, "method" => "delete").record(latency_secs);
}

/// Records the outcome of a compensating delete.
#[inline]
pub fn record_compensation(success: bool) {
    let status = if success { "success" } else { "failed" };
    counter!(COMPENSATIONS_TOTAL, "status" => status).increment(1);
    if !success {
        counter!(COMPENSATION_FAILURES_TOTAL).increment(1);
    }
}
