/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const RECURRENCE_ROUTE_COMPONENT: &str = "recurrence";
pub const RECURRENCE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RECURRENCE_ROUTE_COMPONENT);

pub const OCCURRENCES_ROUTE_COMPONENT: &str = "occurrences";
pub const OCCURRENCES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", OCCURRENCES_ROUTE_COMPONENT);

pub const CUSTOMERS_ROUTE_COMPONENT: &str = "customers";
pub const CUSTOMERS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CUSTOMERS_ROUTE_COMPONENT);

pub const SCHEDULES_ROUTE_COMPONENT: &str = "schedules";
pub const SCHEDULES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SCHEDULES_ROUTE_COMPONENT);

pub const PLANS_ROUTE_COMPONENT: &str = "plans";
pub const PLANS_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", PLANS_ROUTE_COMPONENT);

/// Persisted value standing in for an empty weekly selection.
pub const NO_SCHEDULE_SENTINEL: &str = "No schedule selected";
