pub mod clipboard;
pub mod config;
pub mod context_menu;
pub mod contract;
pub mod core_service;
pub mod generators;
pub mod logging;
pub mod metadata;
pub mod model;
pub mod query_dsl;
pub mod resolver;
pub mod runtime;
pub mod transport;

// Lets the shared perf test name the crate the same way integration tests do.
#[cfg(test)]
extern crate self as fakeflow_core;

#[cfg(test)]
mod tests {
    mod query_latency_test {
        include!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../tests/perf/query_latency_test.rs"
        ));
    }
}
