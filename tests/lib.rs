//! End-to-end tests for the gateway live under `[[test]]` targets.
