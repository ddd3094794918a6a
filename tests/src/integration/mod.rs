//! # Integration Tests
//!
//! Flows that cross the codec, the account identity service and the
//! account lookup adapter.

mod transfer_flow;
