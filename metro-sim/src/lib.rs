//! Subway network simulator.
//!
//! Builds a station/line graph from delimited connection records, rides
//! trains over it with per-station delay draws, and answers step-count
//! reachability queries that may cross lines at shared stations.

pub mod domain;
pub mod ingest;
pub mod network;
pub mod query;
pub mod report;
pub mod session;
pub mod sim;
