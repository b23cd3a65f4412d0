pub mod app;
pub mod cli;
pub mod commands;
pub mod context;
pub mod merge;
pub mod notify;
pub mod remote;
pub mod rest;
pub mod scheduler;
pub mod storage;
pub mod store;
pub mod tracing;
pub mod types;
