pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod report;
pub mod scan;
