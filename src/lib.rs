pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod members;
pub mod models;
pub mod orgs;
pub mod pagination;
pub mod repos;
pub mod types;
