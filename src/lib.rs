// Library exports for Bloggy
// The binary and the integration tests both drive the blog through these modules

pub mod auth;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod ids;
pub mod posts;
pub mod state;
pub mod storage;
pub mod users;
