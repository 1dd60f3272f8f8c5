pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod post;
pub mod store;
pub mod ui;
