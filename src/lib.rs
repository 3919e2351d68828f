pub mod aggregate;
pub mod board;
pub mod config;
pub mod models;
pub mod placar;
pub mod stubs;
pub mod uhapi;
