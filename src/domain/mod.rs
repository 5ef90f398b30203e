pub mod common;
pub mod network;
