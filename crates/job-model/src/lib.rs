#![doc = include_str!("../README.md")]

pub mod config;
pub mod job;
pub mod logging;
pub mod resources;
pub mod script;
