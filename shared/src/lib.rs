#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod types;
