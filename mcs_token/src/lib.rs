#![no_std]

pub mod contract;
pub mod data;
mod storage;

pub use contract::{McsToken, McsTokenClient};
