#![no_std]

mod error;

pub mod command;
pub mod config;
pub mod device;
pub mod frame;
pub mod interface;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::device::Ads131m08;
pub use crate::error::{Error, Result};
