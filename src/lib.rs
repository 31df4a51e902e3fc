pub mod calculator;
pub mod config;
pub mod demo;
pub mod utils;

pub use calculator::Calculator;
pub use demo::DemoReport;
pub use utils::{add_numbers, multiply_numbers};
