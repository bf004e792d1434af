// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod gui;
pub mod net;
pub mod params;
pub mod rate;
pub mod runner;
pub mod table;
