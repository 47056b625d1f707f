#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
mod input;
#[cfg(feature = "std")]
mod logging;
pub mod player;
mod setup;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use setup::*;
pub use ship::*;
