#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod analyze;
mod bitboard;
mod catalog;
mod cluster;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use analyze::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use catalog::*;
pub use cluster::*;
pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
