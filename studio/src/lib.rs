//! Interactive composition studio: an editor state machine, data-driven
//! contact corrections and SVG rendering/export on top of the [`abut_rs`]
//! contact engine.

use std::time::Instant;

use once_cell::sync::Lazy;

pub mod compositor;
pub mod config;
pub mod corrections;
pub mod editor;
pub mod export;
pub mod io;
pub mod render;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
