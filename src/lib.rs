//! Skyclock - terminal fireworks with a countdown overlay
//!
//! Core modules:
//! - `sim`: Frame-stepped fireworks and starfield simulation
//! - `render`: Canvas seam and the half-block terminal renderer
//! - `countdown`: New Year and midnight countdown strategies
//! - `platform`: Terminal input and clock collaborators
//! - `frame_loop`: Ties everything into one fixed-rate cycle

pub mod countdown;
pub mod frame_loop;
pub mod platform;
pub mod render;
pub mod sim;
