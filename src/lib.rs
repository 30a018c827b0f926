//! Simulation core for a side-scrolling arcade shooter.
//!
//! Everything that decides what happens in a frame lives here. Rendering and
//! raw key capture belong to the host binary, which only reads
//! [`entities::SimulationState`] and feeds [`input::Intents`] back in.

pub mod collision;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod motion;
pub mod player;
pub mod spawn;
