//! # plexus
//!
//! Bouncing points joined by a live proximity graph.
//!
//! A configurable number of points drift around the window, reflecting off
//! its edges. Every frame, each pair of points closer than the link radius
//! is joined by a translucent line whose opacity falls off with distance;
//! optionally the pointer joins the graph too, and captured audio can
//! modulate line opacity with the room's loudness.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::{Config, Simulation};
//!
//! fn main() {
//!     let config = Config {
//!         points: 150,
//!         ..Config::default()
//!     };
//!     config.validate().unwrap();
//!     Simulation::new(config).run().unwrap();
//! }
//! ```
//!
//! ## Structure
//!
//! The simulation core is plain CPU code and fully deterministic after
//! startup: [`point::PointStore`] owns positions, [`motion::MovingPoint`]
//! advances them, and [`graph::ProximityGraph`] derives the per-frame edge
//! set with an all-pairs scan in squared-distance space. The
//! [`Simulation`] orchestrator drives one tick per display refresh and
//! hands dots and edges to the wgpu render sink in [`gpu`].
//!
//! With the `audio` feature (on by default) and `--audio`, a cpal input
//! stream publishes per-buffer peaks into a [`signal::SignalLevel`] that
//! decays a fixed step per frame.

#[cfg(feature = "audio")]
pub mod audio;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod gpu;
pub mod graph;
pub mod motion;
pub mod point;
pub mod signal;
mod simulation;
pub mod time;
pub mod viewport;

pub use color::Rgba;
pub use config::Config;
pub use glam::Vec2;
pub use graph::{fade_weight, Edge, EdgeTarget, ProximityGraph};
pub use motion::{scatter, MovingPoint};
pub use point::PointStore;
pub use signal::SignalLevel;
pub use simulation::Simulation;
pub use viewport::Viewport;
