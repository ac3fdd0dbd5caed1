//! # overlay-gui-winit
//!
//! winit input adapter for overlay-gui.
//!
//! Feed every [`winit::event::WindowEvent`] into a [`PointerTracker`] and call
//! [`PointerTracker::drive`] once per host tick to run the scene's input walk.

mod tracker;

pub use tracker::*;
