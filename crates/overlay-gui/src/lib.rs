//! # overlay-gui
//!
//! Retained-mode overlay HUD toolkit.
//!
//! A tree of positioned, animatable, interactive elements drawn once per frame
//! on top of a host application. The crate has no windowing or GPU dependency:
//! the host feeds pointer state into [`SceneManager::update`] once per tick and
//! hands a [`Canvas`] implementation to [`SceneManager::render`] once per frame.
//! Input adapters such as `overlay-gui-winit` live in separate crates.

mod animation;
mod canvas;
mod chain;
mod color;
mod commands;
mod config;
pub mod easing;
pub mod elements;
mod error;
mod events;
mod input;
mod layout;
mod math;
mod node;
mod primitives;
mod scene;
mod snapshot;
pub mod ui;

pub use animation::*;
pub use canvas::*;
pub use chain::*;
pub use color::*;
pub use commands::*;
pub use config::*;
pub use easing::EasingFn;
pub use error::*;
pub use events::*;
pub use input::*;
pub use layout::*;
pub use math::*;
pub use node::*;
pub use primitives::*;
pub use scene::*;
pub use snapshot::*;
