// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor --heading-base-level=0

//! Understory Anchor: pin object edges to viewport edges.
//!
//! This crate provides [`EdgeAnchor`], a small per-object component that keeps
//! an object's screen-space edges at a fixed distance from the viewport's
//! edges (or at a fixed proportion of it) while the viewport is resized.
//! Typical uses are HUD elements stuck to a corner, or panels that stretch
//! between two sides of the window.
//!
//! Each edge of the object picks a [`HorizontalAnchor`] or [`VerticalAnchor`]:
//! - `WindowLeft` / `WindowTop`: constant pixel distance from the near edge.
//! - `WindowRight` / `WindowBottom`: constant pixel distance from the far edge.
//!   Any object edge can lock to either viewport edge.
//! - `Proportional`: constant fraction of the viewport width or height.
//! - `None`: the edge is left alone.
//!
//! The component runs once per simulation step. The first step after creation
//! or [`EdgeAnchor::on_activate`] records the distances; every later step
//! rebuilds position and size from them. Two [`ResizePolicy`] variants decide
//! how that rebuild is written back: [`ResizePolicy::Legacy`] (the default,
//! kept for existing content) and [`ResizePolicy::Modern`].
//!
//! It does **not** own a scene, a camera, or a window. Hosts implement
//! [`ViewportSize`], [`CoordinateTransform`] and [`AnchoredObject`] over their
//! own types. [`GameWindow`], [`Layer`] and [`SceneObject`] are small
//! reference implementations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_anchor::{
//!     EdgeAnchor, EdgeAnchorConfig, GameWindow, HorizontalAnchor, Layer, SceneObject,
//!     VerticalAnchor,
//! };
//!
//! let mut window = GameWindow::new(Size::new(800.0, 600.0));
//! let layer = Layer::new();
//! // A 50x50 badge 10px from the bottom-right corner.
//! let mut badge = SceneObject::from_rect(Rect::new(740.0, 540.0, 790.0, 590.0));
//!
//! let config = EdgeAnchorConfig::default()
//!     .with_horizontal(HorizontalAnchor::WindowRight, HorizontalAnchor::WindowRight)
//!     .with_vertical(VerticalAnchor::WindowBottom, VerticalAnchor::WindowBottom);
//! let mut anchor = EdgeAnchor::new(config);
//!
//! // First step records the distances.
//! anchor.step(&window, &layer, &mut badge);
//!
//! // After a resize, the badge follows the corner.
//! window.resize(Size::new(1024.0, 768.0));
//! anchor.step(&window, &layer, &mut badge);
//! assert_eq!(badge.bounds(), Rect::new(964.0, 708.0, 1014.0, 758.0));
//! ```
//!
//! ## Reconfiguration
//!
//! [`EdgeAnchor::reconfigure`] patches anchor modes and the policy in place and
//! returns [`Reconfigured::Updated`]. Changing
//! [`EdgeAnchorConfig::relative_to_original_window_size`] changes the unit
//! basis of the cached distances; it returns [`Reconfigured::RequiresRecreate`]
//! and the caller must build a new instance.
//!
//! ## Known edge cases
//!
//! - A zero viewport extent makes proportional distances non-finite; the
//!   values propagate into the object's geometry unchanged.
//! - After a live mode edit, the next step replays distances measured under
//!   the previous modes until the anchor is reactivated.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//! - `serde` (default): decode [`EdgeAnchorConfig`] from behavior data.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod config;
mod distances;
mod host;
mod layer;
mod modes;
mod object;
mod reapply;
pub mod trace;
mod window;

pub use anchor::{AnchorState, BEHAVIOR_TYPE, EdgeAnchor, EdgeAnchorDebugInfo, StepOutcome};
pub use config::{EdgeAnchorConfig, Reconfigured};
pub use distances::{DistanceCache, EdgeDistances};
pub use host::{AnchoredObject, CoordinateTransform, ViewportSize};
pub use layer::Layer;
pub use modes::{AnchorMode, HorizontalAnchor, VerticalAnchor};
pub use object::{Origin, SceneObject};
pub use reapply::{AnchoredEdges, EdgeTargets, ResizePolicy, apply_legacy, apply_modern};
pub use trace::{AnchorEvent, AnchorTrace, StepRecorder};
pub use window::GameWindow;
