//! Canvas engine for the sketch whiteboard.
//!
//! This crate owns the whole drawing surface lifecycle: translating raw pointer,
//! touch and wheel input into gestures, maintaining the scene of committed
//! elements, keeping the pan/zoom view state, and repainting everything through
//! a [`render::Surface`]. The host layer only wires DOM events to the engine and
//! reacts to the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Drawable elements and the append-only scene |
//! | [`camera`] | Points, touch geometry, pan/zoom view transform |
//! | [`input`] | Tools, themes, pointer events and the gesture state machine |
//! | [`render`] | Full-scene repaint through the `Surface` capability |
//! | [`web`] | `Surface` backed by a browser 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, zoom steps, defaults) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod render;
pub mod web;
