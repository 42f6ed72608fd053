#![forbid(unsafe_code)]

//! Terminal front-end for the Dhaalan 2025 expo.
//!
//! The binary wires the workspace crates together behind an Elm-style
//! model: `App` owns the locale and theme stores, the navigation
//! history, the mounted page, and the overlay surfaces; every side
//! effect leaves `update` as a [`runtime::Cmd`] and returns as a
//! message.

pub mod app;
pub mod chat;
pub mod overlays;
pub mod pages;
pub mod route;
pub mod runtime;
pub mod telemetry;

pub use app::{App, ChatLine, Fetched, Msg, Page};
pub use chat::{ChatError, ChatTransport, ScriptedTransport};
pub use route::Route;
pub use runtime::{Cmd, Model, Runtime};
pub use telemetry::Telemetry;
