//! UI Module - egui integration and BrowserController
//!
//! `controller` turns widget events into state transitions (some of them
//! delayed through `threading`), `app` lays the panels out and `widgets`
//! paints the custom pieces.

pub mod app;
pub mod controller;
pub mod threading;
pub mod widgets;

pub use app::{AppUI, UIState};
pub use controller::BrowserController;
pub use threading::{EffectScheduler, FiredEffect, TimerChannel};
