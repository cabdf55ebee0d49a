//! Terminal client for the Russian Flashcards web service.
//!
//! The interface is a set of full-screen views managed by a
//! [`registry::ViewRegistry`]: every transition resets all views and then
//! makes exactly one visible, so no screen ever carries input state over
//! from a previous visit.

pub mod api;
pub mod config;
pub mod keyboard;
pub mod logging;
pub mod registry;
pub mod session;
pub mod ui;
