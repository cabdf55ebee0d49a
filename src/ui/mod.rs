pub mod app;
pub mod events;
pub mod form;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod status;
pub mod terminal_guard;
pub mod theme;
pub mod views;
