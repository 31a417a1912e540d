//! lingo: translate a piece of text into a chosen language.
//!
//! The crate is split the way the binary uses it: `catalog`, `fonts` and
//! `translation` are the domain, `controller` runs one translate cycle, and
//! `app`/`ui`/`tui` make up the terminal front end.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod event;
pub mod fonts;
pub mod logging;
pub mod translation;
pub mod tui;
pub mod ui;
