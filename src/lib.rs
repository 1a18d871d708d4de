// SPDX-License-Identifier: MPL-2.0
//! `corner_preview` previews a photo of a room beneath a corner-window overlay.
//!
//! The user loads a background photo, drags it into place under either the
//! traditional or the open-corner overlay, and then saves the composite as a
//! PNG or submits it with contact details to a form endpoint.
//!
//! The interesting parts are UI-independent: [`preview`] holds the state and
//! its reducer, [`composition`] rasterizes and encodes the stage, and
//! [`submission`] talks to the endpoint. [`app`] wires them into an iced
//! application.

#![doc(html_root_url = "https://docs.rs/corner_preview/0.1.0")]

pub mod app;
pub mod composition;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod preview;
pub mod submission;
pub mod ui;
