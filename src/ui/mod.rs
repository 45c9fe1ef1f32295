// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each takes
//! a borrowed `ViewContext` and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! # Views
//!
//! - [`header`] - Title bar with language and theme controls
//! - [`hero`] - Introductory heading
//! - [`upload`] - Drop zone, file selection and analyze controls
//! - [`results`] - Nutrition breakdown of the analyzed dish
//! - [`footer`] - Tagline and badges
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, progress bars)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod hero;
pub mod notifications;
pub mod results;
pub mod styles;
pub mod theming;
pub mod upload;
