/*
 * Copyright 2025 Huddle Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Huddle actions backend library.
//!
//! This crate provides the Axum router, application state, and configuration
//! for the actions the front-end cannot perform itself: signing call access
//! tokens with the video-service secret and querying the identity provider's
//! user directory. The binary entry point (`main.rs`) is a thin wrapper that
//! calls into this library.

pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod routes;
pub mod state;
pub mod token;
