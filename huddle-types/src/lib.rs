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

//! Shared API types and session logic for the Huddle front-end.
//!
//! This crate defines the contract between the Huddle UI, the actions
//! backend, and the external video service, plus the meeting-session
//! view-state machine. It is intentionally framework-agnostic — no Yew,
//! no Axum, no HTTP client.

pub mod call;
pub mod error;
pub mod requests;
pub mod responses;
pub mod session;
pub mod token;

pub use call::{CallInfo, CallMember, CallType};
pub use error::ApiError;
pub use responses::ApiResponse;
pub use session::{ConnectionState, SessionPhase, SessionView};
pub use token::CallAccessTokenClaims;
