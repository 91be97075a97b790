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

pub mod call_layout;
pub mod loading;
pub mod meeting_ended_overlay;
pub mod meeting_link;
pub mod navbar;
pub mod permission_prompt;
pub mod setup;
pub mod upcoming_meeting;
