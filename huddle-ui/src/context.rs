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

//! Context types shared across the component tree.

use yew::prelude::*;

use crate::identity::Identity;
use crate::provider::VideoSession;

/// Identity context: `None` while the profile fetch is in flight.
///
/// `UseStateHandle` allows both read-only access (via deref) and mutation
/// by calling `.set(Some(identity))`.
pub type IdentityCtx = UseStateHandle<Option<Identity>>;

/// Video session context. The client provider renders its children only
/// once a session exists, so consumers below it can rely on the context
/// being present.
pub type VideoSessionCtx = VideoSession;
