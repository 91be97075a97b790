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

//! Meeting-session view-state machine.
//!
//! Given a call's external state (existence, membership, scheduled start,
//! end time), the caller's identity, and two pieces of local state (setup
//! completion and transport connection state), derive which screen the
//! meeting page presents. The derivation is pure: the UI component owns the
//! inputs, re-runs [`SessionView::phase`] on every input change, and renders
//! the result.

use chrono::{DateTime, Utc};

use crate::call::{CallInfo, CallType};

/// The screen the meeting page presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Call data or identity is still loading.
    Loading,
    /// No call resource resolves for the requested id.
    NotFound,
    /// The call is restricted and the caller is not a member.
    Forbidden,
    /// The call has a recorded end time. Terminal.
    Ended,
    /// The call is scheduled to start in the future.
    UpcomingScheduled,
    /// Device preview / permission screen, before the user pressed Join.
    Setup,
    /// Join was requested; the transport has not reported joined yet.
    ConnectingToCall,
    /// The transport reports the call as joined.
    InCall,
}

/// Transport-layer connection state, as pushed by the video service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No join has been requested yet.
    Created,
    Connecting,
    /// Joined, in the call.
    Connected,
    Disconnected,
}

/// Result of resolving the requested call id against the video service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallLookup {
    Loading,
    /// The service answered: no such call.
    Missing,
    Found(CallInfo),
}

/// The caller's identity as seen by the session.
///
/// Guests count as "identity absent" for membership checks: a restricted
/// call admits authenticated members only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIdentity {
    Loading,
    Anonymous,
    Principal { user_id: String },
}

/// All inputs of the view-state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub call: CallLookup,
    pub identity: SessionIdentity,
    /// Device permissions granted and the user pressed Join.
    pub setup_complete: bool,
    pub connection: ConnectionState,
}

impl SessionView {
    /// Initial state: everything loading, nothing joined.
    pub fn new() -> Self {
        Self {
            call: CallLookup::Loading,
            identity: SessionIdentity::Loading,
            setup_complete: false,
            connection: ConnectionState::Created,
        }
    }

    /// Derive the phase to present. Rules are evaluated in priority order;
    /// the first match wins.
    pub fn phase(&self, now: DateTime<Utc>) -> SessionPhase {
        let call = match (&self.call, &self.identity) {
            (CallLookup::Loading, _) | (_, SessionIdentity::Loading) => {
                return SessionPhase::Loading
            }
            (CallLookup::Missing, _) => return SessionPhase::NotFound,
            (CallLookup::Found(call), _) => call,
        };

        if call.call_type == CallType::Restricted && !self.is_member(call) {
            return SessionPhase::Forbidden;
        }

        if call.ended_at.is_some() {
            return SessionPhase::Ended;
        }

        // Strictly in the future: a start time equal to `now` has started.
        if call.starts_at.is_some_and(|starts_at| starts_at > now) {
            return SessionPhase::UpcomingScheduled;
        }

        if !self.setup_complete {
            return SessionPhase::Setup;
        }

        if self.connection != ConnectionState::Connected {
            return SessionPhase::ConnectingToCall;
        }

        SessionPhase::InCall
    }

    fn is_member(&self, call: &CallInfo) -> bool {
        match &self.identity {
            SessionIdentity::Principal { user_id } => call.has_member(user_id),
            SessionIdentity::Loading | SessionIdentity::Anonymous => false,
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{assemble_members, CallCustom};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn open_call() -> CallInfo {
        CallInfo {
            id: "call-1".to_string(),
            call_type: CallType::Open,
            starts_at: None,
            ended_at: None,
            custom: CallCustom::default(),
            members: Vec::new(),
        }
    }

    fn restricted_call(member_ids: &[&str]) -> CallInfo {
        let ids = member_ids.iter().map(|s| s.to_string()).collect();
        CallInfo {
            call_type: CallType::Restricted,
            members: assemble_members(ids, "creator"),
            ..open_call()
        }
    }

    fn view(call: CallInfo) -> SessionView {
        SessionView {
            call: CallLookup::Found(call),
            identity: SessionIdentity::Anonymous,
            setup_complete: false,
            connection: ConnectionState::Created,
        }
    }

    #[test]
    fn loading_call_wins_over_everything() {
        let mut v = SessionView::new();
        v.identity = SessionIdentity::Anonymous;
        v.setup_complete = true;
        v.connection = ConnectionState::Connected;
        assert_eq!(v.phase(now()), SessionPhase::Loading);
    }

    #[test]
    fn loading_identity_wins_over_found_call() {
        let mut v = view(open_call());
        v.identity = SessionIdentity::Loading;
        assert_eq!(v.phase(now()), SessionPhase::Loading);
    }

    #[test]
    fn missing_call_is_not_found() {
        let mut v = SessionView::new();
        v.call = CallLookup::Missing;
        v.identity = SessionIdentity::Anonymous;
        assert_eq!(v.phase(now()), SessionPhase::NotFound);
    }

    #[test]
    fn open_call_with_incomplete_setup_is_setup() {
        // loading=false, found, open, end=None, start=None, setup=false.
        assert_eq!(view(open_call()).phase(now()), SessionPhase::Setup);
    }

    #[test]
    fn ended_wins_regardless_of_other_fields() {
        let mut call = open_call();
        call.ended_at = Some(now());
        call.starts_at = Some(now() + chrono::Duration::hours(1));
        let mut v = view(call);
        v.setup_complete = true;
        v.connection = ConnectionState::Connected;
        assert_eq!(v.phase(now()), SessionPhase::Ended);
    }

    #[test]
    fn anonymous_caller_on_restricted_call_is_forbidden() {
        let mut v = view(restricted_call(&["user_a"]));
        v.setup_complete = true;
        assert_eq!(v.phase(now()), SessionPhase::Forbidden);
    }

    #[test]
    fn non_member_principal_on_restricted_call_is_forbidden() {
        let mut v = view(restricted_call(&["user_a"]));
        v.identity = SessionIdentity::Principal {
            user_id: "user_b".to_string(),
        };
        assert_eq!(v.phase(now()), SessionPhase::Forbidden);
    }

    #[test]
    fn member_principal_on_restricted_call_reaches_setup() {
        let mut v = view(restricted_call(&["user_a"]));
        v.identity = SessionIdentity::Principal {
            user_id: "user_a".to_string(),
        };
        assert_eq!(v.phase(now()), SessionPhase::Setup);
    }

    #[test]
    fn forbidden_wins_over_ended() {
        let mut call = restricted_call(&["user_a"]);
        call.ended_at = Some(now());
        assert_eq!(view(call).phase(now()), SessionPhase::Forbidden);
    }

    #[test]
    fn future_start_is_upcoming() {
        let mut call = open_call();
        call.starts_at = Some(now() + chrono::Duration::minutes(5));
        assert_eq!(view(call).phase(now()), SessionPhase::UpcomingScheduled);
    }

    #[test]
    fn start_time_equal_to_now_is_not_upcoming() {
        let mut call = open_call();
        call.starts_at = Some(now());
        assert_eq!(view(call).phase(now()), SessionPhase::Setup);
    }

    #[test]
    fn past_start_is_not_upcoming() {
        let mut call = open_call();
        call.starts_at = Some(now() - chrono::Duration::minutes(5));
        assert_eq!(view(call).phase(now()), SessionPhase::Setup);
    }

    #[test]
    fn setup_complete_but_not_connected_is_connecting() {
        for connection in [
            ConnectionState::Created,
            ConnectionState::Connecting,
            ConnectionState::Disconnected,
        ] {
            let mut v = view(open_call());
            v.setup_complete = true;
            v.connection = connection;
            assert_eq!(v.phase(now()), SessionPhase::ConnectingToCall);
        }
    }

    #[test]
    fn setup_complete_and_connected_is_in_call() {
        let mut v = view(open_call());
        v.setup_complete = true;
        v.connection = ConnectionState::Connected;
        assert_eq!(v.phase(now()), SessionPhase::InCall);
    }

    #[test]
    fn guest_can_reach_setup_on_open_call() {
        let mut v = view(open_call());
        v.identity = SessionIdentity::Anonymous;
        assert_eq!(v.phase(now()), SessionPhase::Setup);
    }
}
