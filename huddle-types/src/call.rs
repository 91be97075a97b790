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

//! Call domain types.
//!
//! A call is a resource owned entirely by the external video service; this
//! system only holds a transient `(type, id)` reference and consumes a small
//! subset of its attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The only membership role this system ever assigns.
pub const MEMBER_ROLE: &str = "member";

/// Access policy of a call, encoded in the call type path segment of the
/// video-service API.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    /// Anyone with the link can join.
    Open,
    /// Only listed members (and the creator) can join.
    Restricted,
}

impl CallType {
    /// A call is restricted iff a non-empty participant list was supplied.
    /// Decided on the supplied list, not on how many entries resolve.
    pub fn for_participants(participants: &[String]) -> Self {
        if participants.is_empty() {
            CallType::Open
        } else {
            CallType::Restricted
        }
    }

    /// The path segment used by the video-service API.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallType::Open => "open",
            CallType::Restricted => "restricted",
        }
    }
}

impl std::fmt::Display for CallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(user_id, role)` membership entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CallMember {
    pub user_id: String,
    pub role: String,
}

impl CallMember {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: MEMBER_ROLE.to_string(),
        }
    }
}

/// Free-form metadata attached to a call at creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct CallCustom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The subset of a call's state this front-end consumes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CallInfo {
    pub id: String,
    pub call_type: CallType,
    /// Scheduled start, or `None` for a call that started immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// Recorded end time. Presence means the call has ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom: CallCustom,
    #[serde(default)]
    pub members: Vec<CallMember>,
}

impl CallInfo {
    /// Whether the given user id appears in the membership list.
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }
}

/// Assemble the member list for a new call: the resolved participant ids
/// followed by the creator, deduplicated by user id (first occurrence wins).
///
/// Guarantees the invariant that a restricted call's membership always
/// includes its creator.
pub fn assemble_members(participant_ids: Vec<String>, creator_id: &str) -> Vec<CallMember> {
    let mut members: Vec<CallMember> = Vec::with_capacity(participant_ids.len() + 1);
    for id in participant_ids
        .into_iter()
        .chain(std::iter::once(creator_id.to_string()))
    {
        if !members.iter().any(|m| m.user_id == id) {
            members.push(CallMember::new(id));
        }
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_participant_list_means_open() {
        assert_eq!(CallType::for_participants(&[]), CallType::Open);
    }

    #[test]
    fn any_participant_means_restricted() {
        let ids = vec!["user_a".to_string()];
        assert_eq!(CallType::for_participants(&ids), CallType::Restricted);
    }

    #[test]
    fn members_are_deduplicated_by_user_id() {
        let ids = vec![
            "user_a".to_string(),
            "user_b".to_string(),
            "user_a".to_string(),
        ];
        let members = assemble_members(ids, "creator");
        let got: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(got, vec!["user_a", "user_b", "creator"]);
    }

    #[test]
    fn creator_listed_as_participant_appears_once() {
        let ids = vec!["creator".to_string(), "user_a".to_string()];
        let members = assemble_members(ids, "creator");
        let got: Vec<&str> = members.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(got, vec!["creator", "user_a"]);
    }

    #[test]
    fn creator_always_present_even_with_no_participants() {
        let members = assemble_members(Vec::new(), "creator");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].user_id, "creator");
        assert_eq!(members[0].role, MEMBER_ROLE);
    }

    #[test]
    fn every_member_gets_the_member_role() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let members = assemble_members(ids, "c");
        assert!(members.iter().all(|m| m.role == "member"));
    }

    #[test]
    fn call_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CallType::Restricted).unwrap(),
            "\"restricted\""
        );
        assert_eq!(serde_json::to_string(&CallType::Open).unwrap(), "\"open\"");
    }
}
