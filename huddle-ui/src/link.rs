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

//! Invitation-link building.

use urlencoding::encode;

/// The shareable meeting link: `<base-url>/meeting/<call-id>`.
pub fn invitation_link(site_base_url: &str, call_id: &str) -> String {
    format!("{}/meeting/{call_id}", site_base_url.trim_end_matches('/'))
}

/// A `mailto:` composition link pre-filled with the meeting link, the
/// human-readable scheduled time (if any), and the description (if any).
/// Subject and body are URL-encoded; the description line is omitted when
/// no description was set.
pub fn mailto_invitation(
    meeting_link: &str,
    scheduled_at: Option<&str>,
    description: Option<&str>,
) -> String {
    let subject = match scheduled_at {
        Some(time) => format!("Join my meeting at {time}"),
        None => "Join my meeting".to_string(),
    };

    let mut body = format!("Join my meeting at {meeting_link}.");
    if let Some(time) = scheduled_at {
        body.push_str(&format!("\n\nThe meeting starts at {time}."));
    }
    if let Some(description) = description {
        body.push_str(&format!("\n\nDescription: {description}"));
    }

    format!("mailto:?subject={}&body={}", encode(&subject), encode(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invitation_link_joins_base_and_id() {
        assert_eq!(
            invitation_link("https://huddle.test", "abc-123"),
            "https://huddle.test/meeting/abc-123"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        assert_eq!(
            invitation_link("https://huddle.test/", "abc"),
            "https://huddle.test/meeting/abc"
        );
    }

    #[test]
    fn mailto_url_encodes_subject_and_body() {
        let link = mailto_invitation("https://huddle.test/meeting/a", None, None);
        assert!(link.starts_with("mailto:?subject=Join%20my%20meeting&body="));
        assert!(!link.contains(' '));
        assert!(link.contains("https%3A%2F%2Fhuddle.test%2Fmeeting%2Fa"));
    }

    #[test]
    fn description_line_is_omitted_when_unset() {
        let link = mailto_invitation("https://huddle.test/meeting/a", None, None);
        assert!(!link.contains(&encode("Description").to_string()));
    }

    #[test]
    fn description_line_is_present_when_set() {
        let link =
            mailto_invitation("https://huddle.test/meeting/a", None, Some("Weekly sync"));
        assert!(link.contains(&encode("Description: Weekly sync").to_string()));
    }

    #[test]
    fn scheduled_time_appears_in_subject_and_body() {
        let link = mailto_invitation(
            "https://huddle.test/meeting/a",
            Some("Monday, June 2, 2025, 9:00 AM"),
            None,
        );
        let encoded_time = encode("Monday, June 2, 2025, 9:00 AM").to_string();
        let subject_and_body: Vec<&str> = link.splitn(2, "&body=").collect();
        assert!(subject_and_body[0].contains(&encoded_time));
        assert!(subject_and_body[1].contains(&encoded_time));
    }
}
