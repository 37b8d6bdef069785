//! Inbound message dispatch.
//!
//! Maps one parsed [`InboundMessage`] to its UI side effect. Dispatch never
//! changes channel state and never fails: a malformed frame is dropped with
//! a warning, an unrecognized type is a forward-compatible no-op.

use podium_core::constants::NOTICE_PREFIX;
use podium_core::{DashboardPage, InboundMessage};

/// Parse a raw text frame and dispatch it.
///
/// Bad payloads are logged and dropped; the channel stays open.
pub fn dispatch_frame(raw: &str, page: &mut impl DashboardPage) {
    tracing::debug!(frame = raw, "live frame received");
    match serde_json::from_str::<InboundMessage>(raw) {
        Ok(message) => dispatch(&message, page),
        Err(e) => tracing::warn!("dropping malformed frame: {e}"),
    }
}

/// Apply one message to the dashboard surfaces.
pub fn dispatch(message: &InboundMessage, page: &mut impl DashboardPage) {
    match message {
        InboundMessage::ScoreUpdate { round, scores } => {
            page.set_status(&format!("Round {round} scores updated."));
            // Full replacement of the scoreboard region, pretty-printed at
            // the serializer's fixed 2-space indent.
            match serde_json::to_string_pretty(scores) {
                Ok(rendered) => page.set_scoreboard(&rendered),
                Err(e) => tracing::warn!("unrenderable scores payload: {e}"),
            }
        }
        InboundMessage::Broadcast { text } => {
            page.set_status(&format!("{NOTICE_PREFIX}{text}"));
        }
        InboundMessage::Unknown => {
            tracing::trace!("ignoring unrecognized message type");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct RecordingPage {
        statuses: Vec<String>,
        scoreboards: Vec<String>,
    }

    impl DashboardPage for RecordingPage {
        fn set_status(&mut self, text: &str) {
            self.statuses.push(text.to_string());
        }

        fn set_scoreboard(&mut self, rendered: &str) {
            self.scoreboards.push(rendered.to_string());
        }
    }

    #[test]
    fn score_update_sets_status_and_scoreboard() {
        let mut page = RecordingPage::default();

        dispatch_frame(
            r#"{"type":"score_update","round":3,"scores":{"teamA":10}}"#,
            &mut page,
        );

        assert_eq!(page.statuses, vec!["Round 3 scores updated.".to_string()]);
        assert_eq!(
            page.scoreboards,
            vec![serde_json::to_string_pretty(&json!({"teamA": 10})).unwrap()]
        );
    }

    #[test]
    fn score_update_rendering_is_two_space_indented() {
        let mut page = RecordingPage::default();

        dispatch_frame(
            r#"{"type":"score_update","round":1,"scores":{"teamA":10}}"#,
            &mut page,
        );

        assert_eq!(page.scoreboards, vec!["{\n  \"teamA\": 10\n}".to_string()]);
    }

    #[test]
    fn score_update_replaces_scoreboard_each_time() {
        let mut page = RecordingPage::default();

        dispatch_frame(
            r#"{"type":"score_update","round":1,"scores":{"teamA":1}}"#,
            &mut page,
        );
        dispatch_frame(
            r#"{"type":"score_update","round":2,"scores":{"teamA":5}}"#,
            &mut page,
        );

        assert_eq!(page.scoreboards.len(), 2);
        assert!(page.scoreboards[1].contains('5'));
    }

    #[test]
    fn broadcast_sets_prefixed_status_only() {
        let mut page = RecordingPage::default();

        dispatch_frame(
            r#"{"type":"broadcast","text":"Lunch break at noon"}"#,
            &mut page,
        );

        assert_eq!(
            page.statuses,
            vec!["Notice: Lunch break at noon".to_string()]
        );
        assert!(page.scoreboards.is_empty());
    }

    #[test]
    fn unknown_type_touches_nothing() {
        let mut page = RecordingPage::default();

        dispatch_frame(r#"{"type":"confetti","amount":9000}"#, &mut page);

        assert!(page.statuses.is_empty());
        assert!(page.scoreboards.is_empty());
    }

    #[test]
    fn malformed_frame_is_dropped_silently() {
        let mut page = RecordingPage::default();

        dispatch_frame("{not json", &mut page);
        dispatch_frame("", &mut page);
        dispatch_frame(r#"{"round":3}"#, &mut page);

        assert!(page.statuses.is_empty());
        assert!(page.scoreboards.is_empty());
    }
}
