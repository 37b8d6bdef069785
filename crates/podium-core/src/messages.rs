//! Inbound message types for the live channel.
//!
//! These mirror the server-side frame definitions. The discriminant is the
//! `type` field; unrecognized types deserialize to [`InboundMessage::Unknown`]
//! so new server message kinds never break an older client.

use serde::Deserialize;

/// A single structured update pushed over the live channel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Scores for a round changed; carries the full scoreboard payload.
    ScoreUpdate {
        /// Round the update applies to.
        round: u64,
        /// Arbitrary nested scoreboard data. The server may evolve its
        /// shape, so this stays a dynamic document.
        scores: serde_json::Value,
    },

    /// Free-form announcement from the organizers.
    Broadcast {
        /// Announcement text.
        text: String,
    },

    /// Any message type this client does not recognize. Dispatched as a
    /// no-op, never an error.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn score_update_deserialization() {
        let msg: InboundMessage =
            serde_json::from_str(r#"{"type":"score_update","round":3,"scores":{"teamA":10}}"#)
                .unwrap();
        assert_eq!(
            msg,
            InboundMessage::ScoreUpdate {
                round: 3,
                scores: json!({"teamA": 10}),
            }
        );
    }

    #[test]
    fn score_update_nested_scores() {
        let msg: InboundMessage = serde_json::from_str(
            r#"{"type":"score_update","round":1,"scores":{"teamA":{"solved":4,"penalty":120}}}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            InboundMessage::ScoreUpdate {
                round: 1,
                scores: json!({"teamA": {"solved": 4, "penalty": 120}}),
            }
        );
    }

    #[test]
    fn broadcast_deserialization() {
        let msg: InboundMessage =
            serde_json::from_str(r#"{"type":"broadcast","text":"Round 2 starts in 5 minutes"}"#)
                .unwrap();
        assert_eq!(
            msg,
            InboundMessage::Broadcast {
                text: "Round 2 starts in 5 minutes".to_string(),
            }
        );
    }

    #[test]
    fn unrecognized_type_maps_to_unknown() {
        let msg: InboundMessage =
            serde_json::from_str(r#"{"type":"leaderboard_reset","round":9}"#).unwrap();
        assert_eq!(msg, InboundMessage::Unknown);
    }

    #[test]
    fn missing_type_is_an_error() {
        let result = serde_json::from_str::<InboundMessage>(r#"{"round":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let result = serde_json::from_str::<InboundMessage>("not json at all");
        assert!(result.is_err());
    }
}
