//! Inbound host messages
//!
//! The host page posts `{ type: "H5P_SCORE_RESULT", score, maxScore }`.
//! Anything else (other types, missing fields, non-objects) is ignored.

use serde::Deserialize;

use super::frame::FrameController;
use crate::sim::{ScoreUpdate, WidgetState};

/// Messages the widget understands, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    #[serde(rename = "H5P_SCORE_RESULT")]
    ScoreResult {
        score: f64,
        #[serde(rename = "maxScore")]
        max_score: f64,
    },
    /// Any other `type`; ignored
    #[serde(other)]
    Other,
}

impl HostMessage {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn score_update(&self) -> Option<ScoreUpdate> {
        match *self {
            HostMessage::ScoreResult { score, max_score } => Some(ScoreUpdate { score, max_score }),
            HostMessage::Other => None,
        }
    }
}

/// Decode a message payload (JSON text) and apply it.
///
/// Returns true when a score update was applied; the frame loop has then
/// been asked to start.
pub fn handle_message<F: FrameController + ?Sized>(
    json: &str,
    state: &mut WidgetState,
    frame: &mut F,
) -> bool {
    let message = match HostMessage::parse(json) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("ignoring malformed message: {}", e);
            return false;
        }
    };

    match message.score_update() {
        Some(update) => {
            state.receive(update, frame);
            true
        }
        None => {
            log::debug!("ignoring message of another type");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameSwitch;
    use crate::settings::Settings;
    use crate::sim::ScoreState;

    fn state() -> WidgetState {
        WidgetState::new(1, Settings::default())
    }

    #[test]
    fn test_parse_score_result() {
        let msg = HostMessage::parse(r#"{"type":"H5P_SCORE_RESULT","score":8,"maxScore":10}"#)
            .unwrap();
        assert_eq!(
            msg.score_update(),
            Some(ScoreUpdate {
                score: 8.0,
                max_score: 10.0
            })
        );
    }

    #[test]
    fn test_message_type_constant_matches_tag() {
        let payload = serde_json::json!({
            "type": crate::consts::SCORE_MESSAGE_TYPE,
            "score": 4,
            "maxScore": 5,
        });
        let msg = HostMessage::parse(&payload.to_string()).unwrap();
        assert_eq!(
            msg,
            HostMessage::ScoreResult {
                score: 4.0,
                max_score: 5.0
            }
        );
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let msg = HostMessage::parse(
            r#"{"type":"H5P_SCORE_RESULT","score":3.5,"maxScore":4,"source":"quiz"}"#,
        )
        .unwrap();
        assert!(msg.score_update().is_some());
    }

    #[test]
    fn test_parse_other_type() {
        let msg = HostMessage::parse(r#"{"type":"RESIZE","height":300}"#).unwrap();
        assert_eq!(msg, HostMessage::Other);
        assert_eq!(msg.score_update(), None);
    }

    #[test]
    fn test_handle_applies_and_starts_loop() {
        let mut state = state();
        let mut frame = FrameSwitch::new();
        let json = r#"{"type":"H5P_SCORE_RESULT","score":95,"maxScore":100}"#;

        assert!(handle_message(json, &mut state, &mut frame));
        assert_eq!(state.score.final_score, 95.0);
        assert_eq!(state.score.max_score, 100.0);
        assert!(frame.is_running());
        assert!(frame.take_wake());
    }

    #[test]
    fn test_handle_ignores_invalid() {
        let mut state = state();
        let mut frame = FrameSwitch::new();
        let ignored = [
            r#"{"type":"OTHER","score":1,"maxScore":2}"#,
            r#"{"score":1,"maxScore":2}"#,
            r#"{"type":"H5P_SCORE_RESULT","score":"high","maxScore":2}"#,
            r#"{"type":"H5P_SCORE_RESULT","score":1}"#,
            r#""H5P_SCORE_RESULT""#,
            "null",
            "not json",
        ];

        for json in ignored {
            assert!(!handle_message(json, &mut state, &mut frame), "{json}");
        }
        assert_eq!(state.score, ScoreState::new());
        assert!(!frame.is_running());
    }

    #[test]
    fn test_handle_repeated_message_idempotent() {
        let mut state = state();
        let mut frame = FrameSwitch::new();
        let json = r#"{"type":"H5P_SCORE_RESULT","score":7,"maxScore":9}"#;

        handle_message(json, &mut state, &mut frame);
        let first = state.score;
        for _ in 0..5 {
            handle_message(json, &mut state, &mut frame);
        }
        assert_eq!(state.score, first);
        assert!(frame.take_wake());
        assert!(!frame.take_wake());
    }

    #[test]
    fn test_negative_and_over_max_accepted() {
        let mut state = state();
        let mut frame = FrameSwitch::new();
        assert!(handle_message(
            r#"{"type":"H5P_SCORE_RESULT","score":-3,"maxScore":10}"#,
            &mut state,
            &mut frame
        ));
        assert_eq!(state.score.final_score, -3.0);
        assert!(handle_message(
            r#"{"type":"H5P_SCORE_RESULT","score":30,"maxScore":10}"#,
            &mut state,
            &mut frame
        ));
        assert_eq!(state.score.final_score, 30.0);
    }
}
