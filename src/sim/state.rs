//! Widget state owned by the frame loop

use super::fireworks::FireworksManager;
use super::score::{ScoreState, ScoreUpdate};
use crate::platform::FrameController;
use crate::settings::Settings;

/// Everything the per-frame tick reads and mutates
pub struct WidgetState {
    /// Written only by the message handler
    pub score: ScoreState,
    /// Read and mutated only by the tick
    pub fireworks: FireworksManager,
    pub settings: Settings,
}

impl WidgetState {
    /// Create the state; `settings.seed` overrides `seed` when present
    pub fn new(seed: u64, settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or(seed);
        Self {
            score: ScoreState::new(),
            fireworks: FireworksManager::new(seed, settings.spawn_policy()),
            settings,
        }
    }

    /// Record a host score and wake the frame loop
    pub fn receive<F: FrameController + ?Sized>(&mut self, update: ScoreUpdate, frame: &mut F) {
        self.score.apply(update);
        log::info!(
            "New score received: {}/{}",
            update.score,
            update.max_score
        );
        frame.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FrameSwitch;
    use crate::sim::SpawnPolicy;

    #[test]
    fn test_new_state() {
        let state = WidgetState::new(1, Settings::default());
        assert_eq!(state.score, ScoreState::new());
        assert!(state.fireworks.is_empty());
        assert_eq!(state.fireworks.policy(), SpawnPolicy::Chance(0.05));
    }

    #[test]
    fn test_receive_updates_and_wakes() {
        let mut state = WidgetState::new(1, Settings::default());
        let mut frame = FrameSwitch::new();
        let update = ScoreUpdate {
            score: 95.0,
            max_score: 100.0,
        };

        state.receive(update, &mut frame);
        assert_eq!(state.score.final_score, 95.0);
        assert_eq!(state.score.max_score, 100.0);
        assert!(frame.is_running());
        assert!(frame.take_wake());

        // Already running: no second wake
        state.receive(update, &mut frame);
        assert!(!frame.take_wake());
        assert_eq!(state.score.final_score, 95.0);
    }
}
