//! Widget settings
//!
//! Read from the canvas element's `data-settings` attribute (JSON) on the web.

use serde::{Deserialize, Serialize};

use crate::consts::FIREWORK_SPAWN_CHANCE;
use crate::sim::SpawnPolicy;

/// Language of the on-canvas messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    English,
    TraditionalChinese,
}

/// On-canvas message strings for one locale
#[derive(Debug)]
pub struct Labels {
    pub top: &'static str,
    pub mid: &'static str,
    pub low: &'static str,
    /// Shown before any score has arrived
    pub waiting: &'static str,
    /// Prefix for the received score when it earns no tier
    pub final_score: &'static str,
    /// Prefix for the score line under the tier message
    pub score: &'static str,
}

const ENGLISH: Labels = Labels {
    top: "Congratulations! Excellent result!",
    mid: "Good result, keep it up.",
    low: "Needs more effort!",
    waiting: "Waiting for score...",
    final_score: "Final score:",
    score: "Score:",
};

const TRADITIONAL_CHINESE: Labels = Labels {
    top: "恭喜！優異成績！",
    mid: "成績良好，請再接再厲。",
    low: "需要加強努力！",
    waiting: "等待成績中…",
    final_score: "最終成績分數:",
    score: "得分:",
};

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::TraditionalChinese => "zh-TW",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Some(Locale::English),
            "zh" | "zh-tw" | "zh-hant" | "traditionalchinese" => Some(Locale::TraditionalChinese),
            _ => None,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::TraditionalChinese => &TRADITIONAL_CHINESE,
        }
    }
}

impl Labels {
    /// `"Score: 8/10"`
    pub fn score_line(&self, score: f64, max_score: f64) -> String {
        format!("{} {}/{}", self.score, score, max_score)
    }

    /// `"Final score: 0/10"`
    pub fn final_score_line(&self, score: f64, max_score: f64) -> String {
        format!("{} {}/{}", self.final_score, score, max_score)
    }
}

/// Widget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    /// Canvas size as a fraction of the window
    pub canvas_scale: f64,
    /// Opacity of the night-sky wash applied every frame (lower = longer trails)
    pub trail_alpha: f32,
    /// Never launch fireworks
    pub reduced_motion: bool,
    /// Fixed RNG seed (clock-seeded when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            canvas_scale: 0.5,
            trail_alpha: 50.0 / 255.0,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Attribute on the canvas element holding the settings JSON
    pub const ATTRIBUTE: &'static str = "data-settings";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spawn policy used in the top tier
    pub fn spawn_policy(&self) -> SpawnPolicy {
        if self.reduced_motion {
            SpawnPolicy::Never
        } else {
            SpawnPolicy::Chance(FIREWORK_SPAWN_CHANCE)
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    /// Load settings from the canvas `data-settings` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        if let Some(json) = canvas.get_attribute(Self::ATTRIBUTE) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!(
                        "Loaded settings from {} (locale {})",
                        Self::ATTRIBUTE,
                        settings.locale.as_str()
                    );
                    return settings;
                }
                Err(e) => log::warn!("Invalid {}: {}", Self::ATTRIBUTE, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native: optional locale tag from the command line
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(locale: Option<&str>) -> Self {
        let mut settings = Self::default();
        match locale.map(|tag| (tag, Locale::parse(tag))) {
            Some((_, Some(locale))) => settings.locale = locale,
            Some((tag, None)) => log::warn!("Unknown locale {:?}, using default", tag),
            None => {}
        }
        log::info!("Using locale {}", settings.locale.as_str());
        settings
    }
}
