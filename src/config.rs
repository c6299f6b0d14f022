use crate::error::{Error, Result};

/// How alerts repeat once a track is past the dwell threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertMode {
    /// Re-alert on every frame while the track stays past threshold.
    EveryFrame,
    /// Alert once per dwell episode, on the frame the threshold is crossed.
    OncePerEpisode,
}

/// How a detection is matched against the live tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// First track under the gate in creation order.
    FirstUnderGate,
    /// Nearest track under the gate; ties break by creation order.
    ClosestUnderGate,
}

/// Per-scene tracker settings.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Maximum centroid distance for a detection to join an existing
    /// track, in frame pixels.
    pub distance_gate: f32,
    /// Consecutive inside-frames a track must exceed before alerting.
    pub dwell_threshold: u32,
    pub alert_mode: AlertMode,
    pub match_policy: MatchPolicy,
    /// Consecutive unmatched frames after which a track is evicted.
    pub max_missed_frames: u32,
}

impl SceneConfig {
    pub fn new(dwell_threshold: u32) -> Self {
        Self {
            distance_gate: 50.0,
            dwell_threshold,
            alert_mode: AlertMode::EveryFrame,
            match_policy: MatchPolicy::ClosestUnderGate,
            max_missed_frames: 30,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.distance_gate.is_finite() && self.distance_gate > 0.) {
            return Err(Error::Config(format!(
                "distance_gate must be positive, got {}",
                self.distance_gate
            )));
        }

        if self.dwell_threshold == 0 {
            return Err(Error::Config(
                "dwell_threshold must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SceneConfig::new(30).validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = SceneConfig::new(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_gate_rejected() {
        let mut config = SceneConfig::new(5);
        config.distance_gate = 0.0;
        assert!(config.validate().is_err());

        config.distance_gate = f32::NAN;
        assert!(config.validate().is_err());
    }
}
