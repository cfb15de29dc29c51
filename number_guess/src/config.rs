//! Difficulty presets and range/attempts resolution.

use log::warn;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::{ConfigError, ConfigResult};

/// Difficulty presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 1..=10, 5 attempts
    Easy,
    /// 1..=100, 10 attempts
    #[default]
    Medium,
    /// 1..=1000, 15 attempts
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Preset `(low, high, max_attempts)` for this difficulty.
    #[must_use]
    pub const fn preset(self) -> GameConfig {
        match self {
            Difficulty::Easy => GameConfig {
                low: 1,
                high: 10,
                max_attempts: 5,
            },
            Difficulty::Medium => GameConfig {
                low: 1,
                high: 100,
                max_attempts: 10,
            },
            Difficulty::Hard => GameConfig {
                low: 1,
                high: 1000,
                max_attempts: 15,
            },
        }
    }

    /// Look up a label, falling back to [`Difficulty::Medium`] for anything unknown.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            warn!("unknown difficulty {label:?}, using {}", Difficulty::Medium);
            Difficulty::Medium
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Error returned when a label is not one of `easy`, `medium`, `hard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty '{}' (choose from easy, medium, hard)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

/// Validated range and attempt ceiling for one session.
///
/// Always satisfies `low < high` and `max_attempts > 0`. Deserialization
/// goes through [`GameConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    low: i64,
    high: i64,
    max_attempts: u32,
}

impl GameConfig {
    /// Validate a raw `(low, high, max_attempts)` triple.
    pub fn new(low: i64, high: i64, max_attempts: i64) -> ConfigResult<Self> {
        if low >= high {
            return Err(ConfigError::InvalidRange { low, high });
        }

        if max_attempts <= 0 {
            return Err(ConfigError::NonPositiveAttempts(max_attempts));
        }

        let max_attempts = u32::try_from(max_attempts)
            .map_err(|_| ConfigError::TooManyAttempts(max_attempts))?;

        Ok(Self {
            low,
            high,
            max_attempts,
        })
    }

    #[must_use]
    pub const fn low(&self) -> i64 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> i64 {
        self.high
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether `n` lies in `[low, high]`.
    #[must_use]
    pub const fn contains(&self, n: i64) -> bool {
        self.low <= n && n <= self.high
    }
}

/// Unvalidated wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    low: i64,
    high: i64,
    max_attempts: i64,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> ConfigResult<Self> {
        GameConfig::new(raw.low, raw.high, raw.max_attempts)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().preset()
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.preset()
    }
}

/// Resolve the effective configuration for a difficulty label and optional overrides.
///
/// Unknown labels fall back to the `medium` preset. Each override replaces the
/// matching preset value before validation.
///
/// # Examples
///
/// ```
/// use number_guess::config::resolve;
///
/// let config = resolve("medium", Some(5), None, None).unwrap();
/// assert_eq!((config.low(), config.high(), config.max_attempts()), (5, 100, 10));
///
/// assert!(resolve("medium", Some(50), Some(10), None).is_err());
/// ```
pub fn resolve(
    difficulty: &str,
    low: Option<i64>,
    high: Option<i64>,
    max_attempts: Option<i64>,
) -> ConfigResult<GameConfig> {
    resolve_preset(Difficulty::from_label(difficulty), low, high, max_attempts)
}

/// [`resolve`] for an already-parsed difficulty.
pub fn resolve_preset(
    difficulty: Difficulty,
    low: Option<i64>,
    high: Option<i64>,
    max_attempts: Option<i64>,
) -> ConfigResult<GameConfig> {
    let preset = difficulty.preset();

    GameConfig::new(
        low.unwrap_or(preset.low),
        high.unwrap_or(preset.high),
        max_attempts.unwrap_or_else(|| i64::from(preset.max_attempts)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for difficulty in Difficulty::ALL {
            let preset = difficulty.preset();
            let revalidated = GameConfig::new(
                preset.low(),
                preset.high(),
                i64::from(preset.max_attempts()),
            );
            assert_eq!(revalidated, Ok(preset), "{difficulty} preset must validate");
        }
    }

    #[test]
    fn test_resolve_easy_preset() {
        let config = resolve("easy", None, None, None).unwrap();
        assert_eq!(config.low(), 1);
        assert_eq!(config.high(), 10);
        assert_eq!(config.max_attempts(), 5);
    }

    #[test]
    fn test_resolve_hard_preset() {
        let config = resolve("hard", None, None, None).unwrap();
        assert_eq!(config, GameConfig::from(Difficulty::Hard));
        assert_eq!(config.high(), 1000);
        assert_eq!(config.max_attempts(), 15);
    }

    #[test]
    fn test_resolve_low_override() {
        let config = resolve("medium", Some(5), None, None).unwrap();
        assert_eq!(
            (config.low(), config.high(), config.max_attempts()),
            (5, 100, 10)
        );
    }

    #[test]
    fn test_resolve_all_overrides() {
        let config = resolve("easy", Some(-20), Some(20), Some(3)).unwrap();
        assert_eq!(
            (config.low(), config.high(), config.max_attempts()),
            (-20, 20, 3)
        );
    }

    #[test]
    fn test_unknown_label_falls_back_to_medium() {
        assert_eq!(
            resolve("impossible", None, None, None).unwrap(),
            Difficulty::Medium.preset()
        );
        assert_eq!(Difficulty::from_label("EASY"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
    }

    #[test]
    fn test_resolve_preset_matches_label() {
        for difficulty in Difficulty::ALL {
            assert_eq!(
                resolve_preset(difficulty, None, Some(5000), Some(2)),
                resolve(&difficulty.to_string(), None, Some(5000), Some(2))
            );
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            resolve("medium", Some(50), Some(10), None),
            Err(ConfigError::InvalidRange { low: 50, high: 10 })
        );
    }

    #[test]
    fn test_equal_bounds_rejected() {
        assert_eq!(
            resolve("easy", Some(10), None, None),
            Err(ConfigError::InvalidRange { low: 10, high: 10 })
        );
    }

    #[test]
    fn test_override_can_break_preset_range() {
        // low above the easy preset's high bound
        assert!(matches!(
            resolve("easy", Some(11), None, None),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_non_positive_attempts_rejected() {
        assert_eq!(
            resolve("medium", None, None, Some(0)),
            Err(ConfigError::NonPositiveAttempts(0))
        );
        assert_eq!(
            resolve("medium", None, None, Some(-3)),
            Err(ConfigError::NonPositiveAttempts(-3))
        );
    }

    #[test]
    fn test_range_checked_before_attempts() {
        assert!(matches!(
            resolve("medium", Some(9), Some(1), Some(0)),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_oversized_attempts_rejected() {
        let too_many = i64::from(u32::MAX) + 1;
        assert_eq!(
            GameConfig::new(1, 10, too_many),
            Err(ConfigError::TooManyAttempts(too_many))
        );
    }

    #[test]
    fn test_difficulty_parse_and_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(UnknownDifficulty("extreme".to_string()))
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let config: GameConfig =
            serde_json::from_str(r#"{"low":-5,"high":5,"max_attempts":3}"#).unwrap();
        assert_eq!(config, GameConfig::new(-5, 5, 3).unwrap());

        let inverted = serde_json::from_str::<GameConfig>(r#"{"low":50,"high":10,"max_attempts":0}"#);
        assert!(inverted.is_err());

        let no_attempts = serde_json::from_str::<GameConfig>(r#"{"low":1,"high":10,"max_attempts":0}"#);
        assert!(no_attempts.is_err());
    }

    #[test]
    fn test_serialize_round_trips_through_validation() {
        let config = Difficulty::Hard.preset();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"low":1,"high":1000,"max_attempts":15}"#);
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let config = GameConfig::new(1, 10, 5).unwrap();
        assert!(config.contains(1));
        assert!(config.contains(10));
        assert!(!config.contains(0));
        assert!(!config.contains(11));
    }
}
