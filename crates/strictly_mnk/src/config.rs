//! Game configuration and the configuration validator.

use crate::error::{ConfigError, ConfigErrorKind};
use crate::types::Axis;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Board size, fixed for the lifetime of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new,
)]
pub struct BoardDimensions {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
}

impl BoardDimensions {
    /// Total number of cells, or `None` if it cannot be allocated.
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .filter(|cells| isize::try_from(*cells).is_ok())
    }

    /// Total number of cells.
    ///
    /// Only meaningful for dimensions that passed [`validate`].
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The shorter side.
    pub fn smallest_side(&self) -> usize {
        self.width.min(self.height)
    }
}

/// Run lengths as supplied by the user, before normalization.
///
/// `anti_diagonal` is accepted for completeness but never honored; the
/// diagonal length drives both diagonal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct WinSettings {
    /// Required run along a row.
    horizontal: usize,
    /// Required run along a column.
    vertical: usize,
    /// Required run along either diagonal.
    diagonal: usize,
    /// Ignored in favor of `diagonal`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[new(default)]
    anti_diagonal: Option<usize>,
}

impl WinSettings {
    /// Same run length on every axis.
    pub fn uniform(length: usize) -> Self {
        Self::new(length, length, length)
    }

    /// Sets the (ignored) anti-diagonal value.
    pub fn with_anti_diagonal(mut self, length: usize) -> Self {
        self.anti_diagonal = Some(length);
        self
    }
}

/// Validated, normalized run lengths per axis.
///
/// Only [`validate`] produces this value, so every instance satisfies the
/// board-size constraint it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinRequirements {
    horizontal: usize,
    vertical: usize,
    diagonal: usize,
}

impl WinRequirements {
    /// Required exact run length along `axis`.
    pub fn required(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::Diagonal | Axis::AntiDiagonal => self.diagonal,
        }
    }

    /// Longest required run over all axes.
    pub fn longest(&self) -> usize {
        Axis::ALL
            .iter()
            .map(|axis| self.required(*axis))
            .max()
            .unwrap_or_default()
    }
}

/// Checks that the win lengths can be met on the board and normalizes them.
///
/// The anti-diagonal always takes the diagonal value. The caller's settings
/// are left untouched.
///
/// # Errors
///
/// Returns [`ConfigError`] if a dimension or a win length is zero, if the
/// cell count overflows, or if the longest win length exceeds the shorter
/// board side.
#[instrument]
pub fn validate(
    dimensions: BoardDimensions,
    settings: &WinSettings,
) -> Result<WinRequirements, ConfigError> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(ConfigError::new(ConfigErrorKind::ZeroDimension {
            width: dimensions.width,
            height: dimensions.height,
        }));
    }

    if dimensions.checked_cell_count().is_none() {
        return Err(ConfigError::new(ConfigErrorKind::BoardTooLarge {
            width: dimensions.width,
            height: dimensions.height,
        }));
    }

    if let Some(anti) = settings.anti_diagonal
        && anti != settings.diagonal
    {
        warn!(
            anti_diagonal = anti,
            diagonal = settings.diagonal,
            "Ignoring anti-diagonal win length; diagonal value applies to both"
        );
    }

    let requirements = WinRequirements {
        horizontal: settings.horizontal,
        vertical: settings.vertical,
        diagonal: settings.diagonal,
    };

    if let Some(axis) = Axis::ALL
        .into_iter()
        .find(|axis| requirements.required(*axis) == 0)
    {
        return Err(ConfigError::new(ConfigErrorKind::ZeroWinLength(axis)));
    }

    let required = requirements.longest();
    let smallest_side = dimensions.smallest_side();
    if required > smallest_side {
        return Err(ConfigError::new(ConfigErrorKind::WinLengthExceedsBoard {
            required,
            smallest_side,
        }));
    }

    debug!(?requirements, "Configuration validated");
    Ok(requirements)
}

/// Full game configuration, as read from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct GameConfig {
    /// Board size.
    dimensions: BoardDimensions,
    /// Run lengths.
    win: WinSettings,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(
            width = config.dimensions.width,
            height = config.dimensions.height,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Runs the validator over this configuration.
    pub fn validate(&self) -> Result<WinRequirements, ConfigError> {
        validate(self.dimensions, &self.win)
    }
}

impl Default for GameConfig {
    /// Five columns, seven rows, three in a row on every axis.
    fn default() -> Self {
        Self::new(BoardDimensions::new(5, 7), WinSettings::uniform(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board_validates() {
        let req = validate(BoardDimensions::new(3, 3), &WinSettings::uniform(3))
            .expect("3x3 with 3 in a row is valid");
        assert_eq!(req.required(Axis::Horizontal), 3);
        assert_eq!(req.longest(), 3);
    }

    #[test]
    fn test_win_length_bigger_than_board_rejected() {
        let err = validate(BoardDimensions::new(5, 3), &WinSettings::new(4, 3, 3))
            .expect_err("4 cannot fit in 3 rows");
        assert_eq!(
            err.kind,
            ConfigErrorKind::WinLengthExceedsBoard {
                required: 4,
                smallest_side: 3
            }
        );
    }

    #[test]
    fn test_anti_diagonal_follows_diagonal() {
        let settings = WinSettings::new(3, 3, 2).with_anti_diagonal(5);
        let req = validate(BoardDimensions::new(4, 4), &settings).expect("valid");
        assert_eq!(req.required(Axis::AntiDiagonal), 2);
        assert_eq!(req.required(Axis::Diagonal), 2);
        // Caller's value is not rewritten.
        assert_eq!(*settings.anti_diagonal(), Some(5));
    }

    #[test]
    fn test_zero_values_rejected() {
        let err = validate(BoardDimensions::new(0, 3), &WinSettings::uniform(1)).unwrap_err();
        assert!(matches!(err.kind, ConfigErrorKind::ZeroDimension { .. }));

        let err = validate(BoardDimensions::new(3, 3), &WinSettings::new(3, 0, 3)).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::ZeroWinLength(Axis::Vertical));
    }

    #[test]
    fn test_overflowing_board_rejected() {
        let err = validate(BoardDimensions::new(usize::MAX, 2), &WinSettings::uniform(2))
            .unwrap_err();
        assert_eq!(
            err.kind,
            ConfigErrorKind::BoardTooLarge {
                width: usize::MAX,
                height: 2
            }
        );
        assert_eq!(BoardDimensions::new(usize::MAX, 2).checked_cell_count(), None);
        assert_eq!(BoardDimensions::new(5, 7).checked_cell_count(), Some(35));
    }

    #[test]
    fn test_default_config_matches_reference_board() {
        let config = GameConfig::default();
        assert_eq!(config.dimensions().cell_count(), 35);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            [dimensions]
            width = 4
            height = 6

            [win]
            horizontal = 4
            vertical = 3
            diagonal = 2
            "#,
        )
        .expect("valid toml");
        assert_eq!(*config.dimensions(), BoardDimensions::new(4, 6));
        assert_eq!(*config.win().anti_diagonal(), None);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameConfig::from_toml_str("[dimensions]\nwidth = 4\n").unwrap_err();
        assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
    }
}
