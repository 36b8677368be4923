use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

use crate::carousel::slots::SlotRole;

pub const MIN_ITEM_COUNT: usize = 3;
pub const MIN_ANIMATION_DURATION: f64 = 0.1;
pub const MAX_ANIMATION_DURATION: f64 = 5.0;
pub const MIN_LAYOUT_RADIUS: f64 = 10.0;
pub const MAX_LAYOUT_RADIUS: f64 = 1000.0;
pub const MIN_ARC_SPAN_DEGREES: f64 = 30.0;
pub const MAX_ARC_SPAN_DEGREES: f64 = 360.0;
pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;

/// Compass anchors for the arc center, for configs that prefer words over
/// degrees. Angles follow the math convention: east is 0, north is 90.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CompassPoint {
    #[strum(serialize = "East", serialize = "e")]
    East,
    #[strum(serialize = "NorthEast", serialize = "ne")]
    NorthEast,
    #[strum(serialize = "North", serialize = "n")]
    North,
    #[strum(serialize = "NorthWest", serialize = "nw")]
    NorthWest,
    #[strum(serialize = "West", serialize = "w")]
    West,
    #[strum(serialize = "SouthWest", serialize = "sw")]
    SouthWest,
    #[strum(serialize = "South", serialize = "s")]
    South,
    #[strum(serialize = "SouthEast", serialize = "se")]
    SouthEast,
}

impl CompassPoint {
    pub fn angle_degrees(&self) -> f64 {
        *self as usize as f64 * 45.0
    }
}

/// Arc center angle, given either in degrees or as a compass point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ArcCenter {
    Degrees(f64),
    Compass(CompassPoint),
}

impl ArcCenter {
    pub fn degrees(&self) -> f64 {
        match self {
            Self::Degrees(d) => *d,
            Self::Compass(c) => c.angle_degrees(),
        }
    }
}

impl Default for ArcCenter {
    fn default() -> Self {
        Self::Degrees(0.0)
    }
}

/// Per-role item scales in the arc layout, plus the resting star scale.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct ItemScales {
    pub center: f64,
    pub adjacent: f64,
    pub normal: f64,
    pub default: f64,
}

impl Default for ItemScales {
    fn default() -> Self {
        Self {
            center: 1.3,
            adjacent: 1.0,
            normal: 0.85,
            default: 1.0,
        }
    }
}

impl ItemScales {
    pub fn for_role(&self, role: SlotRole) -> f64 {
        match role {
            SlotRole::Center => self.center,
            SlotRole::Adjacent => self.adjacent,
            SlotRole::Normal => self.normal,
        }
    }
}

/// Scales the central toggle button animates toward in each mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct ToggleButtonScales {
    pub star: f64,
    pub semicircle: f64,
}

impl Default for ToggleButtonScales {
    fn default() -> Self {
        Self {
            star: 0.8,
            semicircle: 1.25,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub item_count: usize,
    pub layout_radius: f64,
    pub arc_span_degrees: f64,
    pub arc_center: ArcCenter,
    /// Transition duration in seconds.
    pub animation_duration: f64,
    pub item_scales: ItemScales,
    pub toggle_button_scales: ToggleButtonScales,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_count: 5,
            layout_radius: 100.0,
            arc_span_degrees: 180.0,
            arc_center: ArcCenter::default(),
            animation_duration: 0.5,
            item_scales: ItemScales::default(),
            toggle_button_scales: ToggleButtonScales::default(),
        }
    }
}

impl CarouselConfig {
    pub fn arc_center_degrees(&self) -> f64 {
        self.arc_center.degrees()
    }

    /// Checks every configured bound once, at startup. Any violation keeps
    /// the widget from ever starting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_count < MIN_ITEM_COUNT {
            return Err(ConfigError::ItemCount {
                got: self.item_count,
            });
        }
        if !(MIN_ANIMATION_DURATION..=MAX_ANIMATION_DURATION).contains(&self.animation_duration) {
            return Err(ConfigError::AnimationDuration {
                got: self.animation_duration,
            });
        }
        if !(MIN_LAYOUT_RADIUS..=MAX_LAYOUT_RADIUS).contains(&self.layout_radius) {
            return Err(ConfigError::LayoutRadius {
                got: self.layout_radius,
            });
        }
        if !(MIN_ARC_SPAN_DEGREES..=MAX_ARC_SPAN_DEGREES).contains(&self.arc_span_degrees) {
            return Err(ConfigError::ArcSpan {
                got: self.arc_span_degrees,
            });
        }

        let item_scales = [
            ("center", self.item_scales.center),
            ("adjacent", self.item_scales.adjacent),
            ("normal", self.item_scales.normal),
            ("default", self.item_scales.default),
        ];
        for (name, got) in item_scales {
            if !(MIN_SCALE..=MAX_SCALE).contains(&got) {
                return Err(ConfigError::ItemScale { name, got });
            }
        }

        let toggle_scales = [
            ("star", self.toggle_button_scales.star),
            ("semicircle", self.toggle_button_scales.semicircle),
        ];
        for (name, got) in toggle_scales {
            if !(MIN_SCALE..=MAX_SCALE).contains(&got) {
                return Err(ConfigError::ToggleButtonScale { name, got });
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("carousel needs at least {MIN_ITEM_COUNT} items, got {got}")]
    ItemCount { got: usize },
    #[error(
        "animation duration {got}s outside [{}, {}]",
        MIN_ANIMATION_DURATION,
        MAX_ANIMATION_DURATION
    )]
    AnimationDuration { got: f64 },
    #[error("layout radius {got} outside [{}, {}]", MIN_LAYOUT_RADIUS, MAX_LAYOUT_RADIUS)]
    LayoutRadius { got: f64 },
    #[error(
        "arc span {got} degrees outside [{}, {}]",
        MIN_ARC_SPAN_DEGREES,
        MAX_ARC_SPAN_DEGREES
    )]
    ArcSpan { got: f64 },
    #[error("{name} item scale {got} outside [{}, {}]", MIN_SCALE, MAX_SCALE)]
    ItemScale { name: &'static str, got: f64 },
    #[error("{name} toggle button scale {got} outside [{}, {}]", MIN_SCALE, MAX_SCALE)]
    ToggleButtonScale { name: &'static str, got: f64 },
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "whorl").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<CarouselConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("WHORL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the session configuration, falling back to the built-in defaults
/// when no file is present or it fails to parse.
pub fn load_or_default() -> CarouselConfig {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("using default configuration: {}", e);
            CarouselConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_point_deserialization() {
        let cases = vec![
            ("\"north\"", CompassPoint::North),
            ("\"North\"", CompassPoint::North),
            ("\"NORTH\"", CompassPoint::North),
            ("\"n\"", CompassPoint::North),
            ("\"e\"", CompassPoint::East),
            ("\"sw\"", CompassPoint::SouthWest),
            ("\"NorthWest\"", CompassPoint::NorthWest),
        ];

        for (json, expected) in cases {
            let deserialized: CompassPoint = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn compass_points_map_to_angles() {
        assert_eq!(CompassPoint::East.angle_degrees(), 0.0);
        assert_eq!(CompassPoint::North.angle_degrees(), 90.0);
        assert_eq!(CompassPoint::West.angle_degrees(), 180.0);
        assert_eq!(CompassPoint::South.angle_degrees(), 270.0);
        assert_eq!(CompassPoint::NorthEast.angle_degrees(), 45.0);
    }

    #[test]
    fn arc_center_accepts_degrees_or_compass() {
        let by_degrees: ArcCenter = serde_json::from_str("135.0").unwrap();
        assert_eq!(by_degrees.degrees(), 135.0);

        let by_compass: ArcCenter = serde_json::from_str("\"nw\"").unwrap();
        assert_eq!(by_compass.degrees(), 135.0);
    }

    #[test]
    fn default_config_is_valid() {
        CarouselConfig::default().validate().unwrap();
    }

    #[test]
    fn embedded_default_file_matches_the_defaults() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let parsed: CarouselConfig = s.try_deserialize().unwrap();
        parsed.validate().unwrap();
        assert_eq!(parsed.item_count, CarouselConfig::default().item_count);
        assert_eq!(
            parsed.animation_duration,
            CarouselConfig::default().animation_duration
        );
    }

    #[test]
    fn validation_rejects_out_of_range_settings() {
        let mut config = CarouselConfig {
            item_count: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ItemCount { got: 2 })
        ));

        config = CarouselConfig {
            animation_duration: 9.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AnimationDuration { .. })
        ));

        config = CarouselConfig {
            layout_radius: 5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LayoutRadius { .. })
        ));

        config = CarouselConfig {
            arc_span_degrees: 10.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ArcSpan { .. })));

        config = CarouselConfig::default();
        config.item_scales.center = 9.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ItemScale {
                name: "center",
                ..
            })
        ));

        config = CarouselConfig::default();
        config.toggle_button_scales.semicircle = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ToggleButtonScale {
                name: "semicircle",
                ..
            })
        ));
    }
}
