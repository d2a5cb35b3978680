use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use slidekit_core::CarouselOptions;
use slidekit_model::Alignment;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Env var naming a TOML or JSON settings file.
pub const CONFIG_PATH_ENV: &str = "SLIDEKIT_CONFIG_PATH";
/// Env var holding inline JSON settings.
pub const CONFIG_JSON_ENV: &str = "SLIDEKIT_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "slidekit.toml",
    "slidekit.json",
    "config/slidekit.toml",
    "config/slidekit.json",
];

/// Source that produced the carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// On-disk form of [`CarouselOptions`]. Every field is optional in the file;
/// missing fields take the plain slider defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Pad the items with clones and loop seamlessly past either end.
    pub is_infinite: bool,
    /// Accept drag and swipe input. Leave unset to enable it whenever the
    /// carousel holds more than one item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_swipeable: Option<bool>,
    /// Step forward on a timer. Touching the carousel pauses the timer until
    /// the finger lifts.
    pub is_autoslide: bool,
    /// Delay between automatic steps, as a human readable duration
    /// (`"3500ms"`, `"3s 500ms"`).
    #[serde(with = "humantime_duration")]
    pub autoslide_interval: Duration,
    /// Release travel in pixels above which a drag commits a step. Lower
    /// values make the carousel twitchier on small screens.
    pub min_drag_transition_distance: f32,
    pub item_set_alignment: Alignment,
    /// Show `width / responsive_breakpoint` items per page instead of one.
    pub is_responsive: bool,
    pub responsive_breakpoint: f32,
    /// Clones per end in infinite mode. Defaults to the item set size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_depth: Option<usize>,
    pub show_dot_indicators: bool,
    pub show_buttons: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(CarouselOptions::default())
    }
}

impl From<CarouselOptions> for CarouselSettings {
    fn from(options: CarouselOptions) -> Self {
        Self {
            is_infinite: options.is_infinite,
            is_swipeable: options.is_swipeable,
            is_autoslide: options.is_autoslide,
            autoslide_interval: options.autoslide_interval,
            min_drag_transition_distance: options.min_drag_transition_distance,
            item_set_alignment: options.item_set_alignment,
            is_responsive: options.is_responsive,
            responsive_breakpoint: options.responsive_breakpoint,
            clone_depth: options.clone_depth,
            show_dot_indicators: options.show_dot_indicators,
            show_buttons: options.show_buttons,
        }
    }
}

impl CarouselSettings {
    /// Convert to runtime options, rejecting values the engine cannot use.
    pub fn into_options(self) -> slidekit_core::Result<CarouselOptions> {
        let options = CarouselOptions {
            is_infinite: self.is_infinite,
            is_swipeable: self.is_swipeable,
            is_autoslide: self.is_autoslide,
            autoslide_interval: self.autoslide_interval,
            min_drag_transition_distance: self.min_drag_transition_distance,
            item_set_alignment: self.item_set_alignment,
            is_responsive: self.is_responsive,
            responsive_breakpoint: self.responsive_breakpoint,
            clone_depth: self.clone_depth,
            show_dot_indicators: self.show_dot_indicators,
            show_buttons: self.show_buttons,
        };
        options.validate()?;
        Ok(options)
    }

    /// Resolve settings relative to the current directory. See
    /// [`Self::load_from_env_in`] for the lookup order.
    pub fn load_from_env() -> anyhow::Result<(Self, SettingsSource)> {
        Self::load_from_env_in(Path::new("."))
    }

    /// Resolve settings, first match wins:
    /// 1) the file named by `$SLIDEKIT_CONFIG_PATH`,
    /// 2) inline JSON in `$SLIDEKIT_CONFIG_JSON`,
    /// 3) the first of `slidekit.{toml,json}` and `config/slidekit.{toml,json}`
    ///    present under `base`,
    /// 4) defaults.
    pub fn load_from_env_in(
        base: &Path,
    ) -> anyhow::Result<(Self, SettingsSource)> {
        if let Some(path) = non_empty_var(CONFIG_PATH_ENV).map(PathBuf::from) {
            let settings = Self::load_from_file(&path)
                .with_context(|| format!("{CONFIG_PATH_ENV} points at unusable settings"))?;
            return Ok((settings, SettingsSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(CONFIG_JSON_ENV) {
            let settings = SettingsFormat::Json
                .parse(&raw)
                .with_context(|| format!("{CONFIG_JSON_ENV} holds unusable settings"))?;
            return Ok((settings, SettingsSource::EnvInline));
        }

        match DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| base.join(candidate))
            .find(|path| path.is_file())
        {
            Some(path) => {
                let settings = Self::load_from_file(&path)?;
                Ok((settings, SettingsSource::File(path)))
            }
            None => Ok((Self::default(), SettingsSource::Default)),
        }
    }

    /// Read a settings file. `.json` is JSON, `.toml` is TOML, anything else
    /// may be either.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("cannot open carousel settings file {}", path.display())
        })?;
        SettingsFormat::from_path(path)
            .parse(&contents)
            .with_context(|| format!("carousel settings file {} is malformed", path.display()))
    }

    /// Parse settings of unknown format; `origin` names the input in errors.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        SettingsFormat::Unknown
            .parse(contents)
            .with_context(|| format!("carousel settings from {origin} are malformed"))
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        SettingsFormat::Json.parse(raw)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("cannot render carousel settings as TOML")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Toml,
    Json,
    Unknown,
}

impl SettingsFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Unknown,
        }
    }

    fn parse(self, contents: &str) -> anyhow::Result<CarouselSettings> {
        match self {
            Self::Toml => toml::from_str(contents)
                .map_err(|err| anyhow!("not valid TOML settings: {err}")),
            Self::Json => serde_json::from_str(contents)
                .map_err(|err| anyhow!("not valid JSON settings: {err}")),
            Self::Unknown => Self::Toml.parse(contents).or_else(|as_toml| {
                Self::Json
                    .parse(contents)
                    .map_err(|as_json| anyhow!("{as_toml}; {as_json}"))
            }),
        }
    }
}

mod humantime_duration {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&humantime::format_duration(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine() {
        let options = CarouselSettings::default()
            .into_options()
            .expect("defaults validate");
        assert_eq!(options, CarouselOptions::default());
    }

    #[test]
    fn toml_fields_override_defaults() {
        let settings = CarouselSettings::parse_from_str(
            r#"
is_infinite = true
autoslide_interval = "2s 250ms"
item_set_alignment = "right"
clone_depth = 2
"#,
            "inline",
        )
        .expect("parse");
        assert!(settings.is_infinite);
        assert_eq!(settings.autoslide_interval, Duration::from_millis(2_250));
        assert_eq!(settings.item_set_alignment, Alignment::Right);
        assert_eq!(settings.clone_depth, Some(2));
        assert!(!settings.is_autoslide);
    }

    #[test]
    fn json_is_accepted_as_fallback() {
        let settings = CarouselSettings::parse_from_str(
            r#"{"is_autoslide": true, "autoslide_interval": "5s"}"#,
            "inline",
        )
        .expect("parse");
        assert!(settings.is_autoslide);
        assert_eq!(settings.autoslide_interval, Duration::from_secs(5));
    }

    #[test]
    fn negative_clone_depth_is_a_parse_error() {
        let err = CarouselSettings::parse_json(r#"{"clone_depth": -1}"#)
            .expect_err("negative depth");
        assert!(err.to_string().contains("not valid JSON settings"));
    }

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(
            SettingsFormat::from_path(Path::new("a/slidekit.TOML")),
            SettingsFormat::Toml
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("slidekit.json")),
            SettingsFormat::Json
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("slidekit")),
            SettingsFormat::Unknown
        );
    }

    #[test]
    fn unknown_format_reports_both_attempts() {
        let err = CarouselSettings::parse_from_str("{{", "stdin").expect_err("garbage");
        let message = format!("{err:#}");
        assert!(message.contains("stdin"));
        assert!(message.contains("not valid TOML settings"));
        assert!(message.contains("not valid JSON settings"));
    }

    #[test]
    fn unusable_values_fail_validation() {
        let settings = CarouselSettings {
            responsive_breakpoint: 0.0,
            ..CarouselSettings::default()
        };
        assert!(settings.into_options().is_err());
    }

    #[test]
    fn toml_rendering_parses_back() {
        let settings = CarouselSettings::from(CarouselOptions::banner_defaults());
        let rendered = settings.to_toml().expect("render");
        assert!(rendered.contains("autoslide_interval = \"3s 500ms\""));
        let parsed = CarouselSettings::parse_from_str(&rendered, "rendered")
            .expect("parse");
        assert_eq!(parsed, settings);
    }
}
