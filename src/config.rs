//! contains the configuration of the picker: predefined ranges and selectable years

use chrono::{Datelike, Days, NaiveDate};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::calendar::{MAX_YEAR, MIN_YEAR};
use crate::presets::{PredefinedRange, RangeRule, default_ranges};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid year span {from}..={to}")]
    InvalidYears { from: i32, to: i32 },

    #[error("invalid predefined range {label:?}: {reason}")]
    InvalidRange { label: String, reason: String },
}

/// configuration root
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// years offered by the year selector
    #[serde(default)]
    pub years: Years,
    /// shortcuts shown below the calendar, in this order
    #[serde(default = "default_ranges")]
    pub ranges: Vec<PredefinedRange>,
}

/// inclusive span of years
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Years {
    pub from: i32,
    pub to: i32,
}

impl Default for Years {
    fn default() -> Self {
        Self {
            from: 2020,
            to: 2030,
        }
    }
}

impl Years {
    pub fn to_vec(&self) -> Vec<i32> {
        (self.from..=self.to).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            years: Years::default(),
            ranges: default_ranges(),
        }
    }
}

impl Config {
    fn validate(self) -> Result<Self, ConfigError> {
        let Years { from, to } = self.years;
        if from > to || from < MIN_YEAR || to > MAX_YEAR {
            return Err(ConfigError::InvalidYears { from, to });
        }

        // relative rules must resolve from the first selectable day
        let earliest = NaiveDate::from_ymd_opt(from, 1, 1)
            .ok_or(ConfigError::InvalidYears { from, to })?;

        for range in &self.ranges {
            let reason = if range.label.trim().is_empty() {
                Some("label is empty".to_string())
            } else {
                match &range.rule {
                    RangeRule::LastDays { days: 0 } => {
                        Some("days must be at least 1".to_string())
                    }
                    RangeRule::LastDays { days } => {
                        let start = earliest
                            .checked_sub_days(Days::new((*days).into()))
                            .filter(|start| start.year() >= MIN_YEAR);
                        match start {
                            Some(_) => None,
                            None => Some(format!(
                                "{days} days before {earliest} is before year {MIN_YEAR}"
                            )),
                        }
                    }
                    RangeRule::Fixed { start, end } if start > end => {
                        Some(format!("start {start} is after end {end}"))
                    }
                    _ => None,
                }
            };

            if let Some(reason) = reason {
                return Err(ConfigError::InvalidRange {
                    label: range.label.clone(),
                    reason,
                });
            }
        }

        Ok(self)
    }
}

/// parse and validate a Config from toml text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    config.validate()
}

/// load Config from a file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_load_config() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("test/config.toml");
        let config = load_config(path).expect("Failed to load config");

        assert_eq!(Years { from: 2020, to: 2030 }, config.years);
        assert_eq!(
            vec![
                PredefinedRange::new("Last 7 Days", RangeRule::LastDays { days: 7 }),
                PredefinedRange::new("Last 30 Days", RangeRule::LastDays { days: 30 }),
                PredefinedRange::new("This Month", RangeRule::ThisMonth),
                PredefinedRange::new("Previous Month", RangeRule::PreviousMonth),
                PredefinedRange::new(
                    "Summer Break",
                    RangeRule::Fixed {
                        start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                        end: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
                    }
                ),
            ],
            config.ranges
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(11, config.years.to_vec().len());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn rejects_unknown_rule() {
        let content = r#"
[[ranges]]
label = "Tomorrow"
rule = { kind = "tomorrow" }
"#;
        assert!(matches!(parse_config(content), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_reversed_years() {
        let content = "years = { from = 2030, to = 2020 }";
        assert!(matches!(
            parse_config(content),
            Err(ConfigError::InvalidYears {
                from: 2030,
                to: 2020
            })
        ));
    }

    #[test]
    fn rejects_invalid_ranges() {
        let content = r#"
[[ranges]]
label = " "
rule = { kind = "this_month" }
"#;
        assert!(matches!(
            parse_config(content),
            Err(ConfigError::InvalidRange { .. })
        ));

        let content = r#"
[[ranges]]
label = "Backwards"
rule = { kind = "fixed", start = "2024-06-16", end = "2024-06-03" }
"#;
        let err = parse_config(content).unwrap_err();
        assert_eq!(
            "invalid predefined range \"Backwards\": start 2024-06-16 is after end 2024-06-03",
            err.to_string()
        );
    }

    #[test]
    fn rejects_zero_last_days() {
        let content = r#"
[[ranges]]
label = "Today"
rule = { kind = "last_days", days = 0 }
"#;
        let err = parse_config(content).unwrap_err();
        assert_eq!(
            "invalid predefined range \"Today\": days must be at least 1",
            err.to_string()
        );
    }

    #[test]
    fn rejects_last_days_reaching_before_year_one() {
        let content = r#"
[[ranges]]
label = "Forever"
rule = { kind = "last_days", days = 1000000 }
"#;
        assert!(matches!(
            parse_config(content),
            Err(ConfigError::InvalidRange { label, .. }) if label == "Forever"
        ));

        // the same span fits when the selectable years start late enough
        let content = r#"
years = { from = 2900, to = 2910 }

[[ranges]]
label = "Forever"
rule = { kind = "last_days", days = 1000000 }
"#;
        let config = parse_config(content).unwrap();
        assert_eq!(
            Some(NaiveDate::from_ymd_opt(2900, 1, 1).unwrap()),
            config.ranges[0]
                .rule
                .resolve(NaiveDate::from_ymd_opt(2900, 1, 1).unwrap())
                .map(|range| range.end())
        );
    }
}
