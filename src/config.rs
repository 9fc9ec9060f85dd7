use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::consts::DISPLAY_SEPARATOR;
use crate::format::OutputFormat;
use crate::time::{ClockFormat, TimeStep};

/// Shared configuration for the picker widgets. Every field has the same
/// default the widgets ship with; embedders override only what they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Output format of selection callbacks
    pub format: OutputFormat,
    /// Separator used in display-formatted dates
    pub separator: char,
    /// Earliest selectable date (inclusive)
    pub min_date: Option<CalendarDate>,
    /// Latest selectable date (inclusive)
    pub max_date: Option<CalendarDate>,
    /// Hour display convention for time pickers
    pub time_format: ClockFormat,
    /// Selection granularity for time pickers
    pub time_step: TimeStep,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Simple,
            separator: DISPLAY_SEPARATOR,
            min_date: None,
            max_date: None,
            time_format: ClockFormat::H24,
            time_step: TimeStep::Seconds,
        }
    }
}

/// Color scheme passed through to the rendering layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Control sizing passed through to the rendering layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Input-field styling variant passed through to the rendering layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Outline,
    Filled,
    Ghost,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.format, OutputFormat::Simple);
        assert_eq!(config.separator, '/');
        assert_eq!(config.min_date, None);
        assert_eq!(config.max_date, None);
        assert_eq!(config.time_format, ClockFormat::H24);
        assert_eq!(config.time_step, TimeStep::Seconds);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: PickerConfig =
            serde_json::from_str(r#"{"format":"iso","min_date":"2025-01-01"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Iso);
        assert_eq!(config.min_date, Some(date(2025, 1, 1)));
        assert_eq!(config.separator, '/');
        assert_eq!(config.time_step, TimeStep::Seconds);
    }

    #[test]
    fn test_time_settings_deserialize_from_widget_strings() {
        let config: PickerConfig =
            serde_json::from_str(r#"{"time_format":"12","time_step":"60"}"#).unwrap();
        assert_eq!(config.time_format, ClockFormat::H12);
        assert_eq!(config.time_step, TimeStep::Minutes);
    }

    #[test]
    fn test_style_enums_serde() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(serde_json::to_string(&Size::Lg).unwrap(), r#""lg""#);
        assert_eq!(
            serde_json::to_string(&Variant::Outline).unwrap(),
            r#""outline""#
        );
        assert_eq!(
            serde_json::from_str::<Variant>(r#""ghost""#).unwrap(),
            Variant::Ghost
        );
    }
}
