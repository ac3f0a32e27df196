use serde::{Deserialize, Serialize};

use crate::foundation::core::Color;
use crate::foundation::error::{ClockfaceError, ClockfaceResult};

/// Rainbow cycle used for minor ticks; tick `k` takes entry `k % 5`.
pub const RAINBOW: [Color; 5] = [
    Color::rgb(0xFC, 0x02, 0x04),
    Color::rgb(0xFC, 0x98, 0x04),
    Color::rgb(0xFC, 0xFE, 0x04),
    Color::rgb(0x34, 0xFE, 0x04),
    Color::rgb(0x65, 0x32, 0xFC),
];

/// User-facing face options. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaceConfig {
    pub show_hours_text: bool,
    pub show_minute_ticks: bool,
    pub show_seconds_hand: bool,
    pub rainbow_minor_ticks: bool,
    /// Hour ticks and the center hub.
    pub tick_color: Color,
    pub background: Color,
    pub interactive_interval_ms: u64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            show_hours_text: true,
            show_minute_ticks: true,
            show_seconds_hand: true,
            rainbow_minor_ticks: true,
            tick_color: Color::rgb(0xFC, 0x02, 0x04),
            background: Color::BLACK,
            interactive_interval_ms: 25,
        }
    }
}

impl FaceConfig {
    pub fn from_json_str(s: &str) -> ClockfaceResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ClockfaceError::config(format!("face config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> ClockfaceResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ClockfaceError::config(format!("face config: {e}")))
    }

    pub fn validate(&self) -> ClockfaceResult<()> {
        if self.interactive_interval_ms == 0 {
            return Err(ClockfaceError::config(
                "interactive_interval_ms must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/config.rs"]
mod tests;
