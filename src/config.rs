//! Tunables for every page behavior.
//!
//! Defaults reproduce the stock site. A page may override any subset by
//! embedding `<script type="application/json" id="fx-config">{...}</script>`;
//! missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FxError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxConfig {
    /// `localStorage` key holding the theme name.
    pub storage_key: String,
    /// Quiet period before active-link and header updates run.
    pub scroll_debounce_ms: u32,
    /// Minimum spacing between scroll-direction classifications.
    pub direction_throttle_ms: u32,
    /// Quiet period before section geometry is re-measured on resize.
    pub resize_debounce_ms: u32,
    /// Sections count as active this many pixels before their top edge.
    pub section_lead_px: f64,
    /// Header shadow appears once the offset exceeds this.
    pub header_shadow_px: f64,
    /// Fixed-header height subtracted from smooth-scroll targets.
    pub anchor_offset_px: f64,
    pub parallax_default_speed: f64,
    pub reveal_threshold: f64,
    pub progress_threshold: f64,
    /// Delay before a progress bar's width is re-applied.
    pub progress_delay_ms: u32,
    pub stagger_delay_ms: u32,
    pub stagger_step_s: f64,
    pub cursor_primary_smoothing: f64,
    pub cursor_secondary_smoothing: f64,
    pub cursor_hover_px: f64,
    pub cursor_rest_px: f64,
    pub ripple_duration_ms: u32,
    pub preloader_delay_ms: u32,
    pub preloader_fade_ms: u32,
    pub contact_endpoint: String,
    pub fallback_email: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            scroll_debounce_ms: 10,
            direction_throttle_ms: 100,
            resize_debounce_ms: 250,
            section_lead_px: 100.0,
            header_shadow_px: 50.0,
            anchor_offset_px: 80.0,
            parallax_default_speed: 0.5,
            reveal_threshold: 0.1,
            progress_threshold: 0.5,
            progress_delay_ms: 100,
            stagger_delay_ms: 100,
            stagger_step_s: 0.1,
            cursor_primary_smoothing: 0.15,
            cursor_secondary_smoothing: 0.3,
            cursor_hover_px: 50.0,
            cursor_rest_px: 32.0,
            ripple_duration_ms: 600,
            preloader_delay_ms: 500,
            preloader_fade_ms: 300,
            contact_endpoint: "contact-form.php".to_owned(),
            fallback_email: "chiranm97@outlook.com".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl FxConfig {
    /// Parse an override block, filling absent keys from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Config`] when the block is not a JSON object of the
    /// expected shape, or when a smoothing constant falls outside `(0, 1]`.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| FxError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FxError> {
        for (name, k) in [
            ("cursorPrimarySmoothing", self.cursor_primary_smoothing),
            ("cursorSecondarySmoothing", self.cursor_secondary_smoothing),
        ] {
            if !(k > 0.0 && k <= 1.0) {
                return Err(FxError::Config(format!("{name} must be in (0, 1], got {k}")));
            }
        }
        for (name, t) in [("revealThreshold", self.reveal_threshold), ("progressThreshold", self.progress_threshold)] {
            if !(0.0..=1.0).contains(&t) {
                return Err(FxError::Config(format!("{name} must be in [0, 1], got {t}")));
            }
        }
        Ok(())
    }

    /// Resolve `log_level`, falling back to `Info` for unknown names.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
