use crate::api::error::ConfigError;

/// Static configuration surface, fixed at startup.
/// Defaults mirror the page's shipped constants; no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Phrases cycled by the typing headline.
    pub typing_phrases: Vec<String>,
    /// Milliseconds between typed characters.
    pub typing_speed_ms: f32,
    /// Milliseconds between deleted characters.
    pub deleting_speed_ms: f32,
    /// Pause on a fully typed phrase before deleting begins.
    pub phrase_delay_ms: f32,
    /// Pause after a phrase is fully deleted before the next one types.
    pub resume_delay_ms: f32,
    /// Upper bound on the particle count (area-derived below this).
    pub max_particles: usize,
    /// Surface area per particle when deriving the count.
    pub particle_density_divisor: f32,
    /// Pointer repulsion radius in surface pixels.
    pub pointer_radius: f32,
    /// Maximum distance at which two particles are joined by a line.
    pub connection_distance: f32,
    /// Quiet period before a resize regenerates the particle field.
    pub resize_debounce_ms: f32,
    /// Smoothing factor of the leading cursor indicator.
    pub cursor_ease: f32,
    /// Smoothing factor of the trailing cursor indicator.
    pub follower_ease: f32,
    /// Viewport width at or below which the cursor effect is disabled.
    pub narrow_viewport_cutoff: f32,
    /// Margin subtracted from a section top when matching the scroll offset.
    pub section_margin: f32,
    /// Offset above a section that smooth scrolling lands on.
    pub scroll_target_margin: f32,
    /// Scroll offset past which the navbar is styled as scrolled.
    pub scrolled_threshold: f32,
    /// Duration of a stat count-up animation.
    pub count_up_duration_ms: f32,
    /// Delay before the page body fades in after init.
    pub page_reveal_delay_ms: f32,
    /// Viewport size at startup, before any resize event arrives.
    pub initial_viewport: (f32, f32),
    /// Seed for the particle field's RNG.
    pub particle_seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            typing_phrases: vec![
                "FullStack Developer".to_string(),
                "AI Engineer".to_string(),
                "UI/UX Designer".to_string(),
                "Problem Solver".to_string(),
            ],
            typing_speed_ms: 100.0,
            deleting_speed_ms: 50.0,
            phrase_delay_ms: 2000.0,
            resume_delay_ms: 500.0,
            max_particles: 100,
            particle_density_divisor: 15_000.0,
            pointer_radius: 150.0,
            connection_distance: 120.0,
            resize_debounce_ms: 250.0,
            cursor_ease: 0.3,
            follower_ease: 0.15,
            narrow_viewport_cutoff: 768.0,
            section_margin: 100.0,
            scroll_target_margin: 80.0,
            scrolled_threshold: 100.0,
            count_up_duration_ms: 2000.0,
            page_reveal_delay_ms: 100.0,
            initial_viewport: (1280.0, 720.0),
            particle_seed: 42,
        }
    }
}

impl AppConfig {
    /// Validate the configuration. Called by `PortfolioApp::new` before any
    /// component is constructed, so a bad value fails fast with a named field
    /// instead of surfacing as nonsense animation state later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        for (i, phrase) in self.typing_phrases.iter().enumerate() {
            if phrase.trim().is_empty() {
                return Err(ConfigError::BlankPhrase(i));
            }
        }
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroParticleCap);
        }
        for (field, value) in [
            ("typing_speed_ms", self.typing_speed_ms),
            ("deleting_speed_ms", self.deleting_speed_ms),
            ("phrase_delay_ms", self.phrase_delay_ms),
            ("resume_delay_ms", self.resume_delay_ms),
            ("particle_density_divisor", self.particle_density_divisor),
            ("pointer_radius", self.pointer_radius),
            ("connection_distance", self.connection_distance),
            ("resize_debounce_ms", self.resize_debounce_ms),
            ("count_up_duration_ms", self.count_up_duration_ms),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for ease in [self.cursor_ease, self.follower_ease] {
            if !(ease > 0.0 && ease <= 1.0) {
                return Err(ConfigError::BadSmoothing(ease));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AppConfig::default().validate(), Ok(()));
    }

    #[test]
    fn empty_phrase_list_rejected() {
        let config = AppConfig {
            typing_phrases: Vec::new(),
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoPhrases));
    }

    #[test]
    fn blank_phrase_rejected() {
        let config = AppConfig {
            typing_phrases: vec!["Engineer".to_string(), "   ".to_string()],
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::BlankPhrase(1)));
    }

    #[test]
    fn zero_particle_cap_rejected() {
        let config = AppConfig {
            max_particles: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroParticleCap));
    }

    #[test]
    fn non_positive_speed_rejected() {
        let config = AppConfig {
            typing_speed_ms: 0.0,
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "typing_speed_ms",
                value: 0.0
            })
        );
    }

    #[test]
    fn out_of_range_smoothing_rejected() {
        let config = AppConfig {
            cursor_ease: 1.5,
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::BadSmoothing(1.5)));
    }
}
