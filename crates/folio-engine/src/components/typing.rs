//! Typing headline: reveals and deletes a cycle of phrases one character
//! at a time, scheduled purely by re-arming a countdown (no frame loop of
//! its own).

use crate::api::app::{Component, FrameOutput};
use crate::api::config::AppConfig;
use crate::core::context::SharedContext;
use crate::core::time::Countdown;
use crate::surface::dom::DomTarget;

/// The two states of the cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

pub struct TypingCycler {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Characters currently revealed; always within [0, phrase length].
    char_index: usize,
    phase: Phase,
    typing_interval: f32,
    deleting_interval: f32,
    phrase_delay: f32,
    resume_delay: f32,
    countdown: Countdown,
    displayed: String,
}

impl TypingCycler {
    pub fn new(config: &AppConfig) -> Self {
        let mut countdown = Countdown::new();
        countdown.arm(config.typing_speed_ms / 1000.0);
        Self {
            phrases: config.typing_phrases.clone(),
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            typing_interval: config.typing_speed_ms / 1000.0,
            deleting_interval: config.deleting_speed_ms / 1000.0,
            phrase_delay: config.phrase_delay_ms / 1000.0,
            resume_delay: config.resume_delay_ms / 1000.0,
            countdown,
            displayed: String::new(),
        }
    }

    fn current_len(&self) -> usize {
        self.phrases[self.phrase_index].chars().count()
    }

    fn render(&mut self) {
        self.displayed = self.phrases[self.phrase_index]
            .chars()
            .take(self.char_index)
            .collect();
    }

    /// One scheduling tick. Returns true if the displayed text changed.
    /// Pure state transition — tests drive this directly.
    pub fn step(&mut self) -> bool {
        match self.phase {
            Phase::Typing => {
                let len = self.current_len();
                if self.char_index < len {
                    self.char_index += 1;
                    self.render();
                    // A fully typed phrase holds for the long pause before
                    // the state flips.
                    if self.char_index == len {
                        self.countdown.arm(self.phrase_delay);
                    } else {
                        self.countdown.arm(self.typing_interval);
                    }
                    true
                } else {
                    self.phase = Phase::Deleting;
                    self.countdown.arm(self.deleting_interval);
                    false
                }
            }
            Phase::Deleting => {
                if self.char_index > 0 {
                    self.char_index -= 1;
                    self.render();
                    if self.char_index == 0 {
                        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                        self.phase = Phase::Typing;
                        self.countdown.arm(self.resume_delay);
                    } else {
                        self.countdown.arm(self.deleting_interval);
                    }
                    true
                } else {
                    self.phase = Phase::Typing;
                    self.countdown.arm(self.typing_interval);
                    false
                }
            }
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }
}

impl Component for TypingCycler {
    fn update(&mut self, dt: f32, _ctx: &SharedContext, out: &mut FrameOutput) {
        if self.countdown.tick(dt) && self.step() {
            out.dom.set_text(DomTarget::TypingText, self.displayed.clone());
        }
    }

    fn dispose(&mut self, _out: &mut FrameOutput) {
        self.countdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::Viewport;

    fn cycler(phrases: &[&str]) -> TypingCycler {
        let config = AppConfig {
            typing_phrases: phrases.iter().map(|s| s.to_string()).collect(),
            ..AppConfig::default()
        };
        TypingCycler::new(&config)
    }

    #[test]
    fn char_offset_stays_in_range() {
        let mut c = cycler(&["abc"]);
        for _ in 0..50 {
            c.step();
            assert!(c.char_index <= 3);
        }
    }

    #[test]
    fn typing_cycle_tick_counts() {
        let mut c = cycler(&["Go", "Rust"]);

        // len("Go") ticks reveal the full phrase.
        c.step();
        assert_eq!(c.displayed(), "G");
        c.step();
        assert_eq!(c.displayed(), "Go");
        assert!(!c.is_deleting());

        // One further tick flips the state without changing text.
        assert!(!c.step());
        assert!(c.is_deleting());
        assert_eq!(c.displayed(), "Go");

        // len more ticks empty the text and advance the phrase.
        c.step();
        assert_eq!(c.displayed(), "G");
        c.step();
        assert_eq!(c.displayed(), "");
        assert_eq!(c.phrase_index(), 1);
        assert!(!c.is_deleting());
    }

    #[test]
    fn phrase_list_wraps_around() {
        let mut c = cycler(&["ab", "cd"]);
        // Full cycle of both phrases: (2 type + 1 flip + 2 delete) each.
        for _ in 0..10 {
            c.step();
        }
        assert_eq!(c.phrase_index(), 0);
    }

    #[test]
    fn timed_ticks_match_the_documented_timeline() {
        // typingSpeed = deletingSpeed = 100ms, delay = 2000ms.
        let config = AppConfig {
            typing_phrases: vec!["Go".to_string(), "Rust".to_string()],
            typing_speed_ms: 100.0,
            deleting_speed_ms: 100.0,
            phrase_delay_ms: 2000.0,
            resume_delay_ms: 500.0,
            ..AppConfig::default()
        };
        let mut c = TypingCycler::new(&config);
        let ctx = SharedContext::new(Viewport::new(1280.0, 720.0), 150.0);
        let mut out = FrameOutput::new();

        let mut elapsed = 0.0;
        let mut advance_to = |c: &mut TypingCycler, t: f32, elapsed: &mut f32| {
            while *elapsed < t {
                out.clear();
                c.update(0.005, &ctx, &mut out);
                *elapsed += 0.005;
            }
        };

        // ~200ms: both characters typed.
        advance_to(&mut c, 0.22, &mut elapsed);
        assert_eq!(c.displayed(), "Go");
        assert!(!c.is_deleting());

        // ~2200ms (200 + 2000 delay): deleting has begun.
        advance_to(&mut c, 2.25, &mut elapsed);
        assert!(c.is_deleting());
        assert_eq!(c.displayed(), "Go");

        // ~2400ms: text empty, next phrase queued.
        advance_to(&mut c, 2.45, &mut elapsed);
        assert_eq!(c.displayed(), "");
        assert_eq!(c.phrase_index(), 1);
    }

    #[test]
    fn emits_set_text_only_on_change() {
        let config = AppConfig {
            typing_phrases: vec!["Hi".to_string()],
            ..AppConfig::default()
        };
        let mut c = TypingCycler::new(&config);
        let ctx = SharedContext::new(Viewport::new(1280.0, 720.0), 150.0);
        let mut out = FrameOutput::new();

        // First tick fires at 100ms: one SetText.
        c.update(0.1, &ctx, &mut out);
        assert_eq!(out.dom.len(), 1);

        // No countdown expiry, no command.
        out.clear();
        c.update(0.01, &ctx, &mut out);
        assert!(out.dom.is_empty());
    }
}
