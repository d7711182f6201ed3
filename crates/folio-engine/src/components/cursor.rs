//! Trailing cursor indicators: two exponential followers easing toward the
//! live pointer at different rates.

use glam::Vec2;

use crate::api::app::{Component, FrameOutput};
use crate::api::config::AppConfig;
use crate::core::context::{SharedContext, Viewport};
use crate::extensions::easing::smooth_toward;
use crate::input::events::InputEvent;
use crate::surface::dom::DomTarget;

pub struct CursorTrail {
    /// Evaluated once at construction: the effect is skipped entirely on
    /// narrow (touch) viewports, matching the page it came from.
    enabled: bool,
    cursor_pos: Vec2,
    follower_pos: Vec2,
    cursor_ease: f32,
    follower_ease: f32,
}

impl CursorTrail {
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        Self {
            enabled: viewport.width > config.narrow_viewport_cutoff,
            cursor_pos: Vec2::ZERO,
            follower_pos: Vec2::ZERO,
            cursor_ease: config.cursor_ease,
            follower_ease: config.follower_ease,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn cursor_pos(&self) -> Vec2 {
        self.cursor_pos
    }

    pub fn follower_pos(&self) -> Vec2 {
        self.follower_pos
    }

    fn emit_position(out: &mut FrameOutput, target: DomTarget, pos: Vec2) {
        out.dom.set_style(target, "left", format!("{:.1}px", pos.x));
        out.dom.set_style(target, "top", format!("{:.1}px", pos.y));
    }
}

impl Component for CursorTrail {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, out: &mut FrameOutput) {
        if !self.enabled {
            return;
        }
        match event {
            InputEvent::PointerEnterInteractive => {
                out.dom.add_class(DomTarget::Cursor, "expand");
                out.dom.add_class(DomTarget::CursorFollower, "expand");
            }
            InputEvent::PointerLeaveInteractive => {
                out.dom.remove_class(DomTarget::Cursor, "expand");
                out.dom.remove_class(DomTarget::CursorFollower, "expand");
            }
            _ => {}
        }
    }

    fn update(&mut self, _dt: f32, ctx: &SharedContext, out: &mut FrameOutput) {
        if !self.enabled {
            return;
        }
        // Nothing to follow until the pointer has moved once.
        let Some(target) = ctx.pointer.position else {
            return;
        };

        self.cursor_pos = smooth_toward(self.cursor_pos, target, self.cursor_ease);
        self.follower_pos = smooth_toward(self.follower_pos, target, self.follower_ease);

        Self::emit_position(out, DomTarget::Cursor, self.cursor_pos);
        Self::emit_position(out, DomTarget::CursorFollower, self.follower_pos);
    }

    fn dispose(&mut self, out: &mut FrameOutput) {
        if self.enabled {
            out.dom.remove_class(DomTarget::Cursor, "expand");
            out.dom.remove_class(DomTarget::CursorFollower, "expand");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_ctx() -> SharedContext {
        SharedContext::new(Viewport::new(1280.0, 720.0), 150.0)
    }

    #[test]
    fn disabled_on_narrow_viewport() {
        let trail = CursorTrail::new(&AppConfig::default(), Viewport::new(768.0, 1024.0));
        assert!(!trail.is_enabled());

        let mut trail = trail;
        let mut ctx = SharedContext::new(Viewport::new(768.0, 1024.0), 150.0);
        ctx.pointer.position = Some(Vec2::new(100.0, 100.0));
        let mut out = FrameOutput::new();
        trail.update(1.0 / 60.0, &ctx, &mut out);
        trail.on_event(&InputEvent::PointerEnterInteractive, &ctx, &mut out);
        assert!(out.dom.is_empty(), "narrow viewport must emit nothing");
    }

    #[test]
    fn idle_until_first_pointer_move() {
        let mut trail = CursorTrail::new(&AppConfig::default(), Viewport::new(1280.0, 720.0));
        let ctx = wide_ctx();
        let mut out = FrameOutput::new();
        trail.update(1.0 / 60.0, &ctx, &mut out);
        assert!(out.dom.is_empty());
    }

    #[test]
    fn followers_converge_at_different_rates() {
        let mut trail = CursorTrail::new(&AppConfig::default(), Viewport::new(1280.0, 720.0));
        let mut ctx = wide_ctx();
        ctx.pointer.position = Some(Vec2::new(200.0, 0.0));
        let mut out = FrameOutput::new();

        for _ in 0..10 {
            out.clear();
            trail.update(1.0 / 60.0, &ctx, &mut out);
        }

        let target = Vec2::new(200.0, 0.0);
        let cursor_gap = (trail.cursor_pos() - target).length();
        let follower_gap = (trail.follower_pos() - target).length();
        assert!(
            cursor_gap < follower_gap,
            "the leading indicator should be closer ({} vs {})",
            cursor_gap,
            follower_gap
        );

        for _ in 0..200 {
            out.clear();
            trail.update(1.0 / 60.0, &ctx, &mut out);
        }
        assert!((trail.cursor_pos() - target).length() < 0.5);
        assert!((trail.follower_pos() - target).length() < 0.5);
    }

    #[test]
    fn expand_class_follows_interactive_hover() {
        let mut trail = CursorTrail::new(&AppConfig::default(), Viewport::new(1280.0, 720.0));
        let ctx = wide_ctx();
        let mut out = FrameOutput::new();

        trail.on_event(&InputEvent::PointerEnterInteractive, &ctx, &mut out);
        assert_eq!(out.dom.len(), 2);

        out.clear();
        trail.on_event(&InputEvent::PointerLeaveInteractive, &ctx, &mut out);
        assert_eq!(out.dom.len(), 2);
    }
}
