//! Viewport-triggered animators: stat count-ups, skill bar reveals,
//! timeline reveals, fade-ins, and deferred image loads. Each fires when
//! the page reports a qualifying intersection for one of its targets.

use std::collections::HashSet;

use crate::api::app::{Component, FrameOutput};
use crate::api::config::AppConfig;
use crate::content::manifest::PageManifest;
use crate::core::context::SharedContext;
use crate::input::events::{InputEvent, ObserverGroup};
use crate::surface::dom::DomTarget;

/// Visibility ratio each group requires before its effect plays.
const STATS_THRESHOLD: f32 = 0.5;
const SKILLS_THRESHOLD: f32 = 0.5;
const TIMELINE_THRESHOLD: f32 = 0.3;
const FADE_THRESHOLD: f32 = 0.1;

/// One running count-up animation.
#[derive(Debug)]
struct CountUp {
    index: u32,
    target: u32,
    elapsed: f32,
    last_shown: Option<u32>,
}

/// Frame-stepped numeric count-ups. Set-backed once-guard: a stat that has
/// fired never fires again this page load.
struct StatCounters {
    targets: Vec<u32>,
    animated: HashSet<u32>,
    active: Vec<CountUp>,
    duration: f32,
}

impl StatCounters {
    fn fire(&mut self, index: u32) {
        let Some(&target) = self.targets.get(index as usize) else {
            return;
        };
        if !self.animated.insert(index) {
            return;
        }
        self.active.push(CountUp {
            index,
            target,
            elapsed: 0.0,
            last_shown: None,
        });
    }

    fn update(&mut self, dt: f32, out: &mut FrameOutput) {
        let duration = self.duration;
        self.active.retain_mut(|anim| {
            anim.elapsed += dt;
            let progress = anim.elapsed / duration;
            if progress >= 1.0 {
                // Non-uniform final step: snap to the exact target.
                out.dom.set_text(
                    DomTarget::StatValue(anim.index),
                    format!("{}+", anim.target),
                );
                return false;
            }
            let value = (anim.target as f32 * progress).floor() as u32;
            if anim.last_shown != Some(value) {
                anim.last_shown = Some(value);
                out.dom
                    .set_text(DomTarget::StatValue(anim.index), value.to_string());
            }
            true
        });
    }
}

/// Width reveal to a fixed percentage. Set-backed once-guard.
struct SkillBars {
    levels: Vec<f32>,
    animated: HashSet<u32>,
}

impl SkillBars {
    fn fire(&mut self, index: u32, out: &mut FrameOutput) {
        let Some(&level) = self.levels.get(index as usize) else {
            return;
        };
        if !self.animated.insert(index) {
            return;
        }
        let level = level.clamp(0.0, 100.0);
        out.dom
            .set_style(DomTarget::SkillBar(index), "width", format!("{}%", level));
    }
}

/// Visibility class re-added on every qualifying intersection. Deliberately
/// unguarded: re-adding an already-present class is idempotent at the
/// surface, and that is what the page shipped.
struct TimelineReveal {
    count: usize,
}

impl TimelineReveal {
    fn fire(&self, index: u32, out: &mut FrameOutput) {
        if (index as usize) < self.count {
            out.dom.add_class(DomTarget::TimelineItem(index), "visible");
        }
    }
}

/// Opacity/translate transition. Targets are primed to their hidden state
/// on the first tick; intersections restore them. Unguarded like the
/// timeline — the restored style is idempotent.
struct FadeIns {
    count: usize,
    primed: bool,
}

impl FadeIns {
    fn prime(&mut self, out: &mut FrameOutput) {
        for i in 0..self.count as u32 {
            let target = DomTarget::FadeTarget(i);
            out.dom.set_style(target, "opacity", "0");
            out.dom.set_style(target, "transform", "translateY(30px)");
            out.dom.set_style(
                target,
                "transition",
                "opacity 0.6s ease, transform 0.6s ease",
            );
        }
        self.primed = true;
    }

    fn fire(&self, index: u32, out: &mut FrameOutput) {
        if (index as usize) < self.count {
            let target = DomTarget::FadeTarget(index);
            out.dom.set_style(target, "opacity", "1");
            out.dom.set_style(target, "transform", "translateY(0)");
        }
    }
}

/// Deferred image promotion. Set-backed: the page unobserves after the
/// first load, so each image loads exactly once.
struct DeferredImages {
    count: usize,
    loaded: HashSet<u32>,
}

impl DeferredImages {
    fn fire(&mut self, index: u32, out: &mut FrameOutput) {
        if (index as usize) >= self.count || !self.loaded.insert(index) {
            return;
        }
        let target = DomTarget::DeferredImage(index);
        out.dom.push(target, crate::surface::dom::DomOp::LoadDeferredImage);
        out.dom.add_class(target, "loaded");
    }
}

/// Facade over all viewport-triggered animator groups.
pub struct RevealAnimators {
    stats: StatCounters,
    skills: SkillBars,
    timeline: TimelineReveal,
    fades: FadeIns,
    images: DeferredImages,
}

impl RevealAnimators {
    pub fn new(config: &AppConfig, manifest: &PageManifest) -> Self {
        Self {
            stats: StatCounters {
                targets: manifest.stat_targets.clone(),
                animated: HashSet::new(),
                active: Vec::new(),
                duration: config.count_up_duration_ms / 1000.0,
            },
            skills: SkillBars {
                levels: manifest.skill_levels.clone(),
                animated: HashSet::new(),
            },
            timeline: TimelineReveal {
                count: manifest.timeline_items,
            },
            fades: FadeIns {
                count: manifest.fade_targets,
                primed: false,
            },
            images: DeferredImages {
                count: manifest.deferred_images,
                loaded: HashSet::new(),
            },
        }
    }

    /// Whether a stat's one-shot has already fired (test hook).
    pub fn stat_fired(&self, index: u32) -> bool {
        self.stats.animated.contains(&index)
    }
}

impl Component for RevealAnimators {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, out: &mut FrameOutput) {
        let InputEvent::Intersection { group, index, ratio } = *event else {
            return;
        };
        match group {
            ObserverGroup::Stats if ratio >= STATS_THRESHOLD => self.stats.fire(index),
            ObserverGroup::Skills if ratio >= SKILLS_THRESHOLD => self.skills.fire(index, out),
            ObserverGroup::Timeline if ratio >= TIMELINE_THRESHOLD => {
                self.timeline.fire(index, out)
            }
            ObserverGroup::FadeIns if ratio >= FADE_THRESHOLD => self.fades.fire(index, out),
            ObserverGroup::Images if ratio > 0.0 => self.images.fire(index, out),
            _ => {}
        }
    }

    fn update(&mut self, dt: f32, _ctx: &SharedContext, out: &mut FrameOutput) {
        if !self.fades.primed {
            self.fades.prime(out);
        }
        self.stats.update(dt, out);
    }
}
