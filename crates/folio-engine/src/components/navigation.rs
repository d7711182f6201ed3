//! Scroll-reactive navigation: active-link highlighting, the scrolled
//! navbar style, smooth-scroll link activation, and the mobile menu.

use crate::api::app::{Component, FrameOutput};
use crate::api::config::AppConfig;
use crate::api::types::AppEvent;
use crate::content::manifest::PageManifest;
use crate::core::context::SharedContext;
use crate::input::events::InputEvent;
use crate::surface::dom::DomTarget;

/// Vertical band a section occupies, as reported by the page.
#[derive(Debug, Clone, Copy, Default)]
struct SectionBand {
    top: f32,
    height: f32,
}

pub struct Navigation {
    /// Index-aligned with nav links.
    sections: Vec<SectionBand>,
    section_margin: f32,
    scroll_target_margin: f32,
    scrolled_threshold: f32,
    menu_open: bool,
}

impl Navigation {
    pub fn new(config: &AppConfig, manifest: &PageManifest) -> Self {
        Self {
            sections: vec![SectionBand::default(); manifest.sections],
            section_margin: config.section_margin,
            scroll_target_margin: config.scroll_target_margin,
            scrolled_threshold: config.scrolled_threshold,
            menu_open: false,
        }
    }

    /// The section whose band contains the offset; the last match wins when
    /// bands overlap, same as walking the page top to bottom.
    fn active_section(&self, offset_y: f32) -> Option<usize> {
        let mut active = None;
        for (i, band) in self.sections.iter().enumerate() {
            let top = band.top - self.section_margin;
            if offset_y >= top && offset_y < top + band.height {
                active = Some(i);
            }
        }
        active
    }

    fn highlight(&self, offset_y: f32, out: &mut FrameOutput) {
        let active = self.active_section(offset_y);
        for i in 0..self.sections.len() {
            out.dom.remove_class(DomTarget::NavLink(i as u32), "active");
        }
        if let Some(i) = active {
            out.dom.add_class(DomTarget::NavLink(i as u32), "active");
        }
    }

    fn close_menu(&mut self, out: &mut FrameOutput) {
        self.menu_open = false;
        out.dom.remove_class(DomTarget::NavToggle, "active");
        out.dom.remove_class(DomTarget::NavMenu, "active");
    }
}

impl Component for Navigation {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, out: &mut FrameOutput) {
        match *event {
            InputEvent::SectionLayout { index, top, height } => {
                let index = index as usize;
                if index >= self.sections.len() {
                    self.sections.resize(index + 1, SectionBand::default());
                }
                self.sections[index] = SectionBand { top, height };
            }
            InputEvent::Scroll { offset_y } => {
                if offset_y > self.scrolled_threshold {
                    out.dom.add_class(DomTarget::Navbar, "scrolled");
                } else {
                    out.dom.remove_class(DomTarget::Navbar, "scrolled");
                }
                self.highlight(offset_y, out);
            }
            InputEvent::NavActivate { index } => {
                if let Some(band) = self.sections.get(index as usize) {
                    out.events
                        .push(AppEvent::scroll_to(band.top - self.scroll_target_margin));
                }
                self.close_menu(out);
            }
            InputEvent::MenuToggle => {
                if self.menu_open {
                    self.close_menu(out);
                } else {
                    self.menu_open = true;
                    out.dom.add_class(DomTarget::NavToggle, "active");
                    out.dom.add_class(DomTarget::NavMenu, "active");
                }
            }
            _ => {}
        }
    }

    fn dispose(&mut self, out: &mut FrameOutput) {
        out.dom.remove_class(DomTarget::Navbar, "scrolled");
        for i in 0..self.sections.len() {
            out.dom.remove_class(DomTarget::NavLink(i as u32), "active");
        }
        self.close_menu(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::Viewport;
    use crate::surface::dom::DomOp;

    fn ctx() -> SharedContext {
        SharedContext::new(Viewport::new(1280.0, 720.0), 150.0)
    }

    fn nav_with_layout() -> Navigation {
        let manifest = PageManifest {
            sections: 3,
            ..PageManifest::default()
        };
        let mut nav = Navigation::new(&AppConfig::default(), &manifest);
        let mut out = FrameOutput::new();
        let c = ctx();
        for (i, (top, height)) in [(0.0, 600.0), (600.0, 800.0), (1400.0, 700.0)]
            .into_iter()
            .enumerate()
        {
            nav.on_event(
                &InputEvent::SectionLayout { index: i as u32, top, height },
                &c,
                &mut out,
            );
        }
        nav
    }

    fn active_links(out: &FrameOutput) -> Vec<u32> {
        out.dom
            .commands()
            .iter()
            .filter_map(|cmd| match (&cmd.target, &cmd.op) {
                (DomTarget::NavLink(i), DomOp::AddClass { class }) if class == "active" => Some(*i),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn at_most_one_link_active() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        // 650 sits in section 1's band (600 - 100 margin = 500, height 800).
        nav.on_event(&InputEvent::Scroll { offset_y: 650.0 }, &ctx(), &mut out);
        assert_eq!(active_links(&out), vec![1]);
    }

    #[test]
    fn band_margin_pulls_activation_early() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        // 510 is above section 1's top (600) but inside its margin-shifted band.
        nav.on_event(&InputEvent::Scroll { offset_y: 510.0 }, &ctx(), &mut out);
        assert_eq!(active_links(&out), vec![1]);
    }

    #[test]
    fn no_match_clears_all_links() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        // Past the last section's band entirely.
        nav.on_event(&InputEvent::Scroll { offset_y: 9000.0 }, &ctx(), &mut out);
        assert!(active_links(&out).is_empty());
        // Every link still got its active class cleared.
        let removals = out
            .dom
            .commands()
            .iter()
            .filter(|cmd| matches!(&cmd.op, DomOp::RemoveClass { class } if class == "active"))
            .count();
        assert_eq!(removals, 3);
    }

    #[test]
    fn scrolled_class_tracks_threshold() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        nav.on_event(&InputEvent::Scroll { offset_y: 150.0 }, &ctx(), &mut out);
        assert!(out.dom.commands().iter().any(|cmd| matches!(
            (&cmd.target, &cmd.op),
            (DomTarget::Navbar, DomOp::AddClass { class }) if class == "scrolled"
        )));

        out.clear();
        nav.on_event(&InputEvent::Scroll { offset_y: 50.0 }, &ctx(), &mut out);
        assert!(out.dom.commands().iter().any(|cmd| matches!(
            (&cmd.target, &cmd.op),
            (DomTarget::Navbar, DomOp::RemoveClass { class }) if class == "scrolled"
        )));
    }

    #[test]
    fn activate_scrolls_to_section_and_closes_menu() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        nav.on_event(&InputEvent::MenuToggle, &ctx(), &mut out);

        out.clear();
        nav.on_event(&InputEvent::NavActivate { index: 2 }, &ctx(), &mut out);
        // 1400 top - 80 scroll margin.
        assert_eq!(out.events, vec![AppEvent::scroll_to(1320.0)]);
        assert!(out.dom.commands().iter().any(|cmd| matches!(
            (&cmd.target, &cmd.op),
            (DomTarget::NavMenu, DomOp::RemoveClass { class }) if class == "active"
        )));
    }

    #[test]
    fn activate_unknown_section_only_closes_menu() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        nav.on_event(&InputEvent::NavActivate { index: 99 }, &ctx(), &mut out);
        assert!(out.events.is_empty());
    }

    #[test]
    fn menu_toggle_flips_state() {
        let mut nav = nav_with_layout();
        let mut out = FrameOutput::new();
        nav.on_event(&InputEvent::MenuToggle, &ctx(), &mut out);
        assert!(nav.menu_open);
        nav.on_event(&InputEvent::MenuToggle, &ctx(), &mut out);
        assert!(!nav.menu_open);
    }
}
