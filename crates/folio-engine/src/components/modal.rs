//! Project detail overlay: renders a catalog record on demand and locks
//! page scroll while open.

use crate::api::app::{Component, FrameOutput};
use crate::api::types::AppEvent;
use crate::content::projects::{ProjectCatalog, ProjectView};
use crate::core::context::SharedContext;
use crate::input::events::{InputEvent, Key};
use crate::surface::dom::{DomOp, DomTarget};

pub struct ProjectModal {
    catalog: ProjectCatalog,
    open_index: Option<usize>,
}

impl ProjectModal {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            open_index: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    fn open(&mut self, index: usize, out: &mut FrameOutput) {
        let Some(record) = self.catalog.get(index) else {
            // Caller programming error, not a handled failure.
            log::warn!("project index {} out of range ({})", index, self.catalog.len());
            return;
        };
        out.dom.push(
            DomTarget::ModalBody,
            DomOp::SetProjectView { view: ProjectView::from(record) },
        );
        out.dom.add_class(DomTarget::ModalRoot, "active");
        out.dom.set_style(DomTarget::Body, "overflow", "hidden");
        out.events.push(AppEvent::scroll_lock(true));
        self.open_index = Some(index);
    }

    fn close(&mut self, out: &mut FrameOutput) {
        if self.open_index.take().is_none() {
            return;
        }
        out.dom.remove_class(DomTarget::ModalRoot, "active");
        out.dom.set_style(DomTarget::Body, "overflow", "");
        out.events.push(AppEvent::scroll_lock(false));
    }
}

impl Component for ProjectModal {
    fn on_event(&mut self, event: &InputEvent, _ctx: &SharedContext, out: &mut FrameOutput) {
        match *event {
            InputEvent::OpenProject { index } => self.open(index as usize, out),
            InputEvent::CloseProject => self.close(out),
            InputEvent::KeyDown { key: Key::Escape } => self.close(out),
            _ => {}
        }
    }

    fn dispose(&mut self, out: &mut FrameOutput) {
        self.close(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::Viewport;

    fn ctx() -> SharedContext {
        SharedContext::new(Viewport::new(1280.0, 720.0), 150.0)
    }

    fn rendered_view(out: &FrameOutput) -> Option<ProjectView> {
        out.dom.commands().iter().find_map(|cmd| match &cmd.op {
            DomOp::SetProjectView { view } => Some(view.clone()),
            _ => None,
        })
    }

    #[test]
    fn open_renders_the_record_verbatim() {
        let catalog = ProjectCatalog::builtin();
        let record = catalog.get(2).unwrap().clone();
        let mut modal = ProjectModal::new(catalog);
        let mut out = FrameOutput::new();

        modal.on_event(&InputEvent::OpenProject { index: 2 }, &ctx(), &mut out);

        let view = rendered_view(&out).expect("a view is rendered");
        assert_eq!(view.title, record.title);
        assert_eq!(view.full_description, record.full_description);
        assert_eq!(view.technologies.len(), record.technologies.len());
        assert_eq!(view.features.len(), record.features.len());
        assert_eq!(view.live_url, record.live_url);
        assert_eq!(view.github_url, record.github_url);

        assert!(out.events.contains(&AppEvent::scroll_lock(true)));
        assert!(out.dom.commands().iter().any(|cmd| matches!(
            (&cmd.target, &cmd.op),
            (DomTarget::Body, DomOp::SetStyle { property, value })
                if property == "overflow" && value == "hidden"
        )));
    }

    #[test]
    fn close_restores_scroll() {
        let mut modal = ProjectModal::new(ProjectCatalog::builtin());
        let mut out = FrameOutput::new();
        modal.on_event(&InputEvent::OpenProject { index: 0 }, &ctx(), &mut out);

        out.clear();
        modal.on_event(&InputEvent::CloseProject, &ctx(), &mut out);
        assert!(!modal.is_open());
        assert!(out.events.contains(&AppEvent::scroll_lock(false)));
        assert!(out.dom.commands().iter().any(|cmd| matches!(
            (&cmd.target, &cmd.op),
            (DomTarget::Body, DomOp::SetStyle { property, value })
                if property == "overflow" && value.is_empty()
        )));
    }

    #[test]
    fn escape_closes_only_while_open() {
        let mut modal = ProjectModal::new(ProjectCatalog::builtin());
        let mut out = FrameOutput::new();

        // Closed: Escape is a no-op.
        modal.on_event(&InputEvent::KeyDown { key: Key::Escape }, &ctx(), &mut out);
        assert!(out.dom.is_empty() && out.events.is_empty());

        modal.on_event(&InputEvent::OpenProject { index: 1 }, &ctx(), &mut out);
        out.clear();
        modal.on_event(&InputEvent::KeyDown { key: Key::Escape }, &ctx(), &mut out);
        assert!(!modal.is_open());
    }

    #[test]
    fn out_of_range_index_ignored() {
        let mut modal = ProjectModal::new(ProjectCatalog::builtin());
        let mut out = FrameOutput::new();
        modal.on_event(&InputEvent::OpenProject { index: 99 }, &ctx(), &mut out);
        assert!(!modal.is_open());
        assert!(out.dom.is_empty());
    }

    #[test]
    fn reopening_replaces_the_view() {
        let mut modal = ProjectModal::new(ProjectCatalog::builtin());
        let mut out = FrameOutput::new();
        modal.on_event(&InputEvent::OpenProject { index: 0 }, &ctx(), &mut out);

        out.clear();
        modal.on_event(&InputEvent::OpenProject { index: 3 }, &ctx(), &mut out);
        let view = rendered_view(&out).unwrap();
        assert_eq!(view.title, "Component Design System");
    }
}
