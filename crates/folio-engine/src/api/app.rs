use glam::Vec2;

use crate::api::config::AppConfig;
use crate::api::error::ConfigError;
use crate::api::types::AppEvent;
use crate::components::cursor::CursorTrail;
use crate::components::form::ContactForm;
use crate::components::hover::HoverEffects;
use crate::components::modal::ProjectModal;
use crate::components::navigation::Navigation;
use crate::components::particles::ParticleField;
use crate::components::reveal::RevealAnimators;
use crate::components::typing::TypingCycler;
use crate::content::manifest::PageManifest;
use crate::content::projects::ProjectCatalog;
use crate::core::context::{SharedContext, Viewport};
use crate::core::time::Countdown;
use crate::input::events::{InputEvent, InputQueue, Key};
use crate::surface::canvas::CanvasFrame;
use crate::surface::dom::{DomBatch, DomOp, DomTarget};

/// Everything one tick produces for the page: raster commands, DOM
/// mutations, and outbound side effects. Rebuilt from scratch every tick,
/// so a frame is always applied whole.
pub struct FrameOutput {
    pub canvas: CanvasFrame,
    pub dom: DomBatch,
    pub events: Vec<AppEvent>,
}

impl FrameOutput {
    pub fn new() -> Self {
        Self {
            canvas: CanvasFrame::new(),
            dom: DomBatch::new(),
            events: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
        self.dom.clear();
        self.events.clear();
    }
}

impl Default for FrameOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// The contract every page component fulfills. Components never call one
/// another; they see the same events and the same shared context, and they
/// write to the same per-frame output.
pub trait Component {
    /// React to one input event.
    fn on_event(&mut self, _event: &InputEvent, _ctx: &SharedContext, _out: &mut FrameOutput) {}

    /// Per-tick work, run after all of this tick's events were dispatched.
    fn update(&mut self, _dt: f32, _ctx: &SharedContext, _out: &mut FrameOutput) {}

    /// Emit whatever cleanup the page needs when the component goes away.
    fn dispose(&mut self, _out: &mut FrameOutput) {}
}

/// The application root: owns every component, the shared context, and the
/// per-frame output. One `tick` drains the input queue, folds it into the
/// context, dispatches events, then updates each component in construction
/// order.
pub struct PortfolioApp {
    ctx: SharedContext,
    out: FrameOutput,
    pub particles: ParticleField,
    pub typing: TypingCycler,
    pub cursor: CursorTrail,
    pub navigation: Navigation,
    pub reveal: RevealAnimators,
    pub hover: HoverEffects,
    pub modal: ProjectModal,
    pub form: ContactForm,
    /// Body fade-in shortly after startup.
    page_reveal: Countdown,
    body_primed: bool,
    pending_announcements: Vec<String>,
    disposed: bool,
}

impl PortfolioApp {
    /// Validate the configuration and build every component once.
    /// Fails fast: a missing or malformed value is a startup defect, not
    /// something to discover mid-animation.
    pub fn new(
        config: AppConfig,
        manifest: PageManifest,
        catalog: ProjectCatalog,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let viewport = Viewport::new(config.initial_viewport.0, config.initial_viewport.1);
        let ctx = SharedContext::new(viewport, config.pointer_radius);

        let mut page_reveal = Countdown::new();
        page_reveal.arm(config.page_reveal_delay_ms / 1000.0);

        let app = Self {
            particles: ParticleField::new(&config, viewport),
            typing: TypingCycler::new(&config),
            cursor: CursorTrail::new(&config, viewport),
            navigation: Navigation::new(&config, &manifest),
            reveal: RevealAnimators::new(&config, &manifest),
            hover: HoverEffects::new(),
            modal: ProjectModal::new(catalog),
            form: ContactForm::new(),
            ctx,
            out: FrameOutput::new(),
            page_reveal,
            body_primed: false,
            pending_announcements: Vec::new(),
            disposed: false,
        };
        log::info!(
            "portfolio app initialized: {} particles, {} phrases, {} sections",
            app.particles.particles().len(),
            config.typing_phrases.len(),
            manifest.sections,
        );
        Ok(app)
    }

    pub fn context(&self) -> &SharedContext {
        &self.ctx
    }

    pub fn output(&self) -> &FrameOutput {
        &self.out
    }

    /// Queue a polite screen-reader announcement; it goes out with the next
    /// tick's batch.
    pub fn announce(&mut self, message: impl Into<String>) {
        self.pending_announcements.push(message.into());
    }

    /// Fold context-mutating events into the shared context. Runs before
    /// dispatch so every component sees this tick's state, not last tick's.
    fn fold_context(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    self.ctx.pointer.position = Some(Vec2::new(x, y));
                }
                InputEvent::Resize { width, height } => {
                    self.ctx.viewport = Viewport::new(width, height);
                }
                InputEvent::Scroll { offset_y } => {
                    self.ctx.scroll_y = offset_y;
                }
                _ => {}
            }
        }
    }

    /// Run one frame. Returns the completed output for the bridge to ship.
    pub fn tick(&mut self, dt: f32, input: &mut InputQueue) -> &FrameOutput {
        self.out.clear();
        if self.disposed {
            return &self.out;
        }

        let events = input.drain();
        self.fold_context(&events);

        if !self.body_primed {
            self.out.dom.set_style(DomTarget::Body, "opacity", "0");
            self.body_primed = true;
        }

        for event in &events {
            // The page only forwards Tab when focus sits on the body, so the
            // skip-to-content jump is unconditional here.
            if let InputEvent::KeyDown { key: Key::Tab } = event {
                self.out.events.push(AppEvent::focus_hero());
            }
            self.particles.on_event(event, &self.ctx, &mut self.out);
            self.typing.on_event(event, &self.ctx, &mut self.out);
            self.cursor.on_event(event, &self.ctx, &mut self.out);
            self.navigation.on_event(event, &self.ctx, &mut self.out);
            self.reveal.on_event(event, &self.ctx, &mut self.out);
            self.hover.on_event(event, &self.ctx, &mut self.out);
            self.modal.on_event(event, &self.ctx, &mut self.out);
            self.form.on_event(event, &self.ctx, &mut self.out);
        }

        if self.page_reveal.tick(dt) {
            self.out
                .dom
                .set_style(DomTarget::Body, "transition", "opacity 0.5s ease");
            self.out.dom.set_style(DomTarget::Body, "opacity", "1");
            self.out.events.push(AppEvent::page_revealed());
        }

        for message in self.pending_announcements.drain(..) {
            self.out
                .dom
                .push(DomTarget::LiveRegion, DomOp::Announce { message });
        }

        self.particles.update(dt, &self.ctx, &mut self.out);
        self.typing.update(dt, &self.ctx, &mut self.out);
        self.cursor.update(dt, &self.ctx, &mut self.out);
        self.navigation.update(dt, &self.ctx, &mut self.out);
        self.reveal.update(dt, &self.ctx, &mut self.out);
        self.hover.update(dt, &self.ctx, &mut self.out);
        self.modal.update(dt, &self.ctx, &mut self.out);
        self.form.update(dt, &self.ctx, &mut self.out);

        &self.out
    }

    /// Tear down every component, reverse construction order, and leave
    /// their cleanup commands in the output for the bridge to ship.
    /// Idempotent: a second call emits nothing.
    pub fn dispose(&mut self) -> &FrameOutput {
        self.out.clear();
        if self.disposed {
            return &self.out;
        }
        self.disposed = true;

        self.form.dispose(&mut self.out);
        self.modal.dispose(&mut self.out);
        self.hover.dispose(&mut self.out);
        self.reveal.dispose(&mut self.out);
        self.navigation.dispose(&mut self.out);
        self.cursor.dispose(&mut self.out);
        self.typing.dispose(&mut self.out);
        self.particles.dispose(&mut self.out);

        log::info!("portfolio app disposed");
        &self.out
    }
}
