use folio_engine::{
    AppConfig, AppEvent, CanvasBuffer, ConfigError, DomBatch, FixedTimestep, InputEvent,
    InputQueue, PageManifest, PortfolioApp, ProjectCatalog, ProtocolLayout,
};

/// Wires the headless app to the page loop.
///
/// The page calls `tick` once per animation frame with the real frame
/// delta; the fixed timestep turns that into zero or more engine ticks.
/// Canvas output is packed into the shared buffer (full redraw, last tick
/// wins); DOM commands and events accumulate across the frame's ticks so
/// none are dropped when a slow frame runs several.
pub struct AppRunner {
    app: PortfolioApp,
    input: InputQueue,
    buffer: CanvasBuffer,
    timestep: FixedTimestep,
    frame_dom: DomBatch,
    frame_events: Vec<AppEvent>,
    dom_json: String,
}

impl AppRunner {
    pub fn new(
        config: AppConfig,
        manifest: PageManifest,
        catalog: ProjectCatalog,
    ) -> Result<Self, ConfigError> {
        let layout = ProtocolLayout::from_config(&config);
        let app = PortfolioApp::new(config, manifest, catalog)?;
        Ok(Self {
            app,
            input: InputQueue::new(),
            buffer: CanvasBuffer::new(layout),
            timestep: FixedTimestep::new(1.0 / 60.0),
            frame_dom: DomBatch::new(),
            frame_events: Vec::new(),
            dom_json: String::from("[]"),
        })
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one page frame.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.timestep.accumulate(dt);
        if steps == 0 {
            // Keep the previous frame; nothing advanced.
            return;
        }

        self.frame_dom.clear();
        self.frame_events.clear();

        for _ in 0..steps {
            let out = self.app.tick(self.timestep.dt(), &mut self.input);
            self.frame_dom.extend_from_slice(out.dom.commands());
            self.frame_events.extend_from_slice(&out.events);
        }

        let viewport = self.app.context().viewport;
        self.buffer.pack(
            &self.app.output().canvas,
            &self.frame_events,
            (viewport.width, viewport.height),
        );
        self.dom_json = self.frame_dom.to_json();
    }

    /// Tear the app down; the final cleanup batch replaces the DOM batch.
    pub fn dispose(&mut self) {
        let out = self.app.dispose();
        self.dom_json = out.dom.to_json();
    }

    /// Queue a screen-reader announcement.
    pub fn announce(&mut self, message: &str) {
        self.app.announce(message);
    }

    /// This frame's DOM command batch as JSON.
    pub fn dom_batch_json(&self) -> String {
        self.dom_json.clone()
    }

    // ---- Shared-buffer accessors for the page reader ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_floats(&self) -> u32 {
        self.buffer.len_floats() as u32
    }

    pub fn circle_count(&self) -> u32 {
        self.buffer.circle_count() as u32
    }

    pub fn line_count(&self) -> u32 {
        self.buffer.line_count() as u32
    }

    pub fn event_count(&self) -> u32 {
        self.buffer.event_count() as u32
    }

    // ---- Capacity/layout accessors ----

    pub fn max_circles(&self) -> u32 {
        self.buffer.layout().max_circles as u32
    }

    pub fn max_lines(&self) -> u32 {
        self.buffer.layout().max_lines as u32
    }

    pub fn max_events(&self) -> u32 {
        self.buffer.layout().max_events as u32
    }

    pub fn circle_data_offset(&self) -> u32 {
        self.buffer.layout().circle_data_offset as u32
    }

    pub fn line_data_offset(&self) -> u32 {
        self.buffer.layout().line_data_offset as u32
    }

    pub fn event_data_offset(&self) -> u32 {
        self.buffer.layout().event_data_offset as u32
    }
}
