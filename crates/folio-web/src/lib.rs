pub mod runner;

pub use runner::AppRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use folio_engine::{
    AppConfig, HoverTarget, InputEvent, Key, ObserverGroup, PageManifest, ProjectCatalog,
};

// One app per page; a thread_local runner plus free-function exports is the
// whole bridge (wasm-bindgen cannot export methods on a stateful singleton
// any more ergonomically than this).
thread_local! {
    static RUNNER: RefCell<Option<AppRunner>> = RefCell::new(None);
    static PENDING_MANIFEST: RefCell<Option<PageManifest>> = RefCell::new(None);
    static PENDING_PROJECTS: RefCell<Option<ProjectCatalog>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AppRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("App not initialized. Call app_init() first.");
        f(runner)
    })
}

/// Supply the page's animation manifest before `app_init`. Returns false
/// (and keeps the builtin) if the JSON does not parse.
#[wasm_bindgen]
pub fn app_load_manifest(json: &str) -> bool {
    match PageManifest::from_json(json) {
        Ok(manifest) => {
            PENDING_MANIFEST.with(|cell| *cell.borrow_mut() = Some(manifest));
            true
        }
        Err(err) => {
            log::error!("page manifest rejected: {}", err);
            false
        }
    }
}

/// Supply the project catalog before `app_init`. Returns false (and keeps
/// the builtin) if the JSON does not parse.
#[wasm_bindgen]
pub fn app_load_projects(json: &str) -> bool {
    match ProjectCatalog::from_json(json) {
        Ok(catalog) => {
            PENDING_PROJECTS.with(|cell| *cell.borrow_mut() = Some(catalog));
            true
        }
        Err(err) => {
            log::error!("project catalog rejected: {}", err);
            false
        }
    }
}

/// Build the app for the given startup viewport. Returns false if the
/// configuration fails validation.
#[wasm_bindgen]
pub fn app_init(width: f32, height: f32) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = AppConfig {
        initial_viewport: (width, height),
        particle_seed: js_sys::Date::now() as u64,
        ..AppConfig::default()
    };
    let manifest = PENDING_MANIFEST
        .with(|cell| cell.borrow_mut().take())
        .unwrap_or_default();
    let catalog = PENDING_PROJECTS
        .with(|cell| cell.borrow_mut().take())
        .unwrap_or_else(ProjectCatalog::builtin);

    match AppRunner::new(config, manifest, catalog) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("folio: initialized");
            true
        }
        Err(err) => {
            log::error!("folio: init failed: {}", err);
            false
        }
    }
}

#[wasm_bindgen]
pub fn app_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn app_dispose() {
    with_runner(|r| r.dispose());
}

/// This frame's DOM command batch as JSON (applied by the page in order).
#[wasm_bindgen]
pub fn app_dom_batch() -> String {
    with_runner(|r| r.dom_batch_json())
}

#[wasm_bindgen]
pub fn app_announce(message: &str) {
    with_runner(|r| r.announce(message));
}

// ---- Input pushers ----

#[wasm_bindgen]
pub fn app_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn app_pointer_enter_interactive() {
    with_runner(|r| r.push_input(InputEvent::PointerEnterInteractive));
}

#[wasm_bindgen]
pub fn app_pointer_leave_interactive() {
    with_runner(|r| r.push_input(InputEvent::PointerLeaveInteractive));
}

#[wasm_bindgen]
pub fn app_hover_magnetic(index: u32, x: f32, y: f32, width: f32, height: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::HoverMove {
            target: HoverTarget::Magnetic(index),
            x,
            y,
            width,
            height,
        })
    });
}

#[wasm_bindgen]
pub fn app_hover_tilt(index: u32, x: f32, y: f32, width: f32, height: f32) {
    with_runner(|r| {
        r.push_input(InputEvent::HoverMove {
            target: HoverTarget::Tilt(index),
            x,
            y,
            width,
            height,
        })
    });
}

#[wasm_bindgen]
pub fn app_hover_end_magnetic(index: u32) {
    with_runner(|r| {
        r.push_input(InputEvent::HoverEnd {
            target: HoverTarget::Magnetic(index),
        })
    });
}

#[wasm_bindgen]
pub fn app_hover_end_tilt(index: u32) {
    with_runner(|r| {
        r.push_input(InputEvent::HoverEnd {
            target: HoverTarget::Tilt(index),
        })
    });
}

#[wasm_bindgen]
pub fn app_scroll(offset_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Scroll { offset_y }));
}

#[wasm_bindgen]
pub fn app_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

#[wasm_bindgen]
pub fn app_key_escape() {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key: Key::Escape }));
}

#[wasm_bindgen]
pub fn app_key_tab() {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key: Key::Tab }));
}

/// Observer groups, page side: 0 stats, 1 skills, 2 timeline, 3 fade-ins,
/// 4 deferred images. Unknown groups are dropped.
#[wasm_bindgen]
pub fn app_intersection(group: u32, index: u32, ratio: f32) {
    let group = match group {
        0 => ObserverGroup::Stats,
        1 => ObserverGroup::Skills,
        2 => ObserverGroup::Timeline,
        3 => ObserverGroup::FadeIns,
        4 => ObserverGroup::Images,
        other => {
            log::warn!("unknown observer group {}", other);
            return;
        }
    };
    with_runner(|r| r.push_input(InputEvent::Intersection { group, index, ratio }));
}

#[wasm_bindgen]
pub fn app_section_layout(index: u32, top: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::SectionLayout { index, top, height }));
}

#[wasm_bindgen]
pub fn app_nav_activate(index: u32) {
    with_runner(|r| r.push_input(InputEvent::NavActivate { index }));
}

#[wasm_bindgen]
pub fn app_menu_toggle() {
    with_runner(|r| r.push_input(InputEvent::MenuToggle));
}

#[wasm_bindgen]
pub fn app_open_project(index: u32) {
    with_runner(|r| r.push_input(InputEvent::OpenProject { index }));
}

#[wasm_bindgen]
pub fn app_close_project() {
    with_runner(|r| r.push_input(InputEvent::CloseProject));
}

#[wasm_bindgen]
pub fn app_submit_form(name: &str, email: &str, subject: &str, message: &str) {
    with_runner(|r| {
        r.push_input(InputEvent::SubmitForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    });
}

// ---- Shared-buffer accessors ----

#[wasm_bindgen]
pub fn get_frame_buffer_ptr() -> *const f32 {
    with_runner(|r| r.buffer_ptr())
}

#[wasm_bindgen]
pub fn get_frame_buffer_floats() -> u32 {
    with_runner(|r| r.buffer_floats())
}

#[wasm_bindgen]
pub fn get_circle_count() -> u32 {
    with_runner(|r| r.circle_count())
}

#[wasm_bindgen]
pub fn get_line_count() -> u32 {
    with_runner(|r| r.line_count())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_circles() -> u32 {
    with_runner(|r| r.max_circles())
}

#[wasm_bindgen]
pub fn get_max_lines() -> u32 {
    with_runner(|r| r.max_lines())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_circle_data_offset() -> u32 {
    with_runner(|r| r.circle_data_offset())
}

#[wasm_bindgen]
pub fn get_line_data_offset() -> u32 {
    with_runner(|r| r.line_data_offset())
}

#[wasm_bindgen]
pub fn get_event_data_offset() -> u32 {
    with_runner(|r| r.event_data_offset())
}
