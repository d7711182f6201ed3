/// Shared-buffer layout for the raster frame and outbound events.
/// Must stay in sync with the page-side reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Circles: max_circles × 7 floats]
/// [Lines: max_lines × 9 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// The frame is always a full redraw: the page clears the surface, draws
/// `circle_count` circles, then `line_count` lines, every frame.

use crate::api::config::AppConfig;
use crate::api::types::AppEvent;
use crate::surface::canvas::{CanvasCommand, CanvasFrame, Rgba};

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_SURFACE_WIDTH: usize = 1;
pub const HEADER_SURFACE_HEIGHT: usize = 2;
pub const HEADER_CIRCLE_COUNT: usize = 3;
pub const HEADER_LINE_COUNT: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_FRAME_COUNTER: usize = 6;
pub const HEADER_RESERVED: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per circle: x, y, radius, r, g, b, a (wire format — never changes).
pub const CIRCLE_FLOATS: usize = 7;

/// Floats per line: x1, y1, x2, y2, width, r, g, b, a (wire format — never changes).
pub const LINE_FLOATS: usize = 9;

/// Floats per app event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = AppEvent::FLOATS;

/// Default outbound event capacity per frame.
pub const DEFAULT_MAX_EVENTS: usize = 32;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum circles per frame (one per particle).
    pub max_circles: usize,
    /// Maximum connection lines per frame.
    pub max_lines: usize,
    /// Maximum app events per frame.
    pub max_events: usize,

    /// Size of the circle section in floats.
    pub circle_data_floats: usize,
    /// Size of the line section in floats.
    pub line_data_floats: usize,
    /// Size of the event section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where circle data begins.
    pub circle_data_offset: usize,
    /// Offset (in floats) where line data begins.
    pub line_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_circles: usize, max_lines: usize, max_events: usize) -> Self {
        let circle_data_floats = max_circles * CIRCLE_FLOATS;
        let line_data_floats = max_lines * LINE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let circle_data_offset = HEADER_FLOATS;
        let line_data_offset = circle_data_offset + circle_data_floats;
        let event_data_offset = line_data_offset + line_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_circles,
            max_lines,
            max_events,
            circle_data_floats,
            line_data_floats,
            event_data_floats,
            circle_data_offset,
            line_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig. Line capacity is the worst-case
    /// pair count of the particle cap.
    pub fn from_config(config: &AppConfig) -> Self {
        let n = config.max_particles;
        Self::new(n, n * n.saturating_sub(1) / 2, DEFAULT_MAX_EVENTS)
    }
}

/// Flat f32 buffer the page reads each frame. One writer (the runner), one
/// reader (the page), alternating by frame.
pub struct CanvasBuffer {
    layout: ProtocolLayout,
    data: Vec<f32>,
    frame_counter: f32,
}

impl CanvasBuffer {
    pub fn new(layout: ProtocolLayout) -> Self {
        let mut data = vec![0.0; layout.buffer_total_floats];
        data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        data[HEADER_RESERVED] = 0.0;
        Self {
            layout,
            data,
            frame_counter: 0.0,
        }
    }

    fn write_color(dst: &mut [f32], color: Rgba) {
        dst[0] = color.r as f32 / 255.0;
        dst[1] = color.g as f32 / 255.0;
        dst[2] = color.b as f32 / 255.0;
        dst[3] = color.a;
    }

    /// Pack one frame. Counts clamp at capacity; a frame that overflows its
    /// section is truncated, never resized.
    pub fn pack(&mut self, frame: &CanvasFrame, events: &[AppEvent], surface: (f32, f32)) {
        let mut circles = 0usize;
        let mut lines = 0usize;

        for command in frame.commands() {
            match *command {
                CanvasCommand::Clear => {
                    // Implicit: every frame is a full redraw.
                }
                CanvasCommand::FillCircle { center, radius, color } => {
                    if circles < self.layout.max_circles {
                        let at = self.layout.circle_data_offset + circles * CIRCLE_FLOATS;
                        self.data[at] = center.x;
                        self.data[at + 1] = center.y;
                        self.data[at + 2] = radius;
                        Self::write_color(&mut self.data[at + 3..at + 7], color);
                        circles += 1;
                    }
                }
                CanvasCommand::StrokeLine { from, to, width, color } => {
                    if lines < self.layout.max_lines {
                        let at = self.layout.line_data_offset + lines * LINE_FLOATS;
                        self.data[at] = from.x;
                        self.data[at + 1] = from.y;
                        self.data[at + 2] = to.x;
                        self.data[at + 3] = to.y;
                        self.data[at + 4] = width;
                        Self::write_color(&mut self.data[at + 5..at + 9], color);
                        lines += 1;
                    }
                }
            }
        }

        let event_count = events.len().min(self.layout.max_events);
        let event_floats: &[f32] = bytemuck::cast_slice(&events[..event_count]);
        let at = self.layout.event_data_offset;
        self.data[at..at + event_floats.len()].copy_from_slice(event_floats);

        self.frame_counter += 1.0;
        self.data[HEADER_SURFACE_WIDTH] = surface.0;
        self.data[HEADER_SURFACE_HEIGHT] = surface.1;
        self.data[HEADER_CIRCLE_COUNT] = circles as f32;
        self.data[HEADER_LINE_COUNT] = lines as f32;
        self.data[HEADER_EVENT_COUNT] = event_count as f32;
        self.data[HEADER_FRAME_COUNTER] = self.frame_counter;
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len_floats(&self) -> usize {
        self.data.len()
    }

    pub fn circle_count(&self) -> usize {
        self.data[HEADER_CIRCLE_COUNT] as usize
    }

    pub fn line_count(&self) -> usize {
        self.data[HEADER_LINE_COUNT] as usize
    }

    pub fn event_count(&self) -> usize {
        self.data[HEADER_EVENT_COUNT] as usize
    }
}
