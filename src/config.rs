//! Configuration shared by the single- and dual-image pickers.
//!
//! A [`PickConfig`] is cloned unchanged into every restart of a picking
//! session, so everything a session needs to rebuild its window lives here.

use egui::{Color32, Key, TextureOptions};

// ─────────────────────────────────────────────────────────────────────────────
// Point limit
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum number of points collected per image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointLimit {
    /// Keep accepting clicks until the user finishes or closes the window.
    #[default]
    Unlimited,
    /// Stop after this many points on each image.
    AtMost(usize),
}

impl PointLimit {
    /// `true` once `count` points satisfy the limit.
    pub fn is_reached(&self, count: usize) -> bool {
        match self {
            PointLimit::Unlimited => false,
            PointLimit::AtMost(n) => count >= *n,
        }
    }

    /// The cap as a number, `None` when unlimited.
    pub fn cap(&self) -> Option<usize> {
        match self {
            PointLimit::Unlimited => None,
            PointLimit::AtMost(n) => Some(*n),
        }
    }
}

/// Integer form of the limit: `-1` (or any negative value) means unlimited.
impl From<i64> for PointLimit {
    fn from(n: i64) -> Self {
        if n < 0 {
            PointLimit::Unlimited
        } else {
            PointLimit::AtMost(n as usize)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend
// ─────────────────────────────────────────────────────────────────────────────

/// Rendering backend used for the picker window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Wgpu,
    Glow,
}

impl Backend {
    pub fn renderer(self) -> eframe::Renderer {
        match self {
            Backend::Wgpu => eframe::Renderer::Wgpu,
            Backend::Glow => eframe::Renderer::Glow,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

/// Keys that end a picking session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickKeys {
    /// Ends the session and returns the picked points.
    pub finish: Key,
    /// Clears the picked points and restarts the session.
    pub cancel: Key,
}

impl Default for PickKeys {
    fn default() -> Self {
        Self {
            finish: Key::Enter,
            cancel: Key::Escape,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Render options
// ─────────────────────────────────────────────────────────────────────────────

/// Look of the displayed images and the picked-point overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Multiplied with every image pixel. `WHITE` shows the image unchanged.
    pub tint: Color32,
    /// Sampling used for the image textures.
    pub texture: TextureOptions,
    pub marker_color: Color32,
    /// Marker radius in screen points.
    pub marker_radius: f32,
    /// Colour of the segments drawn in line mode.
    pub line_color: Color32,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tint: Color32::WHITE,
            texture: TextureOptions::NEAREST,
            marker_color: Color32::from_rgb(31, 119, 180),
            marker_radius: 3.0,
            line_color: Color32::BLACK,
            line_width: 1.5,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PickConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of a picking session.
#[derive(Clone, Debug, PartialEq)]
pub struct PickConfig {
    /// Number of points to pick per image.
    pub limit: PointLimit,
    /// Window width in display units (see [`PickConfig::UNIT_PX`]). Default: `15.0`.
    pub width: f32,
    /// Renderer selection. `None` uses whatever eframe picks by default.
    pub backend: Option<Backend>,
    /// Show the plot axes with tick labels.
    pub ticks: bool,
    /// Connect successive points on the same image with a line.
    pub line: bool,
    pub keys: PickKeys,
    pub render: RenderOptions,
    /// Window title.
    pub title: String,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            limit: PointLimit::Unlimited,
            width: 15.0,
            backend: Some(Backend::Wgpu),
            ticks: false,
            line: false,
            keys: PickKeys::default(),
            render: RenderOptions::default(),
            title: "epic".to_string(),
        }
    }
}

impl PickConfig {
    /// Logical pixels per width unit.
    pub const UNIT_PX: f32 = 64.0;

    pub fn with_limit(mut self, limit: PointLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_backend(mut self, backend: Option<Backend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_line(mut self, line: bool) -> Self {
        self.line = line;
        self
    }

    pub fn with_keys(mut self, keys: PickKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Inner window size for an image with the given `rows / cols` aspect.
    ///
    /// All stacked panels share this height, like subplots sharing one figure.
    pub fn window_size(&self, aspect: f64) -> egui::Vec2 {
        let w = self.width * Self::UNIT_PX;
        egui::vec2(w, w * aspect as f32)
    }
}
