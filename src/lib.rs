//! epic crate root: re-exports and module wiring.
//!
//! Interactive point picking on one or two images, built on egui/eframe and egui_plot:
//! - `data`: image loading and the picking session state
//! - `app`: the picker window and the runner that shows it
//! - `picker`: blocking `pick_single` / `pick_multi` entry points
//! - `persistence`: plain-text export of picked points
//! - `launcher`: dialog-driven pick, save and repeat loop

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod launcher;
pub mod persistence;
pub mod picker;

// Public re-exports for a compact external API
pub use app::{NativeRunner, PickerApp, SessionRunner};
pub use config::{Backend, PickConfig, PickKeys, PointLimit, RenderOptions};
pub use data::image::{load_image, ImageSource, PixelArray};
pub use data::session::{EventOutcome, PickEvent, PickKey, PickSession, Point, SessionState};
pub use error::{PickError, Result};
pub use launcher::{launch, launch_with, LaunchSummary, Prompter, RfdPrompter};
pub use persistence::{read_points, save_points, write_points, PickedFile, PickedSet};
pub use picker::{pick_multi, pick_multi_with, pick_single, pick_single_with};
