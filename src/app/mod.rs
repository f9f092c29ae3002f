//! Picker window.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`panel`]       | One image in an `egui_plot` plot, hit testing and overlay drawing |
//! | `picker_app`    | [`PickerApp`], the `eframe::App` forwarding input to the session |
//! | `run`           | [`SessionRunner`] seam and the native-window [`NativeRunner`] |

pub mod panel;
mod picker_app;
mod run;

pub use picker_app::PickerApp;
pub use run::{NativeRunner, SessionRunner};
