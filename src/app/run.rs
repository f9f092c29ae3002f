//! Running a picking session in a native window.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::config::PickConfig;
use crate::data::image::PixelArray;
use crate::data::session::PickSession;
use crate::error::Result;

use super::picker_app::PickerApp;

/// Drives one session from start to end.
///
/// `run` returns once the session is over or its window was closed. The session is
/// shared with the caller, which reads the picked points after `run` returns.
pub trait SessionRunner {
    fn run(
        &mut self,
        images: &[PixelArray],
        session: Rc<RefCell<PickSession>>,
        config: &PickConfig,
    ) -> Result<()>;
}

/// Opens an eframe window and blocks until it closes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeRunner;

impl NativeRunner {
    fn native_options(images: &[PixelArray], config: &PickConfig) -> eframe::NativeOptions {
        let mut opts = eframe::NativeOptions::default();
        if let Some(backend) = config.backend {
            opts.renderer = backend.renderer();
        }

        let aspect = images.first().map(|img| img.aspect()).unwrap_or(1.0);
        opts.viewport = egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(config.window_size(aspect));
        opts
    }
}

impl SessionRunner for NativeRunner {
    fn run(
        &mut self,
        images: &[PixelArray],
        session: Rc<RefCell<PickSession>>,
        config: &PickConfig,
    ) -> Result<()> {
        let opts = Self::native_options(images, config);
        let images = images.to_vec();
        let cfg = config.clone();

        eframe::run_native(
            &config.title,
            opts,
            Box::new(move |cc| Ok(Box::new(PickerApp::new(&cc.egui_ctx, &images, session, cfg)))),
        )?;
        Ok(())
    }
}
