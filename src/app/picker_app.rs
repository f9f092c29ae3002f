//! The eframe application shown during one picking session.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::config::PickConfig;
use crate::data::image::PixelArray;
use crate::data::session::{EventOutcome, PickEvent, PickKey, PickSession};

use super::panel::ImagePanel;

/// Window with one plot per image, stacked top to bottom.
///
/// Clicks and keys are forwarded to the shared [`PickSession`]; once the session
/// is over the viewport closes itself, which returns control to the caller of
/// [`NativeRunner`](super::NativeRunner).
pub struct PickerApp {
    session: Rc<RefCell<PickSession>>,
    panels: Vec<ImagePanel>,
    config: PickConfig,
    close_sent: bool,
}

impl PickerApp {
    pub fn new(
        ctx: &egui::Context,
        images: &[PixelArray],
        session: Rc<RefCell<PickSession>>,
        config: PickConfig,
    ) -> Self {
        let panels = images
            .iter()
            .enumerate()
            .map(|(i, img)| ImagePanel::new(ctx, i, img, config.render.texture))
            .collect();
        session.borrow_mut().start();
        Self {
            session,
            panels,
            config,
            close_sent: false,
        }
    }

    fn key_event(&self, ctx: &egui::Context) -> Option<PickEvent> {
        let keys = self.config.keys;
        ctx.input(|i| {
            if i.key_pressed(keys.cancel) {
                Some(PickEvent::Key(PickKey::Cancel))
            } else if i.key_pressed(keys.finish) {
                Some(PickEvent::Key(PickKey::Finish))
            } else if i.viewport().close_requested() {
                Some(PickEvent::Close)
            } else {
                None
            }
        })
    }

    fn apply(&mut self, event: PickEvent) {
        let outcome = self.session.borrow_mut().handle(event);
        match outcome {
            EventOutcome::Recorded { panel, index } => {
                if let PickEvent::Click { point, .. } = event {
                    log::debug!(
                        "image {}: point {} at ({:.2}, {:.2})",
                        panel,
                        index,
                        point[0],
                        point[1]
                    );
                }
            }
            EventOutcome::Ignored => log::debug!("ignored {:?}", event),
            EventOutcome::Finished => log::info!("picking finished"),
            EventOutcome::Cancelled => log::info!("picking cancelled, points cleared"),
        }
    }
}

/// A primary click that no plot reported, e.g. one between the stacked images.
///
/// It carries the screen position and no panel, so the session only uses it
/// to finish once every image is full.
fn stray_click(events: &[PickEvent], pressed_at: Option<egui::Pos2>) -> Option<PickEvent> {
    let pos = pressed_at?;
    if events.iter().any(|e| matches!(e, PickEvent::Click { .. })) {
        return None;
    }
    Some(PickEvent::Click {
        panel: None,
        point: [pos.x as f64, pos.y as f64],
    })
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<PickEvent> = Vec::new();
        events.extend(self.key_event(ctx));

        egui::CentralPanel::default().show(ctx, |ui| {
            let n = self.panels.len().max(1) as f32;
            let gap = ui.spacing().item_spacing.y;
            let height = ((ui.available_height() - gap * (n - 1.0)) / n).max(1.0);
            let session = self.session.borrow();
            for panel in &self.panels {
                events.extend(panel.show(ui, &session, &self.config, height));
            }
        });

        let pressed_at = ctx.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(stray) = stray_click(&events, pressed_at) {
            events.push(stray);
        }

        for event in events {
            self.apply(event);
        }

        if self.session.borrow().is_over() && !self.close_sent {
            self.close_sent = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
