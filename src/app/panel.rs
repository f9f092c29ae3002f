//! One image shown in a plot, with the points picked on it.
//!
//! Images are laid out like `imshow`: pixel centres on integer coordinates,
//! row 0 at the top. egui_plot's y axis points up, so the plot shows image
//! row `r` at plot `y = -r` and [`ImageExtent`] converts between the two.

use egui::Vec2;
use egui_plot::{Line, Plot, PlotImage, PlotPoint, Points};

use crate::config::PickConfig;
use crate::data::image::PixelArray;
use crate::data::session::{PickEvent, PickSession, Point};

/// Image-space footprint of a `rows x cols` image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageExtent {
    pub rows: usize,
    pub cols: usize,
}

impl ImageExtent {
    pub fn of(image: &PixelArray) -> Self {
        Self {
            rows: image.rows(),
            cols: image.cols(),
        }
    }

    /// `true` when `p` (image space) falls on the image, edges included.
    pub fn contains(&self, p: Point) -> bool {
        let (w, h) = (self.cols as f64, self.rows as f64);
        (-0.5..=w - 0.5).contains(&p[0]) && (-0.5..=h - 0.5).contains(&p[1])
    }

    pub fn to_image(&self, p: PlotPoint) -> Point {
        [p.x, -p.y]
    }

    pub fn to_plot(&self, p: Point) -> [f64; 2] {
        [p[0], -p[1]]
    }

    /// Plot-space centre of the displayed image.
    pub fn center(&self) -> PlotPoint {
        PlotPoint::new(
            self.cols as f64 / 2.0 - 0.5,
            -(self.rows as f64 / 2.0 - 0.5),
        )
    }

    pub fn size(&self) -> Vec2 {
        egui::vec2(self.cols as f32, self.rows as f32)
    }
}

/// Texture plus layout for one displayed image.
pub struct ImagePanel {
    pub index: usize,
    pub extent: ImageExtent,
    texture: egui::TextureHandle,
}

impl ImagePanel {
    /// Upload `image` as a texture. Done once per window.
    pub fn new(
        ctx: &egui::Context,
        index: usize,
        image: &PixelArray,
        texture: egui::TextureOptions,
    ) -> Self {
        let handle = ctx.load_texture(
            format!("epic_image_{}", index),
            image.to_color_image(),
            texture,
        );
        Self {
            index,
            extent: ImageExtent::of(image),
            texture: handle,
        }
    }

    /// Draw the image and its points. Returns a click event when the plot was clicked.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        session: &PickSession,
        cfg: &PickConfig,
        height: f32,
    ) -> Option<PickEvent> {
        let ext = self.extent;
        let look = &cfg.render;

        let plot_resp = Plot::new(("epic_panel", self.index))
            .height(height)
            .data_aspect(1.0)
            .show_axes(cfg.ticks)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .include_x(-0.5)
            .include_x(ext.cols as f64 - 0.5)
            .include_y(0.5)
            .include_y(-(ext.rows as f64 - 0.5))
            .show(ui, |plot_ui| {
                plot_ui.image(
                    PlotImage::new("image", self.texture.id(), ext.center(), ext.size())
                        .tint(look.tint),
                );

                if cfg.line {
                    for [a, b] in session.segments(self.index) {
                        plot_ui.line(
                            Line::new("segment", vec![ext.to_plot(a), ext.to_plot(b)])
                                .color(look.line_color)
                                .width(look.line_width),
                        );
                    }
                }

                let picked: Vec<[f64; 2]> = session
                    .points(self.index)
                    .iter()
                    .map(|p| ext.to_plot(*p))
                    .collect();
                if !picked.is_empty() {
                    plot_ui.points(
                        Points::new("picked", picked)
                            .radius(look.marker_radius)
                            .color(look.marker_color),
                    );
                }
            });

        if !plot_resp.response.clicked() {
            return None;
        }
        let screen_pos = plot_resp.response.interact_pointer_pos()?;
        let point = ext.to_image(plot_resp.transform.value_from_position(screen_pos));
        Some(PickEvent::Click {
            panel: ext.contains(point).then_some(self.index),
            point,
        })
    }
}
