use eframe::egui;

use crate::chart::{self, ChartSpec, CHART_HEIGHT, CHART_WIDTH};
use crate::error::TraceError;

/// Shows the rendered chart until the user closes the window.
struct ChartApp {
    size: [usize; 2],
    rgb: Vec<u8>,
    texture: Option<egui::TextureHandle>,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.texture.is_none() {
            let image = egui::ColorImage::from_rgb(self.size, &self.rgb);
            self.texture =
                Some(ctx.load_texture("looptrace_chart", image, egui::TextureOptions::LINEAR));
        }
        if let Some(texture) = &self.texture {
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(egui::Color32::WHITE))
                .show(ctx, |ui| {
                    ui.image((texture.id(), texture.size_vec2()));
                });
        }
    }
}

/// Renders the chart description and hands it to the interactive display,
/// blocking until the user closes the window.
pub fn show(spec: &ChartSpec) -> Result<(), TraceError> {
    let rgb = chart::draw_rgb(spec, CHART_WIDTH, CHART_HEIGHT)?;
    let app = ChartApp {
        size: [CHART_WIDTH as usize, CHART_HEIGHT as usize],
        rgb,
        texture: None,
    };
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([CHART_WIDTH as f32, CHART_HEIGHT as f32])
        .with_title("looptrace");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native("looptrace_plot", options, Box::new(move |_cc| Box::new(app)))?;
    Ok(())
}
