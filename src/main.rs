use eframe::egui;
use std::cell::Cell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use tab_slider::{
    SliderSettings, TabSettings, TabSlider, TabSliderColors, TabSliderConfig, TabSliderWidget,
};

const HORIZONTAL_RANGE: RangeInclusive<f32> = 0.0..=10.0;
const VERTICAL_RANGE: RangeInclusive<f32> = 0.0..=300.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tab_slider::init_logging();

    // Optional JSON config for the horizontal slider
    let config = match std::env::args().nth(1) {
        Some(path) => TabSliderConfig::load_or_default(path),
        None => TabSliderConfig::default(),
    };
    let app = DemoApp::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_title("Tab Slider"),
        ..Default::default()
    };

    eframe::run_native("Tab Slider", options, Box::new(|_cc| Box::new(app)))?;
    Ok(())
}

struct DemoApp {
    horizontal: TabSliderWidget,
    vertical: TabSliderWidget,
    horizontal_value: Rc<Cell<f32>>,
    vertical_value: Rc<Cell<f32>>,
    drags_finished: Rc<Cell<u32>>,
}

impl DemoApp {
    fn new(config: TabSliderConfig) -> tab_slider::Result<Self> {
        let horizontal_value = Rc::new(Cell::new(4.0));
        let vertical_value = Rc::new(Cell::new(120.0));
        let drags_finished = Rc::new(Cell::new(0));

        let slider = config
            .slider
            .clone()
            .with_labels(label(*HORIZONTAL_RANGE.start()), label(*HORIZONTAL_RANGE.end()));
        let config = config.with_slider(slider);
        let sink = horizontal_value.clone();
        let finished = drags_finished.clone();
        let horizontal = TabSlider::horizontal(horizontal_value.get(), HORIZONTAL_RANGE, config)?
            .on_value_change(move |value| sink.set(value))
            .on_value_change_finished(move || finished.set(finished.get() + 1));

        let vertical_config = TabSliderConfig::default()
            .with_colors(
                TabSliderColors::default()
                    .with_slider(egui::Color32::BLACK)
                    .with_tab(egui::Color32::LIGHT_GRAY, egui::Color32::LIGHT_GRAY)
                    .with_tab_text(egui::Color32::BLACK)
                    .with_background(egui::Color32::LIGHT_GRAY.gamma_multiply(0.2)),
            )
            .with_slider(
                SliderSettings::default()
                    .with_labels(label(*VERTICAL_RANGE.start()), label(*VERTICAL_RANGE.end())),
            )
            .with_tab(
                TabSettings::default()
                    .with_expanded_size_multiplier(2.0)
                    .with_expansion_speed_ms(100),
            );
        let sink = vertical_value.clone();
        let finished = drags_finished.clone();
        let vertical = TabSlider::vertical(vertical_value.get(), VERTICAL_RANGE, vertical_config)?
            .on_value_change(move |value| sink.set(value))
            .on_value_change_finished(move || finished.set(finished.get() + 1));

        Ok(Self {
            horizontal: TabSliderWidget::new(horizontal),
            vertical: TabSliderWidget::new(vertical).with_length(360.0),
            horizontal_value,
            vertical_value,
            drags_finished,
        })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::WHITE).inner_margin(20.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.horizontal.show(ui);
                    ui.add_space(40.0);
                    self.vertical.show(ui);
                    ui.add_space(20.0);
                    ui.label(format!(
                        "horizontal: {:.2}   vertical: {:.1}   drags: {}",
                        self.horizontal_value.get(),
                        self.vertical_value.get(),
                        self.drags_finished.get()
                    ));
                });
            });
    }
}

fn label(bound: f32) -> String {
    (bound.round() as i64).to_string()
}
