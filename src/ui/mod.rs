use ratatui::layout::Rect;
use ratatui::Frame;

use crate::layout::Region;

pub mod bar_ui;
pub mod colors;
pub mod image;
pub mod panels;
pub mod render;
pub mod table_ui;

pub use colors::Colors;
pub use render::{RenderedFrame, Renderer};

/// Paint every region of `rendered` into `f`. Called from inside a single
/// `Terminal::draw`, so the viewer only ever sees complete frames.
pub fn paint(f: &mut Frame, rendered: &RenderedFrame, colors: &Colors) {
    let screen = f.area();
    // Regions were computed from a sampled size; never draw past the buffer.
    let area = |r: Region| -> Rect { r.to_rect().intersection(screen) };
    let regions = &rendered.regions;

    panels::draw_list(f, area(regions.list), &rendered.list, colors);
    panels::draw_text(f, area(regions.name), &rendered.name, colors);
    panels::draw_text(f, area(regions.tagline), &rendered.tagline, colors);
    panels::draw_text(f, area(regions.description), &rendered.description, colors);
    bar_ui::draw_gauge(f, area(regions.gauge), &rendered.gauge, colors);
    table_ui::draw_ingredients(f, area(regions.ingredients), &rendered.ingredients, colors);
    if !regions.image.is_empty() {
        image::draw_image(f, area(regions.image), &rendered.image, colors);
    }
}
