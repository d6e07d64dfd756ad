use image::imageops::FilterType;
use rand::Rng;
use ratatui::layout::Rect;
use ratatui::Frame;
use ratatui_image::picker::Picker;
use ratatui_image::Image;

use crate::app::settings::ResampleFilter;
use crate::layout::geometry::BORDER;
use crate::ui::colors::Colors;
use crate::ui::render::ImageSpec;

const FILTERS: [FilterType; 5] = [
    FilterType::Nearest,
    FilterType::Triangle,
    FilterType::CatmullRom,
    FilterType::Gaussian,
    FilterType::Lanczos3,
];

/// Concrete resampling filter; `Random` picks a new one per call.
pub fn filter_type(filter: ResampleFilter) -> FilterType {
    match filter {
        ResampleFilter::Nearest => FilterType::Nearest,
        ResampleFilter::Triangle => FilterType::Triangle,
        ResampleFilter::CatmullRom => FilterType::CatmullRom,
        ResampleFilter::Gaussian => FilterType::Gaussian,
        ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        ResampleFilter::Random => FILTERS[rand::rng().random_range(0..FILTERS.len())],
    }
}

/// Pixel box available inside a bordered region of `cells_w` x `cells_h`.
/// Each cell shows two stacked pixels.
pub fn pixel_box(cells_w: i32, cells_h: i32) -> (u32, u32) {
    let w = (cells_w - BORDER).max(0);
    let h = (cells_h - BORDER).max(0) * 2;
    (w as u32, h as u32)
}

/// Columns taken by an image `target_width` pixels wide, borders included.
pub fn region_width(target_width: u32) -> i32 {
    if target_width == 0 {
        0
    } else {
        target_width as i32 + BORDER
    }
}

/// Picker for the half-block protocol, which works on every terminal.
pub fn picker() -> Picker {
    Picker::halfblocks()
}

/// Pixel size the picker needs for an image fitted to `target_width` x
/// `target_height` half-block pixels.
pub fn protocol_pixels(picker: &Picker, target_width: u32, target_height: u32) -> (u32, u32) {
    let (font_w, font_h) = picker.font_size();
    (
        target_width * font_w as u32,
        target_height * font_h as u32 / 2,
    )
}

/// Cells covered by an image fitted to `target_width` x `target_height`
/// half-block pixels.
pub fn protocol_area(target_width: u32, target_height: u32) -> Rect {
    let rows = target_height.div_ceil(2);
    Rect::new(0, 0, target_width.min(u16::MAX as u32) as u16, rows.min(u16::MAX as u32) as u16)
}

/// Draw the image region. A placeholder (no protocol) draws nothing; its
/// region has already collapsed to zero width.
pub fn draw_image(f: &mut Frame, area: Rect, spec: &ImageSpec, colors: &Colors) {
    let Some(protocol) = &spec.protocol else {
        return;
    };
    let block = colors.block(&spec.title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Image::new(protocol), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_box_doubles_rows_inside_borders() {
        assert_eq!(pixel_box(42, 30), (40, 56));
        assert_eq!(pixel_box(1, 1), (0, 0));
    }

    #[test]
    fn region_width_adds_borders_unless_empty() {
        assert_eq!(region_width(0), 0);
        assert_eq!(region_width(40), 42);
    }

    #[test]
    fn protocol_pixels_follow_font_size() {
        let p = picker();
        let (font_w, font_h) = p.font_size();
        assert_eq!(
            protocol_pixels(&p, 4, 6),
            (4 * font_w as u32, 3 * font_h as u32)
        );
    }

    #[test]
    fn odd_pixel_rows_round_up_to_a_cell() {
        assert_eq!(protocol_area(40, 20), Rect::new(0, 0, 40, 10));
        assert_eq!(protocol_area(40, 21), Rect::new(0, 0, 40, 11));
    }

    #[test]
    fn random_filter_is_one_of_the_fixed_set() {
        for _ in 0..20 {
            assert!(FILTERS.contains(&filter_type(ResampleFilter::Random)));
        }
    }
}
