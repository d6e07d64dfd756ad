//! Pure layout: region geometry and image fitting.

pub mod fit;
pub mod geometry;

pub use fit::{fit, FittedImage};
pub use geometry::{
    compute_list_column_width, compute_regions, compute_regions_with_image, image_box, Region,
    RegionSet, TerminalFrame,
};
