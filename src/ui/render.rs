//! Render orchestration: turn the session and a fresh terminal sample into
//! one fully specified frame.
//!
//! `Renderer::render` performs the only side effect of a render (the image
//! fetch). Everything it returns is plain data, which `ui::paint` draws in a
//! single `Terminal::draw` call.

use std::fmt;

use image::GenericImageView;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::Protocol;
use ratatui_image::Resize;

use crate::app::settings::ResampleFilter;
use crate::app::types::Record;
use crate::app::Session;
use crate::errors::BrowseError;
use crate::fetch::ImageSource;
use crate::i18n::{TextKey, Translate};
use crate::layout::{
    compute_list_column_width, compute_regions_with_image, fit, image_box, FittedImage,
    RegionSet, TerminalFrame,
};
use crate::ui::bar_ui::{bitterness_label, bitterness_percent};
use crate::ui::image::{
    filter_type, picker, pixel_box, protocol_area, protocol_pixels, region_width,
};
use crate::ui::table_ui::format_ingredient;

#[derive(Debug, Clone, PartialEq)]
pub struct ListSpec {
    pub title: String,
    pub items: Vec<String>,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub title: String,
    pub percent: u16,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub header: [String; 3],
    pub rows: Vec<[String; 3]>,
}

pub struct ImageSpec {
    pub title: String,
    pub fitted: FittedImage,
    /// Half-block encoding of the resampled image; `None` when the image
    /// region is collapsed.
    pub protocol: Option<Protocol>,
}

impl ImageSpec {
    fn placeholder(title: String) -> Self {
        ImageSpec {
            title,
            fitted: FittedImage::placeholder(),
            protocol: None,
        }
    }
}

impl fmt::Debug for ImageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageSpec")
            .field("title", &self.title)
            .field("fitted", &self.fitted)
            .field("protocol", &self.protocol.as_ref().map(Protocol::area))
            .finish()
    }
}

/// Everything needed to paint one frame.
#[derive(Debug)]
pub struct RenderedFrame {
    pub frame: TerminalFrame,
    pub regions: RegionSet,
    pub list: ListSpec,
    pub name: TextSpec,
    pub tagline: TextSpec,
    pub description: TextSpec,
    pub gauge: GaugeSpec,
    pub ingredients: TableSpec,
    pub image: ImageSpec,
}

/// Builds `RenderedFrame`s from a session.
pub struct Renderer<S, T> {
    images: S,
    text: T,
    filter: ResampleFilter,
    picker: Picker,
}

impl<S: ImageSource, T: Translate> Renderer<S, T> {
    pub fn new(images: S, text: T, filter: ResampleFilter) -> Self {
        Renderer {
            images,
            text,
            filter,
            picker: picker(),
        }
    }

    /// Lay out and populate every region for the current record.
    ///
    /// Fails only when the cursor has not been positioned. Image failures
    /// collapse the image region and the rest of the frame still renders.
    pub fn render(
        &self,
        session: &Session,
        frame: TerminalFrame,
    ) -> Result<RenderedFrame, BrowseError> {
        let index = session.cursor().index().ok_or(BrowseError::Unpositioned)?;
        let record = session.current().ok_or(BrowseError::Unpositioned)?;
        let collection = session.collection();

        let list_width = compute_list_column_width(collection.max_label_len());
        let (box_w, box_h) = image_box(frame, list_width);
        let image = self.load_image(record, box_w, box_h);
        let regions =
            compute_regions_with_image(frame, list_width, region_width(image.fitted.target_width));

        tracing::debug!(
            index,
            width = frame.width,
            height = frame.height,
            list_width,
            image_width = regions.image.width,
            "render"
        );

        Ok(RenderedFrame {
            frame,
            regions,
            list: ListSpec {
                title: self.text.translate(TextKey::ListTitle),
                items: collection.records().iter().map(Record::label).collect(),
                selected: index,
            },
            name: self.text_spec(TextKey::NameTitle, &record.name),
            tagline: self.text_spec(TextKey::TaglineTitle, &record.tagline),
            description: self.text_spec(TextKey::DescriptionTitle, &record.description),
            gauge: GaugeSpec {
                title: self.text.translate(TextKey::IbuTitle),
                percent: bitterness_percent(record.bitterness),
                label: bitterness_label(record.bitterness, &self.text.translate(TextKey::IbuUnit)),
            },
            ingredients: TableSpec {
                title: self.text.translate(TextKey::IngredientsTitle),
                header: [
                    self.text.translate(TextKey::IngredientsMalt),
                    self.text.translate(TextKey::IngredientsAmount),
                    self.text.translate(TextKey::IngredientsUnit),
                ],
                rows: record.ingredients.iter().map(format_ingredient).collect(),
            },
            image,
        })
    }

    fn text_spec(&self, key: TextKey, text: &str) -> TextSpec {
        TextSpec {
            title: self.text.translate(key),
            text: text.to_string(),
        }
    }

    fn load_image(&self, record: &Record, box_w: i32, box_h: i32) -> ImageSpec {
        let title = self.text.translate(TextKey::ImageTitle);
        match self.fit_image(record, box_w, box_h) {
            Ok((fitted, protocol)) => ImageSpec {
                title,
                fitted,
                protocol,
            },
            Err(e) => {
                tracing::warn!(id = record.id, url = %record.image_ref, "image unavailable: {}", e);
                ImageSpec::placeholder(title)
            }
        }
    }

    fn fit_image(
        &self,
        record: &Record,
        box_w: i32,
        box_h: i32,
    ) -> Result<(FittedImage, Option<Protocol>), BrowseError> {
        let bytes = self.images.fetch_image(&record.image_ref)?;
        let decoded =
            image::load_from_memory(&bytes).map_err(|e| BrowseError::Decode(e.to_string()))?;
        let (src_w, src_h) = decoded.dimensions();
        let (fit_w, fit_h) = pixel_box(box_w, box_h);
        let fitted = fit(src_w, src_h, fit_w, fit_h)?;
        if fitted.is_empty() {
            return Ok((FittedImage::placeholder(), None));
        }
        let (px_w, px_h) =
            protocol_pixels(&self.picker, fitted.target_width, fitted.target_height);
        let resized = decoded.resize_exact(px_w, px_h, filter_type(self.filter));
        let protocol = self
            .picker
            .new_protocol(
                resized,
                protocol_area(fitted.target_width, fitted.target_height),
                Resize::Fit(None),
            )
            .map_err(|e| BrowseError::Decode(format!("image encoding failed: {:?}", e)))?;
        Ok((fitted, Some(protocol)))
    }
}
