//! Remote collaborators: the beer list and per-record images.
//!
//! The browser only depends on the two traits; `HttpFetcher` is the
//! production implementation.

pub mod cache;
pub mod http;

pub use cache::CachedImageSource;
pub use http::HttpFetcher;

use serde::Deserialize;

use crate::app::types::{Collection, Ingredient, Record};
use crate::errors::BrowseError;

/// Source of the record list.
pub trait CollectionSource {
    fn fetch_collection(&self, url: &str) -> Result<Vec<Record>, BrowseError>;
}

/// Source of raw image bytes.
pub trait ImageSource {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, BrowseError>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, BrowseError> {
        (**self).fetch_image(url)
    }
}

/// Fetch the list once and reject an empty one before anything is drawn.
pub fn load_collection<S: CollectionSource + ?Sized>(
    source: &S,
    url: &str,
) -> Result<Collection, BrowseError> {
    let records = source.fetch_collection(url)?;
    tracing::info!(url, count = records.len(), "fetched beer list");
    Collection::new(records)
}

#[derive(Deserialize)]
struct WireAmount {
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
}

#[derive(Deserialize)]
struct WireMalt {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    amount: Option<WireAmount>,
}

#[derive(Deserialize, Default)]
struct WireIngredients {
    #[serde(default)]
    malt: Vec<WireMalt>,
}

#[derive(Deserialize)]
struct WireBeer {
    id: u32,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    ibu: Option<f64>,
    #[serde(default)]
    ingredients: Option<WireIngredients>,
}

impl From<WireBeer> for Record {
    fn from(w: WireBeer) -> Self {
        let ingredients = w
            .ingredients
            .unwrap_or_default()
            .malt
            .into_iter()
            .map(|m| {
                let (amount, unit) = m
                    .amount
                    .map(|a| (a.value.unwrap_or_default(), a.unit.unwrap_or_default()))
                    .unwrap_or_default();
                Ingredient::new(m.name.unwrap_or_default(), amount, unit)
            })
            .collect();
        Record {
            id: w.id,
            name: w.name.unwrap_or_default(),
            tagline: w.tagline.unwrap_or_default(),
            description: w.description.unwrap_or_default(),
            image_ref: w.image_url.unwrap_or_default(),
            bitterness: w.ibu.unwrap_or_default(),
            ingredients,
        }
    }
}

/// Decode a JSON array of beers. Ids are 1-based; an id of 0 rejects the
/// whole payload.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, BrowseError> {
    let wire: Vec<WireBeer> =
        serde_json::from_slice(bytes).map_err(|e| BrowseError::Decode(e.to_string()))?;
    if let Some(pos) = wire.iter().position(|w| w.id == 0) {
        return Err(BrowseError::Decode(format!(
            "beer #{} has id 0; ids start at 1",
            pos + 1
        )));
    }
    Ok(wire.into_iter().map(Record::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"id": 1, "name": "Buzz", "tagline": "A Real Bitter Experience.",
         "description": "A light, crisp and bitter IPA.",
         "image_url": "https://images.punkapi.com/v2/keg.png", "ibu": 60,
         "ingredients": {"malt": [
            {"name": "Maris Otter Extra Pale", "amount": {"value": 3.3, "unit": "kilograms"}},
            {"name": "Caramalt", "amount": {"value": 0.2, "unit": "kilograms"}}
         ], "hops": []}},
        {"id": 2, "name": "Trashy Blonde", "ibu": null, "image_url": null}
    ]"#;

    struct Fixed(Vec<Record>);

    impl CollectionSource for Fixed {
        fn fetch_collection(&self, _url: &str) -> Result<Vec<Record>, BrowseError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn decodes_punkapi_shape() {
        let records = decode_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        let buzz = &records[0];
        assert_eq!(buzz.name, "Buzz");
        assert_eq!(buzz.bitterness, 60.0);
        assert_eq!(buzz.ingredients[0], Ingredient::new("Maris Otter Extra Pale", 3.3, "kilograms"));
        let blonde = &records[1];
        assert_eq!(blonde.bitterness, 0.0);
        assert!(blonde.image_ref.is_empty());
        assert!(blonde.ingredients.is_empty());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        assert!(matches!(decode_records(b"{\"id\": 1}"), Err(BrowseError::Decode(_))));
    }

    #[test]
    fn zero_id_is_decode_error() {
        let err = decode_records(br#"[{"id": 1, "name": "a"}, {"id": 0, "name": "b"}]"#).unwrap_err();
        assert!(matches!(err, BrowseError::Decode(ref m) if m.contains("id 0")), "{:?}", err);
    }

    #[test]
    fn huge_ibu_decodes_and_fills_gauge() {
        let records = decode_records(br#"[{"id": 1, "ibu": 1e300}]"#).unwrap();
        assert_eq!(crate::ui::bar_ui::bitterness_percent(records[0].bitterness), 100);
    }

    #[test]
    fn empty_list_is_rejected_at_load() {
        let err = load_collection(&Fixed(Vec::new()), "http://x").unwrap_err();
        assert!(matches!(err, BrowseError::EmptyCollection));
    }

    #[test]
    fn non_empty_list_loads() {
        let records = decode_records(SAMPLE.as_bytes()).unwrap();
        let c = load_collection(&Fixed(records), "http://x").unwrap();
        assert_eq!(c.len(), 2);
    }
}
