//! Localised region titles.
//!
//! Built-in English and Hungarian tables, optionally overridden by flat JSON
//! message files (`{"list.title": "..."}`) named after the language tag.

use std::collections::HashMap;
use std::path::Path;

use crate::app::settings::Language;

/// Returned for keys missing from the active table.
pub const MISSING: &str = "N/A";

/// Every string the UI asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    ListTitle,
    NameTitle,
    TaglineTitle,
    DescriptionTitle,
    IbuTitle,
    IbuUnit,
    IngredientsTitle,
    IngredientsMalt,
    IngredientsAmount,
    IngredientsUnit,
    ImageTitle,
}

impl TextKey {
    pub const ALL: [TextKey; 11] = [
        TextKey::ListTitle,
        TextKey::NameTitle,
        TextKey::TaglineTitle,
        TextKey::DescriptionTitle,
        TextKey::IbuTitle,
        TextKey::IbuUnit,
        TextKey::IngredientsTitle,
        TextKey::IngredientsMalt,
        TextKey::IngredientsAmount,
        TextKey::IngredientsUnit,
        TextKey::ImageTitle,
    ];

    /// Message id used in the JSON files.
    pub fn id(&self) -> &'static str {
        match self {
            TextKey::ListTitle => "list.title",
            TextKey::NameTitle => "name.title",
            TextKey::TaglineTitle => "tagline.title",
            TextKey::DescriptionTitle => "description.title",
            TextKey::IbuTitle => "ibu.title",
            TextKey::IbuUnit => "ibu.unit",
            TextKey::IngredientsTitle => "ingredients.title",
            TextKey::IngredientsMalt => "ingredients.malt",
            TextKey::IngredientsAmount => "ingredients.amount",
            TextKey::IngredientsUnit => "ingredients.unit",
            TextKey::ImageTitle => "image.title",
        }
    }

    fn from_id(id: &str) -> Option<TextKey> {
        TextKey::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// Translation collaborator. Never fails.
pub trait Translate {
    fn translate(&self, key: TextKey) -> String;
}

fn builtin(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::English => match key {
            TextKey::ListTitle => "Beers",
            TextKey::NameTitle => "Name",
            TextKey::TaglineTitle => "Tagline",
            TextKey::DescriptionTitle => "Description",
            TextKey::IbuTitle => "Bitterness",
            TextKey::IbuUnit => "IBU",
            TextKey::IngredientsTitle => "Ingredients",
            TextKey::IngredientsMalt => "Malt",
            TextKey::IngredientsAmount => "Amount",
            TextKey::IngredientsUnit => "Unit",
            TextKey::ImageTitle => "Image",
        },
        Language::Hungarian => match key {
            TextKey::ListTitle => "Sörök",
            TextKey::NameTitle => "Név",
            TextKey::TaglineTitle => "Szlogen",
            TextKey::DescriptionTitle => "Leírás",
            TextKey::IbuTitle => "Keserűség",
            TextKey::IbuUnit => "IBU",
            TextKey::IngredientsTitle => "Összetevők",
            TextKey::IngredientsMalt => "Maláta",
            TextKey::IngredientsAmount => "Mennyiség",
            TextKey::IngredientsUnit => "Egység",
            TextKey::ImageTitle => "Kép",
        },
    }
}

/// String table for one language.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    table: HashMap<TextKey, String>,
}

impl Resources {
    /// Built-in strings for `language`.
    pub fn builtin(language: Language) -> Self {
        let table = TextKey::ALL
            .into_iter()
            .map(|k| (k, builtin(language, k).to_string()))
            .collect();
        Resources { table }
    }

    /// Table with exactly the given entries.
    pub fn from_map(table: HashMap<TextKey, String>) -> Self {
        Resources { table }
    }

    /// Built-in strings overridden by `<dir>/<tag>.json` when present.
    /// A malformed or unreadable file is logged and ignored.
    pub fn load(language: Language, messages_dir: Option<&Path>) -> Self {
        let mut res = Resources::builtin(language);
        if let Some(dir) = messages_dir {
            let path = dir.join(format!("{}.json", language.tag()));
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    if let Err(e) = res.merge_json(&text) {
                        tracing::warn!(path = %path.display(), "failed to parse message file: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to load message file: {}", e)
                }
            }
        }
        res
    }

    /// Overlay a flat JSON object of message ids. Unknown ids are skipped.
    pub fn merge_json(&mut self, text: &str) -> Result<(), serde_json::Error> {
        let messages: HashMap<String, String> = serde_json::from_str(text)?;
        for (id, value) in messages {
            match TextKey::from_id(&id) {
                Some(key) => {
                    self.table.insert(key, value);
                }
                None => tracing::debug!(id = %id, "ignoring unknown message id"),
            }
        }
        Ok(())
    }
}

impl Translate for Resources {
    fn translate(&self, key: TextKey) -> String {
        match self.table.get(&key) {
            Some(s) => s.clone(),
            None => {
                tracing::warn!(id = key.id(), "missing translation");
                MISSING.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_cover_every_key() {
        for lang in [Language::English, Language::Hungarian] {
            let res = Resources::builtin(lang);
            for key in TextKey::ALL {
                assert_ne!(res.translate(key), MISSING, "{:?} {:?}", lang, key);
            }
        }
    }

    #[test]
    fn missing_key_yields_sentinel() {
        let res = Resources::from_map(HashMap::new());
        assert_eq!(res.translate(TextKey::ImageTitle), MISSING);
    }

    #[test]
    fn message_file_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("hu.json"),
            r#"{"list.title": "Sörlista", "bogus.key": "x"}"#,
        )
        .unwrap();
        let res = Resources::load(Language::Hungarian, Some(dir.path()));
        assert_eq!(res.translate(TextKey::ListTitle), "Sörlista");
        assert_eq!(res.translate(TextKey::NameTitle), "Név");
    }

    #[test]
    fn broken_message_file_keeps_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), "not json").unwrap();
        let res = Resources::load(Language::English, Some(dir.path()));
        assert_eq!(res.translate(TextKey::IbuTitle), "Bitterness");
    }
}
