//! Resolution of the displayed content of a location.
//!
//! Each field of a translation overrides the corresponding base field
//! individually. Empty translated fields never hide the base content.

use crate::entities::*;

pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x300?text=Thi%E1%BA%BFu+%E1%BA%A3nh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSettings {
    pub base_language: LanguageCode,
    /// Displayed instead of a missing image
    pub placeholder_image_url: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            base_language: LanguageCode::base(),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_owned(),
        }
    }
}

/// Content of a location as it should be displayed in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub language: LanguageCode,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Selects the translated value if it is not blank and the base value otherwise.
pub fn fallback<'a>(base: Option<&'a str>, translated: Option<&'a str>) -> Option<&'a str> {
    match translated {
        Some(translated) if !translated.trim().is_empty() => Some(translated),
        _ => base,
    }
}

/// Resolves the content of `location` for the requested `language`.
///
/// The `translation` is only consulted if it matches the requested language
/// and that language is not the base language.
pub fn resolve(
    location: &Location,
    translation: Option<&Translation>,
    language: &LanguageCode,
    base_language: &LanguageCode,
) -> ResolvedContent {
    let content = translation
        .filter(|_| language != base_language)
        .filter(|t| &t.language == language)
        .map(|t| {
            debug_assert_eq!(t.location_id, location.id);
            &t.content
        });
    let translated = |select: fn(&TranslatedContent) -> Option<&str>| content.and_then(select);
    let name = fallback(
        Some(location.name.as_str()),
        translated(|c| c.name.as_deref()),
    )
    .unwrap_or_default()
    .to_owned();
    ResolvedContent {
        language: language.clone(),
        name,
        city: fallback(location.city.as_deref(), translated(|c| c.city.as_deref()))
            .map(ToOwned::to_owned),
        description: fallback(
            location.description.as_deref(),
            translated(|c| c.description.as_deref()),
        )
        .map(ToOwned::to_owned),
        category: fallback(
            location.category.as_deref(),
            translated(|c| c.category.as_deref()),
        )
        .map(ToOwned::to_owned),
    }
}
