use crate::{id::*, language::*};

/// Content of a location in a language other than the base language.
///
/// Every field is optional and overrides the corresponding field of
/// the location individually.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatedContent {
    pub name: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub location_id: Id,
    pub language: LanguageCode,
    pub content: TranslatedContent,
}
