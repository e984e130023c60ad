use std::collections::HashMap;

use super::prelude::*;
use crate::content::{self, ContentSettings, ResolvedContent};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub location: Location,
    pub content: ResolvedContent,
}

pub fn resolve_location<R>(
    repo: &R,
    settings: &ContentSettings,
    id: &str,
    language: &LanguageCode,
) -> Result<ResolvedLocation>
where
    R: LocationRepo + TranslationRepo,
{
    let location = get_location(repo, id)?;
    let translation = if language == &settings.base_language {
        None
    } else {
        repo.get_translation(id, language)?
    };
    let content = content::resolve(
        &location,
        translation.as_ref(),
        language,
        &settings.base_language,
    );
    Ok(ResolvedLocation { location, content })
}

pub fn resolve_locations<R>(
    repo: &R,
    settings: &ContentSettings,
    filter: &LocationFilter,
    language: &LanguageCode,
    pagination: &Pagination,
) -> Result<Vec<ResolvedLocation>>
where
    R: LocationRepo + TranslationRepo,
{
    let locations = repo.query_locations(filter, pagination)?;
    resolve_all(repo, settings, locations, language)
}

/// Resolves the content of many locations with a single
/// translation lookup.
pub(crate) fn resolve_all<R: TranslationRepo>(
    repo: &R,
    settings: &ContentSettings,
    locations: Vec<Location>,
    language: &LanguageCode,
) -> Result<Vec<ResolvedLocation>> {
    let mut translations: HashMap<Id, Translation> = if language == &settings.base_language {
        HashMap::new()
    } else {
        let ids: Vec<_> = locations.iter().map(|l| l.id.as_str()).collect();
        repo.get_translations(&ids, language)?
            .into_iter()
            .map(|t| (t.location_id.clone(), t))
            .collect()
    };
    Ok(locations
        .into_iter()
        .map(|location| {
            let translation = translations.remove(&location.id);
            let content = content::resolve(
                &location,
                translation.as_ref(),
                language,
                &settings.base_language,
            );
            ResolvedLocation { location, content }
        })
        .collect())
}
