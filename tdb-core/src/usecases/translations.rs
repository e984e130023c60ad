use super::prelude::*;

/// Creates or replaces the translation of a location into one language.
pub fn upsert_translation<R>(
    repo: &R,
    base_language: &LanguageCode,
    location_id: &str,
    language: &str,
    content: TranslatedContent,
) -> Result<Translation>
where
    R: LocationRepo + TranslationRepo,
{
    let language: LanguageCode = language.parse()?;
    if &language == base_language {
        // The base content is stored with the location itself
        return Err(Error::LanguageCode);
    }
    let location = get_location(repo, location_id)?;
    let TranslatedContent {
        name,
        city,
        description,
        category,
    } = content;
    let translation = Translation {
        location_id: location.id,
        language,
        content: TranslatedContent {
            name: super::non_empty(name),
            city: super::non_empty(city),
            description: super::non_empty(description),
            category: super::non_empty(category),
        },
    };
    repo.upsert_translation(&translation)?;
    log::info!(
        "Stored translation of location {location_id} into '{}'",
        translation.language
    );
    Ok(translation)
}
