use super::*;

pub fn create_location(
    connections: &sqlite::Connections,
    new_location: usecases::NewLocation,
) -> Result<Location> {
    let location = connections
        .exclusive()?
        .transaction(|conn| usecases::create_location(conn, new_location))?;
    Ok(location)
}

pub fn update_location(
    connections: &sqlite::Connections,
    id: &str,
    update: usecases::LocationUpdate,
) -> Result<Location> {
    let location = connections
        .exclusive()?
        .transaction(|conn| usecases::update_location(conn, id, update))?;
    Ok(location)
}

/// Returns the number of stops that have been removed together
/// with the location.
pub fn delete_location(
    connections: &sqlite::Connections,
    id: &str,
    policy: usecases::LocationDeletionPolicy,
) -> Result<usize> {
    let removed_stops = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_location(conn, id, policy))?;
    Ok(removed_stops)
}

pub fn upsert_translation(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    location_id: &str,
    language: &str,
    content: TranslatedContent,
) -> Result<Translation> {
    let translation = connections.exclusive()?.transaction(|conn| {
        usecases::upsert_translation(conn, &settings.base_language, location_id, language, content)
    })?;
    Ok(translation)
}

pub fn add_location_detail(
    connections: &sqlite::Connections,
    location_id: &str,
    new_detail: usecases::NewLocationDetail,
) -> Result<LocationDetail> {
    let detail = connections
        .exclusive()?
        .transaction(|conn| usecases::add_location_detail(conn, location_id, new_detail))?;
    Ok(detail)
}

pub fn resolve_location(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    id: &str,
    language: &LanguageCode,
) -> Result<usecases::ResolvedLocation> {
    let db = connections.shared()?;
    Ok(usecases::resolve_location(&db, settings, id, language)?)
}

pub fn resolve_locations(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    filter: &LocationFilter,
    language: &LanguageCode,
    pagination: &Pagination,
) -> Result<Vec<usecases::ResolvedLocation>> {
    let db = connections.shared()?;
    Ok(usecases::resolve_locations(
        &db, settings, filter, language, pagination,
    )?)
}
