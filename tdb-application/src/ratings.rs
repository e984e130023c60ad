use super::*;

pub fn rate_location(
    connections: &sqlite::Connections,
    new_rating: usecases::NewRating,
) -> Result<Rating> {
    let rating = connections
        .exclusive()?
        .transaction(|conn| usecases::rate_location(conn, new_rating))?;
    Ok(rating)
}

pub fn delete_rating(connections: &sqlite::Connections, id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_rating(conn, id))?;
    Ok(())
}

pub fn list_ratings(
    connections: &sqlite::Connections,
    location_id: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Rating>> {
    let db = connections.shared()?;
    Ok(usecases::list_ratings(&db, location_id, pagination)?)
}

pub fn top_rated_locations(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    min_reviews: usize,
    top_n: usize,
    language: &LanguageCode,
) -> Result<Vec<usecases::LocationSummary>> {
    let db = connections.shared()?;
    Ok(usecases::build_ranking(
        &db,
        settings,
        min_reviews,
        top_n,
        language,
    )?)
}
