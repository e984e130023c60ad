use tdb_core::{gateways::share::ShareLinkGateway, ordering::Itinerary};

use super::*;

pub fn create_tour(
    connections: &sqlite::Connections,
    new_tour: usecases::NewTour,
) -> Result<Itinerary> {
    let itinerary = connections
        .exclusive()?
        .transaction(|conn| usecases::create_tour(conn, new_tour))?;
    Ok(itinerary)
}

pub fn update_tour(
    connections: &sqlite::Connections,
    id: &str,
    update: usecases::TourUpdate,
) -> Result<Tour> {
    let tour = connections
        .exclusive()?
        .transaction(|conn| usecases::update_tour(conn, id, update))?;
    Ok(tour)
}

pub fn delete_tour(connections: &sqlite::Connections, id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_tour(conn, id))?;
    Ok(())
}

pub fn list_tours(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    owner: Option<&str>,
    language: &LanguageCode,
    pagination: &Pagination,
) -> Result<Vec<usecases::TourView>> {
    let db = connections.shared()?;
    let itineraries = usecases::list_tours(&db, owner, pagination)?;
    Ok(usecases::build_tour_views(&db, settings, itineraries, language)?)
}

pub fn search_tours(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    city: &str,
    language: &LanguageCode,
    pagination: &Pagination,
) -> Result<Vec<usecases::TourView>> {
    let db = connections.shared()?;
    let itineraries = usecases::search_tours(&db, city, pagination)?;
    Ok(usecases::build_tour_views(&db, settings, itineraries, language)?)
}

pub fn tour_detail(
    connections: &sqlite::Connections,
    settings: &ContentSettings,
    id: &str,
    language: &LanguageCode,
) -> Result<usecases::TourDetailView> {
    let db = connections.shared()?;
    Ok(usecases::build_detail(&db, settings, id, language)?)
}

pub fn share_tour(
    connections: &sqlite::Connections,
    gateway: &dyn ShareLinkGateway,
    id: &str,
) -> Result<String> {
    let db = connections.shared()?;
    Ok(usecases::share_tour(&db, gateway, id)?)
}
