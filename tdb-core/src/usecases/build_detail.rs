use std::collections::HashMap;

use super::{prelude::*, RepoError, ResolvedLocation};
use crate::{
    content::{ContentSettings, ResolvedContent},
    ordering::Itinerary,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StopView {
    pub stop: Stop,
    pub location: ResolvedContent,
    pub pos: Option<MapPoint>,
    /// Image of the location or the placeholder
    pub image: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TourDetailView {
    pub tour: Tour,
    pub owner_name: Option<String>,
    /// Canonical order
    pub stops: Vec<StopView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TourView {
    pub tour: Tour,
    /// Canonical order
    pub stops: Vec<StopView>,
}

/// Joins a tour with its owner, its ordered stops and the
/// resolved content of all visited locations.
pub fn build_detail<R>(
    repo: &R,
    settings: &ContentSettings,
    tour_id: &str,
    language: &LanguageCode,
) -> Result<TourDetailView>
where
    R: TourRepo + StopRepo + UserRepo + LocationRepo + TranslationRepo + LocationDetailRepo,
{
    let (tour, stops) = super::load_itinerary(repo, tour_id)?.into_inner();
    let owner_name = match repo.get_user(tour.owner.as_str()) {
        Ok(user) => Some(user.name),
        Err(RepoError::NotFound) => {
            log::warn!("Owner {} of tour {} not found", tour.owner, tour.id);
            None
        }
        Err(err) => return Err(err.into()),
    };
    let stops = stop_views(repo, settings, stops, language)?;
    Ok(TourDetailView {
        tour,
        owner_name,
        stops,
    })
}

/// Joins the stops of many tours with their locations at once.
pub fn build_tour_views<R>(
    repo: &R,
    settings: &ContentSettings,
    itineraries: Vec<Itinerary>,
    language: &LanguageCode,
) -> Result<Vec<TourView>>
where
    R: LocationRepo + TranslationRepo + LocationDetailRepo,
{
    let (tours, stops): (Vec<_>, Vec<_>) = itineraries
        .into_iter()
        .map(Itinerary::into_inner)
        .unzip();
    let stops = stop_views(repo, settings, stops.into_iter().flatten().collect(), language)?;
    let mut stops_by_tour: HashMap<Id, Vec<StopView>> = HashMap::with_capacity(tours.len());
    for view in stops {
        stops_by_tour
            .entry(view.stop.tour_id.clone())
            .or_default()
            .push(view);
    }
    Ok(tours
        .into_iter()
        .map(|tour| {
            let stops = stops_by_tour.remove(&tour.id).unwrap_or_default();
            TourView { tour, stops }
        })
        .collect())
}

/// Keeps the order of the stops and skips those of missing locations.
fn stop_views<R>(
    repo: &R,
    settings: &ContentSettings,
    stops: Vec<Stop>,
    language: &LanguageCode,
) -> Result<Vec<StopView>>
where
    R: LocationRepo + TranslationRepo + LocationDetailRepo,
{
    let mut location_ids: Vec<&str> = stops.iter().map(|s| s.location_id.as_str()).collect();
    location_ids.sort_unstable();
    location_ids.dedup();
    let locations = repo.get_locations(&location_ids)?;
    let images: HashMap<Id, String> = repo
        .first_images_of_locations(&location_ids)?
        .into_iter()
        .collect();
    let resolved: HashMap<Id, ResolvedLocation> =
        super::resolve_locations::resolve_all(repo, settings, locations, language)?
            .into_iter()
            .map(|r| (r.location.id.clone(), r))
            .collect();

    let mut views = Vec::with_capacity(stops.len());
    for stop in stops {
        let Some(resolved) = resolved.get(&stop.location_id) else {
            log::warn!(
                "Location {} of stop {} not found",
                stop.location_id,
                stop.id
            );
            continue;
        };
        let image = images
            .get(&stop.location_id)
            .cloned()
            .unwrap_or_else(|| settings.placeholder_image_url.clone());
        views.push(StopView {
            stop,
            location: resolved.content.clone(),
            pos: resolved.location.pos,
            image,
        });
    }
    Ok(views)
}
