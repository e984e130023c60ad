use super::prelude::*;
use crate::{
    content::{ContentSettings, ResolvedContent},
    rating,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LocationSummary {
    pub id: Id,
    pub content: ResolvedContent,
    pub pos: Option<MapPoint>,
    pub average: AvgRatingValue,
    pub count: usize,
    /// Representative photo or the placeholder
    pub photo: String,
}

/// The best rated locations.
///
/// Only locations with at least `max(min_reviews, 1)` ratings are
/// considered. Locations with the same average keep the order in
/// which they have been created.
pub fn build_ranking<R>(
    repo: &R,
    settings: &ContentSettings,
    min_reviews: usize,
    top_n: usize,
    language: &LanguageCode,
) -> Result<Vec<LocationSummary>>
where
    R: LocationRepo + RatingRepository + TranslationRepo,
{
    let min_reviews = min_reviews.max(1);
    let locations = repo.all_locations()?;
    let ratings = repo.load_all_ratings()?;
    let mut stats = rating::aggregate_by_location(&ratings);

    let mut ranked: Vec<_> = locations
        .into_iter()
        .filter_map(|location| {
            let stats = stats.remove(&location.id)?;
            (stats.count >= min_reviews).then_some((location, stats))
        })
        .collect();
    ranked.sort_by(|(_, lhs), (_, rhs)| {
        f64::from(rhs.average).total_cmp(&f64::from(lhs.average))
    });
    ranked.truncate(top_n);

    let (locations, stats): (Vec<_>, Vec<_>) = ranked.into_iter().unzip();
    let resolved = super::resolve_locations::resolve_all(repo, settings, locations, language)?;
    Ok(resolved
        .into_iter()
        .zip(stats)
        .map(|(resolved, stats)| LocationSummary {
            id: resolved.location.id,
            content: resolved.content,
            pos: resolved.location.pos,
            average: stats.average,
            count: stats.count,
            photo: stats
                .photo
                .unwrap_or_else(|| settings.placeholder_image_url.clone()),
        })
        .collect())
}
