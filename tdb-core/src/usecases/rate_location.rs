use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewRating {
    pub user     : Id,
    pub location : Id,
    /// Stars from 0 to 5, rounded to tenths
    pub value    : f64,
    pub comment  : Option<String>,
    pub photos   : Vec<String>,
}

pub fn rate_location<R>(repo: &R, new_rating: NewRating) -> Result<Rating>
where
    R: RatingRepository + LocationRepo + UserRepo,
{
    let NewRating {
        user,
        location,
        value,
        comment,
        photos,
    } = new_rating;
    // Checked before rounding, 5.04 stars are out of range
    if !(0.0..=5.0).contains(&value) {
        return Err(Error::RatingValue);
    }
    let value = RatingValue::try_from(value)?;
    if !repo.user_exists(user.as_str())? {
        return Err(Error::UserNotFound);
    }
    get_location(repo, location.as_str())?;
    let rating = Rating {
        id: Id::new(),
        location_id: location,
        user_id: user,
        created_at: Timestamp::now(),
        value,
        comment: super::non_empty(comment),
        photos: photos
            .into_iter()
            .filter_map(|url| super::non_empty(Some(url)))
            .collect(),
    };
    repo.create_rating(&rating)?;
    log::info!(
        "Rated location {} with {} photo(s)",
        rating.location_id,
        rating.photos.len()
    );
    Ok(rating)
}

/// Deletes a rating together with its photos.
pub fn delete_rating<R: RatingRepository>(repo: &R, id: &str) -> Result<()> {
    super::get_rating(repo, id)?;
    repo.delete_rating(id)?;
    log::info!("Deleted rating {id}");
    Ok(())
}

/// Lists ratings, newest first.
pub fn list_ratings<R: RatingRepository>(
    repo: &R,
    location_id: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Rating>> {
    Ok(repo.recent_ratings(location_id, pagination)?)
}
