use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewLocationDetail {
    pub ticket_price: Option<Price>,
    pub image: Option<String>,
    pub review: Option<String>,
    pub services_around: Option<String>,
}

pub fn add_location_detail<R>(
    repo: &R,
    location_id: &str,
    new_detail: NewLocationDetail,
) -> Result<LocationDetail>
where
    R: LocationRepo + LocationDetailRepo,
{
    let location = get_location(repo, location_id)?;
    let NewLocationDetail {
        ticket_price,
        image,
        review,
        services_around,
    } = new_detail;
    let detail = LocationDetail {
        id: Id::new(),
        location_id: location.id,
        ticket_price,
        image: super::non_empty(image),
        review: super::non_empty(review),
        services_around: super::non_empty(services_around),
        updated_at: Timestamp::now(),
    };
    repo.create_location_detail(&detail)?;
    log::info!("Added detail {} to location {location_id}", detail.id);
    Ok(detail)
}
