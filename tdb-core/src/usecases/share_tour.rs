use super::prelude::*;
use crate::gateways::share::ShareLinkGateway;

/// Creates a link to a tour that can be shared with others.
pub fn share_tour<R, G>(repo: &R, gateway: &G, tour_id: &str) -> Result<String>
where
    R: TourRepo,
    G: ShareLinkGateway + ?Sized,
{
    let tour = get_tour(repo, tour_id)?;
    let link = gateway.share_link(&tour.id, tour.created_at);
    log::debug!("Shared tour {tour_id}: {link}");
    Ok(link)
}
