use crate::entities::*;

/// Produces shareable links for tours.
///
/// The embedded token is informational only. It is neither signed
/// nor ever decoded again and must not be used for authorization.
pub trait ShareLinkGateway {
    fn share_link(&self, tour_id: &Id, created_at: Timestamp) -> String;
}
