use base64::{engine::general_purpose::STANDARD, Engine as _};

use tdb_core::{entities::*, gateways::share::ShareLinkGateway};

/// Builds links of the form `{base_url}/tour/shared/{token}`.
#[derive(Debug, Clone)]
pub struct ShareLinks {
    base_url: String,
}

impl ShareLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn token(tour_id: &Id, created_at: Timestamp) -> String {
        STANDARD.encode(format!("tour:{tour_id}:{created_at}"))
    }
}

impl ShareLinkGateway for ShareLinks {
    fn share_link(&self, tour_id: &Id, created_at: Timestamp) -> String {
        let link = format!(
            "{}/tour/shared/{}",
            self.base_url,
            Self::token(tour_id, created_at)
        );
        log::debug!("Created share link for tour {tour_id}: {link}");
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_tour_id_and_creation_time() {
        let links = ShareLinks::new("https://tours.example.com/");
        let link = links.share_link(&Id::from("t1"), Timestamp::from_millis(0));
        let token = link
            .strip_prefix("https://tours.example.com/tour/shared/")
            .unwrap();
        let decoded = STANDARD.decode(token).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "tour:t1:1970-01-01T00:00:00Z"
        );
    }

    #[test]
    fn links_are_stable() {
        let links = ShareLinks::new("http://localhost:8080");
        let created_at = Timestamp::from_secs(1_700_000_000);
        assert_eq!(
            links.share_link(&Id::from("abc"), created_at),
            links.share_link(&Id::from("abc"), created_at)
        );
        assert_ne!(
            links.share_link(&Id::from("abc"), created_at),
            links.share_link(&Id::from("abd"), created_at)
        );
    }
}
