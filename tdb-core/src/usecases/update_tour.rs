use super::prelude::*;

/// Fields that are `None` remain unchanged.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct TourUpdate {
    pub title       : Option<String>,
    pub description : Option<String>,
    pub duration    : Option<String>,
    pub price       : Option<Price>,
    pub address     : Option<String>,
    pub image       : Option<String>,
}

pub fn update_tour<R: TourRepo>(repo: &R, id: &str, update: TourUpdate) -> Result<Tour> {
    let TourUpdate {
        title,
        description,
        duration,
        price,
        address,
        image,
    } = update;
    let mut tour = get_tour(repo, id)?;
    if let Some(title) = title {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        tour.title = title.to_owned();
    }
    if description.is_some() {
        tour.description = description;
    }
    if duration.is_some() {
        tour.duration = duration;
    }
    if price.is_some() {
        tour.price = price;
    }
    if address.is_some() {
        tour.address = address;
    }
    if image.is_some() {
        tour.image = image;
    }
    repo.update_tour(&tour)?;
    log::info!("Updated tour {id}");
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;

    #[test]
    fn update_some_fields() {
        let db = MockDb::with_tour_and_locations("t", &[]);
        let tour = update_tour(
            &db,
            "t",
            TourUpdate {
                title: Some("Hanoi".into()),
                price: Some(Price::from_minor_units(150_000)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(tour.title, "Hanoi");
        assert_eq!(tour.price, Some(Price::from_minor_units(150_000)));
        assert_eq!(db.tours.borrow()[0].title, "Hanoi");
        assert!(db.tours.borrow()[0].version.is_initial());
    }

    #[test]
    fn reject_empty_title() {
        let db = MockDb::with_tour_and_locations("t", &[]);
        let update = TourUpdate {
            title: Some("".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_tour(&db, "t", update),
            Err(Error::EmptyTitle)
        ));
    }
}
