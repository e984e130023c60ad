use super::*;

impl<'a> LocationDetailRepo for DbReadOnly<'a> {
    fn create_location_detail(&self, _detail: &LocationDetail) -> Result<()> {
        read_only()
    }
    fn load_details_of_location(&self, location_id: &str) -> Result<Vec<LocationDetail>> {
        load_details_of_location(&mut self.conn.borrow_mut(), location_id)
    }
    fn first_images_of_locations(&self, location_ids: &[&str]) -> Result<Vec<(Id, String)>> {
        first_images_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
}

impl<'a> LocationDetailRepo for DbConnection<'a> {
    fn create_location_detail(&self, detail: &LocationDetail) -> Result<()> {
        create_location_detail(&mut self.conn.borrow_mut(), detail)
    }
    fn load_details_of_location(&self, location_id: &str) -> Result<Vec<LocationDetail>> {
        load_details_of_location(&mut self.conn.borrow_mut(), location_id)
    }
    fn first_images_of_locations(&self, location_ids: &[&str]) -> Result<Vec<(Id, String)>> {
        first_images_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
}

fn create_location_detail(conn: &mut SqliteConnection, detail: &LocationDetail) -> Result<()> {
    let LocationDetail {
        id,
        location_id,
        ticket_price,
        image,
        review,
        services_around,
        updated_at,
    } = detail;
    let parent_rowid = resolve_location_rowid(conn, location_id.as_str())?;
    let new_detail = models::NewLocationDetail {
        id: id.as_str(),
        parent_rowid,
        updated_at: updated_at.as_millis(),
        ticket_price: ticket_price.map(Price::minor_units),
        image: image.as_deref(),
        review: review.as_deref(),
        services_around: services_around.as_deref(),
    };
    diesel::insert_into(schema::location_detail::table)
        .values(&new_detail)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_details_of_location(
    conn: &mut SqliteConnection,
    location_id: &str,
) -> Result<Vec<LocationDetail>> {
    use schema::{location::dsl as l_dsl, location_detail::dsl};
    Ok(schema::location_detail::table
        .inner_join(schema::location::table)
        .select((
            dsl::id,
            dsl::updated_at,
            dsl::ticket_price,
            dsl::image,
            dsl::review,
            dsl::services_around,
            l_dsl::id,
        ))
        .filter(l_dsl::id.eq(location_id))
        .order_by(dsl::rowid)
        .load::<models::JoinedLocationDetail>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|detail| {
            let models::JoinedLocationDetail {
                id,
                updated_at,
                ticket_price,
                image,
                review,
                services_around,
                location_id,
            } = detail;
            LocationDetail {
                id: id.into(),
                location_id: location_id.into(),
                ticket_price: ticket_price.map(Price::from_minor_units),
                image,
                review,
                services_around,
                updated_at: Timestamp::from_millis(updated_at),
            }
        })
        .collect())
}

fn first_images_of_locations(
    conn: &mut SqliteConnection,
    location_ids: &[&str],
) -> Result<Vec<(Id, String)>> {
    use schema::{location::dsl as l_dsl, location_detail::dsl};
    let rows = schema::location_detail::table
        .inner_join(schema::location::table)
        .select((l_dsl::id, dsl::image))
        .filter(l_dsl::id.eq_any(location_ids))
        .filter(dsl::image.is_not_null())
        .filter(dsl::image.ne(""))
        .order_by(dsl::rowid)
        .load::<(String, Option<String>)>(conn)
        .map_err(from_diesel_err)?;
    let mut images: Vec<(Id, String)> = Vec::with_capacity(location_ids.len());
    for (location_id, image) in rows {
        let Some(image) = image else {
            continue;
        };
        if images.iter().any(|(id, _)| id.as_str() == location_id) {
            continue;
        }
        images.push((location_id.into(), image));
    }
    Ok(images)
}
