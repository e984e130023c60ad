use ::time::{format_description::BorrowedFormatItem, macros::format_description};

use super::*;

const TIME_OF_DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

impl<'a> LocationRepo for DbReadOnly<'a> {
    fn create_location(&self, _location: &Location) -> Result<()> {
        read_only()
    }
    fn update_location(&self, _location: &Location) -> Result<()> {
        read_only()
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn get_locations(&self, ids: &[&str]) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), Some(ids))
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), None)
    }
    fn query_locations(
        &self,
        filter: &LocationFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn delete_location(&self, _id: &str) -> Result<()> {
        read_only()
    }
}

impl<'a> LocationRepo for DbConnection<'a> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn update_location(&self, location: &Location) -> Result<()> {
        update_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn get_locations(&self, ids: &[&str]) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), Some(ids))
    }
    fn all_locations(&self) -> Result<Vec<Location>> {
        get_locations(&mut self.conn.borrow_mut(), None)
    }
    fn query_locations(
        &self,
        filter: &LocationFilter,
        pagination: &Pagination,
    ) -> Result<Vec<Location>> {
        query_locations(&mut self.conn.borrow_mut(), filter, pagination)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }
}

fn format_time_of_day(time: Option<TimeOfDay>) -> Result<Option<String>> {
    time.map(|t| t.format(TIME_OF_DAY_FORMAT))
        .transpose()
        .map_err(|err| anyhow!(err).into())
}

fn parse_time_of_day(id: &str, time: Option<String>) -> Option<TimeOfDay> {
    let time = time?;
    TimeOfDay::parse(&time, TIME_OF_DAY_FORMAT)
        .map_err(|err| {
            // This should never happen
            log::warn!("Invalid time of day '{time}' of location {id}: {err}");
        })
        .ok()
}

fn into_new_location(location: &Location) -> Result<models::NewLocation<'_>> {
    let Location {
        id,
        name,
        city,
        description,
        category,
        pos,
        opening_time,
        closing_time,
        created_at,
    } = location;
    Ok(models::NewLocation {
        id: id.as_str(),
        created_at: created_at.as_millis(),
        name,
        city: city.as_deref(),
        description: description.as_deref(),
        category: category.as_deref(),
        lat: pos.map(|p| p.lat()),
        lng: pos.map(|p| p.lng()),
        opening_time: format_time_of_day(*opening_time)?,
        closing_time: format_time_of_day(*closing_time)?,
    })
}

fn into_location(location: models::LocationEntity) -> Location {
    let models::LocationEntity {
        rowid: _,
        id,
        created_at,
        name,
        city,
        description,
        category,
        lat,
        lng,
        opening_time,
        closing_time,
    } = location;
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng),
        _ => None,
    };
    Location {
        opening_time: parse_time_of_day(&id, opening_time),
        closing_time: parse_time_of_day(&id, closing_time),
        id: id.into(),
        name,
        city,
        description,
        category,
        pos,
        created_at: Timestamp::from_millis(created_at),
    }
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    let new_location = into_new_location(location)?;
    diesel::insert_into(schema::location::table)
        .values(&new_location)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    use schema::location::dsl;
    let changeset = into_new_location(location)?;
    let count = diesel::update(schema::location::table.filter(dsl::id.eq(location.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::location::dsl;
    let location = schema::location::table
        .filter(dsl::id.eq(id))
        .first::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(into_location(location))
}

fn get_locations(conn: &mut SqliteConnection, ids: Option<&[&str]>) -> Result<Vec<Location>> {
    use schema::location::dsl;
    let mut query = schema::location::table.order_by(dsl::rowid).into_boxed();
    if let Some(ids) = ids {
        query = query.filter(dsl::id.eq_any(ids));
    }
    Ok(query
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_location)
        .collect())
}

fn query_locations(
    conn: &mut SqliteConnection,
    filter: &LocationFilter,
    pagination: &Pagination,
) -> Result<Vec<Location>> {
    use schema::location::dsl;
    let LocationFilter {
        keyword,
        city,
        category,
    } = filter;
    let mut query = schema::location::table.order_by(dsl::rowid).into_boxed();
    if let Some(keyword) = keyword.as_deref().filter(|k| !k.is_empty()) {
        let pattern = contains_pattern(keyword);
        query = query.filter(
            dsl::name
                .like(pattern.clone())
                .escape('\\')
                .or(dsl::description.like(pattern).escape('\\')),
        );
    }
    if let Some(city) = city.as_deref().filter(|c| !c.is_empty()) {
        query = query.filter(dsl::city.like(contains_pattern(city)).escape('\\'));
    }
    if let Some(category) = category.as_deref().filter(|c| !c.is_empty()) {
        query = query.filter(dsl::category.like(contains_pattern(category)).escape('\\'));
    }
    let (limit, offset) = limit_and_offset(pagination);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if offset > 0 {
        query = query.offset(offset);
    }
    Ok(query
        .load::<models::LocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_location)
        .collect())
}

// Translations, details and ratings are deleted by cascade.
fn delete_location(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::location::dsl;
    let count = diesel::delete(schema::location::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
