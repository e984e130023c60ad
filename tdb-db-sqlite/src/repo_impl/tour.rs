use super::*;

impl<'a> TourRepo for DbReadOnly<'a> {
    fn create_tour(&self, _tour: &Tour) -> Result<()> {
        read_only()
    }
    fn update_tour(&self, _tour: &Tour) -> Result<()> {
        read_only()
    }
    fn get_tour(&self, id: &str) -> Result<Tour> {
        get_tour(&mut self.conn.borrow_mut(), id)
    }
    fn delete_tour(&self, _id: &str) -> Result<()> {
        read_only()
    }
    fn list_tours(&self, owner: Option<&str>, pagination: &Pagination) -> Result<Vec<Tour>> {
        list_tours(&mut self.conn.borrow_mut(), owner, pagination)
    }
    fn search_tours_by_address(&self, text: &str, pagination: &Pagination) -> Result<Vec<Tour>> {
        search_tours_by_address(&mut self.conn.borrow_mut(), text, pagination)
    }
}

impl<'a> TourRepo for DbConnection<'a> {
    fn create_tour(&self, tour: &Tour) -> Result<()> {
        create_tour(&mut self.conn.borrow_mut(), tour)
    }
    fn update_tour(&self, tour: &Tour) -> Result<()> {
        update_tour(&mut self.conn.borrow_mut(), tour)
    }
    fn get_tour(&self, id: &str) -> Result<Tour> {
        get_tour(&mut self.conn.borrow_mut(), id)
    }
    fn delete_tour(&self, id: &str) -> Result<()> {
        delete_tour(&mut self.conn.borrow_mut(), id)
    }
    fn list_tours(&self, owner: Option<&str>, pagination: &Pagination) -> Result<Vec<Tour>> {
        list_tours(&mut self.conn.borrow_mut(), owner, pagination)
    }
    fn search_tours_by_address(&self, text: &str, pagination: &Pagination) -> Result<Vec<Tour>> {
        search_tours_by_address(&mut self.conn.borrow_mut(), text, pagination)
    }
}

fn version_to_sql(version: Revision) -> Result<i64> {
    let value = RevisionValue::from(version);
    i64::try_from(value).map_err(|_| anyhow!("Version {value} is out of range").into())
}

fn into_tour(tour: models::JoinedTour) -> Result<Tour> {
    let models::JoinedTour {
        id,
        created_at,
        version,
        title,
        description,
        duration,
        price,
        address,
        image,
        owner_id,
    } = tour;
    let version = RevisionValue::try_from(version)
        .map_err(|_| anyhow!("Invalid version {version} of tour {id}"))?;
    Ok(Tour {
        id: id.into(),
        owner: owner_id.into(),
        title,
        description,
        duration,
        price: price.map(Price::from_minor_units),
        address,
        image,
        created_at: Timestamp::from_millis(created_at),
        version: version.into(),
    })
}

fn create_tour(conn: &mut SqliteConnection, tour: &Tour) -> Result<()> {
    let Tour {
        id,
        owner,
        title,
        description,
        duration,
        price,
        address,
        image,
        created_at,
        version,
    } = tour;
    let owner_rowid = resolve_user_rowid(conn, owner)?;
    let new_tour = models::NewTour {
        id: id.as_str(),
        owner_rowid,
        created_at: created_at.as_millis(),
        version: version_to_sql(*version)?,
        title,
        description: description.as_deref(),
        duration: duration.as_deref(),
        price: price.map(Price::minor_units),
        address: address.as_deref(),
        image: image.as_deref(),
    };
    diesel::insert_into(schema::tour::table)
        .values(&new_tour)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// The owner and the creation time never change.
fn update_tour(conn: &mut SqliteConnection, tour: &Tour) -> Result<()> {
    use schema::tour::dsl;
    let changeset = models::TourChangeset {
        version: version_to_sql(tour.version)?,
        title: &tour.title,
        description: tour.description.as_deref(),
        duration: tour.duration.as_deref(),
        price: tour.price.map(Price::minor_units),
        address: tour.address.as_deref(),
        image: tour.image.as_deref(),
    };
    let count = diesel::update(schema::tour::table.filter(dsl::id.eq(tour.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

// Stops are deleted by cascade.
fn delete_tour(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::tour::dsl;
    let count = diesel::delete(schema::tour::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_tour(conn: &mut SqliteConnection, id: &str) -> Result<Tour> {
    use schema::{tour::dsl, users::dsl as u_dsl};
    let tour = schema::tour::table
        .inner_join(schema::users::table)
        .select((
            dsl::id,
            dsl::created_at,
            dsl::version,
            dsl::title,
            dsl::description,
            dsl::duration,
            dsl::price,
            dsl::address,
            dsl::image,
            u_dsl::id,
        ))
        .filter(dsl::id.eq(id))
        .first::<models::JoinedTour>(conn)
        .map_err(from_diesel_err)?;
    into_tour(tour)
}

fn list_tours(
    conn: &mut SqliteConnection,
    owner: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Tour>> {
    use schema::{tour::dsl, users::dsl as u_dsl};
    let mut query = schema::tour::table
        .inner_join(schema::users::table)
        .select((
            dsl::id,
            dsl::created_at,
            dsl::version,
            dsl::title,
            dsl::description,
            dsl::duration,
            dsl::price,
            dsl::address,
            dsl::image,
            u_dsl::id,
        ))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    if let Some(owner) = owner {
        query = query.filter(u_dsl::id.eq(owner));
    }
    let (limit, offset) = limit_and_offset(pagination);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if offset > 0 {
        query = query.offset(offset);
    }
    query
        .load::<models::JoinedTour>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_tour)
        .collect()
}

// The LIKE operator of SQLite only folds the case of ASCII
// characters. Addresses are mostly Vietnamese and need to be
// compared after full Unicode case folding.
fn search_tours_by_address(
    conn: &mut SqliteConnection,
    text: &str,
    pagination: &Pagination,
) -> Result<Vec<Tour>> {
    let needle = text.trim().to_lowercase();
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map_or(usize::MAX, |limit| limit as usize);
    let tours = list_tours(conn, None, &Pagination::default())?;
    Ok(tours
        .into_iter()
        .filter(|tour| {
            tour.address
                .as_deref()
                .is_some_and(|address| address.to_lowercase().contains(&needle))
        })
        .skip(offset)
        .take(limit)
        .collect())
}
