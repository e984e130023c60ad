use std::collections::HashMap;

use super::*;

impl<'a> RatingRepository for DbReadOnly<'a> {
    fn create_rating(&self, _rating: &Rating) -> Result<()> {
        read_only()
    }
    fn get_rating(&self, id: &str) -> Result<Rating> {
        get_rating(&mut self.conn.borrow_mut(), id)
    }
    fn delete_rating(&self, _id: &str) -> Result<()> {
        read_only()
    }
    fn load_ratings_of_location(&self, location_id: &str) -> Result<Vec<Rating>> {
        load_ratings_of_locations(&mut self.conn.borrow_mut(), &[location_id])
    }
    fn load_ratings_of_locations(&self, location_ids: &[&str]) -> Result<Vec<Rating>> {
        load_ratings_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn load_all_ratings(&self) -> Result<Vec<Rating>> {
        load_all_ratings(&mut self.conn.borrow_mut())
    }
    fn recent_ratings(
        &self,
        location_id: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Rating>> {
        recent_ratings(&mut self.conn.borrow_mut(), location_id, pagination)
    }
}

impl<'a> RatingRepository for DbConnection<'a> {
    fn create_rating(&self, rating: &Rating) -> Result<()> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn get_rating(&self, id: &str) -> Result<Rating> {
        get_rating(&mut self.conn.borrow_mut(), id)
    }
    fn delete_rating(&self, id: &str) -> Result<()> {
        delete_rating(&mut self.conn.borrow_mut(), id)
    }
    fn load_ratings_of_location(&self, location_id: &str) -> Result<Vec<Rating>> {
        load_ratings_of_locations(&mut self.conn.borrow_mut(), &[location_id])
    }
    fn load_ratings_of_locations(&self, location_ids: &[&str]) -> Result<Vec<Rating>> {
        load_ratings_of_locations(&mut self.conn.borrow_mut(), location_ids)
    }
    fn load_all_ratings(&self) -> Result<Vec<Rating>> {
        load_all_ratings(&mut self.conn.borrow_mut())
    }
    fn recent_ratings(
        &self,
        location_id: Option<&str>,
        pagination: &Pagination,
    ) -> Result<Vec<Rating>> {
        recent_ratings(&mut self.conn.borrow_mut(), location_id, pagination)
    }
}

fn create_rating(conn: &mut SqliteConnection, rating: &Rating) -> Result<()> {
    let Rating {
        id,
        location_id,
        user_id,
        created_at,
        value,
        comment,
        photos,
    } = rating;
    let parent_rowid = resolve_location_rowid(conn, location_id.as_str())?;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let new_rating = models::NewRating {
        id: id.as_str(),
        parent_rowid,
        user_rowid,
        created_at: created_at.as_millis(),
        value: value.tenths(),
        comment: comment.as_deref(),
    };
    diesel::insert_into(schema::rating::table)
        .values(&new_rating)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if photos.is_empty() {
        return Ok(());
    }
    let rating_rowid = resolve_rating_rowid(conn, id.as_str())?;
    let new_photos: Vec<_> = photos
        .iter()
        .map(|url| models::NewRatingPhoto {
            parent_rowid: rating_rowid,
            url: url.as_str(),
        })
        .collect();
    diesel::insert_into(schema::rating_photo::table)
        .values(&new_photos)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// Photos are deleted by cascade.
fn delete_rating(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::rating::dsl;
    let count = diesel::delete(schema::rating::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_rating(conn: &mut SqliteConnection, id: &str) -> Result<Rating> {
    use schema::{location::dsl as l_dsl, rating::dsl, users::dsl as u_dsl};
    let rating = schema::rating::table
        .inner_join(schema::location::table)
        .inner_join(schema::users::table)
        .select((
            dsl::rowid,
            dsl::id,
            dsl::created_at,
            dsl::value,
            dsl::comment,
            l_dsl::id,
            u_dsl::id,
        ))
        .filter(dsl::id.eq(id))
        .first::<models::JoinedRating>(conn)
        .map_err(from_diesel_err)?;
    let mut ratings = with_photos(conn, vec![rating])?;
    debug_assert_eq!(1, ratings.len());
    ratings.pop().ok_or(repo::Error::NotFound)
}

fn load_ratings_of_locations(
    conn: &mut SqliteConnection,
    location_ids: &[&str],
) -> Result<Vec<Rating>> {
    let mut ratings = Vec::new();
    for location_ids in location_ids.chunks(MAX_IDS_PER_QUERY) {
        ratings.extend(load_joined_ratings(conn, Some(location_ids))?);
    }
    if location_ids.len() > MAX_IDS_PER_QUERY {
        ratings.sort_by_key(|r| (r.created_at, r.rowid));
    }
    with_photos(conn, ratings)
}

fn load_all_ratings(conn: &mut SqliteConnection) -> Result<Vec<Rating>> {
    let ratings = load_joined_ratings(conn, None)?;
    with_photos(conn, ratings)
}

// Ordered by creation time, ties by insertion
fn load_joined_ratings(
    conn: &mut SqliteConnection,
    location_ids: Option<&[&str]>,
) -> Result<Vec<models::JoinedRating>> {
    use schema::{location::dsl as l_dsl, rating::dsl, users::dsl as u_dsl};
    let mut query = schema::rating::table
        .inner_join(schema::location::table)
        .inner_join(schema::users::table)
        .select((
            dsl::rowid,
            dsl::id,
            dsl::created_at,
            dsl::value,
            dsl::comment,
            l_dsl::id,
            u_dsl::id,
        ))
        .order_by((dsl::created_at, dsl::rowid))
        .into_boxed();
    if let Some(location_ids) = location_ids {
        query = query.filter(l_dsl::id.eq_any(location_ids));
    }
    query
        .load::<models::JoinedRating>(conn)
        .map_err(from_diesel_err)
}

fn recent_ratings(
    conn: &mut SqliteConnection,
    location_id: Option<&str>,
    pagination: &Pagination,
) -> Result<Vec<Rating>> {
    use schema::{location::dsl as l_dsl, rating::dsl, users::dsl as u_dsl};
    let mut query = schema::rating::table
        .inner_join(schema::location::table)
        .inner_join(schema::users::table)
        .select((
            dsl::rowid,
            dsl::id,
            dsl::created_at,
            dsl::value,
            dsl::comment,
            l_dsl::id,
            u_dsl::id,
        ))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .into_boxed();
    if let Some(location_id) = location_id {
        query = query.filter(l_dsl::id.eq(location_id));
    }
    let (limit, offset) = limit_and_offset(pagination);
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if offset > 0 {
        query = query.offset(offset);
    }
    let ratings = query
        .load::<models::JoinedRating>(conn)
        .map_err(from_diesel_err)?;
    with_photos(conn, ratings)
}

// Loads the photos of all ratings with a single query.
fn with_photos(
    conn: &mut SqliteConnection,
    ratings: Vec<models::JoinedRating>,
) -> Result<Vec<Rating>> {
    use schema::rating_photo::dsl;
    if ratings.is_empty() {
        return Ok(vec![]);
    }
    let rowids: Vec<_> = ratings.iter().map(|r| r.rowid).collect();
    let mut photos: HashMap<i64, Vec<String>> = HashMap::with_capacity(ratings.len());
    for rowids in rowids.chunks(MAX_IDS_PER_QUERY) {
        for models::RatingPhoto { parent_rowid, url } in schema::rating_photo::table
            .select((dsl::parent_rowid, dsl::url))
            .filter(dsl::parent_rowid.eq_any(rowids))
            .order_by(dsl::rowid)
            .load::<models::RatingPhoto>(conn)
            .map_err(from_diesel_err)?
        {
            photos.entry(parent_rowid).or_default().push(url);
        }
    }
    Ok(ratings
        .into_iter()
        .map(|rating| {
            let models::JoinedRating {
                rowid,
                id,
                created_at,
                value,
                comment,
                location_id,
                user_id,
            } = rating;
            Rating {
                id: id.into(),
                location_id: location_id.into(),
                user_id: user_id.into(),
                created_at: Timestamp::from_millis(created_at),
                value: RatingValue::from_tenths(value),
                comment,
                photos: photos.remove(&rowid).unwrap_or_default(),
            }
        })
        .collect())
}
