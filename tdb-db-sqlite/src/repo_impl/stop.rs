use super::*;

impl<'a> StopRepo for DbReadOnly<'a> {
    fn create_stop(&self, _stop: &Stop) -> Result<()> {
        read_only()
    }
    fn update_stop(&self, _stop: &Stop) -> Result<()> {
        read_only()
    }
    fn delete_stop(&self, _id: &str) -> Result<()> {
        read_only()
    }
    fn load_stops_of_tour(&self, tour_id: &str) -> Result<Vec<Stop>> {
        load_stops(&mut self.conn.borrow_mut(), StopsOf::Tours(&[tour_id]))
    }
    fn load_stops_of_tours(&self, tour_ids: &[&str]) -> Result<Vec<Stop>> {
        load_stops(&mut self.conn.borrow_mut(), StopsOf::Tours(tour_ids))
    }
    fn load_stops_of_location(&self, location_id: &str) -> Result<Vec<Stop>> {
        load_stops(&mut self.conn.borrow_mut(), StopsOf::Location(location_id))
    }
}

impl<'a> StopRepo for DbConnection<'a> {
    fn create_stop(&self, stop: &Stop) -> Result<()> {
        create_stop(&mut self.conn.borrow_mut(), stop)
    }
    fn update_stop(&self, stop: &Stop) -> Result<()> {
        update_stop(&mut self.conn.borrow_mut(), stop)
    }
    fn delete_stop(&self, id: &str) -> Result<()> {
        delete_stop(&mut self.conn.borrow_mut(), id)
    }
    fn load_stops_of_tour(&self, tour_id: &str) -> Result<Vec<Stop>> {
        load_stops(&mut self.conn.borrow_mut(), StopsOf::Tours(&[tour_id]))
    }
    fn load_stops_of_tours(&self, tour_ids: &[&str]) -> Result<Vec<Stop>> {
        load_stops(&mut self.conn.borrow_mut(), StopsOf::Tours(tour_ids))
    }
    fn load_stops_of_location(&self, location_id: &str) -> Result<Vec<Stop>> {
        load_stops(&mut self.conn.borrow_mut(), StopsOf::Location(location_id))
    }
}

enum StopsOf<'a> {
    Tours(&'a [&'a str]),
    Location(&'a str),
}

fn create_stop(conn: &mut SqliteConnection, stop: &Stop) -> Result<()> {
    let Stop {
        id,
        tour_id,
        location_id,
        slot,
        note,
    } = stop;
    let parent_rowid = resolve_tour_rowid(conn, tour_id.as_str())?;
    let location_rowid = resolve_location_rowid(conn, location_id.as_str())?;
    let new_stop = models::NewStop {
        id: id.as_str(),
        parent_rowid,
        location_rowid,
        day: slot.day.into(),
        position: slot.position.into(),
        note: note.as_deref(),
    };
    diesel::insert_into(schema::tour_stop::table)
        .values(&new_stop)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// Only the slot and the note of a stop can be modified.
fn update_stop(conn: &mut SqliteConnection, stop: &Stop) -> Result<()> {
    use schema::tour_stop::dsl;
    let count = diesel::update(schema::tour_stop::table.filter(dsl::id.eq(stop.id.as_str())))
        .set((
            dsl::day.eq(i32::from(stop.slot.day)),
            dsl::position.eq(i32::from(stop.slot.position)),
            dsl::note.eq(stop.note.as_deref()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_stop(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::tour_stop::dsl;
    let count = diesel::delete(schema::tour_stop::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn into_stop(stop: models::JoinedStop) -> Result<Stop> {
    let models::JoinedStop {
        id,
        day,
        position,
        note,
        tour_id,
        location_id,
    } = stop;
    let slot = match (DayNumber::try_from(day), Position::try_from(position)) {
        (Ok(day), Ok(position)) => Slot::new(day, position),
        _ => {
            let err = anyhow!("Invalid slot (day {day} / position {position}) of stop {id}");
            return Err(err.into());
        }
    };
    Ok(Stop {
        id: id.into(),
        tour_id: tour_id.into(),
        location_id: location_id.into(),
        slot,
        note,
    })
}

// Ordered by tour, day and position. Stops in the same
// slot are ordered by insertion.
fn load_stops(conn: &mut SqliteConnection, of: StopsOf<'_>) -> Result<Vec<Stop>> {
    use schema::{location::dsl as l_dsl, tour::dsl as t_dsl, tour_stop::dsl};
    let query = schema::tour_stop::table
        .inner_join(schema::tour::table)
        .inner_join(schema::location::table)
        .select((
            dsl::id,
            dsl::day,
            dsl::position,
            dsl::note,
            t_dsl::id,
            l_dsl::id,
        ))
        .order_by((dsl::parent_rowid, dsl::day, dsl::position, dsl::rowid))
        .into_boxed();
    let query = match of {
        StopsOf::Tours(tour_ids) => query.filter(t_dsl::id.eq_any(tour_ids)),
        StopsOf::Location(location_id) => query.filter(l_dsl::id.eq(location_id)),
    };
    query
        .load::<models::JoinedStop>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_stop)
        .collect()
}
