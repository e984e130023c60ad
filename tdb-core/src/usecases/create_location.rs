use super::prelude::*;

/// Base language content of a location.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewLocation {
    pub name         : String,
    pub city         : Option<String>,
    pub description  : Option<String>,
    pub category     : Option<String>,
    pub pos          : Option<MapPoint>,
    pub opening_time : Option<TimeOfDay>,
    pub closing_time : Option<TimeOfDay>,
}

/// Replaces all base language content of an existing location.
pub type LocationUpdate = NewLocation;

pub fn create_location<R: LocationRepo>(repo: &R, new_location: NewLocation) -> Result<Location> {
    let location = new_location.into_location(Id::new(), Timestamp::now())?;
    repo.create_location(&location)?;
    log::info!("Created location {} ({})", location.id, location.name);
    Ok(location)
}

pub fn update_location<R: LocationRepo>(
    repo: &R,
    id: &str,
    update: LocationUpdate,
) -> Result<Location> {
    let old = get_location(repo, id)?;
    let location = update.into_location(old.id, old.created_at)?;
    repo.update_location(&location)?;
    log::info!("Updated location {id}");
    Ok(location)
}

impl NewLocation {
    fn into_location(self, id: Id, created_at: Timestamp) -> Result<Location> {
        let Self {
            name,
            city,
            description,
            category,
            pos,
            opening_time,
            closing_time,
        } = self;
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Location {
            id,
            name,
            city: super::non_empty(city),
            description: super::non_empty(description),
            category: super::non_empty(category),
            pos,
            opening_time,
            closing_time,
            created_at,
        })
    }
}
