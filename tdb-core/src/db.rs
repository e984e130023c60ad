use crate::repositories::*;

/// All persistence ports of a single database connection.
pub trait Db:
    UserRepo + LocationRepo + TranslationRepo + LocationDetailRepo + RatingRepository + TourRepo + StopRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + LocationRepo
        + TranslationRepo
        + LocationDetailRepo
        + RatingRepository
        + TourRepo
        + StopRepo
{
}
