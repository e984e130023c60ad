#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: Option<&'a str>,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = location, treat_none_as_null = true)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub name: &'a str,
    pub city: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

#[derive(Queryable)]
pub struct LocationEntity {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub name: String,
    pub city: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = location_translation, treat_none_as_null = true)]
pub struct NewLocationTranslation<'a> {
    pub parent_rowid: i64,
    pub language: &'a str,
    pub name: Option<&'a str>,
    pub city: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedLocationTranslation {
    pub language: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    // Joined columns
    pub location_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = location_detail)]
pub struct NewLocationDetail<'a> {
    pub id: &'a str,
    pub parent_rowid: i64,
    pub updated_at: i64,
    pub ticket_price: Option<i64>,
    pub image: Option<&'a str>,
    pub review: Option<&'a str>,
    pub services_around: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedLocationDetail {
    pub id: String,
    pub updated_at: i64,
    pub ticket_price: Option<i64>,
    pub image: Option<String>,
    pub review: Option<String>,
    pub services_around: Option<String>,
    // Joined columns
    pub location_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = rating)]
pub struct NewRating<'a> {
    pub id: &'a str,
    pub parent_rowid: i64,
    pub user_rowid: i64,
    pub created_at: i64,
    pub value: i16,
    pub comment: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedRating {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub value: i16,
    pub comment: Option<String>,
    // Joined columns
    pub location_id: String,
    pub user_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = rating_photo)]
pub struct NewRatingPhoto<'a> {
    pub parent_rowid: i64,
    pub url: &'a str,
}

#[derive(Queryable)]
pub struct RatingPhoto {
    pub parent_rowid: i64,
    pub url: String,
}

#[derive(Insertable)]
#[diesel(table_name = tour)]
pub struct NewTour<'a> {
    pub id: &'a str,
    pub owner_rowid: i64,
    pub created_at: i64,
    pub version: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub price: Option<i64>,
    pub address: Option<&'a str>,
    pub image: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = tour, treat_none_as_null = true)]
pub struct TourChangeset<'a> {
    pub version: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub price: Option<i64>,
    pub address: Option<&'a str>,
    pub image: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedTour {
    pub id: String,
    pub created_at: i64,
    pub version: i64,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub price: Option<i64>,
    pub address: Option<String>,
    pub image: Option<String>,
    // Joined columns
    pub owner_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = tour_stop)]
pub struct NewStop<'a> {
    pub id: &'a str,
    pub parent_rowid: i64,
    pub location_rowid: i64,
    pub day: i32,
    pub position: i32,
    pub note: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedStop {
    pub id: String,
    pub day: i32,
    pub position: i32,
    pub note: Option<String>,
    // Joined columns
    pub tour_id: String,
    pub location_id: String,
}
