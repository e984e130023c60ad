///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        email -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    location (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        name -> Text,
        city -> Nullable<Text>,
        description -> Nullable<Text>,
        category -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        opening_time -> Nullable<Text>,
        closing_time -> Nullable<Text>,
    }
}

table! {
    location_translation (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        language -> Text,
        name -> Nullable<Text>,
        city -> Nullable<Text>,
        description -> Nullable<Text>,
        category -> Nullable<Text>,
    }
}

joinable!(location_translation -> location (parent_rowid));

table! {
    location_detail (rowid) {
        rowid -> BigInt,
        id -> Text,
        parent_rowid -> BigInt,
        updated_at -> BigInt,
        ticket_price -> Nullable<BigInt>,
        image -> Nullable<Text>,
        review -> Nullable<Text>,
        services_around -> Nullable<Text>,
    }
}

joinable!(location_detail -> location (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Ratings
///////////////////////////////////////////////////////////////////////

table! {
    rating (rowid) {
        rowid -> BigInt,
        id -> Text,
        parent_rowid -> BigInt,
        user_rowid -> BigInt,
        created_at -> BigInt,
        value -> SmallInt,
        comment -> Nullable<Text>,
    }
}

joinable!(rating -> location (parent_rowid));
joinable!(rating -> users (user_rowid));

table! {
    rating_photo (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        url -> Text,
    }
}

joinable!(rating_photo -> rating (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Tours
///////////////////////////////////////////////////////////////////////

table! {
    tour (rowid) {
        rowid -> BigInt,
        id -> Text,
        owner_rowid -> BigInt,
        created_at -> BigInt,
        version -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        duration -> Nullable<Text>,
        price -> Nullable<BigInt>,
        address -> Nullable<Text>,
        image -> Nullable<Text>,
    }
}

joinable!(tour -> users (owner_rowid));

table! {
    tour_stop (rowid) {
        rowid -> BigInt,
        id -> Text,
        parent_rowid -> BigInt,
        location_rowid -> BigInt,
        day -> Integer,
        position -> Integer,
        note -> Nullable<Text>,
    }
}

joinable!(tour_stop -> tour (parent_rowid));
joinable!(tour_stop -> location (location_rowid));

allow_tables_to_appear_in_same_query!(
    users,
    location,
    location_translation,
    location_detail,
    rating,
    rating_photo,
    tour,
    tour_stop,
);
