use super::*;

impl<'a> TranslationRepo for DbReadOnly<'a> {
    fn upsert_translation(&self, _translation: &Translation) -> Result<()> {
        read_only()
    }
    fn get_translation(
        &self,
        location_id: &str,
        language: &LanguageCode,
    ) -> Result<Option<Translation>> {
        get_translation(&mut self.conn.borrow_mut(), location_id, language)
    }
    fn get_translations(
        &self,
        location_ids: &[&str],
        language: &LanguageCode,
    ) -> Result<Vec<Translation>> {
        get_translations(&mut self.conn.borrow_mut(), location_ids, language)
    }
}

impl<'a> TranslationRepo for DbConnection<'a> {
    fn upsert_translation(&self, translation: &Translation) -> Result<()> {
        upsert_translation(&mut self.conn.borrow_mut(), translation)
    }
    fn get_translation(
        &self,
        location_id: &str,
        language: &LanguageCode,
    ) -> Result<Option<Translation>> {
        get_translation(&mut self.conn.borrow_mut(), location_id, language)
    }
    fn get_translations(
        &self,
        location_ids: &[&str],
        language: &LanguageCode,
    ) -> Result<Vec<Translation>> {
        get_translations(&mut self.conn.borrow_mut(), location_ids, language)
    }
}

fn into_translation(translation: models::JoinedLocationTranslation) -> Result<Translation> {
    let models::JoinedLocationTranslation {
        language,
        name,
        city,
        description,
        category,
        location_id,
    } = translation;
    let language = language.parse().map_err(|err| anyhow!("{err}"))?;
    Ok(Translation {
        location_id: location_id.into(),
        language,
        content: TranslatedContent {
            name,
            city,
            description,
            category,
        },
    })
}

fn upsert_translation(conn: &mut SqliteConnection, translation: &Translation) -> Result<()> {
    use schema::location_translation::dsl;
    let Translation {
        location_id,
        language,
        content,
    } = translation;
    let parent_rowid = resolve_location_rowid(conn, location_id.as_str())?;
    let record = models::NewLocationTranslation {
        parent_rowid,
        language: language.as_str(),
        name: content.name.as_deref(),
        city: content.city.as_deref(),
        description: content.description.as_deref(),
        category: content.category.as_deref(),
    };
    let count = diesel::update(
        schema::location_translation::table
            .filter(dsl::parent_rowid.eq(parent_rowid))
            .filter(dsl::language.eq(language.as_str())),
    )
    .set(&record)
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count > 0 {
        debug_assert_eq!(1, count);
        return Ok(());
    }
    diesel::insert_into(schema::location_translation::table)
        .values(&record)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_translation(
    conn: &mut SqliteConnection,
    location_id: &str,
    language: &LanguageCode,
) -> Result<Option<Translation>> {
    let mut translations = get_translations(conn, &[location_id], language)?;
    debug_assert!(translations.len() <= 1);
    Ok(translations.pop())
}

fn get_translations(
    conn: &mut SqliteConnection,
    location_ids: &[&str],
    language: &LanguageCode,
) -> Result<Vec<Translation>> {
    use schema::{location::dsl as l_dsl, location_translation::dsl};
    schema::location_translation::table
        .inner_join(schema::location::table)
        .select((
            dsl::language,
            dsl::name,
            dsl::city,
            dsl::description,
            dsl::category,
            l_dsl::id,
        ))
        .filter(l_dsl::id.eq_any(location_ids))
        .filter(dsl::language.eq(language.as_str()))
        .order_by(l_dsl::rowid)
        .load::<models::JoinedLocationTranslation>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_translation)
        .collect()
}
