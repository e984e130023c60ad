use super::*;

/// Imports all records or none of them.
pub fn import_dataset(
    connections: &sqlite::Connections,
    dataset: usecases::Dataset,
) -> Result<usecases::ImportSummary> {
    let summary = connections.exclusive()?.transaction(|conn| {
        usecases::import_dataset(conn, dataset).inspect_err(|err| {
            warn!("Failed to import dataset: {err}");
        })
    })?;
    Ok(summary)
}
