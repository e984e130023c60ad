use std::{fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use tdb_application::{error::AppError, prelude as flows, sqlite};
use tdb_boundary as json;
use tdb_core::{
    entities::*,
    ordering::SlotAssignment,
    repositories::{LocationFilter, Pagination},
    usecases::{self, LocationDeletionPolicy},
};
use tdb_gateways::share::ShareLinks;

use crate::{config::Config, conv};

#[derive(Debug, Parser)]
#[command(
    name = "tourdb",
    about = "Plan tours along rated and translated locations",
    version
)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// URL to the database
    #[arg(long = "db-url", value_name = "DATABASE_URL")]
    pub db_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct Page {
    /// Page number, counted from 1
    #[arg(long)]
    page: Option<u64>,
    #[arg(long = "page-size")]
    page_size: Option<u64>,
}

impl From<Page> for Pagination {
    fn from(from: Page) -> Self {
        Pagination::from_page(from.page, from.page_size)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run pending database migrations and exit
    Migrate,
    /// Show a tour with its stops and the content of all visited locations
    Tour {
        id: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// List tours, newest first
    Tours {
        #[arg(long, conflicts_with = "city")]
        owner: Option<String>,
        /// Search tours by their address
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        lang: Option<String>,
        #[command(flatten)]
        page: Page,
    },
    /// List the stops of a tour in display order
    Stops { tour_id: String },
    /// Append a location to a day of a tour
    AddStop {
        tour_id: String,
        location_id: String,
        #[arg(long, default_value_t = 1)]
        day: DayNumber,
        #[arg(long)]
        note: Option<String>,
        #[arg(long = "expected-version")]
        expected_version: Option<u64>,
    },
    RemoveStop {
        tour_id: String,
        stop_id: String,
        #[arg(long = "expected-version")]
        expected_version: Option<u64>,
    },
    /// Move stops to new slots (JSON file with a list of slot assignments)
    Reorder {
        tour_id: String,
        file: PathBuf,
        #[arg(long = "expected-version")]
        expected_version: Option<u64>,
    },
    /// Renumber the stops of a day without gaps
    Compact {
        tour_id: String,
        day: DayNumber,
        #[arg(long = "expected-version")]
        expected_version: Option<u64>,
    },
    DeleteTour { id: String },
    /// Show a location in the requested language
    Location {
        id: String,
        #[arg(long)]
        lang: Option<String>,
    },
    /// List locations filtered on their base language content
    Locations {
        #[arg(long)]
        keyword: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        lang: Option<String>,
        #[command(flatten)]
        page: Page,
    },
    DeleteLocation {
        id: String,
        /// Also remove all stops that visit the location
        #[arg(long)]
        cascade: bool,
    },
    /// List ratings, newest first
    Ratings {
        #[arg(long)]
        location: Option<String>,
        #[command(flatten)]
        page: Page,
    },
    /// Show the best rated locations
    TopRated {
        #[arg(long = "min-reviews", default_value_t = 1)]
        min_reviews: usize,
        #[arg(long, default_value_t = 10)]
        top: usize,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Create a share link for a tour
    Share { tour_id: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn language(cfg: &Config, lang: Option<String>) -> Result<LanguageCode, AppError> {
    match lang {
        Some(lang) => lang
            .parse::<LanguageCode>()
            .map_err(|_| AppError::from(usecases::Error::LanguageCode)),
        None => Ok(cfg.content.base_language.clone()),
    }
}

pub fn run(
    command: Command,
    cfg: &Config,
    connections: &sqlite::Connections,
) -> Result<(), AppError> {
    let ordering = &cfg.itinerary.ordering;
    match command {
        Command::Migrate => {}
        Command::Tour { id, lang } => {
            let lang = language(cfg, lang)?;
            let detail = flows::tour_detail(connections, &cfg.content, &id, &lang)?;
            print_json(&conv::from_tour_detail(detail))?;
        }
        Command::Tours {
            owner,
            city,
            lang,
            page,
        } => {
            let lang = language(cfg, lang)?;
            let pagination = Pagination::from(page);
            let tours = match city {
                Some(city) => {
                    flows::search_tours(connections, &cfg.content, &city, &lang, &pagination)?
                }
                None => flows::list_tours(
                    connections,
                    &cfg.content,
                    owner.as_deref(),
                    &lang,
                    &pagination,
                )?,
            };
            let tours: Vec<_> = tours.into_iter().map(conv::from_tour_view).collect();
            print_json(&tours)?;
        }
        Command::Stops { tour_id } => {
            let stops = flows::list_stops(connections, &tour_id)?;
            let stops: Vec<json::Stop> = stops.into_iter().map(Into::into).collect();
            print_json(&stops)?;
        }
        Command::AddStop {
            tour_id,
            location_id,
            day,
            note,
            expected_version,
        } => {
            let new_stop = usecases::NewStop {
                location_id: location_id.into(),
                day,
                note,
            };
            let stop = flows::add_stop(
                connections,
                ordering,
                &tour_id,
                new_stop,
                expected_version.map(Revision::from),
            )?;
            print_json(&json::Stop::from(stop))?;
        }
        Command::RemoveStop {
            tour_id,
            stop_id,
            expected_version,
        } => {
            let stop = flows::remove_stop(
                connections,
                ordering,
                &tour_id,
                &stop_id,
                expected_version.map(Revision::from),
            )?;
            print_json(&json::Stop::from(stop))?;
        }
        Command::Reorder {
            tour_id,
            file,
            expected_version,
        } => {
            let contents = fs::read_to_string(&file)?;
            let assignments: Vec<json::SlotAssignment> =
                serde_json::from_str(&contents).map_err(anyhow::Error::from)?;
            let assignments: Vec<_> = assignments
                .into_iter()
                .map(|assignment| {
                    let (stop_id, slot): (Id, Slot) = assignment.into();
                    SlotAssignment { stop_id, slot }
                })
                .collect();
            let stops = flows::reorder_stops(
                connections,
                ordering,
                &tour_id,
                &assignments,
                expected_version.map(Revision::from),
            )?;
            let stops: Vec<json::Stop> = stops.into_iter().map(Into::into).collect();
            print_json(&stops)?;
        }
        Command::Compact {
            tour_id,
            day,
            expected_version,
        } => {
            let stops = flows::compact_day(
                connections,
                ordering,
                &tour_id,
                day,
                expected_version.map(Revision::from),
            )?;
            let stops: Vec<json::Stop> = stops.into_iter().map(Into::into).collect();
            print_json(&stops)?;
        }
        Command::DeleteTour { id } => {
            flows::delete_tour(connections, &id)?;
            print_json(&serde_json::json!({ "id": id }))?;
        }
        Command::Location { id, lang } => {
            let lang = language(cfg, lang)?;
            let location = flows::resolve_location(connections, &cfg.content, &id, &lang)?;
            print_json(&conv::from_resolved_location(location))?;
        }
        Command::Locations {
            keyword,
            city,
            category,
            lang,
            page,
        } => {
            let lang = language(cfg, lang)?;
            let filter = LocationFilter {
                keyword,
                city,
                category,
            };
            let locations = flows::resolve_locations(
                connections,
                &cfg.content,
                &filter,
                &lang,
                &Pagination::from(page),
            )?;
            let locations: Vec<_> = locations
                .into_iter()
                .map(conv::from_resolved_location)
                .collect();
            print_json(&locations)?;
        }
        Command::DeleteLocation { id, cascade } => {
            let policy = if cascade {
                LocationDeletionPolicy::Cascade
            } else {
                cfg.itinerary.location_deletion
            };
            let removed_stops = flows::delete_location(connections, &id, policy)?;
            print_json(&serde_json::json!({ "id": id, "removed_stops": removed_stops }))?;
        }
        Command::Ratings { location, page } => {
            let pagination = Pagination::from(page);
            let ratings = flows::list_ratings(connections, location.as_deref(), &pagination)?;
            let ratings: Vec<json::Rating> = ratings.into_iter().map(Into::into).collect();
            print_json(&ratings)?;
        }
        Command::TopRated {
            min_reviews,
            top,
            lang,
        } => {
            let lang = language(cfg, lang)?;
            let summaries =
                flows::top_rated_locations(connections, &cfg.content, min_reviews, top, &lang)?;
            let summaries: Vec<_> = summaries
                .into_iter()
                .map(conv::from_location_summary)
                .collect();
            print_json(&summaries)?;
        }
        Command::Share { tour_id } => {
            let gateway = ShareLinks::new(cfg.share.base_url.as_str());
            let url = flows::share_tour(connections, &gateway, &tour_id)?;
            print_json(&json::ShareLink { tour_id, url })?;
        }
    }
    Ok(())
}
