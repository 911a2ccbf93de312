//! Festival catalog model
//!
//! In-memory data backing the festival browser. There is no store behind
//! this: [`mock::catalog`] builds a fresh catalog with new ids on every
//! launch, matching the demo nature of the app.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod mock;

/// A festival shown in the browser
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    pub id: Uuid,
    pub image_name: String,
    pub date: DateTime<Utc>,
    pub title: String,
    pub details: Vec<FestivalDetail>,
}

/// Schedule, venue and pricing details for one festival edition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FestivalDetail {
    pub id: Uuid,
    pub title: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub from_time: NaiveTime,
    pub to_time: NaiveTime,
    pub description: String,
    pub lat: f64,
    pub long: f64,
    pub price: f64,
    pub people: Vec<Person>,
}

/// An attendee shown in the "Interested" row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub image_name: String,
}

/// Festival categories offered by the category picker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FestivalCategory {
    Musical,
    Book,
    Dance,
    Outdoor,
    Indoor,
    Club,
    Vips,
}

impl FestivalCategory {
    /// All categories, in picker order
    pub fn all() -> [FestivalCategory; 7] {
        use FestivalCategory::*;
        [Musical, Book, Dance, Outdoor, Indoor, Club, Vips]
    }

    /// Display title for the picker chip
    pub fn title(&self) -> &'static str {
        match self {
            FestivalCategory::Musical => "Musical Festival",
            FestivalCategory::Book => "Book Festival",
            FestivalCategory::Dance => "Dance Festival",
            FestivalCategory::Outdoor => "Outdoor Festival",
            FestivalCategory::Indoor => "Indoor Festival",
            FestivalCategory::Club => "Club Festival",
            FestivalCategory::Vips => "VIPs Festival",
        }
    }
}

impl Default for FestivalCategory {
    fn default() -> Self {
        FestivalCategory::Musical
    }
}

/// Filter festivals by a search query
///
/// Case-insensitive substring match on the title; a blank query keeps
/// everything, mirroring the search bar's resting state.
pub fn search<'a>(festivals: &'a [Festival], query: &str) -> Vec<&'a Festival> {
    let query = query.trim().to_lowercase();
    festivals
        .iter()
        .filter(|festival| query.is_empty() || festival.title.to_lowercase().contains(&query))
        .collect()
}
