//! Mock catalog
//!
//! The demo ships with a fixed set of festivals. Ids and dates are
//! generated at call time, so every launch gets a distinct catalog with
//! the same content.

use chrono::Utc;
use uuid::Uuid;

use crate::{Festival, FestivalDetail, Person};

const FESTIVALS: [(&str, &str); 10] = [
    ("festival", "Tomorrowland"),
    ("festival2", "Dekmantel"),
    ("festival3", "Primavera Sound"),
    ("festival4", "Let It Roll"),
    ("festival5", "Coachella Music & Arts Festival"),
    ("festival6", "Meadows in the Mountains"),
    ("festival7", "Montreux Jazz Festival"),
    ("festival8", "Hellfest Open Air Festival"),
    ("festival9", "AFROPUNK"),
    ("festival10", "SXSW: South by Southwest"),
];

const PEOPLE: [&str; 9] = [
    "person", "person1", "person3", "person4", "person5", "person6", "person7", "person8",
    "person9",
];

const DESCRIPTION: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit donec, \
gravida commodo hac non mattis augue duis vitae inceptos, laoreet taciti at vehicula";

const VENUE_LAT: f64 = 24.7136;
const VENUE_LONG: f64 = 46.6753;
const TICKET_PRICE: f64 = 234.32;

/// Attendees shown on every festival's detail screen
pub fn people() -> Vec<Person> {
    PEOPLE
        .iter()
        .map(|image_name| Person {
            id: Uuid::new_v4(),
            image_name: (*image_name).to_string(),
        })
        .collect()
}

/// Build the full mock catalog
pub fn catalog() -> Vec<Festival> {
    let now = Utc::now();

    FESTIVALS
        .iter()
        .map(|(image_name, title)| Festival {
            id: Uuid::new_v4(),
            image_name: (*image_name).to_string(),
            date: now,
            title: (*title).to_string(),
            details: vec![FestivalDetail {
                id: Uuid::new_v4(),
                title: (*title).to_string(),
                from_date: now.date_naive(),
                to_date: now.date_naive(),
                from_time: now.time(),
                to_time: now.time(),
                description: DESCRIPTION.to_string(),
                lat: VENUE_LAT,
                long: VENUE_LONG,
                price: TICKET_PRICE,
                people: people(),
            }],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_festivals() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].title, "Tomorrowland");
        assert_eq!(catalog[9].title, "SXSW: South by Southwest");
    }

    #[test]
    fn test_every_festival_has_details_and_people() {
        for festival in catalog() {
            assert_eq!(festival.details.len(), 1);
            let detail = &festival.details[0];
            assert_eq!(detail.title, festival.title);
            assert_eq!(detail.people.len(), 9);
            assert!(detail.price > 0.0);
        }
    }

    #[test]
    fn test_ids_regenerate_per_catalog() {
        let first = catalog();
        let second = catalog();
        assert_ne!(first[0].id, second[0].id);
    }
}
