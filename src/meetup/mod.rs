//! Meetup point selection
//!
//! Ranks a fixed set of public locations by proximity to the midpoint of the
//! two parties and reports each party's own distance to every suggestion.

use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, midpoint, round1};
use crate::models::Coordinate;

/// Maximum suggestions returned per query
const MAX_SUGGESTIONS: usize = 5;

/// A fixed public location proposed for an in-person exchange
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MeetupPoint {
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    pub kind: MeetupKind,
    pub icon: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MeetupKind {
    Cafe,
    Mall,
    Station,
    Park,
}

/// A meetup point with each party's distance to it
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MeetupSuggestion {
    #[serde(flatten)]
    pub point: MeetupPoint,
    /// Requester's distance to the point, km (1 decimal)
    pub distance_user1_km: f64,
    /// Matched party's distance to the point, km (1 decimal)
    pub distance_user2_km: f64,
}

/// Selector over a static set of known public meetup points
pub struct MeetupSelector {
    points: Vec<MeetupPoint>,
}

impl Default for MeetupSelector {
    fn default() -> Self {
        Self {
            points: known_points(),
        }
    }
}

impl MeetupSelector {
    pub fn new(points: Vec<MeetupPoint>) -> Self {
        Self { points }
    }

    /// Rank points by distance to the arithmetic midpoint of the two parties
    /// and return the closest five. The midpoint distance is only a sort key;
    /// each suggestion carries the per-party distances instead.
    pub fn suggest(&self, user1: Coordinate, user2: Coordinate) -> Vec<MeetupSuggestion> {
        let mid = midpoint(user1, user2);

        let mut ranked: Vec<(f64, MeetupSuggestion)> = self
            .points
            .iter()
            .map(|point| {
                let to_midpoint = distance_km(mid, point.location);
                let suggestion = MeetupSuggestion {
                    point: point.clone(),
                    distance_user1_km: round1(distance_km(user1, point.location)),
                    distance_user2_km: round1(distance_km(user2, point.location)),
                };
                (to_midpoint, suggestion)
            })
            .collect();

        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        ranked
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, suggestion)| suggestion)
            .collect()
    }
}

/// The eight known public meetup points in Surat
fn known_points() -> Vec<MeetupPoint> {
    let point = |id: &str, name: &str, address: &str, lat: f64, lng: f64, kind: MeetupKind, icon: &str| {
        MeetupPoint {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            location: Coordinate::new(lat, lng),
            kind,
            icon: icon.to_string(),
        }
    };

    vec![
        point(
            "mp-01",
            "Cafe Coffee Day, Adajan",
            "Anand Mahal Rd, Adajan, Surat",
            21.1890,
            72.7933,
            MeetupKind::Cafe,
            "coffee",
        ),
        point(
            "mp-02",
            "VR Surat Mall",
            "Dumas Rd, Magdalla, Surat",
            21.1458,
            72.7824,
            MeetupKind::Mall,
            "shopping-bag",
        ),
        point(
            "mp-03",
            "Surat Railway Station",
            "Railway Station Rd, Surat",
            21.2049,
            72.8411,
            MeetupKind::Station,
            "train",
        ),
        point(
            "mp-04",
            "Sarthana Nature Park",
            "Sarthana Jakat Naka, Surat",
            21.2320,
            72.8920,
            MeetupKind::Park,
            "tree",
        ),
        point(
            "mp-05",
            "Rahul Raj Mall",
            "Opp. L P Savani School, Piplod, Surat",
            21.1594,
            72.7868,
            MeetupKind::Mall,
            "shopping-bag",
        ),
        point(
            "mp-06",
            "Barista, Vesu",
            "VIP Rd, Vesu, Surat",
            21.1410,
            72.7720,
            MeetupKind::Cafe,
            "coffee",
        ),
        point(
            "mp-07",
            "Gopi Talav Lake Garden",
            "Saiyedpura, Surat",
            21.1959,
            72.8302,
            MeetupKind::Park,
            "tree",
        ),
        point(
            "mp-08",
            "Udhna Railway Station",
            "Udhna Main Rd, Surat",
            21.1702,
            72.8440,
            MeetupKind::Station,
            "train",
        ),
    ]
}
