//! Room→zone registry built from the zone layout configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thermazone_types::Zone;

use crate::error::{Error, Result};
use crate::normalize::normalize_room_name;

/// Rooms belonging to one zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRooms {
    /// The zone the rooms belong to.
    pub zone: Zone,
    /// Room names as they appear in the building plan.
    pub rooms: Vec<String>,
}

/// The zone→room-list configuration.
///
/// This is data, not control flow: the default layout describes the
/// reference building and can be replaced wholesale (for instance from a
/// TOML file) when the pipeline is pointed at another site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneLayout {
    /// One entry per zone, in display order.
    pub zones: Vec<ZoneRooms>,
}

fn zone_rooms(zone: Zone, rooms: &[&str]) -> ZoneRooms {
    ZoneRooms {
        zone,
        rooms: rooms.iter().map(|room| (*room).to_string()).collect(),
    }
}

impl Default for ZoneLayout {
    /// The room inventory of the reference building.
    fn default() -> Self {
        Self {
            zones: vec![
                zone_rooms(Zone::Classrooms, &[
                    "Salle 31",
                    "Salle 32",
                    "Salle étude 2",
                    "Classe 1",
                    "Classe 2",
                    "Classe 3",
                    "Classe 5",
                    "Classe 6",
                    "Classe 7",
                    "Classe 8",
                    "Classe 9",
                    "Classe 10",
                    "Classe 11",
                    "Classe 12",
                    "Classe 13",
                    "Classe 14",
                    "Salle de dessin 13",
                    "Classe 16",
                    "Classe 17",
                    "Classe 18",
                    "Classe 19",
                    "Classe 21",
                    "Classe 22",
                    "Classe 23",
                    "Classe 4",
                    "Salle 30",
                    "Salle 34",
                    "Salle 33",
                ]),
                zone_rooms(Zone::Corridors, &[
                    "Couloir 1e Bat 6",
                    "Degagement 3 bat 3",
                    "Degagement - 15",
                    "Couloir RDC - 5",
                    "Couloir bureaux",
                    "Couloir RDC Bat 6",
                    "Degagement 4 - 2",
                ]),
                zone_rooms(Zone::AncillaryRooms, &[
                    "Sanitaire - 9",
                    "Orientation",
                    "Gardien - 29",
                    "Sanitaire 1E - 5",
                    "Vestiaire 6",
                    "Dépot 5",
                    "Dépot 4 - 6",
                    "Dépot 2 - 7",
                    "Labo - 6",
                    "Labo - 8",
                    "Labo - 10",
                    "WC - 12",
                    "WC - 11",
                    "Sanitaire 22",
                    "Sanitaire 23",
                    "WC Personnel -- 20",
                    "Sanitaire RDC - 5",
                    "Depot 9",
                    "Dépot 2 - 6",
                    "Sanitaires Hommes 1E - 6",
                    "Sanitaires Dames 1E - 6",
                ]),
                zone_rooms(Zone::Administrative, &[
                    "Infirmerie",
                    "Lingerie",
                    "Soins",
                    "CDI",
                    "S T P",
                    "Salle des machines - 20",
                    "Conseiller - 18",
                    "Principal adjoint - 24",
                    "Secretariat - 25",
                    "Direction - 26",
                    "Salle des profs",
                    "Salle de réunion",
                ]),
                zone_rooms(Zone::Cafeteria, &[
                    "Cantine",
                    "SAM Prof 1",
                    "SAM Prof 2",
                ]),
                zone_rooms(Zone::MultipurposeHall, &["Préau"]),
                zone_rooms(Zone::Kitchen, &[
                    "Plonge",
                    "Reserve - 11",
                    "Entrée - 18",
                    "Cuisine",
                ]),
                zone_rooms(Zone::ElectricRadiators, &[
                    "Salle étude 1",
                    "Salle de réunion - 32",
                    "Atelier - 7",
                    "Vie scolaire - 3",
                    "Gestion - 30",
                    "Bureau CPE - 1",
                    "Salle de travail - 2",
                ]),
            ],
        }
    }
}

/// Immutable room→zone lookup.
///
/// Built once from a [`ZoneLayout`]; read-only afterwards, so it can be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    rooms: HashMap<String, Zone>,
}

impl ZoneRegistry {
    /// Build the inverse room→zone map from a layout.
    ///
    /// Every room name is normalized before insertion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRoom`] if the same normalized room name
    /// appears under two different zones.
    pub fn from_layout(layout: &ZoneLayout) -> Result<Self> {
        let mut rooms = HashMap::new();
        for entry in &layout.zones {
            for raw in &entry.rooms {
                let room = normalize_room_name(Some(raw));
                if let Some(first) = rooms.insert(room.clone(), entry.zone)
                    && first != entry.zone
                {
                    return Err(Error::DuplicateRoom {
                        room,
                        first,
                        second: entry.zone,
                    });
                }
            }
        }
        Ok(Self { rooms })
    }

    /// Registry for the reference building.
    #[must_use]
    pub fn with_default_layout() -> Self {
        Self::from_layout(&ZoneLayout::default()).expect("default layout has no duplicate rooms")
    }

    /// Resolve a normalized room name to its zone.
    ///
    /// Unknown and empty names resolve to [`Zone::Unknown`]; unclassified
    /// sensors are an expected case, not an error.
    #[must_use]
    pub fn resolve(&self, room: &str) -> Zone {
        if room.is_empty() {
            return Zone::Unknown;
        }
        self.rooms.get(room).copied().unwrap_or(Zone::Unknown)
    }

    /// Number of configured rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry has no rooms at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over all configured rooms and their zones.
    pub fn rooms(&self) -> impl Iterator<Item = (&str, Zone)> {
        self.rooms.iter().map(|(room, zone)| (room.as_str(), *zone))
    }

    /// Rooms belonging to one zone, sorted by name.
    #[must_use]
    pub fn rooms_in(&self, zone: Zone) -> Vec<&str> {
        let mut rooms: Vec<&str> = self
            .rooms
            .iter()
            .filter(|(_, z)| **z == zone)
            .map(|(room, _)| room.as_str())
            .collect();
        rooms.sort_unstable();
        rooms
    }
}
