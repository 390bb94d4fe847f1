//! Campaign-domain entity payloads and demo datasets.
//!
//! These are the record shapes the stores manage: campaigns, player
//! characters, play sessions, and world-building records. System fields
//! (id, timestamps) live on [`Stored`](crate::store::Stored), never here.
//! Foreign keys are plain [`EntityId`] fields with no enforcement across
//! stores; deleting a campaign leaves its characters in place.

use crate::id::EntityId;
use crate::store::Stored;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Inactive,
    Planned,
    Completed,
    Suspended,
}

impl CampaignStatus {
    pub fn name(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Inactive => "Inactive",
            CampaignStatus::Planned => "Planned",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A tabletop campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub title: String,
    pub description: String,
    pub status: CampaignStatus,
    /// Rule system the campaign is run under, e.g. "D&D 5e".
    pub system: String,
    /// Sessions played so far.
    pub sessions: u32,
    /// Number of players at the table.
    pub players: u32,
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub class: String,
    pub race: String,
    pub level: u8,
    pub description: String,
    /// The campaign this character belongs to.
    pub campaign_id: EntityId,
    /// The player running the character.
    pub player_id: EntityId,
}

/// A scheduled or played game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Ordinal within the campaign.
    pub number: u32,
    pub title: String,
    pub description: String,
    /// Calendar date, e.g. "2026-03-14".
    pub date: String,
    /// Start time, e.g. "19:00".
    pub time: String,
    /// Planned length in minutes.
    pub duration: u32,
    pub campaign_id: EntityId,
    pub confirmed_players: u32,
    pub total_players: u32,
    pub notes: String,
}

/// A place in the campaign world. Locations nest through
/// `parent_location_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    /// Kind of place, e.g. "city" or "dungeon". Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub campaign_id: EntityId,
    pub parent_location_id: Option<EntityId>,
    /// Whether the party has been here.
    pub visited: bool,
    pub notes: String,
}

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub name: String,
    pub race: String,
    pub occupation: String,
    pub description: String,
    pub campaign_id: EntityId,
    pub location_id: Option<EntityId>,
    pub faction_id: Option<EntityId>,
    pub notes: String,
}

/// An organization or power group in the campaign world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub name: String,
    pub description: String,
    pub campaign_id: EntityId,
    pub notes: String,
}

// ============================================================================
// Demo datasets
// ============================================================================

/// Demo campaigns for first-run walkthroughs.
///
/// Seeding is explicit: pass these through
/// [`StoreConfig::with_seed`](crate::store::StoreConfig::with_seed) when
/// demo content is wanted; an unconfigured store starts empty.
pub fn sample_campaigns() -> Vec<Stored<Campaign>> {
    vec![
        sample_record(
            "1",
            60,
            2,
            Campaign {
                title: "Chronicles of the Mystic Realms".to_string(),
                description: "An epic journey across the Mystic Realms, where a band of \
                              heroes hunts the scattered fragments of an artifact that can \
                              halt the awakening of an ancient evil. High fantasy woven \
                              with political intrigue."
                    .to_string(),
                status: CampaignStatus::Active,
                system: "D&D 5e".to_string(),
                sessions: 8,
                players: 5,
            },
        ),
        sample_record(
            "2",
            120,
            15,
            Campaign {
                title: "Beyond Time and Space".to_string(),
                description: "A science-fiction exploration of the universe's mysteries, \
                              with the party drifting between dimensions."
                    .to_string(),
                status: CampaignStatus::Suspended,
                system: "Starfinder".to_string(),
                sessions: 12,
                players: 4,
            },
        ),
        sample_record(
            "3",
            30,
            10,
            Campaign {
                title: "Starbound Trails".to_string(),
                description: "Deep-space exploration and interplanetary conflict in the \
                              far future."
                    .to_string(),
                status: CampaignStatus::Planned,
                system: "Stars Without Number".to_string(),
                sessions: 5,
                players: 6,
            },
        ),
        sample_record(
            "4",
            200,
            40,
            Campaign {
                title: "Forgotten Kingdoms".to_string(),
                description: "Delving the ruins of ancient civilizations in a classic \
                              fantasy world."
                    .to_string(),
                status: CampaignStatus::Completed,
                system: "Pathfinder 2e".to_string(),
                sessions: 20,
                players: 5,
            },
        ),
    ]
}

/// Demo characters, all belonging to the first sample campaign.
pub fn sample_characters() -> Vec<Stored<Character>> {
    vec![
        sample_record(
            "1",
            50,
            5,
            Character {
                name: "Thorin".to_string(),
                class: "Fighter".to_string(),
                race: "Dwarf".to_string(),
                level: 5,
                description: "A stalwart dwarf, master of the battleaxe and shield of his \
                              companions."
                    .to_string(),
                campaign_id: EntityId::from_raw("1"),
                player_id: EntityId::from_raw("user1"),
            },
        ),
        sample_record(
            "2",
            48,
            3,
            Character {
                name: "Elaria".to_string(),
                class: "Wizard".to_string(),
                race: "Elf".to_string(),
                level: 5,
                description: "A formidable elven wizard specializing in fire and illusion \
                              magic."
                    .to_string(),
                campaign_id: EntityId::from_raw("1"),
                player_id: EntityId::from_raw("user2"),
            },
        ),
        sample_record(
            "3",
            45,
            5,
            Character {
                name: "Grimm".to_string(),
                class: "Barbarian".to_string(),
                race: "Human".to_string(),
                level: 5,
                description: "A wild warrior from the north whose strength and endurance \
                              are the stuff of legend."
                    .to_string(),
                campaign_id: EntityId::from_raw("1"),
                player_id: EntityId::from_raw("user3"),
            },
        ),
    ]
}

fn sample_record<T>(id: &str, created_days_ago: i64, updated_days_ago: i64, data: T) -> Stored<T> {
    Stored {
        id: EntityId::from_raw(id),
        created_at: Timestamp::days_ago(created_days_ago),
        updated_at: Timestamp::days_ago(updated_days_ago),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_status_display() {
        assert_eq!(CampaignStatus::Active.to_string(), "Active");
        assert_eq!(CampaignStatus::Suspended.to_string(), "Suspended");
    }

    #[test]
    fn test_sample_campaign_ids_are_unique() {
        let campaigns = sample_campaigns();
        let ids: HashSet<_> = campaigns.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), campaigns.len());
    }

    #[test]
    fn test_sample_records_have_ordered_timestamps() {
        for campaign in sample_campaigns() {
            assert!(campaign.updated_at >= campaign.created_at);
        }
        for character in sample_characters() {
            assert!(character.updated_at >= character.created_at);
        }
    }

    #[test]
    fn test_sample_characters_reference_first_campaign() {
        let campaigns = sample_campaigns();
        let first = &campaigns[0].id;
        for character in sample_characters() {
            assert_eq!(&character.data.campaign_id, first);
        }
    }

    #[test]
    fn test_character_serializes_with_camel_case_keys() {
        let character = &sample_characters()[0];
        let json = serde_json::to_value(character).unwrap();
        assert_eq!(json["campaignId"], "1");
        assert_eq!(json["playerId"], "user1");
        assert!(json.get("campaign_id").is_none());
    }

    #[test]
    fn test_location_kind_serializes_as_type() {
        let location = Location {
            name: "Silverkeep".to_string(),
            kind: "city".to_string(),
            description: String::new(),
            campaign_id: EntityId::from_raw("1"),
            parent_location_id: None,
            visited: true,
            notes: String::new(),
        };
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["type"], "city");
        assert!(json.get("kind").is_none());
    }
}
