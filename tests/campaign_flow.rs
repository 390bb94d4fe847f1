//! Integration tests for the campaign/character workflow.
//!
//! Drives two stores the way the UI layer does: a campaign store and a
//! character store hydrated from demo seeds, cross-referenced by foreign
//! key with no enforcement between them.

use campaign_store::model::{sample_campaigns, sample_characters, Campaign, Character, Session};
use campaign_store::{EntityId, EntityStore, MemoryStorage, StoreConfig};

fn seeded_stores() -> (EntityStore<Campaign>, EntityStore<Character>) {
    let campaigns = EntityStore::open(
        StoreConfig::new("campaign-storage").with_seed(sample_campaigns()),
        Box::new(MemoryStorage::new()),
    );
    let characters = EntityStore::open(
        StoreConfig::new("character-storage").with_seed(sample_characters()),
        Box::new(MemoryStorage::new()),
    );
    (campaigns, characters)
}

#[test]
fn test_demo_seed_shape() {
    let (campaigns, characters) = seeded_stores();
    assert_eq!(campaigns.len(), 4);
    assert_eq!(characters.len(), 3);
}

#[test]
fn test_characters_filter_by_campaign() {
    let (campaigns, mut characters) = seeded_stores();
    let first_campaign = campaigns.list()[0].id.clone();
    let other_campaign = campaigns.list()[1].id.clone();

    characters.add(Character {
        name: "Vex".to_string(),
        class: "Rogue".to_string(),
        race: "Half-Elf".to_string(),
        level: 3,
        description: String::new(),
        campaign_id: other_campaign.clone(),
        player_id: EntityId::from_raw("user4"),
    });

    let in_first = characters.list_where(|c| c.data.campaign_id == first_campaign);
    assert_eq!(in_first.len(), 3);

    let in_other = characters.list_where(|c| c.data.campaign_id == other_campaign);
    assert_eq!(in_other.len(), 1);
    assert_eq!(in_other[0].data.name, "Vex");
}

#[test]
fn test_deleting_campaign_leaves_characters_orphaned() {
    let (mut campaigns, characters) = seeded_stores();
    let first_campaign = campaigns.list()[0].id.clone();

    campaigns.delete(&first_campaign);

    // No cascade across stores: the characters keep their dangling
    // foreign key and remain listable.
    assert!(campaigns.get(&first_campaign).is_none());
    let orphans = characters.list_where(|c| c.data.campaign_id == first_campaign);
    assert_eq!(orphans.len(), 3);
}

#[test]
fn test_level_up_refreshes_updated_at() {
    let (_, mut characters) = seeded_stores();
    let thorin = characters.list()[0].clone();

    characters.update(&thorin.id, |c| c.level += 1);

    let leveled = characters.get(&thorin.id).unwrap();
    assert_eq!(leveled.data.level, thorin.data.level + 1);
    assert_eq!(leveled.created_at, thorin.created_at);
    assert!(leveled.updated_at > thorin.updated_at);
}

#[test]
fn test_session_scheduling() {
    let (campaigns, _) = seeded_stores();
    let campaign_id = campaigns.list()[0].id.clone();

    let mut sessions: EntityStore<Session> = EntityStore::open(
        StoreConfig::new("session-storage"),
        Box::new(MemoryStorage::new()),
    );

    let scheduled = sessions.add(Session {
        number: 9,
        title: "The Sunken Vault".to_string(),
        description: "The party descends below the harbor district.".to_string(),
        date: "2026-09-12".to_string(),
        time: "19:00".to_string(),
        duration: 240,
        campaign_id: campaign_id.clone(),
        confirmed_players: 3,
        total_players: 5,
        notes: String::new(),
    });

    sessions.update(&scheduled.id, |s| s.confirmed_players = 5);

    let upcoming = sessions.list_where(|s| s.data.campaign_id == campaign_id);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].data.confirmed_players, 5);
}

#[test]
fn test_selection_follows_campaign_switch() {
    let (mut campaigns, _) = seeded_stores();
    let first = campaigns.list()[0].id.clone();
    let second = campaigns.list()[1].id.clone();

    campaigns.select(Some(first.clone()));
    assert_eq!(campaigns.selected().unwrap().id, first);

    campaigns.select(Some(second.clone()));
    assert_eq!(campaigns.selected().unwrap().id, second);

    campaigns.delete(&second);
    assert!(campaigns.selected_id().is_none());
}
