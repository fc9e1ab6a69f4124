use super::{create_test_storage, create_test_team};
use crate::StorageError;
use crate::traits::TeamStore;
use chrono::{Duration, Utc};
use salescript_core::{MemberRole, Playbook, SalesMotion, TeamMembership};

#[tokio::test]
async fn test_owner_membership_is_created_with_team() {
    let storage = create_test_storage().await;
    let membership = storage.get_membership("alice").await.unwrap().unwrap();
    assert_eq!(membership.team_id, "team-a");
    assert_eq!(membership.role, MemberRole::Owner);
}

#[tokio::test]
async fn test_user_without_team_has_no_membership() {
    let storage = create_test_storage().await;
    assert!(storage.get_membership("carol").await.unwrap().is_none());
}

#[tokio::test]
async fn test_earliest_membership_wins() {
    let storage = create_test_storage().await;
    let (team, mut owner) = create_test_team("team-c", "alice");
    owner.joined_at = Utc::now() + Duration::hours(1);
    storage.create_team(&team, &owner).await.unwrap();

    let membership: TeamMembership = storage.get_membership("alice").await.unwrap().unwrap();
    assert_eq!(membership.team_id, "team-a");
}

#[tokio::test]
async fn test_duplicate_team_is_rejected() {
    let storage = create_test_storage().await;
    let (team, owner) = create_test_team("team-a", "alice");
    let err = storage.create_team(&team, &owner).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)));
}

#[tokio::test]
async fn test_playbook_defaults_then_update() {
    let storage = create_test_storage().await;
    assert_eq!(storage.get_playbook("team-a").await.unwrap(), Some(Playbook::default()));

    let playbook = Playbook {
        sales_motion: SalesMotion::Enterprise,
        tone_default: Some("formal".to_owned()),
        no_go_phrases: Some("kul att prata".to_owned()),
        primary_objections: Some("price, timing".to_owned()),
    };
    assert!(storage.update_playbook("team-a", &playbook).await.unwrap());
    assert_eq!(storage.get_playbook("team-a").await.unwrap(), Some(playbook));
    assert_eq!(storage.get_playbook("team-b").await.unwrap(), Some(Playbook::default()));
}

#[tokio::test]
async fn test_playbook_for_unknown_team() {
    let storage = create_test_storage().await;
    assert_eq!(storage.get_playbook("team-x").await.unwrap(), None);
    assert!(!storage.update_playbook("team-x", &Playbook::default()).await.unwrap());
}
