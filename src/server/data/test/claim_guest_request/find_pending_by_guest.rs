use super::*;
use entity::sea_orm_active_enums::RequestStatus;

/// Tests listing the competing claims on one guest.
///
/// Expected: Ok with both pending claims and not the denied one
#[tokio::test]
async fn lists_pending_claims_for_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_guest(db).await?;
    let team = factory::create_team(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = ClaimGuestRequestRepository::new(db);
    let a = repo.create(first.id, guest.id, team.id).await?;
    let b = repo.create(second.id, guest.id, team.id).await?;
    let c = repo.create(third.id, guest.id, team.id).await?;
    repo.update_status(c.id, RequestStatus::Denied).await?;

    let pending = repo.find_pending_by_guest(guest.id).await?;
    let ids: Vec<_> = pending.iter().map(|r| r.id).collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));

    Ok(())
}
