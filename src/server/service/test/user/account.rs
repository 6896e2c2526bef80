use super::*;
use crate::server::service::{auth::AuthService, roster_request::RosterRequestService};

/// Tests signup and a subsequent login with either identifier.
///
/// Expected: open, public account with empty caches that can log in by email or username
#[tokio::test]
async fn signup_then_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db).signup(signup_param("jamie")).await?;

    assert!(user.open_to_requests);
    assert!(!user.private);
    assert!(!user.guest);
    assert!(user.player_teams.is_empty());
    assert_ne!(user.password, "Str0ng!pass");

    let auth = AuthService::new(db);
    assert_eq!(auth.login("jamie", "Str0ng!pass").await?.id, user.id);
    assert_eq!(auth.login("JAMIE@example.com", "Str0ng!pass").await?.id, user.id);
    assert!(matches!(
        auth.login("jamie", "wrong").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests signup validation and uniqueness.
///
/// Expected: WeakPassword, InvalidUsername, EmailTaken and UsernameTaken in turn
#[tokio::test]
async fn signup_rejects_bad_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.signup(signup_param("taken")).await?;

    let mut weak = signup_param("weakling");
    weak.password = "password".to_string();
    assert!(matches!(
        service.signup(weak).await,
        Err(AppError::RosterErr(RosterError::WeakPassword))
    ));

    assert!(matches!(
        service.signup(signup_param("no_underscores")).await,
        Err(AppError::RosterErr(RosterError::InvalidUsername))
    ));

    let mut same_email = signup_param("other");
    same_email.email = "taken@example.com".to_string();
    assert!(matches!(
        service.signup(same_email).await,
        Err(AppError::RosterErr(RosterError::EmailTaken))
    ));

    let mut same_username = signup_param("taken");
    same_username.email = "fresh@example.com".to_string();
    assert!(matches!(
        service.signup(same_username).await,
        Err(AppError::RosterErr(RosterError::UsernameTaken))
    ));

    Ok(())
}

/// Tests that malformed addresses and blank names are rejected before anything is stored.
///
/// Expected: InvalidEmail for each malformed address, MissingField("firstName") for a blank name
#[tokio::test]
async fn signup_rejects_malformed_email_and_blank_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    for email in [
        "casey@example..com",
        "casey@exa,mple.com",
        "casey@ex(am)ple.com",
        "ca<y@example.com",
        "casey.example.com",
    ] {
        let mut param = signup_param("casey");
        param.email = email.to_string();
        assert!(
            matches!(
                service.signup(param).await,
                Err(AppError::RosterErr(RosterError::InvalidEmail))
            ),
            "{email} was accepted"
        );
    }

    let mut blank = signup_param("casey");
    blank.first_name = "   ".to_string();
    blank.password = "weak".to_string();
    assert!(matches!(
        service.signup(blank).await,
        Err(AppError::RosterErr(RosterError::MissingField("firstName")))
    ));

    let mut padded = signup_param("casey");
    padded.email = "  Casey@Example.com ".to_string();
    let user = service.signup(padded).await?;
    assert_eq!(user.email, "casey@example.com");

    Ok(())
}

/// Tests changing the password.
///
/// Expected: wrong current password rejected; new password works for login
#[tokio::test]
async fn change_password_requires_current() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.signup(signup_param("rotator")).await?;

    assert!(matches!(
        service.change_password(user.id, "nope", "N3w!secret").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    service
        .change_password(user.id, "Str0ng!pass", "N3w!secret")
        .await?;
    assert!(AuthService::new(db)
        .login("rotator", "N3w!secret")
        .await
        .is_ok());

    Ok(())
}

/// Tests deleting an account that plays on a team and has a pending request.
///
/// Expected: account gone, removed from the roster, request purged from the team queue
#[tokio::test]
async fn delete_account_cleans_up() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roster = factory::create_team(db).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &roster, &player).await?;
    let other = factory::create_team(db).await?;
    RosterRequestService::new(db)
        .request_from_player(player.id, other.id)
        .await?;

    UserService::new(db).delete_account(player.id).await?;

    assert!(lookup::user(db, player.id).await.is_err());
    assert!(!lookup::team(db, roster.id).await?.players.contains(player.id));
    assert!(lookup::team(db, other.id).await?.requests.is_empty());

    Ok(())
}

/// Tests the guards on account deletion.
///
/// Expected: GuestAccount for a guest, OnlyManagerCannotLeave for a sole manager
#[tokio::test]
async fn delete_account_guards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::create_guest(db).await?;
    let manager = factory::create_user(db).await?;
    factory::helpers::create_team_managed_by(db, &manager).await?;
    let service = UserService::new(db);

    assert!(matches!(
        service.delete_account(guest.id).await,
        Err(AppError::RosterErr(RosterError::GuestAccount))
    ));
    assert!(matches!(
        service.delete_account(manager.id).await,
        Err(AppError::RosterErr(RosterError::OnlyManagerCannotLeave))
    ));

    Ok(())
}
