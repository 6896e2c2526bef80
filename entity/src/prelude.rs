pub use super::archive_team::Entity as ArchiveTeam;
pub use super::claim_guest_request::Entity as ClaimGuestRequest;
pub use super::one_time_passcode::Entity as OneTimePasscode;
pub use super::roster_request::Entity as RosterRequest;
pub use super::team::Entity as Team;
pub use super::team_designation::Entity as TeamDesignation;
pub use super::user::Entity as User;
pub use super::verification_request::Entity as VerificationRequest;
