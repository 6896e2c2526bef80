//! Database repository layer for all roster documents.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! document kind. Repositories use SeaORM entity models internally and return domain
//! models to maintain separation between the data layer and business logic layer. There
//! are no foreign keys between tables: ids held in embedded lists may dangle, and
//! callers are expected to tolerate that.

pub mod archive_team;
pub mod claim_guest_request;
pub mod one_time_passcode;
pub mod roster_request;
pub mod team;
pub mod team_designation;
pub mod user;
pub mod verification_request;

#[cfg(test)]
mod test;

use sea_orm::{ColumnTrait, Condition};

/// Builds an OR condition matching any token as a word prefix in any of `columns`.
///
/// A token matches a column when the value starts with it (`token%`) or when any word
/// after the first does (`% token%`). SQLite `LIKE` is case-insensitive for ASCII.
/// `%`, `_` and `\` are stripped from tokens so user input cannot act as a wildcard.
pub fn prefix_condition<C: ColumnTrait>(tokens: &[String], columns: &[C]) -> Condition {
    let mut condition = Condition::any();

    for token in tokens {
        let token: String = token
            .chars()
            .filter(|c| !matches!(c, '%' | '_' | '\\'))
            .collect();
        if token.is_empty() {
            continue;
        }

        for column in columns {
            condition = condition
                .add(column.like(format!("{token}%")))
                .add(column.like(format!("% {token}%")));
        }
    }

    condition
}
