use super::fields;
use super::{FormErrors, LeagueLookup, RawForm};
use crate::domain::{Rank, AGA_ID_RANGE, ID_RANGE};
use crate::errors::domain::DomainError;

/// Accepted player creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCreate {
    pub first_name: String,
    pub last_name: String,
    pub aga_id: i32,
    pub aga_rank: Rank,
}

impl PlayerCreate {
    pub fn validate(raw: &RawForm) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        let first_name = errors.check("first_name", fields::text(raw, "first_name"));
        let last_name = errors.check("last_name", fields::text(raw, "last_name"));
        let aga_id = errors.check("aga_id", fields::bounded(raw, "aga_id", &AGA_ID_RANGE));
        let aga_rank = errors.check("aga_rank", fields::rank(raw, "aga_rank"));

        match (first_name, last_name, aga_id, aga_rank) {
            (Some(first_name), Some(last_name), Some(aga_id), Some(aga_rank))
                if errors.is_empty() =>
            {
                Ok(Self {
                    first_name,
                    last_name,
                    aga_id,
                    aga_rank,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Accepted player deletion input: a player with no games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDelete {
    pub player_id: i64,
}

impl PlayerDelete {
    pub async fn validate<L>(raw: &RawForm, lookup: &L) -> Result<Self, DomainError>
    where
        L: LeagueLookup + ?Sized,
    {
        let mut errors = FormErrors::new();

        let Some(player_id) =
            errors.check("player_id", fields::bounded(raw, "player_id", &ID_RANGE))
        else {
            return Err(DomainError::InvalidForm(errors));
        };
        let player_id = i64::from(player_id);

        if !lookup.player_exists(player_id).await? {
            errors.add("player_id", fields::player_missing(player_id));
        } else if lookup.player_game_count(player_id).await? > 0 {
            errors.add("player_id", fields::PLAYER_HAS_GAMES);
        }

        if errors.is_empty() {
            Ok(Self { player_id })
        } else {
            Err(DomainError::InvalidForm(errors))
        }
    }
}
