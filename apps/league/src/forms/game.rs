use time::OffsetDateTime;

use super::fields;
use super::{FormErrors, LeagueLookup, RawForm};
use crate::domain::{
    Color, Handicap, Komi, AGA_ID_RANGE, EPISODE_RANGE, ID_RANGE, SEASON_RANGE,
};
use crate::errors::domain::DomainError;

/// Accepted game input. Players are named by their AGA ids; the service
/// resolves them to player records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCreate {
    pub white_aga_id: i32,
    pub black_aga_id: i32,
    pub winner: Color,
    pub handicap: Handicap,
    pub komi: Komi,
    pub season: i32,
    pub episode: i32,
    /// `None` when the form left it blank.
    pub played_at: Option<OffsetDateTime>,
}

impl GameCreate {
    pub async fn validate<L>(raw: &RawForm, lookup: &L) -> Result<Self, DomainError>
    where
        L: LeagueLookup + ?Sized,
    {
        let mut errors = FormErrors::new();
        match Self::collect(raw, lookup, &mut errors).await? {
            Some(game) if errors.is_empty() => Ok(game),
            _ => Err(DomainError::InvalidForm(errors)),
        }
    }

    /// Run every game field rule, recording failures into `errors`.
    async fn collect<L>(
        raw: &RawForm,
        lookup: &L,
        errors: &mut FormErrors,
    ) -> Result<Option<Self>, DomainError>
    where
        L: LeagueLookup + ?Sized,
    {
        let white_raw = errors.check("white_id", fields::integer(raw, "white_id"));
        let black_raw = errors.check("black_id", fields::integer(raw, "black_id"));

        let white = match white_raw {
            Some(id) => errors.check("white_id", fields::within(id, &AGA_ID_RANGE)),
            None => None,
        };
        let white = match white {
            Some(aga_id) => registered(lookup, errors, "white_id", aga_id).await?,
            None => None,
        };

        let black = match (white_raw, black_raw) {
            (Some(w), Some(b)) if w == b => {
                errors.add("black_id", fields::SELF_PLAY);
                None
            }
            (_, Some(b)) => errors.check("black_id", fields::within(b, &AGA_ID_RANGE)),
            (_, None) => None,
        };
        let black = match black {
            Some(aga_id) => registered(lookup, errors, "black_id", aga_id).await?,
            None => None,
        };

        let winner = errors.check("winner", fields::color(raw, "winner"));
        let handicap = errors.check("handicap", fields::handicap(raw, "handicap"));
        let komi = errors.check("komi", fields::komi(raw, "komi"));
        let season = errors.check("season", fields::bounded(raw, "season", &SEASON_RANGE));
        let episode = errors.check("episode", fields::bounded(raw, "episode", &EPISODE_RANGE));
        let played_at = errors.check("played_at", fields::played_at(raw, "played_at"));

        Ok(
            match (white, black, winner, handicap, komi, season, episode, played_at) {
                (
                    Some(white_aga_id),
                    Some(black_aga_id),
                    Some(winner),
                    Some(handicap),
                    Some(komi),
                    Some(season),
                    Some(episode),
                    Some(played_at),
                ) => Some(Self {
                    white_aga_id,
                    black_aga_id,
                    winner,
                    handicap,
                    komi,
                    season,
                    episode,
                    played_at,
                }),
                _ => None,
            },
        )
    }
}

/// Accepted game update: an existing game id plus a full set of game fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameUpdate {
    pub game_id: i64,
    pub game: GameCreate,
}

impl GameUpdate {
    pub async fn validate<L>(raw: &RawForm, lookup: &L) -> Result<Self, DomainError>
    where
        L: LeagueLookup + ?Sized,
    {
        let mut errors = FormErrors::new();

        let game_id = match errors.check("game_id", fields::bounded(raw, "game_id", &ID_RANGE)) {
            Some(id) => {
                let id = i64::from(id);
                if lookup.game_exists(id).await? {
                    Some(id)
                } else {
                    errors.add("game_id", fields::game_missing(id));
                    None
                }
            }
            None => None,
        };

        let game = GameCreate::collect(raw, lookup, &mut errors).await?;

        match (game_id, game) {
            (Some(game_id), Some(game)) if errors.is_empty() => Ok(Self { game_id, game }),
            _ => Err(DomainError::InvalidForm(errors)),
        }
    }
}

async fn registered<L>(
    lookup: &L,
    errors: &mut FormErrors,
    field: &str,
    aga_id: i32,
) -> Result<Option<i32>, DomainError>
where
    L: LeagueLookup + ?Sized,
{
    if lookup.aga_id_registered(aga_id).await? {
        Ok(Some(aga_id))
    } else {
        errors.add(field, fields::aga_id_unknown(aga_id));
        Ok(None)
    }
}
