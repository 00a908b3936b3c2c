//! Season/episode reports with raw per-player tallies.

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::db::txn::with_txn;
use crate::errors::domain::DomainError;
use crate::forms::{RawForm, ReportPeriod};
use crate::repos::games::{self, Game};
use crate::repos::players::{self, Player};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTally {
    pub player: Player,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// `None` when the report covers every game.
    pub period: Option<ReportPeriod>,
    pub games: Vec<Game>,
    pub players: Vec<PlayerTally>,
}

/// Count games, wins and losses per player over `games`. Every player is
/// listed, including those without games in the period.
pub fn tally(players: Vec<Player>, games: &[Game]) -> Vec<PlayerTally> {
    let mut by_id: BTreeMap<i64, (u32, u32)> = BTreeMap::new();
    for game in games {
        let winner = game.winner_id();
        for side in [game.white_id, game.black_id] {
            let entry = by_id.entry(side).or_default();
            if side == winner {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }
    }

    players
        .into_iter()
        .map(|player| {
            let (wins, losses) = by_id.get(&player.id).copied().unwrap_or_default();
            PlayerTally {
                player,
                games_played: wins + losses,
                wins,
                losses,
            }
        })
        .collect()
}

/// Build a report for the period named by `raw` (blank means everything).
pub async fn generate_report(db: &DatabaseConnection, raw: RawForm) -> Result<Report, DomainError> {
    let period = ReportPeriod::validate(&raw)?;

    with_txn(db, move |txn| {
        Box::pin(async move {
            let games = match period {
                Some(p) => games::list_for_period(txn, p.season, p.episode_filter()).await?,
                None => games::list_all(txn).await?,
            };
            let players = tally(players::list_all(txn).await?, &games);
            Ok(Report {
                period,
                games,
                players,
            })
        })
    })
    .await
}
