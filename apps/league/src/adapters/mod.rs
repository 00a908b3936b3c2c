//! SeaORM adapters. Functions here speak entities and `DbErr`; the repos
//! layer maps both into domain types.

pub mod games_sea;
pub mod players_sea;
