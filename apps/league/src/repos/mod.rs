//! Repository functions: domain records over any SeaORM connection.

pub mod games;
pub mod players;
