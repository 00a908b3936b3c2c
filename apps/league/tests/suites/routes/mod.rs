pub mod csrf;
pub mod handler_players;
pub mod handler_reports;
