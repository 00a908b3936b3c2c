//! DTOs for players_sea adapter.

/// DTO for inserting a player.
#[derive(Debug, Clone)]
pub struct PlayerInsert {
    pub first_name: String,
    pub last_name: String,
    pub aga_id: i32,
    pub aga_rank: i32,
}

impl PlayerInsert {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        aga_id: i32,
        aga_rank: i32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            aga_id,
            aga_rank,
        }
    }
}
