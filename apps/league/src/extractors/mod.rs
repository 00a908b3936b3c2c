pub mod form_body;
pub mod player_id;

pub use form_body::FormBody;
pub use player_id::PlayerId;
