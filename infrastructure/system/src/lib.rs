pub mod clock;
pub mod cue_player;
pub mod delay;
pub mod order_id;
