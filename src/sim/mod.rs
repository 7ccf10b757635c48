mod turn;

pub use turn::roll_dice;
