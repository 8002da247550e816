pub mod geometry;
pub mod pin_logic;
