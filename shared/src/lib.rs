//! Renderer-free rules for the Plinko board: configuration, prize table,
//! body tags, the round lifecycle and the particle/glow models the client draws.

pub mod confetti;
pub mod config;
pub mod contact;
pub mod glow;
pub mod prize;
pub mod round;
