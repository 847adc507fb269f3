//! A multiple-choice quiz served as a Telegram bot.
//!
//! [`quiz`] holds the answer state and scoring, [`view`] renders a session as
//! chat messages and [`session`] maps button presses onto state transitions.

pub mod config;
pub mod quiz;
pub mod session;
pub mod view;
