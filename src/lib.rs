#![warn(clippy::pedantic)]

pub mod bar;
pub mod bar_kind;
pub mod config;
pub mod exercise;
pub mod exercise_set;
pub mod formatter;
pub mod gym;
pub mod gym_error;
pub mod loadout;
pub mod one_rep_max;
pub mod plate;
pub mod program;
pub mod progression;
pub mod units;
pub mod warmup;
pub mod week;
pub mod workout;
