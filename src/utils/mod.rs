//! File naming helpers shared by the command-line stages.

pub mod paths;
