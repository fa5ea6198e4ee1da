pub mod home;
pub mod not_found;
mod path;
mod prediction;
mod simulation;
