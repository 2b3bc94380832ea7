//! Inventory domain module: the Gilded Rose daily quality update.
//!
//! This crate contains business rules for inventory, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod item;
pub mod rules;
pub mod simulation;
pub mod updater;

pub use catalog::{catalog_from_json, standard_catalog};
pub use item::Item;
pub use rules::{
    AGED_BRIE, BACKSTAGE_PASSES, Category, MAX_QUALITY, MIN_QUALITY, SULFURAS, clamped_decrease,
    clamped_increase,
};
pub use simulation::{DayReport, SimulationConfig, simulate};
pub use updater::DailyUpdater;
