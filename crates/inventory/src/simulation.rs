//! Multi-day runs over a catalog, reported in the fixture's text format.

use serde::Serialize;

use crate::item::Item;
use crate::updater::DailyUpdater;

/// Environment variable holding the number of days to simulate.
pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";

const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub days: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { days: DEFAULT_DAYS }
    }
}

impl SimulationConfig {
    /// Read the day count from `GILDED_ROSE_DAYS`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DAYS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().parse::<u32>()) {
            Some(Ok(days)) => Self { days },
            Some(Err(e)) => {
                tracing::warn!(error = %e, "{DAYS_ENV} is not a day count; using default");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

/// Snapshot of the whole inventory at the start of a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: u32,
    pub items: Vec<Item>,
}

impl core::fmt::Display for DayReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} --------", self.day)?;
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        writeln!(f)
    }
}

/// Run `config.days` daily updates, reporting each day's opening state.
pub fn simulate(items: &mut [Item], config: &SimulationConfig) -> Vec<DayReport> {
    let mut updater = DailyUpdater::new(items);
    let mut reports = Vec::with_capacity(config.days as usize);

    for day in 0..config.days {
        reports.push(DayReport {
            day,
            items: updater.items().to_vec(),
        });
        updater.advance_one_day();
        tracing::debug!(day, items = updater.items().len(), "advanced one day");
    }

    tracing::info!(days = config.days, "simulation finished");
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::AGED_BRIE;

    #[test]
    fn default_config_runs_two_days() {
        assert_eq!(SimulationConfig::default().days, 2);
    }

    #[test]
    fn env_value_parses_day_count() {
        assert_eq!(SimulationConfig::from_env_value(Some(" 31 ")).days, 31);
    }

    #[test]
    fn bad_or_missing_env_value_falls_back_to_default() {
        assert_eq!(SimulationConfig::from_env_value(None), SimulationConfig::default());
        assert_eq!(
            SimulationConfig::from_env_value(Some("a fortnight")),
            SimulationConfig::default()
        );
        assert_eq!(
            SimulationConfig::from_env_value(Some("-3")),
            SimulationConfig::default()
        );
    }

    #[test]
    fn reports_opening_state_of_each_day() {
        let mut items = vec![Item::new(AGED_BRIE, 1, 0)];
        let reports = simulate(&mut items, &SimulationConfig { days: 3 });

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].items, vec![Item::new(AGED_BRIE, 1, 0)]);
        assert_eq!(reports[1].items, vec![Item::new(AGED_BRIE, 0, 1)]);
        assert_eq!(reports[2].items, vec![Item::new(AGED_BRIE, -1, 2)]);
        assert_eq!(items, vec![Item::new(AGED_BRIE, -2, 4)]);
    }

    #[test]
    fn zero_days_leaves_items_untouched() {
        let mut items = vec![Item::new("foo", 1, 1)];
        let reports = simulate(&mut items, &SimulationConfig { days: 0 });
        assert!(reports.is_empty());
        assert_eq!(items, vec![Item::new("foo", 1, 1)]);
    }

    #[test]
    fn report_renders_fixture_block() {
        let report = DayReport {
            day: 4,
            items: vec![Item::new("foo", 1, 2), Item::new(AGED_BRIE, 0, 3)],
        };
        assert_eq!(
            report.to_string(),
            "-------- day 4 --------\nname, sellIn, quality\nfoo, 1, 2\nAged Brie, 0, 3\n\n"
        );
    }
}
