use chrono::{Datelike, NaiveDate};
use trip::{WeatherCondition, WeatherSnapshot};

/// Collaborator supplying a day-level forecast for calendar annotation.
///
/// Returning `None` means no forecast is available for that date; the
/// generator simply leaves the day unannotated.
pub trait WeatherProvider: Send + Sync {
    fn forecast(&self, date: NaiveDate) -> Option<WeatherSnapshot>;
}

/// Deterministic forecast derived from the calendar position alone.
///
/// Stands in for a real weather service so generated itineraries are stable
/// across reloads (the reconciliation path depends on regeneration being
/// repeatable).
pub struct SeasonalForecast;

impl WeatherProvider for SeasonalForecast {
    fn forecast(&self, date: NaiveDate) -> Option<WeatherSnapshot> {
        // Rough central-Florida seasonal highs by month.
        let high_f = match date.month() {
            12 | 1 | 2 => 72,
            3 | 4 => 80,
            5 => 88,
            6 | 7 | 8 => 92,
            9 | 10 => 86,
            _ => 78,
        };

        let (condition, precipitation_chance) = match date.ordinal() % 5 {
            0 => (WeatherCondition::Sunny, 10),
            1 => (WeatherCondition::PartlyCloudy, 20),
            2 => (WeatherCondition::Cloudy, 35),
            3 => (WeatherCondition::Rain, 60),
            _ => (WeatherCondition::Thunderstorms, 75),
        };

        Some(WeatherSnapshot {
            condition,
            high_f,
            low_f: high_f - 15,
            precipitation_chance,
        })
    }
}
