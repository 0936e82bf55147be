pub mod analytics;
pub mod error;
pub mod filter;
pub mod generator;
pub mod pipeline;
pub mod store;
pub mod view;
pub mod weather;

pub use analytics::{detect_conflicts, summarize, ConflictPair, ItinerarySummary};
pub use error::ItineraryError;
pub use filter::{filter_events, EventFilter};
pub use generator::EventGenerator;
pub use pipeline::{
    update_event, ConflictKind, ConflictWarning, ItineraryState, UpdateEventCommand,
    UpdateOptions, UpdateOutcome,
};
pub use store::{MemoryStore, StoreError, VacationStore};
pub use view::{bin_events, date_axis, display_order, shift_reference, CalendarView};
pub use weather::{SeasonalForecast, WeatherProvider};
