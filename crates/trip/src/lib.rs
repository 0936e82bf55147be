pub mod error;
pub mod event;
pub mod time;
pub mod types;
pub mod vacation;

pub use error::TripError;
pub use event::{
    Budget, ChecklistItem, Event, Reminder, ReminderChannel, Reservation, Transportation,
    WeatherSnapshot,
};
pub use time::{format_time_of_day, parse_date, parse_time_of_day};
pub use types::{CrowdLevel, EventPriority, EventStatus, EventType, TravelMode, WeatherCondition};
pub use vacation::{ParkDay, Vacation};
