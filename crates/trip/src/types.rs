use serde::{Deserialize, Serialize};
use tracing;

/// Classification of a calendar event within a vacation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Park,
    Dining,
    Resort,
    Travel,
    Rest,
    /// A scheduled special event (fireworks, parade, party).
    #[serde(rename = "event")]
    Special,
    Note,
    Fastpass,
    Photo,
    Shopping,
    Entertainment,
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Park => "park",
            EventType::Dining => "dining",
            EventType::Resort => "resort",
            EventType::Travel => "travel",
            EventType::Rest => "rest",
            EventType::Special => "event",
            EventType::Note => "note",
            EventType::Fastpass => "fastpass",
            EventType::Photo => "photo",
            EventType::Shopping => "shopping",
            EventType::Entertainment => "entertainment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "park" => Some(EventType::Park),
            "dining" => Some(EventType::Dining),
            "resort" => Some(EventType::Resort),
            "travel" => Some(EventType::Travel),
            "rest" => Some(EventType::Rest),
            "event" => Some(EventType::Special),
            "note" => Some(EventType::Note),
            "fastpass" => Some(EventType::Fastpass),
            "photo" => Some(EventType::Photo),
            "shopping" => Some(EventType::Shopping),
            "entertainment" => Some(EventType::Entertainment),
            _ => {
                tracing::warn!("Failed to parse event type: '{}'", s);
                None
            }
        }
    }

    /// Display rank used when two same-day events tie on start time.
    ///
    /// Park days outrank everything else so they stay visible when a day's
    /// list is truncated by the caller.
    pub fn display_rank(&self) -> u8 {
        match self {
            EventType::Park => 0,
            EventType::Travel => 1,
            EventType::Dining => 2,
            EventType::Fastpass => 3,
            EventType::Entertainment => 4,
            EventType::Special => 5,
            EventType::Resort => 6,
            EventType::Photo => 7,
            EventType::Shopping => 8,
            EventType::Rest => 9,
            EventType::Note => 10,
        }
    }
}

/// Event priority enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl EventPriority {
    pub fn as_str(&self) -> &str {
        match self {
            EventPriority::Low => "low",
            EventPriority::Medium => "medium",
            EventPriority::High => "high",
            EventPriority::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(EventPriority::Low),
            "medium" => Some(EventPriority::Medium),
            "high" => Some(EventPriority::High),
            "critical" => Some(EventPriority::Critical),
            _ => {
                tracing::warn!("Failed to parse event priority: '{}'", s);
                None
            }
        }
    }
}

/// Event lifecycle status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Planned,
    Confirmed,
    Completed,
    Cancelled,
    Modified,
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Planned => "planned",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Modified => "modified",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(EventStatus::Planned),
            "confirmed" => Some(EventStatus::Confirmed),
            "completed" => Some(EventStatus::Completed),
            "cancelled" => Some(EventStatus::Cancelled),
            "modified" => Some(EventStatus::Modified),
            _ => {
                tracing::warn!("Failed to parse event status: '{}'", s);
                None
            }
        }
    }
}

/// Expected park crowd level for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "very_high")]
    VeryHigh,
}

impl CrowdLevel {
    pub fn as_str(&self) -> &str {
        match self {
            CrowdLevel::Low => "low",
            CrowdLevel::Moderate => "moderate",
            CrowdLevel::High => "high",
            CrowdLevel::VeryHigh => "very_high",
        }
    }
}

/// Transportation mode for travel events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Flight,
    Car,
    Bus,
    Train,
    Shuttle,
}

impl TravelMode {
    pub fn as_str(&self) -> &str {
        match self {
            TravelMode::Flight => "flight",
            TravelMode::Car => "car",
            TravelMode::Bus => "bus",
            TravelMode::Train => "train",
            TravelMode::Shuttle => "shuttle",
        }
    }
}

/// Weather condition attached to a day's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
    Thunderstorms,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::PartlyCloudy => "partly_cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Thunderstorms => "thunderstorms",
        }
    }
}
