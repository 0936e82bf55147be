use crate::analytics::windows_overlap;
use crate::error::ItineraryError;
use crate::generator::EventGenerator;
use crate::store::{StoreError, VacationStore};
use serde::{Deserialize, Serialize};
use trip::{
    parse_date, parse_time_of_day, Budget, Event, EventPriority, EventStatus, EventType,
    Reservation, Vacation,
};
use validator::Validate;

/// Local working copy of one vacation's itinerary.
///
/// Mutated only by the pipeline's optimistic apply and by full reloads;
/// the filter, view, and analytics modules are pure readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItineraryState {
    pub vacation: Option<Vacation>,
    pub events: Vec<Event>,
}

impl ItineraryState {
    /// Load the vacation and synthesize its event set.
    ///
    /// An absent vacation record degrades to an empty itinerary; other
    /// store failures propagate.
    pub async fn load<S: VacationStore + ?Sized>(
        store: &S,
        generator: &EventGenerator<'_>,
        vacation_id: &str,
    ) -> Result<Self, ItineraryError> {
        match store.get_vacation(vacation_id).await {
            Ok(vacation) => {
                let events = generator.generate(Some(&vacation));
                Ok(Self {
                    vacation: Some(vacation),
                    events,
                })
            }
            Err(StoreError::NotFound(id)) => {
                tracing::warn!(vacation_id = %id, "Vacation record absent; showing empty itinerary");
                Ok(Self::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Merge an event into the local collection: replace by id if present,
    /// append otherwise.
    pub fn apply_optimistic(&mut self, event: Event) {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    /// Discard local state and rebuild from the store. Used to reconcile
    /// after a failed remote write instead of field-level rollback.
    pub async fn reload<S: VacationStore + ?Sized>(
        &mut self,
        store: &S,
        generator: &EventGenerator<'_>,
        vacation_id: &str,
    ) -> Result<(), ItineraryError> {
        *self = Self::load(store, generator, vacation_id).await?;
        Ok(())
    }
}

/// A proposed event mutation, shaped like the edit form that produces it.
///
/// Dates and times arrive as strings and are parsed during validation;
/// enum fields fall back to the existing event's value when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEventCommand {
    #[validate(length(min = 1, message = "Vacation id is required"))]
    pub vacation_id: String,

    #[validate(length(min = 1, message = "Event id is required"))]
    pub event_id: String,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    /// ISO 8601 date, e.g. "2024-03-05".
    pub date: String,

    /// 24-hour "HH:MM".
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,

    pub event_type: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub park_id: Option<String>,
    #[serde(default)]
    pub attraction_id: Option<String>,

    #[validate(range(min = 0.0, message = "Budget estimate must be non-negative"))]
    #[serde(default)]
    pub budget_estimated: Option<f64>,
    #[validate(range(min = 0.0, message = "Actual spend must be non-negative"))]
    #[serde(default)]
    pub budget_actual: Option<f64>,
    #[serde(default)]
    pub budget_currency: Option<String>,
    #[serde(default)]
    pub budget_category: Option<String>,

    #[serde(default)]
    pub reservation_name: Option<String>,
    #[serde(default)]
    pub reservation_time: Option<String>,
    #[validate(range(min = 1, message = "Reservation party size must be at least 1"))]
    #[serde(default)]
    pub reservation_party_size: Option<u32>,
    #[serde(default)]
    pub reservation_confirmation: Option<String>,
    #[validate(range(min = 0.0, message = "Reservation cost must be non-negative"))]
    #[serde(default)]
    pub reservation_cost: Option<f64>,
}

/// Caller switches for the skippable pipeline stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    pub skip_conflict_check: bool,
    pub skip_optimistic_apply: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    TimeOverlap,
    DuplicateDining,
}

/// Advisory conflict surfaced alongside a successful update. Conflicts
/// never block the write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    pub kind: ConflictKind,
    pub other_event_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The event as acknowledged by the store.
    pub event: Event,
    pub warnings: Vec<ConflictWarning>,
}

/// Run the update pipeline for one proposed mutation:
/// validate, conflict-check, optimistically apply, persist, reconcile.
///
/// Validation failures abort before any state change. Persist failures
/// reload the local state from the store (dropping the optimistic merge)
/// and surface the store error; no automatic retry.
pub async fn update_event<S: VacationStore + ?Sized>(
    state: &mut ItineraryState,
    store: &S,
    generator: &EventGenerator<'_>,
    cmd: &UpdateEventCommand,
    options: UpdateOptions,
) -> Result<UpdateOutcome, ItineraryError> {
    tracing::debug!(event_id = %cmd.event_id, "Validating event update");
    let existing = state
        .events
        .iter()
        .find(|event| event.id == cmd.event_id)
        .cloned();
    let candidate = build_event(cmd, state.vacation.as_ref(), existing.as_ref())?;

    let warnings = if options.skip_conflict_check {
        Vec::new()
    } else {
        let warnings = check_conflicts(&candidate, &state.events);
        for warning in &warnings {
            tracing::warn!(
                event_id = %candidate.id,
                other_event_id = %warning.other_event_id,
                "Schedule conflict: {}",
                warning.message
            );
        }
        warnings
    };

    if !options.skip_optimistic_apply {
        tracing::debug!(event_id = %candidate.id, "Applying optimistic local update");
        state.apply_optimistic(candidate.clone());
    }

    match store
        .update_event(&cmd.vacation_id, &cmd.event_id, candidate.clone())
        .await
    {
        Ok(saved) => {
            if !options.skip_optimistic_apply {
                // Replace the optimistic copy with the store's canonical one.
                state.apply_optimistic(saved.clone());
            }
            cascade_on_success(state, store, &cmd.vacation_id, &saved, options).await;
            tracing::debug!(event_id = %saved.id, "Event update settled");
            Ok(UpdateOutcome {
                event: saved,
                warnings,
            })
        }
        Err(error) => {
            tracing::error!(
                event_id = %candidate.id,
                code = error.code(),
                "Event persist failed; reloading local state"
            );
            if let Err(reload_error) = state.reload(store, generator, &cmd.vacation_id).await {
                tracing::error!("Reload after failed persist also failed: {}", reload_error);
            }
            Err(error.into())
        }
    }
}

/// Status-dependent follow-up, one level deep: completing a travel event
/// confirms any same-day resort check-in that is still planned. The
/// confirmed resort event triggers nothing further.
async fn cascade_on_success<S: VacationStore + ?Sized>(
    state: &mut ItineraryState,
    store: &S,
    vacation_id: &str,
    updated: &Event,
    options: UpdateOptions,
) {
    if updated.event_type != EventType::Travel || updated.status != EventStatus::Completed {
        return;
    }

    let targets: Vec<Event> = state
        .events
        .iter()
        .filter(|event| {
            event.event_type == EventType::Resort
                && event.date == updated.date
                && event.status == EventStatus::Planned
        })
        .cloned()
        .collect();

    for mut resort_event in targets {
        resort_event.status = EventStatus::Confirmed;
        tracing::info!(
            event_id = %resort_event.id,
            "Travel completed; auto-confirming same-day resort check-in"
        );
        match store
            .update_event(vacation_id, &resort_event.id, resort_event.clone())
            .await
        {
            Ok(saved) => {
                if !options.skip_optimistic_apply {
                    state.apply_optimistic(saved);
                }
            }
            Err(error) => {
                tracing::warn!(
                    event_id = %resort_event.id,
                    code = error.code(),
                    "Cascade confirmation failed: {}",
                    error
                );
            }
        }
    }
}

/// Validate the command and assemble the candidate event.
///
/// Returns the first failure as a single human-readable message. Derived
/// sub-records the form cannot express (weather, transportation,
/// checklist, crowd level, reminder) carry over from the existing event.
fn build_event(
    cmd: &UpdateEventCommand,
    vacation: Option<&Vacation>,
    existing: Option<&Event>,
) -> Result<Event, ItineraryError> {
    cmd.validate()
        .map_err(|errors| ItineraryError::Validation(first_validation_message(&errors)))?;

    let date =
        parse_date(&cmd.date).map_err(|error| ItineraryError::Validation(error.to_string()))?;
    if let Some(vacation) = vacation {
        if !vacation.contains(date) {
            return Err(ItineraryError::Validation(format!(
                "Date {} is outside the vacation ({} to {})",
                date, vacation.start_date, vacation.end_date
            )));
        }
    }

    let start_time = cmd
        .start_time
        .as_deref()
        .map(parse_time_of_day)
        .transpose()
        .map_err(|error| ItineraryError::Validation(error.to_string()))?;
    let end_time = cmd
        .end_time
        .as_deref()
        .map(parse_time_of_day)
        .transpose()
        .map_err(|error| ItineraryError::Validation(error.to_string()))?;

    let event_type = EventType::parse(&cmd.event_type).ok_or_else(|| {
        ItineraryError::Validation(format!("Unknown event type: '{}'", cmd.event_type))
    })?;

    let priority = match cmd.priority.as_deref() {
        Some(raw) => EventPriority::parse(raw).ok_or_else(|| {
            ItineraryError::Validation(format!("Unknown priority: '{}'", raw))
        })?,
        None => existing.map_or(EventPriority::Medium, |event| event.priority),
    };
    let status = match cmd.status.as_deref() {
        Some(raw) => EventStatus::parse(raw).ok_or_else(|| {
            ItineraryError::Validation(format!("Unknown status: '{}'", raw))
        })?,
        None => existing.map_or(EventStatus::Planned, |event| event.status),
    };

    let reservation = match &cmd.reservation_name {
        Some(name) => Some(Reservation {
            name: name.clone(),
            time: cmd
                .reservation_time
                .as_deref()
                .map(parse_time_of_day)
                .transpose()
                .map_err(|error| ItineraryError::Validation(error.to_string()))?,
            party_size: cmd.reservation_party_size.unwrap_or(1),
            confirmation: cmd.reservation_confirmation.clone(),
            cost: cmd.reservation_cost,
        }),
        None => None,
    };

    let budget = cmd.budget_estimated.map(|estimated| Budget {
        estimated,
        actual: cmd.budget_actual,
        currency: cmd
            .budget_currency
            .clone()
            .unwrap_or_else(|| "USD".to_string()),
        category: cmd.budget_category.clone(),
    });

    let event = Event {
        id: cmd.event_id.clone(),
        title: cmd.title.clone(),
        date,
        start_time,
        end_time,
        event_type,
        priority,
        status,
        notes: cmd.notes.clone(),
        location: cmd.location.clone(),
        tags: cmd.tags.clone(),
        participants: cmd.participants.clone(),
        park_id: cmd.park_id.clone(),
        attraction_id: cmd.attraction_id.clone(),
        crowd_level: existing.and_then(|event| event.crowd_level),
        reservation,
        weather: existing.and_then(|event| event.weather.clone()),
        transportation: existing.and_then(|event| event.transportation.clone()),
        budget,
        checklist: existing.map(|event| event.checklist.clone()).unwrap_or_default(),
        reminder: existing.and_then(|event| event.reminder.clone()),
    };
    event
        .check_time_window()
        .map_err(|error| ItineraryError::Validation(error.to_string()))?;
    Ok(event)
}

/// Advisory same-day scan: timed-window overlap, plus duplicate dining
/// reservations at the same restaurant.
fn check_conflicts(candidate: &Event, events: &[Event]) -> Vec<ConflictWarning> {
    let mut warnings = Vec::new();

    for other in events {
        if other.id == candidate.id || other.date != candidate.date {
            continue;
        }

        if let (Some(window), Some(other_window)) = (candidate.time_window(), other.time_window()) {
            if windows_overlap(window, other_window) {
                warnings.push(ConflictWarning {
                    kind: ConflictKind::TimeOverlap,
                    other_event_id: other.id.clone(),
                    message: format!("Overlaps '{}' on {}", other.title, candidate.date),
                });
            }
        }

        if candidate.event_type == EventType::Dining && other.event_type == EventType::Dining {
            if let (Some(reservation), Some(other_reservation)) =
                (&candidate.reservation, &other.reservation)
            {
                if reservation.name.eq_ignore_ascii_case(&other_reservation.name) {
                    warnings.push(ConflictWarning {
                        kind: ConflictKind::DuplicateDining,
                        other_event_id: other.id.clone(),
                        message: format!(
                            "Duplicate reservation at '{}' on {}",
                            reservation.name, candidate.date
                        ),
                    });
                }
            }
        }
    }
    warnings
}

fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}
