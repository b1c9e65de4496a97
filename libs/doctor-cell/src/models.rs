use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use shared_models::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// A bookable clock-time window, parsed once at construction from the
/// `"HH:MM AM - HH:MM PM"` form. Malformed ranges are rejected here, never
/// silently misparsed at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let (start_raw, end_raw) = input.split_once('-').ok_or_else(|| invalid_slot(input))?;

        let start = NaiveTime::parse_from_str(start_raw.trim(), "%I:%M %p")
            .map_err(|_| invalid_slot(input))?;
        let end = NaiveTime::parse_from_str(end_raw.trim(), "%I:%M %p")
            .map_err(|_| invalid_slot(input))?;

        if start > end {
            return Err(AppError::Validation(format!(
                "Invalid time slot '{}': start is after end",
                input.trim()
            )));
        }

        Ok(Self { start, end })
    }

    /// Both boundaries are bookable.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

fn invalid_slot(input: &str) -> AppError {
    AppError::Validation(format!(
        "Invalid time slot '{}': expected \"HH:MM AM - HH:MM PM\"",
        input.trim()
    ))
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%I:%M %p"),
            self.end.format("%I:%M %p")
        )
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeSlot::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursEntry {
    pub day: DayOfWeek,
    #[serde(alias = "timeSlot")]
    pub time_slot: TimeSlot,
}

/// Declared availability: an ordered list of day/slot pairs. This value
/// object never rejects input; the duplicate-pair invariant lives in
/// `DoctorService`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingHours {
    entries: Vec<WorkingHoursEntry>,
}

impl WorkingHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hours(&mut self, day: DayOfWeek, time_slot: TimeSlot) {
        self.entries.push(WorkingHoursEntry { day, time_slot });
    }

    /// Drops entries matching both fields exactly.
    pub fn remove_hours(&mut self, day: DayOfWeek, time_slot: &TimeSlot) {
        self.entries
            .retain(|entry| !(entry.day == day && entry.time_slot == *time_slot));
    }

    pub fn contains(&self, day: DayOfWeek, time_slot: &TimeSlot) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.day == day && entry.time_slot == *time_slot)
    }

    /// Whether any window for `day` covers `time`, boundaries included.
    pub fn covers(&self, day: DayOfWeek, time: NaiveTime) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.day == day && entry.time_slot.contains(time))
    }

    pub fn entries(&self) -> &[WorkingHoursEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    /// License number; carried on the profile but never used for identity.
    pub rcm: String,
    pub specialties: Vec<String>,
    pub phone_number: String,
    pub working_hours: WorkingHours,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub rcm: String,
    #[serde(alias = "phoneNumber")]
    pub phone_number: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub rcm: Option<String>,
    #[serde(alias = "phoneNumber")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursRequest {
    pub day: DayOfWeek,
    /// Kept as a raw string so the service can reject malformed ranges
    /// with a descriptive validation error.
    #[serde(alias = "timeSlot")]
    pub time_slot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyRequest {
    pub specialty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityCheckRequest {
    pub date: String,
}
