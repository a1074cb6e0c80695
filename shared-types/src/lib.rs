use serde::{Deserialize, Serialize};

/// Render order of the public schedule grid.
pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// First and last bookable hour of the day (inclusive).
pub const OPEN_HOURS: std::ops::RangeInclusive<u8> = 7..=23;

/// Volunteers per slot.
pub const CAPACITY: u32 = 4;

/// Attendees a single signup may cover.
pub const MAX_PARTY: u32 = 4;

/// Business rules for availability: Saturday is closed, Friday ends at
/// 4 pm, Sunday runs 9 am to 5 pm. Every other day is open for all of
/// [`OPEN_HOURS`].
pub fn hour_available(day: &str, hour: u8) -> bool {
    if !OPEN_HOURS.contains(&hour) {
        return false;
    }
    match day {
        "Saturday" => false,
        "Friday" => (7..=16).contains(&hour),
        "Sunday" => (9..=17).contains(&hour),
        _ => true,
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SignupEntry {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SlotInfo {
    pub day: String,
    pub hour: u8,
    pub available: bool,
    pub remaining: u32,
    pub entries: Vec<SignupEntry>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DaySchedule {
    pub day: String,
    pub slots: Vec<SlotInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeekSchedule {
    pub days: Vec<DaySchedule>,
}

/// One attendee's name fields as entered in the signup form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttendeeName {
    pub first: String,
    pub last: String,
}

impl AttendeeName {
    /// Combined display name, empty when both fields are blank.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first.trim(), self.last.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewSignup {
    pub day: String,
    pub hour: u8,
    pub attendees: Vec<AttendeeName>,
}

/// A flat signup row as stored by the backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SignupRow {
    pub id: i32,
    pub day: String,
    pub hour: u8,
    pub name: String,
}

/// Assembles the full week grid from flat signup rows. Remaining capacity
/// is `CAPACITY - occupied` for available slots and 0 otherwise, floored
/// at 0 so over-subscribed slots never go negative.
pub fn build_week(rows: &[SignupRow]) -> WeekSchedule {
    let days = DAYS
        .iter()
        .map(|&day| {
            let slots = OPEN_HOURS
                .map(|hour| {
                    let entries: Vec<SignupEntry> = rows
                        .iter()
                        .filter(|r| r.day == day && r.hour == hour)
                        .map(|r| SignupEntry {
                            id: r.id,
                            name: r.name.clone(),
                        })
                        .collect();
                    let available = hour_available(day, hour);
                    let cap = if available { CAPACITY } else { 0 };
                    let remaining = cap.saturating_sub(entries.len() as u32);
                    SlotInfo {
                        day: day.to_string(),
                        hour,
                        available,
                        remaining,
                        entries,
                    }
                })
                .collect();
            DaySchedule {
                day: day.to_string(),
                slots,
            }
        })
        .collect();
    WeekSchedule { days }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, day: &str, hour: u8) -> SignupRow {
        SignupRow {
            id,
            day: day.to_string(),
            hour,
            name: format!("Volunteer {id}"),
        }
    }

    #[test]
    fn saturday_is_always_closed() {
        for hour in OPEN_HOURS {
            assert!(!hour_available("Saturday", hour));
        }
    }

    #[test]
    fn friday_closes_at_four_pm() {
        assert!(hour_available("Friday", 16));
        assert!(!hour_available("Friday", 17));
    }

    #[test]
    fn sunday_opens_late_and_closes_early() {
        assert!(!hour_available("Sunday", 8));
        assert!(hour_available("Sunday", 9));
        assert!(hour_available("Sunday", 17));
        assert!(!hour_available("Sunday", 18));
    }

    #[test]
    fn weekdays_are_open_for_all_open_hours() {
        for day in ["Monday", "Tuesday", "Wednesday", "Thursday"] {
            for hour in OPEN_HOURS {
                assert!(hour_available(day, hour), "{day} {hour}");
            }
        }
    }

    #[test]
    fn hours_outside_schedule_are_never_available() {
        assert!(!hour_available("Monday", 6));
        assert!(!hour_available("Monday", 24));
        assert!(!hour_available("Monday", 0));
    }

    #[test]
    fn build_week_covers_every_day_and_hour() {
        let week = build_week(&[]);
        assert_eq!(week.days.len(), DAYS.len());
        for (schedule, day) in week.days.iter().zip(DAYS) {
            assert_eq!(schedule.day, day);
            assert_eq!(schedule.slots.len(), OPEN_HOURS.count());
        }
    }

    #[test]
    fn remaining_reflects_occupancy() {
        let rows = vec![row(1, "Monday", 9), row(2, "Monday", 9)];
        let week = build_week(&rows);
        let slot = &week.days[0].slots[2];
        assert_eq!(slot.hour, 9);
        assert_eq!(slot.remaining, CAPACITY - 2);
        assert_eq!(slot.entries.len(), 2);
    }

    #[test]
    fn unavailable_slots_have_zero_remaining() {
        let week = build_week(&[]);
        let saturday = week.days.iter().find(|d| d.day == "Saturday").unwrap();
        assert!(saturday.slots.iter().all(|s| !s.available && s.remaining == 0));
    }

    #[test]
    fn remaining_never_goes_negative() {
        let rows: Vec<SignupRow> = (0..6).map(|i| row(i, "Tuesday", 10)).collect();
        let week = build_week(&rows);
        let slot = week.days[1].slots.iter().find(|s| s.hour == 10).unwrap();
        assert_eq!(slot.remaining, 0);
        assert_eq!(slot.entries.len(), 6);
    }

    #[test]
    fn full_name_trims_and_joins() {
        let attendee = AttendeeName {
            first: "  Ada ".to_string(),
            last: " Lovelace ".to_string(),
        };
        assert_eq!(attendee.full_name(), "Ada Lovelace");
        let blank = AttendeeName {
            first: "  ".to_string(),
            last: String::new(),
        };
        assert_eq!(blank.full_name(), "");
    }
}
