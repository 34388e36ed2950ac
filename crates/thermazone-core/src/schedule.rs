//! Per-zone setpoint schedules.
//!
//! Every real zone owns exactly one [`ScheduleRule`]: a weekday day window
//! with a day setpoint, an off-hours setpoint for the rest of the weekday,
//! and a fixed weekend setpoint. The rule table is configuration data, not
//! control flow: the built-in table carries the reference building's
//! heating policy and can be overridden per zone.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thermazone_types::{Zone, timefmt};
use time::macros::time;
use time::{PrimitiveDateTime, Time, Weekday};

/// Schedule rule for one zone.
///
/// `day_start`/`day_end` bound the weekday day window as a half-open
/// interval: the start minute is inside the window, the end minute is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRule {
    /// Start of the weekday day window (inclusive).
    #[serde(with = "timefmt::hhmm")]
    pub day_start: Time,
    /// End of the weekday day window (exclusive).
    #[serde(with = "timefmt::hhmm")]
    pub day_end: Time,
    /// Setpoint inside the day window, °C.
    pub day: f64,
    /// Setpoint outside the day window on weekdays, °C.
    pub off_hours: f64,
    /// Fixed setpoint on Saturday and Sunday, °C.
    pub weekend: f64,
}

fn minutes_since_midnight(t: Time) -> u16 {
    u16::from(t.hour()) * 60 + u16::from(t.minute())
}

impl ScheduleRule {
    /// Create a rule from its quintuple.
    #[must_use]
    pub fn new(day_start: Time, day_end: Time, day: f64, off_hours: f64, weekend: f64) -> Self {
        Self {
            day_start,
            day_end,
            day,
            off_hours,
            weekend,
        }
    }

    /// Target temperature at a facility-local timestamp.
    #[must_use]
    pub fn setpoint_at(&self, at: PrimitiveDateTime) -> f64 {
        if matches!(at.weekday(), Weekday::Saturday | Weekday::Sunday) {
            return self.weekend;
        }
        let minutes = minutes_since_midnight(at.time());
        let in_day_window = minutes_since_midnight(self.day_start) <= minutes
            && minutes < minutes_since_midnight(self.day_end);
        if in_day_window { self.day } else { self.off_hours }
    }
}

/// Built-in rule table. Policy data for the reference building; every real
/// zone has exactly one rule, the sentinel has none.
fn default_rule(zone: Zone) -> Option<ScheduleRule> {
    let rule = match zone {
        Zone::Classrooms | Zone::Administrative => {
            ScheduleRule::new(time!(5:30), time!(17:00), 19.0, 17.0, 16.0)
        }
        Zone::Corridors => ScheduleRule::new(time!(6:00), time!(17:00), 17.0, 16.0, 15.0),
        Zone::AncillaryRooms => ScheduleRule::new(time!(8:00), time!(17:00), 17.0, 16.0, 15.0),
        Zone::Cafeteria => ScheduleRule::new(time!(6:00), time!(17:00), 21.0, 18.0, 17.0),
        Zone::MultipurposeHall | Zone::Kitchen | Zone::ElectricRadiators => {
            ScheduleRule::new(time!(6:00), time!(17:00), 19.0, 17.0, 15.0)
        }
        Zone::Unknown => return None,
    };
    Some(rule)
}

/// The per-zone schedule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    rules: HashMap<Zone, ScheduleRule>,
}

impl Default for Schedule {
    fn default() -> Self {
        let rules = Zone::ALL
            .into_iter()
            .filter_map(|zone| default_rule(zone).map(|rule| (zone, rule)))
            .collect();
        Self { rules }
    }
}

impl Schedule {
    /// Schedule with no rules at all; every lookup yields `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// The rule for a zone, if it has one.
    #[must_use]
    pub fn rule(&self, zone: Zone) -> Option<&ScheduleRule> {
        self.rules.get(&zone)
    }

    /// Install or replace the rule for a zone.
    pub fn set_rule(&mut self, zone: Zone, rule: ScheduleRule) {
        self.rules.insert(zone, rule);
    }

    /// Iterate over all configured rules, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &ScheduleRule)> {
        self.rules.iter().map(|(zone, rule)| (*zone, rule))
    }

    /// Target temperature for a zone at a facility-local timestamp.
    ///
    /// Returns `None` for [`Zone::Unknown`] or any zone without a rule; a
    /// missing setpoint propagates as an undefined value, never an error.
    #[must_use]
    pub fn setpoint(&self, zone: Zone, at: PrimitiveDateTime) -> Option<f64> {
        self.rules.get(&zone).map(|rule| rule.setpoint_at(at))
    }
}
