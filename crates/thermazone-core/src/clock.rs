//! Facility-local time conversion.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};
use tracing::warn;

const OFFSET_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

/// Converts raw UTC instants to the facility's local wall clock.
///
/// With no usable offset the clock degrades to the UTC wall clock, treating
/// the instant as already local. Conversion itself never fails a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacilityClock {
    offset: Option<UtcOffset>,
}

impl FacilityClock {
    /// Clock with a fixed facility offset.
    #[must_use]
    pub fn fixed(offset: UtcOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    /// Clock that leaves instants on their UTC wall clock.
    #[must_use]
    pub fn utc() -> Self {
        Self { offset: None }
    }

    /// Parse a facility offset such as `"+01:00"`.
    ///
    /// An unparseable value is not an error: the clock falls back to the UTC
    /// wall clock and the degradation is logged once, here.
    #[must_use]
    pub fn from_offset_name(name: &str) -> Self {
        match UtcOffset::parse(name, OFFSET_FORMAT) {
            Ok(offset) => Self::fixed(offset),
            Err(err) => {
                warn!("unusable facility offset {name:?} ({err}), treating instants as local");
                Self::utc()
            }
        }
    }

    /// The configured offset, if any.
    #[must_use]
    pub fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    /// Facility-local wall-clock time of an instant.
    #[must_use]
    pub fn localize(&self, at: OffsetDateTime) -> PrimitiveDateTime {
        let local = at.to_offset(self.offset.unwrap_or(UtcOffset::UTC));
        PrimitiveDateTime::new(local.date(), local.time())
    }
}
