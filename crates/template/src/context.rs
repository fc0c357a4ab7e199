//! Data context assembly
//!
//! The resolver walks a read-only nested record. This module builds that
//! record from the console's typed facts, grouped under stable top-level
//! keys: `event`, `attendee`, `product`, `security`, `legal`. Freeform
//! groups can be added for anything the console wants to expose beyond
//! these.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// Read-only nested record the resolver traverses
///
/// Built once per render pass and shared across zones. Values are plain
/// JSON: records, strings, numbers, booleans.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContext {
    root: Value,
}

impl DataContext {
    /// Empty context; every lookup misses
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap an already-assembled nested record
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Start building a context from typed facts
    pub fn builder() -> DataContextBuilder {
        DataContextBuilder { root: Map::new() }
    }

    /// The underlying record
    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl Default for DataContext {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builder assembling a [`DataContext`] group by group
#[derive(Debug, Clone)]
pub struct DataContextBuilder {
    root: Map<String, Value>,
}

impl DataContextBuilder {
    fn group<T: Serialize>(mut self, key: &str, facts: T) -> Self {
        self.root.insert(
            key.to_string(),
            serde_json::to_value(facts).unwrap_or_default(),
        );
        self
    }

    /// Event facts under `event.*`
    pub fn event(self, facts: EventFacts) -> Self {
        self.group("event", facts)
    }

    /// Attendee facts under `attendee.*`
    pub fn attendee(self, facts: AttendeeFacts) -> Self {
        self.group("attendee", facts)
    }

    /// Product facts under `product.*`
    pub fn product(self, facts: ProductFacts) -> Self {
        self.group("product", facts)
    }

    /// Security facts under `security.*`
    pub fn security(self, facts: SecurityFacts) -> Self {
        self.group("security", facts)
    }

    /// Legal facts under `legal.*`
    pub fn legal(self, facts: LegalFacts) -> Self {
        self.group("legal", facts)
    }

    /// Freeform group under a caller-chosen key
    pub fn extra(mut self, key: &str, value: Value) -> Self {
        self.root.insert(key.to_string(), value);
        self
    }

    /// Finish building
    pub fn build(self) -> DataContext {
        DataContext {
            root: Value::Object(self.root),
        }
    }
}

/// Event-level facts
#[derive(Debug, Clone, Serialize, Default)]
pub struct EventFacts {
    /// Event display name
    pub name: String,

    /// Organizer display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,

    /// Venue record, resolvable as `event.venue.*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueFacts>,

    /// Schedule record, resolvable as `event.schedule.*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleFacts>,
}

/// Venue facts nested under the event
#[derive(Debug, Clone, Serialize, Default)]
pub struct VenueFacts {
    /// Venue display name
    pub name: String,

    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Pre-formatted schedule strings
///
/// Templates print these verbatim, so formatting happens once here rather
/// than in every zone.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ScheduleFacts {
    /// Human date, e.g. "June 14, 2026"
    pub date: String,

    /// ISO date, e.g. "2026-06-14"
    #[serde(rename = "isoDate")]
    pub iso_date: String,

    /// Start time, e.g. "18:00"
    #[serde(rename = "startTime")]
    pub start_time: String,

    /// End time
    #[serde(rename = "endTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Doors-open time
    #[serde(rename = "doorsOpen")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doors_open: Option<String>,
}

impl ScheduleFacts {
    /// Format a schedule from concrete datetimes
    pub fn from_datetimes(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self {
            date: start.format("%B %-d, %Y").to_string(),
            iso_date: start.format("%Y-%m-%d").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_time: end.map(|e| e.format("%H:%M").to_string()),
            doors_open: None,
        }
    }

    /// Builder-style doors-open setter
    pub fn with_doors_open(mut self, doors: NaiveDateTime) -> Self {
        self.doors_open = Some(doors.format("%H:%M").to_string());
        self
    }
}

/// Attendee-level facts
#[derive(Debug, Clone, Serialize, Default)]
pub struct AttendeeFacts {
    /// First name
    #[serde(rename = "firstName")]
    pub first_name: String,

    /// Last name
    #[serde(rename = "lastName")]
    pub last_name: String,

    /// Full display name
    #[serde(rename = "fullName")]
    pub full_name: String,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company or affiliation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Role label, e.g. "Speaker"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AttendeeFacts {
    /// Create attendee facts with a derived full name
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            full_name: format!("{first_name} {last_name}"),
            ..Self::default()
        }
    }

    /// Builder-style company setter
    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    /// Builder-style role setter
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }
}

/// Product and access facts
#[derive(Debug, Clone, Serialize, Default)]
pub struct ProductFacts {
    /// Badge or ticket type label, e.g. "VIP"
    #[serde(rename = "type")]
    pub kind: String,

    /// Seating record, resolvable as `product.seat.*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<SeatFacts>,

    /// Entitlements joined for display; the context carries no arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlements: Option<String>,
}

impl ProductFacts {
    /// Create product facts with just a type label
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Self::default()
        }
    }

    /// Join entitlement labels into the display string
    pub fn with_entitlements(mut self, items: &[&str]) -> Self {
        self.entitlements = Some(items.join(", "));
        self
    }
}

/// Seating facts nested under the product
#[derive(Debug, Clone, Serialize, Default)]
pub struct SeatFacts {
    /// Section label
    pub section: String,

    /// Row label
    pub row: String,

    /// Seat number
    pub number: String,
}

/// Security and validity facts
#[derive(Debug, Clone, Serialize, Default)]
pub struct SecurityFacts {
    /// Check-in code, the usual QR payload
    pub code: String,

    /// Public verification URL
    #[serde(rename = "verificationUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_url: Option<String>,

    /// Validity window start, e.g. "2026-06-14 17:00"
    #[serde(rename = "validFrom")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,

    /// Validity window end
    #[serde(rename = "validUntil")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

impl SecurityFacts {
    /// Create security facts with just a check-in code
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            ..Self::default()
        }
    }

    /// Format and attach a validity window
    pub fn with_window(mut self, from: NaiveDateTime, until: NaiveDateTime) -> Self {
        self.valid_from = Some(from.format("%Y-%m-%d %H:%M").to_string());
        self.valid_until = Some(until.format("%Y-%m-%d %H:%M").to_string());
        self
    }
}

/// Legal fine-print facts
#[derive(Debug, Clone, Serialize, Default)]
pub struct LegalFacts {
    /// Terms text printed in the fine-print zone
    pub terms: String,

    /// Issuing entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}
