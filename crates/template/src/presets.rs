//! Preset template factories
//!
//! Starting points for the editor's "new document" flow: a blank canvas or
//! one of the stock layouts. Presets are plain templates; once created
//! they are edited like any other.

use layout_core::Rect;
use serde::{Deserialize, Serialize};

use crate::schema::{Background, Content, GradientDirection, Template, Zone, ZoneKind};
use crate::style::{Align, Color, FontWeight, Style};
use crate::Result;

/// Stock template layouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// A6 portrait conference badge, 105 x 148 mm
    ConferenceBadge,

    /// Landscape event ticket with a tear-off stub, 210 x 99 mm
    EventTicket,

    /// Landscape table card, 85 x 54 mm
    TableCard,
}

impl Preset {
    /// All presets, in picker order
    pub fn all() -> [Preset; 3] {
        [
            Preset::ConferenceBadge,
            Preset::EventTicket,
            Preset::TableCard,
        ]
    }

    /// Display label for the picker
    pub fn label(&self) -> &'static str {
        match self {
            Preset::ConferenceBadge => "Conference badge (A6)",
            Preset::EventTicket => "Event ticket",
            Preset::TableCard => "Table card",
        }
    }
}

impl Template {
    /// Create an empty template with a white canvas
    pub fn blank(id: &str, name: &str, width: f64, height: f64) -> Result<Self> {
        let template = Template {
            id: id.to_string(),
            name: name.to_string(),
            width,
            height,
            background: Background::default(),
            zones: Vec::new(),
        };
        template.validate()?;
        Ok(template)
    }

    /// Create a template from a stock layout
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::ConferenceBadge => conference_badge(),
            Preset::EventTicket => event_ticket(),
            Preset::TableCard => table_card(),
        }
    }
}

fn text_style(size: f64, weight: FontWeight, align: Align) -> Style {
    Style {
        font_size: Some(size),
        font_weight: Some(weight),
        align: Some(align),
        ..Style::default()
    }
}

fn variable(path: &str) -> Content {
    Content::Variable {
        path: path.to_string(),
    }
}

fn conference_badge() -> Template {
    let header_blue = Color::rgb(26, 35, 126);
    Template {
        id: "conference-badge".to_string(),
        name: "Conference badge".to_string(),
        width: 105.0,
        height: 148.0,
        background: Background::default(),
        zones: vec![
            Zone::new("header", ZoneKind::Shape, Rect::new(0.0, 0.0, 105.0, 28.0))
                .with_name("Header band")
                .with_style(Style {
                    background: Some(header_blue),
                    ..Style::default()
                }),
            Zone::new("event-name", ZoneKind::Text, Rect::new(10.0, 8.0, 85.0, 12.0))
                .with_name("Event name")
                .with_content(variable("event.name"))
                .with_placeholder("Event")
                .with_style(Style {
                    foreground: Some(Color::white()),
                    ..text_style(6.0, FontWeight::Bold, Align::Center)
                }),
            Zone::new(
                "attendee-name",
                ZoneKind::Text,
                Rect::new(10.0, 44.0, 85.0, 16.0),
            )
            .with_name("Attendee name")
            .with_content(variable("attendee.fullName"))
            .with_placeholder("Attendee")
            .with_style(text_style(9.0, FontWeight::Bold, Align::Center))
            .required(),
            Zone::new(
                "attendee-company",
                ZoneKind::Text,
                Rect::new(10.0, 62.0, 85.0, 8.0),
            )
            .with_name("Company")
            .with_content(variable("attendee.company"))
            .with_style(text_style(4.5, FontWeight::Normal, Align::Center)),
            Zone::new(
                "product-type",
                ZoneKind::Text,
                Rect::new(30.0, 76.0, 45.0, 10.0),
            )
            .with_name("Badge type")
            .with_content(variable("product.type"))
            .with_placeholder("Attendee")
            .with_style(Style {
                background: Some(Color::light_gray()),
                border_radius: Some(2.0),
                ..text_style(5.0, FontWeight::Semibold, Align::Center)
            }),
            Zone::new("qr-checkin", ZoneKind::Qr, Rect::new(35.0, 92.0, 35.0, 35.0))
                .with_name("Check-in QR")
                .with_content(variable("security.code"))
                .locked(),
            Zone::new("legal", ZoneKind::Text, Rect::new(10.0, 136.0, 85.0, 8.0))
                .with_name("Fine print")
                .with_content(variable("legal.terms"))
                .with_style(text_style(2.5, FontWeight::Normal, Align::Center)),
        ],
    }
}

fn event_ticket() -> Template {
    Template {
        id: "event-ticket".to_string(),
        name: "Event ticket".to_string(),
        width: 210.0,
        height: 99.0,
        background: Background::Gradient {
            from: Color::white(),
            to: Color::rgb(232, 234, 246),
            direction: GradientDirection::ToRight,
        },
        zones: vec![
            Zone::new(
                "event-name",
                ZoneKind::Text,
                Rect::new(12.0, 10.0, 120.0, 14.0),
            )
            .with_name("Event name")
            .with_content(variable("event.name"))
            .with_placeholder("Event")
            .with_style(text_style(8.0, FontWeight::Bold, Align::Left))
            .required(),
            Zone::new("venue", ZoneKind::Text, Rect::new(12.0, 30.0, 120.0, 8.0))
                .with_name("Venue")
                .with_content(variable("event.venue.name"))
                .with_placeholder("Venue")
                .with_style(text_style(4.0, FontWeight::Normal, Align::Left)),
            Zone::new("date", ZoneKind::Text, Rect::new(12.0, 42.0, 60.0, 8.0))
                .with_name("Date")
                .with_content(variable("event.schedule.date"))
                .with_style(text_style(4.0, FontWeight::Semibold, Align::Left)),
            Zone::new(
                "start-time",
                ZoneKind::Text,
                Rect::new(76.0, 42.0, 40.0, 8.0),
            )
            .with_name("Doors")
            .with_content(variable("event.schedule.startTime"))
            .with_style(text_style(4.0, FontWeight::Semibold, Align::Left)),
            Zone::new(
                "ticket-type",
                ZoneKind::Text,
                Rect::new(12.0, 58.0, 80.0, 10.0),
            )
            .with_name("Ticket type")
            .with_content(variable("product.type"))
            .with_placeholder("General Admission")
            .with_style(text_style(5.0, FontWeight::Bold, Align::Left)),
            Zone::new("legal", ZoneKind::Text, Rect::new(12.0, 86.0, 130.0, 8.0))
                .with_name("Fine print")
                .with_content(variable("legal.terms"))
                .with_style(text_style(2.5, FontWeight::Normal, Align::Left)),
            Zone::new(
                "stub-divider",
                ZoneKind::Shape,
                Rect::new(158.0, 4.0, 0.5, 91.0),
            )
            .with_name("Stub divider")
            .locked(),
            Zone::new(
                "stub-code",
                ZoneKind::Barcode,
                Rect::new(166.0, 20.0, 36.0, 50.0),
            )
            .with_name("Stub barcode")
            .with_content(variable("security.code"))
            .locked(),
            Zone::new(
                "stub-date",
                ZoneKind::Text,
                Rect::new(166.0, 76.0, 36.0, 8.0),
            )
            .with_name("Stub date")
            .with_content(variable("event.schedule.isoDate"))
            .with_style(text_style(3.0, FontWeight::Normal, Align::Center)),
        ],
    }
}

fn table_card() -> Template {
    Template {
        id: "table-card".to_string(),
        name: "Table card".to_string(),
        width: 85.0,
        height: 54.0,
        background: Background::default(),
        zones: vec![
            Zone::new(
                "attendee-name",
                ZoneKind::Text,
                Rect::new(5.0, 18.0, 75.0, 14.0),
            )
            .with_name("Name")
            .with_content(variable("attendee.fullName"))
            .with_placeholder("Guest")
            .with_style(text_style(8.0, FontWeight::Bold, Align::Center))
            .required(),
            Zone::new(
                "attendee-company",
                ZoneKind::Text,
                Rect::new(5.0, 34.0, 75.0, 8.0),
            )
            .with_name("Company")
            .with_content(variable("attendee.company"))
            .with_style(text_style(4.0, FontWeight::Normal, Align::Center)),
            Zone::new("accent", ZoneKind::Shape, Rect::new(0.0, 48.0, 85.0, 6.0))
                .with_name("Accent band")
                .with_style(Style {
                    background: Some(Color::rgb(26, 35, 126)),
                    ..Style::default()
                }),
        ],
    }
}
