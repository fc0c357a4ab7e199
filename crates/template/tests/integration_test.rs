//! Integration tests for the template pipeline

use layout_core::{PixelDelta, Scale, Viewport};
use serde_json::json;
use template::{
    parse_template, render_template, unresolved_required, Content, DataContext, EditorSession,
    Mutation, Preset, RenderMode, ResolvedContent, Template, ZoneKind,
};

fn speaker_badge_json() -> &'static str {
    r##"{
        "id": "speaker-badge",
        "name": "Speaker Badge",
        "width": 105.0,
        "height": 148.0,
        "background": { "type": "solid", "color": "#ffffff" },
        "zones": [
            {
                "id": "greeting",
                "kind": "text",
                "position": { "x": 10.0, "y": 20.0, "width": 85.0, "height": 10.0 },
                "content": { "type": "literal", "text": "Hello {{attendee.firstName}}!" }
            },
            {
                "id": "company",
                "kind": "text",
                "position": { "x": 10.0, "y": 34.0, "width": 85.0, "height": 8.0 },
                "content": { "type": "variable", "path": "attendee.company" },
                "placeholder": "N/A"
            },
            {
                "id": "qr",
                "kind": "qr",
                "position": { "x": 35.0, "y": 95.0, "width": 35.0, "height": 35.0 },
                "content": { "type": "variable", "path": "security.code" },
                "locked": true,
                "required": true
            }
        ]
    }"##
}

#[test]
fn test_parse_render_full_badge() {
    let template = parse_template(speaker_badge_json()).unwrap();
    let ctx = DataContext::from_value(json!({
        "attendee": { "firstName": "Ada", "company": "Analytical Engines" },
        "security": { "code": "CHK-00132" }
    }));
    let scale = Scale::fit(Viewport::new(840.0, 1184.0), template.width, template.height).unwrap();
    let zones = render_template(&template, &ctx, &scale, RenderMode::Preview);

    assert_eq!(zones.len(), 3);
    assert_eq!(
        zones[0].content,
        ResolvedContent::Text {
            text: "Hello Ada!".to_string()
        }
    );
    assert_eq!(
        zones[1].content,
        ResolvedContent::Text {
            text: "Analytical Engines".to_string()
        }
    );
    assert_eq!(
        zones[2].content,
        ResolvedContent::Symbol {
            data: "CHK-00132".to_string()
        }
    );

    // 840 / 105 = 8, 1184 / 148 = 8: exact fit on both axes
    assert_eq!(scale.factor(), 8.0);
    assert_eq!(zones[0].pixel_box.x, 80.0);
    assert_eq!(zones[0].pixel_box.width, 680.0);
}

#[test]
fn test_missing_data_degrades_not_errors() {
    let template = parse_template(speaker_badge_json()).unwrap();
    let ctx = DataContext::empty();
    let scale = Scale::identity();
    let zones = render_template(&template, &ctx, &scale, RenderMode::Preview);

    // Unmatched token stays verbatim, placeholder covers the miss, the
    // empty QR payload degrades to a placeholder box
    assert_eq!(
        zones[0].content,
        ResolvedContent::Text {
            text: "Hello {{attendee.firstName}}!".to_string()
        }
    );
    assert_eq!(
        zones[1].content,
        ResolvedContent::Text {
            text: "N/A".to_string()
        }
    );
    assert_eq!(zones[2].content, ResolvedContent::Placeholder);

    assert_eq!(unresolved_required(&template, &ctx), vec!["qr"]);
}

#[test]
fn test_editor_session_drag_and_save() {
    let template = parse_template(speaker_badge_json()).unwrap();
    let mut session = EditorSession::new(template);
    session.set_scale(Scale::new(2.0).unwrap());

    // Drag toward the far corner; the zone stops at the canvas edge
    session
        .apply(Mutation::DragZone {
            id: "greeting".to_string(),
            delta: PixelDelta::new(500.0, 500.0),
        })
        .unwrap();
    let zone = session.template().zone("greeting").unwrap();
    assert_eq!(zone.position.x, 20.0);
    assert_eq!(zone.position.y, 138.0);

    // Typed edit is trusted even out of bounds
    session
        .apply(Mutation::MoveZone {
            id: "greeting".to_string(),
            x: -4.0,
            y: 150.0,
        })
        .unwrap();
    let zone = session.template().zone("greeting").unwrap();
    assert_eq!(zone.position.x, -4.0);

    // Save round-trip preserves the edited structure
    let json = session.template().to_json().unwrap();
    let reparsed = parse_template(&json).unwrap();
    assert_eq!(session.template(), &reparsed);
}

#[test]
fn test_preset_batch_render() {
    let badge = Template::from_preset(Preset::ConferenceBadge);
    let scale = Scale::fit(Viewport::new(420.0, 592.0), badge.width, badge.height).unwrap();

    let attendees = [
        ("Ada", "Lovelace", "Analytical Engines"),
        ("Grace", "Hopper", "US Navy"),
        ("Hedy", "Lamarr", "Frequency Hopping LLC"),
    ];

    for (first, last, company) in attendees {
        let ctx = DataContext::from_value(json!({
            "event": { "name": "RustConf 2026" },
            "attendee": {
                "firstName": first,
                "lastName": last,
                "fullName": format!("{first} {last}"),
                "company": company
            },
            "product": { "type": "Speaker" },
            "security": { "code": format!("CHK-{first}") },
            "legal": { "terms": "Non-transferable." }
        }));
        let zones = render_template(&badge, &ctx, &scale, RenderMode::Preview);
        let name = zones.iter().find(|z| z.zone_id == "attendee-name").unwrap();
        assert_eq!(
            name.content,
            ResolvedContent::Text {
                text: format!("{first} {last}")
            }
        );
        // Geometry and style stay identical across the batch
        assert_eq!(name.pixel_box.x, 40.0);
        assert_eq!(name.pixel_box.width, 340.0);
        assert!(unresolved_required(&badge, &ctx).is_empty());
    }
}

#[test]
fn test_mutation_protocol_from_json() {
    let mut session = EditorSession::new(Template::from_preset(Preset::TableCard));

    let ops = [
        r#"{ "op": "renameTemplate", "name": "Gala dinner card" }"#,
        r#"{ "op": "addZone", "id": "note", "kind": "text",
             "position": { "x": 5.0, "y": 6.0, "width": 40.0, "height": 6.0 },
             "content": { "type": "literal", "text": "Table {{seating.table}}" } }"#,
        r#"{ "op": "setZoneFlags", "id": "note", "locked": false, "required": true }"#,
    ];
    for op in ops {
        let mutation: Mutation = serde_json::from_str(op).unwrap();
        session.apply(mutation).unwrap();
    }

    assert_eq!(session.template().name, "Gala dinner card");
    let note = session.template().zone("note").unwrap();
    assert_eq!(note.kind, ZoneKind::Text);
    assert!(note.required);
    assert!(matches!(&note.content, Content::Literal { text } if text.contains("seating.table")));

    let ctx = DataContext::builder()
        .extra("seating", json!({ "table": 12 }))
        .build();
    let zones = session.resolved_zones(&ctx);
    let note = zones.iter().find(|z| z.zone_id == "note").unwrap();
    assert_eq!(
        note.content,
        ResolvedContent::Text {
            text: "Table 12".to_string()
        }
    );
}
