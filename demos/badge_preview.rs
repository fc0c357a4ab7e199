//! Badge Preview - from preset to resolved zones
//!
//! This example shows:
//! - Creating a template from a preset and editing it through mutations
//! - Assembling a data context from typed event/attendee facts
//! - Fitting the canvas into a viewport and rendering resolved zones
//! - Host-side QR encoding from a resolved symbol payload
//!
//! Run with: cargo run --example badge_preview -p template

use chrono::NaiveDate;
use image::Luma;
use qrcode::QrCode;
use template::context::{
    AttendeeFacts, EventFacts, LegalFacts, ProductFacts, ScheduleFacts, SecurityFacts, VenueFacts,
};
use template::{
    unresolved_required, EditorSession, Mutation, Preset, ResolvedContent, Template,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create output directory
    std::fs::create_dir_all("output")?;

    // ========================================
    // 1. Start from a preset and edit it
    // ========================================

    let mut editor = EditorSession::new(Template::from_preset(Preset::ConferenceBadge));

    editor.apply(Mutation::RenameTemplate {
        name: "RustConf speaker badge".to_string(),
    })?;
    editor.apply(Mutation::SetPlaceholder {
        id: "attendee-company".to_string(),
        placeholder: Some("Independent".to_string()),
    })?;

    // ========================================
    // 2. Assemble the data context
    // ========================================

    let start = NaiveDate::from_ymd_opt(2026, 6, 14)
        .ok_or("bad date")?
        .and_hms_opt(9, 0, 0)
        .ok_or("bad time")?;

    let ctx = template::DataContext::builder()
        .event(EventFacts {
            name: "RustConf 2026".to_string(),
            organizer: Some("Rust Foundation".to_string()),
            venue: Some(VenueFacts {
                name: "Palais des Congres".to_string(),
                address: Some("1001 Pl. Jean-Paul-Riopelle".to_string()),
                city: Some("Montreal".to_string()),
            }),
            schedule: Some(ScheduleFacts::from_datetimes(start, None)),
        })
        .attendee(
            AttendeeFacts::new("Ada", "Lovelace")
                .with_company("Analytical Engines")
                .with_role("Speaker"),
        )
        .product(ProductFacts::new("Speaker").with_entitlements(&["Lounge", "Dinner"]))
        .security(SecurityFacts::new("CHK-00132"))
        .legal(LegalFacts {
            terms: "Badge must be worn at all times.".to_string(),
            issuer: None,
        })
        .build();

    // ========================================
    // 3. Fit the canvas and render
    // ========================================

    // An 840x1184 editor pane fits the A6 canvas exactly at factor 8
    let factor = {
        use layout_core::{Scale, Viewport};
        let scale = Scale::fit(Viewport::new(840.0, 1184.0), 105.0, 148.0)?;
        editor.set_scale(scale);
        scale.factor()
    };
    println!("viewport fit: {factor} px/mm");

    let zones = editor.resolved_zones(&ctx);
    for zone in &zones {
        println!(
            "{:<18} at ({:>6.1}, {:>6.1}) {:>6.1}x{:<6.1} {}",
            zone.zone_id,
            zone.pixel_box.x,
            zone.pixel_box.y,
            zone.pixel_box.width,
            zone.pixel_box.height,
            content_label(&zone.content),
        );
    }

    let missing = unresolved_required(editor.template(), &ctx);
    if missing.is_empty() {
        println!("all required zones resolved");
    } else {
        println!("unresolved required zones: {missing:?}");
    }

    // ========================================
    // 4. Encode the QR payload host-side
    // ========================================

    let payload = zones.iter().find_map(|zone| match &zone.content {
        ResolvedContent::Symbol { data } => Some(data.clone()),
        _ => None,
    });
    if let Some(payload) = payload {
        let code = QrCode::new(payload.as_bytes())?;
        let qr = code.render::<Luma<u8>>().min_dimensions(240, 240).build();
        qr.save("output/badge_qr.png")?;
        println!("wrote output/badge_qr.png ({payload})");
    }

    // ========================================
    // 5. Dump the resolved zones for inspection
    // ========================================

    std::fs::write(
        "output/badge_zones.json",
        serde_json::to_string_pretty(&zones)?,
    )?;
    println!("wrote output/badge_zones.json");

    Ok(())
}

fn content_label(content: &ResolvedContent) -> String {
    match content {
        ResolvedContent::Text { text } => format!("text \"{text}\""),
        ResolvedContent::Asset { url } => format!("asset {url}"),
        ResolvedContent::Symbol { data } => format!("symbol {data}"),
        ResolvedContent::Placeholder => "placeholder".to_string(),
        ResolvedContent::Empty => "-".to_string(),
    }
}
