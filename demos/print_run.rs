//! Print Run - plan and assemble a badge batch
//!
//! This example shows:
//! - Planning a print run from format defaults
//! - Assembling a batch job with one context per attendee
//! - Encoding a check-in QR through the symbol seam
//! - Consuming a job through the export seam
//!
//! Run with: cargo run --example print_run -p print

use image::Luma;
use layout_core::PixelRect;
use print::{
    build_job_batch, ExportAck, ExportBackend, PageFormat, PrintJob, PrintOptions, SymbolEncoder,
};
use qrcode::{EcLevel, QrCode};
use template::{DataContext, Preset, ResolvedContent, Template};

/// Writes a page manifest instead of driving a printer
struct ManifestBackend {
    path: String,
}

impl ExportBackend for ManifestBackend {
    fn export(&mut self, job: &PrintJob) -> print::Result<ExportAck> {
        let mut lines = vec![format!(
            "template {} / {} copies on {} pages",
            job.template_id, job.plan.copies, job.plan.page_count
        )];
        for page in 0..job.plan.page_count {
            let slots: Vec<String> = job
                .groups_for_page(page)
                .map(|g| format!("copy {}", g.copy_index))
                .collect();
            lines.push(format!("page {}: {}", page, slots.join(", ")));
        }
        std::fs::write(&self.path, lines.join("\n"))
            .map_err(|e| print::PrintError::ExportError(e.to_string()))?;
        Ok(ExportAck::Submitted {
            job_id: self.path.clone(),
        })
    }
}

/// Renders QR payloads as grayscale images sized for their zone box
struct PngQrEncoder;

impl SymbolEncoder for PngQrEncoder {
    type Output = image::GrayImage;

    fn encode(&self, data: &str, target: PixelRect) -> print::Result<Self::Output> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
            .map_err(|e| print::PrintError::EncodeError(e.to_string()))?;
        let side = target.width.min(target.height).round().max(1.0) as u32;
        Ok(code.render::<Luma<u8>>().min_dimensions(side, side).build())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create output directory
    std::fs::create_dir_all("output")?;

    let badge = Template::from_preset(Preset::ConferenceBadge);

    // ========================================
    // 1. Plan the run
    // ========================================

    let options = PrintOptions::new(PageFormat::A4, 30);
    let plan = print::plan(&badge, &options);
    println!(
        "{:?}: {} badges/page, {} pages, {} on the last, grid {}x{}",
        plan.format,
        plan.badges_per_page,
        plan.page_count,
        plan.last_page_count,
        plan.grid.columns,
        plan.grid.rows,
    );
    println!(
        "first slot origin: ({:.1}, {:.1}) mm",
        plan.per_copy_offsets[0].x, plan.per_copy_offsets[0].y
    );

    // ========================================
    // 2. Build a batch job, one badge per guest
    // ========================================

    let guests = [
        ("Ada", "Lovelace", "Analytical Engines"),
        ("Grace", "Hopper", "US Navy"),
        ("Hedy", "Lamarr", "Frequency Hopping LLC"),
        ("Katherine", "Johnson", "NASA"),
        ("Radia", "Perlman", "Spanning Tree Inc"),
    ];
    let contexts: Vec<DataContext> = guests
        .iter()
        .map(|(first, last, company)| {
            DataContext::builder()
                .attendee(
                    template::context::AttendeeFacts::new(first, last).with_company(company),
                )
                .security(template::context::SecurityFacts::new(&format!(
                    "CHK-{}",
                    last.to_uppercase()
                )))
                .build()
        })
        .collect();

    let job = build_job_batch(&badge, &contexts, &options)?;
    println!(
        "batch job: {} groups across {} pages",
        job.groups.len(),
        job.plan.page_count
    );

    // ========================================
    // 3. Encode the first badge's check-in QR
    // ========================================

    let first = &job.groups[0];
    let symbol = first.zones.iter().find_map(|zone| match &zone.content {
        ResolvedContent::Symbol { data } => Some((data.clone(), zone.pixel_box)),
        _ => None,
    });
    if let Some((data, target)) = symbol {
        let qr = PngQrEncoder.encode(&data, target)?;
        qr.save("output/checkin_qr.png")?;
        println!("encoded '{}' into output/checkin_qr.png", data);
    }

    // ========================================
    // 4. Hand the job to a backend
    // ========================================

    let mut backend = ManifestBackend {
        path: "output/print_manifest.txt".to_string(),
    };
    match backend.export(&job)? {
        ExportAck::Submitted { job_id } => println!("backend queued the run as {job_id}"),
        ExportAck::Artifact(bytes) => println!("backend returned {} bytes inline", bytes.len()),
    }

    Ok(())
}
