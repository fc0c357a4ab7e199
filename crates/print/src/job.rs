//! Print job assembly
//!
//! A job pairs a plan with the rendered zones for every badge copy, ready
//! for a host print bridge. Rendering happens at the raster density the
//! quality setting asks for, not at the editor's viewport scale.

use layout_core::{PixelRect, Scale};
use serde::Serialize;
use template::{render_template, DataContext, RenderMode, ResolvedZone, Template};

use crate::plan::{plan, PrintOptions, PrintPlan};
use crate::{PrintError, Result};

const MM_PER_INCH: f64 = 25.4;

/// One badge copy: its page, its slot on that page, and its zones
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CopyGroup {
    /// Copy number within the run, starting at 0
    #[serde(rename = "copyIndex")]
    pub copy_index: u32,

    /// Page the copy lands on, starting at 0
    pub page: u32,

    /// Slot within the page, `0..badges_per_page`
    pub slot: u32,

    /// Rendered zones at the job's raster scale
    pub zones: Vec<ResolvedZone>,
}

/// A fully assembled print run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PrintJob {
    /// Source template id
    #[serde(rename = "templateId")]
    pub template_id: String,

    /// The computed plan
    pub plan: PrintPlan,

    /// One group per badge copy, in run order
    pub groups: Vec<CopyGroup>,
}

impl PrintJob {
    /// Groups landing on one page, in slot order
    pub fn groups_for_page(&self, page: u32) -> impl Iterator<Item = &CopyGroup> {
        self.groups.iter().filter(move |g| g.page == page)
    }
}

fn raster_scale(options: &PrintOptions) -> Result<Scale> {
    Ok(Scale::new(options.quality.dpi() / MM_PER_INCH)?)
}

fn groups_from(
    plan: &PrintPlan,
    mut zones_for_copy: impl FnMut(u32) -> Vec<ResolvedZone>,
) -> Vec<CopyGroup> {
    (0..plan.copies)
        .map(|copy_index| CopyGroup {
            copy_index,
            page: copy_index / plan.badges_per_page,
            slot: copy_index % plan.badges_per_page,
            zones: zones_for_copy(copy_index),
        })
        .collect()
}

/// Assemble a job printing one context `options.copies` times
///
/// Every copy is identical, so the zones render once and are shared by
/// clone across the groups.
pub fn build_job(
    template: &Template,
    ctx: &DataContext,
    options: &PrintOptions,
) -> Result<PrintJob> {
    let plan = plan(template, options);
    let scale = raster_scale(options)?;
    let zones = render_template(template, ctx, &scale, RenderMode::Preview);

    Ok(PrintJob {
        template_id: template.id.clone(),
        groups: groups_from(&plan, |_| zones.clone()),
        plan,
    })
}

/// Assemble a job printing one badge per context
///
/// The copy count comes from the batch length; `options.copies` is
/// ignored. An empty batch is an error since there is nothing to print.
pub fn build_job_batch(
    template: &Template,
    contexts: &[DataContext],
    options: &PrintOptions,
) -> Result<PrintJob> {
    if contexts.is_empty() {
        return Err(PrintError::EmptyBatch);
    }
    let batch_options = PrintOptions {
        copies: contexts.len() as u32,
        ..options.clone()
    };
    let plan = plan(template, &batch_options);
    let scale = raster_scale(&batch_options)?;

    Ok(PrintJob {
        template_id: template.id.clone(),
        groups: groups_from(&plan, |copy_index| {
            render_template(
                template,
                &contexts[copy_index as usize],
                &scale,
                RenderMode::Preview,
            )
        }),
        plan,
    })
}

/// Acknowledgement from an export backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportAck {
    /// The backend produced the output bytes inline
    Artifact(Vec<u8>),

    /// The backend queued the job under its own reference
    Submitted {
        /// Backend-assigned job reference
        job_id: String,
    },
}

/// Seam for host print bridges
///
/// The engine stops at assembled jobs; turning a job into paper or bytes
/// is the host's concern. A failed export leaves no partial state behind,
/// a retry is a fresh `export` call.
pub trait ExportBackend {
    /// Submit an assembled job
    fn export(&mut self, job: &PrintJob) -> Result<ExportAck>;
}

/// Seam for QR and barcode encoders
///
/// The engine resolves a symbol zone down to its payload string and
/// reserves the pixel box; producing the actual modules is the encoder's
/// concern.
pub trait SymbolEncoder {
    /// Encoded output, typically an image the backend composites
    type Output;

    /// Encode `data` into a symbol sized for `target`
    fn encode(&self, data: &str, target: PixelRect) -> Result<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{PageFormat, PrintQuality};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use template::ResolvedContent;

    fn badge() -> Template {
        template::parse_template(
            r#"{
                "id": "badge",
                "name": "Badge",
                "width": 105.0,
                "height": 148.0,
                "zones": [
                    {
                        "id": "name",
                        "kind": "text",
                        "position": { "x": 10.0, "y": 40.0, "width": 85.0, "height": 16.0 },
                        "content": { "type": "variable", "path": "attendee.fullName" }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    fn ctx_for(name: &str) -> DataContext {
        DataContext::from_value(json!({ "attendee": { "fullName": name } }))
    }

    #[test]
    fn single_context_job_replicates_copies() {
        let job = build_job(
            &badge(),
            &ctx_for("Ada Lovelace"),
            &PrintOptions::new(PageFormat::A4, 30),
        )
        .unwrap();

        assert_eq!(job.groups.len(), 30);
        assert_eq!(job.plan.page_count, 4);
        assert_eq!(job.groups[0].page, 0);
        assert_eq!(job.groups[0].slot, 0);
        assert_eq!(job.groups[8].page, 1);
        assert_eq!(job.groups[8].slot, 0);
        assert_eq!(job.groups[29].page, 3);
        assert_eq!(job.groups[29].slot, 5);
        assert_eq!(job.groups[0].zones, job.groups[29].zones);
    }

    #[test]
    fn batch_job_renders_each_context() {
        let contexts = [
            ctx_for("Ada Lovelace"),
            ctx_for("Grace Hopper"),
            ctx_for("Hedy Lamarr"),
        ];
        let job = build_job_batch(&badge(), &contexts, &PrintOptions::new(PageFormat::A4, 999))
            .unwrap();

        assert_eq!(job.plan.copies, 3, "batch length wins over options.copies");
        assert_eq!(job.groups.len(), 3);
        let names: Vec<_> = job
            .groups
            .iter()
            .map(|g| match &g.zones[0].content {
                ResolvedContent::Text { text } => text.clone(),
                other => panic!("unexpected content {other:?}"),
            })
            .collect();
        assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper", "Hedy Lamarr"]);
    }

    #[test]
    fn empty_batch_is_an_error() {
        let err =
            build_job_batch(&badge(), &[], &PrintOptions::new(PageFormat::A4, 5)).unwrap_err();
        assert!(matches!(err, PrintError::EmptyBatch));
    }

    #[test]
    fn quality_drives_raster_scale() {
        let options =
            PrintOptions::new(PageFormat::SingleBadge, 1).with_quality(PrintQuality::Normal);
        let job = build_job(&badge(), &ctx_for("Ada"), &options).unwrap();

        // 85mm at 300dpi is 85 * 300 / 25.4 pixels
        let width = job.groups[0].zones[0].pixel_box.width;
        assert!((width - 85.0 * 300.0 / 25.4).abs() < 1e-9);

        let draft = PrintOptions::new(PageFormat::SingleBadge, 1).with_quality(PrintQuality::Draft);
        let draft_job = build_job(&badge(), &ctx_for("Ada"), &draft).unwrap();
        let draft_width = draft_job.groups[0].zones[0].pixel_box.width;
        assert!((draft_width - 85.0 * 150.0 / 25.4).abs() < 1e-9);
    }

    #[test]
    fn groups_for_page_selects_one_page() {
        let job = build_job(
            &badge(),
            &ctx_for("Ada"),
            &PrintOptions::new(PageFormat::A4, 30),
        )
        .unwrap();

        let last_page: Vec<_> = job.groups_for_page(3).collect();
        assert_eq!(last_page.len(), 6);
        assert!(last_page.iter().all(|g| g.page == 3));
        let slots: Vec<u32> = last_page.iter().map(|g| g.slot).collect();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    struct RecordingBackend {
        submissions: Vec<String>,
    }

    impl ExportBackend for RecordingBackend {
        fn export(&mut self, job: &PrintJob) -> Result<ExportAck> {
            self.submissions.push(job.template_id.clone());
            Ok(ExportAck::Submitted {
                job_id: format!("run-{}", self.submissions.len()),
            })
        }
    }

    #[test]
    fn export_backend_receives_the_job() {
        let mut backend = RecordingBackend {
            submissions: Vec::new(),
        };
        let job = build_job(
            &badge(),
            &ctx_for("Ada"),
            &PrintOptions::new(PageFormat::A4, 12),
        )
        .unwrap();

        let ack = backend.export(&job).unwrap();
        assert_eq!(
            ack,
            ExportAck::Submitted {
                job_id: "run-1".to_string()
            }
        );
        assert_eq!(backend.submissions, vec!["badge"]);
    }

    struct LabelEncoder;

    impl SymbolEncoder for LabelEncoder {
        type Output = String;

        fn encode(&self, data: &str, target: PixelRect) -> Result<Self::Output> {
            if data.is_empty() {
                return Err(PrintError::EncodeError("empty payload".to_string()));
            }
            Ok(format!("{data} in {}x{}", target.width, target.height))
        }
    }

    #[test]
    fn symbol_encoder_gets_payload_and_box() {
        let template = template::parse_template(
            r#"{
                "id": "pass",
                "name": "Pass",
                "width": 100.0,
                "height": 100.0,
                "zones": [
                    {
                        "id": "code",
                        "kind": "qr",
                        "position": { "x": 10.0, "y": 10.0, "width": 30.0, "height": 30.0 },
                        "content": { "type": "variable", "path": "security.code" }
                    }
                ]
            }"#,
        )
        .unwrap();
        let ctx = DataContext::from_value(json!({ "security": { "code": "LAN-0042" } }));
        let job = build_job(
            &template,
            &ctx,
            &PrintOptions::new(PageFormat::SingleBadge, 1),
        )
        .unwrap();

        let zone = &job.groups[0].zones[0];
        let payload = match &zone.content {
            ResolvedContent::Symbol { data } => data.clone(),
            other => panic!("unexpected content {other:?}"),
        };
        let encoded = LabelEncoder.encode(&payload, zone.pixel_box).unwrap();
        assert!(encoded.starts_with("LAN-0042 in "));

        let err = LabelEncoder.encode("", zone.pixel_box).unwrap_err();
        assert!(matches!(err, PrintError::EncodeError(_)));
    }
}
