//! WASM bindings for lanyard
//!
//! This crate provides a JavaScript-friendly API for:
//! - Editing badge/ticket templates (mutations, selection, undo/redo)
//! - Rendering resolved zones for the editor canvas and static previews
//! - Planning print runs
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { TemplateEditor, planPrint } from 'lanyard-wasm';
//!
//! await init();
//!
//! const editor = TemplateEditor.fromPreset('conference-badge');
//! editor.setViewport(840, 1184, 1.0);
//!
//! editor.applyMutation({ op: 'renameTemplate', name: 'Speaker badge' });
//! editor.dragZone('attendee-name', 24, -10);
//!
//! const zones = editor.resolvedZones({ attendee: { fullName: 'Ada Lovelace' } });
//! const plan = planPrint(editor.toJson(), { format: 'a4', copies: 30 });
//! ```

use layout_core::{PixelDelta, Scale, Viewport};
use template::{EditorSession, Mutation, Preset, Template};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_err<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn context_from(data: JsValue) -> Result<template::DataContext, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(data)?;
    Ok(template::DataContext::from_value(value))
}

/// Interactive template editor session
#[wasm_bindgen]
pub struct TemplateEditor {
    session: EditorSession,
}

#[wasm_bindgen]
impl TemplateEditor {
    /// Create an editor over a blank canvas
    ///
    /// @param id - Template identifier
    /// @param name - Display name
    /// @param width - Canvas width in millimeters
    /// @param height - Canvas height in millimeters
    pub fn blank(id: &str, name: &str, width: f64, height: f64) -> Result<TemplateEditor, JsValue> {
        let template = Template::blank(id, name, width, height).map_err(to_js_err)?;
        Ok(TemplateEditor {
            session: EditorSession::new(template),
        })
    }

    /// Create an editor over a stock layout
    ///
    /// @param preset - 'conference-badge', 'event-ticket' or 'table-card'
    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(preset: &str) -> Result<TemplateEditor, JsValue> {
        let preset = match preset {
            "conference-badge" => Preset::ConferenceBadge,
            "event-ticket" => Preset::EventTicket,
            "table-card" => Preset::TableCard,
            other => return Err(JsValue::from_str(&format!("unknown preset: {other}"))),
        };
        Ok(TemplateEditor {
            session: EditorSession::new(Template::from_preset(preset)),
        })
    }

    /// Create an editor over a saved template
    ///
    /// @param json - Template JSON string
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<TemplateEditor, JsValue> {
        let template = template::parse_template(json).map_err(to_js_err)?;
        Ok(TemplateEditor {
            session: EditorSession::new(template),
        })
    }

    /// Serialize the template under edit
    ///
    /// @returns Template JSON string
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.session.template().to_json().map_err(to_js_err)
    }

    /// Fit the canvas into a viewport and set the session scale
    ///
    /// @param width - Viewport width in pixels
    /// @param height - Viewport height in pixels
    /// @param zoom - Zoom multiplier; clamped to 0.5 - 2.0
    /// @returns The resulting scale factor (pixels per millimeter)
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width: f64, height: f64, zoom: f64) -> Result<f64, JsValue> {
        let template = self.session.template();
        let scale = Scale::fit_zoomed(
            Viewport::new(width, height),
            template.width,
            template.height,
            zoom,
        )
        .map_err(to_js_err)?;
        self.session.set_scale(scale);
        Ok(scale.factor())
    }

    /// Set the session scale from a raw factor
    ///
    /// @param factor - Pixels per millimeter; must be finite and positive
    #[wasm_bindgen(js_name = setScale)]
    pub fn set_scale(&mut self, factor: f64) -> Result<(), JsValue> {
        let scale = Scale::new(factor).map_err(to_js_err)?;
        self.session.set_scale(scale);
        Ok(())
    }

    /// The current scale factor (pixels per millimeter)
    #[wasm_bindgen(js_name = scaleFactor)]
    pub fn scale_factor(&self) -> f64 {
        self.session.scale().factor()
    }

    /// Apply one mutation
    ///
    /// @param op - Mutation object, e.g. `{ op: 'moveZone', id: 'x', x: 5, y: 6 }`
    #[wasm_bindgen(js_name = applyMutation)]
    pub fn apply_mutation(&mut self, op: JsValue) -> Result<(), JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(op)?;
        let mutation: Mutation = serde_json::from_value(value).map_err(to_js_err)?;
        self.session.apply(mutation).map_err(to_js_err)
    }

    /// Drag a zone by a pointer delta in viewport pixels
    ///
    /// @param id - Zone id
    /// @param dx - Horizontal movement in pixels
    /// @param dy - Vertical movement in pixels
    #[wasm_bindgen(js_name = dragZone)]
    pub fn drag_zone(&mut self, id: &str, dx: f64, dy: f64) -> Result<(), JsValue> {
        self.session
            .apply(Mutation::DragZone {
                id: id.to_string(),
                delta: PixelDelta::new(dx, dy),
            })
            .map_err(to_js_err)
    }

    /// Topmost zone under a viewport point
    ///
    /// @param x - Pointer x in viewport pixels
    /// @param y - Pointer y in viewport pixels
    /// @returns Zone id, or undefined when the point hits the canvas
    #[wasm_bindgen(js_name = hitTest)]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<String> {
        self.session.hit_test(x, y).map(str::to_string)
    }

    /// Select a zone, or clear the selection
    ///
    /// @param id - Zone id, or null/undefined to clear
    pub fn select(&mut self, id: Option<String>) -> Result<(), JsValue> {
        self.session.select(id.as_deref()).map_err(to_js_err)
    }

    /// The selected zone id, if any
    pub fn selection(&self) -> Option<String> {
        self.session.selection().map(str::to_string)
    }

    /// Update the hovered zone
    ///
    /// @param id - Zone id, or null/undefined to clear
    pub fn hover(&mut self, id: Option<String>) {
        self.session.hover(id.as_deref());
    }

    /// Undo the most recent mutation
    ///
    /// @returns false when the history is empty
    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    /// Redo the most recently undone mutation
    ///
    /// @returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    /// Unsaved changes since the last markSaved()
    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    /// Clear the dirty flag after persisting the template
    #[wasm_bindgen(js_name = markSaved)]
    pub fn mark_saved(&mut self) {
        self.session.mark_saved();
    }

    /// Render every zone for the editor canvas
    ///
    /// @param data - Data context object
    /// @returns Array of resolved zones with interaction flags
    #[wasm_bindgen(js_name = resolvedZones)]
    pub fn resolved_zones(&self, data: JsValue) -> Result<JsValue, JsValue> {
        let ctx = context_from(data)?;
        let zones = self.session.resolved_zones(&ctx);
        Ok(serde_wasm_bindgen::to_value(&zones)?)
    }

    /// Ids of required zones that resolve to nothing for a context
    ///
    /// @param data - Data context object
    /// @returns Array of zone ids
    #[wasm_bindgen(js_name = unresolvedRequired)]
    pub fn unresolved_required(&self, data: JsValue) -> Result<js_sys::Array, JsValue> {
        let ctx = context_from(data)?;
        Ok(template::unresolved_required(self.session.template(), &ctx)
            .into_iter()
            .map(JsValue::from_str)
            .collect())
    }

    /// The template's display name
    #[wasm_bindgen(js_name = templateName)]
    pub fn template_name(&self) -> String {
        self.session.template().name.clone()
    }

    /// Canvas width in millimeters
    #[wasm_bindgen(js_name = canvasWidth)]
    pub fn canvas_width(&self) -> f64 {
        self.session.template().width
    }

    /// Canvas height in millimeters
    #[wasm_bindgen(js_name = canvasHeight)]
    pub fn canvas_height(&self) -> f64 {
        self.session.template().height
    }
}

/// Compute the fit-to-viewport scale factor without an editor
///
/// @param viewportWidth - Viewport width in pixels
/// @param viewportHeight - Viewport height in pixels
/// @param canvasWidth - Canvas width in millimeters
/// @param canvasHeight - Canvas height in millimeters
/// @param zoom - Zoom multiplier; clamped to 0.5 - 2.0
/// @returns Scale factor (pixels per millimeter)
#[wasm_bindgen(js_name = fitScale)]
pub fn fit_scale(
    viewport_width: f64,
    viewport_height: f64,
    canvas_width: f64,
    canvas_height: f64,
    zoom: f64,
) -> Result<f64, JsValue> {
    let scale = Scale::fit_zoomed(
        Viewport::new(viewport_width, viewport_height),
        canvas_width,
        canvas_height,
        zoom,
    )
    .map_err(to_js_err)?;
    Ok(scale.factor())
}

/// Render a static preview of a saved template
///
/// @param templateJson - Template JSON string
/// @param data - Data context object
/// @param viewportWidth - Preview width in pixels
/// @param viewportHeight - Preview height in pixels
/// @param zoom - Zoom multiplier; clamped to 0.5 - 2.0
/// @returns Array of resolved zones without interaction state
#[wasm_bindgen(js_name = renderPreview)]
pub fn render_preview(
    template_json: &str,
    data: JsValue,
    viewport_width: f64,
    viewport_height: f64,
    zoom: f64,
) -> Result<JsValue, JsValue> {
    let template = template::parse_template(template_json).map_err(to_js_err)?;
    let ctx = context_from(data)?;
    let scale = Scale::fit_zoomed(
        Viewport::new(viewport_width, viewport_height),
        template.width,
        template.height,
        zoom,
    )
    .map_err(to_js_err)?;
    let zones =
        template::render_template(&template, &ctx, &scale, template::RenderMode::Preview);
    Ok(serde_wasm_bindgen::to_value(&zones)?)
}

/// Plan a print run for a saved template
///
/// @param templateJson - Template JSON string
/// @param options - Print options, e.g. `{ format: 'a4', copies: 30 }`
/// @returns Print plan with page counts and an advisory grid
#[wasm_bindgen(js_name = planPrint)]
pub fn plan_print(template_json: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let template = template::parse_template(template_json).map_err(to_js_err)?;
    let value: serde_json::Value = serde_wasm_bindgen::from_value(options)?;
    let options: print::PrintOptions = serde_json::from_value(value).map_err(to_js_err)?;
    let plan = print::plan(&template, &options);
    Ok(serde_wasm_bindgen::to_value(&plan)?)
}
