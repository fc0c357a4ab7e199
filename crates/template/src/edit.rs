//! Interactive editing
//!
//! Every change to a template under edit flows through
//! [`EditorSession::apply`] as a [`Mutation`]. The funnel keeps the
//! invariants in one place (id uniqueness, drag clamping, locked zones)
//! and makes snapshot undo/redo trivial.
//!
//! Pointer-driven geometry is clamped to the canvas; typed geometry from
//! the inspector panel is trusted as-is, so intentional off-canvas values
//! survive.

use layout_core::{clamp_origin, drag, PixelDelta, Point, Scale};
use serde::{Deserialize, Serialize};

use crate::context::DataContext;
use crate::render::{render, Interaction, RenderMode, ResolvedZone};
use crate::schema::{Background, Content, Template, Zone};
use crate::style::Style;
use crate::{Result, TemplateError};

/// One template edit (tagged union)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Insert a zone at the top of the paint order, clamped onto the canvas
    AddZone(Zone),

    /// Remove a zone
    RemoveZone {
        /// Target zone id
        id: String,
    },

    /// Typed origin edit from the inspector; trusted, not clamped
    MoveZone {
        /// Target zone id
        id: String,
        /// New origin x in canvas millimeters
        x: f64,
        /// New origin y in canvas millimeters
        y: f64,
    },

    /// Typed size edit from the inspector; trusted, not clamped
    ResizeZone {
        /// Target zone id
        id: String,
        /// New width in canvas millimeters
        width: f64,
        /// New height in canvas millimeters
        height: f64,
    },

    /// Pointer drag by a pixel delta; clamped to the canvas
    DragZone {
        /// Target zone id
        id: String,
        /// Pointer movement in viewport pixels
        delta: PixelDelta,
    },

    /// Replace a zone's style overrides
    RestyleZone {
        /// Target zone id
        id: String,
        /// New style
        style: Style,
    },

    /// Replace a zone's content
    SetContent {
        /// Target zone id
        id: String,
        /// New content
        content: Content,
    },

    /// Set or clear a zone's placeholder text
    SetPlaceholder {
        /// Target zone id
        id: String,
        /// New placeholder, `None` to clear
        #[serde(default)]
        placeholder: Option<String>,
    },

    /// Rename a zone's editor label
    RenameZone {
        /// Target zone id
        id: String,
        /// New label
        name: String,
    },

    /// Set a zone's locked/required flags
    SetZoneFlags {
        /// Target zone id
        id: String,
        /// Refuse pointer drags
        locked: bool,
        /// Flag when unresolved
        required: bool,
    },

    /// Replace the canvas background
    SetBackground(Background),

    /// Rename the template
    RenameTemplate {
        /// New display name
        name: String,
    },
}

/// One editing session owning one template
///
/// The session is the single writer for its template. Undo and redo
/// snapshot the whole template, which stays cheap at badge scale.
#[derive(Debug, Clone)]
pub struct EditorSession {
    template: Template,
    scale: Scale,
    selection: Option<String>,
    hover: Option<String>,
    undo: Vec<Template>,
    redo: Vec<Template>,
    dirty: bool,
}

impl EditorSession {
    /// Start a session over a template
    pub fn new(template: Template) -> Self {
        Self {
            template,
            scale: Scale::identity(),
            selection: None,
            hover: None,
            undo: Vec::new(),
            redo: Vec::new(),
            dirty: false,
        }
    }

    /// The template under edit
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Take the template out, ending the session
    pub fn into_template(self) -> Template {
        self.template
    }

    /// The scale used for pointer math and rendering
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Update the scale after a viewport resize or zoom change
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    /// Apply one mutation
    ///
    /// Structural misuse (unknown zone id, duplicate added id, dragging a
    /// locked zone) is an error and leaves the template untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<()> {
        let snapshot = self.template.clone();
        self.apply_inner(mutation)?;
        self.undo.push(snapshot);
        self.redo.clear();
        self.dirty = true;
        Ok(())
    }

    fn apply_inner(&mut self, mutation: Mutation) -> Result<()> {
        match mutation {
            Mutation::AddZone(mut zone) => {
                if self.template.zone(&zone.id).is_some() {
                    return Err(TemplateError::DuplicateZone(zone.id));
                }
                zone.position =
                    clamp_origin(&zone.position, self.template.width, self.template.height);
                self.template.zones.push(zone);
            }
            Mutation::RemoveZone { id } => {
                let index = self
                    .template
                    .zones
                    .iter()
                    .position(|z| z.id == id)
                    .ok_or(TemplateError::UnknownZone(id))?;
                let removed = self.template.zones.remove(index);
                if self.selection.as_deref() == Some(removed.id.as_str()) {
                    self.selection = None;
                }
                if self.hover.as_deref() == Some(removed.id.as_str()) {
                    self.hover = None;
                }
            }
            Mutation::MoveZone { id, x, y } => {
                let zone = self.lookup_mut(&id)?;
                zone.position.x = x;
                zone.position.y = y;
            }
            Mutation::ResizeZone { id, width, height } => {
                let zone = self.lookup_mut(&id)?;
                zone.position.width = width;
                zone.position.height = height;
            }
            Mutation::DragZone { id, delta } => {
                let (canvas_width, canvas_height) = (self.template.width, self.template.height);
                let scale = self.scale;
                let zone = self.lookup_mut(&id)?;
                if zone.locked {
                    return Err(TemplateError::ZoneLocked(id));
                }
                zone.position = drag(&zone.position, delta, &scale, canvas_width, canvas_height);
            }
            Mutation::RestyleZone { id, style } => {
                self.lookup_mut(&id)?.style = style;
            }
            Mutation::SetContent { id, content } => {
                self.lookup_mut(&id)?.content = content;
            }
            Mutation::SetPlaceholder { id, placeholder } => {
                self.lookup_mut(&id)?.placeholder = placeholder;
            }
            Mutation::RenameZone { id, name } => {
                self.lookup_mut(&id)?.name = name;
            }
            Mutation::SetZoneFlags {
                id,
                locked,
                required,
            } => {
                let zone = self.lookup_mut(&id)?;
                zone.locked = locked;
                zone.required = required;
            }
            Mutation::SetBackground(background) => {
                self.template.background = background;
            }
            Mutation::RenameTemplate { name } => {
                self.template.name = name;
            }
        }
        Ok(())
    }

    fn lookup_mut(&mut self, id: &str) -> Result<&mut Zone> {
        self.template
            .zone_mut(id)
            .ok_or_else(|| TemplateError::UnknownZone(id.to_string()))
    }

    /// Undo the most recent mutation; false when the history is empty
    pub fn undo(&mut self) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.redo
                    .push(std::mem::replace(&mut self.template, previous));
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone mutation; false when nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(std::mem::replace(&mut self.template, next));
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Select a zone, or clear the selection with `None`
    pub fn select(&mut self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) if self.template.zone(id).is_none() => {
                Err(TemplateError::UnknownZone(id.to_string()))
            }
            _ => {
                self.selection = id.map(str::to_string);
                Ok(())
            }
        }
    }

    /// The selected zone id, if any
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Update the hovered zone; unknown ids clear the hover
    ///
    /// Hover events race with zone removal, so this never errors.
    pub fn hover(&mut self, id: Option<&str>) {
        self.hover = id
            .filter(|id| self.template.zone(id).is_some())
            .map(str::to_string);
    }

    /// Topmost zone under a viewport point, honoring paint order
    pub fn hit_test(&self, x_px: f64, y_px: f64) -> Option<&str> {
        let point = Point::new(self.scale.to_units(x_px), self.scale.to_units(y_px));
        self.template
            .zones
            .iter()
            .rev()
            .find(|zone| zone.position.contains(point))
            .map(|zone| zone.id.as_str())
    }

    /// Unsaved changes since the last [`mark_saved`](Self::mark_saved)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after the host persists the template
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Render the session's zones for the editor, with interaction flags
    pub fn resolved_zones(&self, ctx: &DataContext) -> Vec<ResolvedZone> {
        self.template
            .zones
            .iter()
            .map(|zone| {
                let mut resolved = render(zone, ctx, &self.scale, RenderMode::Edit);
                resolved.interaction = Some(Interaction {
                    selected: self.selection.as_deref() == Some(zone.id.as_str()),
                    hovered: self.hover.as_deref() == Some(zone.id.as_str()),
                });
                resolved
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ZoneKind;
    use layout_core::Rect;
    use pretty_assertions::assert_eq;

    fn badge_template() -> Template {
        Template {
            id: "badge".to_string(),
            name: "Badge".to_string(),
            width: 105.0,
            height: 148.0,
            background: Background::default(),
            zones: vec![
                Zone::new("name", ZoneKind::Text, Rect::new(10.0, 40.0, 85.0, 16.0)),
                Zone::new("qr", ZoneKind::Qr, Rect::new(90.0, 140.0, 20.0, 20.0)),
            ],
        }
    }

    #[test]
    fn add_zone_clamps_and_appends() {
        let mut session = EditorSession::new(badge_template());
        let zone = Zone::new("logo", ZoneKind::Image, Rect::new(100.0, 200.0, 30.0, 30.0));
        session.apply(Mutation::AddZone(zone)).unwrap();

        let added = session.template().zone("logo").unwrap();
        assert_eq!(added.position, Rect::new(75.0, 118.0, 30.0, 30.0));
        assert_eq!(session.template().zones.last().unwrap().id, "logo");
        assert!(session.is_dirty());
    }

    #[test]
    fn duplicate_add_is_rejected_without_side_effects() {
        let mut session = EditorSession::new(badge_template());
        let zone = Zone::new("name", ZoneKind::Text, Rect::new(0.0, 0.0, 10.0, 10.0));
        let err = session.apply(Mutation::AddZone(zone)).unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateZone(id) if id == "name"));
        assert_eq!(session.template().zones.len(), 2);
        assert!(!session.undo(), "failed mutation must not snapshot");
    }

    #[test]
    fn typed_edits_are_trusted_verbatim() {
        let mut session = EditorSession::new(badge_template());
        session
            .apply(Mutation::MoveZone {
                id: "name".to_string(),
                x: -5.0,
                y: 300.0,
            })
            .unwrap();
        session
            .apply(Mutation::ResizeZone {
                id: "name".to_string(),
                width: 400.0,
                height: 2.0,
            })
            .unwrap();

        let zone = session.template().zone("name").unwrap();
        assert_eq!(zone.position, Rect::new(-5.0, 300.0, 400.0, 2.0));
    }

    #[test]
    fn drag_clamps_to_canvas() {
        let mut session = EditorSession::new(badge_template());
        session
            .apply(Mutation::DragZone {
                id: "name".to_string(),
                delta: PixelDelta::new(500.0, 500.0),
            })
            .unwrap();
        let zone = session.template().zone("name").unwrap();
        assert_eq!(zone.position, Rect::new(20.0, 132.0, 85.0, 16.0));
    }

    #[test]
    fn drag_respects_session_scale() {
        let mut session = EditorSession::new(badge_template());
        session.set_scale(Scale::new(2.0).unwrap());
        session
            .apply(Mutation::DragZone {
                id: "name".to_string(),
                delta: PixelDelta::new(10.0, -20.0),
            })
            .unwrap();
        // 10px right and 20px up at factor 2 is 5mm right, 10mm up
        let zone = session.template().zone("name").unwrap();
        assert_eq!(zone.position, Rect::new(15.0, 30.0, 85.0, 16.0));
    }

    #[test]
    fn locked_zone_refuses_drags_but_not_typed_edits() {
        let mut session = EditorSession::new(badge_template());
        session
            .apply(Mutation::SetZoneFlags {
                id: "qr".to_string(),
                locked: true,
                required: false,
            })
            .unwrap();

        let err = session
            .apply(Mutation::DragZone {
                id: "qr".to_string(),
                delta: PixelDelta::new(1.0, 1.0),
            })
            .unwrap_err();
        assert!(matches!(err, TemplateError::ZoneLocked(id) if id == "qr"));

        session
            .apply(Mutation::MoveZone {
                id: "qr".to_string(),
                x: 10.0,
                y: 10.0,
            })
            .unwrap();
        assert_eq!(
            session.template().zone("qr").unwrap().position,
            Rect::new(10.0, 10.0, 20.0, 20.0)
        );
    }

    #[test]
    fn undo_redo_roundtrip() {
        let mut session = EditorSession::new(badge_template());
        session
            .apply(Mutation::RenameTemplate {
                name: "Speaker Badge".to_string(),
            })
            .unwrap();
        session
            .apply(Mutation::MoveZone {
                id: "name".to_string(),
                x: 1.0,
                y: 2.0,
            })
            .unwrap();

        assert!(session.undo());
        assert_eq!(
            session.template().zone("name").unwrap().position.x,
            10.0,
            "move undone"
        );
        assert_eq!(session.template().name, "Speaker Badge");

        assert!(session.undo());
        assert_eq!(session.template().name, "Badge");
        assert!(!session.undo(), "history exhausted");

        assert!(session.redo());
        assert_eq!(session.template().name, "Speaker Badge");
        assert!(session.redo());
        assert_eq!(session.template().zone("name").unwrap().position.x, 1.0);
        assert!(!session.redo());
    }

    #[test]
    fn new_mutation_clears_redo() {
        let mut session = EditorSession::new(badge_template());
        session
            .apply(Mutation::RenameTemplate {
                name: "A".to_string(),
            })
            .unwrap();
        session.undo();
        session
            .apply(Mutation::RenameTemplate {
                name: "B".to_string(),
            })
            .unwrap();
        assert!(!session.redo());
        assert_eq!(session.template().name, "B");
    }

    #[test]
    fn removing_selected_zone_clears_selection() {
        let mut session = EditorSession::new(badge_template());
        session.select(Some("name")).unwrap();
        session
            .apply(Mutation::RemoveZone {
                id: "name".to_string(),
            })
            .unwrap();
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn selecting_unknown_zone_errors() {
        let mut session = EditorSession::new(badge_template());
        assert!(matches!(
            session.select(Some("ghost")),
            Err(TemplateError::UnknownZone(_))
        ));
        session.select(Some("qr")).unwrap();
        session.select(None).unwrap();
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn hit_test_picks_topmost_zone() {
        let mut template = badge_template();
        template.zones.push(Zone::new(
            "overlay",
            ZoneKind::Shape,
            Rect::new(0.0, 0.0, 105.0, 148.0),
        ));
        let session = EditorSession::new(template);
        assert_eq!(session.hit_test(50.0, 50.0), Some("overlay"));
    }

    #[test]
    fn hit_test_converts_pixels_with_scale() {
        let mut session = EditorSession::new(badge_template());
        session.set_scale(Scale::new(2.0).unwrap());
        // 30px at factor 2 is 15mm, inside the "name" zone's x-range only
        // when y also lands inside it
        assert_eq!(session.hit_test(30.0, 100.0), Some("name"));
        assert_eq!(session.hit_test(30.0, 10.0), None);
    }

    #[test]
    fn resolved_zones_carry_selection_flags() {
        let mut session = EditorSession::new(badge_template());
        session.select(Some("name")).unwrap();
        session.hover(Some("qr"));

        let zones = session.resolved_zones(&DataContext::empty());
        let name = zones.iter().find(|z| z.zone_id == "name").unwrap();
        let qr = zones.iter().find(|z| z.zone_id == "qr").unwrap();
        assert_eq!(
            name.interaction,
            Some(Interaction {
                selected: true,
                hovered: false
            })
        );
        assert_eq!(
            qr.interaction,
            Some(Interaction {
                selected: false,
                hovered: true
            })
        );
    }

    #[test]
    fn mark_saved_clears_dirty() {
        let mut session = EditorSession::new(badge_template());
        assert!(!session.is_dirty());
        session
            .apply(Mutation::RenameTemplate {
                name: "X".to_string(),
            })
            .unwrap();
        assert!(session.is_dirty());
        session.mark_saved();
        assert!(!session.is_dirty());
    }

    #[test]
    fn mutations_deserialize_from_editor_json() {
        let mutation: Mutation =
            serde_json::from_str(r#"{ "op": "moveZone", "id": "name", "x": 5.0, "y": 6.0 }"#)
                .unwrap();
        assert_eq!(
            mutation,
            Mutation::MoveZone {
                id: "name".to_string(),
                x: 5.0,
                y: 6.0
            }
        );

        let mutation: Mutation = serde_json::from_str(
            r##"{ "op": "setBackground", "type": "solid", "color": "#f5f5f5" }"##,
        )
        .unwrap();
        assert!(matches!(mutation, Mutation::SetBackground(_)));

        let mutation: Mutation =
            serde_json::from_str(r#"{ "op": "setPlaceholder", "id": "name" }"#).unwrap();
        assert_eq!(
            mutation,
            Mutation::SetPlaceholder {
                id: "name".to_string(),
                placeholder: None
            }
        );
    }
}
