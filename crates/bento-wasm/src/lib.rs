//! WASM bridge for the bento grid — binds the reorder engine to a page.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the event
//! listeners (one delegated listener per drag event on the grid container)
//! and forwards the event target here; this side resolves it to a tile,
//! drives the [`GridController`], and projects the resulting order and
//! visual state back onto the DOM.

mod console;
mod storage;

use bento_core::{GridConfig, TileKey, TileSource};
use bento_editor::{EditAffordances, GridController, Placement};
use storage::WebStorage;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

const RESET_PROMPT: &str = "Reset to default layout? This will clear your custom arrangement.";

/// One reorderable grid on the page.
#[wasm_bindgen]
pub struct BentoGrid {
    controller: GridController<WebStorage>,
    container: Element,
    /// Tile elements indexed by `TileKey` (authored order).
    elements: Vec<Element>,
}

#[wasm_bindgen]
impl BentoGrid {
    /// Bind to `container`, read its tiles, and apply the saved layout.
    ///
    /// `config_json` is an optional JSON `GridConfig`; invalid JSON falls
    /// back to the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element, config_json: Option<String>) -> Self {
        console::panic_hook_setup();

        let config = config_from_json(config_json.as_deref());
        let elements = collect_tiles(&container, &config.tile_selector);
        let sources: Vec<TileSource> = elements
            .iter()
            .map(|el| TileSource {
                explicit_id: el.get_attribute(&config.id_attribute),
                text: el.text_content().unwrap_or_default(),
            })
            .collect();

        let mut controller = GridController::new(config, WebStorage::local(), sources);
        if let Some(report) = controller.restore()
            && report.stale > 0
        {
            log::info!("saved layout had {} stale entries", report.stale);
        }

        let grid = Self {
            controller,
            container,
            elements,
        };
        grid.project_order();
        grid.paint();
        grid
    }

    pub fn tile_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_editing(&self) -> bool {
        self.affordances().grid_editable
    }

    /// Toggle edit mode. Returns the new affordances as JSON:
    /// `{"editing":bool,"resetVisible":bool,"toggleLabel":"..."}`.
    pub fn toggle_edit(&mut self) -> String {
        self.controller.toggle_edit();
        self.paint();
        self.affordances_json()
    }

    pub fn affordances_json(&self) -> String {
        let a = self.affordances();
        serde_json::json!({
            "editing": a.grid_editable,
            "resetVisible": a.reset_visible,
            "toggleLabel": a.toggle_label,
        })
        .to_string()
    }

    /// `dragstart` on (or inside) a tile. Returns `false` if ignored.
    pub fn drag_start(&mut self, target: &Element) -> bool {
        let Some(tile) = self.tile_for(target) else {
            return false;
        };
        let started = self.controller.begin_drag(tile);
        if started {
            self.paint();
        }
        started
    }

    /// `dragover`. Returns `true` if the page should allow a drop here.
    pub fn drag_over(&mut self, target: &Element) -> bool {
        let Some(tile) = self.tile_for(target) else {
            return false;
        };
        if self.controller.drag_over(tile) {
            self.paint();
        }
        self.controller.dragged().is_some()
    }

    /// `drop`. Returns `true` if the order changed (and was saved).
    pub fn drop_on(&mut self, target: &Element) -> bool {
        let Some(tile) = self.tile_for(target) else {
            return false;
        };
        let dragged = self.controller.dragged();
        let outcome = self.controller.drop_on(tile);
        if let (Some(dragged), Some(placement)) = (dragged, outcome.placement()) {
            self.shift_tile(dragged, tile, placement);
        }
        self.paint();
        outcome.moved()
    }

    /// `dragend` / `pointercancel` / focus loss. Always clears visuals.
    pub fn drag_end(&mut self) -> bool {
        let cleared = self.controller.end_drag();
        self.paint();
        cleared
    }

    /// Persist the current order explicitly.
    pub fn save(&mut self) -> bool {
        self.controller.save()
    }

    /// Ask for confirmation, then discard the saved layout and restore the
    /// authored order. Returns `true` if the layout was reset.
    pub fn reset(&mut self) -> bool {
        if !self.controller.affordances().reset_visible {
            return false;
        }
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(RESET_PROMPT).ok())
            .unwrap_or(false);
        if !confirmed {
            return false;
        }
        let reset = self.controller.reset();
        self.project_order();
        self.paint();
        reset
    }

    /// Current order as a JSON array of identities.
    pub fn order_json(&self) -> String {
        serde_json::to_string(&self.controller.order()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Identity lint diagnostics as JSON.
    pub fn lint_json(&self) -> String {
        serde_json::to_string(&self.controller.lint()).unwrap_or_else(|_| "[]".to_string())
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl BentoGrid {
    fn affordances(&self) -> EditAffordances<'_> {
        self.controller.affordances()
    }

    /// Resolve an event target to the tile containing it.
    fn tile_for(&self, target: &Element) -> Option<TileKey> {
        let mut node = Some(target.clone());
        while let Some(el) = node {
            if el == self.container {
                return None;
            }
            if let Some(i) = self.elements.iter().position(|tile| *tile == el) {
                return Some(TileKey(i as u32));
            }
            node = el.parent_element();
        }
        None
    }

    /// Re-append tiles in controller order; appending an attached node moves it.
    fn project_order(&self) {
        for key in self.controller.grid().keys() {
            if let Some(el) = self.elements.get(key.index())
                && let Err(e) = self.container.append_child(el)
            {
                log::warn!("could not move {key:?}: {e:?}");
            }
        }
    }

    /// Move only the dragged element next to the target after a drop.
    /// Siblings that are not tiles keep their place.
    fn shift_tile(&self, dragged: TileKey, target: TileKey, placement: Placement) {
        let (Some(el), Some(target_el)) = (
            self.elements.get(dragged.index()),
            self.elements.get(target.index()),
        ) else {
            return;
        };
        let Some(parent) = target_el.parent_node() else {
            log::warn!("{target:?} is detached; re-projecting the grid");
            self.project_order();
            return;
        };
        let anchor: Option<Node> = match placement {
            Placement::BeforeTarget => Some(target_el.clone().into()),
            Placement::AfterTarget => target_el.next_sibling(),
        };
        if let Err(e) = parent.insert_before(el, anchor.as_ref()) {
            log::warn!("could not move {dragged:?}: {e:?}");
        }
    }

    /// Sync classes and the `draggable` attribute with controller state.
    fn paint(&self) {
        let aff = self.affordances();
        let dragged = self.controller.dragged();
        let cue = self.controller.drop_cue();

        traced(
            "edit-mode",
            self.container
                .class_list()
                .toggle_with_force("edit-mode", aff.grid_editable),
        );

        for (i, el) in self.elements.iter().enumerate() {
            let key = TileKey(i as u32);
            let classes = el.class_list();
            traced("dragging", classes.toggle_with_force("dragging", dragged == Some(key)));
            traced("drag-over", classes.toggle_with_force("drag-over", cue == Some(key)));
            let draggable = aff.tiles_draggable && self.controller.has_handlers(key);
            traced(
                "draggable",
                el.set_attribute("draggable", if draggable { "true" } else { "false" }),
            );
        }
    }
}

/// Log a failed DOM write at trace level; painting carries on.
fn traced<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::trace!("could not update {what}: {e:?}");
    }
}

/// Tiles under `container` matching `selector`, in document order.
fn collect_tiles(container: &Element, selector: &str) -> Vec<Element> {
    let list = match container.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad tile selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn config_from_json(json: Option<&str>) -> GridConfig {
    let Some(json) = json else {
        return GridConfig::default();
    };
    GridConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("invalid grid config, using defaults: {e}");
        GridConfig::default()
    })
}

// ─── Standalone functions ────────────────────────────────────────────────

/// Route engine logs to the browser console at `level`
/// (`"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`, `"off"`).
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    console::init_logger(console::parse_level(level));
}

/// Configuration presets as JSON, for pages that want to tweak one.
#[wasm_bindgen]
pub fn preset_config(name: &str) -> String {
    let config = match name {
        "widgets" => GridConfig::widgets(),
        _ => GridConfig::bento(),
    };
    serde_json::json!({
        "storageKey": config.storage_key,
        "snapshotLen": config.snapshot_len,
        "tileSelector": config.tile_selector,
        "idAttribute": config.id_attribute,
        "editLabel": config.edit_label,
        "doneLabel": config.done_label,
    })
    .to_string()
}
