// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WebAssembly bindings for floor plan scene generation
//!
//! The host renderer (typically three.js) keeps one `ScenegraphAPI`
//! instance, loads a floor plan document into it, and requests a fresh
//! scene graph each animation frame with its clock's elapsed seconds.

use planscape_core::{sample_plan, FloorPlan};
use planscape_scene::{
    fallback_sway, generate_scene_with_origin, idle_bob, PlanOrigin,
};
use wasm_bindgen::prelude::*;

/// Floor plan scene generation API
#[wasm_bindgen]
pub struct ScenegraphAPI {
    floor_plan: Option<FloorPlan>,
    origin: PlanOrigin,
}

#[wasm_bindgen]
impl ScenegraphAPI {
    /// Create a new API instance with no floor plan loaded
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            floor_plan: None,
            origin: PlanOrigin::default(),
        }
    }

    /// Load a floor plan from its JSON document form.
    ///
    /// The document is validated at this boundary; scene generation
    /// itself never checks.
    #[wasm_bindgen(js_name = setFloorPlan)]
    pub fn set_floor_plan(&mut self, plan_json: &str) -> Result<(), JsError> {
        let plan = FloorPlan::from_json(plan_json)
            .map_err(|e| JsError::new(&format!("Invalid floor plan JSON: {}", e)))?;
        plan.validate()
            .map_err(|e| JsError::new(&format!("Invalid floor plan: {}", e)))?;

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(
            &format!(
                "planscape: loaded '{}' ({} walls, {} rooms)",
                plan.name,
                plan.walls.len(),
                plan.rooms.len()
            )
            .into(),
        );

        self.floor_plan = Some(plan);
        Ok(())
    }

    /// Load the built-in sample apartment plan
    #[wasm_bindgen(js_name = loadSamplePlan)]
    pub fn load_sample_plan(&mut self) {
        self.floor_plan = Some(sample_plan());
    }

    /// Drop the loaded floor plan; subsequent frames show the fallback
    /// house
    #[wasm_bindgen(js_name = clearFloorPlan)]
    pub fn clear_floor_plan(&mut self) {
        self.floor_plan = None;
    }

    #[wasm_bindgen(js_name = hasFloorPlan)]
    pub fn has_floor_plan(&self) -> bool {
        self.floor_plan.is_some()
    }

    /// Display name of the loaded plan, if any
    #[wasm_bindgen(js_name = planName)]
    pub fn plan_name(&self) -> Option<String> {
        self.floor_plan.as_ref().map(|p| p.name.clone())
    }

    /// Set the plan-space canvas origin used for coordinate mapping
    #[wasm_bindgen(js_name = setOrigin)]
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = PlanOrigin::new(x, y);
    }

    /// Generate the scene graph for the given elapsed seconds as JSON
    #[wasm_bindgen(js_name = sceneGraph)]
    pub fn scene_graph(&self, elapsed_seconds: f64) -> Result<String, JsError> {
        let scene =
            generate_scene_with_origin(self.floor_plan.as_ref(), self.origin, elapsed_seconds);
        serde_json::to_string(&scene)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Generate the scene graph for the given elapsed seconds as a plain
    /// JS object (avoids a JSON.parse on the host side)
    #[wasm_bindgen(js_name = sceneGraphValue)]
    pub fn scene_graph_value(&self, elapsed_seconds: f64) -> Result<JsValue, JsError> {
        let scene =
            generate_scene_with_origin(self.floor_plan.as_ref(), self.origin, elapsed_seconds);
        serde_wasm_bindgen::to_value(&scene)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

impl Default for ScenegraphAPI {
    fn default() -> Self {
        Self::new()
    }
}

/// Root vertical bob for a loaded plan at the given elapsed seconds
#[wasm_bindgen(js_name = idleBob)]
pub fn idle_bob_at(elapsed_seconds: f64) -> f64 {
    idle_bob(elapsed_seconds)
}

/// Fallback house yaw sway at the given elapsed seconds
#[wasm_bindgen(js_name = fallbackSway)]
pub fn fallback_sway_at(elapsed_seconds: f64) -> f64 {
    fallback_sway(elapsed_seconds)
}
