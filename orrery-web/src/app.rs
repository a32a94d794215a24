use glam::Mat4;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use orrery_scene::{evaluate_frame, solar_system, spinning_pyramid, Camera, Scene};

/// Main application state for the WASM runtime.
///
/// Owns the scene and camera; the JS host owns the WebGL context. Geometry
/// is fetched by the host once after construction and uploaded to the GPU a
/// single time; per frame the host only reads back one world matrix per node.
#[wasm_bindgen]
pub struct App {
    scene: Scene,
    camera: Camera,
    worlds: Vec<Mat4>,
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl App {
    /// Create a new App from a canvas ID and a preset scene name.
    pub fn new(canvas_id: &str, scene_name: &str) -> Result<App, JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;

        let (scene, camera) = match scene_name {
            "solar" => solar_system(),
            "pyramid" => spinning_pyramid(),
            other => return Err(JsValue::from_str(&format!("Unknown scene: {other}"))),
        }
        .map_err(|e| JsValue::from_str(&format!("Failed to build scene: {e}")))?;

        log::info!("Loaded scene '{scene_name}': {} nodes", scene.len());

        Ok(App {
            scene,
            camera,
            worlds: Vec::new(),
            canvas,
        })
    }

    /// Run one frame: evaluate all world transforms and advance rotations.
    /// Called from requestAnimationFrame.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let view = self.camera.view_matrix();
        self.worlds = evaluate_frame(&mut self.scene, &view)
            .map_err(|e| JsValue::from_str(&format!("Frame evaluation failed: {e}")))?;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.scene.len()
    }

    /// Vertex positions for one node (xyz triples). Fetch once at setup.
    pub fn node_positions(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        let node = self.node(index)?;
        Ok(node.geometry.positions.clone())
    }

    /// Vertex colors for one node (rgba quads). Fetch once at setup.
    pub fn node_colors(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        let node = self.node(index)?;
        Ok(node.geometry.colors.clone())
    }

    /// Vertex normals for one node (xyz triples). Fetch once at setup.
    pub fn node_normals(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        let node = self.node(index)?;
        Ok(node.geometry.normals.clone())
    }

    /// Triangle indices for one node. Fetch once at setup.
    pub fn node_indices(&self, index: usize) -> Result<Vec<u16>, JsValue> {
        let node = self.node(index)?;
        Ok(node.geometry.indices.clone())
    }

    /// This frame's world (model-view) matrix for one node, column-major,
    /// 16 floats, ready for `uniformMatrix4fv`.
    pub fn world_transform(&self, index: usize) -> Result<Vec<f32>, JsValue> {
        let world = self
            .worlds
            .get(index)
            .ok_or_else(|| JsValue::from_str("No world transform; call frame() first"))?;
        Ok(world.to_cols_array().to_vec())
    }

    /// Projection matrix for the current canvas aspect ratio, column-major.
    pub fn projection_matrix(&self) -> Vec<f32> {
        let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
        self.camera.projection_matrix(aspect).to_cols_array().to_vec()
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }
}

impl App {
    fn node(&self, index: usize) -> Result<&orrery_scene::Node, JsValue> {
        self.scene
            .nodes
            .get(index)
            .ok_or_else(|| JsValue::from_str(&format!("Node index {index} out of range")))
    }
}
