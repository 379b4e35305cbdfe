use wasm_bindgen::prelude::*;

use crate::edge::EdgeDescriptor;
use crate::grid::MirrorBox;
use crate::placement::MirrorPlacement;
use crate::simulation::{max_ticks, simulate, simulate_all, trace};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM wrapper around a [`MirrorBox`].
///
/// Mirrors are added one at a time from JavaScript, so the wrapper keeps the placements and
/// rebuilds the box on each change.
#[wasm_bindgen(js_name = MirrorBox)]
pub struct MirrorBoxWasm {
    inner: MirrorBox,
    placements: Vec<MirrorPlacement>,
}

#[wasm_bindgen(js_class = MirrorBox)]
impl MirrorBoxWasm {
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<MirrorBoxWasm, JsValue> {
        Ok(MirrorBoxWasm { inner: MirrorBox::empty(width, height).map_err(to_js)?, placements: Vec::new() })
    }

    /// Places a mirror given as e.g. `"CB/"`.
    pub fn add_mirror(&mut self, description: &str) -> Result<(), JsValue> {
        let placement: MirrorPlacement = description.parse().map_err(to_js)?;
        let mut placements = self.placements.clone();
        placements.push(placement);
        self.inner = MirrorBox::new(self.inner.width(), self.inner.height(), placements.iter().copied()).map_err(to_js)?;
        self.placements = placements;
        Ok(())
    }

    pub fn clear_mirrors(&mut self) {
        self.placements.clear();
        if let Ok(empty) = MirrorBox::empty(self.inner.width(), self.inner.height()) {
            self.inner = empty;
        }
    }

    pub fn random_mirrors(&mut self, count: usize) {
        self.inner.random_mirrors(count);
        self.placements = self.inner.mirrors().collect();
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize { self.inner.width() }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize { self.inner.height() }
    #[wasm_bindgen(getter)]
    pub fn mirrors(&self) -> Vec<String> { self.placements.iter().map(|m| m.to_string()).collect() }

    pub fn render(&self) -> String { self.inner.render() }

    /// Exit descriptor for an entry such as `">C"`.
    pub fn simulate(&self, entry: &str) -> Result<String, JsValue> {
        let entry: EdgeDescriptor = entry.parse().map_err(to_js)?;
        simulate(&self.inner, entry).map(|exit| exit.to_string()).map_err(to_js)
    }

    /// The box rendering with the path of `entry` marked.
    pub fn render_path(&self, entry: &str) -> Result<String, JsValue> {
        let entry: EdgeDescriptor = entry.parse().map_err(to_js)?;
        let path = trace(&self.inner, entry, max_ticks(&self.inner)).map_err(to_js)?;
        Ok(self.inner.render_path(&path))
    }

    /// Flat `[entry, exit, entry, exit, ...]` list for every edge cell.
    pub fn simulate_all(&self) -> Vec<String> {
        simulate_all(&self.inner)
            .into_iter()
            .flat_map(|(entry, exit)| [entry.to_string(), exit.to_string()])
            .collect()
    }
}
