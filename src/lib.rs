#![cfg(target_arch = "wasm32")]
use crate::engine::{Cell, CubesConfig, CubesEffect, TweenAnimator};
use crate::render::SceneRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod engine;
mod events;
mod frame;
mod render;

struct Mounted {
    effect: events::SharedEffect,
    listeners: events::Listeners,
    frame_loop: frame::FrameLoop,
}

// Runs on `destroy()` and when JS frees the handle: the frame loop holds
// itself alive and the listeners must not outlive their closures.
impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.listeners.detach();
        if let Ok(mut effect) = self.effect.try_borrow_mut() {
            effect.destroy();
            effect.animator_mut().clear();
        }
        log::info!("[cubes] destroyed");
    }
}

fn parse_options(options: &JsValue) -> anyhow::Result<CubesConfig> {
    if options.is_undefined() || options.is_null() {
        return Ok(CubesConfig::default());
    }
    let json: String = js_sys::JSON::stringify(options)
        .map_err(|e| anyhow::anyhow!("options are not serializable: {:?}", e))?
        .into();
    Ok(CubesConfig::from_json(&json)?)
}

/// Build the scene into the configured container and start the effect.
/// `Ok(None)` leaves the effect inert when the container is missing.
fn mount(config: CubesConfig) -> anyhow::Result<Option<Mounted>> {
    let Some(container) = dom::find_container(&config.container)? else {
        log::warn!("[cubes] container {:?} not found, effect inert", config.container);
        return Ok(None);
    };
    let scene = dom::build_scene(&container, &config)?;
    let grid = engine::Grid::new(config.grid_size);
    let mut tweens = TweenAnimator::new(grid, config.face_rgba()?);
    // events before the first frame are stamped with the mount time
    tweens.set_clock(instant::now() / 1000.0);
    let renderer = SceneRenderer::new(&scene);

    let mut effect = CubesEffect::new(config, tweens, rand::random())?;
    effect.initialize();
    let effect = Rc::new(RefCell::new(effect));

    let listeners = events::wire_input_handlers(&events::InputWiring {
        scene: scene.element.clone(),
        effect: effect.clone(),
    });

    let effect_tick = effect.clone();
    let frame_loop = frame::start_loop(move |now_ms| {
        let mut fx = effect_tick.borrow_mut();
        let (advance, _) = fx.tick(now_ms);
        renderer.write(&advance, fx.animator());
    });

    log::info!("[cubes] mounted {}x{} grid", grid.size(), grid.size());
    Ok(Some(Mounted {
        effect,
        listeners,
        frame_loop,
    }))
}

fn to_js(e: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{e:#}")).into()
}

/// Tilt-grid effect handle exported to JS.
#[wasm_bindgen]
pub struct Cubes {
    mounted: Option<Mounted>,
}

impl Cubes {
    fn with_config(config: CubesConfig) -> Result<Cubes, JsValue> {
        let mounted = mount(config).map_err(to_js)?;
        Ok(Cubes { mounted })
    }
}

#[wasm_bindgen]
impl Cubes {
    /// Build and start the effect from a plain options object (all fields
    /// optional). Throws on invalid options.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Cubes, JsValue> {
        let config = parse_options(&options).map_err(to_js)?;
        Self::with_config(config)
    }

    /// The energy dashboard preset, mounted into `#cubesContainer`.
    pub fn dashboard() -> Result<Cubes, JsValue> {
        Self::with_config(CubesConfig::dashboard())
    }

    /// False when the container was missing or after `destroy`.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter, js_name = userActive)]
    pub fn user_active(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.effect.borrow().is_user_active())
    }

    /// Ripple from a cell as if it had been clicked. Returns the number of
    /// rings scheduled.
    #[wasm_bindgen(js_name = rippleAt)]
    pub fn ripple_at(&self, row: u32, col: u32) -> u32 {
        let Some(m) = self.mounted.as_ref() else {
            return 0;
        };
        let cell = Cell::new(row as usize, col as usize);
        let mut effect = m.effect.borrow_mut();
        if !effect.grid().contains(cell) {
            return 0;
        }
        effect.trigger_ripple(cell) as u32
    }

    /// Stop the frame loop, detach listeners and cancel pending work.
    /// Repeated calls do nothing.
    pub fn destroy(&mut self) {
        // dropping the mount tears it down
        drop(self.mounted.take());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cubes-web starting");
    Ok(())
}
