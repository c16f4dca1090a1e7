//! Memphis Beauty entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlCanvasElement, ImageBitmap, MouseEvent, Response, TouchEvent};

    use memphis_beauty::anim::{AnimState, tick};
    use memphis_beauty::config::SceneParams;
    use memphis_beauty::input::normalize_pointer;
    use memphis_beauty::renderer::RenderState;
    use memphis_beauty::scene::{Scene, build_scene};

    const MATCAP_URL: &str = "assets/matcap.png";

    /// App instance holding all state
    struct App {
        anim: AnimState,
        scene: Scene,
        render_state: Option<RenderState>,
    }

    impl App {
        fn new(params: SceneParams, seed: u64, aspect: f32) -> Self {
            Self {
                anim: AnimState::new(&params, seed),
                scene: build_scene(aspect, seed),
                render_state: None,
            }
        }

        /// Advance the animation and mirror it into the scene graph
        fn update(&mut self, time: f64) {
            tick(&mut self.anim, time);
            self.scene.sync(&self.anim.transforms);
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.scene, &self.anim) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Memphis Beauty starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let params = SceneParams::load();
        let seed = js_sys::Date::now() as u64;
        let aspect = client_w as f32 / client_h.max(1) as f32;
        let app = Rc::new(RefCell::new(App::new(params.clone(), seed, aspect)));

        log::info!("Scene initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = {
            let a = app.borrow();
            RenderState::new(surface, &adapter, width, height, &a.scene, &params).await
        };
        app.borrow_mut().render_state = Some(render_state);

        // Fetch the matcap in the background; frames render with a
        // placeholder until (or if never) it arrives
        spawn_matcap_fetch(app.clone());

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(&canvas, app.clone());

        // Start animation loop
        request_animation_frame(app);

        log::info!("Memphis Beauty running!");
    }

    fn spawn_matcap_fetch(app: Rc<RefCell<App>>) {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_matcap().await {
                Ok(bitmap) => {
                    if let Some(ref mut render_state) = app.borrow_mut().render_state {
                        render_state.install_matcap(&bitmap);
                    }
                }
                Err(e) => {
                    log::warn!("Matcap fetch failed (scene continues): {:?}", e);
                }
            }
        });
    }

    async fn fetch_matcap() -> Result<ImageBitmap, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let response: Response = JsFuture::from(window.fetch_with_str(MATCAP_URL))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!(
                "matcap fetch returned {}",
                response.status()
            )));
        }
        let blob: web_sys::Blob = JsFuture::from(response.blob()?).await?.dyn_into()?;
        let bitmap: ImageBitmap = JsFuture::from(window.create_image_bitmap_with_blob(&blob)?)
            .await?
            .dyn_into()?;
        Ok(bitmap)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                let signal =
                    normalize_pointer(event.client_x() as f32, event.client_y() as f32, w, h);
                app.borrow_mut().anim.set_pointer(signal);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let w = canvas_clone.client_width() as f32;
                    let h = canvas_clone.client_height() as f32;
                    let signal =
                        normalize_pointer(touch.client_x() as f32, touch.client_y() as f32, w, h);
                    app.borrow_mut().anim.set_pointer(signal);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let client_w = canvas_clone.client_width();
            let client_h = canvas_clone.client_height();
            let width = (client_w as f64 * dpr) as u32;
            let height = (client_h as f64 * dpr) as u32;
            canvas_clone.set_width(width);
            canvas_clone.set_height(height);

            let mut a = app.borrow_mut();
            // Camera distance tier is fixed at startup; only the aspect follows
            a.scene
                .camera
                .set_aspect(client_w as f32 / client_h.max(1) as f32);
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(width, height);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            animation_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn animation_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Memphis Beauty (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Headless smoke run of the animation core
    println!("\nRunning animation smoke test...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use memphis_beauty::anim::{AnimState, PointerSignal, tick};
    use memphis_beauty::config::SceneParams;
    use memphis_beauty::scene::build_scene;

    let params = SceneParams::default();
    let mut state = AnimState::new(&params, 42);
    let mut scene = build_scene(16.0 / 9.0, 42);

    // Sweep the pointer across the view and step a few seconds of frames
    for frame in 0..240u32 {
        let t = frame as f64 * (1000.0 / 60.0);
        let x = (frame as f32 / 240.0) * 2.0 - 1.0;
        state.set_pointer(PointerSignal { x, y: 0.0 });
        tick(&mut state, t);
        scene.sync(&state.transforms);
    }

    assert!(state.entered_right, "pointer sweep should latch right");
    assert!(
        state.field.lines.iter().all(|l| l
            .dots
            .iter()
            .all(|d| d.y.is_finite() && d.y.abs() <= 8.0 + 1e-3)),
        "dot heights stay bounded"
    );
    println!("✓ Animation smoke test passed!");
}
