//! English Horizon entry point
//!
//! On the web this runs the landing page: resolve the mode, redirect to the
//! matching dashboard and keep the offline banner in sync. Natively it runs
//! the same flow against an in-memory store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use english_horizon::platform::{KeyValueStore, LocationNavigator, open_store};
    use english_horizon::{ConnectivityStatus, ModeSelector, OfflineIndicator, RedirectController};

    fn set_hidden(id: &str, hidden: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn redirect_with<S: KeyValueStore>(store: S) {
        let mut selector = ModeSelector::new(store);
        let mut controller = RedirectController::new();
        let mut navigator = LocationNavigator;

        set_hidden("loading", !controller.is_loading());
        controller.observe(selector.current(), &mut navigator);

        selector.on_init();
        controller.observe(selector.current(), &mut navigator);
        set_hidden("loading", !controller.is_loading());
    }

    fn setup_offline_banner() {
        let Some(window) = web_sys::window() else {
            return;
        };

        let indicator = Rc::new(RefCell::new(OfflineIndicator::from_platform()));
        set_hidden("offline-banner", !indicator.borrow().is_banner_visible());

        for (event, status) in [
            ("online", ConnectivityStatus::Online),
            ("offline", ConnectivityStatus::Offline),
        ] {
            let indicator = indicator.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut ind = indicator.borrow_mut();
                if ind.set_status(status) {
                    set_hidden("offline-banner", !ind.is_banner_visible());
                }
            });
            let _ =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("English Horizon starting...");

        setup_offline_banner();

        redirect_with(&*open_store());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use english_horizon::consts::MODE_STORAGE_KEY;
    use english_horizon::platform::{KeyValueStore, MemoryStore, RecordingNavigator};
    use english_horizon::{GameKey, ModeSelector, ProgressStore, RedirectController};

    env_logger::init();
    log::info!("English Horizon (native) starting...");
    log::info!("Native mode uses an in-memory store - serve the wasm build for the web version");

    // Optional stored mode to simulate, e.g. `english-horizon teacher`
    let store = MemoryStore::new();
    if let Some(raw) = std::env::args().nth(1) {
        if let Err(e) = store.set(MODE_STORAGE_KEY, &raw) {
            log::warn!("Could not seed mode: {}", e);
        }
    }

    let mut selector = ModeSelector::new(&store);
    let mut controller = RedirectController::new();
    let mut navigator = RecordingNavigator::new();

    selector.on_init();
    controller.observe(selector.current(), &mut navigator);

    let progress = ProgressStore::new(&store);
    let record = progress.complete_game(GameKey::AiQuest);

    println!("mode:     {:?}", selector.current());
    println!("redirect: {:?}", navigator.visited);
    println!(
        "progress: {}/{} games, {} xp",
        record.completed_count(),
        GameKey::ALL.len(),
        record.xp
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
