use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::{self, Config};
use crate::controller::ThemeController;
use crate::host::{ColorScheme, Node, Store};

const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

type WebController = ThemeController<LocalStorage, MediaQuery, web_sys::Element>;

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage(Option<web_sys::Storage>);

impl LocalStorage {
    pub fn new(window: &web_sys::Window) -> Self {
        match window.local_storage() {
            Ok(storage) => LocalStorage(storage),
            Err(e) => {
                tracing::warn!("localStorage unavailable: {e:?}");
                LocalStorage(None)
            }
        }
    }
}

impl Store for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.0.as_ref()?;
        storage.get_item(key).unwrap_or_else(|e| {
            tracing::warn!("reading {key:?} failed: {e:?}");
            None
        })
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(ref storage) = self.0 {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("writing {key:?} failed: {e:?}");
            }
        }
    }
}

#[derive(Clone)]
pub struct MediaQuery(Option<web_sys::MediaQueryList>);

impl MediaQuery {
    pub fn new(window: &web_sys::Window) -> Self {
        MediaQuery(window.match_media(LIGHT_QUERY).unwrap_or_else(|e| {
            tracing::debug!("matchMedia unavailable: {e:?}");
            None
        }))
    }

    /// Calls `f` whenever the query flips. Uses `addEventListener` where
    /// `MediaQueryList` is an event target and the legacy `addListener`
    /// otherwise.
    fn on_change(&self, f: impl FnMut() + 'static) {
        let Some(ref list) = self.0 else {
            return;
        };
        let callback = Closure::<dyn FnMut()>::new(f);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        if let Err(e) = list.add_event_listener_with_callback("change", function) {
            tracing::debug!("addEventListener failed, falling back to addListener: {e:?}");
            if let Err(e) = list.add_listener_with_opt_callback(Some(function)) {
                tracing::warn!("can't watch {LIGHT_QUERY}: {e:?}");
            }
        }
        callback.forget();
    }
}

impl ColorScheme for MediaQuery {
    fn prefers_light(&self) -> bool {
        self.0.as_ref().map(|q| q.matches()).unwrap_or(false)
    }
}

impl Node for web_sys::Element {
    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(e) = self.set_attribute(name, value) {
            tracing::warn!("setting {name}={value:?} failed: {e:?}");
        }
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Reads `window.themeConfig`, falling back to the defaults.
pub fn load_config(window: &web_sys::Window) -> Config {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(config::GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return Config::default(),
    };
    let json = match js_sys::JSON::stringify(&value) {
        Ok(json) => String::from(json),
        Err(e) => {
            tracing::warn!("window.{} is not serializable: {e:?}", config::GLOBAL);
            return Config::default();
        }
    };
    Config::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!("ignoring window.{}: {e}", config::GLOBAL);
        Config::default()
    })
}

pub fn init_theme_toggle() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let config = load_config(&window);
    let control = document.get_element_by_id(&config.toggle_id);

    let scheme = MediaQuery::new(&window);
    let query = scheme.clone();
    let Some(controller) = ThemeController::mount(
        config,
        LocalStorage::new(&window),
        scheme,
        root,
        control,
    ) else {
        return;
    };
    let controller: Rc<WebController> = Rc::new(controller);

    let ctl = Rc::clone(&controller);
    let click = Closure::<dyn FnMut()>::new(move || {
        ctl.toggle();
    });
    if let Err(e) = controller
        .control()
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
    {
        tracing::warn!("can't listen for clicks: {e:?}");
    }
    click.forget();

    query.on_change(move || {
        controller.system_changed();
    });
}

/// Whether `document.readyState` means the DOM isn't parsed yet.
fn should_defer(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Runs `init_theme_toggle` now, or once the DOM is parsed if it isn't yet.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if !should_defer(&document.ready_state()) {
        init_theme_toggle();
        return;
    }
    let ready = Closure::once_into_js(init_theme_toggle);
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
    {
        tracing::warn!("can't wait for DOMContentLoaded: {e:?}");
    }
}

#[test]
fn test_should_defer() {
    assert!(should_defer("loading"));
    assert!(!should_defer("interactive"));
    assert!(!should_defer("complete"));
    assert!(!should_defer(""));
}
