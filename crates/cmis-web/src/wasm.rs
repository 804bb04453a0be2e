#![forbid(unsafe_code)]

//! `wasm-bindgen` exports and DOM adapters for [`crate::page_core`].
//!
//! Only compiled on `wasm32` targets.

use std::cell::RefCell;

use cmis_core::config::id_selector;
use cmis_core::{PageConfig, PageError, RowVisibility, TriggerAttributes};
use js_sys::Reflect;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement};

use crate::logging;
use crate::page_core::{AlertSink, DialogTargets, FilterableRow, PageHandlers};

thread_local! {
    /// Config from the last `installPageScripts` call; read by the form gate.
    static ACTIVE_CONFIG: RefCell<Option<PageConfig>> = const { RefCell::new(None) };
    /// Listeners attached by the last `installPageScripts` call.
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

/// An attached DOM listener; detached on drop.
struct Listener {
    target: EventTarget,
    event: String,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, PageError> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| dom_error(event, &err))?;
        Ok(Self {
            target: target.clone(),
            event: event.to_owned(),
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(&self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Detach everything a previous install attached.
fn detach_listeners() -> usize {
    let previous = LISTENERS.with(|cell| std::mem::take(&mut *cell.borrow_mut()));
    let count = previous.len();
    drop(previous);
    count
}

fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

fn page_error_to_js(err: PageError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn dom_error(context: &str, err: &JsValue) -> PageError {
    let detail = err
        .as_string()
        .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{err:?}"));
    PageError::Dom(format!("{context}: {detail}"))
}

fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PageError::Dom("no document available".to_owned()))
}

fn input_by_id(document: &Document, id: &str) -> Result<Option<HtmlInputElement>, PageError> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    element
        .dyn_into::<HtmlInputElement>()
        .map(Some)
        .map_err(|_| PageError::unexpected(id_selector(id), "an input element"))
}

fn required_input(document: &Document, id: &str) -> Result<HtmlInputElement, PageError> {
    input_by_id(document, id)?.ok_or_else(|| PageError::missing(id_selector(id)))
}

/// Accepts `undefined`/`null`, a JSON string, or a plain object.
fn parse_options(options: Option<JsValue>) -> Result<PageConfig, PageError> {
    let Some(options) = options else {
        return Ok(PageConfig::default());
    };
    if options.is_null() || options.is_undefined() {
        return Ok(PageConfig::default());
    }
    if let Some(json) = options.as_string() {
        return PageConfig::from_json(&json);
    }
    let json = js_sys::JSON::stringify(&options)
        .map_err(|err| dom_error("options are not serializable", &err))?;
    PageConfig::from_json(&String::from(json))
}

fn active_config() -> PageConfig {
    ACTIVE_CONFIG.with(|cell| cell.borrow().clone().unwrap_or_default())
}

struct DomRow(HtmlElement);

impl FilterableRow for DomRow {
    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_visibility(&mut self, visibility: RowVisibility) {
        if let Err(err) = self
            .0
            .style()
            .set_property("display", visibility.display_value())
        {
            warn!(target: "cmis_web::filter", error = ?err, "failed to set row display");
        }
    }
}

fn collect_rows(document: &Document, selector: &str) -> Result<Vec<DomRow>, PageError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|err| dom_error(selector, &err))?;
    let rows = (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomRow)
        .collect();
    Ok(rows)
}

struct DomDialogTargets {
    name: Option<Element>,
    id: Option<Element>,
}

impl DomDialogTargets {
    fn lookup(modal: &Element, config: &PageConfig) -> Self {
        let find = |selector: &str| modal.query_selector(selector).ok().flatten();
        Self {
            name: find(&config.name_target_selector),
            id: find(&config.id_target_selector),
        }
    }
}

impl DialogTargets for DomDialogTargets {
    fn set_student_name(&mut self, name: &str) {
        match &self.name {
            Some(target) => target.set_text_content(Some(name)),
            None => warn!(target: "cmis_web::dialog", "dialog has no student name target"),
        }
    }

    fn set_student_id(&mut self, id: &str) {
        let Some(target) = &self.id else {
            warn!(target: "cmis_web::dialog", "dialog has no student id target");
            return;
        };
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            input.set_value(id);
        } else if let Err(err) = target.set_attribute("value", id) {
            warn!(target: "cmis_web::dialog", error = ?err, "failed to set student id");
        }
    }
}

/// Bootstrap puts the opening control on `event.relatedTarget`.
fn trigger_attributes(event: &Event, config: &PageConfig) -> Option<TriggerAttributes> {
    let related = Reflect::get(event.as_ref(), &JsValue::from_str("relatedTarget")).ok()?;
    let control = related.dyn_into::<Element>().ok()?;
    Some(TriggerAttributes {
        student_id: control.get_attribute(&config.student_id_attr),
        student_name: control.get_attribute(&config.student_name_attr),
    })
}

struct WindowAlerts;

impl AlertSink for WindowAlerts {
    fn alert(&mut self, message: &str) {
        let Some(window) = web_sys::window() else {
            console_error(message);
            return;
        };
        if window.alert_with_message(message).is_err() {
            console_error(message);
        }
    }
}

fn register_row_filter(
    document: &Document,
    handlers: &PageHandlers,
) -> Result<Option<(Listener, u32)>, PageError> {
    let config = handlers.config();
    let Some(input) = input_by_id(document, &config.search_input_id)? else {
        debug!(
            target: "cmis_web::filter",
            id = %config.search_input_id,
            "no search input on this page"
        );
        return Ok(None);
    };
    let row_count = collect_rows(document, &config.row_selector)?.len() as u32;

    let doc = document.clone();
    let source = input.clone();
    let handlers = handlers.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let selector = &handlers.config().row_selector;
        match collect_rows(&doc, selector) {
            Ok(mut rows) => {
                handlers.on_search_input(&source.value(), rows.as_mut_slice());
            }
            Err(err) => warn!(target: "cmis_web::filter", error = %err, "row lookup failed"),
        }
    });
    let listener = Listener::attach(&input, "input", on_input)?;
    Ok(Some((listener, row_count)))
}

fn register_dialog_populator(
    document: &Document,
    handlers: &PageHandlers,
) -> Result<Option<Listener>, PageError> {
    let config = handlers.config();
    let Some(modal) = document.get_element_by_id(&config.delete_modal_id) else {
        return Ok(None);
    };

    let root = modal.clone();
    let handlers = handlers.clone();
    let on_open = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let config = handlers.config();
        let trigger = trigger_attributes(&event, config);
        let mut targets = DomDialogTargets::lookup(&root, config);
        handlers.on_dialog_open(trigger.as_ref(), &mut targets);
    });
    Listener::attach(&modal, &config.modal_open_event, on_open).map(Some)
}

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
}

/// What `installPageScripts` wired up on the current page.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageScripts {
    filter_registered: bool,
    dialog_registered: bool,
    row_count: u32,
}

#[wasm_bindgen]
impl PageScripts {
    #[wasm_bindgen(getter, js_name = filterRegistered)]
    pub fn filter_registered(&self) -> bool {
        self.filter_registered
    }

    #[wasm_bindgen(getter, js_name = dialogRegistered)]
    pub fn dialog_registered(&self) -> bool {
        self.dialog_registered
    }

    /// Rows matched by the row selector at install time.
    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> u32 {
        self.row_count
    }
}

/// Register the marks filter and the delete-dialog populator.
///
/// `options` may be omitted, a JSON string, or an object overriding any
/// [`PageConfig`] field. Calling it again detaches the listeners of the
/// previous call before attaching new ones.
#[wasm_bindgen(js_name = installPageScripts)]
pub fn install_page_scripts(options: Option<JsValue>) -> Result<PageScripts, JsValue> {
    install_panic_hook();
    let config = parse_options(options).map_err(page_error_to_js)?;
    logging::init(&config.log_level);

    let document = document().map_err(page_error_to_js)?;
    let detached = detach_listeners();
    let handlers = PageHandlers::new(config.clone());
    let filter = register_row_filter(&document, &handlers).map_err(page_error_to_js)?;
    let dialog = register_dialog_populator(&document, &handlers).map_err(page_error_to_js)?;

    let scripts = PageScripts {
        filter_registered: filter.is_some(),
        dialog_registered: dialog.is_some(),
        row_count: filter.as_ref().map_or(0, |(_, rows)| *rows),
    };
    LISTENERS.with(|cell| {
        let mut listeners = cell.borrow_mut();
        listeners.extend(filter.map(|(listener, _)| listener));
        listeners.extend(dialog);
    });
    ACTIVE_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));

    debug!(
        target: "cmis_web::install",
        filter = scripts.filter_registered,
        dialog = scripts.dialog_registered,
        rows = scripts.row_count,
        detached,
        "page scripts installed"
    );
    Ok(scripts)
}

/// Submit-time gate for the registration and password-reset forms:
/// `<form onsubmit="return validateRegisterForm()">`.
///
/// Throws if either password field is missing.
#[wasm_bindgen(js_name = validateRegisterForm)]
pub fn validate_register_form() -> Result<bool, JsValue> {
    let config = active_config();
    let document = document().map_err(page_error_to_js)?;
    let password = required_input(&document, &config.password_id).map_err(page_error_to_js)?;
    let confirm =
        required_input(&document, &config.confirm_password_id).map_err(page_error_to_js)?;
    let handlers = PageHandlers::new(config);
    Ok(handlers.on_register_submit(&password.value(), &confirm.value(), &mut WindowAlerts))
}
