//! Browser view and page entry point for WASM builds
//!
//! Binds the course page to the `<ul id="courses">` list and the
//! `<form id="addCourse">` form of the host document.

use std::rc::Rc;

use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

use crate::app::page::CoursePage;
use crate::app::render::ListState;
use crate::client::gloo::WasmClient;
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseView, HttpClient};

pub const LIST_ID: &str = "courses";
pub const FORM_ID: &str = "addCourse";
pub const TITLE_FIELD: &str = "title";

#[derive(Debug, Clone)]
pub struct DomView {
    document: Document,
    list: Element,
    form: HtmlFormElement,
}

impl DomView {
    /// Look up the list and form elements in the current document.
    pub fn attach() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ErrorKind::DomError("no document available".to_string()))?;

        let list = document
            .get_element_by_id(LIST_ID)
            .ok_or_else(|| ErrorKind::DomError(format!("element #{LIST_ID} not found")))?;

        let form = document
            .get_element_by_id(FORM_ID)
            .ok_or_else(|| ErrorKind::DomError(format!("element #{FORM_ID} not found")))?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| ErrorKind::DomError(format!("#{FORM_ID} is not a <form>")))?;

        Ok(Self {
            document,
            list,
            form,
        })
    }

    /// Current raw value of the title field.
    pub fn form_title(&self) -> String {
        FormData::new_with_form(&self.form)
            .ok()
            .and_then(|data| data.get(TITLE_FIELD).as_string())
            .unwrap_or_default()
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl CourseView for DomView {
    fn render_list(&self, state: &ListState) {
        // drops every existing child
        self.list.set_text_content(None);

        for text in state.items() {
            match self.document.create_element("li") {
                Ok(item) => {
                    item.set_text_content(Some(&text));
                    if let Err(e) = self.list.append_child(&item) {
                        log::error!("failed to append list item: {e:?}");
                    }
                }
                Err(e) => log::error!("failed to create list item: {e:?}"),
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

/// Wire the page up: submit handler first, then the initial list load.
async fn mount() -> Result<()> {
    let view = DomView::attach()?;
    let api = WasmClient::new("").await?;
    let page = Rc::new(CoursePage::new(api, view));

    let on_submit = {
        let page = Rc::clone(&page);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let page = Rc::clone(&page);
            let title = page.view().form_title();
            spawn_local(async move {
                page.submit_course(&title).await;
            });
        })
    };
    page.view()
        .form()
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // the listener lives as long as the page
    on_submit.forget();

    page.render_courses().await;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("course page starting");

    spawn_local(async {
        if let Err(e) = mount().await {
            log::error!("failed to mount course page: {e}");
        }
    });

    Ok(())
}
