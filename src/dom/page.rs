use std::hash::Hash;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use super::EventRegistry;
use crate::error::{Error, Result};

/// CSS `display` value for a visibility flag.
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Access to the static HTML template the views are rendered into.
#[derive(Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn new(window: &Window, document: &Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingElement(format!("#{id}")))
    }

    /// First element matching `selector`.
    pub fn select(&self, selector: &str) -> Result<Element> {
        self.document
            .query_selector(selector)?
            .ok_or_else(|| Error::MissingElement(selector.to_string()))
    }

    /// Every element matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self.document.query_selector_all(selector)?;

        Ok((0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    pub fn set_display(&self, element: &Element, visible: bool) -> Result<()> {
        if let Some(element) = element.dyn_ref::<HtmlElement>() {
            element.style().set_property("display", display(visible))?;
        }

        Ok(())
    }

    pub fn set_display_by_id(&self, id: &str, visible: bool) -> Result<()> {
        self.set_display(&self.element(id)?, visible)
    }

    /// Hide every `div` directly inside `#container`, then show `#visible`. Returns the number of
    /// panels hidden.
    pub fn show_only(&self, container: &str, visible: &str) -> Result<usize> {
        let panels = self.select_all(&format!("#{container} > div"))?;

        for panel in &panels {
            self.set_display(panel, false)?;
        }
        self.set_display_by_id(visible, true)?;

        Ok(panels.len())
    }

    /// Set the value of an `input`, `textarea` or `select`.
    pub fn set_value(&self, id: &str, value: &str) -> Result<()> {
        let element = self.element(id)?;

        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else {
            return Err(Error::MissingElement(format!("form field #{id}")));
        }

        Ok(())
    }

    pub fn set_text(&self, id: &str, text: &str) -> Result<()> {
        self.element(id)?.set_text_content(Some(text));

        Ok(())
    }

    /// The form nested in the panel `#panel`.
    pub fn form(&self, panel: &str) -> Result<HtmlFormElement> {
        self.document
            .query_selector(&format!("#{panel} form"))?
            .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| Error::MissingElement(format!("#{panel} form")))
    }

    /// Bind `action` to `event_type` on every element matching `selector`. Returns the number of
    /// elements bound.
    pub fn bind<A>(
        &self,
        event_registry: &EventRegistry<A>,
        selector: &str,
        event_type: &str,
        action: A,
    ) -> Result<usize>
    where
        A: 'static + Clone + Eq + Hash,
    {
        let elements = self.select_all(selector)?;

        for element in &elements {
            event_registry.bind(element, event_type, action.clone())?;
        }

        Ok(elements.len())
    }

    /// Blocking browser alert.
    pub fn alert(&self, message: &str) {
        if let Err(error) = self.window.alert_with_message(message) {
            log::error!("alert failed: {error:?}");
        }
    }

    /// Open `url` in a new browsing context.
    pub fn open(&self, url: &str) -> Result<()> {
        self.window.open_with_url(url)?;

        Ok(())
    }
}
