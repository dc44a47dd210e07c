use std::hash::Hash;

use web_sys::{Document, Node as WsNode};

use super::EventRegistry;
use crate::error::Result;

/// Information required to build a [`web_sys::Node`]. Offers a friendly interface for creating new
/// [`web_sys::Node`]s, and allows for programatic access to certain attributes before creation
/// (namely whether the node is a text node or an element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A [`web_sys::Text`] node. Containing [`String`] refers to the content of the generated text
    /// node, which will be passed to [`Document::create_text_node()`]. Text is never parsed as
    /// markup, so names coming from the backend cannot inject elements.
    Text(String),

    /// A [`web_sys::Element`] node. Containing [`String`] refers to the element type (eg `tr`,
    /// `div`), which will be passed to [`Document::create_element()`].
    Element(String),
}

/// Description of a single DOM node, including its attributes and the actions it triggers.
#[derive(Debug, Clone)]
pub struct Node<A> {
    node_type: NodeType,
    attributes: Vec<(String, String)>,
    events: Vec<(String, A)>,
}

impl<A> Node<A>
where
    A: 'static + Clone + Eq + Hash,
{
    pub fn text<S>(content: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            node_type: NodeType::Text(content.as_ref().to_string()),
            attributes: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn element<S>(kind: S) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            node_type: NodeType::Element(kind.as_ref().to_string()),
            attributes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Set an attribute on the element. Ignored for text nodes when built.
    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.attributes
            .push((name.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    pub fn with_id<S>(self, id: S) -> Self
    where
        S: AsRef<str>,
    {
        self.with_attribute("id", id)
    }

    pub fn with_class<S>(self, class: S) -> Self
    where
        S: AsRef<str>,
    {
        self.with_attribute("class", class)
    }

    /// Dispatch `action` whenever `event_type` fires on this node.
    pub fn with_event<S>(mut self, event_type: S, action: A) -> Self
    where
        S: AsRef<str>,
    {
        self.events.push((event_type.as_ref().to_string(), action));
        self
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|(attribute, _)| attribute == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn events(&self) -> impl Iterator<Item = (&str, &A)> {
        self.events
            .iter()
            .map(|(event_type, action)| (event_type.as_str(), action))
    }

    /// Build a [`web_sys::Node`] based off of the current node representation, binding every
    /// event through the registry.
    pub fn create_node(
        &self,
        document: &Document,
        event_registry: &EventRegistry<A>,
    ) -> Result<WsNode> {
        let node: WsNode = match &self.node_type {
            NodeType::Element(element_kind) => {
                let element = document.create_element(element_kind)?;

                for (name, value) in &self.attributes {
                    element.set_attribute(name, value)?;
                }

                element.into()
            }
            NodeType::Text(text_content) => document.create_text_node(text_content).into(),
        };

        for (event_type, action) in &self.events {
            event_registry.bind(&node, event_type, action.clone())?;
        }

        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_attributes_win() {
        let node = Node::<u8>::element("a")
            .with_attribute("style", "display: none")
            .with_attribute("style", "display: block");

        assert_eq!(node.attribute("style"), Some("display: block"));
        assert_eq!(node.attribute("href"), None);
    }

    #[test]
    fn events_are_recorded_in_order() {
        let node = Node::element("a")
            .with_event("click", 1u8)
            .with_event("dblclick", 2u8);

        let events = node.events().collect::<Vec<_>>();
        assert_eq!(events, vec![("click", &1), ("dblclick", &2)]);
    }
}
