use std::hash::Hash;

use web_sys::{Document, Node as WsNode};

use super::{EventRegistry, Location, Node, NodeType};
use crate::error::{Error, Result};

/// Used to build and represent a [`Fragment`] that does not yet have access to the [`Document`].
///
/// Each node records the index of the node it should be mounted in. [`Option::None`] places it
/// at the root of the fragment, so a fragment may have several roots.
#[derive(Debug, Clone)]
pub struct FragmentBuilder<A> {
    nodes: Vec<(Option<usize>, Node<A>)>,
}

impl<A> Default for FragmentBuilder<A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<A> FragmentBuilder<A>
where
    A: 'static + Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, mounted within the node at index `location`.
    pub fn with_node(mut self, node: Node<A>, location: Option<usize>) -> Self {
        debug_assert!(
            location.map_or(true, |parent| parent < self.nodes.len()),
            "parent must be added before its children"
        );

        self.nodes.push((location, node));
        self
    }

    pub fn with_element<S>(self, kind: S, location: Option<usize>) -> Self
    where
        S: AsRef<str>,
    {
        self.with_node(Node::element(kind), location)
    }

    pub fn with_text<S>(self, content: S, location: Option<usize>) -> Self
    where
        S: AsRef<str>,
    {
        self.with_node(Node::text(content), location)
    }

    /// Index the next added node will receive.
    pub fn next_index(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<A>> {
        self.nodes.iter().map(|(_, node)| node)
    }

    /// Find the element carrying the `id` attribute.
    pub fn find(&self, id: &str) -> Option<&Node<A>> {
        self.nodes().find(|node| node.attribute("id") == Some(id))
    }

    /// Concatenated content of every text node, in insertion order.
    pub fn text(&self) -> String {
        self.nodes()
            .filter_map(|node| match node.node_type() {
                NodeType::Text(text) => Some(text.as_str()),
                NodeType::Element(_) => None,
            })
            .collect()
    }

    /// Every action bound within the fragment, with the event that triggers it.
    pub fn events(&self) -> impl Iterator<Item = (&str, &A)> {
        self.nodes().flat_map(|node| node.events())
    }

    /// Use the reference to [`Document`] to create every node within this builder. Returns the
    /// constructed fragment, ready to be mounted.
    pub fn build(self, document: &Document, event_registry: &EventRegistry<A>) -> Result<Fragment> {
        let mut static_nodes = Vec::with_capacity(self.nodes.len());

        for (location, node) in self.nodes {
            static_nodes.push((location, node.create_node(document, event_registry)?));
        }

        Ok(Fragment { static_nodes })
    }
}

/// A built collection of [`web_sys::Node`]s.
pub struct Fragment {
    /// Collection of static [`web_sys::Node`]s, and a reference to the static node that it should
    /// be mounted in.
    static_nodes: Vec<(Option<usize>, WsNode)>,
}

impl Fragment {
    /// Mount every root node at `location`, and every other node within its parent.
    pub fn mount(&self, location: &Location) -> Result<()> {
        for (parent_id, node) in &self.static_nodes {
            match parent_id {
                Some(parent_id) => {
                    let (_, parent) = self.static_nodes.get(*parent_id).ok_or_else(|| {
                        Error::MissingElement(format!("fragment node {parent_id}"))
                    })?;

                    Location::parent(parent).mount(node)?;
                }
                None => location.mount(node)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_lookup_follow_insertion_order() {
        let fragment = FragmentBuilder::<u8>::new()
            .with_node(Node::element("tr").with_id("row"), None)
            .with_element("td", Some(0))
            .with_text("Sheet ", Some(1))
            .with_text("1", Some(1))
            .with_node(Node::element("a").with_event("click", 4), Some(0));

        assert_eq!(fragment.text(), "Sheet 1");
        assert_eq!(fragment.next_index(), 5);
        assert!(fragment.find("row").is_some());
        assert!(fragment.find("missing").is_none());
        assert_eq!(fragment.events().collect::<Vec<_>>(), vec![("click", &4)]);
    }
}
