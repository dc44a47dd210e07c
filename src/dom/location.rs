use web_sys::Node as WsNode;

use crate::error::Result;

/// Expresses a location in the DOM that [`super::Fragment`]s are mounted into. Nodes are always
/// appended, so mounting fragments in sequence keeps their order.
#[derive(Clone)]
pub struct Location {
    /// The parent to mount the [`web_sys::Node`] within.
    parent: WsNode,
}

impl Location {
    /// Create a location from a parent.
    pub fn parent<N>(parent: &N) -> Self
    where
        N: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
        }
    }

    /// Use the location to mount the provided [`web_sys::Node`]. Assumes that the parent is
    /// mounted.
    pub fn mount<N>(&self, node: &N) -> Result<()>
    where
        N: AsRef<WsNode>,
    {
        self.parent.append_child(node.as_ref())?;

        Ok(())
    }

    /// Remove every child of the parent.
    pub fn clear(&self) -> Result<()> {
        while let Some(child) = self.parent.first_child() {
            self.parent.remove_child(&child)?;
        }

        Ok(())
    }
}
