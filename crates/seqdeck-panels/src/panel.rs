#![forbid(unsafe_code)]

//! Panel tree node.
//!
//! A [`Panel`] is either a named group whose children are leaves, or a leaf
//! carrying one control label. Grouping never produces grandchildren, but the
//! type itself does not forbid them so hosts can build their own trees.

/// A node in the panel hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    pub(crate) name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) children: Vec<Panel>,
}

impl Panel {
    /// Create an empty panel with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a leaf entry for a single control label.
    #[must_use]
    pub fn leaf(label: impl Into<String>) -> Self {
        Self::new(label)
    }

    /// Add a child entry.
    #[must_use]
    pub fn child(mut self, node: Panel) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Panel>) -> Self {
        self.children = nodes;
        self
    }

    /// Display label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child entries in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Panel] {
        &self.children
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of leaves below this node. A leaf counts itself.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            return 1;
        }
        self.children.iter().map(Panel::leaf_count).sum()
    }

    /// Iterate over the child labels.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(Panel::name)
    }
}

/// Total number of child entries across a root panel list.
#[must_use]
pub fn leaf_total(panels: &[Panel]) -> usize {
    panels.iter().map(|panel| panel.children.len()).sum()
}

/// Find a root panel by name.
#[must_use]
pub fn find_panel<'a>(panels: &'a [Panel], name: &str) -> Option<&'a Panel> {
    panels.iter().find(|panel| panel.name == name)
}
