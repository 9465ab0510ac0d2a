use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MindMapError {
    #[error("node text cannot be blank")]
    BlankText,

    #[error("unknown node {0}")]
    UnknownNode(u64),

    #[error("the root node cannot be removed")]
    RootProtected,
}

/// One node on the canvas. `parent` is `None` only for the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapNode {
    id: u64,
    text: String,
    x: f64,
    y: f64,
    parent: Option<u64>,
}

impl MindMapNode {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn parent(&self) -> Option<u64> {
        self.parent
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

const ROOT_X: f64 = 300.0;
const ROOT_Y: f64 = 120.0;
const BRANCH_RADIUS: f64 = 140.0;
// Golden-angle steps keep sibling branches spread without tracking geometry.
const BRANCH_STEP_RADIANS: f64 = 2.399_963_229_728_653;

/// A flat-list mind map with a fixed root, drag positioning, and
/// delete-with-direct-children semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    nodes: Vec<MindMapNode>,
    next_id: u64,
    selected: u64,
}

impl MindMap {
    /// Creates a map with a single root node at the canvas center.
    ///
    /// # Errors
    ///
    /// Returns `MindMapError::BlankText` for a blank root label.
    pub fn new(root_text: impl Into<String>) -> Result<Self, MindMapError> {
        let text = non_blank(root_text)?;
        Ok(Self {
            nodes: vec![MindMapNode {
                id: 1,
                text,
                x: ROOT_X,
                y: ROOT_Y,
                parent: None,
            }],
            next_id: 2,
            selected: 1,
        })
    }

    #[must_use]
    pub fn nodes(&self) -> &[MindMapNode] {
        &self.nodes
    }

    #[must_use]
    pub fn root_id(&self) -> u64 {
        1
    }

    #[must_use]
    pub fn selected(&self) -> u64 {
        self.selected
    }

    #[must_use]
    pub fn node(&self, id: u64) -> Option<&MindMapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Selects a node; a missing id falls back to the root.
    pub fn select(&mut self, id: u64) {
        self.selected = if self.node(id).is_some() {
            id
        } else {
            self.root_id()
        };
    }

    /// Adds a child of the selected node and returns its id.
    ///
    /// Children are placed on a ring around their parent, stepped by the
    /// golden angle so siblings fan out deterministically.
    ///
    /// # Errors
    ///
    /// Returns `MindMapError::BlankText` for blank text.
    pub fn add_branch(&mut self, text: impl Into<String>) -> Result<u64, MindMapError> {
        let text = non_blank(text)?;
        let parent_id = self.selected;
        let parent = self
            .node(parent_id)
            .ok_or(MindMapError::UnknownNode(parent_id))?;

        let siblings = self
            .nodes
            .iter()
            .filter(|n| n.parent == Some(parent_id))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let angle = siblings as f64 * BRANCH_STEP_RADIANS;
        let x = parent.x + angle.cos() * BRANCH_RADIUS;
        let y = parent.y + angle.sin() * BRANCH_RADIUS;

        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(MindMapNode {
            id,
            text,
            x,
            y,
            parent: Some(parent_id),
        });
        Ok(id)
    }

    /// Moves a node to absolute canvas coordinates.
    ///
    /// # Errors
    ///
    /// Returns `MindMapError::UnknownNode` for a missing id.
    pub fn move_node(&mut self, id: u64, x: f64, y: f64) -> Result<(), MindMapError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(MindMapError::UnknownNode(id))?;
        node.x = x;
        node.y = y;
        Ok(())
    }

    /// Removes a node and its direct children. The root is protected.
    ///
    /// Grandchildren keep their (now dangling) parent id; rendering simply
    /// draws no connector for them.
    ///
    /// # Errors
    ///
    /// Returns `MindMapError::RootProtected` for the root and
    /// `MindMapError::UnknownNode` for a missing id.
    pub fn remove(&mut self, id: u64) -> Result<(), MindMapError> {
        let node = self.node(id).ok_or(MindMapError::UnknownNode(id))?;
        if node.is_root() {
            return Err(MindMapError::RootProtected);
        }
        self.nodes
            .retain(|n| n.id != id && n.parent != Some(id));
        if self.node(self.selected).is_none() {
            self.selected = self.root_id();
        }
        Ok(())
    }
}

fn non_blank(text: impl Into<String>) -> Result<String, MindMapError> {
    let text = text.into().trim().to_owned();
    if text.is_empty() {
        Err(MindMapError::BlankText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_a_single_root() {
        let map = MindMap::new("My Business Idea").unwrap();
        assert_eq!(map.nodes().len(), 1);
        assert!(map.nodes()[0].is_root());
        assert_eq!(map.selected(), map.root_id());
    }

    #[test]
    fn branches_fan_out_around_the_parent() {
        let mut map = MindMap::new("root").unwrap();
        let a = map.add_branch("customers").unwrap();
        let b = map.add_branch("features").unwrap();
        assert_ne!(a, b);

        let (a, b) = (map.node(a).unwrap().clone(), map.node(b).unwrap().clone());
        assert_ne!((a.x(), a.y()), (b.x(), b.y()));
        let root = map.node(map.root_id()).unwrap();
        for n in [&a, &b] {
            let dist = ((n.x() - root.x()).powi(2) + (n.y() - root.y()).powi(2)).sqrt();
            assert!((dist - BRANCH_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn remove_takes_direct_children_along() {
        let mut map = MindMap::new("root").unwrap();
        let branch = map.add_branch("branch").unwrap();
        map.select(branch);
        let leaf = map.add_branch("leaf").unwrap();

        map.remove(branch).unwrap();
        assert!(map.node(branch).is_none());
        assert!(map.node(leaf).is_none());
        // selection falls back to root after its node vanished
        assert_eq!(map.selected(), map.root_id());
    }

    #[test]
    fn root_cannot_be_removed() {
        let mut map = MindMap::new("root").unwrap();
        assert_eq!(map.remove(map.root_id()), Err(MindMapError::RootProtected));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut map = MindMap::new("root").unwrap();
        assert_eq!(map.add_branch("  "), Err(MindMapError::BlankText));
        assert!(MindMap::new("   ").is_err());
    }

    #[test]
    fn move_updates_coordinates() {
        let mut map = MindMap::new("root").unwrap();
        let id = map.add_branch("n").unwrap();
        map.move_node(id, 10.0, 20.0).unwrap();
        let node = map.node(id).unwrap();
        assert_eq!((node.x(), node.y()), (10.0, 20.0));
        assert_eq!(map.move_node(99, 0.0, 0.0), Err(MindMapError::UnknownNode(99)));
    }

    #[test]
    fn select_falls_back_to_root_for_missing_id() {
        let mut map = MindMap::new("root").unwrap();
        map.select(42);
        assert_eq!(map.selected(), map.root_id());
    }
}
