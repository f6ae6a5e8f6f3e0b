use crate::msg::content::reply::{NodeKind, NodeStat};
use chrono::Utc;

/// Stable identity of a node within the tree, constant for the lifetime of
/// the process and never reused.
pub type NodeId = u64;

pub const NODE_ROOT: NodeId = 0;
pub const NODE_INTEGER: NodeId = 1;
pub const NODE_REAL: NodeId = 2;

/// Directory flag within a node's permission word
pub const PERM_DIR: u32 = 0x8000_0000;

/// One fixed entry in the virtual tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub name: &'static str,
    pub id: NodeId,
    pub kind: NodeKind,
    pub perm: u32,
}

impl Node {
    pub fn is_dir(&self) -> bool {
        self.perm & PERM_DIR != 0
    }
}

static ROOT: Node = Node {
    name: "/",
    id: NODE_ROOT,
    kind: NodeKind::Directory,
    perm: 0o555 | PERM_DIR,
};

// Listed in the order directory reads yield them
static ROOT_CHILDREN: [Node; 2] = [
    Node {
        name: "integer",
        id: NODE_INTEGER,
        kind: NodeKind::IntegerFile,
        perm: 0o444,
    },
    Node {
        name: "real",
        id: NODE_REAL,
        kind: NodeKind::RealFile,
        perm: 0o444,
    },
];

pub fn root() -> &'static Node {
    &ROOT
}

pub fn children() -> &'static [Node] {
    &ROOT_CHILDREN
}

/// Looks up a node by its identity
pub fn node_by_id(id: NodeId) -> Option<&'static Node> {
    if id == ROOT.id {
        return Some(&ROOT);
    }
    ROOT_CHILDREN.iter().find(|node| node.id == id)
}

/// Resolves one walk step from `parent` to the named child. From the root,
/// child names resolve to their nodes and `..` resolves back to the root;
/// every other combination has no target. The tree itself never changes at
/// runtime.
pub fn walk_step(parent: NodeId, name: &str) -> Option<&'static Node> {
    if parent != NODE_ROOT {
        return None;
    }

    if name == ".." {
        return Some(&ROOT);
    }

    ROOT_CHILDREN.iter().find(|node| node.name == name)
}

/// Builds the metadata record for a node as seen by `uname`
pub fn stat_record(node: &Node, uname: &str) -> NodeStat {
    let now = Utc::now();

    NodeStat {
        name: node.name.to_string(),
        node_id: node.id,
        kind: node.kind,
        perm: node.perm,
        length: 0,
        owner: uname.to_string(),
        group: uname.to_string(),
        modified_by: uname.to_string(),
        accessed: now,
        modified: now,
    }
}
