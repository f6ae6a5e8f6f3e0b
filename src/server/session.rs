use crate::msg::content::reply::NodeKind;

/// Default upper bound for integer files, matching the maximum magnitude of
/// a 31-bit draw
pub const DEFAULT_INTEGER_MAX: i64 = 0x7fff_ffff;

/// Numeric range `[min, max)` tracked for one open file handle.
///
/// Bounds are stored in whatever order they were last written; generators
/// reorder locally when sampling without touching the stored values.
#[derive(Clone, Debug, PartialEq)]
pub enum Range {
    Integer { min: i64, max: i64 },
    Real { min: f64, max: f64 },
}

impl Range {
    /// Produces the type-appropriate starting range for a node, or `None`
    /// for directories, which carry no numeric state
    pub fn default_for(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::IntegerFile => Some(Self::Integer {
                min: 0,
                max: DEFAULT_INTEGER_MAX,
            }),
            NodeKind::RealFile => Some(Self::Real { min: 0.0, max: 1.0 }),
            NodeKind::Directory => None,
        }
    }
}

/// Mutable state owned by one open file handle, created on open and
/// destroyed on release. Never shared: two opens of the same file hold two
/// fully independent sessions.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub range: Range,
}

impl Session {
    pub fn new_for(kind: NodeKind) -> Option<Self> {
        Range::default_for(kind).map(|range| Self { range })
    }
}
