use thiserror::Error;

use crate::graph::VertexId;

macro_rules! malformed_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            line: $line,
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            line: $line,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant is a recoverable, caller-visible condition. Graph operations check all of
/// their preconditions before touching any state, so receiving one of these errors from a
/// mutating call means the graph is exactly as it was before the call.
///
/// Topological conditions are never errors: a graph that is not strongly connected yields
/// `false`, and a vertex that cannot be reached from a shortest-path start vertex simply maps
/// to itself in the predecessor map.
///
/// # Error Categories
///
/// ## Graph Contract Errors
/// - [`Error::VertexNotFound`] - A referenced vertex identifier is not in the graph
/// - [`Error::DuplicateVertex`] - A vertex identifier is already in use
/// - [`Error::EdgeNotFound`] - No edge exists for the given ordered pair
/// - [`Error::DuplicateEdge`] - An edge already exists for the given ordered pair
///
/// ## Input Errors
/// - [`Error::Malformed`] - Road map input text does not follow the expected layout
/// - [`Error::Io`] - Reading road map input failed
///
/// # Examples
///
/// ```rust
/// use roadgraph::{Digraph, Error, VertexId};
///
/// let mut graph: Digraph<&str, f64> = Digraph::new();
/// graph.add_vertex(VertexId::new(1), "Irvine")?;
///
/// match graph.add_vertex(VertexId::new(1), "Anaheim") {
///     Err(Error::DuplicateVertex(id)) => assert_eq!(id, VertexId::new(1)),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), roadgraph::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced vertex does not exist.
    ///
    /// Raised by every operation that takes a vertex identifier, including both endpoints of
    /// edge operations and the start vertex of a shortest-path query.
    #[error("Vertex {0} does not exist")]
    VertexNotFound(VertexId),

    /// A vertex with this identifier is already present.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(VertexId),

    /// Both endpoints exist, but there is no edge between them in this direction.
    #[error("Edge {from} -> {to} does not exist")]
    EdgeNotFound {
        /// Source vertex of the missing edge
        from: VertexId,
        /// Target vertex of the missing edge
        to: VertexId,
    },

    /// An edge for this ordered pair is already present.
    ///
    /// Parallel edges are not supported; the existing edge is left untouched.
    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge {
        /// Source vertex of the existing edge
        from: VertexId,
        /// Target vertex of the existing edge
        to: VertexId,
    },

    /// The road map input is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `line` - 1-based input line at which the problem was detected, or one past the last
    ///   line when the input ends early
    #[error("Malformed - line {line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The input line on which the problem was detected
        line: usize,
    },

    /// I/O error while reading road map input.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this error reports a violated graph contract (missing or duplicate
    /// vertex or edge), as opposed to an input or I/O problem.
    #[must_use]
    pub fn is_graph_error(&self) -> bool {
        matches!(
            self,
            Error::VertexNotFound(_)
                | Error::DuplicateVertex(_)
                | Error::EdgeNotFound { .. }
                | Error::DuplicateEdge { .. }
        )
    }
}
