//! # wiregraph
//!
//! Render the wiring of an in-memory object graph as Graphviz DOT.
//!
//! Types opt in by implementing [`GraphObject`]; the built-in walker then
//! discovers every held object reachable from a root, numbers multiple
//! instances of the same type, and serializes the result deterministically.
//!
//! ```rust
//! use wiregraph::{GraphObject, render_object_graph};
//!
//! struct Logger;
//! impl GraphObject for Logger {}
//!
//! struct Server {
//!     logger: Logger,
//! }
//!
//! impl GraphObject for Server {
//!     fn dependencies(&self) -> Vec<&dyn GraphObject> {
//!         vec![&self.logger]
//!     }
//! }
//!
//! let server = Server { logger: Logger };
//! let dot = render_object_graph(&server).expect("render");
//! assert!(dot.starts_with("strict digraph {"));
//! ```
//!
//! The render functions return a `String`; persisting or displaying it is
//! the caller's business.

pub use wiregraph_collect::{
    InstanceIndex, RenderEdge, RenderNode, assemble_graph, build_index, collect_nodes, node_label,
};
pub use wiregraph_core::{
    DependencyWalker, FilterBuilder, GraphObject, ObjectFilter, ObjectId, ObjectRef,
    RelationDiscovery, StaticRelation, simple_type_name,
};
pub use wiregraph_dot::{
    DEFAULT_NODE_STYLE, RenderOptions, render_graph, render_graph_with_options,
};
pub use wiregraph_error::{Error, ErrorKind, Result};

/// Render the graph reachable from `root` with the built-in walker, no
/// filtering, and default styling.
pub fn render_object_graph(root: &dyn GraphObject) -> Result<String> {
    render_object_graph_filtered(root, &ObjectFilter::accept_all())
}

/// Render the graph reachable from `root`, restricted to objects the
/// filter accepts.
pub fn render_object_graph_filtered(root: &dyn GraphObject, filter: &ObjectFilter) -> Result<String> {
    render_object_graph_with(
        root,
        filter,
        &DependencyWalker::new(),
        &RenderOptions::default(),
    )
}

/// Render with an explicit discovery collaborator and render options.
pub fn render_object_graph_with<'g>(
    root: &'g dyn GraphObject,
    filter: &ObjectFilter,
    discovery: &dyn RelationDiscovery<'g>,
    options: &RenderOptions,
) -> Result<String> {
    let (nodes, edges) = assemble_graph(ObjectRef::new(root), filter, discovery)?;
    Ok(render_graph_with_options(&nodes, &edges, options))
}
