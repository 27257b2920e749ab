//! Graph node identity: the `GraphObject` trait and reference handles.

use std::fmt;

/// A node type in a dependency graph.
///
/// Implementing this trait is how a component becomes visible to the
/// renderer: the type supplies its own type tag and enumerates the objects
/// it directly holds, replacing the field reflection the renderer cannot do
/// itself.
///
/// ```rust
/// use wiregraph_core::GraphObject;
///
/// struct Logger;
/// impl GraphObject for Logger {}
///
/// struct Server {
///     logger: Logger,
/// }
///
/// impl GraphObject for Server {
///     fn dependencies(&self) -> Vec<&dyn GraphObject> {
///         vec![&self.logger]
///     }
/// }
/// ```
pub trait GraphObject {
    /// The full type path used for grouping and filtering.
    ///
    /// The default is the compiler-provided type path; override it only when
    /// a type should present itself under a different name.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// The graph objects this object directly holds.
    ///
    /// Leaf objects keep the default empty enumeration.
    fn dependencies(&self) -> Vec<&dyn GraphObject> {
        Vec::new()
    }
}

/// The identity token of one object in the graph.
///
/// Identity is by reference, never by value: the token pairs the referent's
/// address with its type tag. The type tag keeps a struct distinct from its
/// own first field (which shares its address) and keeps differently-typed
/// zero-sized members apart.
///
/// Known limitation: two same-typed zero-sized members of one struct share
/// both address and tag and therefore collapse into one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    addr: usize,
    type_name: &'static str,
}

impl ObjectId {
    /// The referent's address.
    pub fn addr(&self) -> usize {
        self.addr
    }

    /// The full type path of the referent.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#x}", self.type_name, self.addr)
    }
}

/// A borrowed handle to one graph object.
#[derive(Clone, Copy)]
pub struct ObjectRef<'g> {
    inner: &'g dyn GraphObject,
}

impl<'g> ObjectRef<'g> {
    /// Wrap a graph object reference.
    pub fn new(object: &'g dyn GraphObject) -> Self {
        Self { inner: object }
    }

    /// The identity token of the referent.
    pub fn id(&self) -> ObjectId {
        ObjectId {
            addr: self.inner as *const dyn GraphObject as *const () as usize,
            type_name: self.inner.type_name(),
        }
    }

    /// The full type path of the referent.
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    /// Handles to the objects the referent directly holds.
    pub fn dependencies(&self) -> Vec<ObjectRef<'g>> {
        self.inner.dependencies().into_iter().map(Self::new).collect()
    }

    /// The underlying object.
    pub fn get(&self) -> &'g dyn GraphObject {
        self.inner
    }
}

impl fmt::Debug for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef").field("id", &self.id()).finish()
    }
}
