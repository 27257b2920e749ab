//! Object filtering: predicates over graph-node candidates.

use regex::Regex;

use wiregraph_error::Result;

use crate::object::ObjectRef;

/// A predicate deciding which objects belong in the rendered graph.
///
/// Discovery implementations consult the filter for every candidate; an
/// object it rejects never appears as a node or an edge endpoint.
pub struct ObjectFilter {
    predicate: Box<dyn Fn(ObjectRef<'_>) -> bool + Send + Sync>,
}

impl ObjectFilter {
    /// Build a filter from an arbitrary predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(ObjectRef<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// A filter that accepts every object.
    pub fn accept_all() -> Self {
        Self::new(|_| true)
    }

    /// Whether the given object belongs in the graph.
    pub fn accepts(&self, object: ObjectRef<'_>) -> bool {
        (self.predicate)(object)
    }
}

impl Default for ObjectFilter {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl std::fmt::Debug for ObjectFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectFilter").finish_non_exhaustive()
    }
}

/// Builder for allow/deny filters over full type paths.
///
/// Patterns are regular expressions matched against the candidate's full
/// type path. Deny patterns win over allow patterns; an empty allow list
/// accepts everything not denied.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    allow: Vec<String>,
    deny: Vec<String>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow type paths matching the given pattern.
    pub fn allow(mut self, pattern: impl Into<String>) -> Self {
        self.allow.push(pattern.into());
        self
    }

    /// Deny type paths matching the given pattern.
    pub fn deny(mut self, pattern: impl Into<String>) -> Self {
        self.deny.push(pattern.into());
        self
    }

    /// Allow type paths starting with the given literal prefix.
    pub fn allow_prefix(self, prefix: &str) -> Self {
        let escaped = regex::escape(prefix);
        self.allow(format!("^{escaped}"))
    }

    /// Deny type paths starting with the given literal prefix.
    pub fn deny_prefix(self, prefix: &str) -> Self {
        let escaped = regex::escape(prefix);
        self.deny(format!("^{escaped}"))
    }

    /// Compile the accumulated patterns into an [`ObjectFilter`].
    ///
    /// Fails with `ConfigInvalid` on the first malformed pattern, carrying
    /// the regex error as source.
    pub fn build(self) -> Result<ObjectFilter> {
        let allow = compile(&self.allow)?;
        let deny = compile(&self.deny)?;

        Ok(ObjectFilter::new(move |object| {
            let path = object.type_name();
            if deny.iter().any(|pattern| pattern.is_match(path)) {
                return false;
            }
            allow.is_empty() || allow.iter().any(|pattern| pattern.is_match(path))
        }))
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| Ok(Regex::new(pattern)?))
        .collect()
}
