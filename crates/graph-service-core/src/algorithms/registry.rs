//! Name-keyed algorithm registry.
//!
//! One registry exists per subsystem. It maps an algorithm name to a
//! constructor and the implementing type's short name, and provides:
//! - O(1) lookup by name
//! - Silent overwrite on re-registration (last registration wins)
//! - Sorted listings for deterministic output
//! - Instantiate-to-introspect metadata via [`AlgorithmRegistry::describe`]

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::{AlgorithmInfo, AlgorithmKind, Introspect};
use crate::error::{CoreError, CoreResult};
use crate::types::Parameters;

/// Builds a boxed algorithm instance from a parameter map.
pub type Constructor<T> = Arc<dyn Fn(&Parameters) -> CoreResult<Box<T>> + Send + Sync>;

struct Entry<T: ?Sized> {
    type_name: String,
    constructor: Constructor<T>,
}

/// Registry of constructors for one algorithm subsystem.
///
/// `T` is the subsystem's trait object, e.g. `dyn EmbeddingGenerator`.
pub struct AlgorithmRegistry<T: ?Sized> {
    kind: AlgorithmKind,
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T: ?Sized> AlgorithmRegistry<T> {
    /// Create an empty registry.
    pub fn new(kind: AlgorithmKind) -> Self {
        Self {
            kind,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The subsystem this registry serves.
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// Register a constructor under `name`.
    ///
    /// An existing entry with the same name is replaced.
    pub fn register<F>(&self, name: impl Into<String>, type_name: impl Into<String>, constructor: F)
    where
        F: Fn(&Parameters) -> CoreResult<Box<T>> + Send + Sync + 'static,
    {
        let name = name.into();
        let type_name = type_name.into();
        let entry = Entry {
            type_name: type_name.clone(),
            constructor: Arc::new(constructor),
        };

        let previous = self.entries.write().insert(name.clone(), entry);
        match previous {
            Some(old) => debug!(
                kind = %self.kind,
                algorithm = %name,
                replaced = %old.type_name,
                with = %type_name,
                "Replaced registered algorithm"
            ),
            None => info!(kind = %self.kind, algorithm = %name, type_name = %type_name, "Registered algorithm"),
        }
    }

    /// Remove an entry. Returns `true` if it existed.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.entries.write().remove(name).is_some();
        if removed {
            info!(kind = %self.kind, algorithm = %name, "Unregistered algorithm");
        }
        removed
    }

    /// Instantiate the algorithm registered under `name`.
    ///
    /// # Errors
    ///
    /// - `CoreError::UnknownAlgorithm` if nothing is registered under `name`
    /// - Any error returned by the constructor
    pub fn create(&self, name: &str, parameters: &Parameters) -> CoreResult<Box<T>> {
        let constructor = self.constructor(name)?;
        constructor(parameters)
    }

    /// Registered names mapped to their implementing type, sorted by name.
    pub fn list(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .iter()
            .map(|(name, entry)| (name.clone(), entry.type_name.clone()))
            .collect()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if an algorithm is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clone the constructor out so no lock is held while it runs.
    fn lookup(&self, name: &str) -> CoreResult<(String, Constructor<T>)> {
        let entries = self.entries.read();
        match entries.get(name) {
            Some(entry) => Ok((entry.type_name.clone(), Arc::clone(&entry.constructor))),
            None => {
                let mut available: Vec<_> = entries.keys().cloned().collect();
                available.sort();
                warn!(kind = %self.kind, algorithm = %name, ?available, "Unknown algorithm requested");
                Err(CoreError::UnknownAlgorithm {
                    kind: self.kind,
                    name: name.to_string(),
                    available,
                })
            }
        }
    }

    fn constructor(&self, name: &str) -> CoreResult<Constructor<T>> {
        self.lookup(name).map(|(_, constructor)| constructor)
    }
}

impl<T: ?Sized + Introspect> AlgorithmRegistry<T> {
    /// Read back default parameters (and dimensions, where the subsystem has
    /// them) by constructing an instance with no parameters.
    ///
    /// # Errors
    ///
    /// - `CoreError::UnknownAlgorithm` if nothing is registered under `name`
    /// - `CoreError::IntrospectionFailed` if the no-argument construction fails
    pub fn describe(&self, name: &str) -> CoreResult<AlgorithmInfo> {
        let (type_name, constructor) = self.lookup(name)?;

        let instance = constructor(&Parameters::new()).map_err(|e| {
            warn!(kind = %self.kind, algorithm = %name, error = %e, "Introspection failed");
            CoreError::IntrospectionFailed {
                kind: self.kind,
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(AlgorithmInfo {
            name: name.to_string(),
            type_name,
            default_parameters: instance.parameter_defaults(),
            embedding_dimensions: instance.output_dimensions(),
        })
    }
}

impl<T: ?Sized> fmt::Debug for AlgorithmRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("kind", &self.kind)
            .field("algorithms", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    impl Introspect for dyn Greeter {
        fn parameter_defaults(&self) -> Parameters {
            Parameters::new().with("greeting", "hello")
        }
    }

    struct Plain {
        greeting: String,
    }

    impl Greeter for Plain {
        fn greet(&self) -> String {
            self.greeting.clone()
        }
    }

    fn plain(params: &Parameters) -> CoreResult<Box<dyn Greeter>> {
        let greeting = params.get_str("greeting")?.unwrap_or("hello").to_string();
        Ok(Box::new(Plain { greeting }))
    }

    fn strict(params: &Parameters) -> CoreResult<Box<dyn Greeter>> {
        let greeting = params.require_str("greeting")?.to_string();
        Ok(Box::new(Plain { greeting }))
    }

    fn registry() -> AlgorithmRegistry<dyn Greeter> {
        AlgorithmRegistry::new(AlgorithmKind::Similarity)
    }

    #[test]
    fn test_new_registry_empty() {
        let registry = registry();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_create_unknown_names_algorithm_and_available() {
        let registry = registry();
        registry.register("Plain", "Plain", plain);

        let err = registry.create("Fancy", &Parameters::new()).err().unwrap();
        match err {
            CoreError::UnknownAlgorithm {
                kind,
                name,
                available,
            } => {
                assert_eq!(kind, AlgorithmKind::Similarity);
                assert_eq!(name, "Fancy");
                assert_eq!(available, vec!["Plain".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_passes_parameters() {
        let registry = registry();
        registry.register("Plain", "Plain", plain);

        let params = Parameters::new().with("greeting", "hi");
        let greeter = registry.create("Plain", &params).unwrap();
        assert_eq!(greeter.greet(), "hi");
    }

    #[test]
    fn test_constructor_error_propagates_from_create() {
        let registry = registry();
        registry.register("Strict", "Plain", strict);

        let err = registry.create("Strict", &Parameters::new()).err().unwrap();
        assert!(matches!(err, CoreError::MissingParameter { ref name } if name == "greeting"));
    }

    #[test]
    fn test_register_overwrites_silently() {
        let registry = registry();
        registry.register("Greeter", "Plain", plain);
        registry.register("Greeter", "Strict", strict);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.list()["Greeter"], "Strict");
        assert!(registry.create("Greeter", &Parameters::new()).is_err());
    }

    #[test]
    fn test_list_and_names_sorted() {
        let registry = registry();
        registry.register("b", "Plain", plain);
        registry.register("c", "Plain", plain);
        registry.register("a", "Plain", plain);

        assert_eq!(registry.names(), vec!["a", "b", "c"]);
        let listed: Vec<_> = registry.list().into_keys().collect();
        assert_eq!(listed, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unregister() {
        let registry = registry();
        registry.register("Plain", "Plain", plain);

        assert!(registry.unregister("Plain"));
        assert!(!registry.unregister("Plain"));
        assert!(!registry.contains("Plain"));
    }

    #[test]
    fn test_describe_reads_defaults() {
        let registry = registry();
        registry.register("Plain", "Plain", plain);

        let info = registry.describe("Plain").unwrap();
        assert_eq!(info.name, "Plain");
        assert_eq!(info.type_name, "Plain");
        assert_eq!(info.default_parameters.get_str("greeting").unwrap(), Some("hello"));
        assert_eq!(info.embedding_dimensions, None);
    }

    #[test]
    fn test_describe_unknown() {
        let registry = registry();
        let err = registry.describe("Missing").unwrap_err();
        assert!(matches!(err, CoreError::UnknownAlgorithm { ref name, .. } if name == "Missing"));
    }

    #[test]
    fn test_describe_requires_no_argument_construction() {
        let registry = registry();
        registry.register("Strict", "Plain", strict);

        let err = registry.describe("Strict").unwrap_err();
        match err {
            CoreError::IntrospectionFailed { name, reason, .. } => {
                assert_eq!(name, "Strict");
                assert!(reason.contains("greeting"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_constructor_may_use_registry_reentrantly() {
        let registry = Arc::new(registry());
        registry.register("Plain", "Plain", plain);

        let inner = Arc::clone(&registry);
        registry.register("Delegating", "Plain", move |params| {
            inner.create("Plain", params)
        });

        let greeter = registry.create("Delegating", &Parameters::new()).unwrap();
        assert_eq!(greeter.greet(), "hello");
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(registry());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.register(format!("algo-{i}"), "Plain", plain);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 8);
    }
}
