//! Core `FlattenBuilder` structure and execution

use flatpath_engine::{
    AliasInput, AliasSpec, FlattenConfig, FlattenResult, Flattened, Node, PathQuery, StepQuery,
};

/// Builder for one flatten call
///
/// Type parameter `E` is the path-query engine used for alias resolution;
/// [`StepQuery`] unless replaced with [`FlattenBuilder::engine`].
///
/// ```rust
/// use flatpath::{FlattenBuilder, Node};
/// use serde_json::json;
///
/// let result = FlattenBuilder::new(json!({"b": 2, "a": [1]}))
///     .alias("second", "/b")
///     .sorted_keys()
///     .run()
///     .expect("valid configuration");
///
/// let keys: Vec<&str> = result.pairs.keys().collect();
/// assert_eq!(keys, vec!["/a/*[0]", "/b", "second"]);
/// ```
#[derive(Debug, Clone)]
pub struct FlattenBuilder<E = StepQuery> {
    /// Root structure
    pub(crate) data: Node,
    /// Alias argument as given so far
    pub(crate) aliases: AliasInput,
    /// Query engine for alias resolution
    pub(crate) engine: E,
    /// Options for the call
    pub(crate) config: FlattenConfig,
}

impl FlattenBuilder<StepQuery> {
    /// Start building a flatten call over `data`
    #[must_use]
    pub fn new(data: impl Into<Node>) -> Self {
        Self {
            data: data.into(),
            aliases: AliasInput::None,
            engine: StepQuery::new(),
            config: FlattenConfig::default(),
        }
    }
}

impl<E: PathQuery> FlattenBuilder<E> {
    /// Replace the query engine
    #[must_use]
    pub fn engine<F: PathQuery>(self, engine: F) -> FlattenBuilder<F> {
        FlattenBuilder {
            data: self.data,
            aliases: self.aliases,
            engine,
            config: self.config,
        }
    }

    /// Run the flatten call
    ///
    /// # Errors
    ///
    /// Returns [`flatpath_engine::FlattenError`] if the configuration is
    /// invalid, or under the strict alias policy when aliases are malformed
    /// or an alias expression is rejected by the engine.
    pub fn run(self) -> FlattenResult<Flattened> {
        tracing::debug!(
            aliases = alias_count(&self.aliases),
            strict = self.config.is_strict(),
            "running flatten"
        );
        flatpath_engine::run(&self.data, self.aliases, &self.engine, &self.config)
    }
}

fn alias_count(aliases: &AliasInput) -> usize {
    match aliases {
        AliasInput::None | AliasInput::Data(_) => 0,
        AliasInput::Spec(spec) => spec.len(),
    }
}

impl From<Node> for FlattenBuilder<StepQuery> {
    fn from(data: Node) -> Self {
        Self::new(data)
    }
}

impl<E> FlattenBuilder<E> {
    /// Aliases collected so far, if they are already typed
    #[must_use]
    pub fn alias_spec(&self) -> Option<&AliasSpec> {
        match &self.aliases {
            AliasInput::Spec(spec) => Some(spec),
            AliasInput::None | AliasInput::Data(_) => None,
        }
    }

    /// Options collected so far
    #[must_use]
    pub fn config_ref(&self) -> &FlattenConfig {
        &self.config
    }
}
