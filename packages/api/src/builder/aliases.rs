//! Alias methods

use flatpath_engine::{AliasInput, AliasSpec, Node};

use crate::builder::core::FlattenBuilder;

impl<E> FlattenBuilder<E> {
    /// Add one alias
    ///
    /// Aliases added this way keep their order, and repeated names each get
    /// their own pair. Adding to data-shaped aliases replaces them.
    ///
    /// # Arguments
    /// * `name` - Key the matched values are emitted under
    /// * `expression` - Query expression evaluated against the root
    #[must_use]
    pub fn alias(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        match &mut self.aliases {
            AliasInput::Spec(spec) => spec.push(name, expression),
            AliasInput::None | AliasInput::Data(_) => {
                self.aliases = AliasInput::Spec(AliasSpec::pairs([(name, expression)]));
            }
        }
        self
    }

    /// Replace the aliases with an already-typed set
    #[must_use]
    pub fn aliases(mut self, aliases: AliasSpec) -> Self {
        self.aliases = AliasInput::Spec(aliases);
        self
    }

    /// Replace the aliases with data to be interpreted at run time
    ///
    /// Accepts a flat `name, expression, ...` sequence, a sequence of pairs,
    /// a mapping, or `Node::Absent`. Any other shape is reported according
    /// to the alias policy.
    #[must_use]
    pub fn alias_data(mut self, aliases: impl Into<Node>) -> Self {
        self.aliases = AliasInput::Data(aliases.into());
        self
    }

    /// Drop all aliases
    #[must_use]
    pub fn no_aliases(mut self) -> Self {
        self.aliases = AliasInput::None;
        self
    }
}
