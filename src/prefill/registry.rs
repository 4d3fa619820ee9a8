use super::provider::{
    DirectDependencyFormsProvider, GlobalActionProvider, GlobalDataProvider, ResolutionContext,
    SourceGroup, SourceProvider, TransitiveDependencyFormsProvider,
};
use itertools::Itertools;

/// An ordered collection of prefill-source providers.
///
/// The registry is an explicit value, constructed per resolver (or per
/// test) instead of living in process-wide state. The presented catalog is
/// the concatenation of every provider's groups in registration order.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn SourceProvider>>,
}

impl ProviderRegistry {
    /// An empty registry, for callers that assemble their own provider set.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// The standard catalog: direct forms, transitive forms, global data,
    /// action properties, in that order.
    pub fn standard() -> Self {
        Self::new()
            .with_provider(Box::new(DirectDependencyFormsProvider))
            .with_provider(Box::new(TransitiveDependencyFormsProvider))
            .with_provider(Box::new(GlobalDataProvider))
            .with_provider(Box::new(GlobalActionProvider))
    }

    /// Appends a provider. Registration order is presentation order.
    pub fn register(&mut self, provider: Box<dyn SourceProvider>) {
        self.providers.push(provider);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_provider(mut self, provider: Box<dyn SourceProvider>) -> Self {
        self.register(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Ids of the registered providers, in order.
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.id()).collect()
    }

    /// The full, unfiltered catalog: every provider's groups concatenated
    /// in registration order.
    pub fn catalog(&self, ctx: &ResolutionContext<'_>) -> Vec<SourceGroup> {
        self.providers
            .iter()
            .map(|provider| provider.groups(ctx))
            .concat()
    }
}

impl Default for ProviderRegistry {
    /// The standard provider set.
    fn default() -> Self {
        Self::standard()
    }
}
