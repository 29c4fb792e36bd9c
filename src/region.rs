use {derive_builder::Builder, log::trace};

/// Checks client-declared regions against the single region this service is configured for.
///
/// RegionValidator structs are immutable. Create one with [RegionValidator::new] or use
/// [RegionValidatorBuilder] to construct one programmatically.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct RegionValidator {
    /// The region this service accepts, e.g. `us-east-1`.
    #[builder(setter(into))]
    region: String,
}

impl RegionValidator {
    /// Create a validator accepting the given region.
    #[inline]
    pub fn new<S: Into<String>>(region: S) -> Self {
        Self {
            region: region.into(),
        }
    }

    /// Create a [RegionValidatorBuilder] to construct a [RegionValidator].
    #[inline]
    pub fn builder() -> RegionValidatorBuilder {
        RegionValidatorBuilder::default()
    }

    /// Retrieve the configured region.
    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Indicates whether a region declared by a client is acceptable.
    ///
    /// An empty region is always accepted, since region-agnostic clients omit it. Otherwise the
    /// region must match the configured region exactly; no case folding is performed.
    pub fn is_valid_region(&self, requested_region: &str) -> bool {
        if requested_region.is_empty() {
            return true;
        }

        if requested_region != self.region {
            trace!("requested region '{}' does not match configured region '{}'", requested_region, self.region);
            return false;
        }

        true
    }
}
