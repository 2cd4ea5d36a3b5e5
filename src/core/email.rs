//! Synthetic addresses for the service's rate-limit extension
//!
//! MyMemory grants a larger daily quota to requests carrying a `de=<email>`
//! parameter. The address is never contacted, so a random plausible one works.

use rand::seq::SliceRandom;
use rand::Rng;

/// Exclusive upper bound of the numeric local part
const LOCAL_PART_RANGE: u32 = 1_000_000;

/// Ordered, non-empty set of domains to draw from
#[derive(Debug, Clone, Copy)]
pub struct EmailDomainPool<'a> {
    domains: &'a [String],
}

impl<'a> EmailDomainPool<'a> {
    /// Returns `None` for an empty pool
    pub fn new(domains: &'a [String]) -> Option<Self> {
        if domains.is_empty() {
            None
        } else {
            Some(Self { domains })
        }
    }

    /// `{integer}@{domain}` with both parts drawn uniformly
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let local = rng.gen_range(0..LOCAL_PART_RANGE);
        let domain = self
            .domains
            .choose(rng)
            .map(String::as_str)
            .unwrap_or_default();
        format!("{}@{}", local, domain)
    }

    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }
}
