//! Last-fetched listing, kept for re-rendering without a round trip.
//!
//! Every successful fetch overwrites the whole cache. The cache does not
//! judge staleness; the controller decides when a re-render from cache is
//! acceptable.

use crate::models::{ListingPayload, ListingRequest};

/// A payload together with the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedListing {
    pub payload: ListingPayload,
    pub request: ListingRequest,
}

#[derive(Clone, Debug, Default)]
pub struct ListingCache {
    current: Option<CachedListing>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&CachedListing> {
        self.current.as_ref()
    }

    /// Replace the cached listing.
    pub fn set(&mut self, payload: ListingPayload, request: ListingRequest) {
        self.current = Some(CachedListing { payload, request });
    }

    /// Wire length of the cached payload, 0 when nothing was fetched yet.
    pub fn payload_len(&self) -> usize {
        self.current.as_ref().map_or(0, |c| c.payload.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn test_set_overwrites() {
        let mut cache = ListingCache::new();
        assert!(cache.get().is_none());
        assert_eq!(cache.payload_len(), 0);

        cache.set(
            ListingPayload::new("/a", vec![Entry::More]),
            ListingRequest::new("/a", "", 1),
        );
        assert_eq!(cache.payload_len(), 2);

        cache.set(ListingPayload::new("/b", vec![]), ListingRequest::new("/b", "x", 2));
        let cached = cache.get().unwrap();
        assert_eq!(cached.payload.info.path, "/b");
        assert_eq!(cached.request.keyword, "x");
        assert_eq!(cache.payload_len(), 1);
    }
}
