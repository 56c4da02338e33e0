/// A record addressable by a stable string key.
///
/// Every stored entity exposes its key through this trait so that the
/// generic keyed store and the changelog can address records uniformly.
/// Keys are caller-chosen, unique within a collection, and never change
/// over the lifetime of a record.
pub trait Keyed {
    /// The record's lookup key.
    fn key(&self) -> &str;
}

impl<T: Keyed> Keyed for &T {
    fn key(&self) -> &str {
        (*self).key()
    }
}
