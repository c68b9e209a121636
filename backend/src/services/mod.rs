pub mod adverts;
pub mod compatibility;
pub mod documents;
pub mod lookup;
pub mod permits;
pub mod sessions;
