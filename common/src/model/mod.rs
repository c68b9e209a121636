pub mod advert;
pub mod compatibility;
pub mod document;
pub mod identity;
pub mod lookup;
pub mod permit;
pub mod session;
pub mod table;
