//! Pure data types. The store-facing ones implement
//! [`StoreEntity`](crate::framework::StoreEntity) in their actor modules.

pub mod analysis;
pub mod customization;
pub mod menu;
pub mod order;
pub mod session;

pub use analysis::*;
pub use customization::*;
pub use menu::*;
pub use order::*;
pub use session::*;
