pub mod impl_fake;
pub mod impl_unavailable;
pub mod interface;
