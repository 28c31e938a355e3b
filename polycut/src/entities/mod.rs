mod frame;
mod instance;
mod placement;
mod solution;

#[doc(inline)]
pub use frame::Frame;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use solution::Solution;
