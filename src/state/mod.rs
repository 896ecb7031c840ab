//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session flag is the only mutable state in the app. It is created
//! once by the root component and handed to readers through context rather
//! than living in a global.

pub mod session;
