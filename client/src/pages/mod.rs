//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has one route. The page owns orchestration (startup effects, read
//! loops) and delegates rendering to `components`.

pub mod dashboard;
