//! Reactive state models provided to the dashboard through Leptos context.
//!
//! DESIGN
//! ======
//! `ui` is owned by the view, `wallet` by the wallet bridge, `events` by the
//! read fetcher and `tx` by the transaction dispatcher. Each is wrapped in an
//! `RwSignal` at the app root.

pub mod events;
pub mod tx;
pub mod ui;
pub mod wallet;
