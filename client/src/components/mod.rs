//! Dashboard components: header, tab strip, the four panels and the sidebar.
//!
//! DESIGN
//! ======
//! Each panel reads shared state from context and renders through small pure
//! label/gate functions, which carry the unit tests.

pub mod buy_tickets_tab;
pub mod create_event_tab;
pub mod event_details;
pub mod event_selector;
pub mod header;
pub mod manage_events_tab;
pub mod my_tickets_tab;
pub mod navigation_tabs;
pub mod sidebar;
