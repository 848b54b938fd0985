// everything about the menu page that does not need a browser
//
// the webapp crate wires these pieces to the dom; keeping them here means they can
// be exercised with plain unit tests
pub mod config;
pub mod filter;
pub mod format;
pub mod load;
pub mod markup;
pub mod menu;
pub mod scroll;
pub mod theme;
