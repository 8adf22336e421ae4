//! Shell builtins
//!
//! Builtins differ from registry commands in that they get mutable access
//! to the session state.

pub mod cd_cmd;

pub use cd_cmd::handle_cd;
