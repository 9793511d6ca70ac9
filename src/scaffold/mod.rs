//! Project materialization
//!
//! This module contains the scaffolding components:
//! - `orchestrator`: Drives composition, file generation and installation
//! - `layout`: Where each directory and file of a project goes
//! - `operation`: Filesystem actions and their log messages
//! - `support`: Templates and static files shipped with every project

pub mod layout;
pub mod operation;
pub mod orchestrator;
pub mod support;

pub use layout::ProjectLayout;
pub use operation::ScaffoldOperation;
pub use orchestrator::{ScaffoldOptions, ScaffoldReport, Scaffolder};
