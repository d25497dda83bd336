pub mod modal;
pub mod nav;
pub mod ui;
