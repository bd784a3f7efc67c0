pub mod event;
pub mod fragment;
pub mod session;
pub mod state;
