//! Configuration module for Gala.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    GeneralSettings, GuestSettings, ModelSettings, Settings, WebSettings,
};
