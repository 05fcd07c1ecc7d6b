//! # Breathe Core Library
//!
//! This crate provides the core functionality for the Breathe terminal
//! companion. It contains the breathing-phase clock, personalization state
//! and the playback/artwork seams, all independent of any specific user
//! interface.
//!
//! ## Modules
//!
//! - `clock`: the box-breathing phase clock and elapsed-session counter
//! - `settings`: startup configuration and the live personalization record
//! - `music`: track list, silence sentinel and the audio playback seam
//! - `background`: local image file to `data:` URI conversion
//! - `theme`: UI theming system

pub mod background;
pub mod clock;
pub mod music;
pub mod settings;
pub mod theme;
