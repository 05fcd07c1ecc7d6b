pub mod app;
mod background_modal;
mod breathing;
mod footer;
mod header;
mod home;
mod music_modal;
mod settings_modal;
