mod notification_settings;
mod role;
mod user;
