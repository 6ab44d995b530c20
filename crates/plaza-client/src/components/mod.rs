//! UI Components for the plaza-live client.

mod activity_panel;
mod chat_panel;
mod failure_banner;
mod helper_buttons;
mod joystick;
mod login_dialog;
mod modal;
mod password_dialog;
mod room_picker;
mod video_connection_dialog;

pub use activity_panel::ActivityPanel;
pub use chat_panel::ChatPanel;
pub use failure_banner::FailureBanner;
pub use helper_buttons::HelperButtons;
pub use joystick::Joystick;
pub use login_dialog::LoginDialog;
pub use modal::Modal;
pub use password_dialog::PasswordDialog;
pub use room_picker::RoomPicker;
pub use video_connection_dialog::VideoConnectionDialog;
