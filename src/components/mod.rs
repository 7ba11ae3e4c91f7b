pub mod app;
pub mod chat_view;
pub mod exercise_bubble;
pub mod image_bubble;
pub mod image_viewer;
pub mod leaderboard_panel;
pub mod message_bubble;
pub mod notice_banner;
pub mod profile_form_bubble;
pub mod profile_header;
pub mod recommendation_bubble;
pub mod text_bubble;

pub use app::App;
