//! Chat data models and the reducer driving the chat screen.
//! Records arrive from the backend as JSON; the client only reads them and
//! tracks local display state (viewer, archive flags, notices).

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

pub type MessageId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Runner,
    Expert,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Runner => "Runner",
            UserRole::Expert => "Expert",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub activity: String,
    pub distance_km: f64,
    pub duration_secs: u64,
    #[serde(default)]
    pub calories: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub expert_name: String,
    pub title: String,
    pub note: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageKind {
    Text { body: String },
    Image { url: Option<String> },
    ExerciseRecord(ExerciseRecord),
    /// Expert's request for the runner's profile; `submitted` once answered.
    ProfileForm {
        #[serde(default)]
        submitted: bool,
    },
    ExpertRecommendation(Recommendation),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: String,
    #[serde(flatten)]
    pub kind: MessageKind,
    /// ISO timestamp as sent by the backend.
    pub created_at: String,
    #[serde(default)]
    pub read_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl Message {
    /// URL to show full-screen; never for archived or url-less images.
    pub fn viewable_image_url(&self) -> Option<&str> {
        if self.archived {
            return None;
        }
        match &self.kind {
            MessageKind::Image { url: Some(url) } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub nickname: String,
    pub role: UserRole,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub points: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    pub nickname: String,
    pub points: u64,
    pub level: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    /// Message currently open in the image viewer.
    pub viewer: Option<MessageId>,
    pub notice: Option<String>,
    pub counterpart: Option<Profile>,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Bumped on every change so effects can key on it.
    pub version: u64,
}

impl ChatState {
    pub fn find(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn viewer_url(&self) -> Option<&str> {
        self.viewer.and_then(|id| self.find(id)).and_then(Message::viewable_image_url)
    }
}

#[derive(Clone, Debug)]
pub enum ChatAction {
    Loaded(Vec<Message>),
    OpenViewer { id: MessageId },
    CloseViewer,
    ArchiveSucceeded { id: MessageId },
    ArchiveFailed { id: MessageId },
    ProfileSubmitted { id: MessageId },
    ProfileLoaded(Profile),
    LeaderboardLoaded(Vec<LeaderboardEntry>),
    Notify(String),
    DismissNotice,
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ChatAction::*;
        let mut new = (*self).clone();
        match action {
            Loaded(messages) => {
                new.messages = messages;
                if new.viewer_url().is_none() {
                    new.viewer = None;
                }
            }
            OpenViewer { id } => {
                let viewable = new.find(id).and_then(Message::viewable_image_url).is_some();
                if !viewable {
                    log::debug!("message {id} has no viewable image, not opening viewer");
                    return self;
                }
                new.viewer = Some(id);
            }
            CloseViewer => {
                new.viewer = None;
            }
            ArchiveSucceeded { id } => {
                if let Some(m) = new.messages.iter_mut().find(|m| m.id == id) {
                    m.archived = true;
                }
                if new.viewer == Some(id) {
                    new.viewer = None;
                }
            }
            ArchiveFailed { id } => {
                log::warn!("archiving message {id} failed");
                new.notice = Some("Could not archive the message. Please try again.".to_string());
            }
            ProfileSubmitted { id } => {
                if let Some(m) = new.messages.iter_mut().find(|m| m.id == id) {
                    if let MessageKind::ProfileForm { submitted } = &mut m.kind {
                        *submitted = true;
                    }
                }
            }
            ProfileLoaded(profile) => {
                new.counterpart = Some(profile);
            }
            LeaderboardLoaded(entries) => {
                new.leaderboard = entries;
                new.leaderboard.sort_by_key(|e| e.rank);
            }
            Notify(text) => {
                new.notice = Some(text);
            }
            DismissNotice => {
                new.notice = None;
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: MessageId, url: Option<&str>, archived: bool) -> Message {
        Message {
            id,
            sender_id: "runner-1".into(),
            kind: MessageKind::Image { url: url.map(str::to_string) },
            created_at: "2024-01-02T09:00:00".into(),
            read_at: None,
            archived,
        }
    }

    fn state(messages: Vec<Message>) -> Rc<ChatState> {
        Rc::new(ChatState::default()).reduce(ChatAction::Loaded(messages))
    }

    #[test]
    fn test_viewable_image_url() {
        assert_eq!(image(1, Some("https://cdn/x.jpg"), false).viewable_image_url(), Some("https://cdn/x.jpg"));
        assert_eq!(image(1, Some("https://cdn/x.jpg"), true).viewable_image_url(), None);
        assert_eq!(image(1, None, false).viewable_image_url(), None);
    }

    #[test]
    fn test_viewer_only_opens_for_viewable_images() {
        let s = state(vec![image(1, Some("u"), false), image(2, None, false), image(3, Some("u"), true)]);
        assert_eq!(s.clone().reduce(ChatAction::OpenViewer { id: 1 }).viewer, Some(1));
        assert_eq!(s.clone().reduce(ChatAction::OpenViewer { id: 2 }).viewer, None);
        assert_eq!(s.clone().reduce(ChatAction::OpenViewer { id: 3 }).viewer, None);
        assert_eq!(s.reduce(ChatAction::OpenViewer { id: 99 }).viewer, None);
    }

    #[test]
    fn test_archive_success_marks_and_closes_viewer() {
        let s = state(vec![image(1, Some("u"), false)]).reduce(ChatAction::OpenViewer { id: 1 });
        let s = s.reduce(ChatAction::ArchiveSucceeded { id: 1 });
        assert!(s.messages[0].archived);
        assert_eq!(s.viewer, None);
        assert_eq!(s.notice, None);
    }

    #[test]
    fn test_archive_failure_keeps_flag_and_notifies() {
        let s = state(vec![image(1, Some("u"), false)]);
        let s = s.reduce(ChatAction::ArchiveFailed { id: 1 });
        assert!(!s.messages[0].archived);
        assert!(s.notice.is_some());
        let s = s.reduce(ChatAction::DismissNotice);
        assert_eq!(s.notice, None);
    }

    #[test]
    fn test_reload_closes_viewer_when_image_archived_remotely() {
        let s = state(vec![image(1, Some("u"), false)]).reduce(ChatAction::OpenViewer { id: 1 });
        let s = s.reduce(ChatAction::Loaded(vec![image(1, Some("u"), true)]));
        assert_eq!(s.viewer, None);
    }

    #[test]
    fn test_profile_submitted() {
        let form = Message {
            id: 7,
            sender_id: "expert-1".into(),
            kind: MessageKind::ProfileForm { submitted: false },
            created_at: String::new(),
            read_at: None,
            archived: false,
        };
        let s = state(vec![form]).reduce(ChatAction::ProfileSubmitted { id: 7 });
        assert_eq!(s.messages[0].kind, MessageKind::ProfileForm { submitted: true });
    }

    #[test]
    fn test_profile_loaded_sets_counterpart() {
        let profile = Profile {
            user_id: "expert-1".into(),
            nickname: "Kai".into(),
            role: UserRole::Expert,
            level: 4,
            points: 820,
        };
        let s = Rc::new(ChatState::default()).reduce(ChatAction::ProfileLoaded(profile.clone()));
        assert_eq!(s.counterpart, Some(profile));
    }

    #[test]
    fn test_leaderboard_sorted_by_rank() {
        let entry = |rank: u32| LeaderboardEntry {
            rank,
            user_id: format!("u{rank}"),
            nickname: format!("n{rank}"),
            points: 100 - rank as u64,
            level: 1,
        };
        let s = Rc::new(ChatState::default()).reduce(ChatAction::LeaderboardLoaded(vec![entry(3), entry(1), entry(2)]));
        let ranks: Vec<u32> = s.leaderboard.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_message_json_shape() {
        let raw = r#"[
            {"id": 1, "sender_id": "r1", "type": "text", "body": "hi", "created_at": "2024-01-02T09:00:00"},
            {"id": 2, "sender_id": "r1", "type": "image", "url": null, "created_at": "2024-01-02T09:01:00", "archived": true},
            {"id": 3, "sender_id": "r1", "type": "exercise_record", "activity": "Run", "distance_km": 5.2, "duration_secs": 1800, "created_at": "2024-01-02T09:02:00", "read_at": "2024-01-02T09:03:00"},
            {"id": 4, "sender_id": "e1", "type": "profile_form", "created_at": "2024-01-02T09:04:00"},
            {"id": 5, "sender_id": "e1", "type": "expert_recommendation", "expert_name": "Kai", "title": "Intervals", "note": "6x400m", "created_at": "2024-01-02T09:05:00"}
        ]"#;
        let msgs: Vec<Message> = serde_json::from_str(raw).unwrap();
        assert_eq!(msgs.len(), 5);
        assert_eq!(msgs[0].kind, MessageKind::Text { body: "hi".into() });
        assert!(msgs[1].archived);
        assert!(msgs[2].is_read());
        assert_eq!(msgs[3].kind, MessageKind::ProfileForm { submitted: false });
        assert!(matches!(&msgs[4].kind, MessageKind::ExpertRecommendation(r) if r.link.is_none()));
    }
}
