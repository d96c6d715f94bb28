//! Wire types for the backend REST API.
//!
//! The backend is a separately-owned service; field names follow its
//! camelCase JSON convention. Optional fields default rather than failing
//! deserialization so one missing field cannot blank a whole listing page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::Role;

/// Trainer reference embedded in a class listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TrainerRef {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "photoUrl")]
    pub photo_url: Option<String>,
}

/// A bookable fitness class.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessClass {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trainers: Vec<TrainerRef>,
    #[serde(default)]
    pub booking_count: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainerStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// A trainer profile as listed on the trainers page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub status: TrainerStatus,
}

/// A community forum post.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_role: Role,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub up_votes: i64,
    #[serde(default)]
    pub down_votes: i64,
    #[serde(default)]
    pub created_at: String,
}

/// Forum vote direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Newsletter signup payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsletterSignup {
    pub name: String,
    pub email: String,
}

/// Outcome of `POST /newsletter/subscribe`, keyed off the HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    /// 409: the address is already on the list.
    AlreadySubscribed,
    Failed,
}

impl SubscribeOutcome {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            200 | 201 => Self::Subscribed,
            409 => Self::AlreadySubscribed,
            _ => Self::Failed,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Subscribed => "You're subscribed! Watch your inbox.",
            Self::AlreadySubscribed => "This email is already subscribed.",
            Self::Failed => "Subscription failed. Please try again.",
        }
    }
}

/// Outcome of `POST /newsletter/unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsubscribeOutcome {
    Unsubscribed,
    /// 404: the address was not on the list.
    NotSubscribed,
    Failed,
}

impl UnsubscribeOutcome {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Unsubscribed,
            404 => Self::NotSubscribed,
            _ => Self::Failed,
        }
    }
}
