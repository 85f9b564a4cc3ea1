use crate::users::UserId;

/// A user-owned note, as persisted
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Note {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
}
