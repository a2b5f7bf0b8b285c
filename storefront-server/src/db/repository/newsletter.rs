//! Newsletter Subscriber Repository

use super::{BaseRepository, FIELDS, RepoResult, thing};
use shared::models::NewsletterSubscriber;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "newsletter_subscribers";

/// 列表上限
pub const MAX_SUBSCRIBERS: usize = 1000;

#[derive(Clone)]
pub struct NewsletterRepository {
    base: BaseRepository,
}

impl NewsletterRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find subscriber by (normalized) email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<NewsletterSubscriber>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM newsletter_subscribers WHERE email = $email LIMIT 1"
            ))
            .bind(("email", email.to_string()))
            .await?;
        let rows: Vec<NewsletterSubscriber> = result.take(0)?;
        Ok(rows.into_iter().next())
    }

    /// Insert a new subscriber; the unique email index turns a race into `Duplicate`
    pub async fn create(&self, subscriber: NewsletterSubscriber) -> RepoResult<NewsletterSubscriber> {
        self.base.insert(TABLE, &subscriber.id, &subscriber).await?;
        Ok(subscriber)
    }

    /// Flip the subscribed flag by id
    pub async fn set_subscribed(&self, id: &str, subscribed: bool) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET subscribed = $subscribed RETURN NONE")
            .bind(("thing", thing(TABLE, id)))
            .bind(("subscribed", subscribed))
            .await?
            .check()?;
        Ok(())
    }

    /// Active subscribers, most recent first
    pub async fn find_active(&self) -> RepoResult<Vec<NewsletterSubscriber>> {
        let mut subscribers: Vec<NewsletterSubscriber> = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM newsletter_subscribers WHERE subscribed = true ORDER BY subscribed_at DESC"
            ))
            .await?
            .take(0)?;
        subscribers.truncate(MAX_SUBSCRIBERS);
        Ok(subscribers)
    }

    pub async fn count_active(&self) -> RepoResult<i64> {
        self.base
            .count("SELECT count() FROM newsletter_subscribers WHERE subscribed = true GROUP ALL")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::RepoError;
    use crate::db::repository::test_support::memory_db;

    fn subscriber(id: &str, email: &str, at: i64) -> NewsletterSubscriber {
        NewsletterSubscriber {
            id: id.into(),
            email: email.into(),
            subscribed: true,
            subscribed_at: at,
        }
    }

    #[tokio::test]
    async fn test_unique_email_index() {
        let repo = NewsletterRepository::new(memory_db().await);
        repo.create(subscriber("s1", "reader@example.com", 1)).await.unwrap();
        let err = repo
            .create(subscriber("s2", "reader@example.com", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_soft_delete_and_listing() {
        let repo = NewsletterRepository::new(memory_db().await);
        repo.create(subscriber("s1", "a@example.com", 1)).await.unwrap();
        repo.create(subscriber("s2", "b@example.com", 2)).await.unwrap();

        repo.set_subscribed("s1", false).await.unwrap();

        let active: Vec<String> = repo
            .find_active()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.email)
            .collect();
        assert_eq!(active, vec!["b@example.com"]);
        assert_eq!(repo.count_active().await.unwrap(), 1);

        let found = repo.find_by_email("a@example.com").await.unwrap().unwrap();
        assert!(!found.subscribed);
        assert_eq!(found.id, "s1");
    }
}
