//! Blog Post Repository

use super::{BaseRepository, FIELDS, RepoResult};
use shared::models::BlogPost;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "blog_posts";

#[derive(Clone)]
pub struct BlogRepository {
    base: BaseRepository,
}

impl BlogRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Published posts in insertion order, optionally filtered by tag membership
    /// and featured flag.
    ///
    /// Pagination happens in the caller: the embedded engine drops rows when
    /// `LIMIT/START` is combined with `WHERE` + `ORDER BY`.
    pub async fn find_published(
        &self,
        tag: Option<String>,
        featured: Option<bool>,
    ) -> RepoResult<Vec<BlogPost>> {
        let mut conditions = vec!["published = true"];
        if tag.is_some() {
            conditions.push("$tag IN tags");
        }
        if featured.is_some() {
            conditions.push("featured = $featured");
        }
        let query = format!(
            "SELECT {FIELDS} FROM blog_posts WHERE {} ORDER BY seq",
            conditions.join(" AND ")
        );

        let posts: Vec<BlogPost> = self
            .base
            .db()
            .query(query)
            .bind(("tag", tag))
            .bind(("featured", featured))
            .await?
            .take(0)?;
        Ok(posts)
    }

    /// First published post with this slug
    pub async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<BlogPost>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {FIELDS} FROM blog_posts WHERE slug = $slug AND published = true ORDER BY seq"
            ))
            .bind(("slug", slug.to_string()))
            .await?;
        let posts: Vec<BlogPost> = result.take(0)?;
        Ok(posts.into_iter().next())
    }

    pub async fn create(&self, post: BlogPost) -> RepoResult<BlogPost> {
        self.base.insert(TABLE, &post.id, &post).await?;
        Ok(post)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        self.base
            .count("SELECT count() FROM blog_posts GROUP ALL")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::memory_db;

    fn post(id: &str, slug: &str, tags: &[&str], featured: bool, published: bool, at: i64) -> BlogPost {
        BlogPost {
            id: id.into(),
            title: slug.replace('-', " "),
            slug: slug.into(),
            excerpt: "excerpt".into(),
            content: "content".into(),
            author: "Team".into(),
            publish_date: at,
            read_time: "5 min read".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured,
            published,
            created_at: at,
            updated_at: at,
        }
    }

    async fn seeded() -> BlogRepository {
        let repo = BlogRepository::new(memory_db().await);
        repo.create(post("1", "first", &["guide", "security"], true, true, 1)).await.unwrap();
        repo.create(post("2", "second", &["news"], false, true, 2)).await.unwrap();
        repo.create(post("3", "draft", &["guide"], true, false, 3)).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_filters() {
        let repo = seeded().await;

        let all = repo.find_published(None, None).await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let guides = repo.find_published(Some("guide".into()), None).await.unwrap();
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].id, "1");

        let not_featured = repo.find_published(None, Some(false)).await.unwrap();
        assert_eq!(not_featured.len(), 1);
        assert_eq!(not_featured[0].id, "2");
    }

    #[tokio::test]
    async fn test_slug_lookup_hides_drafts() {
        let repo = seeded().await;
        assert!(repo.find_published_by_slug("first").await.unwrap().is_some());
        assert!(repo.find_published_by_slug("draft").await.unwrap().is_none());
        assert!(repo.find_published_by_slug("nope").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_same_created_at_keeps_insertion_order() {
        let repo = BlogRepository::new(memory_db().await);
        repo.create(post("b", "beta", &[], false, true, 3)).await.unwrap();
        repo.create(post("a", "alpha", &[], false, true, 3)).await.unwrap();

        let ids: Vec<String> = repo
            .find_published(None, None)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
