//! News/comment repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide persistence APIs for news items and their comments.
//! - Keep both ordering contracts inside SQL.
//!
//! # Invariants
//! - Home listing is `published_at DESC, id DESC`, capped by the caller's
//!   limit.
//! - Comments for one news item are `created_at ASC, id ASC`.
//! - Comment deletion is a hard delete.

use crate::model::news::{Comment, CommentId, NewComment, NewNewsItem, NewsId, NewsItem};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const NEWS_SELECT_SQL: &str = "SELECT id, title, body, published_at FROM news";
const COMMENT_SELECT_SQL: &str =
    "SELECT id, news_id, author_id, text, created_at FROM comments";

/// Repository interface for news and comment operations.
pub trait NewsRepository {
    /// Seeds one news item (administrative path).
    fn create_news(&self, draft: &NewNewsItem) -> RepoResult<NewsId>;
    /// Gets one news item by id.
    fn get_news(&self, id: NewsId) -> RepoResult<Option<NewsItem>>;
    /// Lists the newest items for the home page, capped at `limit`.
    fn list_home(&self, limit: u32) -> RepoResult<Vec<NewsItem>>;
    /// Persists one validated comment and returns its id.
    fn create_comment(&self, draft: &NewComment) -> RepoResult<CommentId>;
    /// Gets one comment by id.
    fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>>;
    /// Replaces the text of one comment.
    fn update_comment_text(&self, id: CommentId, text: &str) -> RepoResult<()>;
    /// Hard-deletes one comment.
    fn delete_comment(&self, id: CommentId) -> RepoResult<()>;
    /// Lists all comments of one news item in chronological order.
    fn list_comments(&self, news_id: NewsId) -> RepoResult<Vec<Comment>>;
    /// Total comment count across all news items.
    fn count_comments(&self) -> RepoResult<i64>;
}

/// SQLite-backed news/comment repository.
pub struct SqliteNewsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNewsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NewsRepository for SqliteNewsRepository<'_> {
    fn create_news(&self, draft: &NewNewsItem) -> RepoResult<NewsId> {
        self.conn.execute(
            "INSERT INTO news (title, body, published_at) VALUES (?1, ?2, ?3);",
            params![draft.title.as_str(), draft.body.as_str(), draft.published_at],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_news(&self, id: NewsId) -> RepoResult<Option<NewsItem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NEWS_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_news_row(row)?));
        }
        Ok(None)
    }

    fn list_home(&self, limit: u32) -> RepoResult<Vec<NewsItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NEWS_SELECT_SQL} ORDER BY published_at DESC, id DESC LIMIT ?1;"
        ))?;
        let mut rows = stmt.query([i64::from(limit)])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_news_row(row)?);
        }
        Ok(items)
    }

    fn create_comment(&self, draft: &NewComment) -> RepoResult<CommentId> {
        let changed = self.conn.execute(
            "INSERT INTO comments (news_id, author_id, text, created_at)
             SELECT ?1, ?2, ?3, ?4
             WHERE EXISTS (SELECT 1 FROM news WHERE id = ?1);",
            params![
                draft.news_id,
                draft.author_id,
                draft.text.as_str(),
                draft.created_at
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NewsNotFound(draft.news_id));
        }
        Ok(self.conn.last_insert_rowid())
    }

    fn get_comment(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_comment_row(row)?));
        }
        Ok(None)
    }

    fn update_comment_text(&self, id: CommentId, text: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE comments SET text = ?2 WHERE id = ?1;",
            params![id, text],
        )?;
        if changed == 0 {
            return Err(RepoError::CommentNotFound(id));
        }
        Ok(())
    }

    fn delete_comment(&self, id: CommentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM comments WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::CommentNotFound(id));
        }
        Ok(())
    }

    fn list_comments(&self, news_id: NewsId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{COMMENT_SELECT_SQL} WHERE news_id = ?1 ORDER BY created_at ASC, id ASC;"
        ))?;
        let mut rows = stmt.query([news_id])?;
        let mut comments = Vec::new();
        while let Some(row) = rows.next()? {
            comments.push(parse_comment_row(row)?);
        }
        Ok(comments)
    }

    fn count_comments(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM comments;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_news_row(row: &Row<'_>) -> RepoResult<NewsItem> {
    Ok(NewsItem {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        published_at: row.get("published_at")?,
    })
}

fn parse_comment_row(row: &Row<'_>) -> RepoResult<Comment> {
    Ok(Comment {
        id: row.get("id")?,
        news_id: row.get("news_id")?,
        author_id: row.get("author_id")?,
        text: row.get("text")?,
        created_at: row.get("created_at")?,
    })
}
