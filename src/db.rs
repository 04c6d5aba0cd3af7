use crate::models::FaqEntry;
use chrono::Utc;
use log::LevelFilter;
use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions, Pool, Sqlite,
};
use std::str::FromStr;

// this macro collects migrations from the ./migrations folder at compile time
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Sample entries written on first start so a fresh install answers
/// something.
const SAMPLE_FAQS: &[(&str, &str)] = &[
    (
        "What are the opening hours?",
        "The service desk is staffed Monday to Friday, 9am to 5pm.",
    ),
    (
        "How can I contact support?",
        "Email the support desk or ask here; unresolved questions are forwarded.",
    ),
    (
        "How do I reset my password?",
        "Use the reset link on the sign-in page; the email can take a few minutes.",
    ),
];

#[derive(Debug)]
pub struct Db {
    pub pool: Pool<Sqlite>,
}

impl Db {
    pub async fn init(path: &str) -> anyhow::Result<Self> {
        let connection_str = if path.starts_with("sqlite:") {
            path.to_string()
        } else {
            format!("sqlite://{}", path)
        };

        let options = SqliteConnectOptions::from_str(&connection_str)?
            .create_if_missing(true)
            .log_statements(LevelFilter::Debug)
            .clone();

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        log::info!(
            "running {} migrations from ./migrations",
            MIGRATOR.migrations.len()
        );
        MIGRATOR.run(&pool).await?;

        Ok(Db { pool })
    }

    pub async fn count_faqs(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("select count(*) from faqs")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn list_faqs(&self) -> Result<Vec<FaqEntry>, sqlx::Error> {
        sqlx::query_as::<_, FaqEntry>(
            "select id, question, answer, created_at, updated_at from faqs order by id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_faq(&self, question: &str, answer: &str) -> Result<i64, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "insert into faqs (question, answer, created_at, updated_at) values (?, ?, ?, ?)",
        )
        .bind(question)
        .bind(answer)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Writes the sample entries when the table is empty. Safe to call on
    /// every start.
    pub async fn seed_samples(&self) -> Result<(), sqlx::Error> {
        if self.count_faqs().await? > 0 {
            return Ok(());
        }
        for (question, answer) in SAMPLE_FAQS {
            self.insert_faq(question, answer).await?;
        }
        log::info!("seeded {} sample faq entries", SAMPLE_FAQS.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn temp_db() -> (tempfile::TempDir, Db) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let db = Db::init(path.to_str().unwrap()).await.unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_init_creates_empty_faq_table() {
        let (_dir, db) = temp_db().await;
        assert_eq!(db.count_faqs().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_and_list_roundtrip() {
        let (_dir, db) = temp_db().await;
        let id = db.insert_faq("What is askbox?", "A chat widget.").await.unwrap();
        let faqs = db.list_faqs().await.unwrap();
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].id, id);
        assert_eq!(faqs[0].question, "What is askbox?");
        assert!(!faqs[0].created_at.is_empty());
    }

    #[tokio::test]
    async fn test_seed_samples_is_idempotent() {
        let (_dir, db) = temp_db().await;
        db.seed_samples().await.unwrap();
        let seeded = db.count_faqs().await.unwrap();
        assert!(seeded > 0);
        db.seed_samples().await.unwrap();
        assert_eq!(db.count_faqs().await.unwrap(), seeded);
    }
}
