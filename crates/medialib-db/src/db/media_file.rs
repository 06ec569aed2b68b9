use medialib_core::models::{MediaFile, MediaFileFilter, MediaFileId, NewMediaFile};
use medialib_core::AppError;
use sqlx::{PgPool, Postgres, QueryBuilder};

const MEDIA_FILE_COLUMNS: &str = "id, filename, original_filename, file_size, mime_type, \
     file_type, storage_key, thumbnail_key, width, height, duration, uploaded_at, created_at";

/// Trait for media file metadata operations
#[async_trait::async_trait]
pub trait MediaFileStore: Send + Sync {
    /// Insert a row; id and timestamps are assigned by the store.
    async fn insert(&self, file: NewMediaFile) -> Result<MediaFile, AppError>;

    async fn get(&self, id: MediaFileId) -> Result<Option<MediaFile>, AppError>;

    /// One page of matching rows, newest first, plus the count of all matching rows.
    async fn list(&self, filter: &MediaFileFilter) -> Result<(Vec<MediaFile>, i64), AppError>;

    /// Returns false when no row has this id.
    async fn set_thumbnail_key(
        &self,
        id: MediaFileId,
        thumbnail_key: &str,
    ) -> Result<bool, AppError>;

    /// Returns false when no row has this id.
    async fn delete(&self, id: MediaFileId) -> Result<bool, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

/// Escape `\`, `%` and `_` so a user search term matches literally inside a LIKE pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// PostgreSQL-backed media file repository
#[derive(Clone)]
pub struct MediaFileRepository {
    pool: PgPool,
}

impl MediaFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &MediaFileFilter) {
        builder.push(" WHERE TRUE");

        if let Some(file_type) = filter.file_type {
            builder.push(" AND file_type = ");
            builder.push_bind(file_type);
        }

        if let Some(search) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(search));
            builder.push(" AND (filename ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR original_filename ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\')");
        }
    }
}

#[async_trait::async_trait]
impl MediaFileStore for MediaFileRepository {
    #[tracing::instrument(skip(self, file), fields(db.table = "media_files", db.operation = "insert", storage_key = %file.storage_key))]
    async fn insert(&self, file: NewMediaFile) -> Result<MediaFile, AppError> {
        let query = format!(
            r#"
            INSERT INTO media_files (
                filename, original_filename, file_size, mime_type, file_type,
                storage_key, width, height, duration
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            MEDIA_FILE_COLUMNS
        );

        let media_file = sqlx::query_as::<_, MediaFile>(&query)
            .bind(&file.filename)
            .bind(&file.original_filename)
            .bind(file.file_size)
            .bind(&file.mime_type)
            .bind(file.file_type)
            .bind(&file.storage_key)
            .bind(file.width)
            .bind(file.height)
            .bind(file.duration)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    storage_key = %file.storage_key,
                    "Failed to insert media file"
                );
                AppError::Database(e)
            })?;

        Ok(media_file)
    }

    #[tracing::instrument(skip(self), fields(db.table = "media_files", db.operation = "select", db.record_id = %id))]
    async fn get(&self, id: MediaFileId) -> Result<Option<MediaFile>, AppError> {
        let query = format!("SELECT {} FROM media_files WHERE id = $1", MEDIA_FILE_COLUMNS);

        let media_file = sqlx::query_as::<_, MediaFile>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(media_file)
    }

    #[tracing::instrument(skip(self), fields(db.table = "media_files", db.operation = "select", db.limit = filter.limit, db.offset = filter.offset))]
    async fn list(&self, filter: &MediaFileFilter) -> Result<(Vec<MediaFile>, i64), AppError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM media_files", MEDIA_FILE_COLUMNS));
        Self::push_filters(&mut builder, filter);
        builder.push(" ORDER BY uploaded_at DESC, id DESC LIMIT ");
        builder.push_bind(filter.limit);
        builder.push(" OFFSET ");
        builder.push_bind(filter.offset);

        let files = builder
            .build_query_as::<MediaFile>()
            .fetch_all(&self.pool)
            .await?;

        let mut count_builder = QueryBuilder::new("SELECT COUNT(*) FROM media_files");
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok((files, total))
    }

    #[tracing::instrument(skip(self), fields(db.table = "media_files", db.operation = "update", db.record_id = %id))]
    async fn set_thumbnail_key(
        &self,
        id: MediaFileId,
        thumbnail_key: &str,
    ) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("UPDATE media_files SET thumbnail_key = $2 WHERE id = $1")
            .bind(id)
            .bind(thumbnail_key)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "media_files", db.operation = "delete", db.record_id = %id))]
    async fn delete(&self, id: MediaFileId) -> Result<bool, AppError> {
        let rows_affected = sqlx::query("DELETE FROM media_files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
