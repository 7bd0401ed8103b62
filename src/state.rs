use crate::{
    config::RuntimeConfiguration,
    error::{ApiResult, MigrateSnafu, OpenDatabaseSnafu},
    store::{BookStore, StudentStore, postgres::PgStudentStore},
};
use snafu::ResultExt;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentsState {
    store: Arc<dyn StudentStore>,
}

impl StudentsState {
    pub async fn new(options: PgPoolOptions, config: RuntimeConfiguration) -> ApiResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self::with_store(Arc::new(PgStudentStore::new(pool))))
    }

    #[must_use]
    pub fn with_store(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }
}

#[derive(Clone)]
pub struct BooksState {
    store: Arc<dyn BookStore>,
}

impl BooksState {
    #[must_use]
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &dyn BookStore {
        self.store.as_ref()
    }
}
