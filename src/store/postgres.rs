use crate::{
    data::student::{NewStudent, Student},
    error::{ApiResult, MakeQuerySnafu},
    store::StudentStore,
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{Pool, Postgres};

#[derive(Clone, Debug)]
pub struct PgStudentStore {
    pool: Pool<Postgres>,
}

impl PgStudentStore {
    pub const fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self, limit: i64) -> ApiResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, student_number, first_name, middle_name, last_name, gender, birthday \
             FROM students ORDER BY id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn get(&self, id: i32) -> ApiResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, student_number, first_name, middle_name, last_name, gender, birthday \
             FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn insert(&self, new: NewStudent) -> ApiResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (student_number, first_name, middle_name, last_name, gender, birthday) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, student_number, first_name, middle_name, last_name, gender, birthday",
        )
        .bind(new.student_number)
        .bind(new.first_name)
        .bind(new.middle_name)
        .bind(new.last_name)
        .bind(new.gender)
        .bind(new.birthday)
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn update(&self, student: &Student) -> ApiResult<()> {
        sqlx::query(
            "UPDATE students \
             SET student_number = $2, first_name = $3, middle_name = $4, last_name = $5, \
                 gender = $6, birthday = $7 \
             WHERE id = $1",
        )
        .bind(student.id)
        .bind(&student.student_number)
        .bind(&student.first_name)
        .bind(&student.middle_name)
        .bind(&student.last_name)
        .bind(student.gender)
        .bind(student.birthday)
        .execute(&self.pool)
        .await
        .context(MakeQuerySnafu)?;

        Ok(())
    }

    async fn remove(&self, id: i32) -> ApiResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }
}
