//! `SQLite` implementation of the `TodoRepository` trait.

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use todo_core::{NewTodo, RepositoryError, Todo, TodoRepository};

const TODO_SELECT_COLUMNS: &str = "id, description, done";

/// `SQLite` implementation of the `TodoRepository` trait.
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new `SQLite` todo repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Database(db)
            if matches!(
                db.kind(),
                ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
                    | ErrorKind::ForeignKeyViolation
            ) =>
        {
            RepositoryError::Constraint(db.to_string())
        }
        other => RepositoryError::Storage(other.to_string()),
    }
}

fn row_to_todo(row: &SqliteRow) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        id: row.try_get("id").map_err(storage_error)?,
        description: row.try_get("description").map_err(storage_error)?,
        done: row.try_get("done").map_err(storage_error)?,
    })
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, RepositoryError> {
        let query = format!("SELECT {TODO_SELECT_COLUMNS} FROM todos ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_todo).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError> {
        let query = format!("SELECT {TODO_SELECT_COLUMNS} FROM todos WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Todo with ID {id}")))?;

        row_to_todo(&row)
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, RepositoryError> {
        let query =
            format!("INSERT INTO todos (description) VALUES (?) RETURNING {TODO_SELECT_COLUMNS}");

        let row = sqlx::query(&query)
            .bind(&todo.description)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        row_to_todo(&row)
    }

    async fn update(&self, todo: &Todo) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE todos SET description = ?, done = ? WHERE id = ?")
            .bind(&todo.description)
            .bind(todo.done)
            .bind(todo.id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Todo with ID {}",
                todo.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Todo with ID {id}")));
        }

        Ok(())
    }
}
