//! `PostgreSQL` repository implementation for user accounts.

use super::{models::UserRow, schema::users};
use crate::persistence::{PgPool, get_conn_with, run_blocking_with};
use crate::user::{
    domain::{Email, Nickname, PasswordDigest, PersistedUserData, User, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, UserRepositoryError::persistence)?;
                f(&mut connection)
            },
            UserRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn store(&self, user: &User) -> UserRepositoryResult<()> {
        let email = user.email().clone();
        let row = UserRow {
            id: user.id().into_inner(),
            email: user.email().as_str().to_owned(),
            nickname: user.nickname().as_str().to_owned(),
            password_hash: user.password().as_str().to_owned(),
            created_at: user.created_at(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicateEmail(email.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_email(&self, email: &Email) -> UserRepositoryResult<Option<User>> {
        let email_str = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::email.eq(&email_str))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn exists_by_email(&self, email: &Email) -> UserRepositoryResult<bool> {
        let email_str = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                users::table.filter(users::email.eq(&email_str)),
            ))
            .get_result::<bool>(connection)
            .map_err(UserRepositoryError::persistence)
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        email,
        nickname,
        password_hash,
        created_at,
    } = row;

    let data = PersistedUserData {
        id: UserId::from_uuid(id),
        email: Email::new(email).map_err(UserRepositoryError::invalid_persisted_data)?,
        nickname: Nickname::new(nickname).map_err(UserRepositoryError::invalid_persisted_data)?,
        password: PasswordDigest::from_phc(password_hash),
        created_at,
    };
    Ok(User::from_persisted(data))
}
