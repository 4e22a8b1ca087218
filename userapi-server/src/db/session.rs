//! Request-scoped database session
//!
//! A `Session` is one pooled connection inside an open transaction.
//! Commit is explicit; dropping an uncommitted session rolls back and
//! returns the connection to the pool.

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Acquire a connection and open a transaction on it.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Like `begin`, but takes SQLite's write lock up front (`BEGIN IMMEDIATE`).
    ///
    /// A deferred transaction that reads and then writes cannot upgrade its
    /// lock once another connection has committed, and fails with
    /// `SQLITE_BUSY` regardless of the busy timeout. Immediate transactions
    /// queue on the busy timeout instead.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Self { tx })
    }

    /// Connection to run statements on.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    /// Commit the transaction and release the connection.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}
