/// Database connection and station registry query.
///
/// The station registry is a single table, `estacoes`, with the
/// storage-assigned `id` and the external `codigo_hidro` used by the
/// monitoring API. This module owns connecting to PostgreSQL from the
/// discrete DB_* settings and materializing the full registry in one
/// read-only query. The connection closes when the `Client` is dropped,
/// so every exit path of the caller releases it.

use crate::config::Config;
use crate::model::StationRecord;
use postgres::{Client, NoTls};

/// Database error with the failing phase attached
#[derive(Debug)]
pub enum DbError {
    /// Could not reach the server or credentials were rejected.
    ConnectionFailed(postgres::Error),
    /// The station registry query failed.
    QueryFailed(postgres::Error),
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::ConnectionFailed(e) => {
                write!(f, "Failed to connect to the database.\n\n")?;
                write!(f, "  Error: {}\n\n", e)?;
                write!(f, "  Common causes:\n")?;
                write!(f, "  - Database service not reachable at DB_SERVER\n")?;
                write!(f, "  - Database named in DB_DATABASE does not exist\n")?;
                write!(f, "  - Incorrect DB_USERNAME or DB_PASSWORD")
            }
            DbError::QueryFailed(e) => {
                write!(f, "Station registry query failed.\n\n")?;
                write!(f, "  Error: {}\n\n", e)?;
                write!(f, "  The 'estacoes' table must exist with columns 'id' and 'codigo_hidro'")
            }
        }
    }
}

impl std::error::Error for DbError {}

/// Opens a connection using the DB_* settings from the configuration.
pub fn connect(config: &Config) -> Result<Client, DbError> {
    postgres::Config::new()
        .host(&config.db_server)
        .dbname(&config.db_database)
        .user(&config.db_username)
        .password(&config.db_password)
        .connect(NoTls)
        .map_err(DbError::ConnectionFailed)
}

/// Reads the complete station registry, ordered by id so runs visit
/// stations deterministically. An empty table yields an empty vector;
/// deciding that nothing needs notifying is the caller's business.
pub fn read_stations(client: &mut Client) -> Result<Vec<StationRecord>, DbError> {
    let rows = client
        .query("SELECT id, codigo_hidro FROM estacoes ORDER BY id", &[])
        .map_err(DbError::QueryFailed)?;

    Ok(rows
        .iter()
        .map(|row| StationRecord {
            id: row.get(0),
            hydro_code: row.get(1),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
