//! Database connectivity probing.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

/// Attempt to open a database connection.
///
/// Failures are swallowed: the caller gets `None` and decides how to
/// degrade. The database is opened read-write but never created, so probing
/// a missing file reports unreachable rather than leaving one behind. The
/// caller owns the returned handle.
pub fn try_connect(path: &Path) -> Option<Connection> {
    match Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE) {
        Ok(conn) => Some(conn),
        Err(err) => {
            crate::log_status!("db", "Connection to {} failed: {}", path.display(), err);
            None
        }
    }
}
