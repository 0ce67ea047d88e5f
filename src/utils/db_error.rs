//! Classification of PostgreSQL errors the repositories react to.

/// Name of the unique constraint PostgreSQL generates for `shortcode.shortcode`.
pub const SHORTCODE_UNIQUE_CONSTRAINT: &str = "shortcode_shortcode_key";

/// SQLSTATE raised by `CREATE DATABASE` when the database already exists.
const DUPLICATE_DATABASE: &str = "42P04";

/// Returns true if the error is a unique violation on the shortcode column.
pub fn is_unique_violation_on_shortcode(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORTCODE_UNIQUE_CONSTRAINT))
}

/// Returns true if `CREATE DATABASE` lost a race with another bootstrap.
pub fn is_duplicate_database(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == DUPLICATE_DATABASE)
}
