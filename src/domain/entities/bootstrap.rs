//! Outcome of a store bootstrap run.

use std::fmt;

/// What a bootstrap run created, as opposed to found already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub database_created: bool,
    pub tables_created: bool,
}

impl fmt::Display for BootstrapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.database_created {
            f.write_str("Database created.")?;
        } else {
            f.write_str("Database already created.")?;
        }

        if self.tables_created {
            f.write_str(" Database tables created.")
        } else {
            f.write_str(" Database tables already created.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_message() {
        let report = BootstrapReport {
            database_created: true,
            tables_created: true,
        };
        assert_eq!(
            report.to_string(),
            "Database created. Database tables created."
        );
    }

    #[test]
    fn test_repeated_run_message() {
        let report = BootstrapReport {
            database_created: false,
            tables_created: false,
        };
        assert_eq!(
            report.to_string(),
            "Database already created. Database tables already created."
        );
    }

    #[test]
    fn test_existing_database_without_tables() {
        let report = BootstrapReport {
            database_created: false,
            tables_created: true,
        };
        assert_eq!(
            report.to_string(),
            "Database already created. Database tables created."
        );
    }
}
