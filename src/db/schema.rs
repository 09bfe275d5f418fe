pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT,
    category    TEXT,
    amount      REAL,
    description TEXT
);

"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Ordered upgrades; each entry carries the version it upgrades from.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // (1, "ALTER TABLE expenses ADD COLUMN note TEXT NOT NULL DEFAULT '';"),
];
