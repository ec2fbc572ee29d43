pub const SCHEMA: &str = r#"
-- Named groupings; the name is unique under BINARY collation
CREATE TABLE IF NOT EXISTS organizational_units (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0 AND length(name) <= 50)
);

-- Physical locations; no two share both city and country
CREATE TABLE IF NOT EXISTS sites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    city TEXT NOT NULL CHECK (length(trim(city)) > 0 AND length(city) <= 50),
    country TEXT NOT NULL CHECK (length(trim(country)) > 0 AND length(country) <= 50),

    UNIQUE(city, country)
);

-- Personnel reference units, sites, and optionally a manager.
-- Deletes of referenced rows are refused by the store (NO ACTION).
CREATE TABLE IF NOT EXISTS personnel (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL CHECK (length(trim(first_name)) > 0 AND length(first_name) <= 50),
    last_name TEXT NOT NULL CHECK (length(trim(last_name)) > 0 AND length(last_name) <= 50),

    -- Canonical decimal text, e.g. '90000' or '12345.50'
    salary TEXT NOT NULL CHECK (CAST(salary AS REAL) BETWEEN 0 AND 1000000),

    organizational_unit_id INTEGER NOT NULL REFERENCES organizational_units(id),
    site_id INTEGER NOT NULL REFERENCES sites(id),
    manager_id INTEGER REFERENCES personnel(id)  -- NULL = no manager
);

CREATE INDEX IF NOT EXISTS idx_personnel_unit ON personnel(organizational_unit_id);
CREATE INDEX IF NOT EXISTS idx_personnel_site ON personnel(site_id);
CREATE INDEX IF NOT EXISTS idx_personnel_manager ON personnel(manager_id);
"#;
