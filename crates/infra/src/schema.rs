//! Relational schema expected from the storage collaborator.
//!
//! Constraint names follow one convention across tables:
//! `pk_<table>` and `fk_<table>_<column>_<referred_table>`.

/// Name of a table's primary-key constraint.
pub fn primary_key_name(table: &str) -> String {
    format!("pk_{table}")
}

/// Name of a foreign-key constraint.
pub fn foreign_key_name(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{table}_{column}_{referred_table}")
}

/// `CREATE TABLE` statements, parents first.
///
/// Mission foreign keys cascade on delete, matching the in-memory store.
pub const DDL: [&str; 3] = [
    "CREATE TABLE planets (
    id BIGINT NOT NULL,
    name VARCHAR,
    distance_from_earth BIGINT,
    nearest_star VARCHAR,
    CONSTRAINT pk_planets PRIMARY KEY (id)
)",
    "CREATE TABLE scientists (
    id BIGINT NOT NULL,
    name VARCHAR,
    field_of_study VARCHAR,
    CONSTRAINT pk_scientists PRIMARY KEY (id)
)",
    "CREATE TABLE missions (
    id BIGINT NOT NULL,
    name VARCHAR,
    planet_id BIGINT,
    scientist_id BIGINT,
    CONSTRAINT pk_missions PRIMARY KEY (id),
    CONSTRAINT fk_missions_planet_id_planets FOREIGN KEY (planet_id)
        REFERENCES planets (id) ON DELETE CASCADE,
    CONSTRAINT fk_missions_scientist_id_scientists FOREIGN KEY (scientist_id)
        REFERENCES scientists (id) ON DELETE CASCADE
)",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_uses_constraint_naming_convention() {
        for table in ["planets", "scientists", "missions"] {
            let pk = primary_key_name(table);
            assert!(DDL.iter().any(|stmt| stmt.contains(&pk)), "missing {pk}");
        }

        let missions = DDL[2];
        assert!(missions.contains(&foreign_key_name("missions", "planet_id", "planets")));
        assert!(missions.contains(&foreign_key_name("missions", "scientist_id", "scientists")));
        assert_eq!(missions.matches("ON DELETE CASCADE").count(), 2);
    }

    #[test]
    fn parents_are_created_before_missions() {
        assert!(DDL[0].starts_with("CREATE TABLE planets"));
        assert!(DDL[1].starts_with("CREATE TABLE scientists"));
        assert!(DDL[2].starts_with("CREATE TABLE missions"));
    }
}
