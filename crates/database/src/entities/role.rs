//! Role entity.

use serde::{Deserialize, Serialize};

/// A named permission tag, referenced by users through a many-to-many
/// association. Roles are reference data seeded by migration; this backend
/// never creates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_compare_by_value() {
        let admin = Role {
            id: 1,
            name: "ADMIN".to_string(),
        };
        assert_eq!(
            admin,
            Role {
                id: 1,
                name: "ADMIN".to_string()
            }
        );
        assert_ne!(
            admin,
            Role {
                id: 2,
                name: "USER".to_string()
            }
        );
    }
}
