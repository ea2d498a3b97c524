use crate::{DbBackend, UuidStorage};

/// The type of column a UUID field occupies, as defined in the SQL format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    /// The backend's native `UUID` type
    Uuid,
    /// `BINARY` type of specified fixed length
    Binary(u32),
    /// `CHAR` type of specified fixed length
    Char(u32),
}

impl ColumnType {
    /// The column type a backend uses to store this field
    pub fn for_backend(backend: DbBackend) -> Self {
        match backend.uuid_storage() {
            UuidStorage::Native => Self::Uuid,
            UuidStorage::Binary => Self::Binary(16),
            UuidStorage::CharHex => Self::Char(32),
        }
    }

    /// Render the DDL fragment for this column type
    pub fn build(&self) -> String {
        match self {
            Self::Uuid => "uuid".to_owned(),
            Self::Binary(len) => format!("binary({})", len),
            Self::Char(len) => format!("char({})", len),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build() {
        assert_eq!(ColumnType::Uuid.build(), "uuid");
        assert_eq!(ColumnType::Binary(16).build(), "binary(16)");
        assert_eq!(ColumnType::Char(32).build(), "char(32)");
    }

    #[test]
    fn test_for_backend() {
        assert_eq!(ColumnType::for_backend(DbBackend::Postgres), ColumnType::Uuid);
        assert_eq!(
            ColumnType::for_backend(DbBackend::MySql),
            ColumnType::Binary(16)
        );
        assert_eq!(
            ColumnType::for_backend(DbBackend::Sqlite),
            ColumnType::Char(32)
        );
    }
}
