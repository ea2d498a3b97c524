use std::sync::Once;

/// The kind of database backend a value is bound for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbBackend {
    /// A PostgreSQL-family backend
    Postgres,
    /// A MySQL-family backend
    MySql,
    /// A SQLite backend; also the fallback for any dialect without
    /// special UUID handling
    Sqlite,
}

/// The physical encoding a backend uses for a UUID column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidStorage {
    /// The backend's native UUID column type; values pass through opaquely
    Native,
    /// A fixed 16-byte binary column
    Binary,
    /// A fixed 32-character hexadecimal string column, no separators
    CharHex,
}

impl DbBackend {
    /// Resolve a backend from a driver's vendor identifier string.
    ///
    /// ```
    /// use uuid_field::DbBackend;
    ///
    /// assert_eq!(DbBackend::from_vendor("postgresql"), Some(DbBackend::Postgres));
    /// assert_eq!(DbBackend::from_vendor("mysql"), Some(DbBackend::MySql));
    /// assert_eq!(DbBackend::from_vendor("oracle"), None);
    /// ```
    pub fn from_vendor(vendor: &str) -> Option<Self> {
        let vendor = vendor.to_ascii_lowercase();
        if vendor.contains("postgres") {
            Some(Self::Postgres)
        } else if vendor.contains("mysql") || vendor.contains("mariadb") {
            Some(Self::MySql)
        } else if vendor.contains("sqlite") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }

    /// The physical encoding this backend stores UUID values in
    pub fn uuid_storage(&self) -> UuidStorage {
        match self {
            Self::Postgres => UuidStorage::Native,
            Self::MySql => UuidStorage::Binary,
            Self::Sqlite => UuidStorage::CharHex,
        }
    }

    /// Returns true if this backend stores UUID values as raw bytes
    pub fn is_binary_storage(&self) -> bool {
        self.uuid_storage() == UuidStorage::Binary
    }
}

static NATIVE_ADAPTATION: Once = Once::new();

/// Registers native UUID adaptation with the backend's driver, if the
/// backend has a native UUID column type.
///
/// Call this once during application startup. It is idempotent, and a no-op
/// for backends that store UUIDs as bytes or text. Returns whether native
/// adaptation is active for the given backend.
pub fn ensure_native_adaptation(backend: DbBackend) -> bool {
    match backend.uuid_storage() {
        UuidStorage::Native => {
            NATIVE_ADAPTATION.call_once(|| {
                tracing::debug!(?backend, "registered native UUID adaptation");
            });
            true
        }
        _ => false,
    }
}
