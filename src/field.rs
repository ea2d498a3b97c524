use uuid::{Context, Timestamp, Uuid};

use crate::{ColumnType, DbBackend, FormField, UuidFieldErr, UuidStorage, Value};

/// The UUID generation algorithm a field is configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidVersion {
    /// Time and node based
    V1,
    /// Namespace hashed with MD5
    V3,
    /// Random
    V4,
    /// Namespace hashed with SHA-1
    V5,
}

impl UuidVersion {
    /// Resolve a numeric version, as written in a schema definition
    pub fn from_number(version: u8) -> Result<Self, UuidFieldErr> {
        match version {
            1 => Ok(Self::V1),
            3 => Ok(Self::V3),
            4 => Ok(Self::V4),
            5 => Ok(Self::V5),
            v => Err(UuidFieldErr::Config(format!(
                "UUID version {} is not supported",
                v
            ))),
        }
    }

    /// The numeric version
    pub fn number(&self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V3 => 3,
            Self::V4 => 4,
            Self::V5 => 5,
        }
    }
}

/// A field which stores a UUID value, in hex format on backends without
/// richer column types.
///
/// The field may be marked [auto][UuidField::auto], which generates a value
/// on initial save. While all UUIDs are expected to be unique, auto fields
/// also carry a `UNIQUE` constraint so the backing store enforces it.
///
/// Configuration is immutable after construction; the builder methods
/// consume and return `self`:
///
/// ```
/// use uuid_field::UuidField;
///
/// let field = UuidField::new(4).unwrap().auto();
/// assert!(field.is_unique());
/// assert!(!field.is_editable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidField {
    pub(crate) version: UuidVersion,
    pub(crate) auto: bool,
    pub(crate) node: Option<[u8; 6]>,
    pub(crate) clock_seq: Option<u16>,
    pub(crate) namespace: Option<Uuid>,
    pub(crate) name: Option<String>,
    pub(crate) editable: bool,
    pub(crate) blank: bool,
    pub(crate) unique: bool,
}

impl UuidField {
    /// Construct a field for a numeric UUID version.
    ///
    /// Fails with [UuidFieldErr::Config] unless the version is 1, 3, 4 or 5.
    pub fn new(version: u8) -> Result<Self, UuidFieldErr> {
        Ok(Self::of(UuidVersion::from_number(version)?))
    }

    /// Construct a field for a known UUID version
    pub fn of(version: UuidVersion) -> Self {
        Self {
            version,
            auto: false,
            node: None,
            clock_seq: None,
            namespace: None,
            name: None,
            editable: true,
            blank: false,
            unique: false,
        }
    }

    /// Generate a value on initial save.
    ///
    /// Auto fields are not user editable, may be left blank, and are unique
    /// at the schema level.
    pub fn auto(mut self) -> Self {
        self.auto = true;
        self.editable = false;
        self.blank = true;
        self.unique = true;
        self
    }

    /// Set the node id used for version 1 generation
    pub fn node(mut self, node: [u8; 6]) -> Self {
        self.node = Some(node);
        self
    }

    /// Set the clock sequence used for version 1 generation
    pub fn clock_seq(mut self, clock_seq: u16) -> Self {
        self.clock_seq = Some(clock_seq);
        self
    }

    /// Set the namespace used for version 3 / 5 generation
    pub fn namespace(mut self, namespace: Uuid) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Set the namespace from its string form.
    ///
    /// Fails with [UuidFieldErr::Parse] if the string is not a well-formed
    /// UUID.
    pub fn try_namespace(self, namespace: &str) -> Result<Self, UuidFieldErr> {
        let namespace = Uuid::parse_str(namespace).map_err(|e| {
            UuidFieldErr::Parse(format!("namespace '{}' is not a valid UUID: {}", namespace, e))
        })?;
        Ok(self.namespace(namespace))
    }

    /// Set the name used for version 3 / 5 generation
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// The configured generation version
    pub fn version(&self) -> UuidVersion {
        self.version
    }

    /// Returns true if the field generates a value on initial save
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    /// Returns true if the field is user editable
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Returns true if the field may be left blank
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// Returns true if the field carries a `UNIQUE` constraint
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// The logical maximum textual length, fixed at 32 hex characters
    /// regardless of the physical encoding
    pub fn max_length(&self) -> u32 {
        32
    }

    /// The column type used on the given backend: the native `uuid` type on
    /// Postgres, `binary(16)` on MySQL, `char(32)` otherwise
    pub fn db_type(&self, backend: DbBackend) -> ColumnType {
        ColumnType::for_backend(backend)
    }

    /// Generate a new UUID value according to the configured version.
    ///
    /// Versions 3 and 5 require both [namespace][UuidField::namespace] and
    /// [name][UuidField::name] to be set, and fail with
    /// [UuidFieldErr::Generation] otherwise.
    pub fn create_uuid(&self) -> Result<Uuid, UuidFieldErr> {
        match self.version {
            UuidVersion::V1 => {
                let node = self.node.unwrap_or_else(random_node_id);
                let context = Context::new(self.clock_seq.unwrap_or_else(random_clock_seq));
                Ok(Uuid::new_v1(Timestamp::now(&context), &node))
            }
            UuidVersion::V3 | UuidVersion::V5 => {
                let name = self.name.as_deref().ok_or_else(|| {
                    UuidFieldErr::Generation(format!(
                        "the name parameter of a version {} field needs to be set",
                        self.version.number()
                    ))
                })?;
                let namespace = self.namespace.ok_or_else(|| {
                    UuidFieldErr::Generation(format!(
                        "the namespace parameter of a version {} field needs to be set",
                        self.version.number()
                    ))
                })?;
                Ok(if self.version == UuidVersion::V3 {
                    Uuid::new_v3(&namespace, name.as_bytes())
                } else {
                    Uuid::new_v5(&namespace, name.as_bytes())
                })
            }
            UuidVersion::V4 => Ok(Uuid::new_v4()),
        }
    }

    /// Called immediately before a row is written.
    ///
    /// For an auto field on an insert with no value set, generates a new
    /// UUID, assigns it into `slot` so the caller observes it after save,
    /// and returns its 32-character hex form as the value to persist. In all
    /// other cases the current value is returned unchanged.
    pub fn pre_save(
        &self,
        slot: &mut Option<Uuid>,
        insert: bool,
    ) -> Result<Option<Value>, UuidFieldErr> {
        if self.auto && insert && slot.is_none() {
            let id = self.create_uuid()?;
            tracing::debug!(%id, "auto-generated UUID value");
            *slot = Some(id);
            return Ok(Some(Value::Text(id.simple().to_string())));
        }
        Ok((*slot).map(Value::Uuid))
    }

    /// Cast a value into the representation expected by the backend.
    ///
    /// Accepts a UUID value object as well as loosely formatted dashed or
    /// undashed hex text. A pure mapping; never generates.
    pub fn get_db_prep_value(
        &self,
        value: &Value,
        backend: DbBackend,
    ) -> Result<Value, UuidFieldErr> {
        let id = match value {
            Value::Uuid(v) => *v,
            Value::Text(s) => {
                // support pretty UUIDs with dashed syntax as well
                let hex = s.to_ascii_lowercase().replace('-', "");
                Uuid::parse_str(&hex).map_err(|e| {
                    UuidFieldErr::Parse(format!("'{}' is not a valid UUID: {}", s, e))
                })?
            }
            Value::Bytes(b) => decode_binary(b)?,
        };
        Ok(match backend.uuid_storage() {
            UuidStorage::Native => Value::Uuid(id),
            UuidStorage::Binary => Value::Bytes(id.as_bytes().to_vec()),
            UuidStorage::CharHex => Value::Text(id.simple().to_string()),
        })
    }

    /// Returns a UUID from the value returned by the database.
    ///
    /// Absent or empty input maps to `None`; 16 bytes are decoded as raw
    /// binary; anything textual is parsed as dashed or undashed hex.
    pub fn try_from_db(&self, value: Option<&Value>) -> Result<Option<Uuid>, UuidFieldErr> {
        let value = match value {
            None => return Ok(None),
            Some(v) if v.is_empty() => return Ok(None),
            Some(v) => v,
        };
        match value {
            Value::Uuid(v) => Ok(Some(*v)),
            Value::Bytes(b) => decode_binary(b).map(Some),
            Value::Text(s) => Uuid::parse_str(s)
                .map(Some)
                .map_err(|e| UuidFieldErr::Parse(format!("'{}' is not a valid UUID: {}", s, e))),
        }
    }

    /// The canonical dashed string form of a value, or the empty string for
    /// an absent value
    pub fn value_to_string(&self, value: Option<&Uuid>) -> String {
        match value {
            Some(v) => v.hyphenated().to_string(),
            None => String::new(),
        }
    }

    /// The form widget for this field: a plain text input of maximum
    /// length 32
    pub fn formfield(&self) -> FormField {
        FormField::text(self.max_length()).required(!self.blank)
    }
}

fn decode_binary(bytes: &[u8]) -> Result<Uuid, UuidFieldErr> {
    if bytes.len() != 16 {
        return Err(UuidFieldErr::Parse(format!(
            "binary UUID must be 16 bytes, got {}",
            bytes.len()
        )));
    }
    Uuid::from_slice(bytes).map_err(|e| UuidFieldErr::Parse(e.to_string()))
}

// RFC 4122 §4.5: a node id not taken from an IEEE 802 address must have the
// multicast bit set.
fn random_node_id() -> [u8; 6] {
    let bytes = Uuid::new_v4().into_bytes();
    let mut node = [0u8; 6];
    node.copy_from_slice(&bytes[10..16]);
    node[0] |= 0x01;
    node
}

fn random_clock_seq() -> u16 {
    let bytes = Uuid::new_v4().into_bytes();
    u16::from_be_bytes([bytes[0], bytes[1]])
}
