//! Field values, records, and field descriptors
//!
//! Validation never inspects Rust types directly. A record hands out
//! [`FieldDescriptor`]s, each carrying a [`FieldValue`] view of the field,
//! and rules work on that view alone.
//!
//! [`AsFieldValue`] converts common Rust types into a [`FieldValue`]. The
//! [`record!`](crate::record) macro implements it (and [`Record`]) for
//! user structs.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// KIND
// ============================================================================

/// The shape of a field value, as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Text.
    String,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point number.
    Float,
    /// Boolean.
    Bool,
    /// Ordered collection (`Vec`, slices, arrays, sets).
    Sequence,
    /// Key-value collection.
    Mapping,
    /// A value that may be absent (`Option`).
    Optional,
    /// A nested record.
    Record,
}

impl Kind {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Optional => "optional",
            Kind::Record => "record",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed view of one field's runtime value.
///
/// Collections only expose their length: no rule looks inside them.
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// Text.
    Str(&'a str),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Ordered collection with the given length.
    Seq(usize),
    /// Key-value collection with the given length.
    Map(usize),
    /// An optional value; `None` when absent.
    Optional(Option<Box<FieldValue<'a>>>),
    /// A nested record.
    Record(&'a dyn Record),
}

impl<'a> FieldValue<'a> {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            FieldValue::Str(_) => Kind::String,
            FieldValue::Int(_) => Kind::Int,
            FieldValue::Uint(_) => Kind::Uint,
            FieldValue::Float(_) => Kind::Float,
            FieldValue::Bool(_) => Kind::Bool,
            FieldValue::Seq(_) => Kind::Sequence,
            FieldValue::Map(_) => Kind::Mapping,
            FieldValue::Optional(_) => Kind::Optional,
            FieldValue::Record(_) => Kind::Record,
        }
    }

    /// Whether this is the zero value of its kind.
    ///
    /// A record is zero when every one of its fields is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Int(n) => *n == 0,
            FieldValue::Uint(n) => *n == 0,
            FieldValue::Float(n) => *n == 0.0,
            FieldValue::Bool(b) => !b,
            FieldValue::Seq(len) | FieldValue::Map(len) => *len == 0,
            FieldValue::Optional(inner) => inner.is_none(),
            FieldValue::Record(record) => record.fields().iter().all(|f| f.value.is_zero()),
        }
    }

    /// Looks through present optionals.
    ///
    /// Returns `None` for an absent optional, otherwise the innermost
    /// non-optional value.
    #[must_use]
    pub fn present(&self) -> Option<&FieldValue<'a>> {
        match self {
            FieldValue::Optional(Some(inner)) => inner.present(),
            FieldValue::Optional(None) => None,
            other => Some(other),
        }
    }

    /// Returns the text if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Str(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            FieldValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            FieldValue::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            FieldValue::Float(n) => f.debug_tuple("Float").field(n).finish(),
            FieldValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            FieldValue::Seq(len) => f.debug_tuple("Seq").field(len).finish(),
            FieldValue::Map(len) => f.debug_tuple("Map").field(len).finish(),
            FieldValue::Optional(inner) => f.debug_tuple("Optional").field(inner).finish(),
            FieldValue::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A struct-like value whose fields can be validated.
///
/// Usually implemented through the [`record!`](crate::record) macro, but a
/// manual implementation works the same way and can build descriptors from
/// any source (a schema map, generated code, ...).
///
/// `Sync` is required because sibling fields are validated on separate
/// threads.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{AsFieldValue, FieldDescriptor, Record};
///
/// struct Login {
///     user: String,
/// }
///
/// impl Record for Login {
///     fn type_name(&self) -> &'static str {
///         "Login"
///     }
///
///     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
///         vec![FieldDescriptor::new("user", self.user.as_field_value()).with_rules("required")]
///     }
/// }
/// ```
pub trait Record: Sync {
    /// Name of the record type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Descriptors for every field, in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field of a record: name, value, and rule specification.
#[derive(Debug, Clone)]
pub struct FieldDescriptor<'a> {
    /// Field name, used to qualify error messages.
    pub name: Cow<'static, str>,
    /// Runtime value.
    pub value: FieldValue<'a>,
    /// Rule specification, e.g. `required,min_length=3`.
    pub rules: Cow<'static, str>,
    /// Serialization name hint. Carried for diagnostics only.
    pub serialized_name: Option<Cow<'static, str>>,
}

impl<'a> FieldDescriptor<'a> {
    /// Creates a descriptor with no rules.
    pub fn new(name: impl Into<Cow<'static, str>>, value: FieldValue<'a>) -> Self {
        Self {
            name: name.into(),
            value,
            rules: Cow::Borrowed(""),
            serialized_name: None,
        }
    }

    /// Sets the rule specification.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: impl Into<Cow<'static, str>>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Sets the serialization name hint.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_serialized_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.serialized_name = Some(name.into());
        self
    }

    /// Kind of the field's value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }
}

// ============================================================================
// AS FIELD VALUE
// ============================================================================

/// Types that can present themselves as a [`FieldValue`].
pub trait AsFieldValue {
    /// Borrows `self` as a field value.
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

impl AsFieldValue for bool {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

macro_rules! impl_as_field_value {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(<$target>::from(*self))
                }
            }
        )+
    };
}

impl_as_field_value!(Int as i64: i8, i16, i32, i64);
impl_as_field_value!(Uint as u64: u8, u16, u32, u64);
impl_as_field_value!(Float as f64: f32, f64);

impl AsFieldValue for isize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i64)
    }
}

impl AsFieldValue for usize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Uint(*self as u64)
    }
}

impl<T> AsFieldValue for [T] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T, const N: usize> AsFieldValue for [T; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(N)
    }
}

impl<T> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T> AsFieldValue for VecDeque<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T, S> AsFieldValue for HashSet<T, S> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T> AsFieldValue for BTreeSet<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<K, V, S> AsFieldValue for HashMap<K, V, S> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V> AsFieldValue for BTreeMap<K, V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Optional(self.as_ref().map(|v| Box::new(v.as_field_value())))
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Arc<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

// ============================================================================
// TESTS
// ============================================================================
