//! Macros for declaring validatable records with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`]: declare a struct together with its [`Record`] and
//!   [`AsFieldValue`] implementations
//!
//! [`Record`]: crate::foundation::Record
//! [`AsFieldValue`]: crate::foundation::AsFieldValue

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Declares a struct whose fields carry rule specifications.
///
/// Per field, in this order, all optional:
///
/// - doc comments
/// - `#[rules = "..."]`: the rule specification
/// - `#[json = "..."]`: the serialization name hint
///
/// Struct-level attributes (derives, docs) pass through. A field whose type
/// was itself declared with `record!` is validated recursively.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::{Validator, record};
///
/// record! {
///     #[derive(Debug, Clone)]
///     pub struct Address {
///         #[rules = "required"]
///         pub city: String,
///         #[rules = "required"]
///         pub state: String,
///     }
/// }
///
/// record! {
///     #[derive(Debug, Clone)]
///     pub struct Profile {
///         /// Display name.
///         #[rules = "required"]
///         #[json = "name"]
///         pub name: String,
///         #[rules = "required"]
///         pub address: Address,
///     }
/// }
///
/// let profile = Profile {
///     name: "John Doe".into(),
///     address: Address { city: String::new(), state: "New York".into() },
/// };
///
/// let errors = Validator::new().validate(&profile).unwrap_err();
/// assert_eq!(
///     errors.to_string(),
///     "address.city: field is required and must not be empty"
/// );
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[rules = $rules:literal])?
                $(#[json = $json:literal])?
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::foundation::Record for $name {
            fn type_name(&self) -> &'static str {
                ::core::stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::foundation::FieldDescriptor<'_>> {
                ::std::vec![
                    $(
                        $crate::foundation::FieldDescriptor::new(
                            ::core::stringify!($field),
                            $crate::foundation::AsFieldValue::as_field_value(&self.$field),
                        )
                        $(.with_rules($rules))?
                        $(.with_serialized_name($json))?
                    ),*
                ]
            }
        }

        impl $crate::foundation::AsFieldValue for $name {
            fn as_field_value(&self) -> $crate::foundation::FieldValue<'_> {
                $crate::foundation::FieldValue::Record(self)
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
