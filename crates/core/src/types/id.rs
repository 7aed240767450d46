//! Newtype references and IDs for type-safe entity identity.
//!
//! Two identity schemes coexist here:
//!
//! - Externally-owned references (`CustomerRef`, `ProductRef`) are opaque
//!   strings. Tally never parses them; whatever identity scheme the customer
//!   or product store uses passes through unchanged.
//! - Tally-owned IDs (`OrderId`, `InvoiceId`, `PaymentId`) are UUIDs assigned
//!   at creation and immutable thereafter.

use uuid::Uuid;

/// Macro to define an opaque string reference to an externally-owned entity.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use tally_core::define_ref;
/// define_ref!(CustomerRef);
/// define_ref!(ProductRef);
///
/// let customer = CustomerRef::new("CUST-1");
/// let product = ProductRef::new("PROD-1");
///
/// // These are different types, so this won't compile:
/// // let _: CustomerRef = product;
/// ```
#[macro_export]
macro_rules! define_ref {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new reference from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the reference as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the reference and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Macro to define a UUID-backed ID for a Tally-owned entity.
///
/// Creates a newtype wrapper around [`uuid::Uuid`] with a `generate()`
/// constructor (v4), `Display`, and transparent serde.
#[macro_export]
macro_rules! define_uuid_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Generate a fresh random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID (e.g. one loaded from a store).
            #[must_use]
            pub const fn from_uuid(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Externally-owned references
define_ref!(CustomerRef);
define_ref!(ProductRef);

// Tally-owned entity IDs
define_uuid_id!(OrderId);
define_uuid_id!(InvoiceId);
define_uuid_id!(PaymentId);

/// Parse helper for IDs arriving as path/query strings.
///
/// # Errors
///
/// Returns the underlying [`uuid::Error`] if `s` is not a valid UUID.
pub fn parse_order_id(s: &str) -> Result<OrderId, uuid::Error> {
    Ok(OrderId::from_uuid(Uuid::parse_str(s)?))
}
