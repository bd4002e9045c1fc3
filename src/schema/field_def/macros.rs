//! Macros for record and token definitions
//!
//! These macros keep each record type a single declarative table: the struct,
//! its schema and its conversions are all generated from the same field list.

/// Implement [`FieldSlot`](crate::schema::FieldSlot) for `T` and `Option<T>`
///
/// `T` must implement [`FieldCodec`](crate::schema::FieldCodec).
#[macro_export]
macro_rules! impl_field_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::schema::FieldSlot for $ty {
                const REQUIRED: bool = true;

                fn fill(
                    value: ::core::option::Option<$crate::schema::FieldValue>,
                ) -> ::core::option::Option<Self> {
                    value.and_then(<$ty as $crate::schema::FieldCodec>::decode)
                }

                fn drain(&self) -> ::core::option::Option<$crate::schema::FieldValue> {
                    ::core::option::Option::Some($crate::schema::FieldCodec::encode(self))
                }
            }

            impl $crate::schema::FieldSlot for ::core::option::Option<$ty> {
                const REQUIRED: bool = false;

                fn fill(
                    value: ::core::option::Option<$crate::schema::FieldValue>,
                ) -> ::core::option::Option<Self> {
                    match value {
                        ::core::option::Option::None => ::core::option::Option::Some(None),
                        ::core::option::Option::Some(value) => {
                            <$ty as $crate::schema::FieldCodec>::decode(value).map(Some)
                        }
                    }
                }

                fn drain(&self) -> ::core::option::Option<$crate::schema::FieldValue> {
                    self.as_ref().map($crate::schema::FieldCodec::encode)
                }
            }
        )+
    };
}

/// Macro to define a closed set of textual tokens as an enum
///
/// Generates the enum with `TOKENS`, `as_str`, `Display`, `FromStr` and the
/// field conversions, so the enum can be used directly as a record field.
///
/// # Example
///
/// ```ignore
/// token_enum! {
///     /// Administrative gender
///     pub enum Gender {
///         Male => "M",
///         Female => "F",
///     }
/// }
///
/// assert_eq!(Gender::TOKENS, &["M", "F"]);
/// assert_eq!("F".parse::<Gender>(), Ok(Gender::Female));
/// ```
#[macro_export]
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[doc = $doc])*
                $variant,
            )+
        }

        impl $name {
            /// Legal tokens in declaration order
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// Token spelling of the value
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $($token => ::core::result::Result::Ok(Self::$variant),)+
                    other => ::core::result::Result::Err(::std::format!(
                        "invalid {}: {other:?}",
                        ::core::stringify!($name)
                    )),
                }
            }
        }

        impl $crate::schema::FieldCodec for $name {
            fn decode(value: $crate::schema::FieldValue) -> ::core::option::Option<Self> {
                value.as_text().and_then(|token| token.parse().ok())
            }

            fn encode(&self) -> $crate::schema::FieldValue {
                $crate::schema::FieldValue::Text(self.as_str().to_string())
            }
        }

        $crate::impl_field_slot!($name);
    };
}

/// Macro to define a record type with its schema
///
/// Each field names its Rust type and its schema entry. The canonical name
/// defaults to the field identifier; `name` overrides it for identifiers that
/// are keywords. `alias` is the CSV header spelling. A field is required
/// unless its Rust type is an `Option`.
///
/// # Example
///
/// ```ignore
/// record_schema! {
///     /// An allergy recorded for a patient
///     pub struct Allergy {
///         record: "Allergy",
///         table: "allergies",
///         fields: {
///             /// Date the allergy was diagnosed
///             start: NaiveDate { alias: "START", kind: FieldType::Date },
///             r#type: Option<AllergyType> {
///                 name: "type",
///                 alias: "TYPE",
///                 kind: FieldType::Token(AllergyType::TOKENS),
///             },
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! record_schema {
    (@key $field:ident) => { ::core::stringify!($field) };
    (@key $field:ident $name:literal) => { $name };
    (@alias) => { ::core::option::Option::None };
    (@alias $alias:literal) => { ::core::option::Option::Some($alias) };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            record: $record:literal,
            table: $table:literal,
            $(rules: [$($rule:expr),* $(,)?],)?
            fields: {
                $(
                    $(#[doc = $doc:literal])*
                    $field:ident : $ty:ty {
                        $(name: $key:literal,)?
                        $(alias: $alias:literal,)?
                        kind: $kind:expr $(,)?
                    }
                ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                pub $field: $ty,
            )+
        }

        impl $crate::schema::Record for $name {
            fn schema() -> &'static $crate::schema::RecordSchema {
                static SCHEMA: $crate::schema::RecordSchema = $crate::schema::RecordSchema {
                    name: $record,
                    table: $table,
                    fields: &[
                        $(
                            $crate::schema::FieldDescriptor {
                                name: $crate::record_schema!(@key $field $($key)?),
                                alias: $crate::record_schema!(@alias $($alias)?),
                                field_type: $kind,
                                required: <$ty as $crate::schema::FieldSlot>::REQUIRED,
                                description: ::core::concat!($($doc),*),
                            },
                        )+
                    ],
                    rules: &[$($($rule),*)?],
                };
                &SCHEMA
            }

            fn from_fields(
                values: ::std::vec::Vec<::core::option::Option<$crate::schema::FieldValue>>,
            ) -> ::core::result::Result<Self, $crate::error::FieldError> {
                let mut values = values.into_iter();
                ::core::result::Result::Ok(Self {
                    $(
                        $field: {
                            let value = values.next().flatten();
                            let found = value
                                .as_ref()
                                .map_or("nothing", $crate::schema::FieldValue::type_name);
                            <$ty as $crate::schema::FieldSlot>::fill(value).ok_or_else(|| {
                                $crate::error::FieldError::TypeCoercionFailure {
                                    field: $crate::record_schema!(@key $field $($key)?),
                                    expected: ::core::stringify!($ty).to_string(),
                                    value: found.to_string(),
                                }
                            })?
                        },
                    )+
                })
            }

            fn to_fields(&self) -> ::std::vec::Vec<::core::option::Option<$crate::schema::FieldValue>> {
                ::std::vec![$(<$ty as $crate::schema::FieldSlot>::drain(&self.$field)),+]
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S: $crate::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                let value = <Self as $crate::schema::Record>::to_json_value(self);
                $crate::serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                let value = <$crate::serde_json::Value as $crate::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::schema::Record>::from_json_value(&value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}
