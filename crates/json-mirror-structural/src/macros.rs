/// Declares a struct together with its [`Introspect`](crate::Introspect) and
/// [`Decode`](crate::Decode) impls.
///
/// Fields are encoded in declaration order under their Rust names. A first
/// field marked `#[base]` holds the parent record: its fields are flattened
/// into the same JSON object, ahead of the struct's own fields.
///
/// ```
/// use json_mirror_structural::{decode, encode, json_record};
///
/// json_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Person {
///         pub name: String,
///     }
/// }
///
/// json_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Employee {
///         #[base]
///         pub person: Person,
///         pub salary: f64,
///         pub manager: Option<String>,
///     }
/// }
///
/// let e = Employee {
///     person: Person { name: "Ann".into() },
///     salary: 10.5,
///     manager: None,
/// };
/// let tree = encode(&e).unwrap();
/// assert_eq!(tree["name"], "Ann");
/// assert!(tree.try_get("manager").is_none());
/// assert_eq!(decode::<Employee>(&tree).unwrap(), e);
/// ```
#[macro_export]
macro_rules! json_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            #[base]
            $base_vis:vis $base:ident : $base_ty:ty
            $(, $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty)* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $base_vis $base: $base_ty,
            $($(#[$field_meta])* $field_vis $field: $ty,)*
        }

        impl $crate::Introspect for $name {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(
                    $crate::Record::new(stringify!($name))
                        .with_base(&self.$base)
                        $(.with_field(stringify!($field), &self.$field))*
                )
            }
        }

        impl $crate::Decode for $name {
            fn descriptor() -> $crate::Descriptor {
                $crate::Descriptor::Record($crate::RecordDescriptor {
                    name: stringify!($name),
                    base: ::std::option::Option::Some(::std::boxed::Box::new(
                        <$base_ty as $crate::Decode>::descriptor(),
                    )),
                    fields: ::std::vec![$($crate::FieldDescriptor::of::<$ty>(stringify!($field))),*],
                })
            }

            fn decode(
                value: &$crate::JsonValue,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                let reader = $crate::RecordReader::new(stringify!($name), value)?;
                ::std::result::Result::Ok(Self {
                    $base: reader.base()?,
                    $($field: reader.field(stringify!($field))?,)*
                })
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$field_meta])* $field_vis $field: $ty,)*
        }

        impl $crate::Introspect for $name {
            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Record(
                    $crate::Record::new(stringify!($name))
                        $(.with_field(stringify!($field), &self.$field))*
                )
            }
        }

        impl $crate::Decode for $name {
            fn descriptor() -> $crate::Descriptor {
                $crate::Descriptor::Record($crate::RecordDescriptor {
                    name: stringify!($name),
                    base: ::std::option::Option::None,
                    fields: ::std::vec![$($crate::FieldDescriptor::of::<$ty>(stringify!($field))),*],
                })
            }

            #[allow(unused_variables)]
            fn decode(
                value: &$crate::JsonValue,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                let reader = $crate::RecordReader::new(stringify!($name), value)?;
                ::std::result::Result::Ok(Self {
                    $($field: reader.field(stringify!($field))?,)*
                })
            }
        }
    };
}
