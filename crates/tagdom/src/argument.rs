//! Tag call arguments
//!
//! Everything a tag constructor accepts converts into an [`Argument`].
//! Tuples stand in for variadic calls: `h.div(("text", child, attrs))`.

use std::borrow::Cow;

use tagdom_dom::NodeId;

use crate::Attrs;

/// One item of a tag call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Absent value, appends nothing
    Empty,
    /// Appended as a text node
    Text(String),
    /// Existing node, moved under the new element
    Node(NodeId),
    /// Appended item by item, in order
    List(Vec<Argument>),
    /// Set as attributes, or appended as text when it has no keys
    Attrs(Attrs),
}

impl Argument {
    /// True for [`Argument::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<()> for Argument {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Argument {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<char> for Argument {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

// Numbers and booleans carry no attributes, so they become text.
macro_rules! text_from_display {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

text_from_display! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    bool
}

// Floats read the way a browser prints numbers: `NaN`, `Infinity`, no
// negative zero, and exponent form outside [1e-6, 1e21).
macro_rules! text_from_float {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    let text = if value.is_nan() {
                        "NaN".to_string()
                    } else if value.is_infinite() {
                        let sign = if value > 0.0 { "" } else { "-" };
                        format!("{sign}Infinity")
                    } else if value == 0.0 {
                        "0".to_string()
                    } else if (1e-6..1e21).contains(&value.abs()) {
                        value.to_string()
                    } else {
                        signed_exponent(format!("{value:e}"))
                    };
                    Self::Text(text)
                }
            }
        )*
    };
}

text_from_float! { f32 f64 }

/// `1e21` -> `1e+21`
fn signed_exponent(mut text: String) -> String {
    if let Some(idx) = text.find('e') {
        if !text[idx + 1..].starts_with('-') {
            text.insert(idx + 1, '+');
        }
    }
    text
}

impl From<NodeId> for Argument {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

impl From<Attrs> for Argument {
    fn from(value: Attrs) -> Self {
        Self::Attrs(value)
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Argument>, const N: usize> From<[T; N]> for Argument {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Argument>> FromIterator<T> for Argument {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

macro_rules! list_from_tuple {
    ($($ty:ident $var:ident)+) => {
        impl<$($ty: Into<Argument>),+> From<($($ty,)+)> for Argument {
            fn from(($($var,)+): ($($ty,)+)) -> Self {
                Self::List(vec![$($var.into()),+])
            }
        }
    };
}

list_from_tuple!(A a);
list_from_tuple!(A a B b);
list_from_tuple!(A a B b C c);
list_from_tuple!(A a B b C c D d);
list_from_tuple!(A a B b C c D d E e);
list_from_tuple!(A a B b C c D d E e F f);
list_from_tuple!(A a B b C c D d E e F f G g);
list_from_tuple!(A a B b C c D d E e F f G g H h);
list_from_tuple!(A a B b C c D d E e F f G g H h I i);
list_from_tuple!(A a B b C c D d E e F f G g H h I i J j);
list_from_tuple!(A a B b C c D d E e F f G g H h I i J j K k);
list_from_tuple!(A a B b C c D d E e F f G g H h I i J j K k L l);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(Argument::from(()), Argument::Empty);
        assert_eq!(Argument::from("a"), Argument::Text("a".into()));
        assert_eq!(Argument::from(42u8), Argument::Text("42".into()));
        assert_eq!(Argument::from(false), Argument::Text("false".into()));
        assert_eq!(Argument::from(None::<&str>), Argument::Empty);
        assert_eq!(Argument::from(Some("x")), Argument::Text("x".into()));
    }

    #[test]
    fn test_tuple_is_list() {
        let arg = Argument::from(("a", 1, ()));
        assert_eq!(
            arg,
            Argument::List(vec![
                Argument::Text("a".into()),
                Argument::Text("1".into()),
                Argument::Empty,
            ])
        );
    }

    #[test]
    fn test_nested_collections() {
        let arg: Argument = vec![vec!["a", "b"], vec![]].into();
        assert_eq!(
            arg,
            Argument::List(vec![
                Argument::List(vec![Argument::Text("a".into()), Argument::Text("b".into())]),
                Argument::List(vec![]),
            ])
        );

        let collected: Argument = (1..=2u32).collect();
        assert_eq!(collected, Argument::from(["1", "2"]));
    }

    #[test]
    fn test_float_text() {
        let text = |arg: Argument| match arg {
            Argument::Text(text) => text,
            other => panic!("expected text, got {other:?}"),
        };
        assert_eq!(text(2.5f64.into()), "2.5");
        assert_eq!(text(3.0f64.into()), "3");
        assert_eq!(text(0.1f32.into()), "0.1");
        assert_eq!(text((-0.0f64).into()), "0");
        assert_eq!(text(f64::NAN.into()), "NaN");
        assert_eq!(text(f64::INFINITY.into()), "Infinity");
        assert_eq!(text(f32::NEG_INFINITY.into()), "-Infinity");
        assert_eq!(text(1e20f64.into()), "100000000000000000000");
        assert_eq!(text(1e21f64.into()), "1e+21");
        assert_eq!(text((-2.5e30f64).into()), "-2.5e+30");
        assert_eq!(text(0.000001f64.into()), "0.000001");
        assert_eq!(text(1.5e-7f64.into()), "1.5e-7");
    }

    #[test]
    fn test_signed_exponent() {
        assert_eq!(signed_exponent("1e21".into()), "1e+21");
        assert_eq!(signed_exponent("1e-7".into()), "1e-7");
        assert_eq!(signed_exponent("12".into()), "12");
    }
}
