use crate::form::{Atom, Form, Marker};

macro_rules! impl_from_integer {
    (
        $($ty:ty),*
    ) => {
        $(
            impl From<$ty> for Form {
                #[inline]
                fn from(n: $ty) -> Self {
                    Form::integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, i8, i16, i32, i64);

impl From<Atom> for Form {
    #[inline]
    fn from(atom: Atom) -> Self {
        Form::Atom(atom)
    }
}

impl From<Marker> for Form {
    #[inline]
    fn from(marker: Marker) -> Self {
        Form::marker(marker)
    }
}

impl From<Vec<Form>> for Form {
    #[inline]
    fn from(elements: Vec<Form>) -> Self {
        Form::List(elements)
    }
}

impl From<&Form> for Form {
    #[inline]
    fn from(form: &Form) -> Self {
        form.clone()
    }
}
