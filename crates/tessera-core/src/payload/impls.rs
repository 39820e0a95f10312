use crate::payload::{Number, Payload, RawView};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::Hash,
};

//
// Scalars
//

crate::impl_payload!(String, |text| RawView::Text(text.as_str()));
crate::impl_payload!(bool, |flag| RawView::Bool(*flag));
crate::impl_payload!(char, |ch| RawView::Char(*ch));

macro_rules! impl_payload_number {
    ($variant:ident, $cast:ty => $($ty:ty),* $(,)?) => {
        $(
            crate::impl_payload!($ty, |number| {
                RawView::Number(Number::$variant(<$cast>::from(*number)))
            });
        )*
    };
}

impl_payload_number!(Signed, i64 => i8, i16, i32, i64);
impl_payload_number!(Unsigned, u64 => u8, u16, u32, u64);
impl_payload_number!(Float, f64 => f32, f64);

//
// Temporal
//

crate::impl_payload!(time::Date);
crate::impl_payload!(time::OffsetDateTime);

//
// Containers
//

impl<T> Payload for Option<T>
where
    T: Payload + Clone + PartialEq,
{
    crate::__payload_common!();

    fn view(&self) -> RawView<'_> {
        RawView::Optional(self.as_ref().map(|inner| inner as &dyn Payload))
    }
}

macro_rules! impl_payload_sequence {
    ($container:ident $(, $bound:path)*) => {
        impl<T> Payload for $container<T>
        where
            T: Payload + Clone + PartialEq $(+ $bound)*,
        {
            crate::__payload_common!();

            fn view(&self) -> RawView<'_> {
                RawView::Items(self.iter().map(|item| item as &dyn Payload).collect())
            }
        }
    };
}

impl_payload_sequence!(Vec);
impl_payload_sequence!(VecDeque);
impl_payload_sequence!(BTreeSet, Ord);
impl_payload_sequence!(HashSet, Eq, Hash);

macro_rules! impl_payload_map {
    ($container:ident $(, $bound:path)*) => {
        impl<K, V> Payload for $container<K, V>
        where
            K: Payload + Clone + PartialEq $(+ $bound)*,
            V: Payload + Clone + PartialEq,
        {
            crate::__payload_common!();

            fn view(&self) -> RawView<'_> {
                RawView::Entries(
                    self.iter()
                        .map(|(key, value)| (key as &dyn Payload, value as &dyn Payload))
                        .collect(),
                )
            }
        }
    };
}

impl_payload_map!(BTreeMap, Ord);
impl_payload_map!(HashMap, Eq, Hash);
