use crate::{
    payload::{Boxed, Payload, downcast},
    type_key::{Assembler, TypeDescriptor, TypeShape},
};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::Hash,
};

///
/// Reify
///
/// Compile-time capture of a type's full description. Scalars get theirs
/// from `impl_payload!`; the containers below describe themselves in terms
/// of their arguments.
///

pub trait Reify: Payload + Clone + PartialEq + Sized {
    fn descriptor() -> TypeDescriptor;
}

impl<T: Reify> Reify for Option<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::parameterized::<Self>(
            TypeShape::Optional,
            vec![T::descriptor()],
            Assembler::Optional {
                present: present::<T>,
                empty: empty::<T>,
            },
        )
    }
}

impl<T: Reify> Reify for Vec<T> {
    fn descriptor() -> TypeDescriptor {
        sequence::<T, Self>(TypeShape::List)
    }
}

impl<T: Reify> Reify for VecDeque<T> {
    fn descriptor() -> TypeDescriptor {
        sequence::<T, Self>(TypeShape::Queue)
    }
}

impl<T: Reify + Ord> Reify for BTreeSet<T> {
    fn descriptor() -> TypeDescriptor {
        sequence::<T, Self>(TypeShape::Set)
    }
}

impl<T: Reify + Eq + Hash> Reify for HashSet<T> {
    fn descriptor() -> TypeDescriptor {
        sequence::<T, Self>(TypeShape::Set)
    }
}

impl<K: Reify + Ord, V: Reify> Reify for BTreeMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        map::<K, V, Self>()
    }
}

impl<K: Reify + Eq + Hash, V: Reify> Reify for HashMap<K, V> {
    fn descriptor() -> TypeDescriptor {
        map::<K, V, Self>()
    }
}

// ---- assemblers -------------------------------------------------------

fn sequence<T, C>(shape: TypeShape) -> TypeDescriptor
where
    T: Reify,
    C: Payload + FromIterator<T>,
{
    TypeDescriptor::parameterized::<C>(
        shape,
        vec![T::descriptor()],
        Assembler::Sequence {
            collect: collect::<T, C>,
        },
    )
}

fn map<K, V, M>() -> TypeDescriptor
where
    K: Reify,
    V: Reify,
    M: Payload + FromIterator<(K, V)>,
{
    TypeDescriptor::parameterized::<M>(
        TypeShape::Map,
        vec![K::descriptor(), V::descriptor()],
        Assembler::Map {
            collect: collect_entries::<K, V, M>,
        },
    )
}

fn present<T: Reify>(value: Boxed) -> Option<Boxed> {
    let value = downcast::<T>(value).ok()?;

    Some(Box::new(Some(value)))
}

fn empty<T: Reify>() -> Boxed {
    Box::new(None::<T>)
}

fn collect<T, C>(items: Vec<Boxed>) -> Option<Boxed>
where
    T: Reify,
    C: Payload + FromIterator<T>,
{
    let collection = items
        .into_iter()
        .map(|item| downcast::<T>(item).ok())
        .collect::<Option<C>>()?;

    Some(Box::new(collection))
}

fn collect_entries<K, V, M>(entries: Vec<(Boxed, Boxed)>) -> Option<Boxed>
where
    K: Reify,
    V: Reify,
    M: Payload + FromIterator<(K, V)>,
{
    let map = entries
        .into_iter()
        .map(|(key, value)| Some((downcast::<K>(key).ok()?, downcast::<V>(value).ok()?)))
        .collect::<Option<M>>()?;

    Some(Box::new(map))
}
