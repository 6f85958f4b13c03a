use ordered_iter::{OrderedMapIterator, OrderedSetIterator};

use super::{map, set};

impl<K, V> OrderedMapIterator for map::IntoIter<K, V>
where
    K: Ord,
{
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V>
where
    K: Ord,
{
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, K, V> OrderedMapIterator for map::IterMut<'a, K, V>
where
    K: Ord,
{
    type Key = &'a K;
    type Val = &'a mut V;
}

impl<T> OrderedSetIterator for set::IntoIter<T> where T: Ord {}

impl<'a, T> OrderedSetIterator for set::Iter<'a, T> where T: Ord {}
