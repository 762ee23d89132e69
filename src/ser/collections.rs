use core::marker::PhantomData;

use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerError, SerKind, SerResult};
use super::ints::{ensure_u32, Integral, IntegralValue};
use super::node::Node;
use crate::config::Endian;

const COUNT_WIDTH: usize = 4;

fn write_count<E: Endian>(out: &mut ByteWriter<'_>, len: usize, kind: SerKind) -> SerResult<()> {
    let count = ensure_u32(len, kind, "count")?;
    let slot = out.reserve(COUNT_WIDTH, kind, "count")?;
    count.to_wire(E::ORDER, slot);
    Ok(())
}

fn read_count<E: Endian>(
    cursor: &mut ByteReader<'_>,
    min_element_len: usize,
    kind: SerKind,
) -> SerResult<usize> {
    let bytes = cursor.read_exact(COUNT_WIDTH, kind, "count")?;
    let count = u32::from_wire(E::ORDER, bytes)
        .ok_or_else(|| SerError::invalid_msg_data(kind, "count"))?;
    cursor.check_count(count, min_element_len, kind, "count")
}

/// Length-prefixed sequence: a `u32` element count in byte order `E`
/// followed by the elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<E, N> {
    items: Vec<N>,
    _order: PhantomData<E>,
}

impl<E: Endian, N: Node> List<E, N> {
    /// Wraps the provided element nodes.
    pub fn new(items: Vec<N>) -> Self {
        Self {
            items,
            _order: PhantomData,
        }
    }

    /// Returns the element nodes.
    pub fn items(&self) -> &[N] {
        &self.items
    }

    /// Consumes the list and returns the element nodes.
    pub fn into_items(self) -> Vec<N> {
        self.items
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<E: Endian, N: Node> FromIterator<N> for List<E, N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        List::new(iter.into_iter().collect())
    }
}

impl<E: Endian, N: Node> Node for List<E, N> {
    const MIN_LENGTH: usize = COUNT_WIDTH;

    fn length(&self) -> usize {
        COUNT_WIDTH + self.items.iter().map(Node::length).sum::<usize>()
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        write_count::<E>(out, self.items.len(), SerKind::List)?;
        for item in &self.items {
            item.write(out)?;
        }
        Ok(())
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        let count = read_count::<E>(cursor, N::MIN_LENGTH, SerKind::List)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(N::read(cursor)?);
        }
        Ok(List::new(items))
    }
}

/// List of `(u64 key, value)` pairs whose keys are strictly ascending.
///
/// Reading rejects duplicate or unordered keys, so the decoded entries can be
/// collected into an ordered map without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyedList<E, N> {
    entries: Vec<(u64, N)>,
    _order: PhantomData<E>,
}

impl<E: Endian, N: Node> KeyedList<E, N> {
    /// Builds the node from entries already sorted by key.
    ///
    /// Callers pass the iteration order of an ordered map.
    pub fn from_sorted<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u64, N)>,
    {
        let entries: Vec<_> = entries.into_iter().collect();
        debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        Self {
            entries,
            _order: PhantomData,
        }
    }

    /// Returns the entries in key order.
    pub fn entries(&self) -> &[(u64, N)] {
        &self.entries
    }

    /// Consumes the node and returns the entries in key order.
    pub fn into_entries(self) -> Vec<(u64, N)> {
        self.entries
    }
}

impl<E: Endian, N: Node> Node for KeyedList<E, N> {
    const MIN_LENGTH: usize = COUNT_WIDTH;

    fn length(&self) -> usize {
        COUNT_WIDTH
            + self
                .entries
                .iter()
                .map(|(_, value)| 8 + value.length())
                .sum::<usize>()
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        write_count::<E>(out, self.entries.len(), SerKind::List)?;
        for (key, value) in &self.entries {
            Integral::<u64, E>::new(*key).write(out)?;
            value.write(out)?;
        }
        Ok(())
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        let count = read_count::<E>(cursor, 8 + N::MIN_LENGTH, SerKind::List)?;
        let mut entries: Vec<(u64, N)> = Vec::with_capacity(count);
        for _ in 0..count {
            let key = Integral::<u64, E>::read(cursor)?.value();
            if entries.last().is_some_and(|(previous, _)| *previous >= key) {
                return Err(SerError::invalid_msg_data(SerKind::List, "key order"));
            }
            entries.push((key, N::read(cursor)?));
        }
        Ok(Self {
            entries,
            _order: PhantomData,
        })
    }
}

/// Presence-flagged value: a `u8` flag (`0` absent, `1` present) followed by
/// the node when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Optional<E, N> {
    value: Option<N>,
    _order: PhantomData<E>,
}

impl<E: Endian, N: Node> Optional<E, N> {
    /// Wraps an optional node.
    pub fn new(value: Option<N>) -> Self {
        Self {
            value,
            _order: PhantomData,
        }
    }

    /// Returns the inner node, if present.
    pub fn value(&self) -> Option<&N> {
        self.value.as_ref()
    }

    /// Consumes the wrapper.
    pub fn into_value(self) -> Option<N> {
        self.value
    }
}

impl<E: Endian, N: Node> Node for Optional<E, N> {
    const MIN_LENGTH: usize = 1;

    fn length(&self) -> usize {
        1 + self.value.as_ref().map_or(0, Node::length)
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        let flag = out.reserve(1, SerKind::Optional, "flag")?;
        flag[0] = self.value.is_some() as u8;
        if let Some(inner) = &self.value {
            inner.write(out)?;
        }
        Ok(())
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        match cursor.read_array::<1>(SerKind::Optional, "flag")?[0] {
            0 => Ok(Optional::new(None)),
            1 => Ok(Optional::new(Some(N::read(cursor)?))),
            _ => Err(SerError::invalid_msg_data(SerKind::Optional, "flag")),
        }
    }
}
