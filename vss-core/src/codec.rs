//! Serialization support: scalar and element byte helpers and a small
//! deterministic reader/writer for wire structures.

use crate::{Element, Error, Field, FieldError, Group, GroupError, Scalar, Suite};

/// The byte length of a serialized scalar, taken from the zero scalar.
pub(crate) fn scalar_len<C: Suite>() -> usize {
    <<C::Group as Group>::Field>::serialize(&<<C::Group as Group>::Field>::zero())
        .as_ref()
        .len()
}

/// The byte length of a serialized element, taken from the generator.
pub(crate) fn element_len<C: Suite>() -> usize {
    <C::Group>::serialize(&<C::Group>::generator())
        .expect("serializing the generator always works")
        .as_ref()
        .len()
}

/// Serialize a scalar.
pub(crate) fn serialize_scalar<C: Suite>(scalar: &Scalar<C>) -> Vec<u8> {
    <<C::Group as Group>::Field>::serialize(scalar).as_ref().to_vec()
}

/// Deserialize a scalar from a serialized buffer.
pub(crate) fn deserialize_scalar<C: Suite>(bytes: &[u8]) -> Result<Scalar<C>, Error> {
    let serialized: <<C::Group as Group>::Field as Field>::Serialization = bytes
        .to_vec()
        .try_into()
        .map_err(|_| FieldError::MalformedScalar)?;
    Ok(<<C::Group as Group>::Field>::deserialize(&serialized)?)
}

/// Serialize an element. Returns an error if it's the identity.
pub(crate) fn serialize_element<C: Suite>(element: &Element<C>) -> Result<Vec<u8>, Error> {
    Ok(<C::Group>::serialize(element)?.as_ref().to_vec())
}

/// Deserialize an element. Returns an error if it's malformed or is the
/// identity.
pub(crate) fn deserialize_element<C: Suite>(bytes: &[u8]) -> Result<Element<C>, Error> {
    let serialized: <C::Group as Group>::Serialization = bytes
        .to_vec()
        .try_into()
        .map_err(|_| GroupError::MalformedElement)?;
    Ok(<C::Group>::deserialize(&serialized)?)
}

/// Appends a length-prefixed byte string: a `u32` little-endian length
/// followed by the bytes themselves.
pub(crate) fn write_bytes(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buf.extend_from_slice(data);
}

/// A bounds-checked reader over a byte slice.
///
/// Every accessor fails with [`Error::MalformedDeal`] instead of panicking,
/// so decoding attacker-controlled bytes is safe.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Consumes and returns the next `n` bytes.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if n > self.buf.len() {
            return Err(Error::MalformedDeal);
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, Error> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().expect("exactly four bytes")))
    }

    /// Reads a length-prefixed byte string written by [`write_bytes`].
    pub(crate) fn read_bytes(&mut self) -> Result<&'a [u8], Error> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Ensures the whole input was consumed.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(Error::MalformedDeal)
        }
    }
}
