//! Storage seam for comfort profiles
//!
//! The engine never talks to flash, EEPROM or files itself. Targets implement
//! [`ProfileStore`] over whatever non-volatile memory they have, and the
//! façade moves profile images through it.

use heapless::Vec;

use crate::errors::{ComfortResult, SerializationError};

/// Single-slot byte storage for a profile image
pub trait ProfileStore {
    /// Copy the stored image into `buf`, returning its length
    ///
    /// An empty slot is [`SerializationError::Empty`].
    fn read(&mut self, buf: &mut [u8]) -> ComfortResult<usize>;

    /// Replace the stored image
    fn write(&mut self, bytes: &[u8]) -> ComfortResult<()>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> ComfortResult<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, bytes: &[u8]) -> ComfortResult<()> {
        (**self).write(bytes)
    }
}

/// A fixed-capacity vector is a store; capacity bounds the image size
impl<const N: usize> ProfileStore for Vec<u8, N> {
    fn read(&mut self, buf: &mut [u8]) -> ComfortResult<usize> {
        if self.is_empty() {
            return Err(SerializationError::Empty.into());
        }
        let (required, available) = (self.len(), buf.len());
        let dest = buf
            .get_mut(..required)
            .ok_or(SerializationError::BufferTooSmall { required, available })?;
        dest.copy_from_slice(self.as_slice());
        Ok(required)
    }

    fn write(&mut self, bytes: &[u8]) -> ComfortResult<()> {
        if bytes.len() > N {
            return Err(SerializationError::BufferTooSmall { required: bytes.len(), available: N }.into());
        }
        self.clear();
        self.extend_from_slice(bytes)
            .map_err(|_| SerializationError::BufferTooSmall { required: bytes.len(), available: N })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ComfortError;

    #[test]
    fn vec_store_replaces_contents() {
        let mut store: Vec<u8, 8> = Vec::new();
        let mut buf = [0u8; 8];
        assert_eq!(store.read(&mut buf), Err(ComfortError::Serialization(SerializationError::Empty)));

        store.write(&[1, 2, 3, 4]).unwrap();
        store.write(&[9, 8]).unwrap();
        assert_eq!(store.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], &[9, 8]);
    }

    #[test]
    fn vec_store_capacity_enforced() {
        let mut store: Vec<u8, 4> = Vec::new();
        assert!(store.write(&[0; 5]).is_err());

        store.write(&[1, 2, 3]).unwrap();
        let mut small = [0u8; 2];
        assert!(store.read(&mut small).is_err());
    }

    #[test]
    fn store_through_reference() {
        fn save_marker(mut store: impl ProfileStore) {
            store.write(&[42]).unwrap();
        }

        let mut store: Vec<u8, 4> = Vec::new();
        save_marker(&mut store);
        assert_eq!(store.as_slice(), &[42]);
    }
}
