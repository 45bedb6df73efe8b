use crate::{core::word::Word, error::Error};

/// Width in bytes of a word-sized memory store.
pub const WORD_SIZE: usize = 32;

/// The [`Memory`] struct represents the linear memory of the VM.
///
/// Memory starts empty and grows, zero-filled, whenever a store reaches past its end. It never
/// shrinks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    /// Vector storing memory data
    pub memory: Vec<u8>,

    /// Optional cap on the number of bytes memory may grow to
    limit: Option<usize>,
}

impl Memory {
    /// Creates a new, empty, unbounded [`Memory`]
    pub fn new() -> Memory {
        Memory { memory: Vec::with_capacity(2048), limit: None }
    }

    /// Creates a new, empty [`Memory`] which refuses to grow past `limit` bytes.
    pub fn with_limit(limit: Option<usize>) -> Memory {
        Memory { limit, ..Memory::new() }
    }

    /// Gets the current size of the memory in bytes.
    ///
    /// ```
    /// use minievm_vm::core::memory::Memory;
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.size(), 0);
    /// ```
    pub fn size(&self) -> usize {
        self.memory.len()
    }

    /// The raw memory contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.memory
    }

    /// Converts a stack word into a memory offset.
    ///
    /// ```
    /// use minievm_vm::core::{memory::Memory, word::Word};
    ///
    /// assert_eq!(Memory::offset(Word::from(0x20)), Ok(0x20));
    /// assert!(Memory::offset(Word::MAX).is_err());
    /// ```
    pub fn offset(word: Word) -> Result<usize, Error> {
        usize::try_from(word).map_err(|_| Error::InvalidMemoryOffset(word))
    }

    /// Extends the memory so that `[offset, offset + size)` is addressable. New bytes are zero.
    ///
    /// ```
    /// use minievm_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.extend(4, 32).unwrap();
    /// assert_eq!(memory.size(), 36);
    ///
    /// // never shrinks
    /// memory.extend(0, 1).unwrap();
    /// assert_eq!(memory.size(), 36);
    /// ```
    pub fn extend(&mut self, offset: usize, size: usize) -> Result<(), Error> {
        let required = offset
            .checked_add(size)
            .ok_or_else(|| Error::InvalidMemoryOffset(Word::from(offset)))?;

        if required <= self.size() {
            return Ok(());
        }

        if let Some(limit) = self.limit {
            if required > limit {
                return Err(Error::MemoryLimitExceeded { required, limit });
            }
        }

        self.memory
            .try_reserve(required - self.size())
            .map_err(|_| Error::OutOfMemory { required })?;
        self.memory.resize(required, 0u8);
        Ok(())
    }

    /// Stores `value` as a 32-byte big-endian word at `offset`, growing memory to at least
    /// `offset + 32` bytes.
    ///
    /// ```
    /// use minievm_vm::core::{memory::Memory, word::Word};
    ///
    /// let mut memory = Memory::new();
    /// memory.store32(0, Word::from(0xff)).unwrap();
    /// assert_eq!(memory.size(), 32);
    /// assert_eq!(memory.read(31, 1), vec![0xff]);
    /// ```
    pub fn store32(&mut self, offset: usize, value: Word) -> Result<(), Error> {
        self.store(offset, WORD_SIZE, &value.to_be_bytes::<WORD_SIZE>())
    }

    /// Stores the least significant byte of `value` at `offset`.
    ///
    /// Memory grows by the same rule as [`Memory::store32`]: to at least `offset + 32` bytes.
    ///
    /// ```
    /// use minievm_vm::core::{memory::Memory, word::Word};
    ///
    /// let mut memory = Memory::new();
    /// memory.store8(0, Word::from(0x1234)).unwrap();
    /// assert_eq!(memory.size(), 32);
    /// assert_eq!(memory.read(0, 2), vec![0x34, 0x00]);
    /// ```
    pub fn store8(&mut self, offset: usize, value: Word) -> Result<(), Error> {
        self.extend(offset, WORD_SIZE)?;
        let byte = value.to_be_bytes::<WORD_SIZE>()[WORD_SIZE - 1];
        self.memory[offset] = byte;
        Ok(())
    }

    /// Store the given bytes in the memory at the given offset, with a fixed size.
    /// May extend the memory if necessary.
    ///
    /// Values shorter than `size` are left-padded with zeros, longer values are truncated to
    /// their first `size` bytes.
    ///
    /// ```
    /// use minievm_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.store(0, 4, &[0xff]).unwrap();
    /// assert_eq!(memory.read(0, 4), vec![0, 0, 0, 0xff]);
    /// ```
    pub fn store(&mut self, offset: usize, size: usize, value: &[u8]) -> Result<(), Error> {
        self.extend(offset, size)?;

        let target = &mut self.memory[offset..offset + size];
        if value.len() >= size {
            target.copy_from_slice(&value[..size]);
        } else {
            let padding = size - value.len();
            target[..padding].fill(0);
            target[padding..].copy_from_slice(value);
        }
        Ok(())
    }

    /// Read the given number of bytes from the memory at the given offset.
    /// If the offset + size is greater than the current size of the memory, null bytes will be
    /// appended to the value. Reading never grows memory.
    ///
    /// ```
    /// use minievm_vm::core::memory::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.store(0, 32, &[0xff]).unwrap();
    /// assert_eq!(memory.read(31, 4), vec![0xff, 0, 0, 0]);
    /// assert_eq!(memory.size(), 32);
    /// ```
    pub fn read(&self, offset: usize, size: usize) -> Vec<u8> {
        let mut value = Vec::with_capacity(size);
        if let Some(available) = self.memory.get(offset..) {
            value.extend_from_slice(&available[..available.len().min(size)]);
        }
        value.resize(size, 0u8);
        value
    }
}
