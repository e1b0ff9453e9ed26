/// A connected endpoint on a two-wire bus, bound to one device address.
///
/// A call with an empty `read` buffer is a pure write and a call with an
/// empty `write` slice is a pure read. Supplying both performs the write and
/// the read as a single bus operation with a repeated start.
pub trait Transact {
    type Error: std::fmt::Debug;

    fn transact(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: Transact + ?Sized> Transact for &mut T {
    type Error = T::Error;

    fn transact(&mut self, write: &[u8], read: &mut [u8]) -> Result<(), Self::Error> {
        T::transact(self, write, read)
    }
}
