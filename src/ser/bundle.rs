use super::cursor::{ByteReader, ByteWriter};
use super::error::SerResult;
use super::node::Node;

/// Fixed-arity ordered tuple of nodes written back to back with no prefix.
///
/// Implemented for tuples of one to six nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bundle<T>(pub T);

impl<T> Bundle<T> {
    /// Wraps a tuple of child nodes.
    pub fn new(fields: T) -> Self {
        Bundle(fields)
    }

    /// Returns the child nodes.
    pub fn fields(&self) -> &T {
        &self.0
    }

    /// Consumes the bundle and returns the child nodes.
    pub fn into_fields(self) -> T {
        self.0
    }
}

macro_rules! bundle_node {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Node),+> Node for Bundle<($($name,)+)> {
            const MIN_LENGTH: usize = 0 $(+ $name::MIN_LENGTH)+;

            fn length(&self) -> usize {
                0 $(+ self.0.$idx.length())+
            }

            fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
                $(self.0.$idx.write(out)?;)+
                Ok(())
            }

            fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
                Ok(Bundle(($($name::read(cursor)?,)+)))
            }
        }
    };
}

bundle_node!(A: 0);
bundle_node!(A: 0, B: 1);
bundle_node!(A: 0, B: 1, C: 2);
bundle_node!(A: 0, B: 1, C: 2, D: 3);
bundle_node!(A: 0, B: 1, C: 2, D: 3, G: 4);
bundle_node!(A: 0, B: 1, C: 2, D: 3, G: 4, H: 5);
