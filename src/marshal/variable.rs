use crate::config::{Endian, Endianness};
use crate::plonk::{ColumnType, Variable};
use crate::ser::{Bundle, Integral, IntegralValue, List};

impl IntegralValue for ColumnType {
    const WIDTH: usize = 1;

    fn to_wire(self, _order: Endianness, out: &mut [u8]) {
        out[0] = self.tag();
    }

    fn from_wire(_order: Endianness, bytes: &[u8]) -> Option<Self> {
        match bytes {
            [tag] => ColumnType::from_tag(*tag),
            _ => None,
        }
    }
}

/// (index `u64`, rotation `i32`, relative `u8`, column type `u8`).
pub type VariableNode<E> = Bundle<(
    Integral<u64, E>,
    Integral<i32, E>,
    Integral<bool, E>,
    Integral<ColumnType, E>,
)>;

/// Length-prefixed variable list.
pub type VariablesNode<E> = List<E, VariableNode<E>>;

/// Builds the node of a variable.
pub fn fill_variable<E: Endian>(var: &Variable) -> VariableNode<E> {
    Bundle((
        Integral::new(var.index),
        Integral::new(var.rotation),
        Integral::new(var.relative),
        Integral::new(var.column),
    ))
}

/// Rebuilds a variable from its node.
pub fn make_variable<E: Endian>(node: VariableNode<E>) -> Variable {
    let (index, rotation, relative, column) = node.into_fields();
    Variable::new(
        index.value(),
        rotation.value(),
        relative.value(),
        column.value(),
    )
}

/// Wraps a list of variables.
pub fn fill_variables<E: Endian>(vars: &[Variable]) -> VariablesNode<E> {
    vars.iter().map(fill_variable::<E>).collect()
}

/// Unwraps a list of variables.
pub fn make_variables<E: Endian>(node: VariablesNode<E>) -> Vec<Variable> {
    node.into_items()
        .into_iter()
        .map(make_variable::<E>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BigEndian, LittleEndian};
    use crate::ser::{decode, encode, SerError, SerKind};

    #[test]
    fn variable_layout_big_endian() {
        let var = Variable::new(5, -1, true, ColumnType::Constant);
        let bytes = encode(&fill_variable::<BigEndian>(&var)).unwrap();
        assert_eq!(
            bytes,
            [0, 0, 0, 0, 0, 0, 0, 5, 0xff, 0xff, 0xff, 0xff, 1, 2]
        );
        assert_eq!(make_variable(decode::<VariableNode<BigEndian>>(&bytes).unwrap()), var);
    }

    #[test]
    fn column_tag_out_of_range() {
        let var = Variable::witness(0, 0);
        let mut bytes = encode(&fill_variable::<LittleEndian>(&var)).unwrap();
        bytes[13] = 4;
        let err = decode::<VariableNode<LittleEndian>>(&bytes).unwrap_err();
        assert_eq!(err, SerError::invalid_msg_data(SerKind::Integral, "value"));
    }

    #[test]
    fn relative_flag_must_be_boolean() {
        let var = Variable::witness(0, 0);
        let mut bytes = encode(&fill_variable::<LittleEndian>(&var)).unwrap();
        bytes[12] = 7;
        assert!(decode::<VariableNode<LittleEndian>>(&bytes).is_err());
    }
}
