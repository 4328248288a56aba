use std::fmt;

/// The element type of a value flowing through the graph.
///
/// `DType` values are opaque tags compared with `==`; no arithmetic is
/// performed on them. "No type requested" is expressed with `Option<DType>`,
/// not with a sentinel variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DType {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl DType {
    /// Size of one element in bytes.
    pub fn size(&self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F64 | DType::I64 | DType::U64 => 8,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
            DType::I8 => write!(f, "i8"),
            DType::I16 => write!(f, "i16"),
            DType::I32 => write!(f, "i32"),
            DType::I64 => write!(f, "i64"),
            DType::U8 => write!(f, "u8"),
            DType::U16 => write!(f, "u16"),
            DType::U32 => write!(f, "u32"),
            DType::U64 => write!(f, "u64"),
        }
    }
}

/// A constant literal value tagged with its element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Const {
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

macro_rules! impl_const_from {
    ($variant: ident, $num_type: ident) => {
        impl From<$num_type> for Const {
            fn from(v: $num_type) -> Self {
                Const::$variant(v)
            }
        }
    };
}

impl_const_from!(F32, f32);
impl_const_from!(F64, f64);
impl_const_from!(I8, i8);
impl_const_from!(I16, i16);
impl_const_from!(I32, i32);
impl_const_from!(I64, i64);
impl_const_from!(U8, u8);
impl_const_from!(U16, u16);
impl_const_from!(U32, u32);
impl_const_from!(U64, u64);

impl Const {
    /// The element type of this literal.
    pub fn dtype(&self) -> DType {
        match *self {
            Const::F32(_) => DType::F32,
            Const::F64(_) => DType::F64,
            Const::I8(_) => DType::I8,
            Const::I16(_) => DType::I16,
            Const::I32(_) => DType::I32,
            Const::I64(_) => DType::I64,
            Const::U8(_) => DType::U8,
            Const::U16(_) => DType::U16,
            Const::U32(_) => DType::U32,
            Const::U64(_) => DType::U64,
        }
    }

    /// The multiplicative identity of the given element type.
    pub fn one(dtype: &DType) -> Const {
        match dtype {
            DType::F32 => Const::F32(1.0),
            DType::F64 => Const::F64(1.0),
            DType::I8 => Const::I8(1),
            DType::I16 => Const::I16(1),
            DType::I32 => Const::I32(1),
            DType::I64 => Const::I64(1),
            DType::U8 => Const::U8(1),
            DType::U16 => Const::U16(1),
            DType::U32 => Const::U32(1),
            DType::U64 => Const::U64(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DType::I8, 1)]
    #[case(DType::I16, 2)]
    #[case(DType::F32, 4)]
    #[case(DType::I32, 4)]
    #[case(DType::F64, 8)]
    #[case(DType::U64, 8)]
    fn test_size(#[case] dtype: DType, #[case] expected: usize) {
        assert_eq!(dtype.size(), expected);
    }

    #[rstest]
    #[case(DType::F32, "f32")]
    #[case(DType::I8, "i8")]
    #[case(DType::U32, "u32")]
    fn test_display(#[case] dtype: DType, #[case] expected: &str) {
        assert_eq!(dtype.to_string(), expected);
    }

    #[test]
    fn test_one_keeps_dtype() {
        for dtype in [DType::F32, DType::I8, DType::I32, DType::U16] {
            assert_eq!(Const::one(&dtype).dtype(), dtype);
        }
    }

    #[test]
    fn test_const_from() {
        assert_eq!(Const::from(1.5f32), Const::F32(1.5));
        assert_eq!(Const::from(-3i8).dtype(), DType::I8);
    }
}
