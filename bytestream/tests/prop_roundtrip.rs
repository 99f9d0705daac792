use bytestream::{
    decode_zigzag32, deinterleave_bits1, deinterleave_bits2, encode_zigzag32, interleave_bits,
    ByteReader, ByteWriter, WideInt,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    U8(u8),
    U32(u32),
    F64(f64),
    VarU32(u32),
    VarU64(u64),
    Bytes(Vec<u8>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::U8),
        any::<u32>().prop_map(Op::U32),
        any::<f64>().prop_map(Op::F64),
        any::<u32>().prop_map(Op::VarU32),
        any::<u64>().prop_map(Op::VarU64),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Op::Bytes),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut writer = ByteWriter::new();

        for op in &ops {
            match op {
                Op::U8(v) => writer.write_u8(*v),
                Op::U32(v) => writer.write_u32_le(*v),
                Op::F64(v) => writer.write_f64_le(*v),
                Op::VarU32(v) => writer.write_varu32(*v),
                Op::VarU64(v) => writer.write_varu64(WideInt::new(*v)),
                Op::Bytes(v) => writer.write_bytes(v),
            }
        }

        let bytes = writer.finish();
        let mut reader = ByteReader::new(&bytes);

        for op in &ops {
            match op {
                Op::U8(v) => prop_assert_eq!(reader.read_u8().unwrap(), *v),
                Op::U32(v) => prop_assert_eq!(reader.read_u32_le().unwrap(), *v),
                Op::F64(v) => {
                    prop_assert_eq!(reader.read_f64_le().unwrap().to_bits(), v.to_bits());
                }
                Op::VarU32(v) => prop_assert_eq!(reader.read_varu32().unwrap(), *v),
                Op::VarU64(v) => prop_assert_eq!(reader.read_varu64().unwrap().raw(), *v),
                Op::Bytes(v) => prop_assert_eq!(reader.read_bytes(v.len()).unwrap(), v.as_slice()),
            }
        }
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_zigzag_bijection(n in any::<i32>(), u in any::<u32>()) {
        prop_assert_eq!(decode_zigzag32(encode_zigzag32(n)), n);
        prop_assert_eq!(encode_zigzag32(decode_zigzag32(u)), u);
    }

    #[test]
    fn prop_interleave_bijection(a in any::<u32>(), b in any::<u32>()) {
        let wide = interleave_bits(a, b);
        prop_assert_eq!(deinterleave_bits1(wide), a);
        prop_assert_eq!(deinterleave_bits2(wide), b);
    }

    #[test]
    fn prop_varint_length_matches_significant_bits(v in any::<u64>()) {
        let mut writer = ByteWriter::new();
        writer.write_varu64(WideInt::new(v));
        let significant = 64 - v.leading_zeros() as usize;
        let expected = significant.div_ceil(7).max(1);
        prop_assert_eq!(writer.len(), expected);
    }
}
