#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 6;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let len = usize::from(data[idx.saturating_sub(1)] % 32);
                let _ = reader.read_bytes(len);
            }
            2 => {
                let _ = reader.read_u32_le();
            }
            3 => {
                let _ = reader.read_f64_le();
            }
            4 => {
                let _ = reader.read_varu32();
            }
            _ => {
                if let Ok(wide) = reader.read_varu64() {
                    let _ = wide.to_unsigned_int32();
                }
            }
        }
    }
});
