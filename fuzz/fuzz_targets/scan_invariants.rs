use honggfuzz::fuzz;

use lacuna::{fletcher16, scan_bytes};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            // A small threshold keeps both classification paths hot on
            // short fuzz inputs.
            for threshold in [2u64, 64] {
                let segments = scan_bytes(data, threshold);
                assert_eq!(segments, scan_bytes(data, threshold));

                let mut prev_end = 0u64;
                for seg in &segments {
                    assert!(seg.start >= prev_end);
                    assert!(seg.end() <= data.len() as u64);
                    let section = &data[seg.start as usize..seg.end() as usize];
                    assert_eq!(seg.checksum, fletcher16(section));
                    prev_end = seg.end();
                }
            }
        });
    }
}
