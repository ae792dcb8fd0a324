use quickcheck::quickcheck;

use lacuna::{fletcher16, Fletcher16};

/// Straightforward wide-integer rendition used as a reference.
fn reference_fletcher(data: &[u8]) -> u16 {
    let mut low: u32 = 0;
    let mut high: u32 = 0;
    for &b in data {
        low = (low + b as u32) % 255;
        high = (high + low) % 255;
    }
    (high * 256 + low) as u16
}

quickcheck! {
    fn incremental_matches_reference(data: Vec<u8>) -> bool {
        fletcher16(&data) == reference_fletcher(&data)
    }

    fn limbs_stay_bounded(data: Vec<u8>) -> bool {
        let v = fletcher16(&data);
        (v >> 8) <= 254 && (v & 0xFF) <= 254
    }

    fn concatenation_continues_the_stream(a: Vec<u8>, b: Vec<u8>) -> bool {
        let mut sum = Fletcher16::new();
        for &x in &a {
            sum.fold(x);
        }
        for &x in &b {
            sum.fold(x);
        }
        let whole: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
        sum.value() == fletcher16(&whole)
    }

    fn swapping_adjacent_distinct_bytes_changes_the_sum(data: Vec<u8>) -> bool {
        // Order dependence. 0 and 255 are congruent mod 255 and fold
        // identically, so only pairs distinct mod 255 must differ.
        // Vacuously true when no such adjacent pair exists.
        let pos = data
            .windows(2)
            .position(|w| u16::from(w[0]) % 255 != u16::from(w[1]) % 255);
        match pos {
            Some(i) => {
                let mut swapped = data.clone();
                swapped.swap(i, i + 1);
                fletcher16(&swapped) != fletcher16(&data)
            }
            None => true,
        }
    }
}
