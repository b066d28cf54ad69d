use honggfuzz::fuzz;
use wordlength::{measure, EnglishSpeller, Speller};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 8 {
                return;
            }
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&data[..8]);
            let n = u64::from_le_bytes(bytes);

            let words = EnglishSpeller.spell(n).unwrap();
            let (spelling, len) = measure(&EnglishSpeller, n).unwrap();
            assert!(!spelling.contains(','));
            assert_eq!(len, spelling.chars().count());
            assert_eq!(words.replace(',', ""), spelling);
            assert!(spelling.is_ascii());
        });
    }
}
