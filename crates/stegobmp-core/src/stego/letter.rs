use std::sync::OnceLock;

pub const BITS_PER_LETTER: usize = 5;

/// code of the message terminator, also the code of every unknown character
pub const TERMINATOR: u8 = 0;

const ALPHABET_SIZE: usize = 30;
const EXTRA_LETTERS: [u8; 3] = [b' ', b'.', b','];

/// Lookup tables between the 5 bit letter codes and the characters they stand for.
///
/// | code   | character   |
/// |--------|-------------|
/// | 0      | `\0`        |
/// | 1..=26 | `A` to `Z`  |
/// | 27     | space       |
/// | 28     | `.`         |
/// | 29     | `,`         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCodec {
    encoding: [u8; 128],
    decoding: [u8; ALPHABET_SIZE],
}

impl Default for LetterCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterCodec {
    pub fn new() -> Self {
        let mut encoding = [TERMINATOR; 128];
        let mut decoding = [0u8; ALPHABET_SIZE];

        let letters = (b'A'..=b'Z').chain(EXTRA_LETTERS);
        for (code, letter) in (1u8..).zip(letters) {
            encoding[letter as usize] = code;
            decoding[code as usize] = letter;
        }

        Self { encoding, decoding }
    }

    /// the tables shared by all operations of the process
    pub fn shared() -> &'static LetterCodec {
        static CODEC: OnceLock<LetterCodec> = OnceLock::new();
        CODEC.get_or_init(LetterCodec::new)
    }

    /// Characters outside the alphabet are encoded as [`TERMINATOR`].
    pub fn encode(&self, letter: u8) -> u8 {
        self.encoding
            .get(letter as usize)
            .copied()
            .unwrap_or(TERMINATOR)
    }

    /// `None` for the terminator and for the two codes without a character
    pub fn decode(&self, code: u8) -> Option<u8> {
        self.decoding
            .get(code as usize)
            .copied()
            .filter(|letter| *letter != 0)
    }

    pub fn is_encodable(&self, letter: u8) -> bool {
        self.encode(letter) != TERMINATOR
    }
}
