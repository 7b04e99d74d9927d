use std::io::BufRead;

use log::{debug, warn};

use super::Channel;
use crate::bitmap::Position;

/// One `x y channel` group of a key, addresses one bit of the carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub x: i32,
    pub y: i32,
    pub channel: Channel,
}

impl KeyEntry {
    pub const fn pos(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Debug)]
enum KeyFault {
    Exhausted,
    Malformed(String),
    Io(std::io::Error),
}

impl From<std::io::Error> for KeyFault {
    fn from(e: std::io::Error) -> Self {
        KeyFault::Io(e)
    }
}

/// Parses key entries lazily from whitespace separated text like
///
/// ```text
/// 0 0 R
/// 12 -1 B
/// ```
///
/// The first missing or malformed entry ends the key, the reader stays exhausted afterwards.
pub struct KeyReader<R> {
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> KeyReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            exhausted: false,
        }
    }

    /// the next entry, or `None` when the key has no more valid entries
    pub fn next_entry(&mut self) -> Option<KeyEntry> {
        if self.exhausted {
            return None;
        }

        match self.scan_entry() {
            Ok(entry) => Some(entry),
            Err(fault) => {
                match fault {
                    KeyFault::Exhausted => debug!("key is exhausted"),
                    KeyFault::Malformed(reason) => warn!("key ends at a malformed entry: {reason}"),
                    KeyFault::Io(e) => warn!("key is not readable any more: {e}"),
                }
                self.exhausted = true;
                None
            }
        }
    }

    fn scan_entry(&mut self) -> Result<KeyEntry, KeyFault> {
        let x = self.scan_int()?;
        let y = self.scan_int().map_err(truncated)?;
        let channel = self.scan_channel().map_err(truncated)?;

        Ok(KeyEntry { x, y, channel })
    }

    fn scan_int(&mut self) -> Result<i32, KeyFault> {
        self.skip_whitespace()?;

        let mut negative = false;
        let mut signed = false;
        if let Some(sign @ (b'+' | b'-')) = self.peek()? {
            negative = sign == b'-';
            signed = true;
            self.reader.consume(1);
        }

        let mut value: i64 = 0;
        let mut digits = 0;
        while let Some(digit) = self.peek()?.filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit - b'0')))
                .filter(|v| *v <= i64::from(u32::MAX))
                .ok_or_else(|| KeyFault::Malformed("number is out of range".to_string()))?;
            digits += 1;
            self.reader.consume(1);
        }

        if digits == 0 {
            return match self.peek()? {
                None if !signed => Err(KeyFault::Exhausted),
                None => Err(KeyFault::Malformed("sign without a number".to_string())),
                Some(other) => Err(KeyFault::Malformed(format!(
                    "expected a number, found {:?}",
                    other as char
                ))),
            };
        }

        let value = if negative { -value } else { value };
        i32::try_from(value).map_err(|_| KeyFault::Malformed(format!("{value} is out of range")))
    }

    fn scan_channel(&mut self) -> Result<Channel, KeyFault> {
        self.skip_whitespace()?;
        let Some(letter) = self.peek()? else {
            return Err(KeyFault::Exhausted);
        };
        self.reader.consume(1);

        Channel::try_from(letter as char)
            .map_err(|c| KeyFault::Malformed(format!("unknown channel {c:?}")))
    }

    fn skip_whitespace(&mut self) -> std::io::Result<()> {
        while let Some(b) = self.peek()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.reader.consume(1);
        }
        Ok(())
    }

    fn peek(&mut self) -> std::io::Result<Option<u8>> {
        Ok(self.reader.fill_buf()?.first().copied())
    }
}

/// running out of key in the middle of an entry is not a clean end
fn truncated(fault: KeyFault) -> KeyFault {
    match fault {
        KeyFault::Exhausted => KeyFault::Malformed("incomplete entry".to_string()),
        other => other,
    }
}

impl<R: BufRead> Iterator for KeyReader<R> {
    type Item = KeyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry()
    }
}
